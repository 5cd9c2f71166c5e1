mod cli;
mod commands;
mod formatting;

use std::process::ExitCode;

use cli::Commands;
use commands::run_extract;

fn main() -> ExitCode {
    let args = cli::parse();

    match args.command {
        Commands::Extract {
            input,
            output,
            format,
        } => run_extract(args.config, args.verbose, input, output, format),
    }
}
