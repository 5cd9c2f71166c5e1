use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dex")]
#[command(
    version,
    about = "Design Extraction - Pull design properties out of exported document trees",
    long_about = "Design Extraction (DEX)\n\nReads an exported design-document tree (Figma-style JSON) and produces a\nstructured summary: elements with normalized coordinates, deduplicated\ncolors and typography, detected form fields with labels and placeholders,\nspacing relationships, and a screen-type classification.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) overriding detection thresholds"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract design properties from a document JSON file
    Extract {
        #[arg(help = "Input JSON file, or '-' to read from stdin")]
        input: String,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, OutputFormat};
    use clap::Parser;

    #[test]
    fn extract_command_uses_defaults() {
        let cli = Cli::parse_from(["dex", "extract", "design.json"]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());

        match cli.command {
            Commands::Extract {
                input,
                output,
                format,
            } => {
                assert_eq!(input, "design.json");
                assert!(output.is_none());
                assert!(matches!(format, OutputFormat::Json));
            }
        }
    }

    #[test]
    fn extract_command_respects_overrides() {
        let cli = Cli::parse_from([
            "dex",
            "--verbose",
            "--config",
            "dex.toml",
            "extract",
            "-",
            "--format",
            "pretty",
            "--output",
            "report.json",
        ]);

        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("dex.toml")));

        match cli.command {
            Commands::Extract {
                input,
                output,
                format,
            } => {
                assert_eq!(input, "-");
                assert!(matches!(format, OutputFormat::Pretty));
                assert_eq!(output.as_deref(), Some(std::path::Path::new("report.json")));
            }
        }
    }
}
