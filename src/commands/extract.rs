use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dex_lib::{extract_design_properties, Config, DexError};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};

/// Run the extract command.
pub fn run_extract(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: String,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, output.clone()),
    };
    if verbose {
        log_effective_config(config_path.as_deref(), &config);
    }

    let raw = match read_input(&input) {
        Ok(raw) => raw,
        Err(err) => return render_error(err, output.clone()),
    };

    if verbose {
        eprintln!("Parsing document ({} bytes)\u{2026}", raw.len());
    }
    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => return render_error(DexError::Serialization(err), output.clone()),
    };

    let properties = match extract_design_properties(value, &config) {
        Ok(properties) => properties,
        Err(err) => return render_error(err, output.clone()),
    };
    if verbose {
        eprintln!(
            "Extracted {} elements, {} form fields, screen type {}",
            properties.elements.len(),
            properties.form_fields.len(),
            properties.screen_type
        );
    }

    if let Err(err) = write_output(&properties, format, output.clone()) {
        return render_error(DexError::Config(err.to_string()), output);
    }
    ExitCode::SUCCESS
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/dex/config.toml > defaults
fn load_config(path: Option<&Path>) -> Result<Config, DexError> {
    let cfg = Config::load(path)?;
    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        DexError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Read the document from a file, or stdin when the input is `-`.
fn read_input(input: &str) -> Result<String, DexError> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

/// Log effective config to stderr (verbose mode).
fn log_effective_config(config_path: Option<&Path>, config: &Config) {
    let config_source = config_path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "defaults/built-in".to_string());
    eprintln!(
        "Effective config (source: {}): label radius {:.1}px, row band {:.1}px, spacing threshold {:.1}px",
        config_source,
        config.label_search_radius,
        config.label_row_band,
        config.spacing_threshold
    );
}
