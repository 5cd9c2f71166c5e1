use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dex_lib::{DesignProperties, DexError};

use crate::cli::OutputFormat;

/// Write extraction output in the requested format.
pub fn write_output(
    body: &DesignProperties,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the fatal exit code.
pub fn render_error(err: DexError, output: Option<PathBuf>) -> ExitCode {
    let payload = serde_json::json!({ "error": err.to_payload() });
    let content = serde_json::to_string(&payload).unwrap_or_else(|_| "{\"error\":{}}".into());
    if let Some(path) = output {
        if let Err(write_err) = std::fs::write(&path, &content) {
            eprintln!("Failed to write error output: {}", write_err);
            println!("{content}");
        }
    } else {
        println!("{content}");
    }
    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &DesignProperties,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &DesignProperties, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"error\":{}}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format extraction results for human consumption in a terminal.
pub fn format_pretty(body: &DesignProperties, colorize: bool) -> String {
    let mut buf = String::new();
    let header = color("[DEX]", "36", colorize);
    writeln!(
        buf,
        "{} Screen type: {} ({} elements)",
        header,
        body.screen_type,
        body.elements.len()
    )
    .ok();

    if let Some(dims) = &body.dimensions {
        writeln!(buf, "Dimensions: {}x{}", dims.width, dims.height).ok();
    }

    if !body.colors.is_empty() {
        writeln!(buf, "Colors:").ok();
        for entry in body.colors.iter().take(8) {
            writeln!(buf, "- {:16} {}", entry.property, entry.value).ok();
        }
        if body.colors.len() > 8 {
            writeln!(buf, "- ... and {} more", body.colors.len() - 8).ok();
        }
    }

    if !body.form_fields.is_empty() {
        writeln!(buf, "Form fields:").ok();
        for field in &body.form_fields {
            let label = field.label.as_deref().unwrap_or("-");
            writeln!(
                buf,
                "- {:10} {} (label: {})",
                field.field_type.as_str(),
                field.name,
                label
            )
            .ok();
        }
    }

    writeln!(
        buf,
        "Typography entries: {}, spacing relationships: {}",
        body.typography.len(),
        body.spacing_relationships.len()
    )
    .ok();

    buf
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_lib::{extract_from_nodes, Config, DexError};

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let code = render_error(DexError::Config("boom".to_string()), None);
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn format_pretty_includes_screen_type_and_counts() {
        let node = serde_json::from_value(serde_json::json!({
            "type": "FRAME",
            "name": "Login",
            "absoluteBoundingBox": { "x": 0.0, "y": 0.0, "width": 375.0, "height": 812.0 },
            "children": [{
                "type": "RECTANGLE",
                "name": "Email input",
                "absoluteBoundingBox": { "x": 24.0, "y": 100.0, "width": 327.0, "height": 44.0 },
                "fills": [{ "type": "SOLID", "color": { "r": 1.0, "g": 1.0, "b": 1.0 } }]
            }]
        }))
        .expect("node");
        let properties = extract_from_nodes(&[node], &Config::default());

        let pretty = format_pretty(&properties, false);
        assert!(pretty.contains("[DEX] Screen type: login"));
        assert!(pretty.contains("Dimensions: 375x812"));
        assert!(pretty.contains("Form fields:"));
        assert!(pretty.contains("Email input"));
        assert!(pretty.contains("primaryColor"));
    }
}
