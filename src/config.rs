use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DexError, Result};

/// Extraction thresholds, loadable from a TOML file.
///
/// Every field is optional in the file; missing fields keep their defaults,
/// so a config file only needs to name the values it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Maximum distance (px) from a field's origin at which a text node can
    /// still be picked as its label.
    pub label_search_radius: f64,
    /// Vertical band (px) within which a text node to the left of a field
    /// counts as being on the same row.
    pub label_row_band: f64,
    /// Gap (px) under which two elements are considered adjacent.
    pub spacing_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label_search_radius: 50.0,
            label_row_band: 20.0,
            spacing_threshold: 100.0,
        }
    }
}

impl Config {
    /// Load config from a TOML file, central config, or return defaults.
    /// Priority: explicit path > ~/.config/dex/config.toml > defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::central_config_path().filter(|p| p.exists()),
        };

        let Some(file) = candidate else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(&file)?;
        let cfg: Config = toml::from_str(&raw)
            .map_err(|e| DexError::Config(format!("Failed to parse {}: {}", file.display(), e)))?;
        Ok(cfg)
    }

    /// Default per-user config location (`~/.config/dex/config.toml`).
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config").join("dex").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.label_search_radius <= 0.0 {
            return Err(DexError::Config(
                "label-search-radius must be positive".to_string(),
            ));
        }
        if self.label_row_band < 0.0 {
            return Err(DexError::Config(
                "label-row-band must not be negative".to_string(),
            ));
        }
        if self.spacing_threshold <= 0.0 {
            return Err(DexError::Config(
                "spacing-threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::io::Write;

    #[test]
    fn default_values_match_expected() {
        let cfg = Config::default();

        assert!((cfg.label_search_radius - 50.0).abs() < f64::EPSILON);
        assert!((cfg.label_row_band - 20.0).abs() < f64::EPSILON);
        assert!((cfg.spacing_threshold - 100.0).abs() < f64::EPSILON);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "spacing-threshold = 64.0").expect("write");

        let cfg = Config::load(Some(file.path())).expect("load");
        assert!((cfg.spacing_threshold - 64.0).abs() < f64::EPSILON);
        assert!((cfg.label_search_radius - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "spacing-threshold = \"fast\"").expect("write");

        let err = Config::load(Some(file.path())).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn validate_rejects_non_positive_thresholds() {
        let cfg = Config {
            spacing_threshold: 0.0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = Config {
            label_search_radius: -1.0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
