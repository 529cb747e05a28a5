//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$EMLEXTRACT_CONFIG` (environment variable)
//! 2. `~/.config/emlextract/config.toml` (Linux/macOS)
//!    `%APPDATA%\emlextract\config.toml` (Windows)
//! 3. Built-in defaults
//!
//! A missing or malformed file is never fatal; defaults apply.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Extraction defaults.
    pub extract: ExtractConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

/// Extraction defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Default output directory when `-o/--outputdir` is not given.
    /// `None` means the current working directory.
    pub default_output_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    if let Some(path) = config_file_path() {
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(cfg) => {
                        tracing::info!(path = %path.display(), "Loaded config");
                        return cfg;
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Failed to parse config, using defaults"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to read config file, using defaults"
                    );
                }
            }
        }
    }
    Config::default()
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    // 1. Environment variable override
    if let Ok(env_path) = std::env::var("EMLEXTRACT_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    // 2. Standard config directory
    dirs::config_dir().map(|d| d.join("emlextract").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.general.log_level, "warn");
        assert!(cfg.extract.default_output_dir.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let partial = r#"
[extract]
default_output_dir = "/tmp/attachments"
"#;
        let cfg: Config = toml::from_str(partial).expect("parse partial");
        assert_eq!(
            cfg.extract.default_output_dir.as_deref(),
            Some(std::path::Path::new("/tmp/attachments"))
        );
        // Other fields use defaults
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let cfg: Config = toml::from_str("[general]\ntheme = \"dark\"\n").expect("parse");
        assert_eq!(cfg.general.log_level, "warn");
    }
}
