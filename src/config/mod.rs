use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log level used when `RUST_LOG` is not set, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

/// Command-line configuration
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// Properties file used as the defaults store for every command
  #[serde(default)]
  pub defaults: Option<PathBuf>,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

    toml::from_str(&config_str)
      .with_context(|| format!("Failed to parse config file '{}'", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_config() {
    let config_str = r#"
defaults = "/etc/app/defaults.properties"

[log]
level = "debug"
"#;

    let config: Config = toml::from_str(config_str).unwrap();
    assert_eq!(
      config.defaults,
      Some(PathBuf::from("/etc/app/defaults.properties"))
    );
    assert_eq!(config.log.level, "debug");
  }

  #[test]
  fn test_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.defaults, None);
    assert_eq!(config.log.level, "info");
  }

  #[test]
  fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("properties.toml");
    fs::write(&path, "[log]\nlevel = \"warn\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.log.level, "warn");
  }

  #[test]
  fn test_from_file_errors_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = Config::from_file(&missing).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "defaults = [").unwrap();
    let err = Config::from_file(&broken).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
  }
}
