//! # Configuration Module
//!
//! This module provides project-level defaults for license-header: the
//! license, copyright holder and project name used to generate the reference
//! header, the wrap width, which files a recursive walk visits, and comment
//! marker overrides.
//!
//! Configuration is read from a `.license-header.toml` file in the working
//! directory, or from the path in the `LICENSE_HEADER_CONFIG` environment
//! variable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::spdx::LicenseId;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".license-header.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "LICENSE_HEADER_CONFIG";

/// Extensions visited by a recursive walk when nothing else is configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["go", "rs"];

/// Main configuration struct.
///
/// Every field is optional; command line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  /// SPDX identifier of the project license.
  #[serde(default)]
  pub spdx: Option<String>,

  /// Copyright holder.
  #[serde(default)]
  pub copyright: Option<String>,

  /// Project name.
  #[serde(default)]
  pub project: Option<String>,

  /// Wrap width of the reference header.
  #[serde(default)]
  pub width: Option<usize>,

  /// Extensions visited by a recursive walk, without the leading dot.
  #[serde(default)]
  pub extensions: Option<Vec<String>>,

  /// Glob patterns of paths to skip during a recursive walk.
  #[serde(default)]
  pub exclude: Vec<String>,

  /// Comment marker overrides keyed by extension (e.g. `xyz = "##"`).
  #[serde(default, rename = "comment-markers")]
  pub comment_markers: HashMap<String, String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value is present but unusable.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::parse(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })
  }

  /// Parse and validate configuration from TOML text.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;

    config.validate()?;

    Ok(config.normalize())
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - `spdx` names a supported license
  /// - `width` is at least 1
  /// - Markers are non-empty
  /// - Extensions don't include the leading dot
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref spdx) = self.spdx {
      spdx.parse::<LicenseId>().map_err(|e| ConfigError::InvalidValue {
        key: "spdx".to_string(),
        message: e.to_string(),
      })?;
    }

    if self.width == Some(0) {
      return Err(ConfigError::InvalidValue {
        key: "width".to_string(),
        message: "width must be at least 1".to_string(),
      });
    }

    for (ext, marker) in &self.comment_markers {
      if marker.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
          key: format!("comment-markers.{ext}"),
          message: "marker cannot be empty".to_string(),
        });
      }
    }

    let extensions = self.extensions.iter().flatten();
    for ext in extensions.chain(self.comment_markers.keys()) {
      if ext.starts_with('.') {
        return Err(ConfigError::InvalidValue {
          key: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
    }

    for pattern in &self.exclude {
      glob::Pattern::new(pattern).map_err(|e| ConfigError::InvalidValue {
        key: format!("exclude ({pattern})"),
        message: e.to_string(),
      })?;
    }

    Ok(())
  }

  /// Lowercase extension keys so lookups are case-insensitive.
  fn normalize(self) -> Self {
    let comment_markers = self
      .comment_markers
      .into_iter()
      .map(|(k, v)| (k.to_lowercase(), v))
      .collect();

    let extensions = self
      .extensions
      .map(|exts| exts.into_iter().map(|ext| ext.to_lowercase()).collect());

    Self {
      comment_markers,
      extensions,
      ..self
    }
  }

  /// The configured walk extensions, or [`DEFAULT_EXTENSIONS`].
  pub fn walk_extensions(&self) -> Vec<String> {
    match self.extensions {
      Some(ref exts) => exts.clone(),
      None => DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `LICENSE_HEADER_CONFIG` environment variable
/// 3. `.license-header.toml` in `root`
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let local_config = root.join(DEFAULT_CONFIG_FILENAME);
  if local_config.is_file() {
    verbose_log!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `Ok(None)` when discovery is disabled or no file exists.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_valid_config() {
    let config_content = concat!(
      "spdx = \"LGPL-3.0-or-later\"\n",
      "copyright = \"Quint Daenen\"\n",
      "project = \"demo\"\n",
      "width = 60\n",
      "extensions = [\"GO\", \"py\"]\n",
      "exclude = [\"vendor/**\"]\n",
      "\n",
      "[comment-markers]\n",
      "XYZ = \"##\"\n",
    );

    let config = Config::parse(config_content).expect("valid config should parse");

    assert_eq!(config.spdx.as_deref(), Some("LGPL-3.0-or-later"));
    assert_eq!(config.copyright.as_deref(), Some("Quint Daenen"));
    assert_eq!(config.project.as_deref(), Some("demo"));
    assert_eq!(config.width, Some(60));
    assert_eq!(config.walk_extensions(), vec!["go", "py"]);
    assert_eq!(config.exclude, vec!["vendor/**"]);
    assert_eq!(config.comment_markers.get("xyz").map(String::as_str), Some("##"));
  }

  #[test]
  fn test_parse_empty_config() {
    let config = Config::parse("").expect("empty config should parse");

    assert!(config.spdx.is_none());
    assert!(config.comment_markers.is_empty());
    assert_eq!(config.walk_extensions(), vec!["go", "rs"]);
  }

  #[test]
  fn test_validate_unknown_license() {
    let err = Config::parse("spdx = \"MIT\"").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "spdx"));
  }

  #[test]
  fn test_validate_zero_width() {
    let err = Config::parse("width = 0").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "width"));
  }

  #[test]
  fn test_validate_empty_marker() {
    let err = Config::parse("[comment-markers]\nrs = \" \"").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
  }

  #[test]
  fn test_validate_leading_dot() {
    let err = Config::parse("extensions = [\".rs\"]").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
  }

  #[test]
  fn test_validate_bad_glob() {
    let err = Config::parse("exclude = [\"[\"]").expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
  }

  #[test]
  fn test_unknown_key_is_rejected() {
    let err = Config::parse("colour = true").expect_err("should fail");
    assert!(matches!(err, ConfigError::ParseError { .. }));
  }

  #[test]
  fn test_load_config_discovery() -> Result<()> {
    let temp_dir = TempDir::new()?;
    assert!(load_config(None, temp_dir.path(), false)?.is_none());

    std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "project = \"demo\"\n")?;
    let config = load_config(None, temp_dir.path(), false)?.expect("config should be found");
    assert_eq!(config.project.as_deref(), Some("demo"));

    assert!(load_config(None, temp_dir.path(), true)?.is_none());
    Ok(())
  }

  #[test]
  fn test_load_config_explicit_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "width = 40\n")?;

    let config = load_config(Some(&path), Path::new("/nonexistent"), false)?.expect("config should be found");
    assert_eq!(config.width, Some(40));

    let missing = temp_dir.path().join("missing.toml");
    assert!(load_config(Some(&missing), temp_dir.path(), false)?.is_none());
    Ok(())
  }

  #[test]
  fn test_load_config_parse_error_names_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILENAME);
    std::fs::write(&path, "width = \"wide\"\n")?;

    let err = Config::load(&path).expect_err("should fail");
    assert!(err.to_string().contains(DEFAULT_CONFIG_FILENAME));
    Ok(())
  }
}
