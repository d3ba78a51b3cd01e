//! Board configuration.
//!
//! Every field has a default, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! edit_policy = "author_only"
//! channel_capacity = 64
//!
//! [log]
//! level = "debug"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Who may edit a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Any editor with a valid request.
    #[default]
    Anyone,
    /// Only the post's author (`created_by`).
    AuthorOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset, in `EnvFilter` syntax.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Runtime settings for the board, injected into the post actor as its context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub edit_policy: EditPolicy,
    /// Pending requests the post actor buffers before callers wait. 0 is treated as 1.
    pub channel_capacity: usize,
    pub log: LogConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            edit_policy: EditPolicy::default(),
            channel_capacity: 32,
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error opening configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error parsing configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl BoardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, BoardConfig::default());
        assert_eq!(cfg.edit_policy, EditPolicy::Anyone);
        assert_eq!(cfg.channel_capacity, 32);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_full_config() {
        let cfg = BoardConfig::from_toml_str(
            r#"
            edit_policy = "author_only"
            channel_capacity = 8

            [log]
            level = "post_board=debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.edit_policy, EditPolicy::AuthorOnly);
        assert_eq!(cfg.channel_capacity, 8);
        assert_eq!(cfg.log.level, "post_board=debug");
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let err = BoardConfig::from_toml_str(r#"edit_policy = "moderators""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_capacity_is_accepted() {
        let cfg = BoardConfig::from_toml_str("channel_capacity = 0").unwrap();
        assert_eq!(cfg.channel_capacity, 0);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = BoardConfig::load("/nonexistent/board.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/board.toml"));
    }
}
