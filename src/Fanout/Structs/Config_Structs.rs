// Construction parameters for a fanout writer

use serde::Deserialize;
use std::path::Path;

/// Configuration of a [`FanoutWriter`](crate::Fanout::FanoutWriter).
///
/// Immutable once the writer is built.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FanoutConfig {
    /// Bytes the buffer holds before the first write.
    pub initial_bytes: Vec<u8>,
    /// Upper bound on retained bytes. `0` means unbounded.
    pub limit: usize,
    /// New readers start at the oldest retained byte instead of the tail.
    pub read_from_start: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

impl FanoutConfig {
    /// Load a configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&toml_str)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn is_bounded(&self) -> bool {
        self.limit > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = FanoutConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, FanoutConfig::default());
        assert!(!cfg.is_bounded());
    }

    #[test]
    fn parses_all_keys() {
        let cfg = FanoutConfig::from_toml_str(
            r#"
            initial_bytes = [1, 2, 3]
            limit = 6
            read_from_start = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.initial_bytes, vec![1, 2, 3]);
        assert_eq!(cfg.limit, 6);
        assert!(cfg.read_from_start);
    }

    #[test]
    fn rejects_negative_limit() {
        let err = FanoutConfig::from_toml_str("limit = -1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FanoutConfig::load("/nonexistent/dmxp_fanout.toml").unwrap_err();
        match err {
            ConfigError::Read { path, .. } => assert!(path.ends_with("dmxp_fanout.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
