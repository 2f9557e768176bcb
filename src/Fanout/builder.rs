use super::Structs::Config_Structs::{ConfigError, FanoutConfig};
use super::FanoutWriter;
use std::path::Path;

pub struct FanoutBuilder {
    config: FanoutConfig,
}

impl Default for FanoutBuilder {
    fn default() -> Self {
        Self {
            config: FanoutConfig::default(), // unbounded, tail readers
        }
    }
}

impl FanoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: FanoutConfig) -> Self {
        Self { config }
    }

    /// Start from a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        FanoutConfig::load(path).map(Self::from_config)
    }

    /// Cap the retained bytes. `0` removes the cap.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn with_read_from_start(mut self, read_from_start: bool) -> Self {
        self.config.read_from_start = read_from_start;
        self
    }

    /// Seed the buffer. Copied, so later changes to the caller's bytes are not seen.
    pub fn with_initial_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.config.initial_bytes = bytes.as_ref().to_vec();
        self
    }

    pub fn build(self) -> FanoutWriter {
        FanoutWriter::new(self.config)
    }
}
