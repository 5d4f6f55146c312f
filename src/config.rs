//! Configuration for an ingestion run
//!
//! Centralized configuration with sensible defaults. The adapter variant
//! is fixed once per run; per-row calls never consult configuration.

use tracing::debug;

use crate::adapter::KeyAdapter;
use crate::buffer::KeyBuf;

/// Key-encoding configuration for one ingestion run
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether duplicate user keys must remain distinguishable as
    /// separate storage entries (selects the DupDetect adapter).
    pub duplicate_detection: bool,

    /// Initial capacity of destination buffers handed out by
    /// [`Config::key_buf`], so steady state starts allocation-free.
    pub key_buf_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duplicate_detection: false,
            key_buf_capacity: 4096,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Select the key adapter for this run.
    pub fn key_adapter(&self) -> KeyAdapter {
        let adapter = if self.duplicate_detection {
            KeyAdapter::DupDetect
        } else {
            KeyAdapter::Noop
        };
        debug!(
            duplicate_detection = self.duplicate_detection,
            ?adapter,
            "selected key adapter"
        );
        adapter
    }

    /// Pre-sized destination buffer for the per-row hot path.
    pub fn key_buf(&self) -> KeyBuf {
        KeyBuf::with_capacity(self.key_buf_capacity)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable duplicate-key detection
    pub fn duplicate_detection(mut self, enabled: bool) -> Self {
        self.config.duplicate_detection = enabled;
        self
    }

    /// Set the initial destination-buffer capacity (in bytes)
    pub fn key_buf_capacity(mut self, capacity: usize) -> Self {
        self.config.key_buf_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
