use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Tuning knobs handed to the embedded `sled` database on open
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Page cache size in bytes
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// Background flush interval; `None` disables periodic flushing
    #[serde(default = "default_flush_every_ms")]
    pub flush_every_ms: Option<u64>,

    #[serde(default = "default_use_compression")]
    pub use_compression: bool,

    #[serde(default)]
    pub mode: StoreMode,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cache_capacity: default_cache_capacity(),
            flush_every_ms: default_flush_every_ms(),
            use_compression: default_use_compression(),
            mode: StoreMode::default(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(Error::Config(ConfigError::Message(
                "storage.cache_capacity must be greater than 0".into(),
            )));
        }

        if self.flush_every_ms == Some(0) {
            return Err(Error::Config(ConfigError::Message(
                "storage.flush_every_ms must be greater than 0 when set".into(),
            )));
        }

        Ok(())
    }
}

/// Mirrors `sled::Mode`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreMode {
    #[default]
    LowSpace,
    HighThroughput,
}

impl From<StoreMode> for sled::Mode {
    fn from(mode: StoreMode) -> Self {
        match mode {
            StoreMode::LowSpace => sled::Mode::LowSpace,
            StoreMode::HighThroughput => sled::Mode::HighThroughput,
        }
    }
}

fn default_cache_capacity() -> u64 {
    64 * 1024 * 1024 //64MB
}
fn default_flush_every_ms() -> Option<u64> {
    Some(500)
}
fn default_use_compression() -> bool {
    false
}
