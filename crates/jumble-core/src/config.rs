use crate::constants::defaults;
use crate::error::{ConfigError, ConfigResult};

/// Process-wide generation limits.
///
/// Built once at startup and shared read-only; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    max_collection_size: usize,
    max_array_size: usize,
    max_depth_limit: u32,
}

impl GenerationConfig {
    /// Build a config, rejecting zero limits.
    pub fn new(
        max_collection_size: usize,
        max_array_size: usize,
        max_depth_limit: u32,
    ) -> ConfigResult<Self> {
        if max_collection_size == 0 {
            return Err(ConfigError::NonPositive { field: "max_collection_size" });
        }
        if max_array_size == 0 {
            return Err(ConfigError::NonPositive { field: "max_array_size" });
        }
        if max_depth_limit == 0 {
            return Err(ConfigError::NonPositive { field: "max_depth_limit" });
        }
        Ok(Self { max_collection_size, max_array_size, max_depth_limit })
    }

    /// Most properties an object, or elements a nested array, may hold
    pub fn max_collection_size(&self) -> usize {
        self.max_collection_size
    }

    /// Most top-level elements a single response may hold
    pub fn max_array_size(&self) -> usize {
        self.max_array_size
    }

    /// Highest `maxDepth` a request may ask for
    pub fn max_depth_limit(&self) -> u32 {
        self.max_depth_limit
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_collection_size: defaults::MAX_COLLECTION_SIZE,
            max_array_size: defaults::MAX_ARRAY_SIZE,
            max_depth_limit: defaults::MAX_DEPTH_LIMIT,
        }
    }
}
