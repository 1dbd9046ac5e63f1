use jumble_core::constants::defaults;
use jumble_core::{GenerationConfig, parse_int_prefix};
use tracing::{info, warn};

/// Environment variable names read at startup
pub mod env_keys {
    pub const MAX_COLLECTION_SIZE: &str = "MAX_COLLECTION_SIZE";
    pub const MAX_ARRAY_SIZE: &str = "MAX_ARRAY_SIZE";
    pub const MAX_DEPTH_LIMIT: &str = "MAX_DEPTH_LIMIT";
    pub const HOST: &str = "JUMBLE_HOST";
    pub const PORT: &str = "JUMBLE_PORT";
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3010;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
    }
}

/// Everything the service needs at startup. Loaded once, never mutated after
/// the server starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub generation: GenerationConfig,
}

impl ServiceConfig {
    /// Load configuration from the process environment, including anything a
    /// `.env` file put there at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Missing or unusable values fall back
    /// to defaults with a warning; loading never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_collection_size =
            positive(&lookup, env_keys::MAX_COLLECTION_SIZE, defaults::MAX_COLLECTION_SIZE);
        let max_array_size = positive(&lookup, env_keys::MAX_ARRAY_SIZE, defaults::MAX_ARRAY_SIZE);
        let max_depth_limit =
            positive(&lookup, env_keys::MAX_DEPTH_LIMIT, defaults::MAX_DEPTH_LIMIT);

        // `positive` never yields zero, so validation cannot fail here.
        let generation = GenerationConfig::new(max_collection_size, max_array_size, max_depth_limit)
            .unwrap_or_default();

        let host = lookup(env_keys::HOST)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(env_keys::PORT) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(key = env_keys::PORT, value = %raw, default = DEFAULT_PORT, "Invalid port, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let config = Self { server: ServerConfig { host, port }, generation };
        info!(
            host = %config.server.host,
            port = config.server.port,
            max_collection_size = config.generation.max_collection_size(),
            max_array_size = config.generation.max_array_size(),
            max_depth_limit = config.generation.max_depth_limit(),
            "Loaded service configuration"
        );
        config
    }
}

/// Read a positive integer with `parseInt`-style leniency, or fall back.
fn positive<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: TryFrom<i64> + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match parse_int_prefix(&raw).filter(|n| *n > 0).and_then(|n| T::try_from(n).ok()) {
        Some(value) => value,
        None => {
            warn!(key, value = %raw, %default, "Expected a positive integer, using default");
            default
        }
    }
}
