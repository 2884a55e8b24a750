use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Default upstream base URL when `MEM0_BASE_URL` is unset.
pub const DEFAULT_MEM0_BASE_URL: &str = "http://mem0:8000";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the bridge.
#[derive(Debug)]
pub struct Config {
    /// Base URL of the upstream mem0 memory service.
    pub mem0_base_url: String,
    /// Optional bearer credential attached to every upstream request.
    pub mem0_api_key: Option<String>,
    /// Optional override for the REST proxy port.
    pub server_port: Option<u16>,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            mem0_base_url: load_env_optional("MEM0_BASE_URL")
                .unwrap_or_else(|| DEFAULT_MEM0_BASE_URL.to_string()),
            mem0_api_key: load_env_optional("MEM0_API_KEY"),
            server_port: load_env_optional("SERVER_PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?,
        })
    }
}

pub(crate) fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

pub(crate) fn load_env_or(key: &str, default: &str) -> String {
    load_env_optional(key).unwrap_or_else(|| default.to_string())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        mem0_base_url = %config.mem0_base_url,
        has_api_key = config.mem0_api_key.is_some(),
        server_port = ?config.server_port,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment mutation is process-global; serialize these tests.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_env(key: &str, value: &str) {
        // SAFETY: Callers hold ENV_LOCK while mutating the environment.
        unsafe { env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        // SAFETY: See `set_env`.
        unsafe { env::remove_var(key) }
    }

    #[test]
    fn from_env_applies_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        remove_env("MEM0_BASE_URL");
        remove_env("MEM0_API_KEY");
        remove_env("SERVER_PORT");

        let config = Config::from_env().expect("config loads");
        assert_eq!(config.mem0_base_url, DEFAULT_MEM0_BASE_URL);
        assert!(config.mem0_api_key.is_none());
        assert!(config.server_port.is_none());
    }

    #[test]
    fn from_env_rejects_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env("SERVER_PORT", "not-a-port");
        let error = Config::from_env().expect_err("port should fail to parse");
        assert!(matches!(error, ConfigError::InvalidValue(_)));
        remove_env("SERVER_PORT");
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_env("MEM0_API_KEY", "   ");
        let config = Config::from_env().expect("config loads");
        assert!(config.mem0_api_key.is_none());
        remove_env("MEM0_API_KEY");
    }
}
