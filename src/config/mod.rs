// Configuration module entry point
// Process-level settings only; payloads served by the API are fixed

mod types;

use std::net::SocketAddr;

pub use types::Config;

/// Config file looked up when no path is given (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "ipfs-mock";

impl Config {
    /// Load configuration from the default file path
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional. `MOCK_` environment variables override it,
    /// e.g. `MOCK_SERVER__PORT=9090`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, env_overrides(std::env::vars()))
    }

    fn load_with_env(
        config_path: &str,
        env: config::Map<String, String>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("MOCK")
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(env)),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Keep only `MOCK_<SECTION>__<KEY>` variables.
///
/// A bare `MOCK_SERVER` would replace the whole `server` table and fail deserialization.
fn env_overrides(vars: impl Iterator<Item = (String, String)>) -> config::Map<String, String> {
    vars.filter(|(key, _)| {
        key.strip_prefix("MOCK_").is_some_and(|rest| {
            let mut parts = rest.split("__");
            parts.clone().count() >= 2 && !parts.any(str::is_empty)
        })
    })
    .collect()
}
