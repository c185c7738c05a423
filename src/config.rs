use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_JSON_LIMIT: usize = 256 * 1024;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub json_limit: usize,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parses `raw` for `key`, falling back to `default` when unset or malformed.
    fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
        match raw {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                warn!("Environment variable {} has invalid value {:?}, using default", key, value);
                default
            }),
            None => default,
        }
    }

    pub fn from_env() -> Self {
        let defaults = EnvConfig::default();

        EnvConfig {
            host: Self::get_env("HOST").unwrap_or(defaults.host),
            port: Self::parse_or("PORT", Self::get_env("PORT"), defaults.port),
            // 0 or garbage leaves the worker count to actix
            workers: Some(Self::parse_or("WORKERS", Self::get_env("WORKERS"), 0usize))
                .filter(|w| *w > 0),
            json_limit: Self::parse_or("JSON_LIMIT", Self::get_env("JSON_LIMIT"), defaults.json_limit),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Stores `config` for the rest of the process. The first call wins.
pub fn init(config: EnvConfig) -> &'static EnvConfig {
    CONFIG.get_or_init(|| config)
}
