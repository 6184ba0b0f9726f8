use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use url::Url;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub store: StoreConfig,
    pub share: ShareConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let public_url = match env::var("APP_PUBLIC_URL") {
            Ok(raw) => parse_url("APP_PUBLIC_URL", &raw)?,
            Err(_) => parse_url("APP_PUBLIC_URL", &default_public_url(&host, port))?,
        };

        let base_url = env::var("APP_STORE_URL")
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_url("APP_STORE_URL", &with_trailing_slash(&raw)))
            .transpose()?;
        let api_key = env::var("APP_STORE_KEY").unwrap_or_default();
        let table = env::var("APP_STORE_TABLE").unwrap_or_else(|_| "journals".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            store: StoreConfig {
                base_url,
                api_key,
                table,
            },
            share: ShareConfig { public_url },
        })
    }
}

fn default_public_url(host: &str, port: u16) -> String {
    match host.parse::<Ipv6Addr>() {
        Ok(ip) => format!("http://{}/", SocketAddr::from((ip, port))),
        Err(_) => format!("http://{host}:{port}/"),
    }
}

fn with_trailing_slash(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

fn parse_url(variable: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { variable, source })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Remote submission store. No base URL means submissions stay in memory.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: Option<Url>,
    pub api_key: String,
    pub table: String,
}

/// The page address that gets copied and shared.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub public_url: Url,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidUrl {
        variable: &'static str,
        source: url::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidUrl { variable, .. } => {
                write!(f, "{variable} must be an absolute URL")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidUrl { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for variable in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_PUBLIC_URL",
            "APP_STORE_URL",
            "APP_STORE_KEY",
            "APP_STORE_TABLE",
        ] {
            env::remove_var(variable);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.share.public_url.as_str(), "http://127.0.0.1:3000/");
        assert!(config.store.base_url.is_none());
        assert_eq!(config.store.table, "journals");
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn ipv6_host_yields_bracketed_public_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "::1");
        let config = AppConfig::load().expect("config loads with ipv6 host");
        assert_eq!(config.share.public_url.as_str(), "http://[::1]:3000/");
        let addr = config.server.socket_addr().expect("ipv6 host resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from(Ipv6Addr::LOCALHOST), 3000));
        reset_env();
    }

    #[test]
    fn store_url_gains_trailing_slash() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_STORE_URL", "https://db.example.com/project");
        env::set_var("APP_STORE_TABLE", "moods");
        let config = AppConfig::load().expect("config loads");
        let base_url = config.store.base_url.expect("store configured");
        assert_eq!(base_url.as_str(), "https://db.example.com/project/");
        assert_eq!(config.store.table, "moods");
        reset_env();
    }

    #[test]
    fn rejects_relative_public_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PUBLIC_URL", "/tracker");
        match AppConfig::load() {
            Err(ConfigError::InvalidUrl { variable, .. }) => {
                assert_eq!(variable, "APP_PUBLIC_URL")
            }
            other => panic!("expected invalid url error, got {other:?}"),
        }
        reset_env();
    }
}
