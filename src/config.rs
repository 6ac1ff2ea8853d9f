//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind the HTTP server to
    pub host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of cached results
    pub cache_size: usize,
    /// How long a cached result survives without being read or rewritten
    pub cache_ttl: Duration,
    /// How long to wait for in-flight requests on shutdown
    pub shutdown_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_SIZE` - Maximum cached results (default: 1000)
    /// - `CACHE_TTL_MS` - Sliding TTL in milliseconds (default: 60000)
    /// - `SHUTDOWN_TIMEOUT_SECS` - Graceful shutdown limit in seconds (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_size: parse_env("CACHE_SIZE").unwrap_or(defaults.cache_size),
            cache_ttl: parse_env("CACHE_TTL_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.cache_ttl),
            shutdown_timeout: parse_env("SHUTDOWN_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.shutdown_timeout),
        }
    }

    /// Address to bind the listener to.
    ///
    /// Falls back to all interfaces when `host` is not an IP address.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = IpAddr::from_str(&self.host).unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            server_port: 8080,
            cache_size: 1000,
            cache_ttl: Duration::from_secs(60),
            shutdown_timeout: Duration::from_secs(5),
        }
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cache_size, 1000);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("HOST");
        env::remove_var("SERVER_PORT");
        env::remove_var("SHUTDOWN_TIMEOUT_SECS");
        env::set_var("CACHE_SIZE", "25");
        env::set_var("CACHE_TTL_MS", "1500");

        let config = Config::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cache_size, 25);
        assert_eq!(config.cache_ttl, Duration::from_millis(1500));
        assert_eq!(config.shutdown_timeout, Duration::from_secs(5));

        env::set_var("CACHE_SIZE", "not-a-number");
        assert_eq!(Config::from_env().cache_size, 1000);

        env::remove_var("CACHE_SIZE");
        env::remove_var("CACHE_TTL_MS");
    }

    #[test]
    fn test_socket_addr() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            server_port: 9000,
            ..Config::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:9000".parse().unwrap());

        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
    }
}
