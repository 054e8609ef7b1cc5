//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOPPER_HOST` - Bind address (default: 0.0.0.0)
//! - `SHOPPER_PORT` - Listen port (default: 8000)
//! - `SHOPPER_OPERATOR_HANDLE` - Destination of every payload (default: @grad_zakup)
//! - `SHOPPER_HOST_MODE` - `auto`, `telegram` or `preview` (default: auto)
//! - `SHOPPER_CATALOG_PATH` - JSON catalog file; the demo assortment is used when unset
//! - `SHOPPER_SESSION_TTL_SECS` - Idle time after which a shop session is dropped (default: 7200)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::checkout::DEFAULT_OPERATOR_HANDLE;
use crate::host::HostMode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Fixed operator identifier all payloads are addressed to
    pub operator_handle: String,
    /// Which host bridge new sessions get
    pub host_mode: HostMode,
    /// Optional catalog file replacing the demo assortment
    pub catalog_path: Option<PathBuf>,
    /// Idle sessions older than this are evicted
    pub session_ttl: Duration,
}

/// Default idle lifetime of a shop session.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            operator_handle: DEFAULT_OPERATOR_HANDLE.to_string(),
            host_mode: HostMode::default(),
            catalog_path: None,
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = match get("SHOPPER_HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SHOPPER_HOST".into(), format!("{e}")))?,
            None => defaults.host,
        };

        let port = match get("SHOPPER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SHOPPER_PORT".into(), format!("{e}")))?,
            None => defaults.port,
        };

        let host_mode = match get("SHOPPER_HOST_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SHOPPER_HOST_MODE".into(), e))?,
            None => defaults.host_mode,
        };

        let session_ttl = match get("SHOPPER_SESSION_TTL_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidEnvVar(
                        "SHOPPER_SESSION_TTL_SECS".into(),
                        "must be greater than zero".into(),
                    ))
                }
                Ok(secs) => Duration::from_secs(secs),
                Err(e) => {
                    return Err(ConfigError::InvalidEnvVar(
                        "SHOPPER_SESSION_TTL_SECS".into(),
                        format!("{e}"),
                    ))
                }
            },
            None => defaults.session_ttl,
        };

        Ok(Self {
            host,
            port,
            operator_handle: get("SHOPPER_OPERATOR_HANDLE").unwrap_or(defaults.operator_handle),
            host_mode,
            catalog_path: get("SHOPPER_CATALOG_PATH").map(PathBuf::from),
            session_ttl,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.operator_handle, "@grad_zakup");
        assert_eq!(config.host_mode, HostMode::Auto);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.session_ttl, DEFAULT_SESSION_TTL);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("SHOPPER_HOST", "127.0.0.1"),
            ("SHOPPER_PORT", "3000"),
            ("SHOPPER_OPERATOR_HANDLE", "@concierge"),
            ("SHOPPER_HOST_MODE", "preview"),
            ("SHOPPER_CATALOG_PATH", "/etc/shopper/catalog.json"),
            ("SHOPPER_SESSION_TTL_SECS", "600"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.operator_handle, "@concierge");
        assert_eq!(config.host_mode, HostMode::Preview);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/shopper/catalog.json"))
        );
        assert_eq!(config.session_ttl, Duration::from_secs(600));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("SHOPPER_OPERATOR_HANDLE", "  ")])).unwrap();
        assert_eq!(config.operator_handle, "@grad_zakup");
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("SHOPPER_PORT", "eighty"),
            ("SHOPPER_HOST", "localhost:1"),
            ("SHOPPER_HOST_MODE", "vk"),
            ("SHOPPER_SESSION_TTL_SECS", "0"),
            ("SHOPPER_SESSION_TTL_SECS", "soon"),
        ] {
            let err = StorefrontConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(matches!(&err, ConfigError::InvalidEnvVar(k, _) if k == key));
        }
    }
}
