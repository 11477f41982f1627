//! Layered configuration: an optional file overlaid by `STOREHOUSE__*`
//! environment variables, then by command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "storehouse.toml";
pub const ENV_PREFIX: &str = "STOREHOUSE";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// Loads the configuration from `path` (if the file exists) and environment overrides.
///
/// A missing file is not an error; every field has a default.
///
/// # Errors
/// Returns an error if the file is malformed or a value has the wrong type.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading config");

    Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<AppConfig>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(
            cfg.server.socket_addr(),
            "127.0.0.1:5000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.server, ServerConfig::default());
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\naddress = \"0.0.0.0\"\nport = 8080").unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9090").unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.address, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(cfg.server.port, 9090);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = \"not a port\"").unwrap();

        assert!(load_config(file.path()).is_err());
    }
}
