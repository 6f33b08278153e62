//! Server configuration.
//!
//! Values are layered with `figment`, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. TOML file (`copurchase.toml` in the working directory, or `--config`)
//! 3. Environment variables prefixed `COPURCHASE_` (e.g. `COPURCHASE_PORT`)
//!
//! Command-line flags are applied on top by the binary.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "copurchase.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "COPURCHASE_";

/// Runtime configuration for the REST server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path prefix shared by every network endpoint.
    pub api_prefix: String,
    /// Origins allowed to call the API from a browser.
    pub cors_origins: Vec<String>,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_prefix: "/api/network".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string()],
            log_filter: "info,tower_http=debug".to_string(),
        }
    }
}

impl ServerConfig {
    /// Builds the layered figment. A missing file is silently skipped.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let file = file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(ServerConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts and validates the configuration.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let config: Self = Self::figment(file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants the router relies on.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be non-zero");
        }
        if !self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/') {
            anyhow::bail!(
                "api_prefix must start with '/' and not end with '/': {:?}",
                self.api_prefix
            );
        }
        if self.cors_origins.is_empty() {
            anyhow::bail!("at least one CORS origin is required");
        }
        Ok(())
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = ServerConfig::load(None).expect("defaults load");
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.bind_addr(), "0.0.0.0:8080");
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                port = 9090
                cors_origins = ["https://shop.example", "http://localhost:5173"]
                "#,
            )?;
            let config = ServerConfig::load(None).expect("file config loads");
            assert_eq!(config.port, 9090);
            assert_eq!(config.cors_origins.len(), 2);
            assert_eq!(config.api_prefix, "/api/network");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "port = 9090\nhost = \"127.0.0.1\"")?;
            jail.set_env("COPURCHASE_PORT", "7070");
            let config = ServerConfig::load(Some(Path::new("custom.toml"))).expect("loads");
            assert_eq!(config.port, 7070);
            assert_eq!(config.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("COPURCHASE_API_PREFIX", "api/network");
            assert!(ServerConfig::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_zero_port_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_origins_rejected() {
        let config = ServerConfig {
            cors_origins: Vec::new(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
