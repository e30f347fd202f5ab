//! Runtime configuration from environment variables.

use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const HOST_VAR: &str = "RSA_SERVICE_HOST";
pub const PORT_VAR: &str = "RSA_SERVICE_PORT";
pub const AUTHOR_VAR: &str = "RSA_SERVICE_AUTHOR";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_AUTHOR: &str = "1149913";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Identifier returned by `GET /login`
    pub author: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from any variable source; unset or blank values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: PORT_VAR,
                    value,
                })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get(HOST_VAR).unwrap_or(defaults.host),
            port,
            author: get(AUTHOR_VAR).unwrap_or(defaults.author),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: HOST_VAR,
                value: self.host.clone(),
            })
    }
}
