//! Environment-driven server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const PRODUCTS_API_ADDR_ENV: &str = "PRODUCTS_API_ADDR";
pub const HELLO_WORLD_ADDR_ENV: &str = "HELLO_WORLD_ADDR";

pub const PRODUCTS_API_DEFAULT_PORT: u16 = 8081;
pub const HELLO_WORLD_DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Listen address for one of the binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Config for the product API (`PRODUCTS_API_ADDR`, default `0.0.0.0:8081`).
    pub fn products_api() -> Result<Self, ConfigError> {
        Self::from_env(PRODUCTS_API_ADDR_ENV, any_interface(PRODUCTS_API_DEFAULT_PORT))
    }

    /// Config for the hello-world demo (`HELLO_WORLD_ADDR`, default `0.0.0.0:8080`).
    pub fn hello_world() -> Result<Self, ConfigError> {
        Self::from_env(HELLO_WORLD_ADDR_ENV, any_interface(HELLO_WORLD_DEFAULT_PORT))
    }

    pub fn from_env(var: &'static str, default: SocketAddr) -> Result<Self, ConfigError> {
        Self::resolve(var, std::env::var(var).ok(), default)
    }

    /// Unset (or empty) falls back to `default`; anything else must parse.
    fn resolve(
        var: &'static str,
        value: Option<String>,
        default: SocketAddr,
    ) -> Result<Self, ConfigError> {
        match value.as_deref().map(str::trim) {
            None | Some("") => {
                tracing::debug!(var, %default, "listen address not set; using default");
                Ok(Self { addr: default })
            }
            Some(raw) => raw
                .parse()
                .map(|addr| Self { addr })
                .map_err(|_| ConfigError::InvalidAddr {
                    var,
                    value: raw.to_string(),
                }),
        }
    }
}

fn any_interface(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}
