//! Host configuration parsed from environment variables.
//!
//! Variables (empty values count as unset):
//! - `BRICKYARD_HOST`: listen address, default `0.0.0.0`
//! - `PORT`: listen port, default `3000`
//! - `BRICKYARD_SITE_ROOT`: directory holding the compiled `pkg/` assets;
//!   defaults to the Leptos site root

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BRICKYARD_HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected a number between 1 and 65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match var("BRICKYARD_HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost { value })?,
            None => DEFAULT_HOST,
        };
        let port = match var("PORT") {
            Some(value) => parse_port(&value).ok_or(ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        let site_root = var("BRICKYARD_SITE_ROOT").map(PathBuf::from);

        Ok(Self { host, port, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.parse::<u16>().ok().filter(|port| *port != 0)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
