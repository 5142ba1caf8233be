//! Host configuration.
//!
//! DESIGN
//! ======
//! Values come from the process environment (after `.env` is loaded by
//! `main`). Parsing goes through [`HostConfig::from_lookup`] so tests can feed
//! a map instead of mutating the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("invalid BIND_ADDR {value:?}: {reason}")]
    InvalidBindAddr { value: String, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

/// Where the host listens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Read `PORT` and `BIND_ADDR` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys use defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a present value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = non_blank(lookup("PORT")) {
            config.port = value
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidPort { value: value.clone(), reason: e.to_string() })?;
        }
        if let Some(value) = non_blank(lookup("BIND_ADDR")) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
