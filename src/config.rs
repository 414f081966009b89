//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `pkg/` is served from).
    pub site_root: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { addr: DEFAULT_ADDR, port: DEFAULT_PORT, site_root: None }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `FOLIO_ADDR`: bind address, default `0.0.0.0`
    /// - `PORT`: bind port, default 3000
    /// - `FOLIO_SITE_ROOT`: directory holding `pkg/`, default from Leptos metadata
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = env_parse(&lookup, "FOLIO_ADDR", DEFAULT_ADDR)?;
        let port = env_parse(&lookup, "PORT", DEFAULT_PORT)?;
        let site_root = lookup("FOLIO_SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Ok(Self { addr, port, site_root })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

fn env_parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed.parse::<T>().map_err(|_| ConfigError::Invalid { var, value: raw })
}
