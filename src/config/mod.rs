// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the analytics service
//!
//! Loads the listening port from environment variables (and `.env`).

use std::env::VarError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    pub const PORT: u16 = 8001;
    pub const SERVICE_NAME: &str = "Eyes Café Analytics Service";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "ANALYTICS_PORT";
}

/// Application-wide configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub service_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: defaults::HOST,
            port: defaults::PORT,
            service_name: defaults::SERVICE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// `.env` must already be applied (see [`load_dotenv`]).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds configuration from an arbitrary variable source shaped like `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let port = match lookup(env_vars::PORT) {
            Ok(raw) => parse_port(&raw)?,
            Err(VarError::NotPresent) => defaults::PORT,
            Err(VarError::NotUnicode(raw)) => {
                return Err(AppError::Config(format!(
                    "Invalid {} value {:?}: not valid unicode",
                    env_vars::PORT,
                    raw
                )));
            }
        };

        Ok(Config {
            port,
            ..Config::default()
        })
    }

    /// Builds a loopback configuration, used when the bind host must not be public
    #[must_use]
    pub fn loopback(port: u16) -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            ..Config::default()
        }
    }

    /// Address the listener binds to
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Applies a `.env` file to the process environment, if one is found
///
/// Existing variables win over `.env` entries.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    dotenvy::dotenv().ok()
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|e| {
        AppError::Config(format!(
            "Invalid {} value '{}': {}",
            env_vars::PORT,
            raw,
            e
        ))
    })
}
