//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEEMGT_*` environment variables and
//! configuration files, in ascending precedence of files, environment, CLI.

use std::net::{Ipv4Addr, SocketAddr};

use employeemgt::outbound::persistence::DEFAULT_MAX_CONNECTIONS;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    8080,
);

/// Runtime settings for the employee service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEEMGT")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL. Employees are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl AppSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Return the pool size, treating zero as the pool default.
    pub fn db_max_connections(&self) -> u32 {
        if self.db_max_connections == 0 {
            DEFAULT_MAX_CONNECTIONS
        } else {
            self.db_max_connections
        }
    }
}
