//! Server configuration.
//!
//! The only environment-driven behavior is the bind address; everything
//! else about the service is fixed.

use clap::Parser;

/// Command-line and environment configuration for the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "plafond_server", about = "Systeemplafond rekenmachine API", version)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerConfig {
    /// The address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
