//! Server configuration module

use clap::Parser;

use crate::config::{
    logging::LoggingConfig, mail::MailConfig, server::ServerRuntimeConfig, storage::StorageConfig,
};

pub(crate) mod logging;
pub(crate) mod mail;
pub(crate) mod server;
pub(crate) mod storage;

/// Nexus Order Service configuration
#[derive(Debug, Parser)]
#[command(name = "nexus-json-api", about = "Nexus Gaming order service", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Order storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Confirmation mail settings.
    #[command(flatten)]
    pub mail: MailConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
