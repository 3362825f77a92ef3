/// Public library interface for the Habitica MCP server
///
/// This module exports the main server implementation and public types
/// that can be used by other applications or tests.

use thiserror::Error;

// Internal modules
pub mod api;
pub mod config;
pub mod i18n;
pub mod mcp;
pub mod tools;

// Re-export public types
pub use api::{ApiError, HabiticaClient};
pub use config::{Config, ConfigError, ErrorDetail, ToolSet, HABITICA_API_BASE};
pub use i18n::Language;
pub use mcp::McpServer;
pub use tools::{ToolName, ToolReply};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Habitica API error: {0}")]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Habitica adapter behind the MCP transport
///
/// Owns the resolved configuration and the authenticated HTTP client. The
/// adapter holds no state of its own: every tool call is one remote round
/// trip against the Habitica API.
pub struct HabiticaServer {
    config: Config,
    client: HabiticaClient,
}

impl HabiticaServer {
    /// Build the server from a resolved configuration
    pub fn new(config: Config) -> Result<Self, ServerError> {
        tracing::info!("Initializing Habitica MCP server against {}", config.api_base);

        let client = HabiticaClient::new(&config)?;

        Ok(Self { config, client })
    }

    /// Serve MCP over stdin/stdout until the transport closes
    ///
    /// When the startup probe is enabled, credentials are verified with one
    /// GET /user before any request handling begins.
    pub async fn run(self) -> Result<(), ServerError> {
        if self.config.startup_probe {
            let envelope = self.client.get("/user").await?;
            match api::subtree(&envelope, &["data", "profile", "name"]) {
                Ok(name) => tracing::info!(
                    "Habitica credentials verified for {}",
                    name.as_str().unwrap_or("user")
                ),
                Err(_) => tracing::info!("Habitica credentials verified"),
            }
        }

        let mut mcp_server = McpServer::new(self);
        mcp_server.run().await
    }

    /// The resolved configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The authenticated HTTP client (useful for testing)
    pub fn client(&self) -> &HabiticaClient {
        &self.client
    }
}
