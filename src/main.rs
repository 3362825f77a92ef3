/// Main entry point for the Habitica MCP server
///
/// This file sets up logging, parses command line arguments, reads the
/// configuration from the environment, and starts the MCP server. The
/// server listens for JSON-RPC requests over stdin/stdout following the
/// MCP protocol.

use clap::Parser;
use tracing::info;

use habitica_mcp::{Config, ConfigError, HabiticaServer, Language};

/// Command line arguments for the Habitica MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // The DEBUG environment variable acts like --verbose.
    let debug_env = std::env::var("DEBUG").map(|v| !v.is_empty()).unwrap_or(false);
    let log_level = if args.verbose || debug_env {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habitica_mcp={log_level}"))
        .with_writer(std::io::stderr) // Send logs to stderr; stdout carries JSON-RPC
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let lang = Language::from_tag(
                &std::env::var("MCP_LANG")
                    .or_else(|_| std::env::var("LANG"))
                    .unwrap_or_default(),
            );
            let message = match e {
                ConfigError::MissingCredentials => lang.select(
                    "Error: Please set HABITICA_USER_ID and HABITICA_API_TOKEN environment variables"
                        .to_string(),
                    "错误：请设置 HABITICA_USER_ID 和 HABITICA_API_TOKEN 环境变量".to_string(),
                ),
                other => lang.select(format!("Error: {other}"), format!("错误：{other}")),
            };
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    info!("Starting Habitica MCP server");

    // Any startup failure also exits non-zero through the error return.
    let server = HabiticaServer::new(config)?;
    server.run().await?;

    info!("Habitica MCP server shutdown complete");
    Ok(())
}
