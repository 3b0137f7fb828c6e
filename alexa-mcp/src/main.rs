//! Alexa Shopping List MCP Server Binary
//!
//! ## Usage
//!
//! ```bash
//! # Run as MCP server (stdio)
//! alexa-mcp-server --cookies data/cookies.json
//!
//! # Configuration also comes from the environment / a .env file
//! ALEXA_COOKIE_PATH=/srv/alexa/cookies.json alexa-mcp-server
//! ```
//!
//! The cookie file is a browser JSON export from a logged-in Amazon
//! session; producing it is outside this program's scope.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alexa_core::config::{DEFAULT_BASE_URL, DEFAULT_COOKIE_PATH, DEFAULT_LIST_ID};
use alexa_core::{AlexaClient, ApiConfig};
use alexa_mcp::{McpResult, McpServer};

#[derive(Debug, Parser)]
#[command(name = "alexa-mcp-server", version, about = "MCP server for the Amazon Alexa shopping list")]
struct Cli {
    /// Path to the browser cookie JSON export
    #[arg(long, env = "ALEXA_COOKIE_PATH", default_value = DEFAULT_COOKIE_PATH)]
    cookies: PathBuf,

    /// Base URL of the Amazon site the cookies belong to
    #[arg(long, env = "AMAZON_URL", default_value = DEFAULT_BASE_URL)]
    amazon_url: String,

    /// Opaque shopping list id used by the add endpoint
    #[arg(long, env = "ALEXA_LIST_ID", default_value = DEFAULT_LIST_ID)]
    list_id: String,
}

fn main() -> McpResult<()> {
    // .env before clap so env-backed flags pick it up
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing (to stderr so it doesn't interfere with stdio MCP)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alexa_mcp=info,alexa_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        "Starting Alexa Shopping List MCP server v{}",
        env!("CARGO_PKG_VERSION")
    );

    if !cli.cookies.is_file() {
        tracing::warn!(
            path = %cli.cookies.display(),
            "Cookie file not found; list tools will fail until it exists"
        );
    }

    let config = ApiConfig::new(cli.amazon_url, cli.cookies, cli.list_id);
    let client = AlexaClient::from_config(config)?;
    let server = McpServer::new(client);

    tracing::info!("MCP server ready, listening on stdio");
    server.run_stdio()?;

    Ok(())
}
