//! Fruit Graph API - Main Server
//!
//! REST endpoint for Fruit nodes stored in Neo4j.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fruit_graph_api::{neo4j::Neo4jClient, Config};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fruit-graph-api")]
#[command(about = "REST API for Fruit nodes in Neo4j")]
struct Cli {
    /// Path to a YAML config file (defaults to ./config.yaml when present)
    #[arg(short, long, global = true, env = "FRUIT_API_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides config and SERVER_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config and SERVER_HOST)
        #[arg(long)]
        host: Option<String>,
    },

    /// Verify that Neo4j is reachable and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fruit_graph_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_yaml_and_env(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server_port = port;
            }
            if let Some(host) = host {
                config.server_host = host;
            }
            fruit_graph_api::start_server(config).await
        }
        Commands::Check => run_check(config).await,
    }
}

async fn run_check(config: Config) -> Result<()> {
    tracing::info!("Checking Neo4j at {}", config.neo4j.uri);

    let client = Neo4jClient::connect(&config.neo4j).await?;
    let ok = client
        .health_check()
        .await
        .context("Neo4j health check failed")?;

    if !ok {
        anyhow::bail!("Neo4j at {} did not answer", config.neo4j.uri);
    }

    tracing::info!("Neo4j is reachable");
    Ok(())
}
