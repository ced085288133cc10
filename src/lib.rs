//! Fruit Graph API
//!
//! A small REST service exposing CRUD operations over `:Fruit` nodes:
//! - Neo4j as the backing store, one short-lived session per request
//! - Axum HTTP API under `/fruits`
//! - YAML + environment configuration

pub mod api;
pub mod neo4j;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: ServerYamlConfig,
    pub neo4j: Neo4jSettings,
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerYamlConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerYamlConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

/// Neo4j connection settings (YAML `neo4j` section)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Neo4jSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
    /// Target database; the server default database when absent
    pub database: Option<String>,
    /// Records pulled per round trip
    pub fetch_size: usize,
    /// Upper bound of the driver's connection pool
    pub max_connections: usize,
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".into(),
            user: "neo4j".into(),
            password: "neo4j".into(),
            database: None,
            fetch_size: 200,
            max_connections: 16,
        }
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub neo4j: Neo4jSettings,
}

impl Config {
    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD. If the file doesn't
    /// exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        let server_port = env_or("SERVER_PORT", yaml.server.port)?;

        Ok(Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(yaml.server.host),
            server_port,
            neo4j: Neo4jSettings {
                uri: std::env::var("NEO4J_URI").unwrap_or(yaml.neo4j.uri),
                user: std::env::var("NEO4J_USER").unwrap_or(yaml.neo4j.user),
                password: std::env::var("NEO4J_PASSWORD").unwrap_or(yaml.neo4j.password),
                database: std::env::var("NEO4J_DATABASE").ok().or(yaml.neo4j.database),
                fetch_size: env_or("NEO4J_FETCH_SIZE", yaml.neo4j.fetch_size)?,
                max_connections: env_or("NEO4J_MAX_CONNECTIONS", yaml.neo4j.max_connections)?,
            },
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse a numeric env var, keeping `fallback` when it is unset
fn env_or<T>(var: &str, fallback: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Invalid {}: {}", var, value)),
        Err(_) => Ok(fallback),
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub neo4j: Arc<dyn neo4j::GraphStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state, connecting to Neo4j
    pub async fn new(config: Config) -> Result<Self> {
        let neo4j = Arc::new(neo4j::Neo4jClient::connect(&config.neo4j).await?);

        Ok(Self {
            neo4j,
            config: Arc::new(config),
        })
    }
}

// ============================================================================
// Server
// ============================================================================

/// Connect to Neo4j and serve the HTTP API until Ctrl+C / SIGTERM
pub async fn start_server(config: Config) -> Result<()> {
    let state = AppState::new(config).await?;
    let app = api::create_router(api::ServerState::new(state.neo4j.clone()));

    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Fruit API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
