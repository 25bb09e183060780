//! Fediprobe - an educational ActivityPub protocol explorer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Demo Layer (CLI)                         │
//! │  - Annotated, learner-facing console output                 │
//! │  - One subcommand per protocol concept                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ subscribes to events
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Resolver Layer                           │
//! │  - WebFinger discovery → actor fetch → outbox fetch         │
//! │  - Typed JSON-LD models, structured progress events         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP Layer (reqwest)                     │
//! │  - Shared client: fixed User-Agent, 10s timeout             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - `resolver`: handle parsing, WebFinger discovery, actor/outbox fetching
//! - `demo`: the learner-facing demo commands
//! - `config`: configuration management
//! - `error`: error types

pub mod config;
pub mod demo;
pub mod error;
pub mod resolver;

use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all commands
///
/// Holds the configuration and the single HTTP client every resolution
/// goes through.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<config::AppConfig>,

    /// HTTP client for all protocol requests
    pub http_client: Arc<reqwest::Client>,
}

impl AppState {
    /// Initialize application state
    ///
    /// Builds the shared HTTP client with the configured identification
    /// string and request timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed
    pub fn new(config: config::AppConfig) -> Result<Self, error::AppError> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.http.user_agent.clone())
            .timeout(Duration::from_secs(config.http.timeout_seconds))
            .build()
            .map_err(|e| error::AppError::Internal(e.into()))?;

        Ok(Self {
            config: Arc::new(config),
            http_client: Arc::new(http_client),
        })
    }

    /// A resolver borrowing the shared HTTP client
    pub fn resolver(&self) -> resolver::HandleResolver {
        resolver::HandleResolver::new(self.http_client.clone())
    }
}
