//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub resolver: ResolverConfig,
    pub logging: LoggingConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (default: 10)
    pub timeout_seconds: u64,
    /// User-Agent sent on every request
    pub user_agent: String,
}

/// Resolver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Maximum activities fetched from an outbox first page (default: 5)
    pub outbox_limit: usize,
    /// Concurrency limit when resolving a batch of handles (default: 4)
    pub max_concurrent: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (FEDIPROBE_*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self, crate::error::AppError> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            // Start with default values
            .set_default("http.timeout_seconds", 10)?
            .set_default("http.user_agent", default_user_agent())?
            .set_default("resolver.outbox_limit", 5)?
            .set_default("resolver.max_concurrent", 4)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Load from config/default.toml if it exists
            .add_source(File::with_name("config/default").required(false))
            // Load from config/local.toml if it exists (overrides default)
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables (FEDIPROBE_*)
            .add_source(
                Environment::with_prefix("FEDIPROBE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| crate::error::AppError::Config(e.to_string()))?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), crate::error::AppError> {
        if self.http.timeout_seconds == 0 {
            return Err(crate::error::AppError::Config(
                "http.timeout_seconds must be greater than 0".to_string(),
            ));
        }

        if self.resolver.max_concurrent == 0 {
            return Err(crate::error::AppError::Config(
                "resolver.max_concurrent must be greater than 0".to_string(),
            ));
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(crate::error::AppError::Config(
                "http.user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("Fediprobe/{}", env!("CARGO_PKG_VERSION"))
}
