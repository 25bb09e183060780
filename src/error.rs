//! Error types for Fediprobe
//!
//! All errors in the application are converted to `AppError`. The resolver
//! stages each have a dedicated variant so callers can tell which stage of
//! the pipeline failed and whether the failure is fatal to the resolution.

use thiserror::Error;

/// Transport-level failure shared by every fetch stage.
///
/// Carries what actually went wrong on the wire so the stage variants of
/// [`AppError`] only need to add which URL was being fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, or timeout failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// Body was not valid JSON
    #[error("invalid JSON body: {0}")]
    Json(#[source] reqwest::Error),

    /// Target was not an absolute http(s) URL; no request was attempted
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Application-wide error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Handle does not split into a non-empty username and domain.
    ///
    /// Raised before any network request is issued; non-fatal to a batch.
    #[error("invalid handle format: {0:?}")]
    InvalidHandleFormat(String),

    /// WebFinger request failed (network, timeout, non-2xx)
    #[error("WebFinger discovery failed for {url}: {source}")]
    DiscoveryFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    /// Actor document fetch failed
    #[error("actor fetch failed for {url}: {source}")]
    ActorFetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    /// Outbox or first-page fetch failed.
    ///
    /// Treated as "zero activities available" by the composite pipeline.
    #[error("outbox fetch failed for {url}: {source}")]
    OutboxFetchFailed {
        url: String,
        #[source]
        source: FetchError,
    },

    /// Discovery succeeded but the WebFinger document advertises no
    /// `application/activity+json` link, so the pipeline cannot continue
    #[error("no ActivityPub actor link found for {0}")]
    ActorUrlMissing(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the error leaves the resolution usable in degraded form.
    ///
    /// Only outbox-stage failures qualify: the actor was already fetched and
    /// the caller may present the profile with zero activities.
    pub fn is_degraded(&self) -> bool {
        matches!(self, AppError::OutboxFetchFailed { .. })
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
