//! Fediverse handle parsing
//!
//! A handle is the human-readable `user@domain` form of an account address.
//! Parsing is strict: exactly one `@`, both sides non-empty. Everything else
//! is rejected before any network request is made.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A validated `user@domain` account handle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
    username: String,
    domain: String,
}

impl Handle {
    /// Parse a handle from its `user@domain` form.
    ///
    /// # Errors
    /// `InvalidHandleFormat` when the input has no `@`, more than one `@`,
    /// an empty username or domain, or a domain containing URL delimiters.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let malformed = || AppError::InvalidHandleFormat(input.to_string());

        let (username, domain) = input.split_once('@').ok_or_else(malformed)?;

        if username.is_empty() || domain.is_empty() {
            return Err(malformed());
        }

        // Exactly one separator: a domain cannot itself contain `@`.
        if domain.contains('@') {
            return Err(malformed());
        }

        // The domain is interpolated into the URL host position verbatim,
        // so it must not carry path/query/fragment delimiters or whitespace.
        if domain
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
        {
            return Err(malformed());
        }

        if username.chars().any(char::is_whitespace) {
            return Err(malformed());
        }

        Ok(Self {
            username: username.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The `acct:` URI for this handle (WebFinger resource value)
    pub fn acct_uri(&self) -> String {
        format!("acct:{}@{}", self.username, self.domain)
    }

    /// The WebFinger query URL for this handle.
    ///
    /// The resource value is percent-encoded so URL construction is
    /// byte-for-byte deterministic regardless of what the username or
    /// domain contain.
    pub fn webfinger_url(&self) -> String {
        self.webfinger_url_with_scheme("https")
    }

    /// WebFinger query URL with an explicit scheme.
    ///
    /// `http` exists for instances on localhost; everything real is https.
    pub fn webfinger_url_with_scheme(&self, scheme: &str) -> String {
        format!(
            "{}://{}/.well-known/webfinger?resource={}",
            scheme,
            self.domain,
            urlencoding::encode(&self.acct_uri())
        )
    }
}

impl FromStr for Handle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.domain)
    }
}
