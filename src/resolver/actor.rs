//! ActivityPub actor document model
//!
//! Mirrors the JSON-LD shape served by Mastodon-compatible instances.
//! `id` and `type` are the only fields a server must provide; everything
//! else is tagged-presence optional, and unknown fields pass through the
//! flattened `extra` map so a fetched document can be re-serialized intact.

use serde::{Deserialize, Serialize};

/// An ActivityPub actor (Person, Service, Application, ...)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Actor {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "preferredUsername", skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(rename = "publicKey", skip_serializing_if = "Option::is_none")]
    pub public_key: Option<PublicKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<String>,
    /// Unknown fields, preserved for re-serialization
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Actor {
    /// Best display name: `name` if set, else `preferredUsername`, else the id
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.preferred_username.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Avatar or header image attachment
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "mediaType", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Actor signing key (never used for signing here, only displayed)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(rename = "publicKeyPem", skip_serializing_if = "Option::is_none")]
    pub public_key_pem: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
