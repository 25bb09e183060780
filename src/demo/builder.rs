//! Build sample ActivityPub JSON-LD documents
//!
//! These are the hard-coded illustration objects printed by the object demo
//! and the notification simulation. They follow the field layout real
//! Mastodon-compatible servers emit.

use serde_json::Value;

/// Build a Person actor document
pub fn person(id: &str, username: &str, display_name: &str) -> Value {
    serde_json::json!({
        "@context": [
            "https://www.w3.org/ns/activitystreams",
            "https://w3id.org/security/v1"
        ],
        "type": "Person",
        "id": id,
        "preferredUsername": username,
        "name": display_name,
        "inbox": format!("{}/inbox", id),
        "outbox": format!("{}/outbox", id),
        "followers": format!("{}/followers", id),
        "following": format!("{}/following", id),
        "publicKey": {
            "id": format!("{}#main-key", id),
            "owner": id,
            "publicKeyPem": "-----BEGIN PUBLIC KEY-----\n(illustrative key material)\n-----END PUBLIC KEY-----\n"
        }
    })
}

/// Build a Note object
///
/// # Arguments
/// * `id` - Note ID (unique URI)
/// * `attributed_to` - Actor URI (author)
/// * `content` - HTML content
/// * `published` - Publication timestamp (RFC3339)
pub fn note(id: &str, attributed_to: &str, content: &str, published: &str) -> Value {
    serde_json::json!({
        "type": "Note",
        "id": id,
        "attributedTo": attributed_to,
        "content": content,
        "published": published,
        "to": ["https://www.w3.org/ns/activitystreams#Public"],
        "cc": [format!("{}/followers", attributed_to)],
        "sensitive": false
    })
}

/// Build a Create activity wrapping an object
pub fn create(id: &str, actor: &str, object: Value) -> Value {
    serde_json::json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Create",
        "id": id,
        "actor": actor,
        "object": object,
        "to": ["https://www.w3.org/ns/activitystreams#Public"],
        "cc": [format!("{}/followers", actor)],
        "published": chrono::Utc::now().to_rfc3339()
    })
}

/// Build a Follow activity
///
/// # Arguments
/// * `id` - Activity ID (unique URI)
/// * `actor` - Actor URI (follower)
/// * `object` - Object URI (followee)
pub fn follow(id: &str, actor: &str, object: &str) -> Value {
    serde_json::json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Follow",
        "id": id,
        "actor": actor,
        "object": object
    })
}

/// Build a Like activity
pub fn like(id: &str, actor: &str, object: &str) -> Value {
    serde_json::json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Like",
        "id": id,
        "actor": actor,
        "object": object
    })
}

/// Build an Announce activity (boost)
pub fn announce(id: &str, actor: &str, object: &str) -> Value {
    serde_json::json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "type": "Announce",
        "id": id,
        "actor": actor,
        "object": object,
        "to": ["https://www.w3.org/ns/activitystreams#Public"],
        "cc": [format!("{}/followers", actor)],
        "published": chrono::Utc::now().to_rfc3339()
    })
}
