//! Common test utilities for E2E tests

use std::sync::Arc;
use std::time::Duration;

use fediprobe::resolver::HandleResolver;

/// A resolver wired for a local mock instance: short timeout, plain http.
pub fn test_resolver() -> HandleResolver {
    let client = reqwest::Client::builder()
        .user_agent("Fediprobe-tests/0.1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    HandleResolver::new(Arc::new(client)).with_insecure_http()
}

/// A WebFinger JRD body advertising one ActivityPub self link.
pub fn jrd_with_actor(subject: &str, actor_url: &str) -> String {
    serde_json::json!({
        "subject": subject,
        "links": [
            {
                "rel": "http://webfinger.net/rel/profile-page",
                "type": "text/html",
                "href": format!("{actor_url}/html")
            },
            {
                "rel": "self",
                "type": "application/activity+json",
                "href": actor_url
            }
        ]
    })
    .to_string()
}

/// A minimal actor document body.
pub fn actor_body(id: &str, outbox: Option<&str>) -> String {
    let mut actor = serde_json::json!({
        "@context": "https://www.w3.org/ns/activitystreams",
        "id": id,
        "type": "Person",
        "preferredUsername": "alice",
        "inbox": format!("{id}/inbox")
    });
    if let Some(outbox) = outbox {
        actor["outbox"] = serde_json::json!(outbox);
    }
    actor.to_string()
}

/// `count` Create activities with stable, numbered ids.
pub fn create_activities(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|n| {
            serde_json::json!({
                "id": format!("https://example.org/activities/{n}"),
                "type": "Create",
                "actor": "https://example.org/users/alice",
                "published": "2024-05-01T12:00:00Z",
                "object": {
                    "id": format!("https://example.org/notes/{n}"),
                    "type": "Note",
                    "content": format!("post {n}")
                }
            })
        })
        .collect()
}
