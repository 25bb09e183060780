//! WebFinger JRD document model
//!
//! RFC 7033 responses as served by real instances: every field is optional
//! in practice, and unknown fields are carried through untouched so a
//! document re-serializes losslessly.

use serde::{Deserialize, Serialize};

/// WebFinger JRD response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebFingerDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default)]
    pub links: Vec<WebFingerLink>,
    /// Unknown fields, preserved for re-serialization
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// WebFinger link
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebFingerLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Media type identifying an ActivityPub actor link in a JRD document
pub const ACTIVITY_JSON: &str = "application/activity+json";

impl WebFingerDocument {
    /// Extract the actor URL advertised by this document.
    ///
    /// Returns the `href` of the first link whose declared type is exactly
    /// `application/activity+json`. The first match wins even when a later
    /// link also matches; a first match without an `href` yields `None`.
    /// No matching link at all is not an error, just absence.
    pub fn actor_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.link_type.as_deref() == Some(ACTIVITY_JSON))
            .and_then(|link| link.href.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: serde_json::Value) -> WebFingerDocument {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn actor_url_returns_first_activity_json_link() {
        let doc = doc(serde_json::json!({
            "subject": "acct:alice@example.org",
            "links": [
                {"rel": "http://webfinger.net/rel/profile-page", "type": "text/html", "href": "https://example.org/@alice"},
                {"rel": "self", "type": "application/activity+json", "href": "https://example.org/users/alice"},
                {"rel": "self", "type": "application/activity+json", "href": "https://example.org/users/alice-duplicate"}
            ]
        }));

        assert_eq!(doc.actor_url(), Some("https://example.org/users/alice"));
    }

    #[test]
    fn actor_url_is_absent_when_no_link_matches() {
        let doc = doc(serde_json::json!({
            "subject": "acct:alice@example.org",
            "links": [
                {"rel": "http://webfinger.net/rel/profile-page", "type": "text/html", "href": "https://example.org/@alice"}
            ]
        }));

        assert_eq!(doc.actor_url(), None);
    }

    #[test]
    fn actor_url_commits_to_first_match_even_without_href() {
        let doc = doc(serde_json::json!({
            "links": [
                {"rel": "self", "type": "application/activity+json"},
                {"rel": "self", "type": "application/activity+json", "href": "https://example.org/users/alice"}
            ]
        }));

        assert_eq!(doc.actor_url(), None);
    }

    #[test]
    fn actor_url_requires_exact_type_match() {
        let doc = doc(serde_json::json!({
            "links": [
                {"rel": "self", "type": "application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\"", "href": "https://example.org/users/alice"}
            ]
        }));

        assert_eq!(doc.actor_url(), None);
    }

    #[test]
    fn parse_tolerates_missing_links_and_subject() {
        let doc = doc(serde_json::json!({}));
        assert!(doc.subject.is_none());
        assert!(doc.links.is_empty());
        assert_eq!(doc.actor_url(), None);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let original = serde_json::json!({
            "subject": "acct:alice@example.org",
            "properties": {"http://example.org/ns/role": "admin"},
            "links": [
                {"rel": "self", "type": "application/activity+json", "href": "https://example.org/users/alice", "titles": {"en": "Alice"}}
            ]
        });

        let doc: WebFingerDocument = serde_json::from_value(original.clone()).unwrap();
        let reserialized = serde_json::to_value(&doc).unwrap();
        assert_eq!(reserialized, original);
    }
}
