//! ActivityStreams collection and activity models
//!
//! Outboxes arrive as `OrderedCollection` documents whose `first` member is
//! either a page URL or an embedded page, and whose pages carry items under
//! `orderedItems` or `items` depending on the server. The server-provided
//! item order is authoritative and never reordered here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ActivityStreams OrderedCollection (outbox, followers, ...)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderedCollection {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "totalItems", skip_serializing_if = "Option::is_none")]
    pub total_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<PageRef>,
    #[serde(rename = "orderedItems", skip_serializing_if = "Option::is_none")]
    pub ordered_items: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<serde_json::Value>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OrderedCollection {
    /// Inline items, preferring `orderedItems` over `items`
    pub fn raw_items(&self) -> Option<&[serde_json::Value]> {
        self.ordered_items
            .as_deref()
            .or(self.items.as_deref())
    }
}

/// A page reference: either a URL or a fully embedded page
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PageRef {
    Url(String),
    Embedded(Box<OrderedCollectionPage>),
}

/// A single page of an OrderedCollection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderedCollectionPage {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "partOf", skip_serializing_if = "Option::is_none")]
    pub part_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(rename = "orderedItems", skip_serializing_if = "Option::is_none")]
    pub ordered_items: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<serde_json::Value>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OrderedCollectionPage {
    /// Inline items, preferring `orderedItems` over `items`
    pub fn raw_items(&self) -> Option<&[serde_json::Value]> {
        self.ordered_items
            .as_deref()
            .or(self.items.as_deref())
    }
}

/// An ActivityStreams activity (Create, Announce, Like, ...)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<ObjectOrRef>,
    /// Raw `published` timestamp; see [`Activity::published_at`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectOrRef>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Activity {
    /// `published` parsed as RFC 3339; a malformed timestamp is `None`
    /// rather than a parse failure for the whole activity
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// An activity's object: an opaque URI reference or an embedded document
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ObjectOrRef {
    Reference(String),
    Embedded(serde_json::Value),
}

impl ObjectOrRef {
    /// The object's id: the reference itself, or the embedded `id` field
    pub fn id(&self) -> Option<&str> {
        match self {
            ObjectOrRef::Reference(uri) => Some(uri),
            ObjectOrRef::Embedded(value) => value.get("id").and_then(|id| id.as_str()),
        }
    }

    /// The embedded object's `type`, if this is an embedded document
    pub fn kind(&self) -> Option<&str> {
        match self {
            ObjectOrRef::Reference(_) => None,
            ObjectOrRef::Embedded(value) => value.get("type").and_then(|kind| kind.as_str()),
        }
    }
}

/// Convert raw page items into activities, truncated to `limit`.
///
/// Truncation happens first so the result is exactly the first `limit`
/// server-ordered entries; an entry that does not parse as an activity is
/// skipped with a warning and degrades only itself.
pub fn activities_from_items(items: &[serde_json::Value], limit: usize) -> Vec<Activity> {
    items
        .iter()
        .take(limit)
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(activity) => Some(activity),
            Err(error) => {
                tracing::warn!(%error, "Skipping outbox item that is not an activity");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_items(count: usize) -> Vec<serde_json::Value> {
        (0..count)
            .map(|n| {
                serde_json::json!({
                    "id": format!("https://example.org/activities/{n}"),
                    "type": "Create",
                    "actor": "https://example.org/users/alice",
                    "published": "2024-05-01T12:00:00Z",
                    "object": format!("https://example.org/notes/{n}")
                })
            })
            .collect()
    }

    #[test]
    fn activities_from_items_truncates_to_first_limit_in_order() {
        let items = numbered_items(10);
        let activities = activities_from_items(&items, 3);

        assert_eq!(activities.len(), 3);
        let ids: Vec<_> = activities.iter().filter_map(|a| a.id.as_deref()).collect();
        assert_eq!(
            ids,
            vec![
                "https://example.org/activities/0",
                "https://example.org/activities/1",
                "https://example.org/activities/2",
            ]
        );
    }

    #[test]
    fn activities_from_items_keeps_short_pages_whole() {
        let items = numbered_items(2);
        assert_eq!(activities_from_items(&items, 5).len(), 2);
        assert!(activities_from_items(&items, 0).is_empty());
    }

    #[test]
    fn collection_prefers_ordered_items_over_items() {
        let collection: OrderedCollection = serde_json::from_value(serde_json::json!({
            "type": "OrderedCollection",
            "orderedItems": [{"type": "Create"}],
            "items": [{"type": "Like"}, {"type": "Like"}]
        }))
        .unwrap();

        assert_eq!(collection.raw_items().unwrap().len(), 1);
    }

    #[test]
    fn collection_falls_back_to_items() {
        let collection: OrderedCollection = serde_json::from_value(serde_json::json!({
            "type": "Collection",
            "items": [{"type": "Like"}]
        }))
        .unwrap();

        assert_eq!(collection.raw_items().unwrap().len(), 1);
    }

    #[test]
    fn page_ref_parses_url_form() {
        let collection: OrderedCollection = serde_json::from_value(serde_json::json!({
            "type": "OrderedCollection",
            "totalItems": 42,
            "first": "https://example.org/users/alice/outbox?page=true"
        }))
        .unwrap();

        assert!(matches!(
            collection.first,
            Some(PageRef::Url(ref url)) if url == "https://example.org/users/alice/outbox?page=true"
        ));
    }

    #[test]
    fn page_ref_parses_embedded_form() {
        let collection: OrderedCollection = serde_json::from_value(serde_json::json!({
            "type": "OrderedCollection",
            "first": {
                "type": "OrderedCollectionPage",
                "orderedItems": [{"type": "Create", "id": "https://example.org/activities/0"}]
            }
        }))
        .unwrap();

        let Some(PageRef::Embedded(page)) = collection.first else {
            panic!("expected embedded first page");
        };
        assert_eq!(page.raw_items().unwrap().len(), 1);
    }

    #[test]
    fn object_or_ref_distinguishes_reference_from_embedded() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "type": "Announce",
            "object": "https://example.org/notes/1"
        }))
        .unwrap();
        assert_eq!(
            activity.object.as_ref().and_then(|o| o.id()),
            Some("https://example.org/notes/1")
        );
        assert_eq!(activity.object.as_ref().and_then(|o| o.kind()), None);

        let activity: Activity = serde_json::from_value(serde_json::json!({
            "type": "Create",
            "object": {"id": "https://example.org/notes/2", "type": "Note", "content": "hi"}
        }))
        .unwrap();
        assert_eq!(
            activity.object.as_ref().and_then(|o| o.id()),
            Some("https://example.org/notes/2")
        );
        assert_eq!(activity.object.as_ref().and_then(|o| o.kind()), Some("Note"));
    }

    #[test]
    fn published_at_parses_rfc3339_and_shrugs_off_garbage() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "type": "Create",
            "published": "2024-05-01T12:00:00Z"
        }))
        .unwrap();
        assert!(activity.published_at().is_some());

        let activity: Activity = serde_json::from_value(serde_json::json!({
            "type": "Create",
            "published": "yesterday-ish"
        }))
        .unwrap();
        assert!(activity.published_at().is_none());
    }

    #[test]
    fn non_object_items_are_skipped_not_fatal() {
        let mut items = numbered_items(2);
        items.insert(1, serde_json::json!(42));

        let activities = activities_from_items(&items, 3);
        assert_eq!(activities.len(), 2);
    }
}
