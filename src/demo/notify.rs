//! Notification delivery simulation
//!
//! Shows what a server-to-server delivery would look like: the POST a
//! sending server makes to the recipient's inbox, header by header. The
//! request is built and printed, never sent, and no real signing happens;
//! the Signature header is an annotated placeholder.

use std::sync::Arc;

use chrono::Utc;

use crate::AppState;
use crate::demo::{ConsolePresenter, builder, print_json_block};
use crate::error::Result;

const LOCAL_ACTOR: &str = "https://social.example/users/demo";
const FALLBACK_INBOX: &str = "https://remote.example/users/alice/inbox";

/// A description of the HTTP request a real delivery would make
#[derive(Debug)]
pub struct DeliveryPreview {
    pub method: &'static str,
    pub inbox_url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: serde_json::Value,
}

/// Build the delivery preview for a Create activity aimed at `inbox_url`
pub fn build_preview(inbox_url: &str) -> DeliveryPreview {
    let note = builder::note(
        "https://social.example/notes/1",
        LOCAL_ACTOR,
        "<p>Hello from the notification simulation!</p>",
        &Utc::now().to_rfc3339(),
    );
    let activity = builder::create("https://social.example/creates/1", LOCAL_ACTOR, note);

    DeliveryPreview {
        method: "POST",
        inbox_url: inbox_url.to_string(),
        headers: vec![
            ("Content-Type", "application/activity+json".to_string()),
            (
                "Date",
                Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            ),
            (
                "Digest",
                "SHA-256=<base64 digest of the body would go here>".to_string(),
            ),
            (
                "Signature",
                format!(
                    "keyId=\"{LOCAL_ACTOR}#main-key\",algorithm=\"rsa-sha256\",\
                     headers=\"(request-target) host date digest\",\
                     signature=\"<not computed: this tool does not implement HTTP Signatures>\""
                ),
            ),
        ],
        body: activity,
    }
}

/// Run the simulation.
///
/// With a handle, the recipient's real inbox is looked up through the
/// resolver first; without one, a fixed example inbox is used. Either way
/// nothing is delivered.
pub async fn run(state: &AppState, handle: Option<&str>) -> Result<()> {
    let inbox_url = match handle {
        Some(handle) => {
            let resolver = state.resolver().with_observer(Arc::new(ConsolePresenter));
            let discovery = resolver.resolve(handle).await?;
            match discovery.actor_url {
                Some(actor_url) => {
                    let actor = resolver.fetch_actor(&actor_url).await?;
                    actor.inbox.unwrap_or_else(|| {
                        println!("   (actor advertises no inbox; using the example one)");
                        FALLBACK_INBOX.to_string()
                    })
                }
                None => {
                    println!("   (no actor link for {handle}; using the example inbox)");
                    FALLBACK_INBOX.to_string()
                }
            }
        }
        None => FALLBACK_INBOX.to_string(),
    };

    let preview = build_preview(&inbox_url);

    println!();
    println!("To notify a remote account, a server POSTs a signed activity to");
    println!("the recipient's inbox. This is the request it would make:");
    println!();
    println!("    {} {}", preview.method, preview.inbox_url);
    for (name, value) in &preview.headers {
        println!("    {name}: {value}");
    }
    println!();
    print_json_block("Request body:", &preview.body);
    println!();
    println!("Nothing was sent. Real servers also compute the Digest and Signature");
    println!("headers from the body and the actor's private key.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_targets_the_inbox_with_a_create() {
        let preview = build_preview("https://remote.example/users/alice/inbox");

        assert_eq!(preview.method, "POST");
        assert_eq!(preview.inbox_url, "https://remote.example/users/alice/inbox");
        assert_eq!(preview.body["type"], "Create");
        assert_eq!(preview.body["object"]["type"], "Note");
        assert!(
            preview
                .headers
                .iter()
                .any(|(name, value)| *name == "Content-Type"
                    && value == "application/activity+json")
        );
    }

    #[test]
    fn preview_signature_is_a_placeholder_not_a_signature() {
        let preview = build_preview(FALLBACK_INBOX);
        let signature = preview
            .headers
            .iter()
            .find(|(name, _)| *name == "Signature")
            .map(|(_, value)| value.as_str())
            .unwrap();

        assert!(signature.contains("not computed"));
    }
}
