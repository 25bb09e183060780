//! Actor profile demo
//!
//! Accepts either a `user@domain` handle (resolved through WebFinger first)
//! or a direct actor URL, fetches the actor document, and walks through its
//! identity fields, key metadata, and collection links.

use std::sync::Arc;

use crate::AppState;
use crate::demo::ConsolePresenter;
use crate::error::{AppError, Result};

/// True if the target looks like `user@domain` rather than a URL
fn is_handle(target: &str) -> bool {
    !target.contains("://") && target.contains('@')
}

pub async fn run(state: &AppState, target: &str) -> Result<()> {
    let resolver = state.resolver().with_observer(Arc::new(ConsolePresenter));

    let actor_url = if is_handle(target) {
        let discovery = resolver.resolve(target).await?;
        discovery
            .actor_url
            .ok_or_else(|| AppError::ActorUrlMissing(target.to_string()))?
    } else {
        target.to_string()
    };

    let actor = resolver.fetch_actor(&actor_url).await?;

    println!();
    println!("An actor document describes one account in JSON-LD.");
    println!("   id:        {}", actor.id);
    println!("   type:      {}", actor.kind);
    if let Some(username) = &actor.preferred_username {
        println!("   username:  {username}");
    }
    if let Some(name) = &actor.name {
        println!("   name:      {name}");
    }
    if let Some(summary) = &actor.summary {
        println!("   summary:   {summary}");
    }
    if let Some(icon) = actor.icon.as_ref().and_then(|i| i.url.as_deref()) {
        println!("   avatar:    {icon}");
    }
    if let Some(key) = &actor.public_key {
        println!(
            "   key:       {} (owned by {})",
            key.id.as_deref().unwrap_or("-"),
            key.owner.as_deref().unwrap_or("-"),
        );
        println!("              Servers verify HTTP Signatures against this key.");
    }
    for (label, value) in [
        ("inbox", &actor.inbox),
        ("outbox", &actor.outbox),
        ("followers", &actor.followers),
        ("following", &actor.following),
    ] {
        if let Some(value) = value {
            println!("   {label:<9} {value}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_handle;

    #[test]
    fn handles_and_urls_are_told_apart() {
        assert!(is_handle("alice@example.org"));
        assert!(!is_handle("https://example.org/users/alice"));
        assert!(!is_handle("alice"));
    }
}
