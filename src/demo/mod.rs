//! Learner-facing demo commands
//!
//! Each submodule backs one CLI subcommand and prints annotated console
//! output. The resolver itself never prints; [`ConsolePresenter`] subscribes
//! to its progress events and renders them here, keeping observation
//! separate from the resolution logic.

pub mod actor;
pub mod builder;
pub mod notify;
pub mod objects;
pub mod timeline;
pub mod webfinger;

use crate::resolver::{ResolutionEvent, ResolutionObserver};

/// Renders resolver progress events as annotated console lines
pub struct ConsolePresenter;

impl ResolutionObserver for ConsolePresenter {
    fn on_event(&self, event: &ResolutionEvent) {
        match event {
            ResolutionEvent::DiscoveryStarted { handle, url } => {
                println!("-> WebFinger discovery for {handle}");
                println!("   GET {url}");
            }
            ResolutionEvent::DiscoverySucceeded { handle, actor_url } => match actor_url {
                Some(actor_url) => println!("   ok: {handle} is the actor {actor_url}"),
                None => println!("   ok: {handle} resolved, but no ActivityPub link advertised"),
            },
            ResolutionEvent::DiscoveryFailed { handle, url, error } => {
                println!("   failed: discovery for {handle} at {url}: {error}");
            }
            ResolutionEvent::ActorFetchStarted { url } => {
                println!("-> Fetching actor document");
                println!("   GET {url}");
            }
            ResolutionEvent::ActorFetched { id, kind } => {
                println!("   ok: {kind} {id}");
            }
            ResolutionEvent::ActorFetchFailed { url, error } => {
                println!("   failed: actor fetch at {url}: {error}");
            }
            ResolutionEvent::OutboxFetchStarted { url } => {
                println!("-> Fetching outbox");
                println!("   GET {url}");
            }
            ResolutionEvent::OutboxFetched { count, .. } => {
                println!("   ok: {count} recent activities");
            }
            ResolutionEvent::OutboxSkipped => {
                println!("   (actor advertises no outbox; skipping)");
            }
            ResolutionEvent::OutboxFetchFailed { url, error } => {
                println!("   warning: outbox fetch at {url} failed: {error}");
            }
        }
    }
}

/// Pretty-print a JSON document indented under a caption
pub(crate) fn print_json_block(caption: &str, value: &serde_json::Value) {
    println!("{caption}");
    let rendered = serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| "(unprintable document)".to_string());
    for line in rendered.lines() {
        println!("    {line}");
    }
}
