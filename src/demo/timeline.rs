//! Timeline demo
//!
//! Runs the full resolution pipeline for each handle and prints the most
//! recent outbox activities. Handles are resolved concurrently up to the
//! configured limit; a failure for one handle is reported and the batch
//! carries on.

use std::sync::Arc;

use crate::AppState;
use crate::demo::ConsolePresenter;
use crate::error::Result;
use crate::resolver::{Activity, ObjectOrRef};

pub async fn run(state: &AppState, handles: &[String], limit: usize) -> Result<()> {
    let resolver = state.resolver().with_observer(Arc::new(ConsolePresenter));

    println!("A timeline is just each actor's outbox, newest first.");
    println!();

    let outcomes = resolver
        .resolve_batch(handles, limit, state.config.resolver.max_concurrent)
        .await;

    for outcome in outcomes {
        println!();
        match outcome.result {
            Ok(profile) => {
                println!(
                    "== {} ({})",
                    profile.actor.display_name(),
                    outcome.handle
                );
                if profile.activities.is_empty() {
                    println!("   no recent activities available");
                }
                for activity in &profile.activities {
                    print_activity(activity);
                }
            }
            Err(error) => println!("== {}: {error}", outcome.handle),
        }
    }

    Ok(())
}

fn print_activity(activity: &Activity) {
    let kind = activity.kind.as_deref().unwrap_or("Activity");
    let published = activity
        .published_at()
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "unknown time".to_string());

    match &activity.object {
        Some(ObjectOrRef::Embedded(object)) => {
            let object_kind = object
                .get("type")
                .and_then(|t| t.as_str())
                .unwrap_or("object");
            let content = object
                .get("content")
                .and_then(|c| c.as_str())
                .unwrap_or("(no content)");
            println!("   [{published}] {kind} of embedded {object_kind}: {content}");
        }
        Some(ObjectOrRef::Reference(uri)) => {
            println!("   [{published}] {kind} of {uri}");
        }
        None => println!("   [{published}] {kind}"),
    }
}
