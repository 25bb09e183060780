//! WebFinger discovery demo
//!
//! Resolves each handle through WebFinger only and walks the learner
//! through the returned JRD document: subject, aliases, every link, and
//! which link the resolver actually selects.

use std::sync::Arc;

use crate::AppState;
use crate::demo::ConsolePresenter;
use crate::error::Result;
use crate::resolver::ACTIVITY_JSON;

pub async fn run(state: &AppState, handles: &[String]) -> Result<()> {
    let resolver = state.resolver().with_observer(Arc::new(ConsolePresenter));

    println!("WebFinger turns a human-readable handle into machine-readable links.");
    println!("The request goes to /.well-known/webfinger on the handle's domain.");
    println!();

    for handle in handles {
        match resolver.resolve(handle).await {
            Ok(discovery) => {
                if let Some(subject) = &discovery.document.subject {
                    println!("   subject: {subject}");
                }
                if let Some(aliases) = &discovery.document.aliases {
                    for alias in aliases {
                        println!("   alias:   {alias}");
                    }
                }
                for link in &discovery.document.links {
                    println!(
                        "   link:    rel={} type={} href={}",
                        link.rel.as_deref().unwrap_or("-"),
                        link.link_type.as_deref().unwrap_or("-"),
                        link.href.as_deref().unwrap_or("-"),
                    );
                }
                match &discovery.actor_url {
                    Some(actor_url) => println!(
                        "   The first link typed {ACTIVITY_JSON} wins: {actor_url}"
                    ),
                    None => println!(
                        "   No link is typed {ACTIVITY_JSON}, so this account has no actor URL."
                    ),
                }
            }
            // One bad handle never stops the rest of the batch.
            Err(error) => println!("   skipping {handle}: {error}"),
        }
        println!();
    }

    Ok(())
}
