//! Object shapes demo
//!
//! Prints a set of hard-coded JSON-LD documents with short explanations:
//! an actor, a Note, and the activity types a learner meets first. Nothing
//! here touches the network.

use crate::demo::{builder, print_json_block};
use crate::error::Result;

const DEMO_ACTOR: &str = "https://social.example/users/demo";
const REMOTE_ACTOR: &str = "https://remote.example/users/alice";
const DEMO_NOTE: &str = "https://social.example/notes/1";

pub fn run() -> Result<()> {
    println!("ActivityPub exchanges JSON-LD documents. Two kinds matter:");
    println!("objects (things, like a Note) and activities (actions on things).");
    println!();

    print_json_block(
        "A Person actor. `inbox` and `outbox` are where federation happens:",
        &builder::person(DEMO_ACTOR, "demo", "Demo Account"),
    );
    println!();

    let note = builder::note(
        DEMO_NOTE,
        DEMO_ACTOR,
        "<p>Hello fediverse!</p>",
        "2024-05-01T12:00:00Z",
    );
    print_json_block(
        "A Note. `to` containing as:Public makes it a public post:",
        &note,
    );
    println!();

    print_json_block(
        "A Create activity wraps the Note. Servers deliver the activity, not the bare object:",
        &builder::create("https://social.example/creates/1", DEMO_ACTOR, note),
    );
    println!();

    print_json_block(
        "A Follow. Its object is just the followee's actor URI:",
        &builder::follow("https://social.example/follows/1", DEMO_ACTOR, REMOTE_ACTOR),
    );
    println!();

    print_json_block(
        "A Like references the liked object by URI:",
        &builder::like("https://social.example/likes/1", DEMO_ACTOR, DEMO_NOTE),
    );
    println!();

    print_json_block(
        "An Announce (boost) re-addresses someone else's object to your followers:",
        &builder::announce("https://social.example/announces/1", DEMO_ACTOR, DEMO_NOTE),
    );

    Ok(())
}
