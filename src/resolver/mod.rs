//! ActivityPub handle resolution
//!
//! Handles:
//! - Handle parsing (`user@domain`)
//! - WebFinger discovery
//! - Actor fetching
//! - Outbox paging
//! - Batch resolution with bounded concurrency

mod actor;
mod client;
mod collection;
mod handle;
mod webfinger;

pub use actor::{Actor, Image, PublicKey};
pub use client::{
    BatchOutcome, Discovery, HandleResolver, ResolutionEvent, ResolutionObserver, ResolvedProfile,
};
pub use collection::{
    Activity, ObjectOrRef, OrderedCollection, OrderedCollectionPage, PageRef, activities_from_items,
};
pub use handle::Handle;
pub use webfinger::{ACTIVITY_JSON, WebFingerDocument, WebFingerLink};
