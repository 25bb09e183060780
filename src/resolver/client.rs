//! The handle resolution pipeline
//!
//! Discovery → actor fetch → outbox fetch, as four plain request/response
//! transformations. Every stage is stateless; nothing fetched here is
//! cached, and a repeated call re-fetches every time.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, FetchError, Result};
use crate::resolver::{
    Activity, Actor, Handle, OrderedCollection, OrderedCollectionPage, PageRef,
    WebFingerDocument, activities_from_items,
};

/// Accept header for WebFinger requests
const JRD_ACCEPT: &str = "application/jrd+json";

/// Accept header for actor and collection requests
const ACTIVITY_ACCEPT: &str = "application/activity+json, application/ld+json";

/// Outcome of WebFinger discovery for one handle
#[derive(Debug, Clone)]
pub struct Discovery {
    /// The handle that was resolved
    pub handle: Handle,
    /// The raw JRD document as served
    pub document: WebFingerDocument,
    /// `href` of the first `application/activity+json` link, if any.
    ///
    /// Absence is not an error; the caller decides whether it is fatal.
    pub actor_url: Option<String>,
}

/// Fully resolved profile: discovery, actor document, recent activities
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub discovery: Discovery,
    pub actor: Actor,
    /// Recent outbox activities, possibly empty if the outbox was absent
    /// or its fetch failed (degraded outcome)
    pub activities: Vec<Activity>,
}

/// One handle's result within a batch resolution
#[derive(Debug)]
pub struct BatchOutcome {
    /// The input handle string, as given
    pub handle: String,
    pub result: Result<ResolvedProfile>,
}

/// Structured progress events emitted by the resolver.
///
/// The resolver never prints; a presentation layer subscribes through
/// [`ResolutionObserver`] and renders these however it likes.
#[derive(Debug, Clone)]
pub enum ResolutionEvent {
    DiscoveryStarted { handle: String, url: String },
    DiscoverySucceeded { handle: String, actor_url: Option<String> },
    DiscoveryFailed { handle: String, url: String, error: String },
    ActorFetchStarted { url: String },
    ActorFetched { id: String, kind: String },
    ActorFetchFailed { url: String, error: String },
    OutboxFetchStarted { url: String },
    OutboxFetched { url: String, count: usize },
    /// The actor advertises no outbox; not an error
    OutboxSkipped,
    OutboxFetchFailed { url: String, error: String },
}

/// Subscriber for [`ResolutionEvent`]s
pub trait ResolutionObserver: Send + Sync {
    fn on_event(&self, event: &ResolutionEvent);
}

/// Resolves `user@domain` handles to actors and their recent activities
#[derive(Clone)]
pub struct HandleResolver {
    http_client: Arc<reqwest::Client>,
    observers: Vec<Arc<dyn ResolutionObserver>>,
    webfinger_scheme: &'static str,
}

impl HandleResolver {
    /// Create a resolver sharing the application HTTP client
    pub fn new(http_client: Arc<reqwest::Client>) -> Self {
        Self {
            http_client,
            observers: Vec::new(),
            webfinger_scheme: "https",
        }
    }

    /// Attach an observer for progress events
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Perform WebFinger discovery over plain http.
    ///
    /// Only meaningful against instances on localhost.
    pub fn with_insecure_http(mut self) -> Self {
        self.webfinger_scheme = "http";
        self
    }

    fn emit(&self, event: ResolutionEvent) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }

    /// GET `url` with the given Accept header and decode the JSON body.
    ///
    /// Timeout and User-Agent come from the shared client; a non-2xx
    /// status is an error even when the body parses.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, accept: &str) -> std::result::Result<T, FetchError> {
        let response = self
            .http_client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json().await.map_err(FetchError::Json)
    }

    /// Perform WebFinger discovery for a handle.
    ///
    /// Issues exactly one GET to
    /// `https://<domain>/.well-known/webfinger?resource=acct:<user>@<domain>`.
    /// A malformed handle fails before any request is made.
    ///
    /// # Errors
    /// `InvalidHandleFormat` or `DiscoveryFailed`.
    pub async fn resolve(&self, handle: &str) -> Result<Discovery> {
        let handle = Handle::parse(handle)?;
        let url = handle.webfinger_url_with_scheme(self.webfinger_scheme);

        self.emit(ResolutionEvent::DiscoveryStarted {
            handle: handle.to_string(),
            url: url.clone(),
        });
        tracing::debug!(handle = %handle, %url, "Starting WebFinger discovery");

        let document: WebFingerDocument = match self.get_json(&url, JRD_ACCEPT).await {
            Ok(document) => document,
            Err(source) => {
                self.emit(ResolutionEvent::DiscoveryFailed {
                    handle: handle.to_string(),
                    url: url.clone(),
                    error: source.to_string(),
                });
                tracing::warn!(handle = %handle, %url, error = %source, "WebFinger discovery failed");
                return Err(AppError::DiscoveryFailed { url, source });
            }
        };

        let actor_url = document.actor_url().map(str::to_string);
        self.emit(ResolutionEvent::DiscoverySucceeded {
            handle: handle.to_string(),
            actor_url: actor_url.clone(),
        });
        tracing::debug!(handle = %handle, actor_url = ?actor_url, "WebFinger discovery succeeded");

        Ok(Discovery {
            handle,
            document,
            actor_url,
        })
    }

    /// Fetch and parse an actor document.
    ///
    /// # Errors
    /// `ActorFetchFailed` on an invalid URL or any network/status/decode
    /// failure. The operation is not retried.
    pub async fn fetch_actor(&self, actor_url: &str) -> Result<Actor> {
        if let Err(error) = require_absolute(actor_url) {
            self.emit(ResolutionEvent::ActorFetchFailed {
                url: actor_url.to_string(),
                error: error.to_string(),
            });
            return Err(AppError::ActorFetchFailed {
                url: actor_url.to_string(),
                source: error,
            });
        }

        self.emit(ResolutionEvent::ActorFetchStarted {
            url: actor_url.to_string(),
        });
        tracing::debug!(url = %actor_url, "Fetching actor document");

        let actor: Actor = match self.get_json(actor_url, ACTIVITY_ACCEPT).await {
            Ok(actor) => actor,
            Err(source) => {
                self.emit(ResolutionEvent::ActorFetchFailed {
                    url: actor_url.to_string(),
                    error: source.to_string(),
                });
                tracing::warn!(url = %actor_url, error = %source, "Actor fetch failed");
                return Err(AppError::ActorFetchFailed {
                    url: actor_url.to_string(),
                    source,
                });
            }
        };

        if actor.context.is_none() {
            tracing::warn!(id = %actor.id, "Actor document carries no @context");
        }

        self.emit(ResolutionEvent::ActorFetched {
            id: actor.id.clone(),
            kind: actor.kind.clone(),
        });

        Ok(actor)
    }

    /// Fetch up to `limit` recent activities from an outbox.
    ///
    /// An absent outbox URL is a no-op returning an empty Vec with no
    /// network request. When the collection exposes a `first` page it is
    /// followed (fetched if it is a URL); items come from `orderedItems`,
    /// falling back to `items`, truncated to `limit` in server order.
    ///
    /// # Errors
    /// `OutboxFetchFailed`; callers may treat it as "zero activities".
    pub async fn fetch_outbox_page(
        &self,
        outbox_url: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Activity>> {
        let Some(outbox_url) = outbox_url else {
            self.emit(ResolutionEvent::OutboxSkipped);
            tracing::debug!("Actor has no outbox; skipping activity fetch");
            return Ok(Vec::new());
        };

        self.emit(ResolutionEvent::OutboxFetchStarted {
            url: outbox_url.to_string(),
        });
        tracing::debug!(url = %outbox_url, "Fetching outbox collection");

        let collection: OrderedCollection = self
            .get_json(outbox_url, ACTIVITY_ACCEPT)
            .await
            .map_err(|source| self.outbox_failed(outbox_url, source))?;

        let activities = match collection.first {
            Some(PageRef::Url(page_url)) => {
                tracing::debug!(url = %page_url, "Following first outbox page");
                let page: OrderedCollectionPage = self
                    .get_json(&page_url, ACTIVITY_ACCEPT)
                    .await
                    .map_err(|source| self.outbox_failed(&page_url, source))?;
                activities_from_items(page.raw_items().unwrap_or_default(), limit)
            }
            Some(PageRef::Embedded(page)) => {
                activities_from_items(page.raw_items().unwrap_or_default(), limit)
            }
            None => activities_from_items(collection.raw_items().unwrap_or_default(), limit),
        };

        self.emit(ResolutionEvent::OutboxFetched {
            url: outbox_url.to_string(),
            count: activities.len(),
        });
        tracing::debug!(url = %outbox_url, count = activities.len(), "Outbox fetch complete");

        Ok(activities)
    }

    fn outbox_failed(&self, url: &str, source: FetchError) -> AppError {
        self.emit(ResolutionEvent::OutboxFetchFailed {
            url: url.to_string(),
            error: source.to_string(),
        });
        tracing::warn!(%url, error = %source, "Outbox fetch failed");
        AppError::OutboxFetchFailed {
            url: url.to_string(),
            source,
        }
    }

    /// Run the full pipeline: discovery → actor → recent activities.
    ///
    /// Aborts as soon as discovery yields no actor URL or the discovery or
    /// actor stage fails. An outbox failure does not abort: the profile is
    /// returned with zero activities and the failure is logged as a warning.
    pub async fn resolve_complete(&self, handle: &str, limit: usize) -> Result<ResolvedProfile> {
        let discovery = self.resolve(handle).await?;

        let Some(actor_url) = discovery.actor_url.clone() else {
            tracing::warn!(handle = %discovery.handle, "WebFinger document has no ActivityPub link");
            return Err(AppError::ActorUrlMissing(discovery.handle.to_string()));
        };

        let actor = self.fetch_actor(&actor_url).await?;

        let activities = match self.fetch_outbox_page(actor.outbox.as_deref(), limit).await {
            Ok(activities) => activities,
            Err(error) if error.is_degraded() => {
                tracing::warn!(%error, "Continuing with zero activities");
                Vec::new()
            }
            Err(error) => return Err(error),
        };

        Ok(ResolvedProfile {
            discovery,
            actor,
            activities,
        })
    }

    /// Resolve many handles with bounded concurrency.
    ///
    /// Each handle runs its own full pipeline; per-handle stage ordering is
    /// preserved, results come back in input order, and one handle's
    /// failure never aborts its siblings.
    pub async fn resolve_batch(
        &self,
        handles: &[String],
        limit: usize,
        max_concurrent: usize,
    ) -> Vec<BatchOutcome> {
        use futures::stream::{self, StreamExt};

        stream::iter(handles)
            .map(|handle| async move {
                BatchOutcome {
                    handle: handle.clone(),
                    result: self.resolve_complete(handle, limit).await,
                }
            })
            .buffered(max_concurrent.max(1))
            .collect()
            .await
    }
}

/// Validate that `url` is an absolute http(s) URL with a host
fn require_absolute(url: &str) -> std::result::Result<(), FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(FetchError::InvalidUrl(format!(
            "not an absolute http(s) URL: {url}"
        )));
    }
    Ok(())
}
