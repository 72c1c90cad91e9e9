//! Staleness-windowed event feed.
//!
//! The `EventFeed` handles:
//! - Fetching from an [`EventProvider`] when the cached list is stale or was
//!   fetched for a different query
//! - Substituting placeholder events when the provider fails
//! - Remembering where the current list came from ([`FeedOrigin`])
//!
//! A fetch failure is never returned to the caller: it is logged at warn
//! level and the feed serves placeholders instead.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use eventscout_api::client::TicketmasterClient;
//! use eventscout_api::discovery::EventQuery;
//! use eventscout_core::EventFeed;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TicketmasterClient::new("your-api-key");
//!     let mut feed = EventFeed::new(client);
//!
//!     let query = EventQuery::new().city("Boston");
//!     let events = feed.events(&query, Utc::now()).await;
//!     println!("{} events ({})", events.len(), feed.origin());
//!
//!     Ok(())
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use eventscout_api::client::TicketmasterClient;
use eventscout_api::discovery::EventQuery;
use eventscout_api::models::Event;
use eventscout_api::placeholder;
use serde::{Deserialize, Serialize};

use crate::EventStore;

/// Default staleness threshold in minutes.
const DEFAULT_STALE_MINUTES: i64 = 5;

/// Placeholders generated when a fetch fails.
const DEFAULT_PLACEHOLDER_COUNT: usize = 12;

/// Something that can produce events for a query.
#[allow(async_fn_in_trait)]
pub trait EventProvider {
    async fn fetch_events(&self, query: &EventQuery) -> eventscout_api::Result<Vec<Event>>;
}

impl EventProvider for TicketmasterClient {
    async fn fetch_events(&self, query: &EventQuery) -> eventscout_api::Result<Vec<Event>> {
        self.search_events(query).await
    }
}

/// Where the current event list came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedOrigin {
    /// Built-in demo data; nothing has been fetched yet.
    #[default]
    Seed,
    /// Returned by the provider.
    Live,
    /// Generated locally after the provider failed.
    Placeholder,
}

impl fmt::Display for FeedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeedOrigin::Seed => "seed",
            FeedOrigin::Live => "live",
            FeedOrigin::Placeholder => "placeholder",
        };
        f.write_str(s)
    }
}

/// Caches the last fetched event list for a staleness window.
///
/// # Thread Safety
///
/// Fetching methods take `&mut self`. In CLI usage the feed is owned by a
/// single task and no synchronization is needed.
pub struct EventFeed<P> {
    provider: P,
    store: EventStore,
    query: Option<EventQuery>,
    fetched_at: Option<DateTime<Utc>>,
    origin: FeedOrigin,
    stale_minutes: i64,
    placeholder_count: usize,
}

impl<P: EventProvider> EventFeed<P> {
    /// Creates an empty feed with the default 5 minute staleness window.
    pub fn new(provider: P) -> Self {
        Self::with_stale_threshold(provider, DEFAULT_STALE_MINUTES)
    }

    /// Creates an empty feed with a custom staleness threshold.
    pub fn with_stale_threshold(provider: P, stale_minutes: i64) -> Self {
        Self {
            provider,
            store: EventStore::new(),
            query: None,
            fetched_at: None,
            origin: FeedOrigin::Seed,
            stale_minutes,
            placeholder_count: DEFAULT_PLACEHOLDER_COUNT,
        }
    }

    /// Sets how many placeholders are generated when a fetch fails.
    pub fn placeholder_count(mut self, count: usize) -> Self {
        self.placeholder_count = count;
        self
    }

    /// Seeds the cache with a previously fetched list.
    ///
    /// Used to restore a feed from a saved snapshot so a fresh listing is not
    /// refetched on every run.
    pub fn prime(
        &mut self,
        query: Option<EventQuery>,
        store: EventStore,
        fetched_at: Option<DateTime<Utc>>,
        origin: FeedOrigin,
    ) {
        self.query = query;
        self.store = store;
        self.fetched_at = fetched_at;
        self.origin = origin;
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The currently cached events.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The query the cached list answers, if any.
    pub fn query(&self) -> Option<&EventQuery> {
        self.query.as_ref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn origin(&self) -> FeedOrigin {
        self.origin
    }

    /// Returns true if the cached list is older than the threshold.
    ///
    /// A list that was never fetched is stale. A threshold too large to
    /// represent as a duration never expires.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        let Some(fetched_at) = self.fetched_at else {
            return true;
        };
        match Duration::try_minutes(self.stale_minutes) {
            Some(threshold) => now.signed_duration_since(fetched_at) > threshold,
            None => false,
        }
    }

    /// Returns true if `query` differs from the cached one or the list is stale.
    pub fn needs_refresh(&self, query: &EventQuery, now: DateTime<Utc>) -> bool {
        self.query.as_ref() != Some(query) || self.is_stale(now)
    }

    /// Returns events for `query`, fetching only when needed.
    pub async fn events(&mut self, query: &EventQuery, now: DateTime<Utc>) -> &EventStore {
        if self.needs_refresh(query, now) {
            self.refresh(query, now).await;
        } else {
            tracing::debug!(count = self.store.len(), "serving cached events");
        }
        &self.store
    }

    /// Fetches events for `query` regardless of staleness.
    ///
    /// On provider failure the list is replaced with placeholders and the
    /// origin becomes [`FeedOrigin::Placeholder`]. The placeholders are cached
    /// for the same window as a live list.
    pub async fn refresh(&mut self, query: &EventQuery, now: DateTime<Utc>) -> &EventStore {
        match self.provider.fetch_events(query).await {
            Ok(events) => {
                tracing::info!(count = events.len(), "fetched live events");
                self.store = EventStore::from(events);
                self.origin = FeedOrigin::Live;
            }
            Err(e) => {
                tracing::warn!(error = %e, "event fetch failed, using placeholder events");
                self.store =
                    EventStore::from(placeholder::generate_events(query, self.placeholder_count));
                self.origin = FeedOrigin::Placeholder;
            }
        }

        self.query = Some(query.clone());
        self.fetched_at = Some(now);
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use eventscout_api::error::ApiError;

    struct CountingProvider {
        calls: Cell<usize>,
        fail: bool,
    }

    impl CountingProvider {
        fn ok() -> Self {
            Self {
                calls: Cell::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Cell::new(0),
                fail: true,
            }
        }
    }

    impl EventProvider for CountingProvider {
        async fn fetch_events(&self, query: &EventQuery) -> eventscout_api::Result<Vec<Event>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(ApiError::Network {
                    message: "connection refused".to_string(),
                }
                .into());
            }
            let title = query.keyword.clone().unwrap_or_else(|| "Live".to_string());
            Ok(vec![Event::builder("tm-1", title, "2025-04-19").build()])
        }
    }

    fn at(minutes: i64) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-04-16T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
            + Duration::minutes(minutes)
    }

    #[tokio::test]
    async fn test_first_call_fetches() {
        let mut feed = EventFeed::new(CountingProvider::ok());
        let query = EventQuery::new();

        let events = feed.events(&query, at(0)).await;
        assert_eq!(events.len(), 1);
        assert_eq!(feed.origin(), FeedOrigin::Live);
        assert_eq!(feed.provider().calls.get(), 1);
        assert_eq!(feed.fetched_at(), Some(at(0)));
    }

    #[tokio::test]
    async fn test_cached_within_window() {
        let mut feed = EventFeed::new(CountingProvider::ok());
        let query = EventQuery::new();

        feed.events(&query, at(0)).await;
        feed.events(&query, at(3)).await;
        feed.events(&query, at(5)).await;
        assert_eq!(feed.provider().calls.get(), 1);
    }

    #[tokio::test]
    async fn test_refetch_after_window() {
        let mut feed = EventFeed::new(CountingProvider::ok());
        let query = EventQuery::new();

        feed.events(&query, at(0)).await;
        feed.events(&query, at(6)).await;
        assert_eq!(feed.provider().calls.get(), 2);
    }

    #[tokio::test]
    async fn test_changed_query_refetches() {
        let mut feed = EventFeed::new(CountingProvider::ok());

        feed.events(&EventQuery::new().keyword("jazz"), at(0)).await;
        let events = feed.events(&EventQuery::new().keyword("rock"), at(1)).await;

        assert_eq!(events.iter().next().map(|e| e.title.as_str()), Some("rock"));
        assert_eq!(feed.provider().calls.get(), 2);
    }

    #[tokio::test]
    async fn test_failure_substitutes_placeholders() {
        let mut feed = EventFeed::new(CountingProvider::failing()).placeholder_count(4);
        let query = EventQuery::new().category("Music");

        let events = feed.events(&query, at(0)).await;
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(placeholder::is_placeholder));
        assert!(events.iter().all(|e| e.category == "Music"));
        assert_eq!(feed.origin(), FeedOrigin::Placeholder);
    }

    #[tokio::test]
    async fn test_placeholders_cached_for_window() {
        let mut feed = EventFeed::new(CountingProvider::failing());
        let query = EventQuery::new();

        let first: Vec<String> = feed
            .events(&query, at(0))
            .await
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let second: Vec<String> = feed
            .events(&query, at(2))
            .await
            .iter()
            .map(|e| e.id.clone())
            .collect();

        assert_eq!(first, second);
        assert_eq!(feed.provider().calls.get(), 1);
    }

    #[tokio::test]
    async fn test_refresh_ignores_window() {
        let mut feed = EventFeed::new(CountingProvider::ok());
        let query = EventQuery::new();

        feed.events(&query, at(0)).await;
        feed.refresh(&query, at(1)).await;
        assert_eq!(feed.provider().calls.get(), 2);
    }

    #[tokio::test]
    async fn test_prime_restores_cache() {
        let mut feed = EventFeed::new(CountingProvider::ok());
        let query = EventQuery::new().city("Boston");
        let store = EventStore::from(vec![Event::builder("kept", "Kept", "2025-04-19").build()]);

        feed.prime(Some(query.clone()), store, Some(at(0)), FeedOrigin::Live);
        let events = feed.events(&query, at(2)).await;

        assert!(events.get("kept").is_some());
        assert_eq!(feed.provider().calls.get(), 0);
    }

    #[test]
    fn test_never_fetched_is_stale() {
        let feed = EventFeed::new(CountingProvider::ok());
        assert!(feed.is_stale(at(0)));
        assert!(feed.needs_refresh(&EventQuery::new(), at(0)));
    }

    #[test]
    fn test_custom_threshold() {
        let mut feed = EventFeed::with_stale_threshold(CountingProvider::ok(), 1);
        feed.prime(Some(EventQuery::new()), EventStore::new(), Some(at(0)), FeedOrigin::Live);

        assert!(!feed.is_stale(at(1)));
        assert!(feed.is_stale(at(2)));
    }

    #[test]
    fn test_oversized_threshold_never_expires() {
        let mut feed = EventFeed::with_stale_threshold(CountingProvider::ok(), i64::MAX);
        feed.prime(Some(EventQuery::new()), EventStore::new(), Some(at(0)), FeedOrigin::Live);

        assert!(!feed.is_stale(at(60 * 24 * 365)));
        assert!(!feed.needs_refresh(&EventQuery::new(), at(10)));
    }

    #[test]
    fn test_feed_origin_serde() {
        assert_eq!(serde_json::to_string(&FeedOrigin::Placeholder).unwrap(), "\"placeholder\"");
        assert_eq!(FeedOrigin::default(), FeedOrigin::Seed);
    }
}
