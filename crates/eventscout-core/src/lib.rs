//! Filtering, recommendation and points engine for eventscout.
//!
//! This crate holds everything that operates on events once a source has
//! produced them: the read-only [`EventStore`], the filter evaluator and
//! date-window classifier ([`filter`]), interest matching ([`recommend`]),
//! the points ledger ([`ledger`]) and the staleness-windowed [`feed`] that
//! substitutes placeholders when a live fetch fails.

use chrono::{DateTime, NaiveDate, Utc};
use eventscout_api::discovery::EventQuery;
use eventscout_api::models::Event;
use serde::{Deserialize, Serialize};

pub mod feed;
pub mod filter;
pub mod ledger;
mod lookups;
pub mod recommend;
pub mod seed;
mod store;
mod user;

pub use feed::{EventFeed, EventProvider, FeedOrigin};
pub use ledger::{Notification, NotificationLevel, Session, Transition};
pub use lookups::{find_similar_user_id, format_not_found_error};
pub use store::{Result as StoreResult, SnapshotStore, SnapshotStoreError};
pub use user::{Friend, User};

/// Ordered, read-only collection of events.
///
/// Store order is the order events were produced in; filters and
/// recommendations preserve it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds an event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Iterates over events in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Returns the events as a slice.
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<Event>> for EventStore {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl FromIterator<Event> for EventStore {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Session state carried between CLI invocations.
///
/// The engine itself is purely in-memory; the snapshot exists so a
/// command-line front end can pick the session back up on the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The acting user.
    pub user: User,

    /// Other users that can be befriended.
    #[serde(default)]
    pub directory: Vec<User>,

    /// The current event listing.
    #[serde(default)]
    pub events: EventStore,

    /// Query the listing was fetched with, if it came from a provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<EventQuery>,

    /// When the listing was last fetched from a provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,

    /// Where the listing came from.
    #[serde(default)]
    pub origin: FeedOrigin,
}

impl Snapshot {
    /// Creates a snapshot from the built-in seed data, dated relative to `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut directory = seed::seed_users();
        let user = if directory.is_empty() {
            User::new(seed::CURRENT_USER_ID, "You")
        } else {
            directory.remove(0)
        };

        Self {
            user,
            directory,
            events: EventStore::from(seed::seed_events(today)),
            query: None,
            fetched_at: None,
            origin: FeedOrigin::Seed,
        }
    }
}
