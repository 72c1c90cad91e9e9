//! Interest-based suggestions.
//!
//! Both matchers are lazy and recompute from their inputs on every call.
//! Matching is exact and case-sensitive; results keep input order.

use eventscout_api::models::Event;

use crate::{EventStore, User};

/// Events with at least one tag among the user's interests.
pub fn suggested_events<'a>(
    user: &'a User,
    store: &'a EventStore,
) -> impl Iterator<Item = &'a Event> + 'a {
    store
        .iter()
        .filter(move |event| user.shares_interest(&event.tags))
}

/// Users sharing an interest with `user`, excluding the user and existing
/// friends.
pub fn suggested_friends<'a>(
    user: &'a User,
    directory: &'a [User],
) -> impl Iterator<Item = &'a User> + 'a {
    directory.iter().filter(move |candidate| {
        candidate.id != user.id
            && !user.is_friend(&candidate.id)
            && user.shares_interest(&candidate.interests)
    })
}
