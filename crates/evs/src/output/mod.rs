//! Output formatting utilities for the evs CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`events`] - Event listing and detail output
//! - [`users`] - Profile, friend and suggestion output
//! - [`ledger`] - Ledger transitions and notifications
//! - [`helpers`] - Common formatting utilities (truncation, prices, dates)

mod events;
pub mod helpers;
mod ledger;
mod users;

pub use events::{
    format_event_details_json, format_event_details_table, format_events_json,
    format_events_table, format_refresh_json, format_refresh_table,
};

pub use ledger::{format_transition_json, format_transition_table};

pub use users::{
    format_friends_json, format_friends_table, format_profile_json, format_profile_table,
    format_users_json, format_users_table,
};
