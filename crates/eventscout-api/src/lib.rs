//! Event source client library for eventscout.
//!
//! Provides the [`Event`](models::Event) record shared by the whole
//! workspace, a thin client for the Ticketmaster Discovery API, and a
//! generator of placeholder events used when a live fetch fails.
//!
//! # Quick Start
//!
//! ```
//! use eventscout_api::prelude::*;
//!
//! let query = EventQuery::new().city("Boston");
//! let events = generate_events(&query, 3);
//! assert_eq!(events.len(), 3);
//! ```

pub mod client;
pub mod discovery;
pub mod error;
pub mod models;
pub mod placeholder;
pub mod prelude;

pub use error::{Error, Result};
