//! Data types produced by event sources.
//!
//! Every source (live Ticketmaster fetch, placeholder generator, seed data)
//! emits the same [`Event`] shape.

mod event;

pub use event::*;
