//! Prelude module for convenient imports.
//!
//! ```
//! use eventscout_api::prelude::*;
//! ```

// Client types
pub use crate::client::TicketmasterClient;

// Error types
pub use crate::error::{ApiError, Error, Result};

// Discovery types
pub use crate::discovery::EventQuery;

// Placeholder generation
pub use crate::placeholder::{generate_events, is_placeholder};

// Data models
pub use crate::models::{Coordinates, Event, EventLocation, EventPrice, EventSource};
