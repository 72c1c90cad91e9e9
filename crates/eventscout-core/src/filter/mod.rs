//! Event filtering and date-window classification.
//!
//! An [`EventFilter`] collects optional criteria; a [`FilterEvaluator`]
//! tests events against it. Supplied criteria combine with AND and an unset
//! criterion always passes.
//!
//! # Criteria
//!
//! - `categories` - event category or any tag equals one of the names (exact)
//! - `moods` - any event mood is listed
//! - `price_range` - see [`PriceRange`]; a maximum of 100 or more is open-ended
//! - `distance` - accepted, never evaluated
//! - `date_range` - a [`DateWindow`] such as `today` or `this-weekend`
//! - `quick` - a [`QuickFilter`]: `trending`, `weekend` or `upcoming`
//! - `query` - case-insensitive substring of title, category, tags, venue or city
//!
//! # Example
//!
//! ```
//! use eventscout_core::filter::{EventFilter, FilterEvaluator, QuickFilter};
//!
//! let filter = EventFilter::new().quick(QuickFilter::Upcoming).query("jazz");
//! let evaluator = FilterEvaluator::new(&filter);
//!
//! let events: Vec<eventscout_api::models::Event> = vec![];
//! assert!(evaluator.filter_events(&events).is_empty());
//! ```

mod criteria;
mod error;
mod evaluator;
mod window;

pub use criteria::{EventFilter, PriceRange, NO_UPPER_BOUND};
pub use error::{FilterError, FilterResult};
pub use evaluator::FilterEvaluator;
pub use window::{weekend_span, DateSpan, DateWindow, QuickFilter};
