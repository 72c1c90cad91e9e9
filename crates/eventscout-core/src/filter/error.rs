//! Error types for building event filters.

use thiserror::Error;

/// A specialized Result type for filter construction.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while building a filter from user input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterError {
    /// An unrecognized date window name.
    #[error("unknown date window: {name} (expected one of: {expected})")]
    UnknownWindow {
        /// The name that was given.
        name: String,
        /// Comma-separated list of accepted names.
        expected: &'static str,
    },

    /// An unrecognized quick filter name.
    #[error("unknown quick filter: {name} (expected one of: {expected})")]
    UnknownQuickFilter {
        /// The name that was given.
        name: String,
        /// Comma-separated list of accepted names.
        expected: &'static str,
    },

    /// A price range with a negative bound or min above max.
    #[error("invalid price range: {min}..{max}")]
    InvalidPriceRange {
        /// Requested minimum.
        min: f64,
        /// Requested maximum.
        max: f64,
    },
}

impl FilterError {
    /// Creates an unknown window error.
    pub fn unknown_window(name: impl Into<String>) -> Self {
        FilterError::UnknownWindow {
            name: name.into(),
            expected: "all, today, tomorrow, this-week, this-weekend, next-week, next-month",
        }
    }

    /// Creates an unknown quick filter error.
    pub fn unknown_quick_filter(name: impl Into<String>) -> Self {
        FilterError::UnknownQuickFilter {
            name: name.into(),
            expected: "all, trending, weekend, upcoming",
        }
    }
}
