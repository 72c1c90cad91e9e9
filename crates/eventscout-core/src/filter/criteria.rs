//! Filter criteria for event listings.

use serde::{Deserialize, Serialize};

use super::error::{FilterError, FilterResult};
use super::window::{DateWindow, QuickFilter};

/// A requested maximum below this is an upper bound; at or above it the
/// range is open-ended ("$100+").
pub const NO_UPPER_BOUND: f64 = 100.0;

/// Requested price range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Creates a price range, rejecting non-finite or negative bounds and
    /// `min > max`.
    pub fn new(min: f64, max: f64) -> FilterResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 || min > max {
            return Err(FilterError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The full range, `0..=100+`.
    pub fn any() -> Self {
        Self {
            min: 0.0,
            max: NO_UPPER_BOUND,
        }
    }

    /// Returns true if the maximum is a real bound.
    pub fn is_bounded(&self) -> bool {
        self.max < NO_UPPER_BOUND
    }
}

/// Criteria a listing is filtered by.
///
/// Every field defaults to "no constraint". Supplied fields combine with AND.
///
/// # Example
///
/// ```
/// use eventscout_core::filter::{DateWindow, EventFilter};
///
/// let filter = EventFilter::new()
///     .categories(["Music"])
///     .date_range(DateWindow::ThisWeekend)
///     .query("jazz");
///
/// assert!(!filter.is_empty());
/// assert!(EventFilter::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Matches the event category or any of its tags.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Matches if any of the event's moods is listed.
    #[serde(default)]
    pub moods: Vec<String>,

    #[serde(default)]
    pub price_range: Option<PriceRange>,

    /// Search radius in miles. Accepted but not evaluated: events carry no
    /// reference position to measure from.
    #[serde(default)]
    pub distance: Option<f64>,

    #[serde(default)]
    pub date_range: Option<DateWindow>,

    #[serde(default)]
    pub quick: Option<QuickFilter>,

    /// Free-text search, case-insensitive.
    #[serde(default)]
    pub query: String,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn moods<I, S>(mut self, moods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moods = moods.into_iter().map(Into::into).collect();
        self
    }

    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn distance(mut self, miles: f64) -> Self {
        self.distance = Some(miles);
        self
    }

    pub fn date_range(mut self, window: DateWindow) -> Self {
        self.date_range = Some(window);
        self
    }

    pub fn quick(mut self, quick: QuickFilter) -> Self {
        self.quick = Some(quick);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns true if no field constrains the listing.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.moods.is_empty()
            && self.price_range.is_none()
            && self.date_range.unwrap_or_default() == DateWindow::All
            && self.quick.unwrap_or_default() == QuickFilter::All
            && self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_validation() {
        assert!(PriceRange::new(0.0, 50.0).is_ok());
        assert!(PriceRange::new(20.0, 20.0).is_ok());
        assert!(PriceRange::new(60.0, 20.0).is_err());
        assert!(PriceRange::new(-1.0, 20.0).is_err());
    }

    #[test]
    fn test_price_range_rejects_non_finite() {
        assert!(matches!(
            PriceRange::new(f64::NAN, 100.0),
            Err(FilterError::InvalidPriceRange { .. })
        ));
        assert!(PriceRange::new(0.0, f64::NAN).is_err());
        assert!(PriceRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_price_range_bounded() {
        assert!(PriceRange::new(0.0, 99.0).unwrap().is_bounded());
        assert!(!PriceRange::any().is_bounded());
    }

    #[test]
    fn test_distance_alone_is_empty() {
        // Distance is never evaluated, so it doesn't constrain anything.
        assert!(EventFilter::new().distance(5.0).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        assert!(EventFilter::new().query("   ").is_empty());
        assert!(!EventFilter::new().query("jazz").is_empty());
    }
}
