//! Filter evaluation against events.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use eventscout_api::models::Event;
//! use eventscout_core::filter::{DateWindow, EventFilter, FilterEvaluator};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();
//! let filter = EventFilter::new().date_range(DateWindow::ThisWeekend);
//! let evaluator = FilterEvaluator::with_today(&filter, today);
//!
//! let saturday = Event::builder("1", "Block Party", "2025-04-19").build();
//! assert!(evaluator.matches(&saturday));
//! ```

use chrono::{Local, NaiveDate};
use eventscout_api::models::Event;

use super::criteria::{EventFilter, PriceRange};

/// Evaluates an [`EventFilter`] against events.
///
/// Date windows are measured from the local calendar day, re-read on every
/// call to [`matches`](Self::matches), unless a fixed day was supplied with
/// [`with_today`](Self::with_today).
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    filter: &'a EventFilter,
    today: Option<NaiveDate>,
    query_lower: String,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates an evaluator measuring dates from the local clock.
    pub fn new(filter: &'a EventFilter) -> Self {
        Self::build(filter, None)
    }

    /// Creates an evaluator measuring dates from a fixed day.
    pub fn with_today(filter: &'a EventFilter, today: NaiveDate) -> Self {
        Self::build(filter, Some(today))
    }

    fn build(filter: &'a EventFilter, today: Option<NaiveDate>) -> Self {
        if let Some(miles) = filter.distance {
            tracing::debug!(miles, "distance filter accepted but not evaluated");
        }
        Self {
            filter,
            today,
            query_lower: filter.query.trim().to_lowercase(),
        }
    }

    /// Returns true if the event passes every supplied criterion.
    pub fn matches(&self, event: &Event) -> bool {
        let today = self.today();

        self.matches_categories(event)
            && self.matches_moods(event)
            && self.matches_price(event)
            && self
                .filter
                .date_range
                .map_or(true, |window| window.matches(event, today))
            && self
                .filter
                .quick
                .map_or(true, |quick| quick.matches(event, today))
            && self.matches_query(event)
    }

    /// Filters events, preserving their order.
    pub fn filter_events<'b, I>(&self, events: I) -> Vec<&'b Event>
    where
        I: IntoIterator<Item = &'b Event>,
    {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Category list matches the category itself or any tag, exactly.
    fn matches_categories(&self, event: &Event) -> bool {
        let categories = &self.filter.categories;
        categories.is_empty()
            || categories.contains(&event.category)
            || categories.iter().any(|c| event.has_tag(c))
    }

    fn matches_moods(&self, event: &Event) -> bool {
        let moods = &self.filter.moods;
        moods.is_empty() || event.mood.iter().any(|m| moods.contains(m))
    }

    fn matches_price(&self, event: &Event) -> bool {
        match self.filter.price_range {
            None => true,
            Some(range) => price_in_range(event, range),
        }
    }

    fn matches_query(&self, event: &Event) -> bool {
        let q = self.query_lower.as_str();
        if q.is_empty() {
            return true;
        }

        let hit = |field: &str| field.to_lowercase().contains(q);
        hit(&event.title)
            || hit(&event.category)
            || event.tags.iter().any(|t| hit(t))
            || hit(&event.location.name)
            || hit(&event.location.city)
    }
}

/// Price rule.
///
/// A free event only passes when the requested minimum is 0. A paid event
/// passes when its minimum is at least the requested minimum. Below the
/// open-ended sentinel the requested maximum also caps the event minimum.
fn price_in_range(event: &Event, range: PriceRange) -> bool {
    let price = &event.price;
    let lower_ok = if price.is_free {
        range.min == 0.0
    } else {
        price.min >= range.min
    };

    if !lower_ok {
        return false;
    }

    !(range.is_bounded() && price.effective_min() > range.max)
}
