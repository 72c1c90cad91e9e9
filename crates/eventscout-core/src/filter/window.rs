//! Named calendar windows relative to a reference day.
//!
//! All comparisons are day-granular: event dates are plain calendar dates and
//! "today" is the local calendar day at evaluation time.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};
use eventscout_api::models::Event;
use serde::{Deserialize, Serialize};

use super::error::FilterError;

/// Days covered by `this-week` and by the start of `next-week`.
const WEEK_DAYS: i64 = 7;

/// Days covered by the `upcoming` quick filter.
const UPCOMING_DAYS: i64 = 14;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A span covering `days` days after `start`, plus `start` itself.
    fn after(start: NaiveDate, days: i64) -> Self {
        Self::new(start, start + Duration::days(days))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Date-range filter selectable on the browse screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateWindow {
    #[default]
    All,
    Today,
    Tomorrow,
    ThisWeek,
    ThisWeekend,
    NextWeek,
    NextMonth,
}

impl DateWindow {
    /// All windows, in display order.
    pub const ALL: [DateWindow; 7] = [
        DateWindow::All,
        DateWindow::Today,
        DateWindow::Tomorrow,
        DateWindow::ThisWeek,
        DateWindow::ThisWeekend,
        DateWindow::NextWeek,
        DateWindow::NextMonth,
    ];

    /// Returns the days this window covers, or `None` for [`DateWindow::All`].
    pub fn span(self, today: NaiveDate) -> Option<DateSpan> {
        match self {
            DateWindow::All => None,
            DateWindow::Today => Some(DateSpan::new(today, today)),
            DateWindow::Tomorrow => {
                let tomorrow = today + Duration::days(1);
                Some(DateSpan::new(tomorrow, tomorrow))
            }
            DateWindow::ThisWeek => Some(DateSpan::after(today, WEEK_DAYS)),
            DateWindow::ThisWeekend => Some(weekend_span(today)),
            DateWindow::NextWeek => Some(DateSpan::new(
                today + Duration::days(WEEK_DAYS),
                today + Duration::days(2 * WEEK_DAYS),
            )),
            DateWindow::NextMonth => next_month_span(today),
        }
    }

    /// Returns true if `date` falls inside this window.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.span(today) {
            None => true,
            Some(span) => span.contains(date),
        }
    }

    /// Returns true if the event's date falls inside this window.
    ///
    /// An event whose date doesn't parse only passes [`DateWindow::All`].
    pub fn matches(self, event: &Event, today: NaiveDate) -> bool {
        if self == DateWindow::All {
            return true;
        }
        event
            .as_naive_date()
            .is_some_and(|date| self.contains(date, today))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::Today => "today",
            DateWindow::Tomorrow => "tomorrow",
            DateWindow::ThisWeek => "this-week",
            DateWindow::ThisWeekend => "this-weekend",
            DateWindow::NextWeek => "next-week",
            DateWindow::NextMonth => "next-month",
        }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateWindow {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        DateWindow::ALL
            .into_iter()
            .find(|w| w.as_str() == wanted)
            .ok_or_else(|| FilterError::unknown_window(s))
    }
}

/// Shortcut filters on the primary listing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickFilter {
    #[default]
    All,
    /// Trending events within the coming month.
    Trending,
    /// Same window as [`DateWindow::ThisWeekend`].
    Weekend,
    /// Events in the next 14 days.
    Upcoming,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 4] = [
        QuickFilter::All,
        QuickFilter::Trending,
        QuickFilter::Weekend,
        QuickFilter::Upcoming,
    ];

    /// Returns true if the event passes this quick filter.
    pub fn matches(self, event: &Event, today: NaiveDate) -> bool {
        let span = match self {
            QuickFilter::All => return true,
            QuickFilter::Trending => {
                if !event.is_trending {
                    return false;
                }
                match today.checked_add_months(Months::new(1)) {
                    Some(end) => DateSpan::new(today, end),
                    None => return false,
                }
            }
            QuickFilter::Weekend => weekend_span(today),
            QuickFilter::Upcoming => DateSpan::after(today, UPCOMING_DAYS),
        };

        event.as_naive_date().is_some_and(|date| span.contains(date))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuickFilter::All => "all",
            QuickFilter::Trending => "trending",
            QuickFilter::Weekend => "weekend",
            QuickFilter::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        QuickFilter::ALL
            .into_iter()
            .find(|q| q.as_str() == wanted)
            .ok_or_else(|| FilterError::unknown_quick_filter(s))
    }
}

/// Friday through Sunday of the coming weekend.
///
/// On Saturday and Sunday this is the *next* weekend: the offset to Friday
/// is `(5 - weekday + 7) % 7` with Sunday as day 0.
pub fn weekend_span(today: NaiveDate) -> DateSpan {
    let weekday = i64::from(today.weekday().num_days_from_sunday());
    let to_friday = (5 - weekday + 7) % 7;
    let friday = today + Duration::days(to_friday);
    DateSpan::after(friday, 2)
}

/// First through last day of the next calendar month.
fn next_month_span(today: NaiveDate) -> Option<DateSpan> {
    let first_of_this = today.with_day(1)?;
    let first_of_next = first_of_this.checked_add_months(Months::new(1))?;
    let first_of_after = first_of_this.checked_add_months(Months::new(2))?;
    Some(DateSpan::new(first_of_next, first_of_after - Duration::days(1)))
}
