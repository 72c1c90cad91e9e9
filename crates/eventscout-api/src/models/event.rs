//! The event record shared by every event source.
//!
//! Field names serialize in camelCase so the JSON shape matches what the
//! upstream listing services and the seed data use.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A discoverable occurrence a user may attend.
///
/// Events are produced by an event source (live fetch, placeholder generator
/// or seed data) and are never mutated afterwards.
///
/// # Examples
///
/// ```
/// use eventscout_api::models::{Event, EventPrice};
///
/// let event = Event::builder("evt-1", "Rust Meetup", "2026-01-25")
///     .category("Tech")
///     .tags(["Tech", "Career"])
///     .price(EventPrice::free())
///     .build();
///
/// assert_eq!(event.as_naive_date().unwrap().to_string(), "2026-01-25");
/// assert_eq!(event.price.effective_min(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique, stable identifier.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Single category label (e.g. "Music", "Tech").
    pub category: String,

    /// Free-text tags. Order matters only for display truncation.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Mood labels (e.g. "energetic", "chill").
    #[serde(default)]
    pub mood: Vec<String>,

    /// Calendar date in YYYY-MM-DD format.
    pub date: String,

    /// Optional start time (HH:MM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Optional end time (HH:MM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    pub location: EventLocation,

    pub price: EventPrice,

    #[serde(default)]
    pub attendees: u32,

    #[serde(default)]
    pub is_trending: bool,

    #[serde(default)]
    pub is_editors_pick: bool,

    /// Points granted when the user starts attending.
    #[serde(default)]
    pub points_for_attending: u32,

    /// Points granted the first time the user shares the event.
    #[serde(default)]
    pub points_for_sharing: u32,

    pub source: EventSource,

    #[serde(default)]
    pub url: String,
}

impl Event {
    /// Starts building an event with the required identity and date fields.
    pub fn builder(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
    ) -> EventBuilder {
        EventBuilder::new(id, title, date)
    }

    /// Returns the event date as a NaiveDate, or `None` if it doesn't parse.
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Returns true if the event carries the given tag (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    /// Venue name.
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl EventLocation {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            city: city.into(),
            coordinates: None,
        }
    }
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Ticket pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPrice {
    pub min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub is_free: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for EventPrice {
    fn default() -> Self {
        Self::free()
    }
}

impl EventPrice {
    /// A free event.
    pub fn free() -> Self {
        Self {
            min: 0.0,
            max: None,
            currency: default_currency(),
            is_free: true,
        }
    }

    /// A paid event with a price range.
    pub fn paid(min: f64, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            currency: default_currency(),
            is_free: false,
        }
    }

    /// The minimum price, treating free events as 0 whatever `min` says.
    pub fn effective_min(&self) -> f64 {
        if self.is_free {
            0.0
        } else {
            self.min
        }
    }
}

/// Which service an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    Ticketmaster,
    Eventbrite,
    Seatgeek,
    Songkick,
    Meetup,
    /// Seed data and locally generated placeholders.
    Internal,
}

impl std::fmt::Display for EventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventSource::Ticketmaster => "ticketmaster",
            EventSource::Eventbrite => "eventbrite",
            EventSource::Seatgeek => "seatgeek",
            EventSource::Songkick => "songkick",
            EventSource::Meetup => "meetup",
            EventSource::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Builder for [`Event`], used by the seed data, placeholder generator and tests.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    fn new(id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            event: Event {
                id: id.into(),
                title: title.into(),
                description: String::new(),
                image: String::new(),
                category: String::new(),
                tags: Vec::new(),
                mood: Vec::new(),
                date: date.into(),
                start_time: None,
                end_time: None,
                location: EventLocation::default(),
                price: EventPrice::free(),
                attendees: 0,
                is_trending: false,
                is_editors_pick: false,
                points_for_attending: 0,
                points_for_sharing: 0,
                source: EventSource::Internal,
                url: String::new(),
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.event.description = description.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.event.image = image.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.event.category = category.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn mood<I, S>(mut self, mood: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event.mood = mood.into_iter().map(Into::into).collect();
        self
    }

    pub fn times(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.event.start_time = start.map(str::to_string);
        self.event.end_time = end.map(str::to_string);
        self
    }

    pub fn location(mut self, location: EventLocation) -> Self {
        self.event.location = location;
        self
    }

    pub fn price(mut self, price: EventPrice) -> Self {
        self.event.price = price;
        self
    }

    pub fn attendees(mut self, attendees: u32) -> Self {
        self.event.attendees = attendees;
        self
    }

    pub fn trending(mut self, is_trending: bool) -> Self {
        self.event.is_trending = is_trending;
        self
    }

    pub fn editors_pick(mut self, is_editors_pick: bool) -> Self {
        self.event.is_editors_pick = is_editors_pick;
        self
    }

    /// Sets the points granted for attending and for sharing.
    pub fn points(mut self, attending: u32, sharing: u32) -> Self {
        self.event.points_for_attending = attending;
        self.event.points_for_sharing = sharing;
        self
    }

    pub fn source(mut self, source: EventSource) -> Self {
        self.event.source = source;
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.event.url = url.into();
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}
