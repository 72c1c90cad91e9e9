//! Discovery API request and response types.
//!
//! [`EventQuery`] is the source-independent query the rest of the workspace
//! builds. It is converted to the Discovery API's parameter names on the way
//! out, and the nested Discovery payload is flattened into [`Event`] records
//! on the way back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Coordinates, Event, EventLocation, EventPrice, EventSource};

/// Points granted for attending an event fetched from Ticketmaster.
pub const TICKETMASTER_ATTEND_POINTS: u32 = 100;

/// Points granted for sharing an event fetched from Ticketmaster.
pub const TICKETMASTER_SHARE_POINTS: u32 = 25;

/// Default page size.
const DEFAULT_SIZE: u32 = 20;

/// Query parameters accepted by every event source.
///
/// # Examples
///
/// ```
/// use eventscout_api::discovery::EventQuery;
///
/// let query = EventQuery::new().keyword("jazz").city("Boston");
/// assert_eq!(query.keyword.as_deref(), Some("jazz"));
/// assert!(query.category.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state_code(mut self, state_code: impl Into<String>) -> Self {
        self.state_code = Some(state_code.into());
        self
    }

    pub fn dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Wire-level parameters for `GET /events.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DiscoveryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date_time: Option<String>,
    size: u32,
    sort: &'static str,
}

impl From<&EventQuery> for DiscoveryParams {
    fn from(query: &EventQuery) -> Self {
        let start_of_day = |d: NaiveDate| format!("{}T00:00:00Z", d.format("%Y-%m-%d"));
        let end_of_day = |d: NaiveDate| format!("{}T23:59:59Z", d.format("%Y-%m-%d"));

        Self {
            keyword: query.keyword.clone(),
            classification_name: query.category.clone(),
            city: query.city.clone(),
            state_code: query.state_code.clone(),
            start_date_time: query.start_date.map(start_of_day),
            end_date_time: query.end_date.map(end_of_day),
            size: query.size.unwrap_or(DEFAULT_SIZE),
            sort: "date,asc",
        }
    }
}

/// Top-level Discovery API search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryResponse {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedEvents>,
}

impl DiscoveryResponse {
    /// Flattens the response into events, skipping entries without a date.
    pub fn into_events(self) -> Vec<Event> {
        self.embedded
            .map(|e| e.events)
            .unwrap_or_default()
            .into_iter()
            .filter_map(TmEvent::into_event)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedEvents {
    #[serde(default)]
    pub events: Vec<TmEvent>,
}

/// One event as returned by the Discovery API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmEvent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub please_note: Option<String>,
    #[serde(default)]
    pub images: Vec<TmImage>,
    #[serde(default)]
    pub dates: TmDates,
    #[serde(default)]
    pub classifications: Vec<TmClassification>,
    #[serde(default)]
    pub price_ranges: Vec<TmPriceRange>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<TmEventEmbedded>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmImage {
    pub url: String,
    #[serde(default)]
    pub width: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmDates {
    #[serde(default)]
    pub start: TmStart,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmStart {
    #[serde(default)]
    pub local_date: Option<String>,
    #[serde(default)]
    pub local_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmClassification {
    #[serde(default)]
    pub segment: Option<TmNamed>,
    #[serde(default)]
    pub genre: Option<TmNamed>,
    #[serde(default)]
    pub sub_genre: Option<TmNamed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmNamed {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmPriceRange {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmEventEmbedded {
    #[serde(default)]
    pub venues: Vec<TmVenue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmVenue {
    pub name: String,
    #[serde(default)]
    pub address: Option<TmAddress>,
    #[serde(default)]
    pub city: Option<TmNamed>,
    #[serde(default)]
    pub location: Option<TmLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmAddress {
    #[serde(default)]
    pub line1: String,
}

/// Ticketmaster sends coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct TmLocation {
    pub latitude: String,
    pub longitude: String,
}

impl TmEvent {
    /// Maps the Discovery payload to an [`Event`].
    ///
    /// Returns `None` when the event has no usable start date; the filters
    /// cannot place such an event in any window.
    pub fn into_event(self) -> Option<Event> {
        let date = self.dates.start.local_date.clone()?;

        let classification = self.classifications.first();
        let segment = classification
            .and_then(|c| c.segment.as_ref())
            .map(|s| s.name.clone());
        let category = segment.clone().unwrap_or_else(|| "Other".to_string());

        let mut tags: Vec<String> = Vec::new();
        if let Some(c) = classification {
            for named in [&c.segment, &c.genre, &c.sub_genre].into_iter().flatten() {
                // "Undefined" is Ticketmaster's placeholder classification
                if named.name != "Undefined" && !tags.contains(&named.name) {
                    tags.push(named.name.clone());
                }
            }
        }

        let image = self
            .images
            .iter()
            .max_by_key(|i| i.width)
            .map(|i| i.url.clone())
            .unwrap_or_default();

        let price = match self.price_ranges.first() {
            Some(range) if range.min > 0.0 => EventPrice {
                min: range.min,
                max: range.max,
                currency: range.currency.clone().unwrap_or_else(|| "USD".to_string()),
                is_free: false,
            },
            _ => EventPrice::free(),
        };

        let location = self
            .embedded
            .and_then(|e| e.venues.into_iter().next())
            .map(|venue| EventLocation {
                name: venue.name,
                address: venue.address.map(|a| a.line1).unwrap_or_default(),
                city: venue.city.map(|c| c.name).unwrap_or_default(),
                coordinates: venue.location.and_then(|l| {
                    Some(Coordinates {
                        lat: l.latitude.parse().ok()?,
                        lng: l.longitude.parse().ok()?,
                    })
                }),
            })
            .unwrap_or_default();

        let start_time = self
            .dates
            .start
            .local_time
            .as_deref()
            .map(|t| t.chars().take(5).collect::<String>());

        Some(Event {
            id: self.id,
            title: self.name,
            description: self.info.or(self.please_note).unwrap_or_default(),
            image,
            mood: moods_for_segment(segment.as_deref()),
            category,
            tags,
            date,
            start_time,
            end_time: None,
            location,
            price,
            attendees: 0,
            is_trending: false,
            is_editors_pick: false,
            points_for_attending: TICKETMASTER_ATTEND_POINTS,
            points_for_sharing: TICKETMASTER_SHARE_POINTS,
            source: EventSource::Ticketmaster,
            url: self.url.unwrap_or_default(),
        })
    }
}

/// Moods implied by a Ticketmaster segment.
fn moods_for_segment(segment: Option<&str>) -> Vec<String> {
    let moods: &[&str] = match segment {
        Some("Music") => &["energetic", "social"],
        Some("Sports") => &["competitive", "energetic"],
        Some("Arts & Theatre") => &["creative", "inspired"],
        Some("Film") => &["relaxed"],
        _ => &["social"],
    };
    moods.iter().map(|m| m.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "_embedded": {
                "events": [
                    {
                        "id": "G5vYZ9",
                        "name": "Boston Calling",
                        "url": "https://www.ticketmaster.com/event/G5vYZ9",
                        "info": "Three-day festival",
                        "images": [
                            {"url": "https://img/small.jpg", "width": 100},
                            {"url": "https://img/large.jpg", "width": 1024}
                        ],
                        "dates": {"start": {"localDate": "2025-05-23", "localTime": "12:00:00"}},
                        "classifications": [{
                            "segment": {"name": "Music"},
                            "genre": {"name": "Rock"},
                            "subGenre": {"name": "Undefined"}
                        }],
                        "priceRanges": [{"min": 129.5, "max": 299.0, "currency": "USD"}],
                        "_embedded": {"venues": [{
                            "name": "Harvard Athletic Complex",
                            "address": {"line1": "65 N Harvard St"},
                            "city": {"name": "Boston"},
                            "location": {"latitude": "42.366", "longitude": "-71.125"}
                        }]}
                    },
                    {
                        "id": "NoDate",
                        "name": "TBA",
                        "dates": {"start": {}}
                    }
                ]
            }
        }"#
    }

    #[test]
    fn test_response_maps_events() {
        let response: DiscoveryResponse = serde_json::from_str(sample_json()).unwrap();
        let events = response.into_events();

        assert_eq!(events.len(), 1, "events without a date are skipped");
        let event = &events[0];
        assert_eq!(event.id, "G5vYZ9");
        assert_eq!(event.title, "Boston Calling");
        assert_eq!(event.description, "Three-day festival");
        assert_eq!(event.image, "https://img/large.jpg");
        assert_eq!(event.category, "Music");
        assert_eq!(event.tags, vec!["Music", "Rock"]);
        assert_eq!(event.mood, vec!["energetic", "social"]);
        assert_eq!(event.date, "2025-05-23");
        assert_eq!(event.start_time.as_deref(), Some("12:00"));
        assert_eq!(event.location.city, "Boston");
        assert_eq!(event.location.address, "65 N Harvard St");
        assert!(event.location.coordinates.is_some());
        assert!(!event.price.is_free);
        assert_eq!(event.price.min, 129.5);
        assert_eq!(event.points_for_attending, TICKETMASTER_ATTEND_POINTS);
        assert_eq!(event.source, EventSource::Ticketmaster);
    }

    #[test]
    fn test_response_without_embedded_is_empty() {
        let response: DiscoveryResponse = serde_json::from_str(r#"{"page": {"size": 20}}"#).unwrap();
        assert!(response.into_events().is_empty());
    }

    #[test]
    fn test_event_without_price_is_free() {
        let json = r#"{"id": "x", "name": "Open Mic", "dates": {"start": {"localDate": "2025-06-01"}}}"#;
        let tm: TmEvent = serde_json::from_str(json).unwrap();
        let event = tm.into_event().unwrap();
        assert!(event.price.is_free);
        assert_eq!(event.category, "Other");
        assert_eq!(event.mood, vec!["social"]);
    }

    #[test]
    fn test_params_from_query() {
        let start = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();
        let query = EventQuery::new()
            .keyword("jazz")
            .category("Music")
            .state_code("MA")
            .dates(Some(start), Some(start));
        let encoded = serde_urlencoded::to_string(DiscoveryParams::from(&query)).unwrap();

        assert!(encoded.contains("keyword=jazz"));
        assert!(encoded.contains("classificationName=Music"));
        assert!(encoded.contains("stateCode=MA"));
        assert!(encoded.contains("startDateTime=2025-04-16T00%3A00%3A00Z"));
        assert!(encoded.contains("endDateTime=2025-04-16T23%3A59%3A59Z"));
        assert!(encoded.contains("size=20"));
        assert!(!encoded.contains("city="));
    }
}
