//! Event output formatting.

use chrono::NaiveDate;
use eventscout_api::models::Event;
use eventscout_core::User;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::refresh::RefreshResult;

use super::helpers::{format_event_date, format_price, format_tags, header, truncate_str};

/// JSON output structure for list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub events: Vec<EventOutput<'a>>,
    pub total: usize,
}

/// JSON output structure for a single event.
#[derive(Serialize)]
pub struct EventOutput<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub date: &'a str,
    pub start_time: Option<&'a str>,
    pub category: &'a str,
    pub tags: &'a [String],
    pub mood: &'a [String],
    pub venue: &'a str,
    pub city: &'a str,
    pub price: PriceOutput<'a>,
    pub points_for_attending: u32,
    pub points_for_sharing: u32,
    pub is_trending: bool,
    pub attending: bool,
    pub shared: bool,
    pub saved: bool,
}

/// JSON output for an event price.
#[derive(Serialize)]
pub struct PriceOutput<'a> {
    pub min: f64,
    pub max: Option<f64>,
    pub currency: &'a str,
    pub is_free: bool,
}

/// JSON output for event details (show command).
#[derive(Serialize)]
pub struct EventDetailsOutput<'a> {
    #[serde(flatten)]
    pub event: EventOutput<'a>,
    pub description: &'a str,
    pub end_time: Option<&'a str>,
    pub address: &'a str,
    pub attendees: u32,
    pub is_editors_pick: bool,
    pub source: String,
    pub url: &'a str,
}

/// JSON output for the refresh command.
#[derive(Serialize)]
pub struct RefreshOutput {
    pub origin: String,
    pub fetched: bool,
    pub count: usize,
    pub fetched_at: Option<String>,
}

fn event_output<'a>(event: &'a Event, user: &User) -> EventOutput<'a> {
    EventOutput {
        id: &event.id,
        title: &event.title,
        date: &event.date,
        start_time: event.start_time.as_deref(),
        category: &event.category,
        tags: &event.tags,
        mood: &event.mood,
        venue: &event.location.name,
        city: &event.location.city,
        price: PriceOutput {
            min: event.price.min,
            max: event.price.max,
            currency: &event.price.currency,
            is_free: event.price.is_free,
        },
        points_for_attending: event.points_for_attending,
        points_for_sharing: event.points_for_sharing,
        is_trending: event.is_trending,
        attending: user.is_attending(&event.id),
        shared: user.has_shared(&event.id),
        saved: user.has_saved(&event.id),
    }
}

/// Formats events as JSON.
pub fn format_events_json(events: &[&Event], user: &User) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        events: events.iter().map(|e| event_output(e, user)).collect(),
        total: events.len(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats events as a table.
///
/// The status column marks attended events with `A`, saved ones with `S`
/// and trending ones with `*`.
pub fn format_events_table(
    events: &[&Event],
    user: &User,
    today: NaiveDate,
    use_colors: bool,
) -> String {
    if events.is_empty() {
        return "No events found.\n".to_string();
    }

    let mut output = String::new();

    let header_line = format!(
        "{:<12} {:<4} {:<11} {:<9} {:<10} {:<20} {}",
        "ID", "", "Date", "Price", "Category", "Tags", "Title"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header_line.dimmed()));
    } else {
        output.push_str(&header_line);
        output.push('\n');
    }

    for event in events {
        let mut status = String::new();
        status.push(if user.is_attending(&event.id) { 'A' } else { ' ' });
        status.push(if user.has_saved(&event.id) { 'S' } else { ' ' });
        status.push(if event.is_trending { '*' } else { ' ' });

        // Pad before colouring so escape codes don't skew the columns.
        let date = format!("{:<11}", format_event_date(&event.date, today, false));
        let date = if use_colors && event.as_naive_date() == Some(today) {
            date.yellow().to_string()
        } else {
            date
        };

        let line = format!(
            "{:<12} {:<4} {} {:<9} {:<10} {:<20} {}",
            truncate_str(&event.id, 12),
            status,
            date,
            format_price(&event.price),
            truncate_str(&event.category, 10),
            format_tags(&event.tags, 20),
            event.title
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats event details as JSON (show command).
pub fn format_event_details_json(event: &Event, user: &User) -> Result<String, serde_json::Error> {
    let output = EventDetailsOutput {
        event: event_output(event, user),
        description: &event.description,
        end_time: event.end_time.as_deref(),
        address: &event.location.address,
        attendees: event.attendees,
        is_editors_pick: event.is_editors_pick,
        source: event.source.to_string(),
        url: &event.url,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats event details as human-readable text (show command).
pub fn format_event_details_table(
    event: &Event,
    user: &User,
    today: NaiveDate,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", header("Event:", use_colors), event.title));
    output.push_str(&format!("ID: {}\n", event.id));

    let mut when = format_event_date(&event.date, today, use_colors);
    if let Some(ref start) = event.start_time {
        when.push_str(&format!(" at {start}"));
        if let Some(ref end) = event.end_time {
            when.push_str(&format!("-{end}"));
        }
    }
    output.push_str(&format!("When: {}\n", when));

    let mut venue = event.location.name.clone();
    if !event.location.city.is_empty() {
        venue.push_str(&format!(", {}", event.location.city));
    }
    output.push_str(&format!("Where: {}\n", venue));
    if !event.location.address.is_empty() {
        output.push_str(&format!("Address: {}\n", event.location.address));
    }

    output.push_str(&format!("Price: {}\n", format_price(&event.price)));
    output.push_str(&format!("Category: {}\n", event.category));
    if !event.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", format_tags(&event.tags, 60)));
    }
    if !event.mood.is_empty() {
        output.push_str(&format!("Mood: {}\n", event.mood.join(", ")));
    }
    output.push_str(&format!(
        "Points: {} attending, {} sharing\n",
        event.points_for_attending, event.points_for_sharing
    ));
    output.push_str(&format!("Going: {}\n", event.attendees));

    let mut flags = Vec::new();
    if event.is_trending {
        flags.push("trending");
    }
    if event.is_editors_pick {
        flags.push("editor's pick");
    }
    if user.is_attending(&event.id) {
        flags.push("attending");
    }
    if user.has_shared(&event.id) {
        flags.push("shared");
    }
    if user.has_saved(&event.id) {
        flags.push("saved");
    }
    if !flags.is_empty() {
        output.push_str(&format!("Status: {}\n", flags.join(", ")));
    }

    output.push_str(&format!("Source: {}\n", event.source));
    if !event.url.is_empty() {
        output.push_str(&format!("Link: {}\n", event.url));
    }

    if !event.description.is_empty() {
        output.push_str("Description:\n");
        for line in event.description.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

/// Formats a refresh result as JSON.
pub fn format_refresh_json(result: &RefreshResult) -> Result<String, serde_json::Error> {
    let output = RefreshOutput {
        origin: result.origin.to_string(),
        fetched: result.fetched,
        count: result.count,
        fetched_at: result.fetched_at.map(|t| t.to_rfc3339()),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a refresh result as a status line.
pub fn format_refresh_table(result: &RefreshResult, use_colors: bool) -> String {
    use eventscout_core::FeedOrigin;

    let line = match (result.fetched, result.origin) {
        (false, _) => format!("Listing is up to date ({} events).", result.count),
        (true, FeedOrigin::Placeholder) => format!(
            "Loaded {} events (Ticketmaster unavailable, showing generated events).",
            result.count
        ),
        (true, _) => format!("Loaded {} events from Ticketmaster.", result.count),
    };

    if use_colors {
        format!("{}\n", line.green())
    } else {
        format!("{line}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventscout_api::models::{EventLocation, EventPrice};
    use eventscout_core::FeedOrigin;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 16).unwrap()
    }

    fn jazz() -> Event {
        Event::builder("evt-2", "Rooftop Jazz", "2025-04-19")
            .category("Music")
            .tags(["Jazz"])
            .location(EventLocation::new("Skyline Terrace", "Boston"))
            .price(EventPrice::paid(25.0, Some(40.0)))
            .points(100, 25)
            .trending(true)
            .build()
    }

    #[test]
    fn test_events_table_empty() {
        let user = User::new("me", "Me");
        assert_eq!(format_events_table(&[], &user, today(), false), "No events found.\n");
    }

    #[test]
    fn test_events_table_marks_status() {
        let event = jazz();
        let mut user = User::new("me", "Me");
        user.attended_events.insert("evt-2".to_string());

        let table = format_events_table(&[&event], &user, today(), false);
        let row = table.lines().nth(1).unwrap();
        assert!(row.starts_with("evt-2"));
        assert!(row.contains("A *"));
        assert!(row.contains("$25-40"));
        assert!(row.ends_with("Rooftop Jazz"));
    }

    #[test]
    fn test_events_json_includes_user_flags() {
        let event = jazz();
        let mut user = User::new("me", "Me");
        user.saved_events.insert("evt-2".to_string());

        let json = format_events_json(&[&event], &user).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["events"][0]["saved"], true);
        assert_eq!(value["events"][0]["attending"], false);
        assert_eq!(value["events"][0]["price"]["min"], 25.0);
    }

    #[test]
    fn test_event_details_table() {
        let event = jazz();
        let user = User::new("me", "Me");
        let text = format_event_details_table(&event, &user, today(), false);

        assert!(text.contains("Event: Rooftop Jazz"));
        assert!(text.contains("Where: Skyline Terrace, Boston"));
        assert!(text.contains("Points: 100 attending, 25 sharing"));
        assert!(text.contains("Status: trending"));
    }

    #[test]
    fn test_event_details_json_flattens() {
        let event = jazz();
        let user = User::new("me", "Me");
        let value: serde_json::Value =
            serde_json::from_str(&format_event_details_json(&event, &user).unwrap()).unwrap();

        assert_eq!(value["id"], "evt-2");
        assert_eq!(value["source"], "internal");
    }

    #[test]
    fn test_refresh_table_placeholder() {
        let result = RefreshResult {
            origin: FeedOrigin::Placeholder,
            fetched: true,
            count: 12,
            fetched_at: None,
        };
        let line = format_refresh_table(&result, false);
        assert!(line.contains("generated events"));
    }
}
