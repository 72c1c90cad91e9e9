//! Locally generated stand-in events.
//!
//! When a live fetch fails, callers substitute these so listing screens are
//! never empty. Placeholders have exactly the same shape as fetched events;
//! only the `placeholder-` id prefix and the `internal` source tell them apart.

use chrono::{Duration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::discovery::EventQuery;
use crate::models::{Event, EventLocation, EventPrice, EventSource};

/// Id prefix shared by all generated events.
pub const PLACEHOLDER_ID_PREFIX: &str = "placeholder-";

/// How far ahead generated dates reach when the query has no end date.
const DEFAULT_HORIZON_DAYS: i64 = 30;

const CATEGORIES: &[(&str, &[&str], &[&str])] = &[
    ("Music", &["Music", "Live", "Concert"], &["energetic", "social"]),
    ("Tech", &["Tech", "Career", "Networking"], &["focused", "curious"]),
    ("Sports", &["Sports", "Outdoors"], &["competitive", "energetic"]),
    ("Arts", &["Arts", "Culture"], &["creative", "inspired"]),
    ("Food", &["Food", "Social"], &["chill", "social"]),
];

const NO_TAGS: &[&str] = &[];

const DEFAULT_MOODS: &[&str] = &["social"];

const TITLE_PREFIXES: &[&str] = &["Late Night", "Campus", "Downtown", "Weekend", "Community"];

const TITLE_SUFFIXES: &[&str] = &["Showcase", "Meetup", "Festival", "Session", "Night"];

const CITIES: &[&str] = &["Boston", "New York", "Chicago", "Austin", "Seattle"];

const VENUES: &[&str] = &["Main Hall", "The Commons", "Riverside Stage", "Union Ballroom"];

/// Generates `count` placeholder events for the query, dated from today.
pub fn generate_events(query: &EventQuery, count: usize) -> Vec<Event> {
    let today = Local::now().date_naive();
    generate_events_with_rng(&mut rand::thread_rng(), today, query, count)
}

/// Generates placeholder events with an explicit RNG and reference day.
///
/// The query's category and city are honoured when present so the
/// substituted list still looks like an answer to what was asked. Dates fall
/// within `[start_date, end_date]`, defaulting to the next 30 days.
pub fn generate_events_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    query: &EventQuery,
    count: usize,
) -> Vec<Event> {
    let start = query.start_date.unwrap_or(today);
    let end = query
        .end_date
        .unwrap_or(start + Duration::days(DEFAULT_HORIZON_DAYS))
        .max(start);
    let span = (end - start).num_days();

    (0..count)
        .map(|_| {
            let (category, tags, moods) = match &query.category {
                Some(wanted) => CATEGORIES
                    .iter()
                    .find(|(name, _, _)| name.eq_ignore_ascii_case(wanted))
                    .copied()
                    .unwrap_or((wanted.as_str(), NO_TAGS, DEFAULT_MOODS)),
                None => *CATEGORIES.choose(rng).unwrap_or(&CATEGORIES[0]),
            };

            let city = query
                .city
                .clone()
                .unwrap_or_else(|| pick(rng, CITIES).to_string());
            let title = format!("{} {} {}", pick(rng, TITLE_PREFIXES), category, pick(rng, TITLE_SUFFIXES));
            let date = start + Duration::days(rng.gen_range(0..=span));

            let price = if rng.gen_bool(0.3) {
                EventPrice::free()
            } else {
                let min = f64::from(rng.gen_range(1..=8u32) * 5);
                EventPrice::paid(min, Some(min * 2.0))
            };

            let mut event_tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            if event_tags.is_empty() {
                event_tags.push(category.to_string());
            }

            Event::builder(
                format!("{}{}", PLACEHOLDER_ID_PREFIX, Uuid::new_v4().simple()),
                title,
                date.format("%Y-%m-%d").to_string(),
            )
            .description(format!("A {} event in {}.", category.to_lowercase(), city))
            .category(category)
            .tags(event_tags)
            .mood(moods.iter().copied())
            .times(Some("19:00"), Some("22:00"))
            .location(EventLocation::new(pick(rng, VENUES), city))
            .price(price)
            .attendees(rng.gen_range(10..=500))
            .trending(rng.gen_bool(0.25))
            .points(rng.gen_range(5..=15) * 10, rng.gen_range(1..=5) * 5)
            .source(EventSource::Internal)
            .build()
        })
        .collect()
}

/// Returns true if the event was produced by this generator.
pub fn is_placeholder(event: &Event) -> bool {
    event.id.starts_with(PLACEHOLDER_ID_PREFIX)
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or("")
}
