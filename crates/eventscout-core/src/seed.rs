//! Built-in demo data used before any live fetch.
//!
//! Events are dated relative to the day passed in so every window and quick
//! filter has something to show. The first user is the acting user.

use chrono::{Duration, NaiveDate};
use eventscout_api::models::{Event, EventLocation, EventPrice, EventSource};

use crate::User;

/// Id of the acting user in the seed directory.
pub const CURRENT_USER_ID: &str = "user-1";

struct SeedEvent {
    id: &'static str,
    title: &'static str,
    days_ahead: i64,
    category: &'static str,
    tags: &'static [&'static str],
    mood: &'static [&'static str],
    venue: &'static str,
    city: &'static str,
    price: Option<(f64, f64)>,
    trending: bool,
    editors_pick: bool,
    points: (u32, u32),
}

const EVENTS: &[SeedEvent] = &[
    SeedEvent {
        id: "evt-1",
        title: "Spring Career Fair",
        days_ahead: 0,
        category: "Career",
        tags: &["Career", "Networking"],
        mood: &["focused", "social"],
        venue: "Student Center",
        city: "Boston",
        price: None,
        trending: true,
        editors_pick: false,
        points: (150, 30),
    },
    SeedEvent {
        id: "evt-2",
        title: "Rooftop Jazz Night",
        days_ahead: 1,
        category: "Music",
        tags: &["Music", "Jazz", "Live"],
        mood: &["chill", "social"],
        venue: "Skyline Terrace",
        city: "Boston",
        price: Some((25.0, 40.0)),
        trending: true,
        editors_pick: true,
        points: (100, 25),
    },
    SeedEvent {
        id: "evt-3",
        title: "AI Hack Night",
        days_ahead: 3,
        category: "Tech",
        tags: &["Tech", "Career", "AI"],
        mood: &["focused", "curious"],
        venue: "Innovation Lab",
        city: "Cambridge",
        price: None,
        trending: false,
        editors_pick: true,
        points: (200, 50),
    },
    SeedEvent {
        id: "evt-4",
        title: "Intramural Soccer Finals",
        days_ahead: 5,
        category: "Sports",
        tags: &["Sports", "Outdoors"],
        mood: &["energetic", "competitive"],
        venue: "Riverside Fields",
        city: "Boston",
        price: Some((5.0, 5.0)),
        trending: false,
        editors_pick: false,
        points: (75, 15),
    },
    SeedEvent {
        id: "evt-5",
        title: "Indie Film Screening",
        days_ahead: 9,
        category: "Arts",
        tags: &["Film", "Arts"],
        mood: &["chill", "inspired"],
        venue: "Coolidge Corner Theatre",
        city: "Brookline",
        price: Some((12.0, 12.0)),
        trending: false,
        editors_pick: false,
        points: (80, 20),
    },
    SeedEvent {
        id: "evt-6",
        title: "Startup Pitch Showcase",
        days_ahead: 12,
        category: "Career",
        tags: &["Career", "Tech", "Entrepreneurship"],
        mood: &["focused", "inspired"],
        venue: "Founders Hall",
        city: "Cambridge",
        price: None,
        trending: true,
        editors_pick: false,
        points: (120, 30),
    },
    SeedEvent {
        id: "evt-7",
        title: "Food Truck Festival",
        days_ahead: 20,
        category: "Food",
        tags: &["Food", "Social"],
        mood: &["social", "chill"],
        venue: "City Hall Plaza",
        city: "Boston",
        price: Some((0.0, 30.0)),
        trending: false,
        editors_pick: true,
        points: (60, 15),
    },
    SeedEvent {
        id: "evt-8",
        title: "Symphony Under the Stars",
        days_ahead: 40,
        category: "Music",
        tags: &["Music", "Classical", "Outdoors"],
        mood: &["chill", "inspired"],
        venue: "Hatch Shell",
        city: "Boston",
        price: Some((150.0, 220.0)),
        trending: true,
        editors_pick: false,
        points: (100, 25),
    },
];

/// Seed events dated relative to `today`.
pub fn seed_events(today: NaiveDate) -> Vec<Event> {
    EVENTS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let date = today + Duration::days(seed.days_ahead);
            let price = match seed.price {
                Some((min, max)) if min > 0.0 => EventPrice::paid(min, Some(max)),
                _ => EventPrice::free(),
            };

            Event::builder(seed.id, seed.title, date.format("%Y-%m-%d").to_string())
                .description(format!("{} at {}.", seed.title, seed.venue))
                .category(seed.category)
                .tags(seed.tags.iter().copied())
                .mood(seed.mood.iter().copied())
                .times(Some("19:00"), Some("22:00"))
                .location(EventLocation::new(seed.venue, seed.city))
                .price(price)
                .attendees(40 + 17 * i as u32)
                .trending(seed.trending)
                .editors_pick(seed.editors_pick)
                .points(seed.points.0, seed.points.1)
                .source(EventSource::Internal)
                .build()
        })
        .collect()
}

/// Seed users; the first is the acting user.
pub fn seed_users() -> Vec<User> {
    let mut me = User::new(CURRENT_USER_ID, "Alex Rivera")
        .with_interests(["Tech", "Music", "Career"])
        .with_points(450);
    me.email = "alex.rivera@example.edu".to_string();
    me.university = "Northeastern University".to_string();
    me.graduation_year = Some(2026);
    me.bio = "CS junior. Always down for a hackathon or a live show.".to_string();

    vec![
        me,
        User::new("user-2", "Priya Shah")
            .with_interests(["Tech", "AI", "Entrepreneurship"])
            .with_points(820),
        User::new("user-3", "Marcus Lee")
            .with_interests(["Music", "Jazz"])
            .with_points(610),
        User::new("user-4", "Sofia Martinez")
            .with_interests(["Sports", "Outdoors"])
            .with_points(390),
        User::new("user-5", "Jordan Kim")
            .with_interests(["Film", "Arts", "Music"])
            .with_points(275),
        User::new("user-6", "Taylor Brooks")
            .with_interests(["Food", "Social"])
            .with_points(140),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 16).unwrap()
    }

    #[test]
    fn test_seed_events_dated_from_today() {
        let events = seed_events(today());
        assert_eq!(events[0].date, "2025-04-16");
        assert!(events
            .iter()
            .all(|e| e.as_naive_date().is_some_and(|d| d >= today())));
    }

    #[test]
    fn test_seed_event_ids_unique() {
        let events = seed_events(today());
        let ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn test_seed_mix_of_free_and_paid() {
        let events = seed_events(today());
        assert!(events.iter().any(|e| e.price.is_free));
        assert!(events.iter().any(|e| !e.price.is_free));
        assert!(events.iter().any(|e| e.is_trending));
        assert!(events.iter().any(|e| e.is_editors_pick));
    }

    #[test]
    fn test_seed_current_user() {
        let users = seed_users();
        assert_eq!(users[0].id, CURRENT_USER_ID);
        assert_eq!(users[0].points, 450);
        assert!(users[0].friends.is_empty());
    }

    #[test]
    fn test_seed_users_overlap_interests() {
        let users = seed_users();
        let me = &users[0];
        assert!(users[1..]
            .iter()
            .any(|u| me.shares_interest(&u.interests)));
        assert!(users[1..]
            .iter()
            .any(|u| !me.shares_interest(&u.interests)));
    }
}
