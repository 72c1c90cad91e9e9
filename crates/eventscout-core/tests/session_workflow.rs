//! End-to-end engine workflows over the seed data: browse, filter,
//! attend, share and befriend.

use chrono::NaiveDate;
use eventscout_core::filter::{DateWindow, EventFilter, FilterEvaluator, QuickFilter};
use eventscout_core::recommend::{suggested_events, suggested_friends};
use eventscout_core::{NotificationLevel, Session, Snapshot, Transition};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 16).unwrap()
}

#[test]
fn test_browse_filter_and_attend() {
    let snapshot = Snapshot::seeded(today());

    let filter = EventFilter::new().quick(QuickFilter::Upcoming).categories(["Tech"]);
    let matched = FilterEvaluator::with_today(&filter, today()).filter_events(&snapshot.events);
    assert!(!matched.is_empty());
    assert!(matched
        .iter()
        .all(|e| e.category == "Tech" || e.has_tag("Tech")));

    let target = matched[0].id.clone();
    let award = matched[0].points_for_attending;

    let mut session = Session::new(snapshot.user.clone());
    let start = session.user().points;

    let t = session.attend_event(&snapshot.events, &target);
    assert_eq!(
        t,
        Transition::Attended {
            event_id: target.clone(),
            points_awarded: award,
            balance: start + award,
        }
    );

    session.attend_event(&snapshot.events, &target);
    assert_eq!(session.user().points, start);
    assert!(!session.user().is_attending(&target));
}

#[test]
fn test_today_window_on_seed_data() {
    let snapshot = Snapshot::seeded(today());
    let filter = EventFilter::new().date_range(DateWindow::Today);
    let matched = FilterEvaluator::with_today(&filter, today()).filter_events(&snapshot.events);

    assert!(!matched.is_empty());
    assert!(matched.iter().all(|e| e.date == "2025-04-16"));
}

#[test]
fn test_befriending_updates_suggestions() {
    let snapshot = Snapshot::seeded(today());
    let mut session = Session::new(snapshot.user.clone());

    let before: Vec<String> = suggested_friends(session.user(), &snapshot.directory)
        .map(|u| u.id.clone())
        .collect();
    assert!(!before.is_empty());

    let t = session.add_friend(&snapshot.directory, &before[0]);
    assert!(t.is_change());

    let after: Vec<String> = suggested_friends(session.user(), &snapshot.directory)
        .map(|u| u.id.clone())
        .collect();
    assert_eq!(after.len(), before.len() - 1);
    assert!(!after.contains(&before[0]));
}

#[test]
fn test_friend_points_are_a_snapshot() {
    let mut snapshot = Snapshot::seeded(today());
    let mut session = Session::new(snapshot.user.clone());
    let friend_id = snapshot.directory[0].id.clone();
    let original = snapshot.directory[0].points;

    session.add_friend(&snapshot.directory, &friend_id);
    snapshot.directory[0].points += 1_000;

    let friend = &session.user().friends[0];
    assert_eq!(friend.points, original);
}

#[test]
fn test_suggested_events_match_interests() {
    let snapshot = Snapshot::seeded(today());
    let user = &snapshot.user;

    let suggested: Vec<_> = suggested_events(user, &snapshot.events).collect();
    assert!(!suggested.is_empty());
    assert!(suggested.iter().all(|e| user.shares_interest(&e.tags)));
    assert!(suggested.len() < snapshot.events.len());
}

#[test]
fn test_share_twice_notifies_once() {
    let snapshot = Snapshot::seeded(today());
    let mut session = Session::new(snapshot.user.clone());
    let id = snapshot.events.iter().last().map(|e| e.id.clone()).unwrap();

    session.share_event(&snapshot.events, &id);
    session.share_event(&snapshot.events, &id);

    let notes = session.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].level, NotificationLevel::Success);
}
