//! Points ledger.
//!
//! A [`Session`] owns the acting user and applies attendance, sharing,
//! saving and befriending to it. Every operation returns a [`Transition`]
//! and may queue a [`Notification`] for the presenter.
//!
//! Operations that name an unknown event or user change nothing and queue
//! nothing; they return [`Transition::Unchanged`].
//!
//! # Example
//!
//! ```
//! use eventscout_api::models::Event;
//! use eventscout_core::{EventStore, Session, Transition, User};
//!
//! let store = EventStore::from(vec![
//!     Event::builder("gig", "Basement Show", "2025-04-19").points(100, 25).build(),
//! ]);
//! let mut session = Session::new(User::new("me", "Me").with_points(450));
//!
//! let t = session.attend_event(&store, "gig");
//! assert!(matches!(t, Transition::Attended { balance: 550, .. }));
//!
//! // Attending again toggles back.
//! session.attend_event(&store, "gig");
//! assert_eq!(session.user().points, 450);
//! ```

use serde::Serialize;

use crate::{EventStore, Friend, User};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
}

/// A user-facing message produced by a ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, message)
    }

    fn new(level: NotificationLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// What a ledger operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    Attended {
        event_id: String,
        points_awarded: u32,
        balance: u32,
    },
    Unattended {
        event_id: String,
        points_removed: u32,
        balance: u32,
    },
    Shared {
        event_id: String,
        points_awarded: u32,
        balance: u32,
    },
    Saved {
        event_id: String,
    },
    Unsaved {
        event_id: String,
    },
    FriendAdded {
        user_id: String,
    },
    /// Lookup miss or an operation with nothing to do.
    Unchanged,
}

impl Transition {
    /// Returns true if the user was modified.
    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::Unchanged)
    }
}

/// The acting user plus their pending notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
    notifications: Vec<Notification>,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            notifications: Vec::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Consumes the session, returning the user.
    pub fn into_user(self) -> User {
        self.user
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drains queued notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Marks the event attended and awards its attendance points.
    ///
    /// If the user is already attending, this un-attends instead.
    pub fn attend_event(&mut self, events: &EventStore, event_id: &str) -> Transition {
        let Some(event) = events.get(event_id) else {
            tracing::debug!(event_id, "attend: unknown event");
            return Transition::Unchanged;
        };

        if self.user.is_attending(event_id) {
            return self.unattend_event(events, event_id);
        }

        let awarded = event.points_for_attending;
        self.user.attended_events.insert(event.id.clone());
        self.user.points = self.user.points.saturating_add(awarded);

        self.notify(Notification::success(
            "You're going!",
            format!("You earned {} points for attending {}", awarded, event.title),
        ));

        Transition::Attended {
            event_id: event.id.clone(),
            points_awarded: awarded,
            balance: self.user.points,
        }
    }

    /// Removes attendance and takes back its points, flooring at zero.
    pub fn unattend_event(&mut self, events: &EventStore, event_id: &str) -> Transition {
        let Some(event) = events.get(event_id) else {
            tracing::debug!(event_id, "unattend: unknown event");
            return Transition::Unchanged;
        };

        if !self.user.attended_events.remove(event_id) {
            return Transition::Unchanged;
        }

        let removed = event.points_for_attending;
        self.user.points = self.user.points.saturating_sub(removed);

        self.notify(Notification::info(
            "Attendance cancelled",
            format!("You're no longer attending {}", event.title),
        ));

        Transition::Unattended {
            event_id: event.id.clone(),
            points_removed: removed,
            balance: self.user.points,
        }
    }

    /// Awards sharing points once per event.
    pub fn share_event(&mut self, events: &EventStore, event_id: &str) -> Transition {
        let Some(event) = events.get(event_id) else {
            tracing::debug!(event_id, "share: unknown event");
            return Transition::Unchanged;
        };

        if self.user.has_shared(event_id) {
            return Transition::Unchanged;
        }

        let awarded = event.points_for_sharing;
        self.user.shared_events.insert(event.id.clone());
        self.user.points = self.user.points.saturating_add(awarded);

        self.notify(Notification::success(
            "Event shared!",
            format!("You earned {} points for sharing {}", awarded, event.title),
        ));

        Transition::Shared {
            event_id: event.id.clone(),
            points_awarded: awarded,
            balance: self.user.points,
        }
    }

    /// Bookmarks or un-bookmarks an event. No points change hands.
    pub fn toggle_save(&mut self, events: &EventStore, event_id: &str) -> Transition {
        let Some(event) = events.get(event_id) else {
            tracing::debug!(event_id, "save: unknown event");
            return Transition::Unchanged;
        };

        if self.user.saved_events.remove(event_id) {
            self.notify(Notification::info(
                "Removed from saved",
                format!("{} was removed from your saved events", event.title),
            ));
            Transition::Unsaved {
                event_id: event.id.clone(),
            }
        } else {
            self.user.saved_events.insert(event.id.clone());
            self.notify(Notification::info(
                "Saved",
                format!("{} was added to your saved events", event.title),
            ));
            Transition::Saved {
                event_id: event.id.clone(),
            }
        }
    }

    /// Befriends a user from the directory, keeping a copy of their profile.
    pub fn add_friend(&mut self, directory: &[User], user_id: &str) -> Transition {
        if user_id == self.user.id {
            return Transition::Unchanged;
        }

        let Some(target) = directory.iter().find(|u| u.id == user_id) else {
            tracing::debug!(user_id, "add_friend: unknown user");
            return Transition::Unchanged;
        };

        if self.user.is_friend(user_id) {
            self.notify(Notification::info(
                "Already friends",
                format!("You're already friends with {}", target.name),
            ));
            return Transition::Unchanged;
        }

        self.user.friends.push(Friend::from(target));
        self.notify(Notification::success(
            "Friend added",
            format!("{} is now your friend", target.name),
        ));

        Transition::FriendAdded {
            user_id: target.id.clone(),
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventscout_api::models::Event;

    fn store() -> EventStore {
        EventStore::from(vec![
            Event::builder("e1", "Hack Night", "2025-04-24")
                .points(100, 25)
                .build(),
            Event::builder("e2", "Jazz Brunch", "2025-04-19")
                .points(40, 10)
                .build(),
        ])
    }

    fn session(points: u32) -> Session {
        Session::new(User::new("me", "Me").with_points(points))
    }

    #[test]
    fn test_attend_awards_points() {
        let events = store();
        let mut s = session(450);

        let t = s.attend_event(&events, "e1");
        assert_eq!(
            t,
            Transition::Attended {
                event_id: "e1".into(),
                points_awarded: 100,
                balance: 550
            }
        );
        assert_eq!(s.user().points, 550);
        assert!(s.user().is_attending("e1"));
        assert_eq!(s.notifications().len(), 1);
        assert_eq!(s.notifications()[0].level, NotificationLevel::Success);
    }

    #[test]
    fn test_attend_then_unattend_restores_balance() {
        let events = store();
        let mut s = session(450);

        s.attend_event(&events, "e1");
        assert_eq!(s.user().points, 550);

        let t = s.unattend_event(&events, "e1");
        assert!(matches!(t, Transition::Unattended { balance: 450, .. }));
        assert_eq!(s.user().points, 450);
        assert!(s.user().attended_events.is_empty());
    }

    #[test]
    fn test_attend_twice_toggles_back() {
        let events = store();
        let mut s = session(450);
        let before = s.user().clone();

        s.attend_event(&events, "e2");
        let t = s.attend_event(&events, "e2");

        assert!(matches!(t, Transition::Unattended { .. }));
        assert_eq!(s.user(), &before);
    }

    #[test]
    fn test_unattend_when_not_attending_is_noop() {
        let events = store();
        let mut s = session(450);

        assert_eq!(s.unattend_event(&events, "e1"), Transition::Unchanged);
        assert_eq!(s.user().points, 450);
        assert!(s.notifications().is_empty());
    }

    #[test]
    fn test_points_floor_at_zero() {
        let events = store();
        let mut s = session(450);
        s.attend_event(&events, "e1");

        // Points spent elsewhere; unattending can't go negative.
        s.user.points = 30;
        s.unattend_event(&events, "e1");
        assert_eq!(s.user().points, 0);
    }

    #[test]
    fn test_points_never_negative_under_any_sequence() {
        let events = store();
        let mut s = session(0);
        let ids = ["e1", "e2", "e1", "e1", "e2", "e2", "e1"];

        for (i, id) in ids.iter().enumerate() {
            if i % 3 == 0 {
                s.unattend_event(&events, id);
            } else {
                s.attend_event(&events, id);
            }
            // u32 can't go negative; check the balance matches attendance.
            let expected: u32 = s
                .user()
                .attended_events
                .iter()
                .filter_map(|id| events.get(id))
                .map(|e| e.points_for_attending)
                .sum();
            assert_eq!(s.user().points, expected);
        }
    }

    #[test]
    fn test_share_is_idempotent() {
        let events = store();
        let mut s = session(0);

        let first = s.share_event(&events, "e1");
        let second = s.share_event(&events, "e1");

        assert!(matches!(first, Transition::Shared { points_awarded: 25, .. }));
        assert_eq!(second, Transition::Unchanged);
        assert_eq!(s.user().points, 25);
        assert_eq!(s.notifications().len(), 1);
    }

    #[test]
    fn test_share_independent_of_attendance() {
        let events = store();
        let mut s = session(0);

        s.attend_event(&events, "e1");
        s.share_event(&events, "e1");
        s.unattend_event(&events, "e1");

        assert_eq!(s.user().points, 25);
        assert!(s.user().has_shared("e1"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let events = store();
        let mut s = session(10);
        let before = s.clone();

        assert_eq!(s.attend_event(&events, "nope"), Transition::Unchanged);
        assert_eq!(s.unattend_event(&events, "nope"), Transition::Unchanged);
        assert_eq!(s.share_event(&events, "nope"), Transition::Unchanged);
        assert_eq!(s.toggle_save(&events, "nope"), Transition::Unchanged);
        assert_eq!(s, before);
    }

    #[test]
    fn test_toggle_save() {
        let events = store();
        let mut s = session(0);

        assert!(matches!(s.toggle_save(&events, "e2"), Transition::Saved { .. }));
        assert!(s.user().has_saved("e2"));
        assert!(matches!(s.toggle_save(&events, "e2"), Transition::Unsaved { .. }));
        assert!(!s.user().has_saved("e2"));
        assert_eq!(s.user().points, 0);
    }

    #[test]
    fn test_add_friend_snapshots_profile() {
        let mut directory = vec![User::new("u2", "Grace")
            .with_interests(["Music"])
            .with_points(300)];
        let mut s = session(0);

        let t = s.add_friend(&directory, "u2");
        assert_eq!(t, Transition::FriendAdded { user_id: "u2".into() });

        directory[0].points = 999;
        assert_eq!(s.user().friends[0].points, 300);
        assert_eq!(s.user().friends[0].interests, vec!["Music"]);
    }

    #[test]
    fn test_add_existing_friend_notifies_without_change() {
        let directory = vec![User::new("u2", "Grace")];
        let mut s = session(0);
        s.add_friend(&directory, "u2");
        s.take_notifications();

        assert_eq!(s.add_friend(&directory, "u2"), Transition::Unchanged);
        assert_eq!(s.user().friends.len(), 1);
        assert_eq!(s.notifications().len(), 1);
        assert_eq!(s.notifications()[0].level, NotificationLevel::Info);
    }

    #[test]
    fn test_add_friend_unknown_or_self() {
        let directory = vec![User::new("me", "Me")];
        let mut s = session(0);

        assert_eq!(s.add_friend(&directory, "ghost"), Transition::Unchanged);
        assert_eq!(s.add_friend(&directory, "me"), Transition::Unchanged);
        assert!(s.user().friends.is_empty());
        assert!(s.notifications().is_empty());
    }

    #[test]
    fn test_take_notifications_drains() {
        let events = store();
        let mut s = session(0);
        s.attend_event(&events, "e1");

        assert_eq!(s.take_notifications().len(), 1);
        assert!(s.notifications().is_empty());
    }
}
