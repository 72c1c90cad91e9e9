//! The acting user and the friend snapshots they keep.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A user of the application.
///
/// Only the owning [`Session`](crate::Session) mutates a user. Points never
/// go below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub bio: String,

    /// Free-text tags matched against event tags and other users' interests.
    #[serde(default)]
    pub interests: Vec<String>,

    #[serde(default)]
    pub points: u32,

    /// Events the user currently counts as attending. Id sets are kept
    /// sorted, so they serialize in a stable order.
    #[serde(default)]
    pub attended_events: BTreeSet<String>,

    /// Events already shared; sharing pays out once per event.
    #[serde(default)]
    pub shared_events: BTreeSet<String>,

    /// Bookmarked events, independent of attendance.
    #[serde(default)]
    pub saved_events: BTreeSet<String>,

    #[serde(default)]
    pub friends: Vec<Friend>,
}

impl User {
    /// Creates a user with no interests, points or relationships.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: String::new(),
            email: String::new(),
            graduation_year: None,
            university: String::new(),
            bio: String::new(),
            interests: Vec::new(),
            points: 0,
            attended_events: BTreeSet::new(),
            shared_events: BTreeSet::new(),
            saved_events: BTreeSet::new(),
            friends: Vec::new(),
        }
    }

    /// Sets the user's interests.
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the starting point balance.
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn is_attending(&self, event_id: &str) -> bool {
        self.attended_events.contains(event_id)
    }

    pub fn has_shared(&self, event_id: &str) -> bool {
        self.shared_events.contains(event_id)
    }

    pub fn has_saved(&self, event_id: &str) -> bool {
        self.saved_events.contains(event_id)
    }

    pub fn is_friend(&self, user_id: &str) -> bool {
        self.friends.iter().any(|f| f.id == user_id)
    }

    /// Returns true if any of the given tags is one of the user's interests.
    pub fn shares_interest<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter()
            .any(|tag| self.interests.iter().any(|i| i == tag.as_ref()))
    }
}

/// A copy of another user's public profile, taken when they were befriended.
///
/// The copy is not refreshed: a friend's points shown here stay at the value
/// they had at befriending time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl From<&User> for Friend {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            points: user.points,
            interests: user.interests.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new_defaults() {
        let user = User::new("u1", "Ada");
        assert_eq!(user.points, 0);
        assert!(user.interests.is_empty());
        assert!(user.attended_events.is_empty());
        assert!(user.friends.is_empty());
    }

    #[test]
    fn test_event_id_sets_are_sorted_and_unique() {
        let mut user = User::new("u1", "Ada");
        for id in ["evt-3", "evt-1", "evt-2", "evt-1"] {
            user.attended_events.insert(id.to_string());
        }

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json["attendedEvents"],
            serde_json::json!(["evt-1", "evt-2", "evt-3"])
        );
    }

    #[test]
    fn test_shares_interest() {
        let user = User::new("u1", "Ada").with_interests(["Tech", "Music"]);
        assert!(user.shares_interest(["Career", "Tech"]));
        assert!(!user.shares_interest(["tech"]));
        assert!(!user.shares_interest(Vec::<String>::new()));
    }

    #[test]
    fn test_friend_from_user_is_a_copy() {
        let mut other = User::new("u2", "Grace")
            .with_interests(["Music"])
            .with_points(300);
        let friend = Friend::from(&other);

        other.points = 900;
        assert_eq!(friend.points, 300);
        assert_eq!(friend.interests, vec!["Music"]);
    }

    #[test]
    fn test_user_serde_camel_case() {
        let mut user = User::new("u1", "Ada");
        user.graduation_year = Some(2026);
        user.attended_events.insert("evt-1".to_string());

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("graduationYear"));
        assert!(json.contains("attendedEvents"));

        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
