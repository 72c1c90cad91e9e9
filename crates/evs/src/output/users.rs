//! Profile, friend and suggestion output formatting.

use eventscout_core::{Friend, User};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{header, truncate_str};

/// JSON output structure for the profile command.
#[derive(Serialize)]
pub struct ProfileOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub university: &'a str,
    pub graduation_year: Option<u16>,
    pub bio: &'a str,
    pub interests: &'a [String],
    pub points: u32,
    pub attending: Vec<&'a str>,
    pub shared: Vec<&'a str>,
    pub saved: Vec<&'a str>,
    pub friends: usize,
}

/// JSON output structure for a directory user.
#[derive(Serialize)]
pub struct UserOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub points: u32,
    pub interests: &'a [String],
}

/// Formats the acting user's profile as JSON.
pub fn format_profile_json(user: &User) -> Result<String, serde_json::Error> {
    let output = ProfileOutput {
        id: &user.id,
        name: &user.name,
        email: &user.email,
        university: &user.university,
        graduation_year: user.graduation_year,
        bio: &user.bio,
        interests: &user.interests,
        points: user.points,
        attending: user.attended_events.iter().map(String::as_str).collect(),
        shared: user.shared_events.iter().map(String::as_str).collect(),
        saved: user.saved_events.iter().map(String::as_str).collect(),
        friends: user.friends.len(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats the acting user's profile as text.
pub fn format_profile_table(user: &User, use_colors: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", header("Name:", use_colors), user.name));
    output.push_str(&format!("ID: {}\n", user.id));
    if !user.email.is_empty() {
        output.push_str(&format!("Email: {}\n", user.email));
    }
    if !user.university.is_empty() {
        match user.graduation_year {
            Some(year) => output.push_str(&format!("School: {} ('{:02})\n", user.university, year % 100)),
            None => output.push_str(&format!("School: {}\n", user.university)),
        }
    }
    if !user.interests.is_empty() {
        output.push_str(&format!("Interests: {}\n", user.interests.join(", ")));
    }

    let points = format!("{} pts", user.points);
    if use_colors {
        output.push_str(&format!("Points: {}\n", points.green().bold()));
    } else {
        output.push_str(&format!("Points: {}\n", points));
    }

    output.push_str(&format!(
        "Attending: {}  Shared: {}  Saved: {}  Friends: {}\n",
        user.attended_events.len(),
        user.shared_events.len(),
        user.saved_events.len(),
        user.friends.len()
    ));

    if !user.bio.is_empty() {
        output.push_str("Bio:\n");
        for line in user.bio.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

/// Formats friend snapshots as JSON.
pub fn format_friends_json(friends: &[Friend]) -> Result<String, serde_json::Error> {
    let users: Vec<UserOutput> = friends
        .iter()
        .map(|f| UserOutput {
            id: &f.id,
            name: &f.name,
            points: f.points,
            interests: &f.interests,
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "friends": users }))
}

/// Formats friend snapshots as a table.
///
/// Points are as of when the friend was added.
pub fn format_friends_table(friends: &[Friend], use_colors: bool) -> String {
    if friends.is_empty() {
        return "No friends yet. Try 'evs suggest friends'.\n".to_string();
    }
    let rows: Vec<(&str, &str, u32, &[String])> = friends
        .iter()
        .map(|f| (f.id.as_str(), f.name.as_str(), f.points, f.interests.as_slice()))
        .collect();
    user_rows(&rows, use_colors)
}

/// Formats directory users as JSON.
pub fn format_users_json(users: &[&User]) -> Result<String, serde_json::Error> {
    let users: Vec<UserOutput> = users
        .iter()
        .map(|u| UserOutput {
            id: &u.id,
            name: &u.name,
            points: u.points,
            interests: &u.interests,
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "users": users }))
}

/// Formats directory users as a table.
pub fn format_users_table(users: &[&User], use_colors: bool) -> String {
    if users.is_empty() {
        return "No suggestions right now.\n".to_string();
    }
    let rows: Vec<(&str, &str, u32, &[String])> = users
        .iter()
        .map(|u| (u.id.as_str(), u.name.as_str(), u.points, u.interests.as_slice()))
        .collect();
    user_rows(&rows, use_colors)
}

fn user_rows(rows: &[(&str, &str, u32, &[String])], use_colors: bool) -> String {
    let mut output = String::new();

    let header_line = format!("{:<10} {:<20} {:>6}  {}", "ID", "Name", "Points", "Interests");
    if use_colors {
        output.push_str(&format!("{}\n", header_line.dimmed()));
    } else {
        output.push_str(&header_line);
        output.push('\n');
    }

    for (id, name, points, interests) in rows {
        output.push_str(&format!(
            "{:<10} {:<20} {:>6}  {}\n",
            truncate_str(id, 10),
            truncate_str(name, 20),
            points,
            interests.join(", ")
        ));
    }

    output
}
