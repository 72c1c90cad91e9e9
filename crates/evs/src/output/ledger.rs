//! Ledger transition and notification output formatting.

use eventscout_core::{Notification, NotificationLevel, Transition};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for a ledger command.
#[derive(Serialize)]
pub struct TransitionOutput<'a> {
    pub transition: &'a Transition,
    pub points: u32,
    pub notifications: &'a [Notification],
}

/// Formats a transition with its notifications as JSON.
pub fn format_transition_json(
    transition: &Transition,
    points: u32,
    notifications: &[Notification],
) -> Result<String, serde_json::Error> {
    let output = TransitionOutput {
        transition,
        points,
        notifications,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats notifications as text, one per line.
///
/// Returns an empty string when there is nothing to report, which is the
/// case for lookups of unknown ids.
pub fn format_transition_table(notifications: &[Notification], use_colors: bool) -> String {
    let mut output = String::new();

    for n in notifications {
        let title = if use_colors {
            match n.level {
                NotificationLevel::Success => n.title.green().bold().to_string(),
                NotificationLevel::Info => n.title.blue().bold().to_string(),
            }
        } else {
            n.title.clone()
        };
        output.push_str(&format!("{} {}\n", title, n.message));
    }

    output
}
