//! Common helper functions for output formatting.

use chrono::NaiveDate;
use eventscout_api::models::EventPrice;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a price for display: `Free`, `$25`, `$25-40` or `$150+`.
pub fn format_price(price: &EventPrice) -> String {
    if price.is_free {
        return "Free".to_string();
    }

    match price.max {
        Some(max) if max > price.min => format!("${}-{}", whole(price.min), whole(max)),
        Some(_) => format!("${}", whole(price.min)),
        None => format!("${}+", whole(price.min)),
    }
}

fn whole(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

/// Formats an event date relative to `today`.
pub fn format_event_date(date: &str, today: NaiveDate, use_colors: bool) -> String {
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return date.to_string();
    };

    let display = if parsed == today {
        "Today".to_string()
    } else if parsed == today + chrono::Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        parsed.format("%a %b %d").to_string()
    };

    if use_colors {
        if parsed < today {
            display.dimmed().to_string()
        } else if parsed == today {
            display.yellow().to_string()
        } else {
            display
        }
    } else {
        display
    }
}

/// Formats tags for display.
pub fn format_tags(tags: &[String], max_len: usize) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let formatted: Vec<String> = tags.iter().map(|t| format!("#{t}")).collect();
    truncate_str(&formatted.join(" "), max_len)
}

/// Formats a points figure, e.g. `+100 pts`.
pub fn format_points(points: u32, use_colors: bool) -> String {
    let label = format!("+{points} pts");
    if use_colors {
        label.green().to_string()
    } else {
        label
    }
}

/// Formats a section header.
pub fn header(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
