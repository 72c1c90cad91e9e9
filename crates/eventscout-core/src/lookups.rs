//! "Did you mean" suggestions for ids that aren't in the store.

use strsim::levenshtein;

use crate::{EventStore, User};

/// Maximum Levenshtein distance to consider an id a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Formats a "not found" message, optionally with a suggestion.
pub fn format_not_found_error(
    resource_type: &str,
    identifier: &str,
    suggestion: Option<&str>,
) -> String {
    let base = format!(
        "{} '{}' not found. Try running 'evs refresh' to update the listing.",
        resource_type, identifier
    );
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the closest candidate within the suggestion threshold.
///
/// Exact (case-insensitive) matches are not suggestions.
pub(crate) fn find_similar<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|c| !c.is_empty())
        .map(|c| (c, levenshtein(&query_lower, &c.to_lowercase())))
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.to_string())
    } else {
        None
    }
}

impl EventStore {
    /// Suggests an event id close to `id`.
    pub fn find_similar_id(&self, id: &str) -> Option<String> {
        find_similar(id, self.iter().map(|e| e.id.as_str()))
    }
}

/// Suggests a user id from the directory close to `id`.
pub fn find_similar_user_id(directory: &[User], id: &str) -> Option<String> {
    find_similar(id, directory.iter().map(|u| u.id.as_str()))
}
