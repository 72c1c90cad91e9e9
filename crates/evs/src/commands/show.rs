//! Show command implementation.
//!
//! Displays one event from the saved listing. Unlike the ledger commands, an
//! unknown id here is reported, with the closest id as a suggestion.

use eventscout_core::format_not_found_error;

use super::{load_snapshot, open_store, today, CommandContext, CommandError, Result};
use crate::output::{format_event_details_json, format_event_details_table};

/// Executes the show command.
pub fn execute(ctx: &CommandContext, event_id: &str) -> Result<()> {
    let store = open_store()?;
    let snapshot = load_snapshot(&store)?;

    let Some(event) = snapshot.events.get(event_id) else {
        let suggestion = snapshot.events.find_similar_id(event_id);
        return Err(CommandError::NotFound(format_not_found_error(
            "Event",
            event_id,
            suggestion.as_deref(),
        )));
    };

    if ctx.json_output {
        println!("{}", format_event_details_json(event, &snapshot.user)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_event_details_table(event, &snapshot.user, today(), ctx.use_colors)
        );
    }

    Ok(())
}
