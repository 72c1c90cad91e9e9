//! Suggest command implementation.

use eventscout_api::models::Event;
use eventscout_core::recommend::{suggested_events, suggested_friends};
use eventscout_core::User;

use super::{load_snapshot, open_store, today, CommandContext, Result};
use crate::output::{format_events_json, format_events_table, format_users_json, format_users_table};

/// Lists events tagged with one of the user's interests.
pub fn execute_events(ctx: &CommandContext, limit: usize) -> Result<()> {
    let store = open_store()?;
    let snapshot = load_snapshot(&store)?;

    let events: Vec<&Event> = suggested_events(&snapshot.user, &snapshot.events)
        .take(limit)
        .collect();

    if ctx.json_output {
        println!("{}", format_events_json(&events, &snapshot.user)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_events_table(&events, &snapshot.user, today(), ctx.use_colors)
        );
    }

    Ok(())
}

/// Lists people who share an interest and aren't friends yet.
pub fn execute_friends(ctx: &CommandContext) -> Result<()> {
    let store = open_store()?;
    let snapshot = load_snapshot(&store)?;

    let users: Vec<&User> = suggested_friends(&snapshot.user, &snapshot.directory).collect();

    if ctx.json_output {
        println!("{}", format_users_json(&users)?);
    } else if !ctx.quiet {
        print!("{}", format_users_table(&users, ctx.use_colors));
    }

    Ok(())
}
