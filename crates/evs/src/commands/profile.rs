//! Profile command implementation.

use super::{load_snapshot, open_store, CommandContext, Result};
use crate::output::{format_profile_json, format_profile_table};

/// Shows the acting user's profile and points.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let store = open_store()?;
    let snapshot = load_snapshot(&store)?;

    if ctx.json_output {
        println!("{}", format_profile_json(&snapshot.user)?);
    } else if !ctx.quiet {
        print!("{}", format_profile_table(&snapshot.user, ctx.use_colors));
    }

    Ok(())
}
