//! Points ledger commands: attend, unattend, share and save.
//!
//! Each loads the session, applies one ledger operation, and saves the
//! session back only if the user changed. An unknown event id changes
//! nothing and prints nothing.

use eventscout_core::{Session, Snapshot, SnapshotStore, Transition};

use super::{load_snapshot, open_store, CommandContext, Result};
use crate::output::{format_transition_json, format_transition_table};

/// Ledger operation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    Attend,
    Unattend,
    Share,
    Save,
}

/// Executes a ledger command against the default session store.
pub fn execute(ctx: &CommandContext, action: LedgerAction, event_id: &str) -> Result<()> {
    let store = open_store()?;
    execute_with_store(ctx, &store, action, event_id).map(|_| ())
}

/// Executes a ledger command against the given store, returning the
/// transition that was applied.
pub fn execute_with_store(
    ctx: &CommandContext,
    store: &SnapshotStore,
    action: LedgerAction,
    event_id: &str,
) -> Result<Transition> {
    let mut snapshot = load_snapshot(store)?;
    let mut session = Session::new(snapshot.user.clone());

    let transition = apply(&mut session, &snapshot, action, event_id);
    let notifications = session.take_notifications();
    let points = session.user().points;

    if transition.is_change() {
        snapshot.user = session.into_user();
        store.save(&snapshot)?;
    } else if ctx.verbose {
        eprintln!("No changes for '{}'", event_id);
    }

    if ctx.json_output {
        println!(
            "{}",
            format_transition_json(&transition, points, &notifications)?
        );
    } else if !ctx.quiet {
        print!("{}", format_transition_table(&notifications, ctx.use_colors));
    }

    Ok(transition)
}

fn apply(
    session: &mut Session,
    snapshot: &Snapshot,
    action: LedgerAction,
    event_id: &str,
) -> Transition {
    let events = &snapshot.events;
    match action {
        LedgerAction::Attend => session.attend_event(events, event_id),
        LedgerAction::Unattend => session.unattend_event(events, event_id),
        LedgerAction::Share => session.share_event(events, event_id),
        LedgerAction::Save => session.toggle_save(events, event_id),
    }
}
