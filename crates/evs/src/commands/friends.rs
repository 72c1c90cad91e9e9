//! Friends command implementation.

use eventscout_core::{find_similar_user_id, format_not_found_error, Session, SnapshotStore, Transition};

use super::{load_snapshot, open_store, CommandContext, CommandError, Result};
use crate::output::{format_friends_json, format_friends_table, format_transition_json, format_transition_table};

/// Lists the user's friends as they were when added.
pub fn execute_list(ctx: &CommandContext) -> Result<()> {
    let store = open_store()?;
    let snapshot = load_snapshot(&store)?;

    if ctx.json_output {
        println!("{}", format_friends_json(&snapshot.user.friends)?);
    } else if !ctx.quiet {
        print!("{}", format_friends_table(&snapshot.user.friends, ctx.use_colors));
    }

    Ok(())
}

/// Adds a friend from the directory.
pub fn execute_add(ctx: &CommandContext, user_id: &str) -> Result<()> {
    let store = open_store()?;
    execute_add_with_store(ctx, &store, user_id).map(|_| ())
}

/// Adds a friend using the given store.
///
/// The engine treats an unknown id as a silent no-op. At the command line
/// that would look like success, so an id missing from the directory is
/// reported here before the ledger runs.
pub fn execute_add_with_store(
    ctx: &CommandContext,
    store: &SnapshotStore,
    user_id: &str,
) -> Result<Transition> {
    let mut snapshot = load_snapshot(store)?;

    if user_id != snapshot.user.id && !snapshot.directory.iter().any(|u| u.id == user_id) {
        let suggestion = find_similar_user_id(&snapshot.directory, user_id);
        return Err(CommandError::NotFound(format_not_found_error(
            "User",
            user_id,
            suggestion.as_deref(),
        )));
    }

    let mut session = Session::new(snapshot.user.clone());
    let transition = session.add_friend(&snapshot.directory, user_id);
    let notifications = session.take_notifications();
    let points = session.user().points;

    if transition.is_change() {
        snapshot.user = session.into_user();
        store.save(&snapshot)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ctx() -> CommandContext {
        CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn test_add_friend_persists_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::with_path(dir.path().join("session.json"));

        let t = execute_add_with_store(&ctx(), &store, "user-2").unwrap();
        assert_eq!(t, Transition::FriendAdded { user_id: "user-2".to_string() });

        let saved = store.load().unwrap();
        assert!(saved.user.is_friend("user-2"));
        assert_eq!(saved.user.friends[0].points, 820);
    }

    #[test]
    fn test_add_existing_friend_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::with_path(dir.path().join("session.json"));

        execute_add_with_store(&ctx(), &store, "user-3").unwrap();
        let t = execute_add_with_store(&ctx(), &store, "user-3").unwrap();
        assert_eq!(t, Transition::Unchanged);
        assert_eq!(store.load().unwrap().user.friends.len(), 1);
    }

    #[test]
    fn test_add_unknown_user_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::with_path(dir.path().join("session.json"));

        let err = execute_add_with_store(&ctx(), &store, "user-22").unwrap_err();
        assert!(matches!(err, CommandError::NotFound(_)));
        assert!(err.to_string().contains("Did you mean"));
        assert!(!store.exists());
    }
}
