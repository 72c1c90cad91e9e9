//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split on whether they talk to the event source. Local commands
//! only touch the saved session and config; remote commands need an API key.

use crate::cli::{Cli, Commands, ConfigCommands, FriendsCommands, Shell, SuggestCommands};
use crate::commands::ledger::LedgerAction;
use crate::commands::list::ListOptions;
use crate::commands::refresh::RefreshOptions;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that work on local state only.
pub trait LocalCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that call the event source.
#[allow(async_fn_in_trait)]
pub trait RemoteCommand {
    /// Execute the command with the resolved API key.
    async fn execute(&self, ctx: &CommandContext, api_key: &str) -> Result<()>;
}

/// Commands that never leave the machine.
pub enum LocalDispatch<'a> {
    List(ListOptions),
    Show(&'a str),
    Ledger(LedgerAction, &'a str),
    Suggest(&'a Option<SuggestCommands>),
    Friends(&'a Option<FriendsCommands>),
    Profile,
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> LocalDispatch<'a> {
    /// Returns None if the command needs the event source.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        let dispatch = match &cli.command {
            Some(Commands::List {
                category,
                mood,
                min_price,
                max_price,
                distance,
                when,
                quick,
                search,
                limit,
            }) => Self::List(ListOptions {
                categories: category.clone(),
                moods: mood.clone(),
                min_price: *min_price,
                max_price: *max_price,
                distance: *distance,
                when: when.clone(),
                quick: quick.clone(),
                search: search.clone(),
                limit: *limit,
            }),
            Some(Commands::Show { event_id }) => Self::Show(event_id),
            Some(Commands::Attend { event_id }) => Self::Ledger(LedgerAction::Attend, event_id),
            Some(Commands::Unattend { event_id }) => Self::Ledger(LedgerAction::Unattend, event_id),
            Some(Commands::Share { event_id }) => Self::Ledger(LedgerAction::Share, event_id),
            Some(Commands::Save { event_id }) => Self::Ledger(LedgerAction::Save, event_id),
            Some(Commands::Suggest { command }) => Self::Suggest(command),
            Some(Commands::Friends { command }) => Self::Friends(command),
            Some(Commands::Profile) => Self::Profile,
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
            Some(Commands::Refresh { .. }) => return None,
        };
        Some(dispatch)
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::List(opts) => commands::list::execute(ctx, opts),
            Self::Show(event_id) => commands::show::execute(ctx, event_id),
            Self::Ledger(action, event_id) => commands::ledger::execute(ctx, *action, event_id),
            Self::Suggest(command) => match command {
                Some(SuggestCommands::Events { limit }) => {
                    commands::suggest::execute_events(ctx, *limit)
                }
                None => commands::suggest::execute_events(ctx, 20),
                Some(SuggestCommands::Friends) => commands::suggest::execute_friends(ctx),
            },
            Self::Friends(command) => match command {
                Some(FriendsCommands::List) | None => commands::friends::execute_list(ctx),
                Some(FriendsCommands::Add { user_id }) => {
                    commands::friends::execute_add(ctx, user_id)
                }
            },
            Self::Profile => commands::profile::execute(ctx),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("evs - discover events, earn points, find friends");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that fetch from the event source.
pub enum RemoteDispatch {
    Refresh(RefreshOptions),
}

impl RemoteDispatch {
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Refresh {
                keyword,
                category,
                city,
                state,
                from,
                to,
                size,
                force,
            }) => Some(Self::Refresh(RefreshOptions {
                keyword: keyword.clone(),
                category: category.clone(),
                city: city.clone(),
                state: state.clone(),
                from: *from,
                to: *to,
                size: *size,
                force: *force,
            })),
            _ => None,
        }
    }
}

impl RemoteCommand for RemoteDispatch {
    async fn execute(&self, ctx: &CommandContext, api_key: &str) -> Result<()> {
        match self {
            Self::Refresh(opts) => commands::refresh::execute(ctx, opts, api_key).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_local_dispatch_list_options() {
        let cli = Cli::parse_from(["evs", "list", "--when", "today", "--limit", "5"]);
        match LocalDispatch::try_from_cli(&cli) {
            Some(LocalDispatch::List(opts)) => {
                assert_eq!(opts.when.as_deref(), Some("today"));
                assert_eq!(opts.limit, 5);
            }
            _ => panic!("expected list dispatch"),
        }
    }

    #[test]
    fn test_local_dispatch_ledger_actions() {
        let cli = Cli::parse_from(["evs", "unattend", "evt-2"]);
        assert!(matches!(
            LocalDispatch::try_from_cli(&cli),
            Some(LocalDispatch::Ledger(LedgerAction::Unattend, "evt-2"))
        ));
    }

    #[test]
    fn test_local_dispatch_help() {
        let cli = Cli::parse_from(["evs"]);
        assert!(matches!(LocalDispatch::try_from_cli(&cli), Some(LocalDispatch::Help)));
    }

    #[test]
    fn test_refresh_is_remote() {
        let cli = Cli::parse_from(["evs", "refresh", "--force"]);
        assert!(LocalDispatch::try_from_cli(&cli).is_none());
        match RemoteDispatch::from_cli(&cli) {
            Some(RemoteDispatch::Refresh(opts)) => assert!(opts.force),
            None => panic!("expected refresh dispatch"),
        }
    }

    #[test]
    fn test_remote_dispatch_none_for_local() {
        let cli = Cli::parse_from(["evs", "profile"]);
        assert!(RemoteDispatch::from_cli(&cli).is_none());
    }
}
