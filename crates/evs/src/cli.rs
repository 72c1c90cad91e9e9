//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for evs.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// evs - discover events, earn points, find friends
#[derive(Parser, Debug)]
#[command(name = "evs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the Ticketmaster API key (default: from config/env)
    #[arg(long, global = true, env = "EVENTSCOUT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events in the current listing
    #[command(alias = "l")]
    List {
        /// Category or tag to include (repeatable, exact match)
        #[arg(short, long, action = clap::ArgAction::Append)]
        category: Vec<String>,

        /// Mood to include (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        mood: Vec<String>,

        /// Minimum price in dollars
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price in dollars (100 or more means no upper bound)
        #[arg(long)]
        max_price: Option<f64>,

        /// Search radius in miles (accepted, not applied)
        #[arg(long)]
        distance: Option<f64>,

        /// Date window: today, tomorrow, this-week, this-weekend, next-week, next-month, all
        #[arg(short, long)]
        when: Option<String>,

        /// Quick filter: trending, weekend, upcoming, all
        #[arg(long)]
        quick: Option<String>,

        /// Free-text search over title, category, tags and venue
        #[arg(short, long)]
        search: Option<String>,

        /// Limit results
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Show event details
    #[command(alias = "s")]
    Show {
        /// Event ID
        event_id: String,
    },

    /// Attend an event (attending again cancels)
    Attend {
        /// Event ID
        event_id: String,
    },

    /// Stop attending an event
    Unattend {
        /// Event ID
        event_id: String,
    },

    /// Share an event (points are awarded once)
    Share {
        /// Event ID
        event_id: String,
    },

    /// Save or unsave an event
    Save {
        /// Event ID
        event_id: String,
    },

    /// Show suggestions based on your interests
    Suggest {
        #[command(subcommand)]
        command: Option<SuggestCommands>,
    },

    /// Manage friends
    Friends {
        #[command(subcommand)]
        command: Option<FriendsCommands>,
    },

    /// Show your profile and points
    Profile,

    /// Fetch a fresh listing from Ticketmaster
    #[command(alias = "r")]
    Refresh {
        /// Keyword to search for
        #[arg(short, long)]
        keyword: Option<String>,

        /// Classification name (e.g. Music, Sports)
        #[arg(short, long)]
        category: Option<String>,

        /// City (default: from config)
        #[arg(long)]
        city: Option<String>,

        /// Two-letter state code
        #[arg(long)]
        state: Option<String>,

        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Number of events to request
        #[arg(long)]
        size: Option<u32>,

        /// Fetch even if the listing is still fresh
        #[arg(short, long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Suggestion subcommands
#[derive(Subcommand, Debug)]
pub enum SuggestCommands {
    /// Events tagged with one of your interests
    Events {
        /// Limit results
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// People who share one of your interests
    Friends,
}

/// Friends subcommands
#[derive(Subcommand, Debug)]
pub enum FriendsCommands {
    /// List your friends
    List,

    /// Add a friend by user ID
    Add {
        /// User ID
        user_id: String,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api_key, output.color, feed.city, feed.stale_minutes)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "evs", "list", "-c", "Music", "-c", "Tech", "--mood", "chill", "--max-price", "50",
            "--when", "this-weekend", "-s", "jazz",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List {
                category,
                mood,
                max_price,
                when,
                search,
                limit,
                ..
            }) => {
                assert_eq!(category, vec!["Music", "Tech"]);
                assert_eq!(mood, vec!["chill"]);
                assert_eq!(max_price, Some(50.0));
                assert_eq!(when.as_deref(), Some("this-weekend"));
                assert_eq!(search.as_deref(), Some("jazz"));
                assert_eq!(limit, 50);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_refresh_dates() {
        let cli = Cli::try_parse_from([
            "evs", "refresh", "--city", "Boston", "--from", "2025-04-18", "--to", "2025-04-20",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Refresh { city, from, to, force, .. }) => {
                assert_eq!(city.as_deref(), Some("Boston"));
                assert_eq!(from, NaiveDate::from_ymd_opt(2025, 4, 18));
                assert_eq!(to, NaiveDate::from_ymd_opt(2025, 4, 20));
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_refresh_rejects_bad_date() {
        assert!(Cli::try_parse_from(["evs", "refresh", "--from", "next friday"]).is_err());
    }

    #[test]
    fn test_parse_friends_add() {
        let cli = Cli::try_parse_from(["evs", "friends", "add", "user-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Friends {
                command: Some(FriendsCommands::Add { ref user_id })
            }) if user_id == "user-2"
        ));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["evs", "-q", "-v", "profile"]).is_err());
    }
}
