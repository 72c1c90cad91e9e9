//! Refresh command implementation.
//!
//! Pulls a new listing from Ticketmaster into the saved session. The saved
//! listing is loaded into an [`EventFeed`] first, so a listing fetched less
//! than the staleness window ago for the same query is reused across runs.

use chrono::{DateTime, NaiveDate, Utc};
use eventscout_api::client::TicketmasterClient;
use eventscout_api::discovery::EventQuery;
use eventscout_core::{EventFeed, EventProvider, FeedOrigin, Snapshot};

use super::config::load_config;
use super::{load_snapshot, open_store, CommandContext, Result};
use crate::output::{format_refresh_json, format_refresh_table};

/// Default staleness window when the config doesn't set one.
const DEFAULT_STALE_MINUTES: i64 = 5;

/// Options for the refresh command.
#[derive(Debug, Default)]
pub struct RefreshOptions {
    pub keyword: Option<String>,
    pub category: Option<String>,
    /// City to search; falls back to `feed.city` from the config.
    pub city: Option<String>,
    pub state: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub size: Option<u32>,
    /// Fetch even if the saved listing is fresh.
    pub force: bool,
}

/// Outcome of a refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshResult {
    /// Where the listing now comes from.
    pub origin: FeedOrigin,
    /// Whether the provider was asked for events.
    pub fetched: bool,
    /// Number of events in the listing.
    pub count: usize,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Executes the refresh command.
pub async fn execute(ctx: &CommandContext, opts: &RefreshOptions, api_key: &str) -> Result<()> {
    let config = load_config()?;
    let store = open_store()?;
    let mut snapshot = load_snapshot(&store)?;

    let city = opts.city.clone().or(config.feed.city);
    let query = build_query(opts, city);
    let stale_minutes = config.feed.stale_minutes.unwrap_or(DEFAULT_STALE_MINUTES);

    if ctx.verbose {
        eprintln!("Querying Ticketmaster ({} minute cache)", stale_minutes);
    }

    let client = TicketmasterClient::new(api_key);
    let result = refresh_with(
        &mut snapshot,
        client,
        &query,
        stale_minutes,
        opts.force,
        Utc::now(),
    )
    .await;

    if result.fetched {
        store.save(&snapshot)?;
    }

    if ctx.json_output {
        println!("{}", format_refresh_json(&result)?);
    } else if !ctx.quiet {
        print!("{}", format_refresh_table(&result, ctx.use_colors));
    }

    Ok(())
}

/// Builds the provider query from command options.
pub fn build_query(opts: &RefreshOptions, city: Option<String>) -> EventQuery {
    let mut query = EventQuery::new().dates(opts.from, opts.to);
    query.keyword = opts.keyword.clone();
    query.category = opts.category.clone();
    query.city = city;
    query.state_code = opts.state.clone();
    query.size = opts.size;
    query
}

/// Refreshes the snapshot's listing through `provider`.
///
/// The snapshot is only modified when the provider was actually consulted.
pub async fn refresh_with<P: EventProvider>(
    snapshot: &mut Snapshot,
    provider: P,
    query: &EventQuery,
    stale_minutes: i64,
    force: bool,
    now: DateTime<Utc>,
) -> RefreshResult {
    let mut feed = EventFeed::with_stale_threshold(provider, stale_minutes);
    feed.prime(
        snapshot.query.clone(),
        snapshot.events.clone(),
        snapshot.fetched_at,
        snapshot.origin,
    );

    let fetched = force || feed.needs_refresh(query, now);
    if fetched {
        feed.refresh(query, now).await;
        snapshot.events = feed.store().clone();
        snapshot.query = feed.query().cloned();
        snapshot.fetched_at = feed.fetched_at();
        snapshot.origin = feed.origin();
    } else {
        tracing::debug!("listing is fresh, skipping fetch");
    }

    RefreshResult {
        origin: snapshot.origin,
        fetched,
        count: snapshot.events.len(),
        fetched_at: snapshot.fetched_at,
    }
}
