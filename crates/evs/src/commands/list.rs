//! List command implementation.
//!
//! Lists events from the saved listing, filtered by the given criteria.

use eventscout_api::models::Event;
use eventscout_core::filter::{
    DateWindow, EventFilter, FilterEvaluator, FilterResult, PriceRange, QuickFilter,
    NO_UPPER_BOUND,
};

use super::{load_snapshot, open_store, today, CommandContext, Result};
use crate::output::{format_events_json, format_events_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Categories or tags to include.
    pub categories: Vec<String>,
    /// Moods to include.
    pub moods: Vec<String>,
    /// Minimum price.
    pub min_price: Option<f64>,
    /// Maximum price.
    pub max_price: Option<f64>,
    /// Search radius in miles.
    pub distance: Option<f64>,
    /// Date window name.
    pub when: Option<String>,
    /// Quick filter name.
    pub quick: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
    /// Limit results.
    pub limit: usize,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if a filter option is invalid or the session can't be
/// loaded.
pub fn execute(ctx: &CommandContext, opts: &ListOptions) -> Result<()> {
    let filter = build_filter(opts)?;
    let store = open_store()?;
    let snapshot = load_snapshot(&store)?;
    let today = today();

    let evaluator = FilterEvaluator::with_today(&filter, today);
    let events: Vec<&Event> = evaluator
        .filter_events(&snapshot.events)
        .into_iter()
        .take(opts.limit)
        .collect();

    if ctx.verbose {
        eprintln!(
            "{} of {} events match ({} listing)",
            events.len(),
            snapshot.events.len(),
            snapshot.origin
        );
    }

    if ctx.json_output {
        println!("{}", format_events_json(&events, &snapshot.user)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_events_table(&events, &snapshot.user, today, ctx.use_colors)
        );
    }

    Ok(())
}

/// Builds an [`EventFilter`] from command-line options.
///
/// Only one price bound may be given; the other defaults to 0 or the
/// open-ended maximum.
pub fn build_filter(opts: &ListOptions) -> FilterResult<EventFilter> {
    let mut filter = EventFilter::new()
        .categories(opts.categories.iter().cloned())
        .moods(opts.moods.iter().cloned());

    if opts.min_price.is_some() || opts.max_price.is_some() {
        let min = opts.min_price.unwrap_or(0.0);
        let max = opts.max_price.unwrap_or(NO_UPPER_BOUND.max(min));
        let range = PriceRange::new(min, max)?;
        filter = filter.price_range(range);
    }

    if let Some(miles) = opts.distance {
        filter = filter.distance(miles);
    }

    if let Some(ref name) = opts.when {
        filter = filter.date_range(name.parse::<DateWindow>()?);
    }

    if let Some(ref name) = opts.quick {
        filter = filter.quick(name.parse::<QuickFilter>()?);
    }

    if let Some(ref query) = opts.search {
        filter = filter.query(query.clone());
    }

    Ok(filter)
}
