//! Statistics pipeline for the recipe stats calculator.
//!
//! Runs the four independent passes from [`crate::aggregator`] over one record
//! collection and assembles a [`RecipeStats`] ready for serialisation.

use std::path::Path;

use stats_core::error::Result;
use stats_core::models::{DeliveryRecord, ParsePolicy, RecipeStats, SearchParams};
use tracing::debug;

use crate::aggregator::{NameMatcher, PostcodeRanker, RecipeAggregator, WindowedPostcodeCounter};
use crate::reader::load_records;

// ── Public functions ──────────────────────────────────────────────────────────

/// Compute every statistic over `records`.
///
/// Fails only when the windowed count meets an unparsable delivery window
/// under [`ParsePolicy::Abort`].
pub fn calculate_recipe_stats(
    records: &[DeliveryRecord],
    params: &SearchParams,
    policy: ParsePolicy,
) -> Result<RecipeStats> {
    let start = std::time::Instant::now();

    let (unique_recipe_count, count_per_recipe) = RecipeAggregator::count_per_recipe(records);
    let busiest_postcode = PostcodeRanker::busiest_postcode(records);
    let count_per_postcode_and_time =
        WindowedPostcodeCounter::count_in_window(records, params, policy)?;
    let match_by_name = NameMatcher::match_by_name(records, &params.recipe_words);

    debug!(
        "Computed stats over {} records ({} recipes, {} name matches) in {:.3}s",
        records.len(),
        unique_recipe_count,
        match_by_name.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(RecipeStats {
        unique_recipe_count,
        count_per_recipe,
        busiest_postcode,
        count_per_postcode_and_time,
        match_by_name,
    })
}

/// Load the fixtures file at `path` and compute every statistic over it.
pub fn calculate_recipe_stats_from_file(
    path: &Path,
    params: &SearchParams,
    policy: ParsePolicy,
) -> Result<RecipeStats> {
    let records = load_records(path)?;
    calculate_recipe_stats(&records, params, policy)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
