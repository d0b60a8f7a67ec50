//! Counting and ranking passes over a delivery record collection.
//!
//! Every pass is a pure function of its input: counts are built in local maps
//! and materialised into sorted sequences before being returned.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use stats_core::error::Result;
use stats_core::models::{
    DeliveryRecord, ParsePolicy, PostcodeDelivery, PostcodeTimeDelivery, RecipeCount,
    SearchParams,
};
use stats_core::time_utils::DeliveryWindow;
use tracing::warn;

// ── RecipeAggregator ──────────────────────────────────────────────────────────

/// Counts deliveries per recipe name.
pub struct RecipeAggregator;

impl RecipeAggregator {
    /// Count occurrences of each recipe name (case-sensitive).
    ///
    /// Returns `(distinct_recipes, counts)` with `counts` sorted by recipe name.
    pub fn count_per_recipe(records: &[DeliveryRecord]) -> (usize, Vec<RecipeCount>) {
        // BTreeMap keeps the keys in byte-wise order.
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.recipe.as_str()).or_default() += 1;
        }

        let count_per_recipe: Vec<RecipeCount> = counts
            .into_iter()
            .map(|(recipe, count)| RecipeCount {
                recipe: recipe.to_string(),
                count,
            })
            .collect();

        (count_per_recipe.len(), count_per_recipe)
    }
}

// ── PostcodeRanker ────────────────────────────────────────────────────────────

/// Finds the postcode with the most deliveries.
pub struct PostcodeRanker;

impl PostcodeRanker {
    /// Select the postcode with the highest delivery count.
    ///
    /// Postcodes are compared in order of first appearance in `records` and
    /// only a strictly greater count replaces the current leader, so on a tie
    /// the postcode seen first wins. Empty input yields an empty postcode with
    /// a count of zero.
    pub fn busiest_postcode(records: &[DeliveryRecord]) -> PostcodeDelivery {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for record in records {
            let count = counts.entry(record.postcode.as_str()).or_insert_with(|| {
                first_seen.push(record.postcode.as_str());
                0
            });
            *count += 1;
        }

        let mut busiest = PostcodeDelivery::default();
        for postcode in first_seen {
            let count = counts[postcode];
            if count > busiest.delivery_count {
                busiest = PostcodeDelivery {
                    postcode: postcode.to_string(),
                    delivery_count: count,
                };
            }
        }

        busiest
    }
}

// ── WindowedPostcodeCounter ───────────────────────────────────────────────────

/// Counts deliveries to one postcode inside a search window.
pub struct WindowedPostcodeCounter;

impl WindowedPostcodeCounter {
    /// Count records for `params.postcode` whose delivery window lies strictly
    /// inside `params.from`..`params.to`.
    ///
    /// Only records for the target postcode are parsed. Under
    /// [`ParsePolicy::Abort`] the first unparsable window is returned as an
    /// error; under [`ParsePolicy::Skip`] it is logged and counted in
    /// `skipped_records` instead.
    pub fn count_in_window(
        records: &[DeliveryRecord],
        params: &SearchParams,
        policy: ParsePolicy,
    ) -> Result<PostcodeTimeDelivery> {
        let mut delivery_count = 0usize;
        let mut skipped = 0usize;

        for record in records.iter().filter(|r| r.postcode == params.postcode) {
            let window = match DeliveryWindow::parse(&record.delivery) {
                Ok(w) => w,
                Err(e) if policy == ParsePolicy::Skip => {
                    warn!(
                        "Skipping {} delivery to {}: {}",
                        record.recipe, record.postcode, e
                    );
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if window.is_strictly_within(&params.from, &params.to) {
                delivery_count += 1;
            }
        }

        Ok(PostcodeTimeDelivery {
            postcode: params.postcode.clone(),
            from: params.from_raw.clone(),
            to: params.to_raw.clone(),
            delivery_count,
            skipped_records: match policy {
                ParsePolicy::Skip => Some(skipped),
                ParsePolicy::Abort => None,
            },
        })
    }
}

// ── NameMatcher ───────────────────────────────────────────────────────────────

/// Looks up recipe names by substring.
pub struct NameMatcher;

impl NameMatcher {
    /// Every distinct recipe name containing at least one of `words`.
    ///
    /// Matching is literal and case-sensitive. An empty word, or no words at
    /// all, matches every recipe. The result is sorted and free of duplicates.
    pub fn match_by_name<S: AsRef<str>>(records: &[DeliveryRecord], words: &[S]) -> Vec<String> {
        let matches: BTreeSet<&str> = records
            .iter()
            .map(|r| r.recipe.as_str())
            .filter(|recipe| {
                words.is_empty() || words.iter().any(|w| recipe.contains(w.as_ref()))
            })
            .collect();

        matches.into_iter().map(str::to_string).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
