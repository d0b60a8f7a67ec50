//! Delivery records, result documents and search parameters.
//!
//! Records are deserialised from the fixtures file; the result structs
//! serialise to the JSON document printed by the binary.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::time_utils::TimeOfDay;

/// A single delivery record read from the fixtures file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Destination postcode.
    pub postcode: String,
    /// Recipe name, matched case-sensitively.
    pub recipe: String,
    /// Free-text delivery window, e.g. `"Wednesday 1AM - 7PM"`.
    pub delivery: String,
}

/// How many times one recipe was delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCount {
    pub recipe: String,
    pub count: usize,
}

/// The postcode that received the most deliveries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcodeDelivery {
    pub postcode: String,
    pub delivery_count: usize,
}

/// Deliveries to one postcode whose window lies strictly inside `from`..`to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcodeTimeDelivery {
    pub postcode: String,
    pub from: String,
    pub to: String,
    pub delivery_count: usize,
    /// Records whose delivery window could not be parsed.
    ///
    /// Only populated under [`ParsePolicy::Skip`]; absent from the JSON
    /// output otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped_records: Option<usize>,
}

/// The complete statistics document emitted for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStats {
    /// Number of distinct recipe names.
    pub unique_recipe_count: usize,
    /// Per-recipe counts, sorted by recipe name.
    pub count_per_recipe: Vec<RecipeCount>,
    pub busiest_postcode: PostcodeDelivery,
    pub count_per_postcode_and_time: PostcodeTimeDelivery,
    /// Matching recipe names, sorted and deduplicated.
    pub match_by_name: Vec<String>,
}

/// What to do when a delivery window cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Abort the whole computation on the first bad record.
    #[default]
    Abort,
    /// Log and skip the bad record, counting it in the result.
    Skip,
}

/// Caller-supplied search parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Substrings to look for in recipe names.
    pub recipe_words: Vec<String>,
    /// Postcode for the windowed count.
    pub postcode: String,
    pub from: TimeOfDay,
    pub to: TimeOfDay,
    /// `from` exactly as the caller wrote it, echoed in the output.
    pub from_raw: String,
    /// `to` exactly as the caller wrote it, echoed in the output.
    pub to_raw: String,
}

impl SearchParams {
    /// Build search parameters from their textual form.
    ///
    /// `recipe_words` is a comma-separated list. Splitting keeps empty pieces,
    /// so an empty list yields a single empty word which matches every recipe.
    pub fn parse(recipe_words: &str, postcode: &str, from: &str, to: &str) -> Result<Self> {
        let from_time = TimeOfDay::parse(from)
            .map_err(|_| StatsError::InvalidSearchWindow(format!("from: {}", from)))?;
        let to_time = TimeOfDay::parse(to)
            .map_err(|_| StatsError::InvalidSearchWindow(format!("to: {}", to)))?;

        Ok(Self {
            recipe_words: split_recipe_words(recipe_words),
            postcode: postcode.to_string(),
            from: from_time,
            to: to_time,
            from_raw: from.to_string(),
            to_raw: to.to_string(),
        })
    }
}

/// Split a comma-separated word list, keeping empty pieces.
pub fn split_recipe_words(words: &str) -> Vec<String> {
    words.split(',').map(str::to_string).collect()
}
