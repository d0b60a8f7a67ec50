use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::{ParsePolicy, SearchParams};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Calculate delivery statistics from a recipe fixtures file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "recipe-stats",
    about = "Calculate delivery statistics from a recipe fixtures file",
    version
)]
pub struct Settings {
    /// Path to the JSON fixtures file
    #[arg(long, env = "RECIPE_STATS_FILE", default_value = "fixtures/recipes.json")]
    pub file: PathBuf,

    /// Comma-separated words to search recipe names by
    #[arg(long, default_value = "")]
    pub recipes: String,

    /// Postcode to count windowed deliveries for
    #[arg(long, default_value = "10120")]
    pub postcode: String,

    /// Start of the delivery search window (e.g. 10AM)
    #[arg(long, default_value = "10AM")]
    pub from: String,

    /// End of the delivery search window (e.g. 3PM)
    #[arg(long, default_value = "3PM")]
    pub to: String,

    /// Skip records with unparsable delivery windows instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Build the search parameters for the core computation.
    pub fn search_params(&self) -> Result<SearchParams> {
        SearchParams::parse(&self.recipes, &self.postcode, &self.from, &self.to)
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        if self.skip_malformed {
            ParsePolicy::Skip
        } else {
            ParsePolicy::Abort
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    fn parse(args: &[&str]) -> Settings {
        let mut full = vec!["recipe-stats"];
        full.extend_from_slice(args);
        Settings::load_from_args(full).expect("valid args")
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&[]);
        assert_eq!(settings.recipes, "");
        assert_eq!(settings.postcode, "10120");
        assert_eq!(settings.from, "10AM");
        assert_eq!(settings.to, "3PM");
        assert!(!settings.skip_malformed);
        assert_eq!(settings.log_level, "WARNING");
        assert_eq!(settings.parse_policy(), ParsePolicy::Abort);
    }

    #[test]
    fn test_explicit_flags() {
        let settings = parse(&[
            "--file",
            "/tmp/data.json",
            "--recipes",
            "Chicken,Steak",
            "--postcode",
            "10208",
            "--from",
            "9AM",
            "--to",
            "5PM",
            "--skip-malformed",
        ]);
        assert_eq!(settings.file, PathBuf::from("/tmp/data.json"));
        assert_eq!(settings.recipes, "Chicken,Steak");
        assert_eq!(settings.postcode, "10208");
        assert_eq!(settings.parse_policy(), ParsePolicy::Skip);

        let params = settings.search_params().unwrap();
        assert_eq!(params.recipe_words, vec!["Chicken", "Steak"]);
        assert_eq!(params.from.hour(), 9);
        assert_eq!(params.to.hour(), 17);
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let settings = parse(&["--log-level", "ERROR", "--debug"]);
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Settings::load_from_args(["recipe-stats", "--log-level", "TRACE"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_params_reports_bad_window() {
        let settings = parse(&["--from", "morning"]);
        let err = settings.search_params().unwrap_err();
        assert!(matches!(err, StatsError::InvalidSearchWindow(_)));
    }
}
