mod bootstrap;

use anyhow::{Context, Result};
use stats_core::models::RecipeStats;
use stats_core::settings::Settings;
use stats_data::analysis::calculate_recipe_stats_from_file;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Recipe Stats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "File: {}, Postcode: {}, Window: {} - {}",
        settings.file.display(),
        settings.postcode,
        settings.from,
        settings.to
    );

    let output = run(&settings)?;
    println!("{}", output);

    Ok(())
}

/// Compute the statistics described by `settings` and render them as JSON.
fn run(settings: &Settings) -> Result<String> {
    let params = settings
        .search_params()
        .context("Invalid search parameters")?;

    let stats = calculate_recipe_stats_from_file(&settings.file, &params, settings.parse_policy())
        .with_context(|| format!("Failed to calculate stats for {}", settings.file.display()))?;

    render_json(&stats)
}

/// Pretty-print `stats` with two-space indentation.
fn render_json(stats: &RecipeStats) -> Result<String> {
    serde_json::to_string_pretty(stats).context("Error generating JSON")
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const FIXTURE: &str = r#"[
        {"postcode": "10208", "recipe": "Chicken", "delivery": "Day 10AM - 1PM"},
        {"postcode": "10208", "recipe": "Steak", "delivery": "Day 11AM - 2PM"},
        {"postcode": "10224", "recipe": "Pasta", "delivery": "Day 9AM - 12PM"}
    ]"#;

    fn write_fixture(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("recipes.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn settings_for(path: &Path, extra: &[&str]) -> Settings {
        let mut args = vec![
            "recipe-stats".to_string(),
            "--file".to_string(),
            path.display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Settings::load_from_args(args).unwrap()
    }

    #[test]
    fn test_run_emits_expected_document() {
        let tmp = TempDir::new().unwrap();
        let path = write_fixture(tmp.path(), FIXTURE);
        let settings = settings_for(
            &path,
            &["--recipes", "Chicken,Steak", "--postcode", "10208"],
        );

        let output = run(&settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["unique_recipe_count"], 3);
        assert_eq!(value["busiest_postcode"]["postcode"], "10208");
        assert_eq!(value["busiest_postcode"]["delivery_count"], 2);
        assert_eq!(value["count_per_postcode_and_time"]["postcode"], "10208");
        assert_eq!(value["count_per_postcode_and_time"]["from"], "10AM");
        assert_eq!(value["count_per_postcode_and_time"]["to"], "3PM");
        assert_eq!(value["count_per_postcode_and_time"]["delivery_count"], 1);
        assert_eq!(value["match_by_name"], serde_json::json!(["Chicken", "Steak"]));
    }

    #[test]
    fn test_run_uses_two_space_indentation() {
        let tmp = TempDir::new().unwrap();
        let path = write_fixture(tmp.path(), "[]");
        let output = run(&settings_for(&path, &[])).unwrap();

        assert!(output.starts_with("{\n  \"unique_recipe_count\": 0,"));
        assert!(output.contains("\n  \"count_per_recipe\": [],"));
        assert!(output.contains("\n  \"match_by_name\": []"));
    }

    #[test]
    fn test_run_skip_malformed_reports_skipped() {
        let tmp = TempDir::new().unwrap();
        let path = write_fixture(
            tmp.path(),
            r#"[{"postcode": "10120", "recipe": "Soup", "delivery": "Monday"}]"#,
        );

        assert!(run(&settings_for(&path, &[])).is_err());

        let output = run(&settings_for(&path, &["--skip-malformed"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count_per_postcode_and_time"]["skipped_records"], 1);
    }

    #[test]
    fn test_run_missing_file_has_context() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.json");
        let err = run(&settings_for(&missing, &[])).unwrap_err();
        assert!(err.to_string().contains("Failed to calculate stats"));
    }

    #[test]
    fn test_run_rejects_bad_search_window() {
        let tmp = TempDir::new().unwrap();
        let path = write_fixture(tmp.path(), "[]");
        let err = run(&settings_for(&path, &["--to", "late"])).unwrap_err();
        assert!(err.to_string().contains("Invalid search parameters"));
    }
}
