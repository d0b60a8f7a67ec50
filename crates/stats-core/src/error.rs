use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while computing recipe statistics.
#[derive(Error, Debug)]
pub enum StatsError {
    /// The fixtures file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixtures file is not a valid JSON array of delivery records.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A time token did not match the `3PM` format.
    #[error("Invalid time format: {0}")]
    TimeParse(String),

    /// A delivery string did not contain a day label and two time tokens.
    #[error("Malformed delivery window: {0}")]
    MalformedDeliveryWindow(String),

    /// The caller-supplied search window could not be parsed.
    #[error("Invalid search window: {0}")]
    InvalidSearchWindow(String),
}

impl StatsError {
    /// Whether this error came from parsing a delivery or search time.
    pub fn is_time_parse(&self) -> bool {
        matches!(
            self,
            StatsError::TimeParse(_)
                | StatsError::MalformedDeliveryWindow(_)
                | StatsError::InvalidSearchWindow(_)
        )
    }
}

/// Convenience alias used throughout the stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;
