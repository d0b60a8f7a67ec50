//! Time-of-day values and delivery-window parsing.
//!
//! Delivery strings look like `"Weekday 10AM - 2PM"`: a day label followed by
//! two hour tokens in the `3PM` format (numeric hour, no minutes, `AM`/`PM`).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crate::error::{Result, StatsError};

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// An hour of the day with no date or timezone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from a 24-hour clock hour (`0..=23`).
    pub fn from_hour(hour: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, 0, 0).map(Self)
    }

    /// Parse a `3PM`-style token.
    ///
    /// The hour takes one or two digits in `0..=12`. `12AM` is midnight and
    /// `12PM` is noon. The suffix must be upper-case.
    pub fn parse(token: &str) -> Result<Self> {
        let caps = hour_token_regex()
            .captures(token)
            .ok_or_else(|| StatsError::TimeParse(token.to_string()))?;

        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| StatsError::TimeParse(token.to_string()))?;
        if hour > 12 {
            return Err(StatsError::TimeParse(token.to_string()));
        }

        let hour24 = match (&caps[2], hour) {
            ("AM", 12) => 0,
            ("AM", h) => h,
            ("PM", 12) => 12,
            (_, h) => h + 12,
        };

        Self::from_hour(hour24).ok_or_else(|| StatsError::TimeParse(token.to_string()))
    }

    /// Hour on the 24-hour clock.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Strictly earlier in the day than `other`.
    pub fn is_before(&self, other: &TimeOfDay) -> bool {
        self < other
    }

    /// Strictly later in the day than `other`.
    pub fn is_after(&self, other: &TimeOfDay) -> bool {
        self > other
    }
}

impl FromStr for TimeOfDay {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour12, suffix) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{}{}", hour12, suffix)
    }
}

fn hour_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})(AM|PM)$").expect("regex is valid"))
}

// ── DeliveryWindow ────────────────────────────────────────────────────────────

/// The parsed `[start, end]` interval of one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl DeliveryWindow {
    /// Parse a delivery string such as `"Weekday 10AM - 2PM"`.
    ///
    /// Dash separators are dropped and the remainder split on whitespace; the
    /// second and third tokens are the start and end times. Anything after the
    /// third token is ignored.
    pub fn parse(delivery: &str) -> Result<Self> {
        let tokens: Vec<&str> = delivery
            .split_whitespace()
            .filter(|token| *token != "-")
            .collect();

        if tokens.len() < 3 {
            return Err(StatsError::MalformedDeliveryWindow(delivery.to_string()));
        }

        Ok(Self {
            start: TimeOfDay::parse(tokens[1])?,
            end: TimeOfDay::parse(tokens[2])?,
        })
    }

    /// Whether this window lies strictly inside `(from, to)`.
    ///
    /// A window that touches either boundary is not inside.
    pub fn is_strictly_within(&self, from: &TimeOfDay, to: &TimeOfDay) -> bool {
        self.start.is_after(from) && self.end.is_before(to)
    }
}

impl FromStr for DeliveryWindow {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
