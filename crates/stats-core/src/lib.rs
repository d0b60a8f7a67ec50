//! Core types for the recipe stats calculator.
//!
//! Holds the error taxonomy, the delivery record and result models, the
//! time-of-day parser and the command-line settings shared by the other crates.

pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, StatsError};
