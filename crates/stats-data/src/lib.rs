//! Data layer for the recipe stats calculator.
//!
//! Responsible for loading the JSON fixtures file, running the counting and
//! ranking passes and assembling the final statistics document.

pub mod aggregator;
pub mod analysis;
pub mod reader;
