//! Utility modules for Tempora.
//!
//! Stateless helpers used alongside the timer: date parsing and formatting,
//! Portuguese weekday names, and a few value lookups.
//!
//! # Available Utilities
//!
//! - [`date`] - Date parsing, formatting, ranges and business day counts
//! - [`weekday`] - Weekday naming in Brazilian Portuguese
//! - [`values`] - Nearest-value search, sign checks and JSON cleanup

pub mod date;
pub mod values;
pub mod weekday;
