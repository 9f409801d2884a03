//! Tempora - time values, date helpers and feature toggles
//!
//! This library provides a unit-tagged time value that converts between days,
//! hours, minutes, seconds, clock-time strings and abstract units (such as a
//! class period), along with date helpers and a feature toggle evaluator for
//! web application backends.
//!
//! # Modules
//!
//! * [`timer`] - Unit-tagged time values, conversions and arithmetic
//! * [`feature`] - Feature toggles evaluated against an explicit auth context
//! * [`config`] - Configuration loading and validation
//! * [`utils`] - Date, weekday and value helpers

/// Configuration module for timer scales, display, logging and feature toggles
pub mod config;

/// Constants and default values
pub mod constants;

/// Error types for parsing and conversion
pub mod error;

/// Feature toggle model and evaluation
pub mod feature;

/// Logging setup on top of the `log` facade
pub mod logger;

/// Unit-tagged time values
pub mod timer;

/// Utility functions for dates and values
pub mod utils;

pub use error::{TimerError, TimerResult};
pub use timer::{ClockTime, Operand, TimeUnit, TimeValue, Timer};
