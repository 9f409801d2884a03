//! Constants used throughout the crate
//!
//! This module centralizes unit factors, default configuration values and
//! user-facing messages.

// Unit factors
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Weights of clock-time parts, least significant first
pub const CLOCK_PART_WEIGHTS: [i64; 4] = [1, 60, 3_600, 86_400];

/// Zero clock value used when a negative result is clamped
pub const CLOCK_ZERO: &str = "0:00:00:00";

// Timer defaults
/// Minutes represented by one abstract unit unless configured otherwise
pub const DEFAULT_MINUTES_PER_UNIT: f64 = 1.0;
/// Name and length of the abstract unit shipped in the default config
pub const DEFAULT_NAMED_UNIT: &str = "class_period";
pub const DEFAULT_NAMED_UNIT_MINUTES: f64 = 50.0;
/// Default width used by `Timer::zero_pad_default`
pub const DEFAULT_ZERO_PAD: usize = 2;

// Configuration defaults
pub const DEFAULT_ENVIRONMENT: &str = "dev";
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";
pub const DEFAULT_DATETIME_SEPARATOR: &str = " - ";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// File names
pub const CONFIG_FILE_NAME: &str = "tempora.toml";
pub const APP_DIR_NAME: &str = "tempora";
pub const LOG_FILE_NAME: &str = "tempora.log";

// CLI messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const FEATURE_ENABLED: &str = "✅ enabled";
pub const FEATURE_DISABLED: &str = "❌ disabled";
