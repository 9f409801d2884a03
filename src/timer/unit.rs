//! Unit tags and the scale table shared by every conversion.

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::TimerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The unit a [`TimeValue`](super::TimeValue) is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
    /// Colon-delimited `[days:]hours:minutes:seconds` string
    Clock,
    /// Abstract unit, scaled by minutes per unit
    Unit,
}

impl TimeUnit {
    /// Seconds represented by one of this unit.
    ///
    /// Clock values are counted in seconds, so their factor is 1.
    pub fn seconds_per(self, minutes_per_unit: f64) -> f64 {
        match self {
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Hour => SECONDS_PER_HOUR,
            TimeUnit::Minute => SECONDS_PER_MINUTE,
            TimeUnit::Second | TimeUnit::Clock => 1.0,
            TimeUnit::Unit => minutes_per_unit * SECONDS_PER_MINUTE,
        }
    }

    /// Rescale a magnitude from this unit into `target`
    pub fn rescale(self, magnitude: f64, target: TimeUnit, minutes_per_unit: f64) -> f64 {
        if self == target {
            return magnitude;
        }
        magnitude * self.seconds_per(minutes_per_unit) / target.seconds_per(minutes_per_unit)
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Day => "days",
            TimeUnit::Hour => "hours",
            TimeUnit::Minute => "minutes",
            TimeUnit::Second => "seconds",
            TimeUnit::Clock => "clock",
            TimeUnit::Unit => "units",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "days" => Ok(TimeUnit::Day),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            "m" | "minute" | "minutes" => Ok(TimeUnit::Minute),
            "s" | "second" | "seconds" => Ok(TimeUnit::Second),
            "t" | "time" | "clock" => Ok(TimeUnit::Clock),
            "u" | "unit" | "units" => Ok(TimeUnit::Unit),
            other => Err(TimerError::UnsupportedConversion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_factors() {
        assert_eq!(TimeUnit::Day.rescale(1.0, TimeUnit::Hour, 1.0), 24.0);
        assert_eq!(TimeUnit::Day.rescale(1.0, TimeUnit::Minute, 1.0), 1440.0);
        assert_eq!(TimeUnit::Day.rescale(1.0, TimeUnit::Second, 1.0), 86400.0);
        assert_eq!(TimeUnit::Hour.rescale(1.0, TimeUnit::Minute, 1.0), 60.0);
        assert_eq!(TimeUnit::Hour.rescale(1.0, TimeUnit::Second, 1.0), 3600.0);
        assert_eq!(TimeUnit::Minute.rescale(1.0, TimeUnit::Second, 1.0), 60.0);
        assert_eq!(TimeUnit::Second.rescale(7200.0, TimeUnit::Hour, 1.0), 2.0);
    }

    #[test]
    fn test_abstract_unit_scale() {
        assert_eq!(TimeUnit::Unit.rescale(2.0, TimeUnit::Minute, 50.0), 100.0);
        assert_eq!(TimeUnit::Minute.rescale(100.0, TimeUnit::Unit, 50.0), 2.0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Hours".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert_eq!("t".parse::<TimeUnit>().unwrap(), TimeUnit::Clock);
        assert_eq!(
            "fortnight".parse::<TimeUnit>(),
            Err(TimerError::UnsupportedConversion("fortnight".to_string()))
        );
    }
}
