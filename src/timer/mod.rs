//! Unit-tagged time values
//!
//! A [`Timer`] owns a [`TimeValue`] together with the number of minutes one
//! abstract unit stands for. Every operation consumes the timer and hands back a
//! new one, so calls chain the same way a fluent builder does:
//!
//! ```
//! use tempora::timer::Timer;
//!
//! let total = Timer::as_clock_time("1:02:03:04")?
//!     .add(Timer::as_hours(2.0).to_clock_time().into_operand())
//!     .drop_days();
//! assert_eq!(total.to_display_string(), "28:03:04");
//! # Ok::<(), tempora::error::TimerError>(())
//! ```

pub mod clock;
pub mod unit;

pub use clock::ClockTime;
pub use unit::TimeUnit;

use crate::config::TimerConfig;
use crate::constants::{DEFAULT_MINUTES_PER_UNIT, DEFAULT_ZERO_PAD};
use crate::error::{TimerError, TimerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A magnitude tagged with its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum TimeValue {
    Days(f64),
    Hours(f64),
    Minutes(f64),
    Seconds(f64),
    Clock(ClockTime),
    Units(f64),
}

impl TimeValue {
    pub fn unit(&self) -> TimeUnit {
        match self {
            TimeValue::Days(_) => TimeUnit::Day,
            TimeValue::Hours(_) => TimeUnit::Hour,
            TimeValue::Minutes(_) => TimeUnit::Minute,
            TimeValue::Seconds(_) => TimeUnit::Second,
            TimeValue::Clock(_) => TimeUnit::Clock,
            TimeValue::Units(_) => TimeUnit::Unit,
        }
    }

    /// Numeric magnitude, `None` for clock values
    pub fn magnitude(&self) -> Option<f64> {
        match self {
            TimeValue::Days(v)
            | TimeValue::Hours(v)
            | TimeValue::Minutes(v)
            | TimeValue::Seconds(v)
            | TimeValue::Units(v) => Some(*v),
            TimeValue::Clock(_) => None,
        }
    }

    pub fn as_clock(&self) -> Option<&ClockTime> {
        match self {
            TimeValue::Clock(clock) => Some(clock),
            _ => None,
        }
    }

    /// Magnitude in the value's working unit (seconds for clock values)
    fn scalar(&self) -> f64 {
        match self {
            TimeValue::Clock(clock) => clock.total_seconds() as f64,
            other => other.magnitude().unwrap_or(0.0),
        }
    }

    /// Build a value of `unit` from a magnitude in that unit's working scale
    fn from_scalar(unit: TimeUnit, scalar: f64) -> Self {
        match unit {
            TimeUnit::Day => TimeValue::Days(scalar),
            TimeUnit::Hour => TimeValue::Hours(scalar),
            TimeUnit::Minute => TimeValue::Minutes(scalar),
            TimeUnit::Second => TimeValue::Seconds(scalar),
            TimeUnit::Clock => TimeValue::Clock(ClockTime::from_seconds(scalar)),
            TimeUnit::Unit => TimeValue::Units(scalar),
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeValue::Clock(clock) => write!(f, "{}", clock),
            other => write!(f, "{}", other.magnitude().unwrap_or(0.0)),
        }
    }
}

/// Right-hand side of arithmetic and comparisons
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A plain number, read in the timer's working unit
    Number(f64),
    /// A clock time, converted into the timer's working unit
    Clock(ClockTime),
}

impl Operand {
    /// Parse a clock time operand
    pub fn clock(input: &str) -> TimerResult<Self> {
        ClockTime::parse(input).map(Operand::Clock)
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Operand::Number(n) => *n < 0.0,
            Operand::Clock(clock) => clock.is_negative(),
        }
    }
}

impl FromStr for Operand {
    type Err = TimerError;

    /// Plain numbers become [`Operand::Number`], anything else must be a clock time
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(number) => Ok(Operand::Number(number)),
            Err(_) => Operand::clock(s),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl From<ClockTime> for Operand {
    fn from(value: ClockTime) -> Self {
        Operand::Clock(value)
    }
}

impl From<&ClockTime> for Operand {
    fn from(value: &ClockTime) -> Self {
        Operand::Clock(value.clone())
    }
}

/// An owned time value with its abstract-unit scale
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    value: TimeValue,
    minutes_per_unit: f64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::with_value(TimeValue::Units(0.0))
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl Timer {
    // Initializers

    pub fn with_value(value: TimeValue) -> Self {
        Self {
            value,
            minutes_per_unit: DEFAULT_MINUTES_PER_UNIT,
        }
    }

    pub fn as_days(days: f64) -> Self {
        Self::with_value(TimeValue::Days(days))
    }

    pub fn as_hours(hours: f64) -> Self {
        Self::with_value(TimeValue::Hours(hours))
    }

    pub fn as_minutes(minutes: f64) -> Self {
        Self::with_value(TimeValue::Minutes(minutes))
    }

    pub fn as_seconds(seconds: f64) -> Self {
        Self::with_value(TimeValue::Seconds(seconds))
    }

    /// Start from a clock time string such as `1:15:00:00` or `-00:30:00`
    pub fn as_clock_time(time: &str) -> TimerResult<Self> {
        ClockTime::parse(time).map(|clock| Self::with_value(TimeValue::Clock(clock)))
    }

    pub fn as_abstract_unit(units: f64) -> Self {
        Self::with_value(TimeValue::Units(units))
    }

    /// Abstract units whose length is looked up by name in the timer config
    pub fn with_named_unit(units: f64, name: &str, config: &TimerConfig) -> TimerResult<Self> {
        Self::as_abstract_unit(units).set_minutes_per_unit(config.scale_for(name)?)
    }

    /// Set how many minutes one abstract unit stands for
    pub fn set_minutes_per_unit(mut self, minutes_per_unit: f64) -> TimerResult<Self> {
        self.minutes_per_unit = validate_scale(minutes_per_unit)?;
        Ok(self)
    }

    // Queries

    pub fn get(&self) -> &TimeValue {
        &self.value
    }

    pub fn into_value(self) -> TimeValue {
        self.value
    }

    /// The current value as an arithmetic operand
    pub fn into_operand(self) -> Operand {
        match self.value {
            TimeValue::Clock(clock) => Operand::Clock(clock),
            other => Operand::Number(other.scalar()),
        }
    }

    pub fn unit(&self) -> TimeUnit {
        self.value.unit()
    }

    pub fn minutes_per_unit(&self) -> f64 {
        self.minutes_per_unit
    }

    pub fn to_display_string(&self) -> String {
        self.value.to_string()
    }

    // Conversions

    /// Re-express the value in `target`
    pub fn convert(self, target: TimeUnit) -> Self {
        let scale = self.minutes_per_unit;
        self.convert_with_scale(target, scale)
    }

    pub fn to_days(self) -> Self {
        self.convert(TimeUnit::Day)
    }

    pub fn to_hours(self) -> Self {
        self.convert(TimeUnit::Hour)
    }

    pub fn to_minutes(self) -> Self {
        self.convert(TimeUnit::Minute)
    }

    pub fn to_seconds(self) -> Self {
        self.convert(TimeUnit::Second)
    }

    pub fn to_clock_time(self) -> Self {
        self.convert(TimeUnit::Clock)
    }

    /// Convert to abstract units, optionally with a one-off scale
    ///
    /// The override only applies to this conversion; the stored scale is kept.
    pub fn to_abstract_unit(self, minutes_per_unit: Option<f64>) -> TimerResult<Self> {
        let scale = match minutes_per_unit {
            Some(scale) => validate_scale(scale)?,
            None => self.minutes_per_unit,
        };
        Ok(self.convert_with_scale(TimeUnit::Unit, scale))
    }

    fn convert_with_scale(self, target: TimeUnit, scale: f64) -> Self {
        let source = self.value.unit();
        if source == target {
            return self;
        }

        let scalar = source.rescale(self.value.scalar(), target, scale);
        Self {
            value: TimeValue::from_scalar(target, scalar),
            minutes_per_unit: self.minutes_per_unit,
        }
    }

    // Arithmetic

    pub fn add(self, value: impl Into<Operand>) -> Self {
        self.combine(value.into(), |lhs, rhs| lhs + rhs)
    }

    /// Add every value in turn
    pub fn sum<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        values.into_iter().fold(self, |timer, value| timer.add(value))
    }

    /// Subtract `value`; with `clamp_negative_to_zero` a negative result becomes zero
    pub fn subtract(self, value: impl Into<Operand>, clamp_negative_to_zero: bool) -> Self {
        self.combine(value.into(), |lhs, rhs| {
            let result = lhs - rhs;
            if clamp_negative_to_zero && result < 0.0 {
                0.0
            } else {
                result
            }
        })
    }

    pub fn multiply(self, value: impl Into<Operand>) -> Self {
        self.combine(value.into(), |lhs, rhs| lhs * rhs)
    }

    pub fn divide(self, value: impl Into<Operand>) -> TimerResult<Self> {
        let operand = value.into();
        if self.operand_scalar(&operand) == 0.0 {
            return Err(TimerError::DivisionByZero);
        }
        Ok(self.combine(operand, |lhs, rhs| lhs / rhs))
    }

    fn combine(self, operand: Operand, op: impl Fn(f64, f64) -> f64) -> Self {
        let rhs = self.operand_scalar(&operand);
        let result = op(self.value.scalar(), rhs);
        Self {
            value: TimeValue::from_scalar(self.value.unit(), result),
            minutes_per_unit: self.minutes_per_unit,
        }
    }

    /// The operand expressed in this timer's working unit
    fn operand_scalar(&self, operand: &Operand) -> f64 {
        match operand {
            Operand::Number(n) => *n,
            Operand::Clock(clock) => {
                TimeUnit::Second.rescale(clock.total_seconds() as f64, self.unit(), self.minutes_per_unit)
            }
        }
    }

    // Transforms

    /// Fold the day part of a clock time into its hours
    pub fn drop_days(self) -> Self {
        self.map_clock(|clock| clock.drop_days())
    }

    /// Remove the seconds part of a clock time
    pub fn drop_seconds(self) -> Self {
        self.map_clock(|clock| clock.drop_seconds())
    }

    /// Strip the sign; numeric values become their absolute value
    pub fn drop_leading_sign(self) -> Self {
        match self.value {
            TimeValue::Clock(_) => self.map_clock(|clock| clock.drop_sign()),
            _ => self.map_numeric(f64::abs),
        }
    }

    pub fn invert_sign(self) -> Self {
        match self.value {
            TimeValue::Clock(_) => self.map_clock(|clock| clock.invert_sign()),
            _ => self.map_numeric(|v| -v),
        }
    }

    /// Left-pad the leading clock part with zeros
    pub fn zero_pad(self, length: usize) -> Self {
        self.map_clock(|clock| clock.zero_pad(length))
    }

    pub fn zero_pad_default(self) -> Self {
        self.zero_pad(DEFAULT_ZERO_PAD)
    }

    fn map_clock(self, f: impl FnOnce(&ClockTime) -> ClockTime) -> Self {
        if let TimeValue::Clock(clock) = &self.value {
            let value = TimeValue::Clock(f(clock));
            return Self { value, ..self };
        }
        self
    }

    fn map_numeric(self, f: impl FnOnce(f64) -> f64) -> Self {
        let unit = self.value.unit();
        match self.value.magnitude() {
            Some(v) => Self {
                value: TimeValue::from_scalar(unit, f(v)),
                minutes_per_unit: self.minutes_per_unit,
            },
            None => self,
        }
    }

    // Comparisons

    pub fn is_greater_than(&self, value: impl Into<Operand>, or_equal: bool) -> bool {
        let lhs = self.value.scalar();
        let rhs = self.operand_scalar(&value.into());
        if or_equal {
            lhs >= rhs
        } else {
            lhs > rhs
        }
    }

    pub fn is_less_than(&self, value: impl Into<Operand>, or_equal: bool) -> bool {
        let lhs = self.value.scalar();
        let rhs = self.operand_scalar(&value.into());
        if or_equal {
            lhs <= rhs
        } else {
            lhs < rhs
        }
    }

    pub fn is_negative(&self) -> bool {
        match &self.value {
            TimeValue::Clock(clock) => clock.is_negative(),
            other => other.scalar() < 0.0,
        }
    }

    /// True when the magnitude is zero
    pub fn is_empty(&self) -> bool {
        self.value.scalar() == 0.0
    }
}

fn validate_scale(minutes_per_unit: f64) -> TimerResult<f64> {
    if minutes_per_unit.is_finite() && minutes_per_unit > 0.0 {
        Ok(minutes_per_unit)
    } else {
        Err(TimerError::InvalidScale(minutes_per_unit))
    }
}
