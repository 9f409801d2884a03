//! Colon-delimited clock time values
//!
//! A clock time is a signed duration string of the form
//! `[-][days:]hours:minutes:seconds`. Parts are right-aligned: the last part is
//! always seconds and missing high-order parts are simply absent.

use crate::constants::{CLOCK_PART_WEIGHTS, CLOCK_ZERO};
use crate::error::{TimerError, TimerResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated clock time string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(String);

impl ClockTime {
    /// Parse and validate a clock time string
    pub fn parse(input: &str) -> TimerResult<Self> {
        let trimmed = input.trim();
        let (_, digits) = split_sign(trimmed);

        if digits.is_empty() {
            return Err(TimerError::invalid_format(input, "empty value"));
        }

        let parts: Vec<&str> = digits.split(':').collect();
        if parts.len() > CLOCK_PART_WEIGHTS.len() {
            return Err(TimerError::invalid_format(
                input,
                format!("expected at most {} parts, got {}", CLOCK_PART_WEIGHTS.len(), parts.len()),
            ));
        }

        let mut total: i64 = 0;
        for (index, part) in parts.iter().rev().enumerate() {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TimerError::invalid_format(input, format!("'{}' is not a number", part)));
            }
            total = part
                .parse::<i64>()
                .ok()
                .and_then(|value| value.checked_mul(CLOCK_PART_WEIGHTS[index]))
                .and_then(|seconds| total.checked_add(seconds))
                .ok_or_else(|| TimerError::invalid_format(input, "value out of range"))?;
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Format a number of seconds as `D:HH:MM:SS`
    ///
    /// The digits use the absolute value truncated to whole seconds, and `D` is a
    /// plain day count. A negative input gets a leading `-`.
    pub fn from_seconds(seconds: f64) -> Self {
        let whole = seconds.abs().trunc() as i64;
        let days = whole / 86_400;
        let hours = whole % 86_400 / 3_600;
        let minutes = whole % 3_600 / 60;
        let secs = whole % 60;

        let sign = if seconds < 0.0 && whole > 0 { "-" } else { "" };
        Self(format!("{}{}:{:02}:{:02}:{:02}", sign, days, hours, minutes, secs))
    }

    pub fn zero() -> Self {
        Self(CLOCK_ZERO.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Number of colon-separated parts
    pub fn part_count(&self) -> usize {
        self.parts().len()
    }

    /// Signed total of the parts, in seconds
    pub fn total_seconds(&self) -> i64 {
        let total = self
            .parts()
            .iter()
            .rev()
            .zip(CLOCK_PART_WEIGHTS)
            .fold(0i64, |acc, (part, weight)| {
                let value = part.parse::<i64>().unwrap_or(0);
                acc.saturating_add(value.saturating_mul(weight))
            });

        if self.is_negative() {
            -total
        } else {
            total
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Toggle the leading `-`
    pub fn invert_sign(&self) -> Self {
        let (sign, digits) = split_sign(&self.0);
        match sign {
            Some('-') => Self(digits.to_string()),
            _ => Self(format!("-{}", digits)),
        }
    }

    /// Remove a leading sign character, if any
    pub fn drop_sign(&self) -> Self {
        Self(split_sign(&self.0).1.to_string())
    }

    /// Fold the day part into the hours and remove it
    pub fn drop_days(&self) -> Self {
        let parts = self.parts();
        if parts.len() < CLOCK_PART_WEIGHTS.len() {
            return self.clone();
        }

        let days = parts[0].parse::<i64>().unwrap_or(0);
        let hours = parts[1].parse::<i64>().unwrap_or(0);
        let folded = days.saturating_mul(24).saturating_add(hours);
        Self(format!("{}{:02}:{}", self.sign_prefix(), folded, parts[2..].join(":")))
    }

    /// Remove the trailing seconds part when at least three parts are present
    pub fn drop_seconds(&self) -> Self {
        let parts = self.parts();
        if parts.len() < 3 {
            return self.clone();
        }

        Self(format!("{}{}", self.sign_prefix(), parts[..parts.len() - 1].join(":")))
    }

    /// Left-pad the first part with zeros up to `length` digits
    pub fn zero_pad(&self, length: usize) -> Self {
        let parts = self.parts();
        let padded = format!("{:0>width$}", parts[0], width = length);
        let joined = std::iter::once(padded.as_str())
            .chain(parts[1..].iter().copied())
            .collect::<Vec<_>>()
            .join(":");

        Self(format!("{}{}", self.sign_prefix(), joined))
    }

    fn sign_prefix(&self) -> &str {
        match split_sign(&self.0).0 {
            Some('-') => "-",
            Some('+') => "+",
            _ => "",
        }
    }

    fn parts(&self) -> Vec<&str> {
        split_sign(&self.0).1.split(':').collect()
    }
}

fn split_sign(value: &str) -> (Option<char>, &str) {
    match value.chars().next() {
        Some(sign @ ('-' | '+')) => (Some(sign), &value[1..]),
        _ => (None, value),
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClockTime {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.0
    }
}
