//! Small helpers over numbers, clock strings and JSON values

use crate::error::TimerResult;
use crate::timer::{ClockTime, Timer};
use serde_json::Value;

/// The entry of `range` nearest to `value`; ties go to the smaller entry
pub fn closest_value(value: f64, range: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = range.iter().copied().filter(|item| item.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let mut closest: Option<f64> = None;
    for item in sorted {
        match closest {
            Some(current) if (value - current).abs() <= (item - value).abs() => {}
            _ => closest = Some(item),
        }
    }
    closest
}

/// True when the text starts with a minus sign
pub fn is_negative(value: &str) -> bool {
    value.starts_with('-')
}

/// `None` for a zero clock time, the hours-based clock time otherwise
pub fn zero_time_to_none(time: &str) -> TimerResult<Option<ClockTime>> {
    let timer = Timer::as_clock_time(time)?.drop_days();
    if timer.is_empty() {
        return Ok(None);
    }
    Ok(timer.into_value().as_clock().cloned())
}

/// Remove every leaf equal to `needle`, at any depth
///
/// Matching array elements and object members are removed; nested arrays and
/// objects are searched but never removed themselves.
pub fn recursive_remove(value: &mut Value, needle: &Value) {
    match value {
        Value::Array(items) => {
            items.retain(|item| is_container(item) || item != needle);
            items.iter_mut().for_each(|item| recursive_remove(item, needle));
        }
        Value::Object(members) => {
            members.retain(|_, member| is_container(member) || member != needle);
            members.values_mut().for_each(|member| recursive_remove(member, needle));
        }
        _ => {}
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}
