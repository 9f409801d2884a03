//! Date utility functions
//!
//! Dates are accepted either in ISO form (`2016-10-10`) or in the Brazilian
//! form (`10/10/2016`).

use super::weekday;
use crate::config::DisplayConfig;
use crate::timer::Timer;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::fmt::Write;

/// ISO date format
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Day-first date format
pub const DATE_FORMAT_BR: &str = "%d/%m/%Y";

/// Parse a date in either `YYYY-MM-DD` or `DD/MM/YYYY` format
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = date_str.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT_ISO).or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_FORMAT_BR))
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT_ISO).to_string()
}

/// Check that a string looks like `dd/mm/yyyy` or `yyyy-mm-dd`
///
/// Only the shape is checked: three numeric parts with a four digit year at
/// either end.
pub fn is_date(date_str: &str) -> bool {
    let parts: Vec<&str> = if date_str.split('-').count() == 3 {
        date_str.split('-').collect()
    } else if date_str.split('/').count() == 3 {
        date_str.split('/').collect()
    } else {
        return false;
    };

    let numeric = parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
    numeric && (parts[0].len() == 4 || parts[2].len() == 4)
}

/// Swap a date between `yyyy-mm-dd` and `dd/mm/yyyy`
///
/// With `hide_year` the year is left out (`10/10` or `10-10`). Returns `None`
/// when the input is in neither format.
pub fn date_fix(date_str: &str, hide_year: bool) -> Option<String> {
    let iso: Vec<&str> = date_str.split('-').collect();
    if iso.len() == 3 && iso[0].len() == 4 {
        return Some(if hide_year {
            format!("{}/{}", iso[2], iso[1])
        } else {
            format!("{}/{}/{}", iso[2], iso[1], iso[0])
        });
    }

    let br: Vec<&str> = date_str.split('/').collect();
    if br.len() == 3 && br[2].len() == 4 {
        return Some(if hide_year {
            format!("{}-{}", br[1], br[0])
        } else {
            format!("{}-{}-{}", br[2], br[1], br[0])
        });
    }

    None
}

/// Render `yyyy-mm-dd HH:MM:SS` as `dd/mm/yyyy - HH:MM:SS`
///
/// # Arguments
/// * `datetime` - Date and time separated by a single space
/// * `separator` - Placed between the date and the time
/// * `drop_seconds` - Hide the seconds of the time part
/// * `show_day` - Prefix the weekday name (e.g. `terça-feira, 05/07/2016 - 12:00:00`)
///
/// # Returns
/// * `Option<String>` - `None` when the date or time part is malformed
pub fn date_time_format(datetime: &str, separator: &str, drop_seconds: bool, show_day: bool) -> Option<String> {
    let (date_part, time_part) = split_datetime(datetime)?;

    let date = date_fix(date_part, false)?;
    let time = render_time(time_part, drop_seconds)?;

    let prefix = if show_day {
        weekday_prefix(parse_date(date_part).ok()?)
    } else {
        String::new()
    };

    Some(format!("{}{}{}{}", prefix, date, separator, time))
}

/// Render a date with the configured `date_format`
///
/// Returns `None` when the format string is not valid strftime.
pub fn format_display_date(date: NaiveDate, display: &DisplayConfig) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(&display.date_format)).ok()?;
    Some(rendered)
}

/// Render a `date time` value using the configured display settings
///
/// The date part may be in either accepted format; it is rendered with
/// `display.date_format` and joined to the time by `display.datetime_separator`.
pub fn date_time_format_with(
    datetime: &str,
    display: &DisplayConfig,
    drop_seconds: bool,
    show_day: bool,
) -> Option<String> {
    let (date_part, time_part) = split_datetime(datetime)?;

    let day = parse_date(date_part).ok()?;
    let date = format_display_date(day, display)?;
    let time = render_time(time_part, drop_seconds)?;
    let prefix = if show_day { weekday_prefix(day) } else { String::new() };

    Some(format!("{}{}{}{}", prefix, date, display.datetime_separator, time))
}

fn split_datetime(datetime: &str) -> Option<(&str, &str)> {
    match datetime.split(' ').collect::<Vec<_>>().as_slice() {
        [date, time] => Some((*date, *time)),
        _ => None,
    }
}

fn render_time(time: &str, drop_seconds: bool) -> Option<String> {
    if drop_seconds {
        Some(Timer::as_clock_time(time).ok()?.drop_seconds().to_display_string())
    } else {
        Some(time.to_string())
    }
}

fn weekday_prefix(day: NaiveDate) -> String {
    format!("{}, ", weekday::long_name(day.weekday()))
}

/// Check whether `date` falls within `start..=end`
pub fn date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date <= end
}

/// The date `days` days after `start` (before it when negative)
pub fn find_date(start: NaiveDate, days: i64) -> Option<NaiveDate> {
    start.checked_add_signed(Duration::try_days(days)?)
}

/// Every date from `start` up to `end`
///
/// With `inclusive` the end date is part of the range.
pub fn find_date_range(start: NaiveDate, end: NaiveDate, inclusive: bool) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|day| if inclusive { *day <= end } else { *day < end })
        .collect()
}

/// Number of weekdays (Monday to Friday) in a month, minus `holidays`
///
/// # Arguments
/// * `month` - Month number, 1 to 12
/// * `year` - Defaults to the current year
/// * `holidays` - Days to subtract from the count
///
/// # Returns
/// * `Option<u32>` - `None` for an invalid month
pub fn business_days(month: u32, year: Option<i32>, holidays: u32) -> Option<u32> {
    let year = year.unwrap_or_else(|| Local::now().year());
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let count = first
        .iter_days()
        .take_while(|day| day.month() == month)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as u32;

    Some(count.saturating_sub(holidays))
}

/// The date in `range` nearest to `date`; ties go to the earliest entry
pub fn closest_date(date: NaiveDate, range: &[NaiveDate]) -> Option<NaiveDate> {
    range
        .iter()
        .copied()
        .min_by_key(|candidate| (*candidate - date).num_days().abs())
}
