//! Brazilian Portuguese weekday names
//!
//! Each weekday has three spellings: a three-letter key (`seg`), a short name
//! (`segunda`) and a long name (`segunda-feira`). For Saturday and Sunday the
//! short and long names are the same.

use chrono::{Datelike, NaiveDate, Weekday};

const WEEK: [(Weekday, &str, &str, &str); 7] = [
    (Weekday::Mon, "seg", "segunda", "segunda-feira"),
    (Weekday::Tue, "ter", "terça", "terça-feira"),
    (Weekday::Wed, "qua", "quarta", "quarta-feira"),
    (Weekday::Thu, "qui", "quinta", "quinta-feira"),
    (Weekday::Fri, "sex", "sexta", "sexta-feira"),
    (Weekday::Sat, "sab", "sábado", "sábado"),
    (Weekday::Sun, "dom", "domingo", "domingo"),
];

const ENGLISH: [(&str, &str); 7] = [
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("sun", "sunday"),
];

fn entry(weekday: Weekday) -> (Weekday, &'static str, &'static str, &'static str) {
    WEEK[weekday.num_days_from_monday() as usize]
}

pub fn key(weekday: Weekday) -> &'static str {
    entry(weekday).1
}

pub fn short_name(weekday: Weekday) -> &'static str {
    entry(weekday).2
}

pub fn long_name(weekday: Weekday) -> &'static str {
    entry(weekday).3
}

/// All weekdays as `(key, long name)` pairs, Monday first
pub fn day_names() -> Vec<(&'static str, &'static str)> {
    WEEK.iter().map(|(_, key, _, long)| (*key, *long)).collect()
}

/// Lowercase and strip the accents used in weekday names
fn fold(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Recognise a weekday from a Portuguese or English name
///
/// Portuguese names are matched on the first three letters of the part before
/// any `-`, so `terca`, `terça-feira` and `quart` all resolve.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    let folded = fold(input);

    if let Some(index) = ENGLISH
        .iter()
        .position(|(abbr, full)| folded == *abbr || folded == *full)
    {
        return Some(WEEK[index].0);
    }

    let stem = folded.split('-').next().unwrap_or_default();
    let prefix: String = stem.chars().take(3).collect();
    WEEK.iter()
        .find(|(_, key, ..)| prefix == *key)
        .map(|(weekday, ..)| *weekday)
}

/// Translate a weekday spelling into another one
///
/// | input                 | result          | `abbreviated` |
/// |-----------------------|-----------------|---------------|
/// | `seg`                 | `segunda-feira` | `segunda`     |
/// | `segunda`             | `segunda-feira` | `seg`         |
/// | `segunda-feira`       | `segunda`       | `seg`         |
/// | `Mon` / `Monday`      | `segunda-feira` | `seg`         |
pub fn day(input: &str, abbreviated: bool) -> Option<&'static str> {
    let weekday = parse_weekday(input)?;
    let folded = fold(input);
    let (_, key, short, long) = entry(weekday);

    let is_key = folded == key;
    let is_long = folded.contains('-');

    Some(match (is_key, is_long, abbreviated) {
        (true, _, false) => long,
        (true, _, true) => short,
        (false, true, false) => short,
        (false, _, true) => key,
        (false, false, false) => long,
    })
}

/// Three-letter key of the weekday a date falls on
pub fn day_from_date(date: NaiveDate) -> &'static str {
    key(date.weekday())
}
