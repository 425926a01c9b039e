//! Calendar approximations behind the year and month pillars.
//!
//! Both are named approximations, not astronomical solutions:
//!
//! * Chinese New Year comes from a sparse table of known dates with linear
//!   interpolation of the day of year between anchors. Years outside the
//!   table reuse the nearest anchor. Interpolated dates can be off by up to
//!   several weeks.
//! * Solar months start on fixed civil dates instead of the true crossings of
//!   the Sun through multiples of 15° of longitude, so births within a day
//!   or two of a boundary may land in the neighbouring month.

use chrono::{Datelike, NaiveDate};

/// Known Chinese New Year dates as (year, month, day)
const NEW_YEAR_ANCHORS: [(i32, u32, u32); 9] = [
    (1970, 2, 6),
    (1980, 2, 16),
    (1990, 1, 27),
    (2000, 2, 5),
    (2010, 2, 14),
    (2020, 1, 25),
    (2024, 2, 10),
    (2025, 1, 29),
    (2026, 2, 17),
];

/// Chinese New Year never falls before Jan 21 or after Feb 20
const EARLIEST_NEW_YEAR_ORDINAL: u32 = 21;
const LATEST_NEW_YEAR_ORDINAL: u32 = 31 + 20;

/// First day of each solar month as (month, day), Tiger month first
pub const SOLAR_MONTH_STARTS: [(u32, u32); 12] = [
    (2, 4),   // Tiger
    (3, 6),   // Rabbit
    (4, 5),   // Dragon
    (5, 6),   // Snake
    (6, 6),   // Horse
    (7, 7),   // Goat
    (8, 8),   // Monkey
    (9, 8),   // Rooster
    (10, 8),  // Dog
    (11, 7),  // Pig
    (12, 7),  // Rat
    (1, 6),   // Ox
];

/// Index of the Rat month, which runs across the turn of the civil year
const RAT_MONTH: usize = 10;

/// Day of year for a January or February date
fn early_ordinal(month: u32, day: u32) -> u32 {
    if month == 1 {
        day
    } else {
        31 + day
    }
}

/// Day of year of the (approximate) Chinese New Year in `year`.
pub fn new_year_ordinal(year: i32) -> u32 {
    let ordinal_of = |&(_, m, d): &(i32, u32, u32)| early_ordinal(m, d) as f64;

    let first = &NEW_YEAR_ANCHORS[0];
    let last = &NEW_YEAR_ANCHORS[NEW_YEAR_ANCHORS.len() - 1];

    let estimate = if year <= first.0 {
        ordinal_of(first)
    } else if year >= last.0 {
        ordinal_of(last)
    } else {
        NEW_YEAR_ANCHORS
            .windows(2)
            .find(|pair| pair[0].0 <= year && year < pair[1].0)
            .map(|pair| {
                let (lo, hi) = (&pair[0], &pair[1]);
                let fraction = (year - lo.0) as f64 / (hi.0 - lo.0) as f64;
                ordinal_of(lo) + fraction * (ordinal_of(hi) - ordinal_of(lo))
            })
            .unwrap_or_else(|| ordinal_of(last))
    };

    (estimate.round() as u32).clamp(EARLIEST_NEW_YEAR_ORDINAL, LATEST_NEW_YEAR_ORDINAL)
}

/// Approximate Chinese New Year date, `None` outside chrono's range.
pub fn chinese_new_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_yo_opt(year, new_year_ordinal(year))
}

/// Year whose stem and branch govern `date`: the civil year, or the one
/// before when the date precedes that year's New Year.
pub fn sexagenary_year(date: NaiveDate) -> i32 {
    if date.ordinal() < new_year_ordinal(date.year()) {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Solar month index (0 = Tiger ... 10 = Rat, 11 = Ox) for a civil date.
pub fn solar_month_index(date: NaiveDate) -> usize {
    let key = (date.month(), date.day());
    SOLAR_MONTH_STARTS
        .iter()
        .enumerate()
        .filter(|(_, start)| **start <= key)
        .max_by_key(|(_, start)| **start)
        .map(|(index, _)| index)
        // Jan 1 until the Ox month starts: still in last December's Rat month
        .unwrap_or(RAT_MONTH)
}
