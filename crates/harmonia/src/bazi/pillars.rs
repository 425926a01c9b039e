//! Four Pillars from a local civil date and time.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use log::debug;

use crate::bazi::calendar::{sexagenary_year, solar_month_index};
use crate::bazi::cycles::{FiveElement, HeavenlyStem};
use crate::bazi::ten_gods::{analyze, ten_god};
use crate::bazi::types::{BaziChart, FiveElementTally, Pillar, PillarPosition, TenGodEntry};
use crate::tally::largest_remainder_percentages;

/// `num_days_from_ce` of 1900-01-01, a Jia-Xu day
const DAY_EPOCH_FROM_CE: i64 = 693_596;
/// Branch of the epoch day (Xu)
const DAY_EPOCH_BRANCH: i64 = 10;
/// 1984 (Jia-Zi) minus 4 is a multiple of 60
const YEAR_CYCLE_OFFSET: i64 = 4;

/// Whole days from 1900-01-01 to `date` (negative before the epoch)
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - DAY_EPOCH_FROM_CE
}

pub fn year_pillar(date: NaiveDate) -> Pillar {
    let index = sexagenary_year(date) as i64 - YEAR_CYCLE_OFFSET;
    Pillar::new(index, index)
}

/// Month stems restart from Bing for Jia and Ji years, Wu for Yi and Geng years, ...
pub fn month_pillar(date: NaiveDate, year_stem: HeavenlyStem) -> Pillar {
    let month = solar_month_index(date) as i64;
    let first_stem = (year_stem.index() as i64 % 5) * 2 + 2;
    Pillar::new(first_stem + month, month + 2)
}

pub fn day_pillar(date: NaiveDate) -> Pillar {
    let days = days_since_epoch(date);
    Pillar::new(days, days + DAY_EPOCH_BRANCH)
}

/// Two-hour branch buckets, with Zi running 23:00-00:59
pub fn hour_branch_index(hour: u32) -> i64 {
    match hour {
        23 | 0 => 0,
        h => ((h + 1) / 2) as i64,
    }
}

/// Hour stems restart from Jia on Jia and Ji days, Bing on Yi and Geng days, ...
pub fn hour_pillar(hour: u32, day_stem: HeavenlyStem) -> Pillar {
    let branch = hour_branch_index(hour);
    let first_stem = (day_stem.index() as i64 % 5) * 2;
    Pillar::new(first_stem + branch, branch)
}

/// Stem and branch element of every pillar, as percentages of the eight counts
pub fn five_element_tally(pillars: &[&Pillar]) -> FiveElementTally {
    let mut counts = [0.0; 5];
    for pillar in pillars {
        counts[pillar.stem_element as usize] += 1.0;
        counts[pillar.branch_element as usize] += 1.0;
    }
    largest_remainder_percentages(counts)
        .map(FiveElementTally::from_array)
        .unwrap_or(FiveElementTally::UNIFORM)
}

/// Full Bazi chart for a local (wall-clock) birth date and time.
pub fn compute_bazi(local: NaiveDateTime) -> BaziChart {
    let date = local.date();

    let year = year_pillar(date);
    let month = month_pillar(date, year.stem);
    let day = day_pillar(date);
    let hour = hour_pillar(local.hour(), day.stem);

    let day_master = day.stem;
    let day_master_element: FiveElement = day_master.element();
    let elements = five_element_tally(&[&year, &month, &day, &hour]);

    let ten_gods = [
        (PillarPosition::Year, &year),
        (PillarPosition::Month, &month),
        (PillarPosition::Hour, &hour),
    ]
    .iter()
    .map(|(position, pillar)| TenGodEntry {
        pillar: *position,
        stem: pillar.stem,
        god: ten_god(day_master, pillar.stem),
    })
    .collect();
    let analysis = analyze(day_master_element, &elements);

    debug!(
        "Bazi for {local}: {} {} {} {}",
        year.label(),
        month.label(),
        day.label(),
        hour.label()
    );

    BaziChart {
        year,
        month,
        day,
        hour,
        day_master,
        day_master_element,
        elements,
        ten_gods,
        analysis,
    }
}
