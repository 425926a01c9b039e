//! Time base: civil UTC datetime to Julian Day, Julian centuries and millennia.
//!
//! The Julian Day uses the proleptic Gregorian algorithm from Meeus,
//! "Astronomical Algorithms", chapter 7. No ΔT is applied; UT is used
//! directly as the dynamical time argument of the series.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;
/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Julian Day for a proleptic Gregorian calendar date.
///
/// `day` carries the fraction of the day (e.g. 4.81 for 19:26:24 on the 4th).
pub fn julian_day_from_calendar(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian millennia since J2000.0 (the VSOP87 time argument).
pub fn julian_millennia(jd: f64) -> f64 {
    julian_centuries(jd) / 10.0
}

/// An immutable UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Interpret a wall-clock datetime at a fixed UTC offset.
    pub fn from_local(local: NaiveDateTime, utc_offset_minutes: i32) -> Result<Self, ChartError> {
        if utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ChartError::InvalidUtcOffset { minutes: utc_offset_minutes });
        }
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
            .ok_or(ChartError::InvalidUtcOffset { minutes: utc_offset_minutes })?;
        let zoned = offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| ChartError::InvalidLocalTime {
                local: local.to_string(),
                offset_minutes: utc_offset_minutes,
            })?;
        Ok(Self(zoned.with_timezone(&Utc)))
    }

    pub fn utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// Wall-clock datetime at the given offset (minutes east of UTC).
    pub fn local(&self, utc_offset_minutes: i32) -> NaiveDateTime {
        self.0.naive_utc() + chrono::Duration::minutes(utc_offset_minutes as i64)
    }

    pub fn julian_day(&self) -> f64 {
        let dt = self.0;
        let seconds = dt.hour() as f64 * 3600.0
            + dt.minute() as f64 * 60.0
            + dt.second() as f64
            + dt.nanosecond() as f64 / 1e9;
        julian_day_from_calendar(dt.year(), dt.month(), dt.day() as f64 + seconds / 86_400.0)
    }

    pub fn julian_centuries(&self) -> f64 {
        julian_centuries(self.julian_day())
    }

    pub fn julian_millennia(&self) -> f64 {
        julian_millennia(self.julian_day())
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_j2000_epoch() {
        let jd = julian_day_from_calendar(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn test_sputnik_launch() {
        // Meeus example 7.a
        let jd = julian_day_from_calendar(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn test_january_and_february_use_previous_year() {
        // Crosses the month <= 2 branch of the algorithm.
        let feb_end = julian_day_from_calendar(2001, 2, 28.0);
        let mar_start = julian_day_from_calendar(2001, 3, 1.0);
        assert!((mar_start - feb_end - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_local_applies_offset() {
        let local = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        let instant = Instant::from_local(local, 8 * 60).unwrap();
        assert!((instant.julian_day() - J2000_JD).abs() < 1e-9);
        assert_eq!(instant.local(8 * 60), local);
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        let local = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            Instant::from_local(local, 20 * 60),
            Err(ChartError::InvalidUtcOffset { minutes: 1200 })
        );
    }
}
