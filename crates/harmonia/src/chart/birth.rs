use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::ephemeris::GeoLocation;
use crate::error::ChartError;
use crate::time::Instant;

/// Birth moment as a caller supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    /// Wall-clock date and time at the birthplace
    pub local: NaiveDateTime,
    /// Minutes east of UTC
    pub utc_offset_minutes: i32,
    /// `false` when only the date is known; both charts then use local noon
    pub time_known: bool,
    pub location: Option<GeoLocation>,
}

impl BirthData {
    pub fn new(local: NaiveDateTime, utc_offset_minutes: i32) -> Self {
        Self {
            local,
            utc_offset_minutes,
            time_known: true,
            location: None,
        }
    }

    pub fn at(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_unknown_time(mut self) -> Self {
        self.time_known = false;
        self
    }

    /// Local datetime the charts are cast for.
    pub fn effective_local(&self) -> NaiveDateTime {
        if self.time_known {
            self.local
        } else {
            self.local.date().and_time(NaiveTime::MIN) + chrono::Duration::hours(12)
        }
    }

    pub fn instant(&self) -> Result<Instant, ChartError> {
        Instant::from_local(self.effective_local(), self.utc_offset_minutes)
    }
}
