//! Core data structures for NDBC buoy observations.
//!
//! Defines the observation record, validated station identifiers and the
//! feeds a station can be read from.

use crate::constants::{FIVE_DAY_PATH, MAX_STATION_ID_LEN, REALTIME_PATH};
use crate::error::{NdbcError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of a standard meteorological feed.
///
/// Every field is independently optional. A field is `None` when its column
/// held a provider placeholder (`MM`) or anything else that is not a number of
/// the expected kind. Serialized keys keep the provider-facing names
/// (`Year`, `WindDirection`, `PTDY`, ...), and absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Observation {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,

    /// Degrees clockwise from true north
    pub wind_direction: Option<i32>,
    /// m/s
    pub wind_speed: Option<f64>,
    /// m/s
    pub wind_gust: Option<f64>,

    /// Significant wave height, metres
    pub wave_height: Option<f64>,
    /// Seconds
    pub wave_dominant_period: Option<f64>,
    /// Seconds
    pub wave_average_period: Option<f64>,
    /// Degrees clockwise from true north
    pub wave_mean_direction: Option<i32>,

    /// Sea level pressure, hPa
    pub pressure: Option<f64>,
    /// Degrees Celsius
    pub air_temp: Option<f64>,
    /// Degrees Celsius
    pub water_temp: Option<f64>,
    /// Degrees Celsius
    pub dew_point: Option<f64>,
    /// Nautical miles
    pub visibility: Option<f64>,
    /// Pressure tendency over three hours, hPa
    #[serde(rename = "PTDY")]
    pub pressure_tendency: Option<f64>,
    /// Feet above mean lower low water
    pub tide: Option<f64>,
}

impl Observation {
    /// Timestamp of the reading (UTC), when all five temporal fields are
    /// present and form a real date and time
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        let year = self.year?;
        let month = u32::try_from(self.month?).ok()?;
        let day = u32::try_from(self.day?).ok()?;
        let hour = u32::try_from(self.hour?).ok()?;
        let minute = u32::try_from(self.minute?).ok()?;

        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
    }

    /// Number of fields that are absent
    pub fn absent_field_count(&self) -> usize {
        let ints = [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.wind_direction,
            self.wave_mean_direction,
        ];
        let reals = [
            self.wind_speed,
            self.wind_gust,
            self.wave_height,
            self.wave_dominant_period,
            self.wave_average_period,
            self.pressure,
            self.air_temp,
            self.water_temp,
            self.dew_point,
            self.visibility,
            self.pressure_tendency,
            self.tide,
        ];

        ints.iter().filter(|v| v.is_none()).count() + reals.iter().filter(|v| v.is_none()).count()
    }
}

/// NDBC station identifier (e.g. `44030`, `PCLF1`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StationId {
    type Err = NdbcError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(NdbcError::invalid_station_id(s, "station id is empty"));
        }

        if trimmed.len() > MAX_STATION_ID_LEN {
            return Err(NdbcError::invalid_station_id(
                s,
                format!("longer than {} characters", MAX_STATION_ID_LEN),
            ));
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(NdbcError::invalid_station_id(
                s,
                "only ASCII letters and digits are allowed",
            ));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Published standard meteorological feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Feed {
    /// Last five days of observations
    #[value(name = "five-day")]
    FiveDay,
    /// Last 45 days of observations
    #[value(name = "realtime")]
    Realtime,
}

impl Feed {
    /// Full URL of this feed for a station
    pub fn url(&self, base_url: &str, station: &StationId) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            Feed::FiveDay => format!("{}/{}/{}_5day.txt", base, FIVE_DAY_PATH, station),
            Feed::Realtime => format!("{}/{}/{}.txt", base, REALTIME_PATH, station),
        }
    }
}
