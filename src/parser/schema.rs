//! Column layout of the standard meteorological feed
//!
//! The row layout is one ordered table. Each entry names the provider column,
//! its position in the row, the kind of number it holds and the record field it
//! fills, so the record parser is a single loop over [`SCHEMA`].

use super::field_parsers::{coerce_int, coerce_real};
use crate::constants::COLUMN_COUNT;
use crate::models::Observation;

/// Kind of number a column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Real,
}

/// Record field a column is written to
#[derive(Clone, Copy)]
pub enum FieldSlot {
    Integer(fn(&mut Observation) -> &mut Option<i32>),
    Real(fn(&mut Observation) -> &mut Option<f64>),
}

/// One column of the row layout
#[derive(Clone, Copy)]
pub struct ColumnSpec {
    /// Column label in the feed header (`WDIR`, `WSPD`, ...)
    pub header: &'static str,
    /// Record field name, as used in logs
    pub field: &'static str,
    /// Zero-based token position within a data row
    pub index: usize,
    pub slot: FieldSlot,
}

impl ColumnSpec {
    pub fn kind(&self) -> FieldKind {
        match self.slot {
            FieldSlot::Integer(_) => FieldKind::Integer,
            FieldSlot::Real(_) => FieldKind::Real,
        }
    }

    /// Coerce `token` and store the result in this column's field
    pub fn apply(&self, observation: &mut Observation, token: &str) {
        match self.slot {
            FieldSlot::Integer(slot) => *slot(observation) = coerce_int(token),
            FieldSlot::Real(slot) => *slot(observation) = coerce_real(token),
        }
    }
}

impl std::fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("header", &self.header)
            .field("field", &self.field)
            .field("index", &self.index)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Standard meteorological row layout, in column order
pub const SCHEMA: [ColumnSpec; COLUMN_COUNT] = [
    ColumnSpec {
        header: "YY",
        field: "year",
        index: 0,
        slot: FieldSlot::Integer(|o| &mut o.year),
    },
    ColumnSpec {
        header: "MM",
        field: "month",
        index: 1,
        slot: FieldSlot::Integer(|o| &mut o.month),
    },
    ColumnSpec {
        header: "DD",
        field: "day",
        index: 2,
        slot: FieldSlot::Integer(|o| &mut o.day),
    },
    ColumnSpec {
        header: "hh",
        field: "hour",
        index: 3,
        slot: FieldSlot::Integer(|o| &mut o.hour),
    },
    ColumnSpec {
        header: "mm",
        field: "minute",
        index: 4,
        slot: FieldSlot::Integer(|o| &mut o.minute),
    },
    ColumnSpec {
        header: "WDIR",
        field: "wind_direction",
        index: 5,
        slot: FieldSlot::Integer(|o| &mut o.wind_direction),
    },
    ColumnSpec {
        header: "WSPD",
        field: "wind_speed",
        index: 6,
        slot: FieldSlot::Real(|o| &mut o.wind_speed),
    },
    ColumnSpec {
        header: "GST",
        field: "wind_gust",
        index: 7,
        slot: FieldSlot::Real(|o| &mut o.wind_gust),
    },
    ColumnSpec {
        header: "WVHT",
        field: "wave_height",
        index: 8,
        slot: FieldSlot::Real(|o| &mut o.wave_height),
    },
    ColumnSpec {
        header: "DPD",
        field: "wave_dominant_period",
        index: 9,
        slot: FieldSlot::Real(|o| &mut o.wave_dominant_period),
    },
    ColumnSpec {
        header: "APD",
        field: "wave_average_period",
        index: 10,
        slot: FieldSlot::Real(|o| &mut o.wave_average_period),
    },
    ColumnSpec {
        header: "MWD",
        field: "wave_mean_direction",
        index: 11,
        slot: FieldSlot::Integer(|o| &mut o.wave_mean_direction),
    },
    ColumnSpec {
        header: "PRES",
        field: "pressure",
        index: 12,
        slot: FieldSlot::Real(|o| &mut o.pressure),
    },
    ColumnSpec {
        header: "ATMP",
        field: "air_temp",
        index: 13,
        slot: FieldSlot::Real(|o| &mut o.air_temp),
    },
    ColumnSpec {
        header: "WTMP",
        field: "water_temp",
        index: 14,
        slot: FieldSlot::Real(|o| &mut o.water_temp),
    },
    ColumnSpec {
        header: "DEWP",
        field: "dew_point",
        index: 15,
        slot: FieldSlot::Real(|o| &mut o.dew_point),
    },
    ColumnSpec {
        header: "VIS",
        field: "visibility",
        index: 16,
        slot: FieldSlot::Real(|o| &mut o.visibility),
    },
    ColumnSpec {
        header: "PTDY",
        field: "pressure_tendency",
        index: 17,
        slot: FieldSlot::Real(|o| &mut o.pressure_tendency),
    },
    ColumnSpec {
        header: "TIDE",
        field: "tide",
        index: 18,
        slot: FieldSlot::Real(|o| &mut o.tide),
    },
];
