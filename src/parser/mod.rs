//! Parser for NDBC standard meteorological text feeds
//!
//! Turns the body of a feed such as `data/5day2/44030_5day.txt` into typed
//! [`Observation`](crate::models::Observation) records. The parser is
//! synchronous and holds no state between calls.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Token coercion to optional integers and reals
//! - [`schema`] - The ordered column table for a data row
//! - [`record_parser`] - Single data row parsing
//! - [`dataset`] - Header removal, bounding and row iteration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ndbc_buoy::parser::build_observations;
//!
//! let mut body = String::from("YY MM DD hh mm WDIR WSPD ...\n");
//! body.push_str("yr mo dy hr mn degT m/s ...\n");
//! body.push_str("2021 05 01 12 00 180 12.3 15.0 MM 8.1 6.2 999 1013.1 18.5 17.0 14.2 MM MM MM\n");
//!
//! let observations = build_observations(body.as_bytes(), 0)?;
//! assert_eq!(observations.len(), 1);
//! assert_eq!(observations[0].wind_direction, Some(180));
//! assert_eq!(observations[0].wave_height, None);
//! # Ok::<(), ndbc_buoy::NdbcError>(())
//! ```

pub mod dataset;
pub mod field_parsers;
pub mod record_parser;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use dataset::{build_observations, build_with_stats};
pub use field_parsers::{coerce_int, coerce_real};
pub use record_parser::parse_observation_line;
pub use schema::{ColumnSpec, FieldKind, SCHEMA};
pub use stats::{ParseResult, ParseStats};
