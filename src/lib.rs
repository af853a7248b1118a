//! NDBC Buoy Library
//!
//! A Rust library for reading NOAA National Data Buoy Center (NDBC)
//! standard meteorological feeds and turning them into typed records.
//!
//! This library provides tools for:
//! - Parsing the whitespace-delimited feed text into [`Observation`] records
//!   with per-field optionality
//! - Bounding a feed to its most recent rows
//! - Fetching the five-day and 45-day feeds over HTTP
//! - Rendering observations as a JSON document
//!
//! Missing measurements are ordinary: they become `None` fields. Only a feed
//! whose shape is wrong (no header, short rows) produces an error.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod models;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use config::FetchConfig;
pub use error::{NdbcError, Result};
pub use fetch::NdbcClient;
pub use models::{Feed, Observation, StationId};
pub use output::{ObservationDocument, OutputFormat};
pub use parser::build_observations;
