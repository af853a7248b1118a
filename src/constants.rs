//! Application constants for the NDBC buoy fetcher
//!
//! Feed layout facts, URL patterns and CLI defaults used throughout the crate.

// =============================================================================
// Feed Layout
// =============================================================================

/// Number of leading lines dropped from every feed before data rows begin.
///
/// NDBC text feeds start with a column-name line (`#YY  MM DD hh mm WDIR ...`)
/// and a units line (`#yr  mo dy hr mn degT ...`). The count is a fixed
/// assumption about the provider's format, not something detected from the text.
pub const HEADER_LINE_COUNT: usize = 2;

/// Number of whitespace-separated columns in a standard meteorological data row
pub const COLUMN_COUNT: usize = 19;

/// Placeholder the provider writes for a missing measurement.
///
/// Not consulted by the parser: any token that fails numeric parsing is absent.
pub const PROVIDER_MISSING_MARKER: &str = "MM";

// =============================================================================
// Provider URLs
// =============================================================================

/// Default NDBC web root
pub const DEFAULT_BASE_URL: &str = "https://www.ndbc.noaa.gov";

/// Path of the five-day standard meteorological feed, relative to the base URL
pub const FIVE_DAY_PATH: &str = "data/5day2";

/// Path of the 45-day realtime standard meteorological feed, relative to the base URL
pub const REALTIME_PATH: &str = "data/realtime2";

// =============================================================================
// Defaults
// =============================================================================

/// Station fetched when none is given on the command line
pub const DEFAULT_STATION_ID: &str = "44030";

/// Records returned when no bound is given on the command line
pub const DEFAULT_MAX_RECORDS: usize = 1;

/// HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest station identifier accepted
pub const MAX_STATION_ID_LEN: usize = 8;

// =============================================================================
// Environment Variables
// =============================================================================

pub mod env_vars {
    pub const BASE_URL: &str = "NDBC_BASE_URL";
    pub const TIMEOUT_SECS: &str = "NDBC_TIMEOUT_SECS";
    pub const USER_AGENT: &str = "NDBC_USER_AGENT";
}

/// Default user agent sent with every request
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
