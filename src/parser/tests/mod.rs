//! Test utilities for the feed parser
//!
//! Shared feed fixtures used across the parser test modules.


/// Column-name header line as published by NDBC
pub const HEADER_NAMES: &str =
    "#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE";

/// Units header line as published by NDBC
pub const HEADER_UNITS: &str =
    "#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft";

/// Example row with a mix of present and missing values
pub const SAMPLE_ROW: &str =
    "2021 05 01 12 00 180 12.3 15.0 MM 8.1 6.2 999 1013.1 18.5 17.0 14.2 MM MM MM";

/// Build a complete feed body from data rows, newline-terminated like the provider's files
pub fn create_feed(rows: &[&str]) -> String {
    let mut feed = format!("{}\n{}\n", HEADER_NAMES, HEADER_UNITS);
    for row in rows {
        feed.push_str(row);
        feed.push('\n');
    }
    feed
}

/// Realistic five-day feed excerpt, newest row first
pub fn create_five_day_feed() -> String {
    create_feed(&[
        "2024 03 14 18 50 210  7.0  9.0   1.2     6   4.9 197 1015.6  10.1   8.4   6.3   MM -0.8    MM",
        "2024 03 14 18 40 200  6.0  8.0    MM    MM    MM  MM 1015.8  10.2   8.4   6.2   MM   MM    MM",
        "2024 03 14 18 30 210  7.0  9.0    MM    MM    MM  MM 1015.9  10.2   8.4   6.4   MM   MM    MM",
        "2024 03 14 18 20 200  6.0  8.0   1.3     7   5.0 189 1016.0  10.1   8.4   6.3   MM   MM    MM",
    ])
}
