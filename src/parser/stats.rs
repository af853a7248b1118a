//! Parsing statistics and result structures
//!
//! The builder reports how much of the feed it looked at and how sparse the
//! resulting records are, for logging and for callers that want to surface it.

use crate::models::Observation;
use serde::{Deserialize, Serialize};

/// Parsed observations with their statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Records in feed order, bounded by the caller's maximum
    pub observations: Vec<Observation>,

    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows remaining after the header was dropped
    pub lines_available: usize,

    /// Rows actually parsed into records
    pub records_parsed: usize,

    /// Total absent fields across all parsed records
    pub absent_fields: usize,
}

impl ParseStats {
    /// Whether the bound cut the feed short
    pub fn was_truncated(&self) -> bool {
        self.records_parsed < self.lines_available
    }

    /// Share of parsed fields that were present, as a percentage
    pub fn completeness(&self) -> f64 {
        let total_fields = self.records_parsed * crate::constants::COLUMN_COUNT;
        if total_fields == 0 {
            0.0
        } else {
            ((total_fields - self.absent_fields) as f64 / total_fields as f64) * 100.0
        }
    }
}
