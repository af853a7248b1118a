//! Feed body to observation collection
//!
//! Drops the fixed header, bounds the number of rows and parses the rest in
//! feed order. NDBC publishes newest rows first, so the first `max_records`
//! rows are the most recent ones.

use tracing::{debug, warn};

use super::record_parser::parse_observation_line;
use super::stats::{ParseResult, ParseStats};
use crate::constants::HEADER_LINE_COUNT;
use crate::error::{NdbcError, Result};
use crate::models::Observation;

/// Parse a raw feed body into at most `max_records` observations.
///
/// `max_records == 0` means unbounded. A short row within the parsed range
/// fails the whole call; nothing is returned for the rows before it.
pub fn build_observations(raw: &[u8], max_records: usize) -> Result<Vec<Observation>> {
    build_with_stats(raw, max_records).map(|result| result.observations)
}

/// Same as [`build_observations`], also returning parsing statistics
pub fn build_with_stats(raw: &[u8], max_records: usize) -> Result<ParseResult> {
    let text = String::from_utf8_lossy(raw);
    let data_lines = split_data_lines(&text)?;

    let lines_available = data_lines.len();
    let effective = effective_count(lines_available, max_records);

    if lines_available == 0 {
        warn!("Feed contains a header but no data rows");
    }

    let observations = data_lines
        .iter()
        .take(effective)
        .enumerate()
        .map(|(i, line)| parse_observation_line(line, i + 1))
        .collect::<Result<Vec<_>>>()?;

    let stats = ParseStats {
        lines_available,
        records_parsed: observations.len(),
        absent_fields: observations.iter().map(Observation::absent_field_count).sum(),
    };

    debug!(
        "Parsed {} of {} data rows ({} absent fields, {:.1}% complete)",
        stats.records_parsed,
        stats.lines_available,
        stats.absent_fields,
        stats.completeness()
    );

    Ok(ParseResult {
        observations,
        stats,
    })
}

/// Drop one trailing newline, split into lines and remove the header lines
fn split_data_lines(text: &str) -> Result<Vec<&str>> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let lines: Vec<&str> = body.split('\n').collect();

    if lines.len() < HEADER_LINE_COUNT {
        return Err(NdbcError::InsufficientHeaderLines {
            expected: HEADER_LINE_COUNT,
            found: lines.len(),
        });
    }

    Ok(lines[HEADER_LINE_COUNT..].to_vec())
}

fn effective_count(available: usize, max_records: usize) -> usize {
    if max_records > 0 {
        available.min(max_records)
    } else {
        available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_count() {
        assert_eq!(effective_count(10, 0), 10);
        assert_eq!(effective_count(10, 3), 3);
        assert_eq!(effective_count(10, 10), 10);
        assert_eq!(effective_count(10, 25), 10);
        assert_eq!(effective_count(0, 5), 0);
    }

    #[test]
    fn test_split_drops_single_trailing_newline() {
        let lines = split_data_lines("H1\nH2\nrow1\nrow2\n").unwrap();
        assert_eq!(lines, vec!["row1", "row2"]);

        // Only one newline is dropped; the blank line left behind is a data row
        let lines = split_data_lines("H1\nH2\nrow1\n\n").unwrap();
        assert_eq!(lines, vec!["row1", ""]);
    }

    #[test]
    fn test_split_header_only() {
        assert!(split_data_lines("H1\nH2").unwrap().is_empty());
        assert!(split_data_lines("H1\nH2\n").unwrap().is_empty());
    }

    #[test]
    fn test_split_insufficient_header() {
        for text in ["", "\n", "H1", "H1\n"] {
            match split_data_lines(text) {
                Err(NdbcError::InsufficientHeaderLines { expected, found }) => {
                    assert_eq!(expected, 2);
                    assert_eq!(found, 1);
                }
                other => panic!("Expected InsufficientHeaderLines for {:?}, got {:?}", text, other),
            }
        }
    }
}
