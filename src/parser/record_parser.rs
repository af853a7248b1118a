//! Individual data row parsing
//!
//! Rows are split on runs of whitespace and the tokens are mapped onto the
//! record through the column table in [`super::schema`].

use super::schema::SCHEMA;
use crate::constants::COLUMN_COUNT;
use crate::error::{NdbcError, Result};
use crate::models::Observation;

/// Parse one data row into an observation.
///
/// `line_number` is the 1-based position of the row among the data rows and
/// is only used for error reporting. Tokens past the last column are ignored.
pub fn parse_observation_line(line: &str, line_number: usize) -> Result<Observation> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() < COLUMN_COUNT {
        return Err(NdbcError::InsufficientColumns {
            line: line_number,
            expected: COLUMN_COUNT,
            found: tokens.len(),
        });
    }

    let mut observation = Observation::default();
    for column in &SCHEMA {
        column.apply(&mut observation, tokens[column.index]);
    }

    Ok(observation)
}
