//! Output document rendering.
//!
//! Observations are wrapped in a `{"data": [...]}` envelope and written as
//! JSON, either compact or indented.

use crate::error::Result;
use crate::models::Observation;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}

/// Top-level output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationDocument {
    pub data: Vec<Observation>,
}

impl ObservationDocument {
    pub fn new(data: Vec<Observation>) -> Self {
        Self { data }
    }
}

/// Render observations as a document string
pub fn render(observations: &[Observation], format: OutputFormat) -> Result<String> {
    let document = DocumentRef { data: observations };
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(&document)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&document)?,
    };
    Ok(rendered)
}

/// Render observations and write them, newline-terminated, to `writer`
pub fn write_document<W: Write>(
    writer: &mut W,
    observations: &[Observation],
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(observations, format)?;
    writeln!(writer, "{}", rendered)?;
    writer.flush()?;
    Ok(())
}

/// Borrowing twin of [`ObservationDocument`] used for serialization
#[derive(Serialize)]
struct DocumentRef<'a> {
    data: &'a [Observation],
}
