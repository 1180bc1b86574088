// Header-based CSV parsing for licitação exports.
use crate::model::{ParserError, RawRow};
use tracing::warn;

pub trait Parser {
    fn parse(&self, csv_text: &str) -> Result<ParseOutcome, ParserError>;
}

/// Result of one parse pass. Per-row anomalies never abort the pass; they
/// are counted here so the caller can report them.
#[derive(Debug, Default, PartialEq)]
pub struct ParseOutcome {
    /// Rows that survived the required-ID filter, in source order.
    pub rows: Vec<RawRow>,
    /// Data lines the CSV reader could not deserialize.
    pub malformed_rows: usize,
    /// Rows dropped for having an empty or missing `bidding_id`.
    pub filtered_rows: usize,
}

pub struct LicitacaoCsvParser;

impl LicitacaoCsvParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LicitacaoCsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for LicitacaoCsvParser {
    /// Parses CSV text with a header row into raw rows. Blank lines are
    /// skipped by the reader. The sole filtering rule is the required-ID
    /// check; it applies identically to the fetched and the user-imported
    /// path, both of which go through here.
    fn parse(&self, csv_text: &str) -> Result<ParseOutcome, ParserError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());

        // Only a missing/unreadable header is fatal.
        reader
            .headers()
            .map_err(|e| ParserError::Header(e.to_string()))?;

        let mut outcome = ParseOutcome::default();
        for (i, result) in reader.deserialize::<RawRow>().enumerate() {
            match result {
                Ok(row) if row.has_bidding_id() => outcome.rows.push(row),
                Ok(_) => outcome.filtered_rows += 1,
                Err(e) => {
                    warn!("Skipping malformed CSV row {}: {}", i + 2, e);
                    outcome.malformed_rows += 1;
                }
            }
        }
        Ok(outcome)
    }
}
