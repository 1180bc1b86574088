// Core structs: RawRow, BiddingRecord, error enums
use serde::Deserialize;
use thiserror::Error;

/// One data line of the CSV, column-for-column, before normalization.
/// Every field is optional: a column may be missing from the header entirely,
/// and `#[serde(default)]` keeps deserialization total over partial schemas.
/// Unknown columns are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawRow {
    pub bidding_id: Option<String>,
    pub edital: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub data_abertura: Option<String>,
    pub prazo: Option<String>,
    pub valor_estimado: Option<String>,
    pub descricao: Option<String>,
    pub boletim_id: Option<String>,
    pub situacao: Option<String>,
}

impl RawRow {
    /// The required-ID rule: a row only becomes a record when `bidding_id`
    /// is present and non-blank.
    pub fn has_bidding_id(&self) -> bool {
        self.bidding_id
            .as_deref()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }
}

/// A normalized procurement record. Dates and monetary values stay opaque
/// strings; the only hard guarantee is a non-empty `bidding_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct BiddingRecord {
    pub bidding_id: String,
    pub edital: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub opening_date: Option<String>,
    pub deadline: Option<String>,
    pub estimated_value: Option<String>,
    pub description: String,
    pub bulletin_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status code {0}")]
    BadStatus(u16),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("CSV header error: {0}")]
    Header(String),
}
