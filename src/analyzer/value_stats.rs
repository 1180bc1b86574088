use crate::classifier::{StatusCategory, classify};
use crate::model::BiddingRecord;
use std::collections::HashMap;

/// Trait defining the interface for a dataset analyzer.
pub trait Analyzer {
    fn calculate_stats(&self, records: &[BiddingRecord]) -> BoardStats;
}

/// Summary numbers the dashboard shows next to the card grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardStats {
    pub record_count: usize,
    /// Sum of every parseable `estimated_value`, in reais.
    pub total_estimated_value: f64,
    /// Non-empty values that failed currency parsing and contributed zero.
    pub unparsed_values: usize,
    pub status_counts: HashMap<StatusCategory, usize>,
}

pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyzerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for AnalyzerImpl {
    /// Sums estimated values and tallies status categories in input order.
    /// A malformed value adds zero and bumps `unparsed_values` instead of
    /// aborting the pass; absent/empty values are simply skipped.
    fn calculate_stats(&self, records: &[BiddingRecord]) -> BoardStats {
        let mut stats = BoardStats {
            record_count: records.len(),
            ..BoardStats::default()
        };

        for record in records {
            match record.estimated_value.as_deref() {
                None => {}
                Some(value) if value.trim().is_empty() => {}
                Some(value) => match parse_currency(value) {
                    Some(amount) => stats.total_estimated_value += amount,
                    None => stats.unparsed_values += 1,
                },
            }

            let category = classify(record.status.as_deref()).category;
            *stats.status_counts.entry(category).or_insert(0) += 1;
        }

        stats
    }
}

/// Parses a pt-BR currency string like `"R$ 1.234,56"`: the symbol goes,
/// `.` is a thousands separator, `,` is the decimal separator.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned = raw
        .replace("R$", "")
        .replace('.', "")
        .trim()
        .replace(',', ".");
    cleaned.parse::<f64>().ok()
}
