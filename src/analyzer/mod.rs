// Analyzer module: aggregate statistics over a loaded dataset.

pub mod value_stats;

pub use value_stats::{Analyzer, AnalyzerImpl, BoardStats, parse_currency};
