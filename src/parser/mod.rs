// Parser module: CSV text -> raw rows.

pub mod csv_parser;

pub use csv_parser::{LicitacaoCsvParser, ParseOutcome, Parser};
