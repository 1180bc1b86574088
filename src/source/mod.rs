// Source module: where CSV text comes from (HTTP resource or local file).

pub mod fetcher;
pub mod traits;

pub use fetcher::{HttpCsvSource, LocalFileSource};
pub use traits::CsvSource;
