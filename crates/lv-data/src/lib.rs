//! Data loading and filtering for the layoffs dashboard

pub mod config;
pub mod export;
pub mod filter;
pub mod index;
pub mod parse;
pub mod schema;
pub mod sources;
pub mod store;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use config::{LoaderConfig, NullConfig};
pub use export::table_to_record_batch;
pub use filter::{apply_filters, RowFilter};
pub use index::{get_filter_options, FilterOptions};
pub use sources::{CsvSource, MemorySource};
pub use store::RecordStore;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Arrow error: {0}")]
    Arrow(ArrowError),
    
    #[error("CSV parsing error: {0}")]
    Csv(String),
    
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    
    #[error("Malformed row at line {line}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
    
    #[error("Invalid loader configuration: {0}")]
    Config(String),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<ArrowError> for DataError {
    fn from(error: ArrowError) -> Self {
        DataError::Arrow(error)
    }
}
