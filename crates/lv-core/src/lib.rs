//! Core types for the layoffs dashboard
//! 
//! This crate provides the record model, the immutable table shared by every
//! pipeline stage, and the filter selection passed in from the UI.

pub mod record;
pub mod selection;
pub mod table;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types
pub use record::{LayoffRecord, Period, RecordFields};
pub use selection::{FilterSelection, SelectionError};
pub use table::{LoadReport, Table};
pub use data::RecordSource;

pub mod data {
    use crate::table::{LoadReport, Table};
    
    /// Trait for sources the record store can be loaded from
    pub trait RecordSource: Send + Sync {
        /// Load the full table together with a summary of recovered cells
        fn load_with_report(&self) -> anyhow::Result<(Table, LoadReport)>;
        
        /// Load the full table
        fn load(&self) -> anyhow::Result<Table> {
            self.load_with_report().map(|(table, _)| table)
        }
        
        /// Get the source name/path
        fn source_name(&self) -> &str;
    }
}
