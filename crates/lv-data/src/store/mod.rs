//! Load-once record store

use std::sync::Arc;
use anyhow::Context;
use tracing::info;

use lv_core::{LoadReport, RecordSource, Table};

use crate::index::{get_filter_options, FilterOptions};

/// The dataset as loaded at startup, shared for the process lifetime
///
/// Cloning the store shares the same table; nothing in it changes after
/// construction.
#[derive(Debug, Clone)]
pub struct RecordStore {
    table: Arc<Table>,
    report: LoadReport,
    options: Arc<FilterOptions>,
    source_name: String,
}

impl RecordStore {
    /// Load a source once and keep the result
    pub fn open(source: &dyn RecordSource) -> anyhow::Result<Self> {
        let (table, report) = source.load_with_report()
            .with_context(|| format!("failed to load {}", source.source_name()))?;

        let store = Self::from_parts(source.source_name(), table, report);
        info!(
            "Record store ready: {} rows, {} years, {} industries, {} countries",
            store.table.len(),
            store.options.years.len(),
            store.options.industries.len(),
            store.options.countries.len()
        );
        Ok(store)
    }

    /// Wrap an already loaded table
    pub fn from_parts(source_name: &str, table: Table, report: LoadReport) -> Self {
        let options = get_filter_options(&table);
        Self {
            table: Arc::new(table),
            report,
            options: Arc::new(options),
            source_name: source_name.to_string(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Shared handle to the table for use on other threads
    pub fn shared_table(&self) -> Arc<Table> {
        Arc::clone(&self.table)
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Filter options, computed once at load
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lv_core::testing::scenario_table;

    use crate::sources::{CsvSource, MemorySource};

    #[test]
    fn test_open_memory_source() {
        let store = RecordStore::open(&MemorySource::new("scenario", scenario_table())).unwrap();

        assert_eq!(store.table(), &scenario_table());
        assert_eq!(store.report().rows, 3);
        assert_eq!(store.filter_options().years, vec![2022, 2023]);
        assert_eq!(store.source_name(), "scenario");
    }

    #[test]
    fn test_clones_share_the_table() {
        let store = RecordStore::open(&MemorySource::new("scenario", scenario_table())).unwrap();
        let clone = store.clone();

        assert!(Arc::ptr_eq(&store.shared_table(), &clone.shared_table()));
    }

    #[test]
    fn test_open_failure_names_the_source() {
        let err = RecordStore::open(&CsvSource::from_path("/missing/layoffs.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load layoffs.csv"));
    }
}
