//! In-memory record source

use lv_core::{LayoffRecord, LoadReport, RecordSource, Table};

/// Record source backed by records already in memory
pub struct MemorySource {
    name: String,
    table: Table,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// Create a source from records with no extra columns
    pub fn from_records(name: impl Into<String>, records: Vec<LayoffRecord>) -> Self {
        Self::new(name, Table::from_records(records))
    }
}

impl RecordSource for MemorySource {
    fn load_with_report(&self) -> anyhow::Result<(Table, LoadReport)> {
        let report = LoadReport {
            rows: self.table.len(),
            ..LoadReport::default()
        };
        Ok((self.table.clone(), report))
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
