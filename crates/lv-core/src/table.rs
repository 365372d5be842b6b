//! Immutable in-memory table of layoff records

use std::sync::Arc;
use serde::{Serialize, Deserialize};

use crate::record::LayoffRecord;

/// Ordered collection of layoff records
///
/// Records are shared between a table and every table derived from it, so
/// filtering never copies or mutates record data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Names of the source columns carried through unchanged
    extra_columns: Arc<Vec<String>>,

    /// Rows in source order
    rows: Vec<Arc<LayoffRecord>>,
}

impl Table {
    /// Create a table from records and the names of their extra columns
    pub fn new(extra_columns: Vec<String>, records: Vec<LayoffRecord>) -> Self {
        Self {
            extra_columns: Arc::new(extra_columns),
            rows: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// Create a table with no extra columns
    pub fn from_records(records: impl IntoIterator<Item = LayoffRecord>) -> Self {
        Self::new(Vec::new(), records.into_iter().collect())
    }

    /// Derive a new table holding the rows that match a predicate
    pub fn select(&self, predicate: impl Fn(&LayoffRecord) -> bool) -> Table {
        Table {
            extra_columns: Arc::clone(&self.extra_columns),
            rows: self.rows.iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> impl Iterator<Item = &LayoffRecord> + '_ {
        self.rows.iter().map(|row| row.as_ref())
    }

    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }
}

/// Aggregate counts of cells recovered to null while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Rows kept in the table
    pub rows: usize,

    /// Rows dropped because they had no company
    pub skipped_rows: usize,

    /// Non-empty dates that could not be parsed
    pub invalid_dates: usize,

    /// Non-empty numeric cells that could not be coerced
    pub invalid_numbers: usize,
}

impl LoadReport {
    /// Whether any row or cell had to be recovered
    pub fn has_recoveries(&self) -> bool {
        self.skipped_rows > 0 || self.invalid_dates > 0 || self.invalid_numbers > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordFields;

    fn sample() -> Table {
        Table::from_records(vec![
            RecordFields::new("A").industry("Tech").laid_off(100).build(),
            RecordFields::new("B").industry("Retail").build(),
            RecordFields::new("C").industry("Tech").laid_off(5).build(),
        ])
    }

    #[test]
    fn test_select_preserves_order() {
        let table = sample();
        let tech = table.select(|r| r.industry() == Some("Tech"));

        let companies: Vec<_> = tech.iter().map(|r| r.company()).collect();
        assert_eq!(companies, vec!["A", "C"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_select_all_is_equal() {
        let table = sample();
        assert_eq!(table.select(|_| true), table);
        assert!(table.select(|_| false).is_empty());
    }

    #[test]
    fn test_extra_columns_survive_select() {
        let table = Table::new(
            vec!["stage".to_string()],
            vec![RecordFields { extra: vec![Some("Series B".to_string())], ..RecordFields::new("A") }.build()],
        );
        let derived = table.select(|_| true);

        assert_eq!(derived.extra_columns(), ["stage".to_string()]);
        assert_eq!(derived.iter().next().unwrap().extra(), [Some("Series B".to_string())]);
    }

    #[test]
    fn test_load_report_recoveries() {
        assert!(!LoadReport::default().has_recoveries());
        assert!(LoadReport { invalid_dates: 1, ..LoadReport::default() }.has_recoveries());
    }
}
