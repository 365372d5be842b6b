//! Paged data table of the filtered records

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use tracing::debug;

use lv_core::{FilterSelection, LayoffRecord, Table};
use lv_data::apply_filters;
use lv_data::schema::{COMPANY, COUNTRY, DATE, FUNDS_RAISED, INDUSTRY, PERCENTAGE_LAID_OFF, TOTAL_LAID_OFF};

/// Rows per page by default
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for the data table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE }
    }
}

/// A record as shown in the table: source columns only, derived calendar
/// fields left out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub company: String,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub date: Option<NaiveDate>,
    pub total_laid_off: Option<u64>,
    pub percentage_laid_off: Option<f64>,
    pub funds_raised: Option<f64>,
    /// Extra source columns by name
    #[serde(flatten)]
    pub extra: IndexMap<String, Option<String>>,
}

impl TableRow {
    fn from_record(record: &LayoffRecord, extra_columns: &[String]) -> Self {
        Self {
            company: record.company().to_string(),
            industry: record.industry().map(str::to_string),
            country: record.country().map(str::to_string),
            date: record.date(),
            total_laid_off: record.total_laid_off(),
            percentage_laid_off: record.percentage_laid_off(),
            funds_raised: record.funds_raised(),
            extra: extra_columns.iter()
                .zip(record.extra().iter().chain(std::iter::repeat(&None)))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }
}

/// The filtered records ready for a paged table widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    /// Column names in display order
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
    pub page_size: usize,
}

impl DataTable {
    /// Number of filtered records
    pub fn total_records(&self) -> usize {
        self.rows.len()
    }

    /// Number of pages; an empty table still has one empty page
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// Rows of a zero-based page; empty past the last page
    pub fn page(&self, index: usize) -> &[TableRow] {
        if self.page_size == 0 {
            return &self.rows;
        }
        let start = index.saturating_mul(self.page_size).min(self.rows.len());
        let end = start.saturating_add(self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Status line shown above the table
    pub fn summary(&self) -> String {
        format!("Showing {} records", self.total_records())
    }
}

/// Build the data table for a selection
///
/// A page size of zero disables paging.
pub fn data_table(table: &Table, selection: &FilterSelection, config: &TableConfig) -> DataTable {
    let filtered = apply_filters(table, selection);

    let mut columns: Vec<String> = [COMPANY, INDUSTRY, COUNTRY, DATE, TOTAL_LAID_OFF, PERCENTAGE_LAID_OFF, FUNDS_RAISED]
        .iter()
        .map(|name| name.to_string())
        .collect();
    columns.extend(filtered.extra_columns().iter().cloned());

    let rows: Vec<TableRow> = filtered.iter()
        .map(|record| TableRow::from_record(record, filtered.extra_columns()))
        .collect();

    debug!("Data table: {} rows", rows.len());
    DataTable {
        columns,
        rows,
        page_size: config.page_size,
    }
}
