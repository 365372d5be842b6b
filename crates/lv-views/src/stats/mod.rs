//! Scalar summaries for the KPI cards and the header panel

use ahash::AHashSet;
use serde::{Serialize, Deserialize};
use tracing::debug;

use lv_core::{FilterSelection, Table};

use crate::rollup::{rollup, Ranking};

/// KPI cards for the current selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Distinct companies
    pub companies: usize,
    /// Sum of layoffs, missing values counted as zero
    pub total_layoffs: u64,
    /// Rows matching the selection
    pub records: usize,
    /// Mean of the known layoff counts; `None` when there are none
    pub avg_layoffs: Option<f64>,
}

/// Summary of the whole dataset, independent of any selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralStatistics {
    pub records: usize,
    pub total_layoffs: u64,
    /// Distinct companies
    pub companies: usize,
    /// Distinct non-null countries
    pub countries: usize,
}

/// Compute the KPI cards for a selection
pub fn kpi_summary(table: &Table, selection: &FilterSelection) -> KpiSummary {
    // A single group keyed on unit; no group at all when nothing matches
    let summary = rollup(table, selection, |_| Some(()), Ranking::ByKey)
        .into_iter()
        .next()
        .map(|group| KpiSummary {
            companies: group.totals.distinct_companies(),
            total_layoffs: group.totals.total_laid_off,
            records: group.totals.records,
            avg_layoffs: group.totals.mean_laid_off(),
        })
        .unwrap_or_default();

    debug!("KPI summary over {} records", summary.records);
    summary
}

pub fn general_statistics(table: &Table) -> GeneralStatistics {
    let mut companies = AHashSet::new();
    let mut countries = AHashSet::new();
    let mut total_layoffs: u64 = 0;

    for record in table.iter() {
        companies.insert(record.company());
        if let Some(country) = record.country() {
            countries.insert(country);
        }
        total_layoffs = total_layoffs.saturating_add(record.laid_off_or_zero());
    }

    GeneralStatistics {
        records: table.len(),
        total_layoffs,
        companies: companies.len(),
        countries: countries.len(),
    }
}
