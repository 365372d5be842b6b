//! Monthly layoffs trend

use serde::{Serialize, Deserialize};
use tracing::debug;

use lv_core::{FilterSelection, Table};

use crate::rollup::{rollup, Ranking};

/// One point of the trend line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// `YYYY-MM` key
    pub year_month: String,
    pub year: i32,
    pub month: u32,
    /// Axis label such as `Jan 2022`
    pub label: String,
    /// Sum of layoffs in the month
    pub total_layoffs: u64,
    /// Number of rows in the month, not distinct companies
    pub companies: usize,
}

/// Layoffs per month, in chronological order
///
/// Rows without a date do not contribute.
pub fn monthly_trend(table: &Table, selection: &FilterSelection) -> Vec<TrendPoint> {
    let points: Vec<TrendPoint> = rollup(table, selection, |r| r.period(), Ranking::ByKey)
        .into_iter()
        .map(|group| TrendPoint {
            year_month: group.key.year_month.clone(),
            year: group.key.year,
            month: group.key.month,
            label: group.key.label(),
            total_layoffs: group.totals.total_laid_off,
            companies: group.totals.records,
        })
        .collect();

    debug!("Monthly trend: {} points", points.len());
    points
}
