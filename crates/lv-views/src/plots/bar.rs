//! Top-N rankings for the industry and company bar charts

use serde::{Serialize, Deserialize};
use tracing::debug;

use lv_core::{FilterSelection, Table};

use crate::rollup::{rollup, Ranking};

/// Bars shown by default
pub const DEFAULT_BAR_LIMIT: usize = 10;

/// Bar chart configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Maximum number of bars
    pub limit: usize,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self { limit: DEFAULT_BAR_LIMIT }
    }
}

/// Bar of the industry ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryBar {
    pub industry: String,
    pub total_layoffs: u64,
    /// Distinct companies
    pub companies: usize,
}

/// Bar of the company ranking; a company appears once per industry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyBar {
    pub company: String,
    pub industry: String,
    pub total_layoffs: u64,
}

/// Industries with the most layoffs, largest first
pub fn top_industries(table: &Table, selection: &FilterSelection, config: &BarConfig) -> Vec<IndustryBar> {
    let bars: Vec<IndustryBar> = rollup(
        table,
        selection,
        |r| r.industry(),
        Ranking::TopByLayoffs { limit: config.limit },
    )
    .into_iter()
    .map(|group| IndustryBar {
        industry: group.key.to_string(),
        total_layoffs: group.totals.total_laid_off,
        companies: group.totals.distinct_companies(),
    })
    .collect();

    debug!("Top industries: {} bars", bars.len());
    bars
}

/// Companies with the most layoffs, largest first
///
/// Grouped on company and industry together; rows without an industry do
/// not contribute.
pub fn top_companies(table: &Table, selection: &FilterSelection, config: &BarConfig) -> Vec<CompanyBar> {
    let bars: Vec<CompanyBar> = rollup(
        table,
        selection,
        |r| r.industry().map(|industry| (r.company(), industry)),
        Ranking::TopByLayoffs { limit: config.limit },
    )
    .into_iter()
    .map(|group| CompanyBar {
        company: group.key.0.to_string(),
        industry: group.key.1.to_string(),
        total_layoffs: group.totals.total_laid_off,
    })
    .collect();

    debug!("Top companies: {} bars", bars.len());
    bars
}
