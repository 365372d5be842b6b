//! One batch of outputs per selection event

use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use tracing::debug;

use lv_core::{FilterSelection, Table};
use lv_data::RowFilter;

use crate::plots::geo::total_layoffs_range;
use crate::plots::{
    country_rollup, monthly_trend, top_companies, top_industries, treemap_hierarchy_with, BarConfig,
    CompanyBar, CountryRollup, IndustryBar, Palette, TreemapConfig, TreemapHierarchy, TrendPoint,
};
use crate::stats::{general_statistics, kpi_summary, GeneralStatistics, KpiSummary};
use crate::tables::{data_table, DataTable, TableConfig};

/// Tunables for every dashboard output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub treemap: TreemapConfig,
    pub bars: BarConfig,
    pub table: TableConfig,
    pub palette: Palette,
}

/// Every output of the dashboard for one selection
///
/// The selection is carried along so a consumer holding several in-flight
/// snapshots can drop the ones it has superseded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub selection: FilterSelection,
    pub general: GeneralStatistics,
    pub kpis: KpiSummary,
    pub trend: Vec<TrendPoint>,
    pub countries: Vec<CountryRollup>,
    /// Smallest and largest country total, for the map color scale
    pub country_range: Option<(u64, u64)>,
    pub treemap: TreemapHierarchy,
    /// Color for each industry in the treemap
    pub treemap_colors: IndexMap<String, String>,
    /// Map scale and chart accents for the renderer
    pub palette: Palette,
    pub top_industries: Vec<IndustryBar>,
    pub top_companies: Vec<CompanyBar>,
    pub table: DataTable,
}

impl DashboardSnapshot {
    /// Compute every output for `selection`, running the routines in parallel
    pub fn build(table: &Table, selection: &FilterSelection, config: &DashboardConfig) -> Self {
        let ((general, kpis), ((trend, countries), ((treemap, bars), data))) = rayon::join(
            || (general_statistics(table), kpi_summary(table, selection)),
            || rayon::join(
                || rayon::join(
                    || monthly_trend(table, selection),
                    || country_rollup(table, selection),
                ),
                || rayon::join(
                    || rayon::join(
                        || treemap_hierarchy_with(table, selection, &config.treemap),
                        || (
                            top_industries(table, selection, &config.bars),
                            top_companies(table, selection, &config.bars),
                        ),
                    ),
                    || data_table(table, selection, &config.table),
                ),
            ),
        );
        let (top_industries, top_companies) = bars;

        let treemap_colors = config.palette.industry_colors_for(treemap.industries());
        debug!("Snapshot built for {} of {} records", kpis.records, table.len());

        Self {
            selection: selection.clone(),
            general,
            kpis,
            country_range: total_layoffs_range(&countries),
            trend,
            countries,
            treemap,
            treemap_colors,
            palette: config.palette.clone(),
            top_industries,
            top_companies,
            table: data,
        }
    }

    /// Whether this snapshot was built for `selection`
    pub fn is_for(&self, selection: &FilterSelection) -> bool {
        &self.selection == selection
    }

    /// Whether the selection matched no record
    pub fn is_empty(&self) -> bool {
        self.kpis.records == 0
    }
}

/// Count the records matching a selection without building any output
pub fn matching_records(table: &Table, selection: &FilterSelection) -> usize {
    let filter = RowFilter::compile(selection);
    table.iter().filter(|record| filter.matches(record)).count()
}
