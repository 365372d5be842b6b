//! Aggregations feeding each dashboard visualization
//!
//! Every routine takes the unfiltered base table plus a [`FilterSelection`]
//! and applies the filter itself, so filter semantics live in one place.

pub mod dashboard;
pub mod plots;
pub mod rollup;
pub mod stats;
pub mod tables;

pub use dashboard::{matching_records, DashboardConfig, DashboardSnapshot};
pub use plots::{
    country_rollup, monthly_trend, top_companies, top_industries, treemap_hierarchy,
    treemap_hierarchy_with, BarConfig, CompanyBar, CountryRollup, IndustryBar, Palette,
    TreemapConfig, TreemapEntity, TreemapHierarchy, TreemapRow, TrendPoint,
};
pub use rollup::{rollup, Group, Ranking, Totals};
pub use stats::{general_statistics, kpi_summary, GeneralStatistics, KpiSummary};
pub use tables::{data_table, DataTable, TableConfig, TableRow};

pub use lv_core::FilterSelection;
