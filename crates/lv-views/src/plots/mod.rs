//! Aggregations shaped for each chart

pub mod bar;
pub mod geo;
pub mod line;
pub mod treemap;

// Utilities
pub mod utils;

// Re-exports
pub use bar::{top_companies, top_industries, BarConfig, CompanyBar, IndustryBar};
pub use geo::{country_rollup, CountryRollup};
pub use line::{monthly_trend, TrendPoint};
pub use treemap::{treemap_hierarchy, treemap_hierarchy_with, TreemapConfig, TreemapEntity, TreemapHierarchy, TreemapRow};
pub use utils::Palette;
