//! Per-country rollup for the choropleth map

use serde::{Serialize, Deserialize};
use tracing::debug;

use lv_core::{FilterSelection, Table};

use crate::rollup::{rollup, Ranking};

/// Aggregates for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRollup {
    pub country: String,
    /// Mean `percentage_laid_off`; `None` when every value is missing
    pub percentage_layoffs: Option<f64>,
    pub total_layoffs: u64,
    /// Distinct companies
    pub companies: usize,
}

/// One row per country present after filtering, in ascending name order
pub fn country_rollup(table: &Table, selection: &FilterSelection) -> Vec<CountryRollup> {
    let rows: Vec<CountryRollup> = rollup(table, selection, |r| r.country(), Ranking::ByKey)
        .into_iter()
        .map(|group| CountryRollup {
            country: group.key.to_string(),
            percentage_layoffs: group.totals.mean_percentage(),
            total_layoffs: group.totals.total_laid_off,
            companies: group.totals.distinct_companies(),
        })
        .collect();

    debug!("Country rollup: {} countries", rows.len());
    rows
}

/// Smallest and largest total across countries, for scaling the map colors
pub fn total_layoffs_range(rows: &[CountryRollup]) -> Option<(u64, u64)> {
    let min = rows.iter().map(|r| r.total_layoffs).min()?;
    let max = rows.iter().map(|r| r.total_layoffs).max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lv_core::testing::scenario_table;
    use lv_core::RecordFields;

    #[test]
    fn test_scenario_countries() {
        let rows = country_rollup(&scenario_table(), &FilterSelection::all());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "DE");
        assert_eq!(rows[0].total_layoffs, 30);
        assert_eq!(rows[1].country, "US");
        assert_eq!(rows[1].total_layoffs, 150);
        assert_eq!(rows[1].companies, 2);
        assert_eq!(rows[1].percentage_layoffs, None);
        assert_eq!(total_layoffs_range(&rows), Some((30, 150)));
    }

    #[test]
    fn test_distinct_companies_and_mean() {
        let table = Table::from_records(vec![
            RecordFields::new("A").country("IN").percentage(20.0).laid_off(5).build(),
            RecordFields::new("A").country("IN").percentage(40.0).build(),
            RecordFields::new("B").country("IN").build(),
            RecordFields::new("C").laid_off(3).build(),
        ]);
        let rows = country_rollup(&table, &FilterSelection::all());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].companies, 2);
        assert_eq!(rows[0].percentage_layoffs, Some(30.0));
        assert_eq!(rows[0].total_layoffs, 5);
    }

    #[test]
    fn test_empty_input() {
        let rows = country_rollup(&Table::default(), &FilterSelection::all());
        assert!(rows.is_empty());
        assert_eq!(total_layoffs_range(&rows), None);
    }
}
