//! Industry and company hierarchy for the treemap

use indexmap::IndexSet;
use serde::{Serialize, Deserialize};
use tracing::debug;

use lv_core::{FilterSelection, Table};
use lv_data::RowFilter;

use crate::rollup::{group_records, rollup, Ranking};

/// Number of industries shown by default
pub const DEFAULT_MAX_INDUSTRIES: usize = 8;

/// Companies shown per industry before the rest collapse into `Others`
pub const DEFAULT_MAX_COMPANIES: usize = 9;

/// Label of the bucket holding the companies beyond the limit
pub const OTHERS_LABEL: &str = "Others";

/// Treemap configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreemapConfig {
    /// Industries kept, largest first
    pub max_industries: usize,

    /// Companies kept per industry before bucketing
    pub max_companies: usize,
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            max_industries: DEFAULT_MAX_INDUSTRIES,
            max_companies: DEFAULT_MAX_COMPANIES,
        }
    }
}

/// Leaf of the hierarchy
///
/// A company that is literally named "Others" stays distinct from the bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreemapEntity {
    Company(String),
    Others,
}

impl TreemapEntity {
    /// Display label
    pub fn label(&self) -> &str {
        match self {
            TreemapEntity::Company(name) => name,
            TreemapEntity::Others => OTHERS_LABEL,
        }
    }

    pub fn is_others(&self) -> bool {
        matches!(self, TreemapEntity::Others)
    }
}

/// One rectangle of the treemap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreemapRow {
    pub industry: String,
    pub entity: TreemapEntity,
    pub total_layoffs: u64,
    /// First known country of the company; for `Others`, the distinct
    /// countries of the bucketed companies joined with `", "`
    pub country: Option<String>,
}

/// Treemap output; `NoData` when the selection leaves nothing to draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "rows", rename_all = "snake_case")]
pub enum TreemapHierarchy {
    Rows(Vec<TreemapRow>),
    NoData,
}

impl TreemapHierarchy {
    pub fn rows(&self) -> &[TreemapRow] {
        match self {
            TreemapHierarchy::Rows(rows) => rows,
            TreemapHierarchy::NoData => &[],
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, TreemapHierarchy::NoData)
    }

    /// Industries in display order
    pub fn industries(&self) -> Vec<&str> {
        self.rows()
            .iter()
            .map(|row| row.industry.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Build the treemap with the default limits
pub fn treemap_hierarchy(table: &Table, selection: &FilterSelection) -> TreemapHierarchy {
    treemap_hierarchy_with(table, selection, &TreemapConfig::default())
}

/// Build the treemap
///
/// Industries are ranked by summed layoffs and the top `max_industries`
/// kept. Within each, companies with a zero sum are dropped, the top
/// `max_companies` kept, and any remainder summed into one `Others` row.
pub fn treemap_hierarchy_with(table: &Table, selection: &FilterSelection, config: &TreemapConfig) -> TreemapHierarchy {
    let industries = rollup(
        table,
        selection,
        |r| r.industry(),
        Ranking::TopByLayoffs { limit: config.max_industries },
    );

    let filter = RowFilter::compile(selection);
    let mut rows = Vec::new();

    for industry in industries {
        let name = industry.key;
        let mut companies = group_records(
            table.iter().filter(|r| r.industry() == Some(name) && filter.matches(r)),
            |r| Some(r.company()),
        );
        companies.retain(|group| group.totals.total_laid_off > 0);
        Ranking::ByLayoffs.apply(&mut companies);

        let remainder = if companies.len() > config.max_companies {
            companies.split_off(config.max_companies)
        } else {
            Vec::new()
        };

        rows.extend(companies.into_iter().map(|group| TreemapRow {
            industry: name.to_string(),
            entity: TreemapEntity::Company(group.key.to_string()),
            total_layoffs: group.totals.total_laid_off,
            country: group.totals.first_country().map(str::to_string),
        }));

        if !remainder.is_empty() {
            let countries: IndexSet<&str> = remainder.iter()
                .filter_map(|group| group.totals.first_country())
                .collect();
            let joined = countries.into_iter().collect::<Vec<_>>().join(", ");

            rows.push(TreemapRow {
                industry: name.to_string(),
                entity: TreemapEntity::Others,
                total_layoffs: remainder.iter().fold(0u64, |sum, group| sum.saturating_add(group.totals.total_laid_off)),
                country: (!joined.is_empty()).then_some(joined),
            });
        }
    }

    debug!("Treemap: {} rows", rows.len());
    if rows.is_empty() {
        TreemapHierarchy::NoData
    } else {
        TreemapHierarchy::Rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;
    use chrono::NaiveDate;
    use lv_core::testing::scenario_table;
    use lv_core::{LayoffRecord, RecordFields};
    use proptest::prelude::*;

    /// `count` companies in one industry with layoffs `count, count - 1, .., 1`
    fn industry_with(industry: &str, count: u64) -> Vec<LayoffRecord> {
        (1..=count)
            .map(|n| {
                RecordFields::new(format!("{industry}-{n:02}"))
                    .industry(industry)
                    .country(if n % 2 == 0 { "US" } else { "DE" })
                    .laid_off(count + 1 - n)
                    .build()
            })
            .collect()
    }

    #[test]
    fn test_scenario_treemap() {
        let treemap = treemap_hierarchy(&scenario_table(), &FilterSelection::all());

        let rows = treemap.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].industry, "Tech");
        assert_eq!(rows[0].entity, TreemapEntity::Company("A".to_string()));
        assert_eq!(rows[1].entity.label(), "B");
        assert_eq!(rows[2].industry, "Retail");
        assert_eq!(rows[2].country.as_deref(), Some("DE"));
        assert_eq!(treemap.industries(), vec!["Tech", "Retail"]);
    }

    #[test]
    fn test_remainder_collapses_into_others() {
        let table = Table::from_records(industry_with("Retail", 12));
        let treemap = treemap_hierarchy(&table, &FilterSelection::all());
        let rows = treemap.rows();

        assert_eq!(rows.len(), 10);
        assert!(rows[..9].iter().all(|row| !row.entity.is_others()));

        let others = &rows[9];
        assert!(others.entity.is_others());
        // Companies 10, 11 and 12 carry 3, 2 and 1
        assert_eq!(others.total_layoffs, 6);
        assert_eq!(others.country.as_deref(), Some("US, DE"));
    }

    #[test]
    fn test_exactly_nine_companies_has_no_others() {
        let table = Table::from_records(industry_with("Food", 9));
        let rows = treemap_hierarchy(&table, &FilterSelection::all()).rows().to_vec();

        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|row| !row.entity.is_others()));
    }

    #[test]
    fn test_company_named_others_is_not_the_bucket() {
        let table = Table::from_records(vec![
            RecordFields::new("Others").industry("Tech").laid_off(10).build(),
        ]);
        let rows = treemap_hierarchy(&table, &FilterSelection::all()).rows().to_vec();

        assert_eq!(rows[0].entity, TreemapEntity::Company("Others".to_string()));
        assert!(!rows[0].entity.is_others());
    }

    #[test]
    fn test_zero_sums_and_extra_industries_are_dropped() {
        let mut records = Vec::new();
        for (idx, industry) in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"].iter().enumerate() {
            records.push(RecordFields::new(format!("co-{industry}")).industry(*industry).laid_off(idx as u64 + 1).build());
        }
        records.push(RecordFields::new("Idle").industry("J").build());

        let treemap = treemap_hierarchy(&Table::from_records(records), &FilterSelection::all());

        assert_eq!(treemap.industries(), vec!["J", "I", "H", "G", "F", "E", "D", "C"]);
        assert!(treemap.rows().iter().all(|row| row.entity.label() != "Idle"));
    }

    #[test]
    fn test_no_data() {
        let treemap = treemap_hierarchy(&scenario_table(), &FilterSelection::all().with_years([1999]));
        assert!(treemap.is_no_data());
        assert!(treemap.rows().is_empty());

        let zeros = Table::from_records(vec![RecordFields::new("A").industry("Tech").build()]);
        assert!(treemap_hierarchy(&zeros, &FilterSelection::all()).is_no_data());
    }

    #[test]
    fn test_config_limits() {
        let table = Table::from_records(industry_with("Retail", 5));
        let config = TreemapConfig { max_industries: 1, max_companies: 2 };
        let rows = treemap_hierarchy_with(&table, &FilterSelection::all(), &config).rows().to_vec();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].total_layoffs, 3 + 2 + 1);
    }

    #[test]
    fn test_others_total_saturates() {
        let mut records: Vec<LayoffRecord> = (0..9)
            .map(|n| RecordFields::new(format!("Top{n}")).industry("Retail").laid_off(u64::MAX).build())
            .collect();
        for name in ["Rest1", "Rest2"] {
            records.push(RecordFields::new(name).industry("Retail").laid_off(u64::MAX / 2 + 1).build());
        }
        let rows = treemap_hierarchy(&Table::from_records(records), &FilterSelection::all()).rows().to_vec();

        assert_eq!(rows.len(), 10);
        let others = &rows[9];
        assert!(others.entity.is_others());
        assert_eq!(others.total_layoffs, u64::MAX);
    }

    fn arb_wide_table() -> impl Strategy<Value = Table> {
        let record = (0usize..15, 0usize..10, prop::option::of(0u64..500), prop::option::of(0usize..3))
            .prop_map(|(company, industry, laid_off, country)| {
                RecordFields {
                    industry: Some(format!("I{industry}")),
                    country: country.map(|c| ["US", "DE", "IN"][c].to_string()),
                    date: NaiveDate::from_ymd_opt(2022, 1, 1),
                    total_laid_off: laid_off,
                    ..RecordFields::new(format!("C{company}"))
                }
                .build()
            });
        prop::collection::vec(record, 0..200).prop_map(Table::from_records)
    }

    proptest! {
        #[test]
        fn prop_treemap_limits_and_others_totals(table in arb_wide_table()) {
            let treemap = treemap_hierarchy(&table, &FilterSelection::all());
            prop_assert!(treemap.industries().len() <= DEFAULT_MAX_INDUSTRIES);

            for industry in treemap.industries() {
                let mut sums: AHashMap<&str, u64> = AHashMap::new();
                for record in table.iter().filter(|r| r.industry() == Some(industry)) {
                    *sums.entry(record.company()).or_default() += record.laid_off_or_zero();
                }
                let qualifying = sums.values().filter(|sum| **sum > 0).count();

                let rows: Vec<_> = treemap.rows().iter().filter(|row| row.industry == industry).collect();
                let others: Vec<_> = rows.iter().filter(|row| row.entity.is_others()).collect();

                if qualifying > DEFAULT_MAX_COMPANIES {
                    prop_assert_eq!(others.len(), 1);
                    let kept: u64 = rows.iter()
                        .filter(|row| !row.entity.is_others())
                        .map(|row| row.total_layoffs)
                        .sum();
                    let all: u64 = sums.values().sum();
                    prop_assert_eq!(others[0].total_layoffs, all - kept);
                } else {
                    prop_assert!(others.is_empty());
                    prop_assert_eq!(rows.len(), qualifying);
                }
            }
        }
    }
}
