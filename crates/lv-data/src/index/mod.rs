//! Distinct values used to populate the selection controls

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

use lv_core::{FilterSelection, Table};

/// Distinct non-null years, industries and countries, each ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub industries: Vec<String>,
    pub countries: Vec<String>,
}

impl FilterOptions {
    /// Selection covering every available value
    pub fn full_selection(&self) -> FilterSelection {
        FilterSelection::all()
            .with_years(self.years.iter().copied())
            .with_industries(self.industries.iter().cloned())
            .with_countries(self.countries.iter().cloned())
    }

    /// Smallest and largest available year, as shown on the range slider
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }
}

/// Collect the filter options present in a table
pub fn get_filter_options(table: &Table) -> FilterOptions {
    let mut years = BTreeSet::new();
    let mut industries = BTreeSet::new();
    let mut countries = BTreeSet::new();

    for record in table.iter() {
        if let Some(year) = record.year() {
            years.insert(year);
        }
        if let Some(industry) = record.industry() {
            industries.insert(industry);
        }
        if let Some(country) = record.country() {
            countries.insert(country);
        }
    }

    FilterOptions {
        years: years.into_iter().collect(),
        industries: industries.into_iter().map(str::to_string).collect(),
        countries: countries.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lv_core::testing::scenario_table;
    use lv_core::RecordFields;

    use crate::filter::apply_filters;

    #[test]
    fn test_options_are_distinct_and_sorted() {
        let table = Table::from_records(vec![
            RecordFields::new("A").industry("Tech").country("US").ymd(2023, 1, 1).build(),
            RecordFields::new("B").industry("Retail").country("DE").ymd(2021, 6, 1).build(),
            RecordFields::new("C").industry("Tech").ymd(2023, 2, 1).build(),
            RecordFields::new("D").country("BR").build(),
        ]);
        let options = get_filter_options(&table);

        assert_eq!(options.years, vec![2021, 2023]);
        assert_eq!(options.industries, vec!["Retail", "Tech"]);
        assert_eq!(options.countries, vec!["BR", "DE", "US"]);
        assert_eq!(options.year_bounds(), Some((2021, 2023)));
    }

    #[test]
    fn test_empty_table() {
        let options = get_filter_options(&Table::default());

        assert_eq!(options, FilterOptions::default());
        assert_eq!(options.year_bounds(), None);
    }

    #[test]
    fn test_full_selection_round_trip() {
        let table = scenario_table();
        let options = get_filter_options(&table);

        let by_years = FilterSelection::all().with_years(options.years.clone());
        assert_eq!(apply_filters(&table, &by_years), table);
        assert_eq!(apply_filters(&table, &options.full_selection()), table);
    }
}
