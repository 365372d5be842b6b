//! Filter engine: year range, industry and country selection

use ahash::AHashSet;
use tracing::debug;

use lv_core::{FilterSelection, LayoffRecord, Table};

/// A filter selection compiled into a row predicate
///
/// Each active condition must hold; a null field never satisfies an active
/// condition on that field.
#[derive(Debug, Clone)]
pub struct RowFilter<'a> {
    /// Inclusive year range
    years: Option<(i32, i32)>,
    industries: Option<AHashSet<&'a str>>,
    countries: Option<AHashSet<&'a str>>,
}

impl<'a> RowFilter<'a> {
    /// Compile a selection
    pub fn compile(selection: &'a FilterSelection) -> Self {
        let as_set = |values: &'a [String]| values.iter().map(String::as_str).collect::<AHashSet<_>>();

        Self {
            years: selection.year_range(),
            industries: selection.active_industries().map(as_set),
            countries: selection.active_countries().map(as_set),
        }
    }

    /// Check whether a record satisfies every active condition
    pub fn matches(&self, record: &LayoffRecord) -> bool {
        if let Some((min, max)) = self.years {
            match record.year() {
                Some(year) if (min..=max).contains(&year) => {}
                _ => return false,
            }
        }

        if let Some(industries) = &self.industries {
            if !record.industry().is_some_and(|industry| industries.contains(industry)) {
                return false;
            }
        }

        if let Some(countries) = &self.countries {
            if !record.country().is_some_and(|country| countries.contains(country)) {
                return false;
            }
        }

        true
    }

    /// Whether no condition is active
    pub fn is_identity(&self) -> bool {
        self.years.is_none() && self.industries.is_none() && self.countries.is_none()
    }
}

/// Return the rows of `table` matching `selection`, in table order
///
/// The input is never modified; with no active condition the result equals
/// the input.
pub fn apply_filters(table: &Table, selection: &FilterSelection) -> Table {
    let filter = RowFilter::compile(selection);
    if filter.is_identity() {
        return table.clone();
    }

    let filtered = table.select(|record| filter.matches(record));
    debug!("Filter kept {} of {} rows", filtered.len(), table.len());
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use lv_core::testing::{arb_table, scenario_table};
    use lv_core::RecordFields;
    use proptest::prelude::*;

    use crate::index::get_filter_options;

    fn companies(table: &Table) -> Vec<&str> {
        table.iter().map(|r| r.company()).collect()
    }

    #[test]
    fn test_single_year() {
        let filtered = apply_filters(&scenario_table(), &FilterSelection::all().with_years([2022]));
        assert_eq!(companies(&filtered), vec!["A", "B"]);
    }

    #[test]
    fn test_discontiguous_years_cover_the_span() {
        let table = Table::from_records(vec![
            RecordFields::new("A").ymd(2020, 5, 1).build(),
            RecordFields::new("B").ymd(2021, 5, 1).build(),
            RecordFields::new("C").ymd(2022, 5, 1).build(),
            RecordFields::new("D").ymd(2023, 5, 1).build(),
        ]);
        let filtered = apply_filters(&table, &FilterSelection::all().with_years([2022, 2020]));

        assert_eq!(companies(&filtered), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_membership_is_exact() {
        let table = scenario_table();

        let retail = apply_filters(&table, &FilterSelection::all().with_industries(["Retail"]));
        assert_eq!(companies(&retail), vec!["C"]);

        let lowercase = apply_filters(&table, &FilterSelection::all().with_industries(["retail"]));
        assert!(lowercase.is_empty());
    }

    #[test]
    fn test_conditions_combine_with_and() {
        let selection = FilterSelection::all()
            .with_years([2022, 2023])
            .with_industries(["Tech", "Retail"])
            .with_countries(["DE"]);

        assert_eq!(companies(&apply_filters(&scenario_table(), &selection)), vec!["C"]);
    }

    #[test]
    fn test_nulls_never_match_active_filters() {
        let table = Table::from_records(vec![
            RecordFields::new("NoDate").industry("Tech").country("US").build(),
            RecordFields::new("NoIndustry").country("US").ymd(2022, 1, 1).build(),
            RecordFields::new("NoCountry").industry("Tech").ymd(2022, 1, 1).build(),
        ]);

        let by_year = apply_filters(&table, &FilterSelection::all().with_years([2022]));
        assert_eq!(companies(&by_year), vec!["NoIndustry", "NoCountry"]);

        let by_industry = apply_filters(&table, &FilterSelection::all().with_industries(["Tech"]));
        assert_eq!(companies(&by_industry), vec!["NoDate", "NoCountry"]);

        let by_country = apply_filters(&table, &FilterSelection::all().with_countries(["US"]));
        assert_eq!(companies(&by_country), vec!["NoDate", "NoIndustry"]);
    }

    #[test]
    fn test_empty_lists_are_identity() {
        let table = scenario_table();
        let selection = FilterSelection::all()
            .with_years(Vec::new())
            .with_industries(Vec::<String>::new());

        assert_eq!(apply_filters(&table, &selection), table);
    }

    #[test]
    fn test_input_is_untouched() {
        let table = scenario_table();
        let _ = apply_filters(&table, &FilterSelection::all().with_countries(["DE"]));

        assert_eq!(table, scenario_table());
    }

    proptest! {
        #[test]
        fn prop_years_lie_in_range(table in arb_table(40), years in prop::collection::vec(2018i32..2026, 1..4)) {
            let min = *years.iter().min().unwrap();
            let max = *years.iter().max().unwrap();
            let filtered = apply_filters(&table, &FilterSelection::all().with_years(years));

            for record in filtered.iter() {
                let year = record.year();
                prop_assert!(year.is_some_and(|y| (min..=max).contains(&y)));
            }
            let expected = table.iter()
                .filter(|r| r.year().is_some_and(|y| (min..=max).contains(&y)))
                .count();
            prop_assert_eq!(filtered.len(), expected);
        }

        #[test]
        fn prop_no_selection_is_identity(table in arb_table(40)) {
            prop_assert_eq!(apply_filters(&table, &FilterSelection::all()), table);
        }

        #[test]
        fn prop_full_year_options_round_trip(table in arb_table(40)) {
            let options = get_filter_options(&table);
            let dated = table.select(|r| r.year().is_some());
            let filtered = apply_filters(&table, &FilterSelection::all().with_years(options.years));

            // Every dated row is kept; undated rows only survive an empty year list
            if dated.is_empty() {
                prop_assert_eq!(filtered, table);
            } else {
                prop_assert_eq!(filtered, dated);
            }
        }
    }
}
