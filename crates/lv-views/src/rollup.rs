//! Shared filter, group and rank primitive
//!
//! Each chart is a projection of [`rollup`] with its own key and ranking.
//! Groups come out in ascending key order; rows whose key is null are
//! dropped.

use std::collections::BTreeMap;
use ahash::AHashSet;

use lv_core::{FilterSelection, LayoffRecord, Table};
use lv_data::RowFilter;

/// Running totals for one group of records
#[derive(Debug, Clone, Default)]
pub struct Totals<'a> {
    /// Sum of `total_laid_off`, missing values counted as zero; saturates
    /// at `u64::MAX`
    pub total_laid_off: u64,

    /// Number of rows in the group
    pub records: usize,

    companies: AHashSet<&'a str>,
    first_country: Option<&'a str>,
    laid_off_values: usize,
    percentage_sum: f64,
    percentage_values: usize,
}

impl<'a> Totals<'a> {
    /// Fold one record into the totals
    pub fn add(&mut self, record: &'a LayoffRecord) {
        self.records += 1;
        self.companies.insert(record.company());

        if let Some(total) = record.total_laid_off() {
            self.total_laid_off = self.total_laid_off.saturating_add(total);
            self.laid_off_values += 1;
        }
        if let Some(percentage) = record.percentage_laid_off() {
            self.percentage_sum += percentage;
            self.percentage_values += 1;
        }
        if self.first_country.is_none() {
            self.first_country = record.country();
        }
    }

    /// Number of distinct companies
    pub fn distinct_companies(&self) -> usize {
        self.companies.len()
    }

    /// First non-null country in row order
    pub fn first_country(&self) -> Option<&'a str> {
        self.first_country
    }

    /// Mean of the non-null `total_laid_off` values
    pub fn mean_laid_off(&self) -> Option<f64> {
        (self.laid_off_values > 0).then(|| self.total_laid_off as f64 / self.laid_off_values as f64)
    }

    /// Mean of the non-null `percentage_laid_off` values
    pub fn mean_percentage(&self) -> Option<f64> {
        (self.percentage_values > 0).then(|| self.percentage_sum / self.percentage_values as f64)
    }
}

/// One output group
#[derive(Debug, Clone)]
pub struct Group<'a, K> {
    pub key: K,
    pub totals: Totals<'a>,
}

/// Ordering applied to groups after accumulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Ascending key order
    ByKey,

    /// Descending by summed layoffs; ties keep key order
    ByLayoffs,

    /// As `ByLayoffs`, truncated to `limit` groups
    TopByLayoffs { limit: usize },
}

impl Ranking {
    /// Reorder groups that are in ascending key order
    pub fn apply<K>(self, groups: &mut Vec<Group<'_, K>>) {
        match self {
            Ranking::ByKey => {}
            Ranking::ByLayoffs => sort_by_layoffs(groups),
            Ranking::TopByLayoffs { limit } => {
                sort_by_layoffs(groups);
                groups.truncate(limit);
            }
        }
    }
}

fn sort_by_layoffs<K>(groups: &mut [Group<'_, K>]) {
    // sort_by is stable, so equal sums stay in key order
    groups.sort_by(|a, b| b.totals.total_laid_off.cmp(&a.totals.total_laid_off));
}

/// Group records by key, in ascending key order
pub fn group_records<'a, K, I, F>(records: I, key: F) -> Vec<Group<'a, K>>
where
    K: Ord,
    I: IntoIterator<Item = &'a LayoffRecord>,
    F: Fn(&'a LayoffRecord) -> Option<K>,
{
    let mut groups: BTreeMap<K, Totals<'a>> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            groups.entry(k).or_default().add(record);
        }
    }

    groups.into_iter()
        .map(|(key, totals)| Group { key, totals })
        .collect()
}

/// Filter `table` by `selection`, group by `key`, then rank
pub fn rollup<'a, K, F>(table: &'a Table, selection: &FilterSelection, key: F, ranking: Ranking) -> Vec<Group<'a, K>>
where
    K: Ord,
    F: Fn(&'a LayoffRecord) -> Option<K>,
{
    let filter = RowFilter::compile(selection);
    let mut groups = group_records(table.iter().filter(|record| filter.matches(record)), key);
    ranking.apply(&mut groups);
    groups
}
