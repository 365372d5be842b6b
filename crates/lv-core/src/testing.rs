//! Fixtures and proptest strategies shared by the workspace tests

use chrono::NaiveDate;
use proptest::prelude::*;

use crate::record::{LayoffRecord, RecordFields};
use crate::table::Table;

/// Three rows spanning two years, two industries and two countries
pub fn scenario_table() -> Table {
    Table::from_records(vec![
        RecordFields::new("A").industry("Tech").country("US").ymd(2022, 1, 15).laid_off(100).build(),
        RecordFields::new("B").industry("Tech").country("US").ymd(2022, 3, 10).laid_off(50).build(),
        RecordFields::new("C").industry("Retail").country("DE").ymd(2023, 1, 1).laid_off(30).build(),
    ])
}

/// Arbitrary record drawn from small value pools so groups collide
pub fn arb_record() -> impl Strategy<Value = LayoffRecord> {
    (
        prop::sample::select(vec!["Acme", "Globex", "Initech", "Umbrella", "Hooli", "Stark"]),
        prop::option::of(prop::sample::select(vec!["Tech", "Retail", "Finance", "Food"])),
        prop::option::of(prop::sample::select(vec!["US", "DE", "IN", "BR"])),
        prop::option::of((2019i32..2025, 1u32..=12, 1u32..=28)),
        prop::option::of(0u64..5_000),
        prop::option::of(0.0f64..100.0),
    )
        .prop_map(|(company, industry, country, date, laid_off, percentage)| {
            RecordFields {
                industry: industry.map(str::to_string),
                country: country.map(str::to_string),
                date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
                total_laid_off: laid_off,
                percentage_laid_off: percentage,
                ..RecordFields::new(company)
            }
            .build()
        })
}

/// Arbitrary table of up to `max_rows` records
pub fn arb_table(max_rows: usize) -> impl Strategy<Value = Table> {
    prop::collection::vec(arb_record(), 0..=max_rows).prop_map(Table::from_records)
}
