//! CSV record source for the layoffs dataset

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use lv_core::{LayoffRecord, LoadReport, RecordFields, RecordSource, Table};

use crate::config::LoaderConfig;
use crate::parse::{parse_amount, parse_count, parse_date, parse_percentage};
use crate::schema::ColumnLayout;
use crate::DataError;

/// CSV data source for loading the layoffs table
pub struct CsvSource {
    /// Loader configuration
    config: LoaderConfig,

    /// Source name
    source_name: String,
}

impl CsvSource {
    /// Create a CSV source from a loader configuration
    pub fn new(config: LoaderConfig) -> Self {
        let source_name = config.file_name();
        Self { config, source_name }
    }

    /// Create a CSV source for a path with default parsing rules
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(LoaderConfig::new(path))
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read the configured file into a table
    pub fn read_table(&self) -> Result<(Table, LoadReport), DataError> {
        let file = File::open(&self.config.path)?;
        self.read_from(BufReader::new(file))
    }

    /// Read CSV data from any reader
    ///
    /// Rows longer than the header are fatal; shorter rows are padded with
    /// nulls. Unparseable cells become null and are counted in the report.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<(Table, LoadReport), DataError> {
        self.config.validate()?;

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.config.delimiter_byte()?)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?
            .iter()
            .map(|s| s.to_string())
            .collect();
        let layout = ColumnLayout::resolve(&headers)?;

        let mut report = LoadReport::default();
        let mut records = Vec::new();

        for result in csv_reader.records() {
            let row = result?;

            if row.len() > layout.width {
                return Err(DataError::MalformedRow {
                    line: row.position().map(|p| p.line()).unwrap_or_default(),
                    expected: layout.width,
                    found: row.len(),
                });
            }

            match self.parse_row(&row, &layout, &mut report) {
                Some(record) => records.push(record),
                None => report.skipped_rows += 1,
            }
        }

        report.rows = records.len();
        Ok((Table::new(layout.extra_columns(), records), report))
    }

    /// Convert one CSV row; `None` when the row has no company
    fn parse_row(&self, row: &StringRecord, layout: &ColumnLayout, report: &mut LoadReport) -> Option<LayoffRecord> {
        let cell = |idx: usize| row.get(idx).and_then(|value| self.config.null_config.normalize(value));

        let company = cell(layout.company)?;
        let formats = &self.config.date_formats;

        let fields = RecordFields {
            company: company.to_string(),
            industry: cell(layout.industry).map(str::to_string),
            country: cell(layout.country).map(str::to_string),
            date: coerce(cell(layout.date), |v| parse_date(v, formats), &mut report.invalid_dates),
            total_laid_off: coerce(cell(layout.total_laid_off), parse_count, &mut report.invalid_numbers),
            percentage_laid_off: coerce(cell(layout.percentage_laid_off), parse_percentage, &mut report.invalid_numbers),
            funds_raised: coerce(cell(layout.funds_raised), parse_amount, &mut report.invalid_numbers),
            extra: layout.extra.iter()
                .map(|(idx, _)| cell(*idx).map(str::to_string))
                .collect(),
        };

        Some(LayoffRecord::new(fields))
    }
}

/// Parse a present cell, counting it when it cannot be coerced
fn coerce<T>(value: Option<&str>, parse: impl Fn(&str) -> Option<T>, invalid: &mut usize) -> Option<T> {
    let parsed = parse(value?);
    if parsed.is_none() {
        *invalid += 1;
    }
    parsed
}

impl RecordSource for CsvSource {
    fn load_with_report(&self) -> anyhow::Result<(Table, LoadReport)> {
        let (table, report) = self.read_table()?;

        info!("Loaded {} rows from {}", report.rows, self.source_name);
        if report.has_recoveries() {
            warn!(
                "Recovered {} unparseable dates and {} invalid numbers, skipped {} rows without a company",
                report.invalid_dates, report.invalid_numbers, report.skipped_rows
            );
        }

        Ok((table, report))
    }

    fn source_name(&self) -> &str {
        &self.source_name
    }
}
