//! Layoff records and the calendar fields derived from their dates

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Deserialize};

/// English month abbreviations, indexed by `month - 1`
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar fields derived once from a record's date
///
/// Ordering is chronological: `year` then `month`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Calendar year
    pub year: i32,

    /// Month number, 1 to 12
    pub month: u32,

    /// Three-letter month abbreviation
    pub month_name: String,

    /// Sortable `YYYY-MM` key
    pub year_month: String,
}

impl Period {
    /// Derive the period a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        let month = date.month();
        Self {
            year,
            month,
            month_name: MONTH_NAMES[month as usize - 1].to_string(),
            year_month: format!("{:04}-{:02}", year, month),
        }
    }

    /// Axis label such as `Jan 2022`
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name, self.year)
    }
}

/// Raw field values used to build a [`LayoffRecord`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFields {
    pub company: String,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub date: Option<NaiveDate>,
    pub total_laid_off: Option<u64>,
    pub percentage_laid_off: Option<f64>,
    pub funds_raised: Option<f64>,
    /// Values of the source columns beyond the known ones, in header order
    pub extra: Vec<Option<String>>,
}

impl RecordFields {
    /// Start a record for a company with every other field missing
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the date from calendar parts; an invalid date leaves it missing
    pub fn ymd(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn laid_off(mut self, total: u64) -> Self {
        self.total_laid_off = Some(total);
        self
    }

    pub fn percentage(mut self, percentage: f64) -> Self {
        self.percentage_laid_off = Some(percentage);
        self
    }

    pub fn funds_raised(mut self, funds: f64) -> Self {
        self.funds_raised = Some(funds);
        self
    }

    /// Finish the record, deriving its calendar fields
    pub fn build(self) -> LayoffRecord {
        LayoffRecord::new(self)
    }
}

/// One row of the layoffs table
///
/// Fields are read-only; the derived [`Period`] is computed once at
/// construction so it always agrees with `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoffRecord {
    fields: RecordFields,
    period: Option<Period>,
}

impl LayoffRecord {
    /// Build a record and derive its calendar fields
    pub fn new(fields: RecordFields) -> Self {
        let period = fields.date.map(Period::from_date);
        Self { fields, period }
    }

    pub fn company(&self) -> &str {
        &self.fields.company
    }

    pub fn industry(&self) -> Option<&str> {
        self.fields.industry.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.fields.country.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.fields.date
    }

    pub fn total_laid_off(&self) -> Option<u64> {
        self.fields.total_laid_off
    }

    pub fn percentage_laid_off(&self) -> Option<f64> {
        self.fields.percentage_laid_off
    }

    pub fn funds_raised(&self) -> Option<f64> {
        self.fields.funds_raised
    }

    /// Extra source columns, aligned with [`crate::Table::extra_columns`]
    pub fn extra(&self) -> &[Option<String>] {
        &self.fields.extra
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn year(&self) -> Option<i32> {
        self.period.as_ref().map(|p| p.year)
    }

    pub fn month(&self) -> Option<u32> {
        self.period.as_ref().map(|p| p.month)
    }

    pub fn month_name(&self) -> Option<&str> {
        self.period.as_ref().map(|p| p.month_name.as_str())
    }

    pub fn year_month(&self) -> Option<&str> {
        self.period.as_ref().map(|p| p.year_month.as_str())
    }

    /// Layoff count with missing values counted as zero
    pub fn laid_off_or_zero(&self) -> u64 {
        self.fields.total_laid_off.unwrap_or(0)
    }
}
