//! Columnar export of a table as an Arrow record batch

use std::sync::Arc;
use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::Datelike;

use lv_core::Table;

use crate::schema::{COMPANY, COUNTRY, DATE, FUNDS_RAISED, INDUSTRY, PERCENTAGE_LAID_OFF, TOTAL_LAID_OFF};
use crate::DataError;

/// Days from 0001-01-01 to 1970-01-01, for Date32 values
const UNIX_EPOCH_FROM_CE: i32 = 719_163;

/// Build the Arrow schema for a table: known columns, derived calendar
/// columns, then extra columns as nullable strings
pub fn table_schema(table: &Table) -> Schema {
    let mut fields = vec![
        Field::new(COMPANY, DataType::Utf8, false),
        Field::new(INDUSTRY, DataType::Utf8, true),
        Field::new(COUNTRY, DataType::Utf8, true),
        Field::new(DATE, DataType::Date32, true),
        Field::new(TOTAL_LAID_OFF, DataType::UInt64, true),
        Field::new(PERCENTAGE_LAID_OFF, DataType::Float64, true),
        Field::new(FUNDS_RAISED, DataType::Float64, true),
        Field::new("year", DataType::Int32, true),
        Field::new("month", DataType::UInt32, true),
        Field::new("month_name", DataType::Utf8, true),
        Field::new("year_month", DataType::Utf8, true),
    ];
    fields.extend(table.extra_columns().iter().map(|name| Field::new(name, DataType::Utf8, true)));
    Schema::new(fields)
}

/// Convert a table into a single record batch, preserving row order
pub fn table_to_record_batch(table: &Table) -> Result<RecordBatch, DataError> {
    let mut company = StringBuilder::new();
    let mut industry = StringBuilder::new();
    let mut country = StringBuilder::new();
    let mut date = Date32Builder::new();
    let mut total_laid_off = UInt64Builder::new();
    let mut percentage_laid_off = Float64Builder::new();
    let mut funds_raised = Float64Builder::new();
    let mut year = Int32Builder::new();
    let mut month = UInt32Builder::new();
    let mut month_name = StringBuilder::new();
    let mut year_month = StringBuilder::new();
    let mut extra: Vec<StringBuilder> = table.extra_columns().iter().map(|_| StringBuilder::new()).collect();

    for record in table.iter() {
        company.append_value(record.company());
        industry.append_option(record.industry());
        country.append_option(record.country());
        date.append_option(record.date().map(|d| d.num_days_from_ce() - UNIX_EPOCH_FROM_CE));
        total_laid_off.append_option(record.total_laid_off());
        percentage_laid_off.append_option(record.percentage_laid_off());
        funds_raised.append_option(record.funds_raised());
        year.append_option(record.year());
        month.append_option(record.month());
        month_name.append_option(record.month_name());
        year_month.append_option(record.year_month());

        for (idx, builder) in extra.iter_mut().enumerate() {
            builder.append_option(record.extra().get(idx).and_then(|v| v.as_deref()));
        }
    }

    let mut columns: Vec<ArrayRef> = vec![
        Arc::new(company.finish()),
        Arc::new(industry.finish()),
        Arc::new(country.finish()),
        Arc::new(date.finish()),
        Arc::new(total_laid_off.finish()),
        Arc::new(percentage_laid_off.finish()),
        Arc::new(funds_raised.finish()),
        Arc::new(year.finish()),
        Arc::new(month.finish()),
        Arc::new(month_name.finish()),
        Arc::new(year_month.finish()),
    ];
    columns.extend(extra.iter_mut().map(|builder| Arc::new(builder.finish()) as ArrayRef));

    RecordBatch::try_new(Arc::new(table_schema(table)), columns).map_err(|e| e.into())
}
