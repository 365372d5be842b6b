//! Header layout of the layoffs file

use crate::DataError;

pub const COMPANY: &str = "company";
pub const INDUSTRY: &str = "industry";
pub const COUNTRY: &str = "country";
pub const DATE: &str = "date";
pub const TOTAL_LAID_OFF: &str = "total_laid_off";
pub const PERCENTAGE_LAID_OFF: &str = "percentage_laid_off";
pub const FUNDS_RAISED: &str = "funds_raised";

/// Columns every source file must provide
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COMPANY,
    INDUSTRY,
    COUNTRY,
    DATE,
    TOTAL_LAID_OFF,
    PERCENTAGE_LAID_OFF,
    FUNDS_RAISED,
];

/// Positions of the known columns within a header, plus any extra columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub company: usize,
    pub industry: usize,
    pub country: usize,
    pub date: usize,
    pub total_laid_off: usize,
    pub percentage_laid_off: usize,
    pub funds_raised: usize,
    /// Unknown columns as `(position, name)`, in header order
    pub extra: Vec<(usize, String)>,
    /// Number of header fields
    pub width: usize,
}

impl ColumnLayout {
    /// Resolve the layout of a header row
    ///
    /// Names are compared after trimming. When a name repeats, the first
    /// occurrence wins and later ones are carried as extra columns.
    pub fn resolve(headers: &[String]) -> Result<Self, DataError> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS.iter()
            .copied()
            .filter(|name| position(*name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataError::MissingColumns(missing));
        }

        let locate = |name: &str| position(name).ok_or_else(|| DataError::MissingColumns(vec![name.to_string()]));
        let mut layout = Self {
            company: locate(COMPANY)?,
            industry: locate(INDUSTRY)?,
            country: locate(COUNTRY)?,
            date: locate(DATE)?,
            total_laid_off: locate(TOTAL_LAID_OFF)?,
            percentage_laid_off: locate(PERCENTAGE_LAID_OFF)?,
            funds_raised: locate(FUNDS_RAISED)?,
            extra: Vec::new(),
            width: headers.len(),
        };

        let known = layout.known_positions();
        layout.extra = headers.iter()
            .enumerate()
            .filter(|(idx, _)| !known.contains(idx))
            .map(|(idx, name)| (idx, name.trim().to_string()))
            .collect();

        Ok(layout)
    }

    /// Names of the extra columns, in header order
    pub fn extra_columns(&self) -> Vec<String> {
        self.extra.iter().map(|(_, name)| name.clone()).collect()
    }

    fn known_positions(&self) -> [usize; 7] {
        [
            self.company,
            self.industry,
            self.country,
            self.date,
            self.total_laid_off,
            self.percentage_laid_off,
            self.funds_raised,
        ]
    }
}
