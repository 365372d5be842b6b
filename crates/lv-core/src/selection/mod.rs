//! Filter selection shared by every pipeline stage

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Errors raised when a filter selection is malformed
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Invalid filter selection: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Year range is inverted: {start} > {end}")]
    InvertedYearRange { start: i32, end: i32 },
}

/// The user's current year, industry and country selection
///
/// A missing or empty list applies no filter on that field. The JSON form is
/// `{"years": [..], "industries": [..], "countries": [..]}`; `null` and
/// missing keys both mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSelection {
    /// Selected years; matched as the range `[min, max]`
    #[serde(default)]
    pub years: Option<Vec<i32>>,

    /// Selected industries; exact, case-sensitive membership
    #[serde(default)]
    pub industries: Option<Vec<String>>,

    /// Selected countries; exact, case-sensitive membership
    #[serde(default)]
    pub countries: Option<Vec<String>>,
}

impl FilterSelection {
    /// Selection that matches every row
    pub fn all() -> Self {
        Self::default()
    }

    /// Selection covering every year in `start..=end`, as set by a range slider
    pub fn from_year_range(start: i32, end: i32) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::InvertedYearRange { start, end });
        }
        Ok(Self::all().with_years(start..=end))
    }

    /// Parse a selection from its JSON form
    pub fn from_json(json: &str) -> Result<Self, SelectionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = Some(years.into_iter().collect());
        self
    }

    pub fn with_industries<S: Into<String>>(mut self, industries: impl IntoIterator<Item = S>) -> Self {
        self.industries = Some(industries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_countries<S: Into<String>>(mut self, countries: impl IntoIterator<Item = S>) -> Self {
        self.countries = Some(countries.into_iter().map(Into::into).collect());
        self
    }

    /// Effective inclusive year range, if a year filter is active
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years = self.years.as_deref()?;
        let min = years.iter().copied().min()?;
        let max = years.iter().copied().max()?;
        Some((min, max))
    }

    /// Active industry list, if any
    pub fn active_industries(&self) -> Option<&[String]> {
        self.industries.as_deref().filter(|list| !list.is_empty())
    }

    /// Active country list, if any
    pub fn active_countries(&self) -> Option<&[String]> {
        self.countries.as_deref().filter(|list| !list.is_empty())
    }

    /// Whether this selection filters nothing
    pub fn is_unfiltered(&self) -> bool {
        self.year_range().is_none()
            && self.active_industries().is_none()
            && self.active_countries().is_none()
    }
}
