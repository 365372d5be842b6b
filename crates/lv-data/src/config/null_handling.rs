//! Missing-value markers recognized in source cells

use serde::{Serialize, Deserialize};

/// Markers the layoffs export uses for missing values
const DEFAULT_MARKERS: [&str; 7] = ["", "-", "N/A", "NA", "NaN", "null", "None"];

/// Rules for recognizing a missing cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullConfig {
    /// Cell contents read as missing
    pub patterns: Vec<String>,

    /// Trim surrounding whitespace before matching, and from kept values
    pub trim_whitespace: bool,

    /// Match markers case-sensitively
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Return the usable part of a raw cell, or `None` if it is a missing marker
    pub fn normalize<'a>(&self, value: &'a str) -> Option<&'a str> {
        let candidate = if self.trim_whitespace { value.trim() } else { value };
        let is_marker = |pattern: &String| match self.case_sensitive {
            true => candidate == pattern.as_str(),
            false => candidate.eq_ignore_ascii_case(pattern),
        };

        (!self.patterns.iter().any(is_marker)).then_some(candidate)
    }

    pub fn is_null(&self, value: &str) -> bool {
        self.normalize(value).is_none()
    }

    /// Register another marker; duplicates are ignored
    pub fn add_pattern(&mut self, pattern: impl Into<String>) {
        let pattern = pattern.into();
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }
}
