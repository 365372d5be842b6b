//! Configuration for loading the layoffs file

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use super::null_handling::NullConfig;
use crate::DataError;

/// Default location of the dataset, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/layoffs.csv";

/// Date formats tried in order after RFC 3339
pub const DEFAULT_DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Configuration for reading the source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Path to the file
    pub path: PathBuf,
    
    /// Field delimiter
    pub delimiter: char,
    
    /// Null handling configuration
    pub null_config: NullConfig,
    
    /// `chrono` format strings tried when parsing dates
    pub date_formats: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            delimiter: ',',
            null_config: NullConfig::default(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl LoaderConfig {
    /// Create a configuration for a file with default parsing rules
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
    
    /// Read a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| DataError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }
    
    /// Check that the configuration can drive the CSV reader
    pub fn validate(&self) -> Result<(), DataError> {
        self.delimiter_byte()?;
        if self.date_formats.is_empty() {
            return Err(DataError::Config("at least one date format is required".to_string()));
        }
        Ok(())
    }
    
    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, DataError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| DataError::Config(format!("delimiter {:?} is not ASCII", self.delimiter)))
    }
    
    /// Get the file name
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    
    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        
        assert_eq!(config.file_name(), "layoffs.csv");
        assert_eq!(config.delimiter_byte().unwrap(), b',');
        assert!(config.validate().is_ok());
    }
    
    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"path": "other.csv", "delimiter": ";"}}"#).unwrap();
        
        let config = LoaderConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.path, PathBuf::from("other.csv"));
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.null_config, NullConfig::default());
        assert_eq!(config.date_formats.len(), DEFAULT_DATE_FORMATS.len());
    }
    
    #[test]
    fn test_rejects_bad_config() {
        let config = LoaderConfig {
            delimiter: '→',
            ..LoaderConfig::default()
        };
        assert!(matches!(config.validate(), Err(DataError::Config(_))));
        
        let config = LoaderConfig {
            date_formats: Vec::new(),
            ..LoaderConfig::default()
        };
        assert!(matches!(config.validate(), Err(DataError::Config(_))));
    }
}
