//! Tabular Parser Port - spreadsheet and CSV decoding.
//!
//! Both the question data file and user uploads are tabular. This port turns
//! raw file bytes into ordered column headers plus JSON-valued rows.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Port for decoding tabular files.
#[async_trait]
pub trait TabularParser: Send + Sync {
    /// Decodes `bytes`, choosing the format from `filename`'s extension.
    ///
    /// # Errors
    ///
    /// Returns `TabularError::UnsupportedFormat` for extensions other than
    /// `.csv`, `.xls` and `.xlsx`, and a parse error for corrupt content.
    async fn parse(&self, filename: &str, bytes: Vec<u8>) -> Result<TabularData, TabularError>;
}

/// Tabular formats accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabularFormat {
    Csv,
    Xls,
    Xlsx,
}

impl TabularFormat {
    /// Detects the format from a file name suffix.
    ///
    /// Matching is on the exact lowercase suffix, as the frontend only ever
    /// produces lowercase extensions.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".csv") {
            Some(TabularFormat::Csv)
        } else if filename.ends_with(".xlsx") {
            Some(TabularFormat::Xlsx)
        } else if filename.ends_with(".xls") {
            Some(TabularFormat::Xls)
        } else {
            None
        }
    }

    pub fn is_spreadsheet(&self) -> bool {
        matches!(self, TabularFormat::Xls | TabularFormat::Xlsx)
    }
}

/// Decoded table: header names in file order plus one map per data row.
///
/// Empty cells are `null`; numeric cells are JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

impl TabularData {
    /// Strips surrounding whitespace from every column name.
    pub fn with_trimmed_headers(self) -> Self {
        let columns = self.columns.iter().map(|c| c.trim().to_string()).collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(key, value)| (key.trim().to_string(), value))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Errors that can occur while decoding a tabular file.
#[derive(Debug, Clone, Error)]
pub enum TabularError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("CSV parse error: {0}")]
    Csv(String),

    #[error("Spreadsheet parse error: {0}")]
    Spreadsheet(String),

    #[error("Workbook contains no worksheets")]
    NoWorksheet,

    #[error("I/O error reading tabular data: {0}")]
    Io(String),
}

impl TabularError {
    pub fn csv(reason: impl Into<String>) -> Self {
        Self::Csv(reason.into())
    }

    pub fn spreadsheet(reason: impl Into<String>) -> Self {
        Self::Spreadsheet(reason.into())
    }

    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(TabularFormat::from_filename("q.csv"), Some(TabularFormat::Csv));
        assert_eq!(TabularFormat::from_filename("q.xlsx"), Some(TabularFormat::Xlsx));
        assert_eq!(TabularFormat::from_filename("q.xls"), Some(TabularFormat::Xls));
        assert_eq!(TabularFormat::from_filename("notes.txt"), None);
        assert_eq!(TabularFormat::from_filename("archive.xlsx.zip"), None);
        assert_eq!(TabularFormat::from_filename("csv"), None);
    }

    #[test]
    fn spreadsheet_formats_are_flagged() {
        assert!(TabularFormat::Xlsx.is_spreadsheet());
        assert!(TabularFormat::Xls.is_spreadsheet());
        assert!(!TabularFormat::Csv.is_spreadsheet());
    }

    #[test]
    fn trimmed_headers_apply_to_columns_and_rows() {
        let mut row = Map::new();
        row.insert(" Domain ".to_string(), json!("Privacy"));
        let data = TabularData {
            columns: vec![" Domain ".to_string()],
            rows: vec![row],
        }
        .with_trimmed_headers();

        assert_eq!(data.columns, vec!["Domain"]);
        assert_eq!(data.rows[0].get("Domain"), Some(&json!("Privacy")));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn tabular_error_displays_messages() {
        assert!(TabularError::csv("bad quote").to_string().contains("CSV parse error"));
        assert!(TabularError::NoWorksheet.to_string().contains("no worksheets"));
    }

    #[test]
    fn tabular_parser_is_object_safe() {
        fn check<T: TabularParser + ?Sized>() {}
        check::<dyn TabularParser>();
    }
}
