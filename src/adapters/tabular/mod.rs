//! Tabular adapters - spreadsheet and CSV decoding.

mod spreadsheet_parser;

pub use spreadsheet_parser::SpreadsheetParser;
