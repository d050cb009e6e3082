//! CSV adapter - Spreadsheet upload format for analysis inputs.

mod matrix_csv_parser;

pub use matrix_csv_parser::{parse_matrix_csv, CsvImportError, MATRIX_CSV_TEMPLATE};
