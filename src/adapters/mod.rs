//! Adapters - Connect the analysis core to the outside world.
//!
//! - `csv` - Spreadsheet upload format
//! - `http` - REST API

pub mod csv;
pub mod http;
