//! Spreadsheet import for the risk workbook

mod alternatives;
mod reader;
mod tools;
mod values;

pub use reader::Workbook;
