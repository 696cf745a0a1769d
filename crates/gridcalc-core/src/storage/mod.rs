//! Tabular text storage: whitespace-separated rows of cell tokens.

pub mod parser;
pub mod writer;

pub use parser::{parse_sheet, parse_sheet_content, parse_sheet_content_with};
pub use writer::{write_sheet, write_sheet_content};
