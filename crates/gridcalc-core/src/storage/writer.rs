//! Writer for the tabular sheet format.
//!
//! Renders a sheet back in the shape it was loaded in: one line per row,
//! cell display strings space-joined, no trailing whitespace.

use crate::error::Result;
use gridcalc_engine::engine::{Address, Sheet};
use std::fs;
use std::path::Path;

/// Write an evaluated sheet to a file.
pub fn write_sheet(path: &Path, sheet: &Sheet) -> Result<()> {
    fs::write(path, write_sheet_content(sheet))?;
    Ok(())
}

/// Render an evaluated sheet as tabular text.
pub fn write_sheet_content(sheet: &Sheet) -> String {
    let mut out = String::new();

    for row in 0..sheet.row_count() {
        let fields: Vec<String> = (0..sheet.row_width(row))
            .map(|col| {
                sheet
                    .get(&Address::new(row, col))
                    .map(|cell| cell.display())
                    .unwrap_or_default()
            })
            .collect();
        out.push_str(&fields.join(" "));
        out.push('\n');
    }

    out
}
