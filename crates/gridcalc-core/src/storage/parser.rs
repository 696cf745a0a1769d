//! Parser for the tabular sheet format.
//!
//! One sheet row per line; cells separated by runs of whitespace; blank
//! lines are skipped. Tokens are classified by [`Cell::from_token_with`] and
//! nothing is rejected at this layer — an unrecognized token becomes a cell
//! that resolves to `#INVVAL` at evaluation time.

use crate::error::Result;
use gridcalc_engine::engine::{Cell, ParsePolicy, Sheet};
use std::fs;
use std::path::Path;

/// Parse a sheet file.
pub fn parse_sheet(path: &Path) -> Result<Sheet> {
    let content = fs::read_to_string(path)?;
    Ok(parse_sheet_content(&content))
}

/// Parse sheet content from a string with the default token policy.
pub fn parse_sheet_content(content: &str) -> Sheet {
    parse_sheet_content_with(content, ParsePolicy::default())
}

/// Parse sheet content, classifying tokens under `policy`.
pub fn parse_sheet_content_with(content: &str, policy: ParsePolicy) -> Sheet {
    let mut sheet = Sheet::new();

    for line in content.lines() {
        let cells: Vec<Cell> = line
            .split_whitespace()
            .map(|token| Cell::from_token_with(token, policy))
            .collect();

        if cells.is_empty() {
            continue;
        }
        sheet.add_row(cells);
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcalc_engine::engine::{Address, RawValue};

    #[test]
    fn test_parse_rows_and_columns() {
        let sheet = parse_sheet_content("1 2 3\n4 5\n");
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.row_width(0), 3);
        assert_eq!(sheet.row_width(1), 2);
        assert_eq!(
            sheet.get(&Address::new(1, 1)).unwrap().raw,
            RawValue::Literal(5)
        );
    }

    #[test]
    fn test_parse_classifies_tokens() {
        let sheet = parse_sheet_content("42 [] =A1+B1 autobus");
        assert_eq!(
            sheet.get(&Address::new(0, 0)).unwrap().raw,
            RawValue::Literal(42)
        );
        assert_eq!(sheet.get(&Address::new(0, 1)).unwrap().raw, RawValue::Empty);
        assert_eq!(
            sheet.get(&Address::new(0, 2)).unwrap().raw,
            RawValue::Formula("A1+B1".to_string())
        );
        assert_eq!(
            sheet.get(&Address::new(0, 3)).unwrap().raw,
            RawValue::Invalid("autobus".to_string())
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let sheet = parse_sheet_content("1 2\n\n   \n3 4\n");
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(
            sheet.get(&Address::new(1, 0)).unwrap().raw,
            RawValue::Literal(3)
        );
    }

    #[test]
    fn test_parse_splits_on_runs_of_whitespace() {
        let sheet = parse_sheet_content("1\t\t2   3");
        assert_eq!(sheet.row_width(0), 3);
    }

    #[test]
    fn test_parse_with_negative_literal_policy() {
        let policy = ParsePolicy {
            accept_negative_literals: true,
        };
        let sheet = parse_sheet_content_with("-2", policy);
        assert_eq!(
            sheet.get(&Address::new(0, 0)).unwrap().raw,
            RawValue::Literal(-2)
        );
    }

    #[test]
    fn test_parse_empty_content() {
        let sheet = parse_sheet_content("");
        assert!(sheet.is_empty());
        assert_eq!(sheet.row_count(), 0);
    }
}
