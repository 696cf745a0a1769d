//! Cell address parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style addresses
//! (e.g., "A1", "B2", "AA100") and zero-indexed row/column coordinates.
//! Columns use bijective base-26 (A=1, ..., Z=26, AA=27) with no zero letter,
//! matching spreadsheet column naming.
//!
//! # Examples
//!
//! ```
//! use gridcalc_engine::engine::Address;
//!
//! let addr = Address::parse("b3").unwrap();
//! assert_eq!(addr.row, 2); // 0-indexed
//! assert_eq!(addr.col, 1);
//! assert_eq!(addr.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A cell position by row and column indices (0-indexed).
///
/// Field order matters: the derived `Ord` sorts row-major.
#[derive(
    Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Address {
    pub row: usize,
    pub col: usize,
}

impl Address {
    pub fn new(row: usize, col: usize) -> Address {
        Address { row, col }
    }

    /// Parse an address from spreadsheet notation (e.g., "A1", "b2", "AA10").
    /// Column letters are case-insensitive; the row number is 1-based.
    /// Returns None if the input is invalid.
    pub fn parse(name: &str) -> Option<Address> {
        let caps = address_re().captures(name)?;
        let letters = &caps["letters"];
        let digits = &caps["digits"];

        let mut col_acc = 0usize;
        for c in letters.to_ascii_uppercase().bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        let col = col_acc.checked_sub(1)?;

        // Row "0" has no 0-indexed counterpart.
        let row = digits.parse::<usize>().ok()?.checked_sub(1)?;

        Some(Address::new(row, col))
    }

    /// Convert a column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

fn address_re() -> &'static Regex {
    static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();
    ADDRESS_RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]+)(?<digits>[0-9]+)$")
            .expect("address regex must compile")
    })
}

impl std::str::FromStr for Address {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid cell address: {}", s))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Address::col_to_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_and_multi_letter_columns() {
        assert_eq!(Address::new(0, 0).to_string(), "A1");
        assert_eq!(Address::new(0, 25).to_string(), "Z1");
        assert_eq!(Address::new(0, 26).to_string(), "AA1");
        assert_eq!(Address::new(0, 702).to_string(), "AAA1");
        assert_eq!(Address::new(9, 1).to_string(), "B10");
    }

    #[test]
    fn test_parse_round_trip() {
        for addr in [
            Address::new(0, 0),
            Address::new(0, 25),
            Address::new(0, 26),
            Address::new(41, 701),
            Address::new(999, 702),
        ] {
            assert_eq!(Address::parse(&addr.to_string()), Some(addr));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Address::parse("aa10"), Address::parse("AA10"));
        assert_eq!(Address::parse("b3"), Some(Address::new(2, 1)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(Address::parse(""), None);
        assert_eq!(Address::parse("A"), None);
        assert_eq!(Address::parse("1"), None);
        assert_eq!(Address::parse("1A"), None);
        assert_eq!(Address::parse("A1B"), None);
        assert_eq!(Address::parse("A 1"), None);
        assert_eq!(Address::parse("A+1"), None);
        assert_eq!(Address::parse("A-1"), None);
    }

    #[test]
    fn test_parse_rejects_row_zero() {
        assert_eq!(Address::parse("A0"), None);
    }

    #[test]
    fn test_parse_rejects_column_overflow() {
        // A letter run too long for a usize column index must parse as
        // invalid, not panic or wrap.
        let name = format!("{}1", "A".repeat(20));
        assert_eq!(Address::parse(&name), None);
        let name = format!("{}1", "Z".repeat(64));
        assert_eq!(Address::parse(&name), None);
    }

    #[test]
    fn test_ord_is_row_major() {
        let mut addrs = vec![
            Address::new(1, 0),
            Address::new(0, 2),
            Address::new(0, 0),
            Address::new(1, 1),
        ];
        addrs.sort();
        assert_eq!(
            addrs,
            vec![
                Address::new(0, 0),
                Address::new(0, 2),
                Address::new(1, 0),
                Address::new(1, 1),
            ]
        );
    }
}
