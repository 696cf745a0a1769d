//! Spreadsheet engine API.
//!
//! This module provides the core computation engine:
//!
//! - [`Address`] - Cell address parsing (A1 notation ↔ row/col indices)
//! - [`Cell`], [`RawValue`], [`ErrorKind`], [`Grid`] - Data structures for cell storage
//! - [`Sheet`] - Address-keyed cell container
//! - [`evaluate`] - Lazy recursive evaluation with cycle detection

mod address;
mod cell;
mod eval;
mod sheet;

pub use address::Address;
pub use cell::{Cell, ErrorKind, EvalState, Grid, ParsePolicy, RawValue, EMPTY_MARKER, OPERATORS};
pub use eval::evaluate;
pub use sheet::Sheet;
