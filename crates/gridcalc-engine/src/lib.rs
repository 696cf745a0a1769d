//! gridcalc-engine - spreadsheet cell-evaluation engine.

pub mod engine;

pub use engine::{Address, Cell, ErrorKind, EvalState, Grid, ParsePolicy, RawValue, Sheet};
