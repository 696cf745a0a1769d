//! Cell data structures for the evaluation grid.
//!
//! This module provides the core data types for representing cells:
//! - [`RawValue`] - The loaded content of a cell (empty marker, integer
//!   literal, formula, or unrecognized text)
//! - [`ErrorKind`] - The in-band evaluation error taxonomy and its `#…`
//!   display codes
//! - [`EvalState`] - Per-cell visitation flag driving memoization and cycle
//!   detection
//! - [`Cell`] - A cell with raw content, resolved value, and evaluation state
//! - [`Grid`] - Sparse storage for cells (backed by `DashMap`)

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::address::Address;

/// Literal token marking an explicitly empty cell.
pub const EMPTY_MARKER: &str = "[]";

/// Operator characters recognized inside a formula body.
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// The content of a cell, classified once at load time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawValue {
    /// The `[]` marker. Displays as itself; reads as 0 when used as an operand.
    Empty,
    Literal(i32),
    /// Formula body with the leading `=` stripped.
    Formula(String),
    /// A token that is neither numeric, the empty marker, nor a formula.
    Invalid(String),
}

/// Evaluation failure kinds. These are cell results, not process errors:
/// each renders as a display code in the output table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// An operand carried an already-resolved error.
    Error,
    /// Division with a right operand of 0.
    DivisionByZero,
    /// Evaluation re-entered a cell that was still being evaluated.
    Cycle,
    /// Formula body contains no operator.
    MissingOperator,
    /// Formula body has more than one operator or a malformed operand address.
    InvalidFormula,
    /// Raw cell value could not be classified.
    InvalidValue,
}

impl ErrorKind {
    /// The code written to the output table in place of a value.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Error => "#ERROR",
            ErrorKind::DivisionByZero => "#DIV0",
            ErrorKind::Cycle => "#CYCLE",
            ErrorKind::MissingOperator => "#MISSOP",
            ErrorKind::InvalidFormula => "#FORMULA",
            ErrorKind::InvalidValue => "#INVVAL",
        }
    }
}

/// Per-cell tri-state visitation flag.
///
/// Every cell transitions `Unvisited` → `InProgress` → `Done` exactly once;
/// re-entering an `InProgress` cell is the cycle signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalState {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// Token classification policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParsePolicy {
    /// Accept a leading `-` on integer literals. Off by default: the
    /// reference behavior treats `-2` as `#INVVAL`.
    pub accept_negative_literals: bool,
}

/// A cell in the evaluation grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub raw: RawValue,
    /// Resolved numeric value; meaningful once `state` is `Done` and `error`
    /// is `None`. The empty marker resolves to 0.
    pub value: i32,
    pub error: Option<ErrorKind>,
    pub state: EvalState,
}

impl Cell {
    pub fn new(raw: RawValue) -> Cell {
        let value = match raw {
            RawValue::Literal(n) => n,
            _ => 0,
        };
        Cell {
            raw,
            value,
            error: None,
            state: EvalState::Unvisited,
        }
    }

    pub fn new_empty() -> Cell {
        Cell::new(RawValue::Empty)
    }

    pub fn new_literal(n: i32) -> Cell {
        Cell::new(RawValue::Literal(n))
    }

    /// Create a formula cell from its body (the text after `=`).
    pub fn new_formula(body: &str) -> Cell {
        Cell::new(RawValue::Formula(body.to_string()))
    }

    /// Classify a raw input token with the default policy.
    pub fn from_token(token: &str) -> Cell {
        Cell::from_token_with(token, ParsePolicy::default())
    }

    /// Classify a raw input token into a cell:
    /// - `[]` -> Empty
    /// - integer string -> Literal (negatives subject to `policy`)
    /// - leading `=` -> Formula (body without the `=`)
    /// - anything else -> Invalid
    pub fn from_token_with(token: &str, policy: ParsePolicy) -> Cell {
        if token == EMPTY_MARKER {
            return Cell::new_empty();
        }
        if let Ok(n) = token.parse::<i32>() {
            if policy.accept_negative_literals || !token.starts_with('-') {
                return Cell::new_literal(n);
            }
            return Cell::new(RawValue::Invalid(token.to_string()));
        }
        if let Some(body) = token.strip_prefix('=') {
            return Cell::new_formula(body);
        }
        Cell::new(RawValue::Invalid(token.to_string()))
    }

    pub fn is_done(&self) -> bool {
        self.state == EvalState::Done
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Display string for the output table: the error code, the empty
    /// marker, or the resolved integer.
    pub fn display(&self) -> String {
        if let Some(err) = self.error {
            return err.code().to_string();
        }
        match self.raw {
            RawValue::Empty => EMPTY_MARKER.to_string(),
            _ => self.value.to_string(),
        }
    }
}

/// Thread-safe sparse grid storage (`DashMap` is internally Arc-based,
/// clones are cheap).
pub type Grid = Arc<DashMap<Address, Cell>>;
