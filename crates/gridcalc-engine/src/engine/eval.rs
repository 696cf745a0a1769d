//! Lazy recursive cell evaluation with cycle detection.
//!
//! The dependency graph is never materialized as nodes and edges. Each cell
//! carries a tri-state visitation flag ([`EvalState`]), and a formula
//! resolves its operand addresses through the owning [`Sheet`] at evaluation
//! time. Re-entering a cell that is still `InProgress` is the cycle signal:
//! the recursion reached a cell it is in the middle of evaluating.
//!
//! Evaluation is single-threaded and depth-first; recursion depth is bounded
//! by the longest dependency chain.

use super::address::Address;
use super::cell::{ErrorKind, EvalState, OPERATORS, RawValue};
use super::sheet::Sheet;

/// Evaluate the cell at `addr`, resolving formula operands recursively.
///
/// Idempotent: once a cell is `Done` the cached result stands and no
/// recursive work happens, even across separate calls. Absent addresses are
/// a no-op.
pub fn evaluate(sheet: &Sheet, addr: &Address) {
    let raw = {
        let Some(mut cell) = sheet.grid().get_mut(addr) else {
            return;
        };
        match cell.state {
            // Re-entered while still evaluating: a cycle. The outer frame
            // for this cell finishes the state transition.
            EvalState::InProgress => {
                cell.error = Some(ErrorKind::Cycle);
                return;
            }
            EvalState::Done => return,
            EvalState::Unvisited => {}
        }
        cell.state = EvalState::InProgress;
        cell.raw.clone()
        // Guard dropped here; operand recursion needs the map unlocked.
    };

    let outcome = match &raw {
        RawValue::Empty => Ok(0),
        RawValue::Literal(n) => Ok(*n),
        RawValue::Invalid(_) => Err(ErrorKind::InvalidValue),
        RawValue::Formula(body) => eval_formula(sheet, body),
    };

    if let Some(mut cell) = sheet.grid().get_mut(addr) {
        match outcome {
            Ok(n) => cell.value = n,
            Err(kind) => cell.error = Some(kind),
        }
        cell.state = EvalState::Done;
    }
}

/// Resolve a formula body of the form `<address><op><address>`.
fn eval_formula(sheet: &Sheet, body: &str) -> Result<i32, ErrorKind> {
    let mut ops = body.char_indices().filter(|(_, ch)| OPERATORS.contains(ch));
    let Some((split, op)) = ops.next() else {
        return Err(ErrorKind::MissingOperator);
    };
    if ops.next().is_some() {
        // More than one operator: not a two-operand formula.
        return Err(ErrorKind::InvalidFormula);
    }

    let lhs = Address::parse(&body[..split]).ok_or(ErrorKind::InvalidFormula)?;
    let rhs = Address::parse(&body[split + op.len_utf8()..]).ok_or(ErrorKind::InvalidFormula)?;

    // Operand 2 is only touched after operand 1 resolves cleanly.
    let a = eval_operand(sheet, &lhs)?;
    let b = eval_operand(sheet, &rhs)?;

    match op {
        '+' => Ok(a.wrapping_add(b)),
        '-' => Ok(a.wrapping_sub(b)),
        '*' => Ok(a.wrapping_mul(b)),
        '/' if b == 0 => Err(ErrorKind::DivisionByZero),
        '/' => Ok(a.wrapping_div(b)),
        _ => Err(ErrorKind::InvalidFormula),
    }
}

/// Resolve one formula operand to its numeric value.
///
/// - An absent address reads as 0.
/// - An already-`Done` cell yields its cached value, or generic `Error` if
///   it failed — including a previously recorded `Cycle`: from this path the
///   operand is an already-resolved erroneous value, not participation in
///   the cycle.
/// - Otherwise the operand is evaluated here, and a `Cycle` discovered
///   during that first visit propagates as `Cycle`.
fn eval_operand(sheet: &Sheet, addr: &Address) -> Result<i32, ErrorKind> {
    let Some(cell) = sheet.get(addr) else {
        return Ok(0);
    };
    if cell.state == EvalState::Done {
        return if cell.is_error() {
            Err(ErrorKind::Error)
        } else {
            Ok(cell.value)
        };
    }

    evaluate(sheet, addr);

    let Some(cell) = sheet.get(addr) else {
        return Ok(0);
    };
    match cell.error {
        Some(ErrorKind::Cycle) => Err(ErrorKind::Cycle),
        Some(_) => Err(ErrorKind::Error),
        None => Ok(cell.value),
    }
}
