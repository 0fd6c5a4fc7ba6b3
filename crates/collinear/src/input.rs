//! Loosely-typed input boundary.
//!
//! Purpose
//! - Callers holding untyped data (JSON documents, scripting bridges,
//!   config payloads) get the full input contract here: missing input, a
//!   wrong container type, and malformed elements are reported as distinct
//!   error kinds, failing fast on the first offender. Validated input flows
//!   into the typed finder.
//! - Insufficient-but-valid input (fewer than three distinct points) is a
//!   valid empty result, never an error.

use nalgebra::Vector2;
use serde_json::Value;
use thiserror::Error;

use crate::lines::find_lines;

/// Input contract violations, precise enough for callers to react
/// differently to each kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Required input is absent.
    #[error("input is required")]
    Missing,
    /// Input is not a sequence of points.
    #[error("expected a list of points, got {found}")]
    NotAList { found: &'static str },
    /// An element is not a pair of numbers.
    #[error("point {index}: {issue}")]
    Element { index: usize, issue: ElementIssue },
}

/// Why a single element failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ElementIssue {
    #[error("expected a coordinate pair, got a non-sequence value")]
    NotAPair,
    #[error("too few coordinate components ({0} of 2)")]
    TooFewCoords(usize),
    #[error("too many coordinate components ({0}, expected 2)")]
    TooManyCoords(usize),
    #[error("non-numeric coordinate component")]
    NonNumeric,
}

/// Find the lines through three or more of the given points, validating a
/// loosely-typed input first.
///
/// Result pairs are `(slope, intercept)`, with `(f64::INFINITY, x)`
/// encoding the vertical line at `x`. An empty input list short-circuits
/// element validation and yields an empty result, as does any input with
/// fewer than three distinct points. Integer coordinates beyond 2^53
/// coerce through f64 and lose precision.
pub fn find_lines_value(input: Option<&Value>) -> Result<Vec<(f64, f64)>, InputError> {
    let value = input.ok_or(InputError::Missing)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(InputError::NotAList {
                found: type_name(other),
            })
        }
    };
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let mut points = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let point = point_of(item).map_err(|issue| InputError::Element { index, issue })?;
        points.push(point);
    }
    Ok(find_lines(&points)
        .into_iter()
        .map(|line| line.as_pair())
        .collect())
}

fn point_of(item: &Value) -> Result<Vector2<f64>, ElementIssue> {
    let coords = match item {
        Value::Array(coords) => coords,
        _ => return Err(ElementIssue::NotAPair),
    };
    match coords.as_slice() {
        [x, y] => Ok(Vector2::new(number(x)?, number(y)?)),
        short if short.len() < 2 => Err(ElementIssue::TooFewCoords(short.len())),
        long => Err(ElementIssue::TooManyCoords(long.len())),
    }
}

fn number(v: &Value) -> Result<f64, ElementIssue> {
    v.as_f64().ok_or(ElementIssue::NonNumeric)
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
