//! Raw text input parsing.
//!
//! Turns the four values typed into the calculator form into [`GradeInputs`].
//! Range checks are left to the engine.

use crate::error::GradeError;
use crate::model::GradeInputs;

/// Parse the four calculator fields. Surrounding whitespace is ignored.
pub fn parse_inputs(
    attendance: &str,
    lab1: &str,
    lab2: &str,
    lab3: &str,
) -> Result<GradeInputs, GradeError> {
    Ok(GradeInputs {
        attendance: parse_count("attendance", attendance)?,
        lab1: parse_score("lab1", lab1)?,
        lab2: parse_score("lab2", lab2)?,
        lab3: parse_score("lab3", lab3)?,
    })
}

/// Parse an integer count such as attendance.
pub fn parse_count(field: &'static str, raw: &str) -> Result<i64, GradeError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GradeError::parse(field, trimmed))
}

/// Parse a real-valued score. Spellings like `NaN` or `inf` are rejected.
pub fn parse_score(field: &'static str, raw: &str) -> Result<f64, GradeError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GradeError::parse(field, trimmed)),
    }
}
