//! Grade input error types.
//!
//! Both kinds are recoverable: the caller reports them to the user and asks
//! for new input. No computation happens after either one.

use thiserror::Error;

/// Errors raised while turning user input into a grade calculation or a
/// record-table edit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A value was missing or not a number.
    #[error("invalid {field}: '{value}' is not a valid number")]
    Parse { field: &'static str, value: String },

    /// A value parsed but falls outside its allowed range.
    #[error("{field} {message}")]
    Validation { field: String, message: String },
}

impl GradeError {
    pub fn parse(field: &'static str, value: impl Into<String>) -> Self {
        GradeError::Parse {
            field,
            value: value.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GradeError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            GradeError::Parse { field, .. } => *field,
            GradeError::Validation { field, .. } => field.as_str(),
        }
    }

    /// Returns `true` for range/identity failures as opposed to unparseable text.
    pub fn is_validation(&self) -> bool {
        matches!(self, GradeError::Validation { .. })
    }
}
