//! Core data model types for gradecalc.
//!
//! These are the values passed between the form shell, the engine, and the
//! report shell.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GradeError;

/// Lowest accepted lab score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted lab score, and the ceiling of a prelim exam.
pub const MAX_SCORE: f64 = 100.0;

/// Raw figures for one grade calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeInputs {
    /// Number of attended sessions.
    pub attendance: i64,
    pub lab1: f64,
    pub lab2: f64,
    pub lab3: f64,
}

impl GradeInputs {
    pub fn new(attendance: i64, lab1: f64, lab2: f64, lab3: f64) -> Self {
        Self {
            attendance,
            lab1,
            lab2,
            lab3,
        }
    }

    /// Check every field, reporting the first failure in form order.
    pub fn validate(&self) -> Result<(), GradeError> {
        if self.attendance < 0 {
            return Err(GradeError::validation("attendance", "cannot be negative"));
        }
        for (field, score) in [("lab1", self.lab1), ("lab2", self.lab2), ("lab3", self.lab3)] {
            check_score(field, score)?;
        }
        Ok(())
    }

    pub fn labs(&self) -> [f64; 3] {
        [self.lab1, self.lab2, self.lab3]
    }
}

/// Range check shared by the calculator and the record table.
pub(crate) fn check_score(field: &str, score: f64) -> Result<(), GradeError> {
    // NaN fails the range test as well.
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(GradeError::validation(
            field,
            format!("must be between 0 and 100 (got {score})"),
        ));
    }
    Ok(())
}

/// Outcome of solving the grade formula for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evaluation {
    /// Even a perfect exam score is not enough.
    Impossible,
    /// The target is met whatever the exam score.
    AlreadyAchieved,
    /// Reachable with an exam score within [0, 100].
    Achievable,
}

impl Evaluation {
    /// Classify a required exam score. Both ends of [0, 100] are achievable.
    pub fn classify(required: f64) -> Self {
        if required > MAX_SCORE {
            Evaluation::Impossible
        } else if required < MIN_SCORE {
            Evaluation::AlreadyAchieved
        } else {
            Evaluation::Achievable
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Impossible => write!(f, "IMPOSSIBLE"),
            Evaluation::AlreadyAchieved => write!(f, "ALREADY_ACHIEVED"),
            Evaluation::Achievable => write!(f, "ACHIEVABLE"),
        }
    }
}

/// The two period grades the calculator solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Pass,
    Excellent,
}

impl Target {
    /// Period grade this target stands for.
    pub fn grade(self) -> f64 {
        match self {
            Target::Pass => 75.0,
            Target::Excellent => 100.0,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Pass => write!(f, "pass"),
            Target::Excellent => write!(f, "excellent"),
        }
    }
}

/// Result of one calculation. Built only by the engine from validated inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    /// The validated inputs, echoed for display.
    pub inputs: GradeInputs,
    pub lab_work_average: f64,
    pub class_standing: f64,
    /// Exam score needed for a period grade of 75.
    pub required_for_pass: f64,
    /// Exam score needed for a period grade of 100.
    pub required_for_excellent: f64,
    pub pass_evaluation: Evaluation,
    pub excellent_evaluation: Evaluation,
}

impl GradeReport {
    pub fn required_for(&self, target: Target) -> f64 {
        match target {
            Target::Pass => self.required_for_pass,
            Target::Excellent => self.required_for_excellent,
        }
    }

    pub fn evaluation_for(&self, target: Target) -> Evaluation {
        match target {
            Target::Pass => self.pass_evaluation,
            Target::Excellent => self.excellent_evaluation,
        }
    }
}
