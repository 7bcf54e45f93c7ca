//! Grade-requirement engine.
//!
//! Solves the period grade formula
//!
//! ```text
//! period grade   = 0.30 × exam + 0.70 × class standing
//! class standing = 0.40 × attendance + 0.60 × lab work average
//! ```
//!
//! for the exam score needed to reach a passing (75) and an excellent (100)
//! period grade.

use crate::error::GradeError;
use crate::model::{Evaluation, GradeInputs, GradeReport, Target};

/// Share of class standing contributed by attendance.
pub const ATTENDANCE_WEIGHT: f64 = 0.40;
/// Share of class standing contributed by the lab work average.
pub const LAB_WORK_WEIGHT: f64 = 0.60;
/// Share of the period grade contributed by class standing.
pub const CLASS_STANDING_WEIGHT: f64 = 0.70;
/// Share of the period grade contributed by the exam.
pub const EXAM_WEIGHT: f64 = 0.30;

/// Stateless calculator. Any number of callers may share one instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeRequirementEngine;

impl GradeRequirementEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate `inputs` and solve for both targets.
    pub fn compute(&self, inputs: GradeInputs) -> Result<GradeReport, GradeError> {
        inputs.validate()?;

        let lab_work_average = lab_work_average(&inputs);
        let class_standing = class_standing(inputs.attendance, lab_work_average);
        let required_for_pass = required_exam_score(Target::Pass, class_standing);
        let required_for_excellent = required_exam_score(Target::Excellent, class_standing);

        tracing::debug!(
            lab_work_average,
            class_standing,
            required_for_pass,
            required_for_excellent,
            "computed grade requirements"
        );

        Ok(GradeReport {
            inputs,
            lab_work_average,
            class_standing,
            required_for_pass,
            required_for_excellent,
            pass_evaluation: Evaluation::classify(required_for_pass),
            excellent_evaluation: Evaluation::classify(required_for_excellent),
        })
    }
}

/// Shorthand for `GradeRequirementEngine.compute(inputs)`.
pub fn compute(inputs: GradeInputs) -> Result<GradeReport, GradeError> {
    GradeRequirementEngine.compute(inputs)
}

/// Unweighted mean of the three lab scores.
pub fn lab_work_average(inputs: &GradeInputs) -> f64 {
    (inputs.lab1 + inputs.lab2 + inputs.lab3) / 3.0
}

pub fn class_standing(attendance: i64, lab_work_average: f64) -> f64 {
    ATTENDANCE_WEIGHT * attendance as f64 + LAB_WORK_WEIGHT * lab_work_average
}

/// Exam score that brings the period grade exactly to `target`.
/// May fall outside [0, 100]; see [`Evaluation::classify`].
pub fn required_exam_score(target: Target, class_standing: f64) -> f64 {
    (target.grade() - CLASS_STANDING_WEIGHT * class_standing) / EXAM_WEIGHT
}
