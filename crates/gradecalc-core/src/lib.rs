//! gradecalc-core: Grade-requirement engine and student records.
//!
//! This crate defines the data model, the exam-requirement formula, raw input
//! parsing, the CSV-backed record table, and configuration loading that the
//! rest of gradecalc builds on.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod records;
pub mod statistics;

pub use engine::{compute, GradeRequirementEngine};
pub use error::GradeError;
pub use model::{Evaluation, GradeInputs, GradeReport, Target};
