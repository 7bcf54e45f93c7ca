//! CSV-backed student record table.
//!
//! The source file is read once; edits live only in the in-memory
//! [`RecordTable`] owned by whichever view is showing it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::model::check_score;
use crate::parser::parse_score;
use crate::statistics::{compute_roster_summary, RosterSummary};

/// Column header written by [`RecordTable::to_csv_string`].
pub const CSV_HEADER: &str =
    "StudentID,first_name,last_name,LAB WORK 1,LAB WORK 2,LAB WORK 3,PRELIM EXAM,ATTENDANCE GRADE";

/// Number of comma-separated fields in a well-formed row.
pub const FIELD_COUNT: usize = 8;

/// Lowest final grade that counts as passing.
pub const PASSING_FINAL_GRADE: i64 = 75;

/// The five graded components of a student record, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub lab1: f64,
    pub lab2: f64,
    pub lab3: f64,
    pub prelim: f64,
    pub attendance: f64,
}

impl Scores {
    pub fn validate(&self) -> Result<(), GradeError> {
        check_score("lab1", self.lab1)?;
        check_score("lab2", self.lab2)?;
        check_score("lab3", self.lab3)?;
        check_score("prelim", self.prelim)?;
        check_score("attendance", self.attendance)?;
        Ok(())
    }

    pub fn lab_average(&self) -> f64 {
        (self.lab1 + self.lab2 + self.lab3) / 3.0
    }
}

/// One row of the student table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Kept as text so leading zeros survive.
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub scores: Scores,
}

impl StudentRecord {
    /// A new record with every score at zero.
    pub fn new(student_id: &str, first_name: &str, last_name: &str) -> Result<Self, GradeError> {
        Ok(Self {
            student_id: required_text("student_id", student_id)?,
            first_name: required_text("first_name", first_name)?,
            last_name: required_text("last_name", last_name)?,
            scores: Scores::default(),
        })
    }

    /// Build a record from the eight fields of a CSV row, in column order.
    pub fn from_fields(fields: &[&str]) -> Result<Self, GradeError> {
        if fields.len() != FIELD_COUNT {
            return Err(GradeError::validation(
                "row",
                format!("has {} fields, expected {FIELD_COUNT}", fields.len()),
            ));
        }

        let mut record = Self::new(fields[0], fields[1], fields[2])?;
        record.scores = Scores {
            lab1: parse_score("lab1", fields[3])?,
            lab2: parse_score("lab2", fields[4])?,
            lab3: parse_score("lab3", fields[5])?,
            prelim: parse_score("prelim", fields[6])?,
            attendance: parse_score("attendance", fields[7])?,
        };
        record.scores.validate()?;
        Ok(record)
    }

    /// Weighted final grade: labs 40%, prelim 40%, attendance 20%, rounded.
    pub fn final_grade(&self) -> i64 {
        let s = &self.scores;
        (s.lab_average() * 0.4 + s.prelim * 0.4 + s.attendance * 0.2).round() as i64
    }

    pub fn passed(&self) -> bool {
        self.final_grade() >= PASSING_FINAL_GRADE
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn to_csv_line(&self) -> String {
        let s = &self.scores;
        format!(
            "{},{},{},{},{},{},{},{}",
            self.student_id,
            self.first_name,
            self.last_name,
            s.lab1,
            s.lab2,
            s.lab3,
            s.prelim,
            s.attendance
        )
    }
}

fn required_text(field: &str, value: &str) -> Result<String, GradeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GradeError::validation(field, "must not be empty"));
    }
    // Rows are written back out unquoted, one per line.
    if trimmed.contains([',', '\n', '\r']) {
        return Err(GradeError::validation(
            field,
            "must not contain a comma or line break",
        ));
    }
    Ok(trimmed.to_string())
}

/// Counts from one CSV import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    /// Rows without exactly eight fields.
    pub skipped_malformed: usize,
    /// Eight-field rows with a blank name or an unusable score.
    pub skipped_invalid: usize,
}

/// Ordered, exclusively owned list of student records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    records: Vec<StudentRecord>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a table from a CSV file on disk.
    pub fn load_csv(path: &Path) -> Result<(Self, LoadSummary)> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records file: {}", path.display()))?;
        let (table, summary) = Self::parse_csv_str(&content);
        tracing::info!(
            "loaded {} student records from {}",
            summary.loaded,
            path.display()
        );
        Ok((table, summary))
    }

    /// Parse CSV text. The first line is a header and is always skipped.
    pub fn parse_csv_str(content: &str) -> (Self, LoadSummary) {
        let mut table = Self::new();
        let mut summary = LoadSummary::default();

        for (line_no, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != FIELD_COUNT {
                tracing::debug!(
                    "skipping line {}: {} fields",
                    line_no + 1,
                    fields.len()
                );
                summary.skipped_malformed += 1;
                continue;
            }
            match StudentRecord::from_fields(&fields) {
                Ok(record) => {
                    table.records.push(record);
                    summary.loaded += 1;
                }
                Err(e) => {
                    tracing::warn!("skipping line {}: {e}", line_no + 1);
                    summary.skipped_invalid += 1;
                }
            }
        }

        (table, summary)
    }

    /// Append a new record whose five scores start at zero.
    pub fn add(
        &mut self,
        student_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<&StudentRecord, GradeError> {
        let record = StudentRecord::new(student_id, first_name, last_name)?;
        tracing::debug!("adding record {}", record.student_id);
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Remove and return the record at a zero-based position.
    pub fn remove(&mut self, index: usize) -> Result<StudentRecord, GradeError> {
        self.check_index(index)?;
        let removed = self.records.remove(index);
        tracing::debug!("removed record {}", removed.student_id);
        Ok(removed)
    }

    /// Replace the scores of the record at a zero-based position.
    pub fn update_scores(&mut self, index: usize, scores: Scores) -> Result<(), GradeError> {
        self.check_index(index)?;
        scores.validate()?;
        self.records[index].scores = scores;
        Ok(())
    }

    /// Fails with "row N does not exist" for an index past the end.
    pub fn check_index(&self, index: usize) -> Result<(), GradeError> {
        if index >= self.records.len() {
            return Err(GradeError::validation(
                "row",
                format!(
                    "{} does not exist (table has {} records)",
                    index + 1,
                    self.records.len()
                ),
            ));
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> RosterSummary {
        compute_roster_summary(&self.records)
    }

    pub fn to_csv_string(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for record in &self.records {
            out.push_str(&record.to_csv_line());
            out.push('\n');
        }
        out
    }
}
