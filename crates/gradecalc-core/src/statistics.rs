//! Aggregate statistics over a roster of student records.

use serde::{Deserialize, Serialize};

use crate::records::StudentRecord;

/// Pass/fail counts and mean final grade for a roster.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total: usize,
    pub passing: usize,
    pub failing: usize,
    /// Mean final grade; `None` for an empty roster.
    pub class_average: Option<f64>,
}

impl RosterSummary {
    /// Fraction of students passing, in [0, 1].
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passing as f64 / self.total as f64
    }
}

pub fn compute_roster_summary(records: &[StudentRecord]) -> RosterSummary {
    if records.is_empty() {
        return RosterSummary::default();
    }

    let passing = records.iter().filter(|r| r.passed()).count();
    let grade_sum: i64 = records.iter().map(StudentRecord::final_grade).sum();

    RosterSummary {
        total: records.len(),
        passing,
        failing: records.len() - passing,
        class_average: Some(grade_sum as f64 / records.len() as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Scores;

    fn record(prelim: f64) -> StudentRecord {
        let mut r = StudentRecord::new("1", "A", "B").unwrap();
        r.scores = Scores {
            lab1: 100.0,
            lab2: 100.0,
            lab3: 100.0,
            prelim,
            attendance: 100.0,
        };
        r
    }

    #[test]
    fn empty_roster() {
        let summary = compute_roster_summary(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.class_average, None);
        assert_eq!(summary.pass_rate(), 0.0);
    }

    #[test]
    fn counts_pass_and_fail() {
        // final grades: 100 and 60
        let summary = compute_roster_summary(&[record(100.0), record(0.0)]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passing, 1);
        assert_eq!(summary.failing, 1);
        assert_eq!(summary.class_average, Some(80.0));
        assert_eq!(summary.pass_rate(), 0.5);
    }
}
