//! JSON rendering of a grade report.

use anyhow::{Context, Result};

use gradecalc_core::model::GradeReport;

/// Pretty-printed JSON for one report.
pub fn render_json(report: &GradeReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize grade report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradecalc_core::engine::compute;
    use gradecalc_core::model::{Evaluation, GradeInputs};

    #[test]
    fn json_carries_evaluations_and_inputs() {
        let report = compute(GradeInputs::new(10, 50.0, 50.0, 50.0)).unwrap();
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pass_evaluation"], "IMPOSSIBLE");
        assert_eq!(value["excellent_evaluation"], "IMPOSSIBLE");
        assert_eq!(value["inputs"]["attendance"], 10);
        assert_eq!(value["lab_work_average"], 50.0);

        let back: GradeReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pass_evaluation, Evaluation::Impossible);
    }
}
