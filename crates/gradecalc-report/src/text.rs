//! Fixed-width text rendering of a grade report.

use std::fmt::Write;

use gradecalc_core::model::{Evaluation, GradeReport, Target};

const RULE_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 31;

/// Render a report as labeled, fixed-width text.
pub fn render_text(report: &GradeReport) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let inputs = &report.inputs;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "{:^RULE_WIDTH$}", "PRELIM GRADE CALCULATION RESULTS");
    let _ = writeln!(out, "{heavy}");
    out.push('\n');

    section(&mut out, "INPUT DATA", &light);
    line(&mut out, "Attendance Score:", inputs.attendance.to_string());
    for (i, lab) in inputs.labs().iter().enumerate() {
        line(&mut out, &format!("Lab Work {} Grade:", i + 1), format!("{lab:.2}"));
    }
    out.push('\n');

    section(&mut out, "COMPUTED VALUES", &light);
    line(
        &mut out,
        "Lab Work Average:",
        format!("{:.2}", report.lab_work_average),
    );
    line(
        &mut out,
        "Class Standing:",
        format!("{:.2}", report.class_standing),
    );
    out.push('\n');

    section(&mut out, "REQUIRED PRELIM EXAM SCORES", &light);
    line(
        &mut out,
        "To Pass (75):",
        format!("{:.2}", report.required_for_pass),
    );
    line(
        &mut out,
        "For Excellent (100):",
        format!("{:.2}", report.required_for_excellent),
    );
    out.push('\n');

    section(&mut out, "EVALUATION", &light);
    for target in [Target::Pass, Target::Excellent] {
        for remark in remarks(
            target,
            report.evaluation_for(target),
            report.required_for(target),
        ) {
            let _ = writeln!(out, "{remark}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{heavy}");
    out
}

/// Human-readable remark lines for one target.
pub fn remarks(target: Target, evaluation: Evaluation, required: f64) -> Vec<String> {
    match (target, evaluation) {
        (Target::Pass, Evaluation::Impossible) => vec![
            "[!] Passing the prelim period is IMPOSSIBLE: even a perfect".into(),
            "    exam score of 100 cannot lift the grade to 75.".into(),
        ],
        (Target::Pass, Evaluation::AlreadyAchieved) => vec![
            "[*] You have already PASSED the prelim period on class".into(),
            "    standing alone. Any exam score keeps you passing.".into(),
        ],
        (Target::Pass, Evaluation::Achievable) => vec![
            format!("[-] You need a Prelim Exam score of {required:.2} to pass."),
            "    This is achievable with proper preparation.".into(),
        ],
        (Target::Excellent, Evaluation::Impossible) => vec![
            "[!] An Excellent grade (100) is not possible: it would".into(),
            "    need an exam score above 100.".into(),
        ],
        (Target::Excellent, Evaluation::AlreadyAchieved) => vec![
            "[*] You have already reached EXCELLENT standing.".into(),
            "    Your class standing guarantees a grade of 100.".into(),
        ],
        (Target::Excellent, Evaluation::Achievable) => vec![
            format!("[-] You need a Prelim Exam score of {required:.2} for excellent."),
            "    Aim high and give it your best effort.".into(),
        ],
    }
}

fn section(out: &mut String, title: &str, rule: &str) {
    let _ = writeln!(out, "{title}:");
    let _ = writeln!(out, "{rule}");
}

fn line(out: &mut String, label: &str, value: String) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradecalc_core::engine::compute;
    use gradecalc_core::model::GradeInputs;

    #[test]
    fn renders_all_sections() {
        let report = compute(GradeInputs::new(10, 90.0, 85.0, 95.0)).unwrap();
        let text = render_text(&report);

        for heading in [
            "INPUT DATA:",
            "COMPUTED VALUES:",
            "REQUIRED PRELIM EXAM SCORES:",
            "EVALUATION:",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Attendance Score:              10\n"));
        assert!(text.contains("Lab Work 2 Grade:              85.00\n"));
        assert!(text.contains("Lab Work Average:              90.00\n"));
        assert!(text.contains("Class Standing:                58.00\n"));
        assert!(text.contains("To Pass (75):                  114.67\n"));
        assert!(text.contains("IMPOSSIBLE"));
    }

    #[test]
    fn achievable_remark_shows_exact_requirement() {
        let report = compute(GradeInputs::new(100, 100.0, 100.0, 100.0)).unwrap();
        let text = render_text(&report);
        assert!(text.contains("You need a Prelim Exam score of 16.67 to pass."));
        assert!(text.contains("You need a Prelim Exam score of 100.00 for excellent."));
    }

    #[test]
    fn already_achieved_remarks() {
        let report = compute(GradeInputs::new(250, 100.0, 100.0, 100.0)).unwrap();
        let text = render_text(&report);
        assert!(text.contains("already PASSED"));
        assert!(text.contains("already reached EXCELLENT"));
    }

    #[test]
    fn labels_are_fixed_width() {
        let report = compute(GradeInputs::new(10, 50.0, 50.0, 50.0)).unwrap();
        let text = render_text(&report);
        for row in text.lines().filter(|l| l.starts_with("Lab Work")) {
            assert_eq!(&row[LABEL_WIDTH..], "50.00");
        }
    }
}
