//! The `gradecalc records` commands.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradecalc_core::config::{load_config_from, GradecalcConfig};
use gradecalc_core::records::{LoadSummary, RecordTable};
use gradecalc_core::statistics::RosterSummary;
use gradecalc_report::html::write_roster_html;

use crate::session::EditSession;

pub fn list(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (table, _config) = load_table(file, config_path)?;
    println!("{}", render_table(&table));
    println!("{}", summary_line(&table.summary()));
    Ok(())
}

pub fn edit(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (table, config) = load_table(file, config_path)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = EditSession::new(table, config.confirm_deletes, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}

pub fn export(
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output: PathBuf,
    title: String,
) -> Result<()> {
    let (table, _config) = load_table(file, config_path)?;
    write_roster_html(&table, &title, &output)?;
    println!("Exported {} records to {}", table.len(), output.display());
    Ok(())
}

fn load_table(
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(RecordTable, GradecalcConfig)> {
    let config = load_config_from(config_path.as_deref())?;
    let path = file.unwrap_or_else(|| config.records_file.clone());
    let (table, summary) = RecordTable::load_csv(&path)?;
    report_skipped(&summary);
    Ok((table, config))
}

fn report_skipped(summary: &LoadSummary) {
    // Rows with the wrong field count are dropped without comment.
    if summary.skipped_invalid > 0 {
        eprintln!(
            "Warning: skipped {} row(s) with invalid values",
            summary.skipped_invalid
        );
    }
}

/// Build the terminal table for a roster.
pub fn render_table(table: &RecordTable) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        "#",
        "Student ID",
        "First Name",
        "Last Name",
        "Lab 1",
        "Lab 2",
        "Lab 3",
        "Prelim",
        "Attendance",
        "Final Grade",
        "Pass/Fail",
    ]);

    for (i, record) in table.iter().enumerate() {
        let s = &record.scores;
        out.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&record.student_id),
            Cell::new(&record.first_name),
            Cell::new(&record.last_name),
            Cell::new(s.lab1),
            Cell::new(s.lab2),
            Cell::new(s.lab3),
            Cell::new(s.prelim),
            Cell::new(s.attendance),
            Cell::new(record.final_grade()),
            Cell::new(if record.passed() { "PASS" } else { "FAIL" }),
        ]);
    }

    out
}

pub fn summary_line(summary: &RosterSummary) -> String {
    match summary.class_average {
        Some(avg) => format!(
            "{} records: {} passing, {} failing, class average {avg:.1}, pass rate {:.0}%",
            summary.total,
            summary.passing,
            summary.failing,
            summary.pass_rate() * 100.0
        ),
        None => "0 records".to_string(),
    }
}
