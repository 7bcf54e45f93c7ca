//! HTML roster export.
//!
//! Produces a self-contained HTML page with all CSS inlined.

use std::path::Path;

use anyhow::{Context, Result};

use gradecalc_core::records::{RecordTable, StudentRecord};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page listing every record with its final grade.
pub fn generate_roster_html(table: &RecordTable, title: &str) -> String {
    let summary = table.summary();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
    let average = summary
        .class_average
        .map(|a| format!("{a:.1}"))
        .unwrap_or_else(|| "-".to_string());
    html.push_str(&format!(
        "<p class=\"meta\">{} students | {} passing | {} failing | class average {} | generated {}</p>\n",
        summary.total,
        summary.passing,
        summary.failing,
        average,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Student ID</th><th>First Name</th><th>Last Name</th><th>Lab 1</th><th>Lab 2</th><th>Lab 3</th><th>Prelim</th><th>Attendance</th><th>Final Grade</th><th>Pass/Fail</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for record in table.iter() {
        html.push_str(&record_row(record));
    }
    html.push_str("</tbody></table>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn record_row(record: &StudentRecord) -> String {
    let (class, verdict) = if record.passed() {
        ("pass", "PASS")
    } else {
        ("fail", "FAIL")
    };
    let s = &record.scores;
    format!(
        "<tr class=\"{class}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{verdict}</td></tr>\n",
        html_escape(&record.student_id),
        html_escape(&record.first_name),
        html_escape(&record.last_name),
        s.lab1,
        s.lab2,
        s.lab3,
        s.prelim,
        s.attendance,
        record.final_grade(),
    )
}

/// Write the roster page to a file, creating parent directories.
pub fn write_roster_html(table: &RecordTable, title: &str, path: &Path) -> Result<()> {
    let html = generate_roster_html(table, title);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write roster to {}", path.display()))?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #333; --head: #ddd; --pass: #c8facc; --fail: #f8c8c8; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --head: #1f2937; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: Arial, sans-serif; margin: 20px; background: var(--bg); color: var(--fg); }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid var(--border); padding: 8px; text-align: center; }
th { background: var(--head); position: sticky; top: 0; }
tr.pass { background: var(--pass); }
tr.fail { background: var(--fail); }
"#;
