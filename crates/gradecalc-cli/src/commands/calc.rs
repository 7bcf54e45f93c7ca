//! The `gradecalc calc` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradecalc_core::config::{load_config_from, ReportFormat};
use gradecalc_core::engine::compute;
use gradecalc_core::parser::parse_inputs;
use gradecalc_report::json::render_json;
use gradecalc_report::text::render_text;

/// The four form fields as typed. `None` means "ask on stdin".
pub struct RawInputs {
    pub attendance: Option<String>,
    pub lab1: Option<String>,
    pub lab2: Option<String>,
    pub lab3: Option<String>,
}

pub fn execute(raw: RawInputs, format: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = match format {
        Some(f) => f.parse::<ReportFormat>().map_err(|e| anyhow::anyhow!(e))?,
        None => config.default_format,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let attendance = field_or_prompt(raw.attendance, "Number of attendances: ", &mut input)?;
    let lab1 = field_or_prompt(raw.lab1, "Lab Work 1 grade (0-100): ", &mut input)?;
    let lab2 = field_or_prompt(raw.lab2, "Lab Work 2 grade (0-100): ", &mut input)?;
    let lab3 = field_or_prompt(raw.lab3, "Lab Work 3 grade (0-100): ", &mut input)?;

    let inputs = parse_inputs(&attendance, &lab1, &lab2, &lab3)?;
    let report = compute(inputs)?;
    tracing::debug!(
        "pass: {}, excellent: {}",
        report.pass_evaluation,
        report.excellent_evaluation
    );

    match format {
        ReportFormat::Text => print!("{}", render_text(&report)),
        ReportFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}

/// Use the flag value when given, otherwise prompt on stderr and read a line.
/// End of input yields an empty string, which then fails to parse.
fn field_or_prompt(value: Option<String>, prompt: &str, input: &mut impl BufRead) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
