//! Line-oriented record editing session.
//!
//! The session owns its [`RecordTable`] for its whole lifetime. Nothing is
//! written back to the source file.

use std::io::{BufRead, Write};

use anyhow::Result;

use gradecalc_core::error::GradeError;
use gradecalc_core::parser::parse_score;
use gradecalc_core::records::{RecordTable, Scores};

use crate::commands::records::{render_table, summary_line};

const HELP: &str = "\
Commands:
  list                                   show the table
  add <id> <first> <last...>             append a record with zero scores
  delete <row>                           remove a record (row numbers start at 1)
  scores <row> <lab1> <lab2> <lab3> <prelim> <attendance>
                                         replace a record's scores
  summary                                pass/fail counts and class average
  csv                                    print the table as CSV
  help                                   show this help
  quit                                   leave the session";

#[derive(Debug, PartialEq)]
enum Command {
    List,
    Add {
        id: String,
        first: String,
        last: String,
    },
    Delete(usize),
    Scores(usize, Scores),
    Summary,
    Csv,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err("empty command".to_string());
        };

        match (name.to_lowercase().as_str(), args) {
            ("list" | "ls", []) => Ok(Command::List),
            ("add", [id, first, last @ ..]) if !last.is_empty() => Ok(Command::Add {
                id: id.to_string(),
                first: first.to_string(),
                last: last.join(" "),
            }),
            ("add", _) => Err("usage: add <id> <first> <last>".to_string()),
            ("delete" | "rm", [row]) => Ok(Command::Delete(parse_row(row)?)),
            ("delete" | "rm", _) => Err("usage: delete <row>".to_string()),
            ("scores", [row, lab1, lab2, lab3, prelim, attendance]) => {
                let scores = Scores {
                    lab1: parse_score("lab1", lab1).map_err(|e| e.to_string())?,
                    lab2: parse_score("lab2", lab2).map_err(|e| e.to_string())?,
                    lab3: parse_score("lab3", lab3).map_err(|e| e.to_string())?,
                    prelim: parse_score("prelim", prelim).map_err(|e| e.to_string())?,
                    attendance: parse_score("attendance", attendance)
                        .map_err(|e| e.to_string())?,
                };
                Ok(Command::Scores(parse_row(row)?, scores))
            }
            ("scores", _) => {
                Err("usage: scores <row> <lab1> <lab2> <lab3> <prelim> <attendance>".to_string())
            }
            ("summary", []) => Ok(Command::Summary),
            ("csv", []) => Ok(Command::Csv),
            ("help" | "?", _) => Ok(Command::Help),
            ("quit" | "exit" | "q", _) => Ok(Command::Quit),
            (other, _) => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}

/// Turn a 1-based row number into a zero-based index.
fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("invalid row '{raw}', expected a number from 1")),
    }
}

pub struct EditSession<R, W> {
    table: RecordTable,
    confirm_deletes: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> EditSession<R, W> {
    pub fn new(table: RecordTable, confirm_deletes: bool, input: R, output: W) -> Self {
        Self {
            table,
            confirm_deletes,
            input,
            output,
        }
    }

    /// Read and apply commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Loaded {} records. Type 'help' for commands.",
            self.table.len()
        )?;

        while let Some(line) = self.prompt("> ")? {
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(command)?,
                Err(message) => writeln!(self.output, "Error: {message}")?,
            }
        }

        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_table(self) -> RecordTable {
        self.table
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::List => {
                writeln!(self.output, "{}", render_table(&self.table))?;
            }
            Command::Add { id, first, last } => match self.table.add(&id, &first, &last) {
                Ok(record) => {
                    let name = record.full_name();
                    writeln!(self.output, "Added {name} as row {}", self.table.len())?;
                }
                Err(e) => self.report(&e)?,
            },
            Command::Delete(index) => self.delete(index)?,
            Command::Scores(index, scores) => match self.table.update_scores(index, scores) {
                Ok(()) => {
                    if let Some(record) = self.table.get(index) {
                        writeln!(
                            self.output,
                            "Saved scores for {}: final grade {}",
                            record.full_name(),
                            record.final_grade()
                        )?;
                    }
                }
                Err(e) => self.report(&e)?,
            },
            Command::Summary => {
                writeln!(self.output, "{}", summary_line(&self.table.summary()))?;
            }
            Command::Csv => {
                write!(self.output, "{}", self.table.to_csv_string())?;
            }
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<()> {
        if let Err(e) = self.table.check_index(index) {
            return self.report(&e);
        }
        let Some(record) = self.table.get(index) else {
            return Ok(());
        };

        if self.confirm_deletes {
            let question = format!("Delete {}? [y/N] ", record.full_name());
            let answer = self.prompt(&question)?.unwrap_or_default();
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                writeln!(self.output, "Kept.")?;
                return Ok(());
            }
        }

        match self.table.remove(index) {
            Ok(removed) => writeln!(self.output, "Deleted {}", removed.full_name())?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn report(&mut self, error: &GradeError) -> Result<()> {
        tracing::debug!("command rejected: {error}");
        writeln!(self.output, "Error: {error}")?;
        Ok(())
    }

    /// Write `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
StudentID,first_name,last_name,LAB WORK 1,LAB WORK 2,LAB WORK 3,PRELIM EXAM,ATTENDANCE GRADE
073900438,Osbourne,Wakenshaw,69,5,52,12,78
114924014,Albie,Gierardi,58,92,16,57,97
";

    fn run_session(script: &str, confirm: bool) -> (RecordTable, String) {
        let (table, _) = RecordTable::parse_csv_str(CSV);
        let mut output = Vec::new();
        let mut session = EditSession::new(table, confirm, script.as_bytes(), &mut output);
        session.run().unwrap();
        let table = session.into_table();
        (table, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("  DELETE 2 ").unwrap(), Command::Delete(1));
        assert!(Command::parse("delete 0").is_err());
        assert!(Command::parse("delete x").is_err());
        assert!(Command::parse("add 1 only").is_err());
        assert!(Command::parse("frobnicate").is_err());
        assert!(Command::parse("scores 1 1 2 3 4 five").is_err());
        assert_eq!(
            Command::parse("scores 1 90 80 70 60 50").unwrap(),
            Command::Scores(
                0,
                Scores {
                    lab1: 90.0,
                    lab2: 80.0,
                    lab3: 70.0,
                    prelim: 60.0,
                    attendance: 50.0
                }
            )
        );
    }

    #[test]
    fn add_appends_zeroed_record() {
        let (table, out) = run_session("add 999 New Student\nquit\n", true);
        assert_eq!(table.len(), 3);
        let added = table.get(2).unwrap();
        assert_eq!(added.student_id, "999");
        assert_eq!(added.scores, Scores::default());
        assert!(out.contains("Added New Student as row 3"));
    }

    #[test]
    fn add_joins_multi_word_last_name() {
        assert_eq!(
            Command::parse("add 42 Maria Dela Cruz").unwrap(),
            Command::Add {
                id: "42".to_string(),
                first: "Maria".to_string(),
                last: "Dela Cruz".to_string(),
            }
        );

        let (table, out) = run_session("add 42 Maria De Guzman\ncsv\n", true);
        assert_eq!(table.get(2).unwrap().last_name, "De Guzman");
        assert!(out.contains("Added Maria De Guzman as row 3"));
        assert!(out.contains("42,Maria,De Guzman,0,0,0,0,0"));
    }

    #[test]
    fn add_with_comma_is_rejected() {
        let (table, out) = run_session("add 42 Ann,Marie Smith\n", true);
        assert_eq!(table.len(), 2);
        assert!(out.contains("Error: first_name must not contain a comma"));
    }

    #[test]
    fn delete_requires_confirmation() {
        let (table, out) = run_session("delete 1\nn\nquit\n", true);
        assert_eq!(table.len(), 2);
        assert!(out.contains("Delete Osbourne Wakenshaw? [y/N]"));
        assert!(out.contains("Kept."));

        let (table, out) = run_session("delete 1\ny\nquit\n", true);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap().first_name, "Albie");
        assert!(out.contains("Deleted Osbourne Wakenshaw"));
    }

    #[test]
    fn delete_without_confirmation_setting() {
        let (table, out) = run_session("delete 2\n", false);
        assert_eq!(table.len(), 1);
        assert!(!out.contains("[y/N]"));
    }

    #[test]
    fn delete_missing_row_reports_error() {
        let (table, out) = run_session("delete 7\n", true);
        assert_eq!(table.len(), 2);
        assert!(out.contains("Error: row 7 does not exist"));
    }

    #[test]
    fn end_of_input_during_confirmation_keeps_record() {
        let (table, _) = run_session("delete 1\n", true);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn scores_update_and_range_check() {
        let (table, out) = run_session("scores 2 100 100 100 100 100\nscores 1 1 2 3 4 500\n", true);
        assert_eq!(table.get(1).unwrap().final_grade(), 100);
        assert!(out.contains("Saved scores for Albie Gierardi: final grade 100"));
        assert!(out.contains("Error: attendance must be between 0 and 100"));
        assert_eq!(table.get(0).unwrap().scores.prelim, 12.0);
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (_, out) = run_session("bogus\nsummary\ncsv\n", true);
        assert!(out.contains("Error: unknown command 'bogus'"));
        assert!(out.contains("2 records: 0 passing, 2 failing"));
        assert!(out.contains("114924014,Albie,Gierardi,58,92,16,57,97"));
        assert!(out.ends_with("Bye.\n"));
    }
}
