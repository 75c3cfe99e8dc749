use std::io::{self, Write};

use error_printer::ErrorPrinter;
use link_bench::{ProgressReporter, SuiteReport};

const PROGRESS_NAME_WIDTH: usize = 40;

fn line_ending(raw_terminal: bool) -> &'static str {
    if raw_terminal { "\r\n" } else { "\n" }
}

/// Redraws a single `<test> <percent>%` line on stderr.
#[derive(Debug)]
pub struct ConsoleProgress {
    enabled: bool,
    line_end: &'static str,
}

impl ConsoleProgress {
    pub fn new(enabled: bool, raw_terminal: bool) -> Self {
        Self {
            enabled,
            line_end: line_ending(raw_terminal),
        }
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, test_name: &str, percent: u8) {
        if !self.enabled {
            return;
        }
        let end = if percent == 100 { self.line_end } else { "" };
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{test_name:<PROGRESS_NAME_WIDTH$} {percent:>3}%{end}");
        let _ = stderr.flush();
    }
}

/// Writes suite reports to stdout, as a table or as JSON lines.
#[derive(Debug)]
pub struct ReportOutput {
    json: bool,
    raw_terminal: bool,
}

impl ReportOutput {
    pub fn new(json: bool, raw_terminal: bool) -> Self {
        Self { json, raw_terminal }
    }

    pub fn render(&self, report: &SuiteReport) -> Option<String> {
        let text = if self.json {
            let mut line = serde_json::to_string(report).log_error("Failed to serialize suite report").ok()?;
            line.push('\n');
            line
        } else {
            format!("{report}\n")
        };

        if self.raw_terminal {
            Some(text.replace('\n', "\r\n"))
        } else {
            Some(text)
        }
    }

    pub fn emit(&self, report: &SuiteReport) {
        let Some(text) = self.render(report) else {
            return;
        };
        let mut stdout = io::stdout().lock();
        let _ = stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .warn_error("Failed to write suite report");
    }
}
