use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use error_printer::ErrorPrinter;
use tracing::{debug, info};

use crate::error::Result;
use crate::statistics::TestResult;

pub const CSV_HEADER: [&str; 9] = [
    "Timestamp",
    "API",
    "Test Name",
    "Min",
    "Avg",
    "Max",
    "99th Percentile",
    "99.9th Percentile",
    "Unit",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends test results to a CSV file, one flushed row per result.
///
/// A logger whose file could not be opened is disabled: every `log_result` call is then a no-op, so a
/// benchmark run never fails because its result file is unavailable.
#[derive(Debug)]
pub struct ResultLogger {
    path: Option<PathBuf>,
    writer: Option<csv::Writer<File>>,
}

impl ResultLogger {
    /// Open `path` for appending, writing the header row if the file is missing or empty.  Falls back to a
    /// disabled logger (with a warning) if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_open(path).warn_error(format!("Cannot open result log {path:?}; CSV logging disabled")) {
            Ok(logger) => logger,
            Err(_) => Self::disabled(),
        }
    }

    pub fn try_open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(CSV_HEADER)?;
            writer.flush()?;
            info!("Created result log {path:?}");
        } else {
            debug!("Appending to existing result log {path:?}");
        }

        Ok(Self {
            path: Some(path.to_path_buf()),
            writer: Some(writer),
        })
    }

    pub fn disabled() -> Self {
        Self {
            path: None,
            writer: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one row for `result`, tagged with the backend `source_label`, and flush it.
    pub fn log_result(&mut self, result: &TestResult, source_label: &str) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };

        let timestamp = result.timestamp.format(TIMESTAMP_FORMAT).to_string();
        let [min, avg, max, p99, p99_9] = [result.min, result.avg, result.max, result.p99, result.p99_9].map(format_value);
        writer.write_record([
            timestamp.as_str(),
            source_label,
            result.name.as_str(),
            min.as_str(),
            avg.as_str(),
            max.as_str(),
            p99.as_str(),
            p99_9.as_str(),
            result.unit.as_str(),
        ])?;
        writer.flush()?;

        Ok(())
    }
}

fn format_value(v: f64) -> String {
    format!("{v:.3}")
}
