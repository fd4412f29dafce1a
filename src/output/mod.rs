//! Reporting collaborators for completed experiments.
//!
//! The runner produces [`ExperimentReport`] records; a [`Reporter`] decides
//! what to do with them. Provided sinks:
//! - [`TableReporter`]: the fixed-width terminal table
//! - [`JsonLinesReporter`]: one compact JSON object per line
//! - `Vec<ExperimentReport>`: collects records in memory

pub mod json;
pub mod terminal;

use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::result::ExperimentReport;

/// Receives one record per completed experiment, in run order.
pub trait Reporter {
    /// Handle a completed experiment.
    fn report(&mut self, record: &ExperimentReport) -> Result<()>;
}

impl Reporter for Vec<ExperimentReport> {
    fn report(&mut self, record: &ExperimentReport) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, record: &ExperimentReport) -> Result<()> {
        (**self).report(record)
    }
}

/// Writes the terminal table, emitting the header before the first row.
#[derive(Debug)]
pub struct TableReporter<W> {
    out: W,
    header_written: bool,
}

impl<W: Write> TableReporter<W> {
    /// Create a table reporter over `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Write the header now if it has not been written yet.
    ///
    /// Lets an empty grid still print column titles.
    pub fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "{}", terminal::format_header())?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TableReporter<W> {
    fn report(&mut self, record: &ExperimentReport) -> Result<()> {
        self.write_header()?;
        writeln!(self.out, "{}", terminal::format_row(record))?;
        Ok(())
    }
}

/// Writes each record as a single line of compact JSON.
#[derive(Debug)]
pub struct JsonLinesReporter<W> {
    out: W,
}

impl<W: Write> JsonLinesReporter<W> {
    /// Create a JSON-lines reporter over `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&mut self, record: &ExperimentReport) -> Result<()> {
        let line = json::to_json(record)?;
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}

/// Rendering selected for the command-line driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width table.
    #[default]
    Table,
    /// JSON lines.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(Error::invalid(
                "format",
                format!("expected `table` or `json`, got `{other}`"),
            )),
        }
    }
}
