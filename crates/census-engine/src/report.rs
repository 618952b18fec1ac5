//! Plain-text census report, one fixed-width record per generation.

use crate::sink::{Frame, FrameSink, RunInfo, SinkError};
use census_core::{GenerationStats, ShapeKind};
use std::io::Write;

const TITLE: &str = "GAME OF LIFE OUTPUT FILE";

/// Writes a fixed-width text report of shape counts to any [`Write`].
///
/// [`begin`](FrameSink::begin) emits the title block and column header;
/// each frame appends one record followed by a dashed rule. Kinds appear
/// in listing order (Block first).
#[derive(Debug)]
pub struct ReportSink<W: Write> {
    out: W,
}

impl<W: Write> ReportSink<W> {
    /// Report into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The column-header line, without its trailing newline.
pub(crate) fn column_header() -> String {
    let mut header = String::from(" GENERATION | CONFIGURATIONS | ");
    for kind in ShapeKind::ALL {
        header.push_str(kind.name());
        header.push_str(": AMOUNT - PERCENTAGE | ");
    }
    header
}

/// One generation's record, without the trailing rule.
pub(crate) fn record(stats: &GenerationStats) -> String {
    let mut line = format!(" {:<12} {:<17}", stats.generation().0, stats.total());
    for (kind, count) in stats.iter() {
        let pct = format!("{:.1}%", stats.percentage(kind));
        line.push_str(&format!(
            "{} {:<8} {:<13}",
            " ".repeat(kind.name().len() + 1),
            count,
            format!("{pct:0>5}"),
        ));
    }
    line
}

impl<W: Write> FrameSink for ReportSink<W> {
    fn begin(&mut self, run: &RunInfo) -> Result<(), SinkError> {
        let header = column_header();
        let pad = " ".repeat(header.len() / 2);
        writeln!(self.out, "{pad}{TITLE}{pad}")?;
        writeln!(
            self.out,
            " UNIVERSE SIZE -> ROWS:{} COLUMNS:{}",
            run.rows, run.cols
        )?;
        writeln!(self.out, " NUMBER OF GENERATIONS: {}", run.generations)?;
        writeln!(self.out, "{header}")?;
        writeln!(self.out, "{}", "=".repeat(header.len()))?;
        Ok(())
    }

    fn on_frame(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        let line = record(frame.stats);
        writeln!(self.out, "{line}")?;
        writeln!(self.out, "{}", "-".repeat(line.len()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.out.flush()?;
        Ok(())
    }
}
