//! Text Gantt charts.

use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use scheduler::Trace;

use crate::{Log, ReportError};

/// Charts wider than this are scaled down.
const MAX_COLUMNS: u64 = 80;

/// Distance between two labels on the time axis, in columns.
const AXIS_STEP: usize = 10;

/// A trace drawn as one row per process, one column per time unit.
pub struct GanttChart<'a> {
    title: &'a str,
    trace: &'a Trace,
}

impl<'a> GanttChart<'a> {
    /// Returns `None` for an empty trace, there is nothing to draw.
    pub fn new(title: &'a str, trace: &'a Trace) -> Option<GanttChart<'a>> {
        if trace.is_empty() {
            None
        } else {
            Some(GanttChart { title, trace })
        }
    }

    /// Time units per column.
    fn scale(&self) -> u64 {
        self.trace.makespan().div_ceil(MAX_COLUMNS).max(1)
    }
}

impl Display for GanttChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.scale();
        let width = self.trace.makespan().div_ceil(scale) as usize;
        let pids = self.trace.pids();
        let labels: Vec<String> = pids.iter().map(|pid| format!("P{pid}")).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        writeln!(f, "{}", self.title)?;
        if scale > 1 {
            writeln!(f, "(1 column = {scale} time units)")?;
        }

        for (pid, label) in pids.iter().zip(&labels) {
            let mut row = vec![' '; width];
            for event in self.trace.iter().filter(|event| event.pid == *pid) {
                let from = (event.start / scale) as usize;
                let to = (event.end.div_ceil(scale) as usize).min(width);
                row[from..to].fill('#');
            }
            writeln!(
                f,
                "{label:>label_width$} |{}|",
                row.into_iter().collect::<String>()
            )?;
        }

        let mut axis = vec![' '; width + AXIS_STEP];
        for column in (0..=width).step_by(AXIS_STEP) {
            let time = (column as u64 * scale).to_string();
            for (offset, digit) in time.chars().enumerate() {
                if let Some(cell) = axis.get_mut(column + offset) {
                    *cell = digit;
                }
            }
        }
        let axis: String = axis.into_iter().collect();
        writeln!(f, "{:label_width$}  {}", "", axis.trim_end())?;

        writeln!(f)?;
        for event in self.trace {
            writeln!(f, "P{}\t{} -> {}", event.pid, event.start, event.end)?;
        }
        Ok(())
    }
}

/// Draws `trace` as a text Gantt chart.
///
/// Returns `None` if the trace is empty.
pub fn render_gantt(title: &str, trace: &Trace) -> Option<String> {
    GanttChart::new(title, trace).map(|chart| chart.to_string())
}

/// Writes one Gantt chart per log into `dir` as `gantt_chart_{n}.txt`.
///
/// Logs with an empty trace are skipped with a warning. Returns the paths
/// of the charts that were written.
pub fn write_gantt_charts(dir: &Path, logs: &[Log]) -> Result<Vec<PathBuf>, ReportError> {
    if logs.is_empty() {
        return Err(ReportError::NoCharts);
    }

    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(logs.len());
    for (index, log) in logs.iter().enumerate() {
        let number = index + 1;
        let title = format!("Gantt Chart for {} - Chart {number}", log.label);
        let Some(chart) = render_gantt(&title, &log.trace) else {
            warn!(chart = number, label = %log.label, "gantt chart is empty, skipping");
            continue;
        };

        let path = dir.join(format!("gantt_chart_{number}.txt"));
        fs::write(&path, chart)?;
        info!(chart = number, path = %path.display(), "gantt chart written");
        written.push(path);
    }

    Ok(written)
}
