use thiserror::Error;

/// Errors raised while rendering or exporting simulation results.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no gantt chart data provided")]
    NoCharts,

    #[error("nothing to compare, labels, turnaround and waiting times must not be empty")]
    EmptyComparison,

    #[error(
        "comparison inputs differ in length: {labels} labels, \
         {turnaround} turnaround times, {waiting} waiting times"
    )]
    LengthMismatch {
        labels: usize,
        turnaround: usize,
        waiting: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
