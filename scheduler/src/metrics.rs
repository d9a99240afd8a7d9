use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Process, SchedulerError};

/// Aggregate timings of a completed run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub mean_waiting_time: f64,
    pub mean_turnaround_time: f64,
    pub total_burst_time: u64,
    /// Completed processes per unit of simulated time, measured from the
    /// first arrival to the last completion.
    pub throughput: f64,
}

impl Metrics {
    /// Computes the metrics of a run.
    ///
    /// Every process has to be completed, unfinished processes would
    /// otherwise be averaged in with zero timings.
    pub fn from_processes(processes: &[Process]) -> Result<Metrics, SchedulerError> {
        if processes.is_empty() {
            return Err(SchedulerError::EmptyInput);
        }
        if let Some(process) = processes.iter().find(|process| !process.is_completed()) {
            return Err(SchedulerError::IncompleteAggregation(process.pid));
        }

        let count = processes.len() as f64;
        let waiting: u128 = processes
            .iter()
            .map(|process| u128::from(process.waiting_time))
            .sum();
        let turnaround: u128 = processes
            .iter()
            .map(|process| u128::from(process.turnaround_time))
            .sum();
        let total_burst_time = processes
            .iter()
            .fold(0u64, |total, process| total.saturating_add(process.burst_time));

        let first_arrival = processes
            .iter()
            .map(|process| process.arrival_time)
            .min()
            .unwrap_or(0);
        let last_completion = processes
            .iter()
            .map(|process| process.completion_time)
            .max()
            .unwrap_or(0);
        let span = last_completion.saturating_sub(first_arrival);

        Ok(Metrics {
            mean_waiting_time: waiting as f64 / count,
            mean_turnaround_time: turnaround as f64 / count,
            total_burst_time,
            throughput: if span == 0 { 0.0 } else { count / span as f64 },
        })
    }
}

impl Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean turnaround time: {}, mean waiting time: {}",
            self.mean_turnaround_time, self.mean_waiting_time
        )
    }
}
