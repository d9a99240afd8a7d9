use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Pid;

/// Errors returned by the schedulers and the metrics aggregator.
///
/// All of them are input validation errors. They are detected before any
/// process is touched, so a failed call leaves its input unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("no processes to schedule")]
    EmptyInput,

    #[error("quantum must be positive, got {0}")]
    NonPositiveQuantum(u64),

    #[error("process {0} has not completed, metrics would include unfinished work")]
    IncompleteAggregation(Pid),

    #[error("process {0} has a burst time of 0")]
    ZeroBurst(Pid),

    #[error("pid {0} is used by more than one process")]
    DuplicatePid(Pid),

    #[error("process {0} was already scheduled, pass a fresh copy for every run")]
    AlreadyScheduled(Pid),

    #[error("simulated time would overflow, last arrival plus total burst exceeds u64")]
    TimeOverflow,
}

/// Checks the preconditions every scheduler run relies on.
pub(crate) fn validate(processes: &[crate::Process], quantum: u64) -> Result<(), SchedulerError> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyInput);
    }
    if quantum == 0 {
        return Err(SchedulerError::NonPositiveQuantum(quantum));
    }

    let mut pids = Vec::with_capacity(processes.len());
    let mut last_arrival = 0;
    let mut total_burst: u64 = 0;
    for process in processes {
        if process.burst_time == 0 {
            return Err(SchedulerError::ZeroBurst(process.pid));
        }
        if process.is_touched() {
            return Err(SchedulerError::AlreadyScheduled(process.pid));
        }
        last_arrival = last_arrival.max(process.arrival_time);
        total_burst = total_burst
            .checked_add(process.burst_time)
            .ok_or(SchedulerError::TimeOverflow)?;
        pids.push(process.pid);
    }

    // every event ends at or before this point
    last_arrival
        .checked_add(total_burst)
        .ok_or(SchedulerError::TimeOverflow)?;

    pids.sort();
    if let Some(pair) = pids.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(SchedulerError::DuplicatePid(pair[0]));
    }

    Ok(())
}
