use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use scheduler::{Process, Scheduler, SchedulerError, Trace};

/// Parameters for random workload generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of processes, with PIDs `0..count`.
    pub count: usize,
    /// Arrival times are drawn uniformly from this range.
    pub arrival: RangeInclusive<u64>,
    /// Burst times are drawn uniformly from this range.
    pub burst: RangeInclusive<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 5,
            arrival: 0..=100,
            burst: 10..=30,
        }
    }
}

/// The set of processes a simulation starts from.
///
/// A workload is never scheduled directly. Every run works on its own
/// [`Workload::snapshot`], so the same workload can be fed to any number of
/// schedulers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    pub fn new(processes: Vec<Process>) -> Workload {
        Workload { processes }
    }

    /// Generates a random workload.
    ///
    /// Panics if one of the ranges in `config` is empty.
    pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Workload {
        let processes = (0..config.count)
            .map(|pid| {
                Process::new(
                    pid,
                    rng.gen_range(config.arrival.clone()),
                    rng.gen_range(config.burst.clone()),
                )
            })
            .collect();
        Workload { processes }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// An independent copy of the processes, ready to be scheduled.
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }

    /// Schedules a fresh copy of the workload.
    ///
    /// Returns the updated copy together with the trace.
    pub fn run<S: Scheduler + ?Sized>(
        &self,
        scheduler: &S,
    ) -> Result<(Vec<Process>, Trace), SchedulerError> {
        let mut processes = self.snapshot();
        let trace = scheduler.schedule(&mut processes)?;
        Ok((processes, trace))
    }
}

impl From<Vec<Process>> for Workload {
    fn from(processes: Vec<Process>) -> Self {
        Workload::new(processes)
    }
}
