use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Process, SchedulerError};

/// The PID of a process
///
/// PIDs are assigned by the caller and start from 0.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pid(usize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One contiguous run segment of a process on the CPU.
///
/// `end` is always strictly greater than `start`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    /// The process that was running.
    pub pid: Pid,
    /// The simulated time at which the segment started.
    pub start: u64,
    /// The simulated time at which the segment ended.
    pub end: u64,
}

impl ExecutionEvent {
    pub fn new(pid: Pid, start: u64, end: u64) -> ExecutionEvent {
        ExecutionEvent { pid, start, end }
    }

    /// Number of time units spent on the CPU.
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

impl From<(usize, u64, u64)> for ExecutionEvent {
    fn from((pid, start, end): (usize, u64, u64)) -> Self {
        ExecutionEvent::new(Pid::new(pid), start, end)
    }
}

impl Display for ExecutionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.pid, self.start, self.end)
    }
}

/// How the adaptive scheduler changed its quantum after a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantumAdjustment {
    /// A process queued at the start of the round completed.
    Decreased,
    /// No process queued at the start of the round completed.
    Increased,
}

impl Display for QuantumAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantumAdjustment::Decreased => write!(f, "decreased"),
            QuantumAdjustment::Increased => write!(f, "increased"),
        }
    }
}

/// A single round of the adaptive scheduler.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The round number, starting from 1.
    pub number: usize,
    /// The quantum that was in effect during the round.
    pub quantum: u64,
    /// The number of run segments emitted during the round.
    pub slices: usize,
    /// The change applied to the quantum once the round ended.
    pub adjustment: QuantumAdjustment,
}

/// The execution trace produced by a scheduler run.
///
/// Events are kept in emission order. Sorting them by start time gives
/// the single CPU timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Run segments, in the order they were emitted.
    pub events: Vec<ExecutionEvent>,
    /// Per round bookkeeping. Only round based schedulers fill this in.
    pub rounds: Vec<Round>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    pub(crate) fn push(&mut self, event: ExecutionEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> u64 {
        self.events.iter().map(ExecutionEvent::duration).sum()
    }

    /// The time at which the last segment ended.
    pub fn makespan(&self) -> u64 {
        self.events.iter().map(|event| event.end).max().unwrap_or(0)
    }

    /// Distinct PIDs that appear in the trace, in ascending order.
    pub fn pids(&self) -> Vec<Pid> {
        let mut pids: Vec<Pid> = self.events.iter().map(|event| event.pid).collect();
        pids.sort();
        pids.dedup();
        pids
    }

    /// The events ordered by start time.
    pub fn sorted_by_start(&self) -> Vec<ExecutionEvent> {
        let mut events = self.events.clone();
        events.sort_by_key(|event| event.start);
        events
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a ExecutionEvent;
    type IntoIter = std::slice::Iter<'a, ExecutionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// The trait that any scheduling policy has to implement.
///
/// A scheduler is a plain configuration value. All simulation state lives
/// inside a single call to [`Scheduler::schedule`], so one scheduler can be
/// reused for many runs.
pub trait Scheduler: Send + Sync {
    /// A short label for reports, like `RR Q=2`.
    fn name(&self) -> String;

    /// Runs every process to completion and returns the execution trace.
    ///
    /// The processes are updated in place. They must be a fresh copy that
    /// no other run has touched.
    fn schedule(&self, processes: &mut [Process]) -> Result<Trace, SchedulerError>;
}
