//! A CPU scheduling simulation library.
//!
//! This library provides the process model, the ready queue and two round
//! robin schedulers: one with a fixed quantum and one that adapts its
//! quantum after every round.
//!
//! Schedulers update the processes they are given in place. Every run needs
//! its own copy of the processes:
//!
//! ```rust
//! use scheduler::{run_round_robin, Metrics, Process};
//!
//! let processes = vec![Process::new(0, 0, 5), Process::new(1, 0, 3)];
//!
//! let mut run = processes.clone();
//! let trace = run_round_robin(&mut run, 2).unwrap();
//! assert_eq!(trace.len(), 5);
//!
//! let metrics = Metrics::from_processes(&run).unwrap();
//! assert_eq!(metrics.mean_waiting_time, 3.5);
//! ```

use std::num::NonZeroU64;

mod error;
mod metrics;
mod process;
mod ready_queue;
mod scheduler;

pub use crate::error::SchedulerError;
pub use crate::metrics::Metrics;
pub use crate::process::Process;
pub use crate::scheduler::{ExecutionEvent, Pid, QuantumAdjustment, Round, Scheduler, Trace};

pub(crate) use crate::ready_queue::ReadyQueue;

mod schedulers;

pub use schedulers::{AdaptiveRoundRobin, RoundRobin};

/// Returns a structure that implements the `Scheduler` trait with a fixed quantum round robin
/// policy
///
/// * `quantum` - the time a process can run before it is preempted
pub fn round_robin(quantum: NonZeroU64) -> RoundRobin {
    RoundRobin::new(quantum)
}

/// Returns a structure that implements the `Scheduler` trait with an adaptive round robin policy
///
/// * `initial_quantum` - the quantum used in the first round. It is lowered by one
///                       after every round in which a process finished and raised by
///                       one after every other round, never going below 1.
pub fn adaptive_round_robin(initial_quantum: NonZeroU64) -> AdaptiveRoundRobin {
    AdaptiveRoundRobin::new(initial_quantum)
}

/// Runs fixed quantum round robin over `processes` and returns the execution trace.
///
/// Fails without touching `processes` if the list is empty, the quantum is 0,
/// or a process is invalid or was already scheduled.
pub fn run_round_robin(processes: &mut [Process], quantum: u64) -> Result<Trace, SchedulerError> {
    schedulers::run_fixed(processes, quantum)
}

/// Runs adaptive round robin over `processes` and returns the execution trace.
///
/// Fails under the same conditions as [`run_round_robin`].
pub fn run_adaptive_round_robin(
    processes: &mut [Process],
    initial_quantum: u64,
) -> Result<Trace, SchedulerError> {
    schedulers::run_adaptive(processes, initial_quantum)
}
