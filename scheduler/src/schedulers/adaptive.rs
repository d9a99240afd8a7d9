use std::num::NonZeroU64;

use tracing::debug;

use crate::error::validate;
use crate::{Process, QuantumAdjustment, ReadyQueue, Round, Scheduler, SchedulerError, Trace};

/// Round robin with a quantum that adapts after every round.
///
/// A round runs each process that was ready when the round started once,
/// for at most the current quantum. Afterwards the quantum shrinks by one
/// (never below 1) if any of those processes finished, and grows by one
/// otherwise.
///
/// Only the first finished process found in the round snapshot is looked
/// at, so one completion or five lead to the same single step down. This is
/// a coarse heuristic and is kept on purpose.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AdaptiveRoundRobin {
    initial_quantum: NonZeroU64,
}

impl AdaptiveRoundRobin {
    pub fn new(initial_quantum: NonZeroU64) -> Self {
        AdaptiveRoundRobin { initial_quantum }
    }

    pub fn initial_quantum(&self) -> u64 {
        self.initial_quantum.get()
    }
}

impl Scheduler for AdaptiveRoundRobin {
    fn name(&self) -> String {
        format!("ARR Q={}", self.initial_quantum)
    }

    fn schedule(&self, processes: &mut [Process]) -> Result<Trace, SchedulerError> {
        run(processes, self.initial_quantum.get())
    }
}

pub(crate) fn run(
    processes: &mut [Process],
    initial_quantum: u64,
) -> Result<Trace, SchedulerError> {
    validate(processes, initial_quantum)?;

    let mut trace = Trace::new();
    let mut ready_queue = ReadyQueue::new(processes);
    let mut now = ready_queue.seed(processes);
    let mut quantum = initial_quantum;

    while !ready_queue.is_empty() {
        let number = trace.rounds.len() + 1;
        let snapshot = ready_queue.snapshot();
        let mut slices = 0;
        debug!(round = number, quantum, ready = snapshot.len(), "round started");

        for _ in 0..snapshot.len() {
            let Some(index) = ready_queue.pop_front() else {
                break;
            };

            let process = &mut processes[index];
            let event = process.run(now, quantum);
            let unfinished = !process.is_completed();
            now = event.end;
            debug!(
                pid = %event.pid,
                start = event.start,
                end = event.end,
                remaining = process.remaining_time,
                "slice"
            );
            trace.push(event);
            slices += 1;

            ready_queue.admit(processes, now);
            if unfinished {
                ready_queue.push_back(index);
            }
        }

        // mid-round arrivals are not part of the snapshot and never count
        let adjustment = match snapshot
            .iter()
            .find(|&&index| processes[index].completion_time > 0)
        {
            Some(_) => QuantumAdjustment::Decreased,
            None => QuantumAdjustment::Increased,
        };

        trace.rounds.push(Round {
            number,
            quantum,
            slices,
            adjustment,
        });

        quantum = match adjustment {
            QuantumAdjustment::Decreased => quantum.saturating_sub(1).max(1),
            QuantumAdjustment::Increased => quantum.saturating_add(1),
        };
        debug!(round = number, quantum, %adjustment, "quantum adjusted");

        ready_queue.idle_jump(processes, &mut now);
    }

    Ok(trace)
}
