use std::num::NonZeroU64;

use tracing::debug;

use crate::error::validate;
use crate::{Process, ReadyQueue, Scheduler, SchedulerError, Trace};

/// Fixed quantum round robin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU64) -> Self {
        RoundRobin { quantum }
    }

    pub fn quantum(&self) -> u64 {
        self.quantum.get()
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> String {
        format!("RR Q={}", self.quantum)
    }

    fn schedule(&self, processes: &mut [Process]) -> Result<Trace, SchedulerError> {
        run(processes, self.quantum.get())
    }
}

pub(crate) fn run(processes: &mut [Process], quantum: u64) -> Result<Trace, SchedulerError> {
    validate(processes, quantum)?;

    let mut trace = Trace::new();
    let mut ready_queue = ReadyQueue::new(processes);
    let mut now = ready_queue.seed(processes);

    while let Some(index) = ready_queue.pop_front() {
        let process = &mut processes[index];
        let event = process.run(now, quantum);
        now = event.end;

        if process.is_completed() {
            debug!(pid = %event.pid, start = event.start, end = event.end, "completed");
        } else {
            debug!(
                pid = %event.pid,
                start = event.start,
                end = event.end,
                remaining = process.remaining_time,
                "preempted"
            );
        }
        let unfinished = !process.is_completed();
        trace.push(event);

        // new arrivals go ahead of the preempted process
        ready_queue.admit(processes, now);
        if unfinished {
            ready_queue.push_back(index);
        }

        ready_queue.idle_jump(processes, &mut now);
    }

    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExecutionEvent, Pid};
    use pretty_assertions::assert_eq;

    fn events(triples: &[(usize, u64, u64)]) -> Vec<ExecutionEvent> {
        triples.iter().copied().map(ExecutionEvent::from).collect()
    }

    #[test]
    fn two_processes_quantum_2() {
        let mut processes = vec![Process::new(0, 0, 5), Process::new(1, 0, 3)];
        let trace = run(&mut processes, 2).unwrap();

        assert_eq!(
            trace.events,
            events(&[(0, 0, 2), (1, 2, 4), (0, 4, 6), (1, 6, 7), (0, 7, 8)])
        );
        assert!(trace.rounds.is_empty());
        assert_eq!(
            (processes[0].waiting_time, processes[0].turnaround_time),
            (3, 8)
        );
        assert_eq!(
            (processes[1].waiting_time, processes[1].turnaround_time),
            (4, 7)
        );
    }

    #[test]
    fn arrivals_are_queued_before_preempted_process() {
        let mut processes = vec![Process::new(0, 0, 4), Process::new(1, 1, 2)];
        let trace = run(&mut processes, 2).unwrap();

        assert_eq!(trace.events, events(&[(0, 0, 2), (1, 2, 4), (0, 4, 6)]));
    }

    #[test]
    fn idle_cpu_jumps_to_next_arrival() {
        let mut processes = vec![Process::new(1, 10, 2), Process::new(0, 2, 3)];
        let trace = run(&mut processes, 2).unwrap();

        assert_eq!(trace.events, events(&[(0, 2, 4), (0, 4, 5), (1, 10, 12)]));
        assert!(processes.iter().all(|process| process.waiting_time == 0));
    }

    #[test]
    fn invalid_input_leaves_processes_untouched() {
        let mut processes = vec![Process::new(0, 0, 5), Process::new(1, 0, 0)];
        let before = processes.clone();

        assert_eq!(
            run(&mut processes, 2),
            Err(SchedulerError::ZeroBurst(Pid::new(1)))
        );
        assert_eq!(processes, before);
    }

    #[test]
    fn clock_overflow_is_rejected_up_front() {
        let mut processes = vec![Process::new(0, u64::MAX - 2, 5)];

        assert_eq!(run(&mut processes, 10), Err(SchedulerError::TimeOverflow));
        assert!(!processes[0].is_touched());
    }

    #[test]
    fn scheduler_name() {
        let scheduler = RoundRobin::new(NonZeroU64::new(3).unwrap());
        assert_eq!(scheduler.name(), "RR Q=3");
        assert_eq!(scheduler.quantum(), 3);
    }
}
