//! Ready queue with arrival based admission.
//!
//! The queue stores indices into the process slice owned by the running
//! scheduler. Processes are admitted in arrival order; processes that arrive
//! at the same time keep the order in which the caller passed them.

use std::collections::VecDeque;

use tracing::debug;

use crate::Process;

pub(crate) struct ReadyQueue {
    queue: VecDeque<usize>,
    arrivals: Vec<usize>,
    next_arrival: usize,
}

impl ReadyQueue {
    pub(crate) fn new(processes: &[Process]) -> Self {
        let mut arrivals: Vec<usize> = (0..processes.len()).collect();
        arrivals.sort_by_key(|&index| processes[index].arrival_time);

        ReadyQueue {
            queue: VecDeque::with_capacity(processes.len()),
            arrivals,
            next_arrival: 0,
        }
    }

    /// Admits the processes present at the start of the simulation.
    ///
    /// Returns the start time. If nothing arrives at time 0 the clock starts
    /// at the earliest arrival.
    pub(crate) fn seed(&mut self, processes: &[Process]) -> u64 {
        let now = self
            .arrivals
            .first()
            .map_or(0, |&index| processes[index].arrival_time);
        self.admit(processes, now);
        now
    }

    /// Appends every process that has arrived by `now` and is not yet admitted.
    pub(crate) fn admit(&mut self, processes: &[Process], now: u64) {
        while let Some(&index) = self.arrivals.get(self.next_arrival) {
            if processes[index].arrival_time > now {
                break;
            }
            self.queue.push_back(index);
            self.next_arrival += 1;
        }
    }

    /// Lets the CPU idle until the next arrival when nothing is ready.
    ///
    /// Does nothing if the queue still holds processes or every process has
    /// already been admitted.
    pub(crate) fn idle_jump(&mut self, processes: &[Process], now: &mut u64) {
        if !self.queue.is_empty() {
            return;
        }
        let Some(&index) = self.arrivals.get(self.next_arrival) else {
            return;
        };

        let arrival = processes[index].arrival_time;
        debug!(from = *now, to = arrival, "cpu idle");
        *now = arrival;
        self.admit(processes, arrival);
    }

    pub(crate) fn pop_front(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    pub(crate) fn push_back(&mut self, index: usize) {
        self.queue.push_back(index);
    }

    /// The queued process indices, head first.
    pub(crate) fn snapshot(&self) -> Vec<usize> {
        self.queue.iter().copied().collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn processes() -> Vec<Process> {
        vec![
            Process::new(0, 7, 3),
            Process::new(1, 2, 3),
            Process::new(2, 2, 3),
            Process::new(3, 20, 3),
        ]
    }

    #[test]
    fn seed_starts_at_first_arrival() {
        let processes = processes();
        let mut queue = ReadyQueue::new(&processes);

        assert_eq!(queue.seed(&processes), 2);
        assert_eq!(queue.snapshot(), vec![1, 2]);
    }

    #[test]
    fn admits_each_process_once() {
        let processes = processes();
        let mut queue = ReadyQueue::new(&processes);
        queue.seed(&processes);

        queue.admit(&processes, 7);
        queue.admit(&processes, 8);
        assert_eq!(queue.snapshot(), vec![1, 2, 0]);
    }

    #[test]
    fn idle_jump_moves_clock_to_next_arrival() {
        let processes = processes();
        let mut queue = ReadyQueue::new(&processes);
        queue.seed(&processes);
        queue.admit(&processes, 10);
        while queue.pop_front().is_some() {}

        let mut now = 10;
        queue.idle_jump(&processes, &mut now);
        assert_eq!(now, 20);
        assert_eq!(queue.snapshot(), vec![3]);

        // every process is admitted, nothing left to wait for
        while queue.pop_front().is_some() {}
        queue.idle_jump(&processes, &mut now);
        assert_eq!(now, 20);
        assert!(queue.is_empty());
    }

    #[test]
    fn idle_jump_ignored_while_queue_has_work() {
        let processes = processes();
        let mut queue = ReadyQueue::new(&processes);
        queue.seed(&processes);

        let mut now = 3;
        queue.idle_jump(&processes, &mut now);
        assert_eq!(now, 3);
        assert_eq!(queue.snapshot().len(), 2);
    }
}
