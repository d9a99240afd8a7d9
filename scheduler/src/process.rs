use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{ExecutionEvent, Pid};

/// A simulated process.
///
/// `arrival_time` and `burst_time` never change once the process is
/// created. The rest of the fields are simulation state that the schedulers
/// update in place; they stay at their initial values until the process
/// completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub remaining_time: u64,
    pub completion_time: u64,
    pub turnaround_time: u64,
    pub waiting_time: u64,
}

impl Process {
    pub fn new(pid: usize, arrival_time: u64, burst_time: u64) -> Process {
        Process {
            pid: Pid::new(pid),
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }

    /// Returns `true` if a scheduler has already run this process.
    pub fn is_touched(&self) -> bool {
        self.remaining_time != self.burst_time || self.completion_time != 0
    }

    /// Run the process starting at `now` for at most `quantum` time units.
    ///
    /// If the remaining time fits in the quantum, the process completes and its
    /// timing fields are filled in.
    pub(crate) fn run(&mut self, now: u64, quantum: u64) -> ExecutionEvent {
        if self.remaining_time > quantum {
            self.remaining_time -= quantum;
            ExecutionEvent::new(self.pid, now, now + quantum)
        } else {
            let end = now + self.remaining_time;
            self.complete(end);
            ExecutionEvent::new(self.pid, now, end)
        }
    }

    fn complete(&mut self, time: u64) {
        self.remaining_time = 0;
        self.completion_time = time;
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

/// One row of a process table, lined up under
/// `PID ARRIVAL BURST COMPLETION TURNAROUND WAITING` tab stops.
impl Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{}\t{}\t{}\t{}\t\t{}\t\t{}",
            self.pid,
            self.arrival_time,
            self.burst_time,
            self.completion_time,
            self.turnaround_time,
            self.waiting_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preempted_slice_keeps_timings_empty() {
        let mut process = Process::new(3, 2, 7);
        let event = process.run(4, 3);

        assert_eq!(event, ExecutionEvent::new(Pid::new(3), 4, 7));
        assert_eq!(process.remaining_time, 4);
        assert_eq!(process.completion_time, 0);
        assert!(process.is_touched());
        assert!(!process.is_completed());
    }

    #[test]
    fn final_slice_fills_timings() {
        let mut process = Process::new(1, 2, 4);
        process.run(5, 3);
        let event = process.run(10, 3);

        assert_eq!(event, ExecutionEvent::new(Pid::new(1), 10, 11));
        assert_eq!(process.completion_time, 11);
        assert_eq!(process.turnaround_time, 9);
        assert_eq!(process.waiting_time, 5);
        assert!(process.is_completed());
    }

    #[test]
    fn exact_quantum_completes() {
        let mut process = Process::new(0, 0, 4);
        let event = process.run(0, 4);

        assert_eq!(event.duration(), 4);
        assert!(process.is_completed());
        assert_eq!(process.waiting_time, 0);
    }

    #[test]
    fn displays_as_table_row() {
        let mut process = Process::new(2, 1, 4);
        process.run(3, 4);

        assert_eq!(process.to_string(), "P2\t1\t4\t7\t\t6\t\t2");
    }
}
