//! A processor simulation library
//!
//! This is used for running the schedulers from the [`scheduler`] crate over a
//! workload and reporting on the results.

use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use scheduler::{Metrics, Pid, Process, Scheduler, SchedulerError, Trace};

mod compare;
mod error;
mod gantt;
mod report;
mod workload;

pub use compare::Comparison;
pub use error::ReportError;
pub use gantt::{render_gantt, write_gantt_charts, GanttChart};
pub use report::{read_report, write_report};
pub use workload::{GeneratorConfig, Workload};

/// The outcome of one scheduler run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// The name of the scheduler, as returned by [`Scheduler::name`].
    pub label: String,

    /// The processes after the run, in workload order.
    pub processes: Vec<Process>,

    /// The execution trace.
    pub trace: Trace,

    /// Mean waiting and turnaround times.
    pub metrics: Metrics,
}

impl Log {
    pub fn new(label: String, processes: Vec<Process>, trace: Trace, metrics: Metrics) -> Log {
        Log {
            label,
            processes,
            trace,
            metrics,
        }
    }

    /// Describes every run segment of the trace, one line per segment.
    pub fn segments(&self) -> Vec<String> {
        let mut remaining: HashMap<Pid, u64> = self
            .processes
            .iter()
            .map(|process| (process.pid, process.burst_time))
            .collect();

        self.trace
            .iter()
            .map(|event| {
                let left = remaining.entry(event.pid).or_default();
                *left = left.saturating_sub(event.duration());
                if *left == 0 {
                    format!(
                        "{}->{}: P{} ran for {} units. process completed.",
                        event.start,
                        event.end,
                        event.pid,
                        event.duration()
                    )
                } else {
                    format!(
                        "{}->{}: P{} ran for {} units of time. remaining: {}.",
                        event.start,
                        event.end,
                        event.pid,
                        event.duration(),
                        left
                    )
                }
            })
            .collect()
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "PID\tARRIVAL\tBURST\tCOMPLETION\tTURNAROUND\tWAITING")?;
        for process in &self.processes {
            writeln!(f, "{process}")?;
        }
        writeln!(f, "{}", self.metrics)
    }
}

/// The processor simulator.
pub struct Processor;

impl Processor {
    /// Run `scheduler` over a fresh copy of `workload`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::{Processor, Workload};
    /// use scheduler::Process;
    /// use std::num::NonZeroU64;
    ///
    /// let workload = Workload::new(vec![Process::new(0, 0, 5), Process::new(1, 0, 3)]);
    /// let scheduler = scheduler::round_robin(NonZeroU64::new(2).unwrap());
    /// let log = Processor::run(&scheduler, &workload).unwrap();
    ///
    /// assert_eq!(log.metrics.mean_turnaround_time, 7.5);
    /// ```
    pub fn run<S: Scheduler + ?Sized>(
        scheduler: &S,
        workload: &Workload,
    ) -> Result<Log, SchedulerError> {
        let label = scheduler.name();
        let (processes, trace) = workload.run(scheduler)?;
        let metrics = Metrics::from_processes(&processes)?;

        let log = Log::new(label, processes, trace, metrics);
        for segment in log.segments() {
            #[cfg(feature = "output")]
            println!("{segment}");
            debug!(scheduler = %log.label, "{segment}");
        }
        info!(
            scheduler = %log.label,
            segments = log.trace.len(),
            mean_turnaround = log.metrics.mean_turnaround_time,
            mean_waiting = log.metrics.mean_waiting_time,
            "run finished"
        );
        Ok(log)
    }

    /// Run every scheduler over its own copy of `workload`, in order.
    pub fn sweep(
        workload: &Workload,
        schedulers: &[&dyn Scheduler],
    ) -> Result<Vec<Log>, SchedulerError> {
        schedulers
            .iter()
            .map(|scheduler| Processor::run(*scheduler, workload))
            .collect()
    }
}

/// Format the [`Processor`]'s logs to a [`String`].
///
/// * `logs` - the logs returned by the [`Processor`].
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for (run, log) in logs.iter().enumerate() {
        // writing into a String never fails
        let _ = fmt::write(
            &mut s,
            format_args!("===== Run: {} =====\n{}\n", run + 1, log),
        );
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::num::NonZeroU64;

    fn workload() -> Workload {
        Workload::new(vec![Process::new(0, 0, 5), Process::new(1, 0, 3)])
    }

    fn round_robin_log() -> Log {
        let scheduler = scheduler::round_robin(NonZeroU64::new(2).unwrap());
        Processor::run(&scheduler, &workload()).unwrap()
    }

    #[test]
    fn segments_describe_each_slice() {
        let log = round_robin_log();

        assert_eq!(
            log.segments(),
            vec![
                "0->2: P0 ran for 2 units of time. remaining: 3.",
                "2->4: P1 ran for 2 units of time. remaining: 1.",
                "4->6: P0 ran for 2 units of time. remaining: 1.",
                "6->7: P1 ran for 1 units. process completed.",
                "7->8: P0 ran for 1 units. process completed.",
            ]
        );
    }

    #[test]
    fn log_prints_process_table() {
        let log = round_robin_log();

        assert_eq!(
            log.to_string(),
            "RR Q=2\n\
             PID\tARRIVAL\tBURST\tCOMPLETION\tTURNAROUND\tWAITING\n\
             P0\t0\t5\t8\t\t8\t\t3\n\
             P1\t0\t3\t7\t\t7\t\t4\n\
             mean turnaround time: 7.5, mean waiting time: 3.5\n"
        );
    }

    #[test]
    fn sweep_runs_each_scheduler_on_its_own_copy() {
        let rr = scheduler::round_robin(NonZeroU64::new(2).unwrap());
        let arr = scheduler::adaptive_round_robin(NonZeroU64::new(2).unwrap());
        let logs = Processor::sweep(&workload(), &[&arr, &rr, &rr]).unwrap();

        let labels: Vec<&str> = logs.iter().map(|log| log.label.as_str()).collect();
        assert_eq!(labels, vec!["ARR Q=2", "RR Q=2", "RR Q=2"]);
        assert_eq!(logs[1], logs[2]);
    }

    #[test]
    fn format_logs_numbers_runs() {
        let log = round_robin_log();
        let formatted = format_logs(&[log.clone(), log]);

        assert!(formatted.starts_with("===== Run: 1 =====\nRR Q=2\n"));
        assert!(formatted.contains("===== Run: 2 =====\n"));
    }
}
