use scheduler::{Process, Scheduler, SchedulerError};

use std::fmt::Write;
use std::num::NonZeroU64;

use processor::{Log, Processor, Workload};


/// Builds a workload from `(arrival, burst)` pairs, numbering PIDs from 0.
fn workload(processes: &[(u64, u64)]) -> Workload {
    processes
        .iter()
        .enumerate()
        .map(|(pid, &(arrival, burst))| Process::new(pid, arrival, burst))
        .collect::<Vec<_>>()
        .into()
}

fn quantum(value: u64) -> NonZeroU64 {
    NonZeroU64::new(value).unwrap()
}

fn simulate<S: Scheduler>(scheduler: S, processes: &[(u64, u64)]) -> Result<Log, SchedulerError> {
    Processor::run(&scheduler, &workload(processes))
}

/// A compact, line oriented description of a run.
fn summary(log: &Log) -> String {
    let mut s = String::new();
    writeln!(s, "{}", log.label).unwrap();
    let trace: Vec<String> = log.trace.iter().map(ToString::to_string).collect();
    writeln!(s, "trace: {}", trace.join(" ")).unwrap();
    for round in &log.trace.rounds {
        writeln!(
            s,
            "round {}: quantum {}, {} slices, {}",
            round.number, round.quantum, round.slices, round.adjustment
        )
        .unwrap();
    }
    for process in &log.processes {
        writeln!(
            s,
            "P{}: completion {}, turnaround {}, waiting {}",
            process.pid, process.completion_time, process.turnaround_time, process.waiting_time
        )
        .unwrap();
    }
    writeln!(s, "{}", log.metrics).unwrap();
    s
}

fn run(folder: &str, name: &str, log: &Log, expected: &str) {
    let output = summary(log);

    println!("\nleft = Correct Output\nright = Your Output\n");
    use pretty_assertions::assert_eq;
    assert_eq!(expected, output, "{folder}::{name}");
}
