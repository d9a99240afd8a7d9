use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use processor::{
    format_logs, write_gantt_charts, write_report, Comparison, Log, Processor, Workload,
};
use scheduler::{adaptive_round_robin, round_robin, Scheduler, SchedulerError};

mod config;
mod logging;

use config::Config;

/// Runs adaptive round robin first, then round robin once per configured quantum.
fn simulate(config: &Config, workload: &Workload) -> Result<Vec<Log>, SchedulerError> {
    let adaptive = adaptive_round_robin(config.arr_quantum);
    let fixed: Vec<_> = config.rr_quantums.iter().copied().map(round_robin).collect();

    let mut schedulers: Vec<&dyn Scheduler> = vec![&adaptive];
    schedulers.extend(fixed.iter().map(|scheduler| scheduler as &dyn Scheduler));

    Processor::sweep(workload, &schedulers)
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init_tracing(config.trace_json);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let workload = Workload::generate(&config.generator(), &mut rng);
    info!(processes = workload.len(), seed = ?config.seed, "workload generated");

    let logs = simulate(&config, &workload).context("simulation failed")?;
    println!("{}", format_logs(&logs));

    write_gantt_charts(&config.output_dir, &logs)
        .with_context(|| format!("writing gantt charts to {}", config.output_dir.display()))?;
    write_report(&config.output_dir.join("report.json"), &logs).context("writing report")?;

    let comparison = Comparison::from_logs(&logs)?;
    println!("{comparison}");
    println!(
        "lowest mean turnaround: {}, lowest mean waiting: {}",
        comparison.best_turnaround(),
        comparison.best_waiting()
    );

    Ok(())
}

#[cfg(test)]
mod tests;
