//! Side by side comparison of scheduler runs.

use std::fmt::{self, Display};

use crate::{Log, ReportError};

const BAR_WIDTH: usize = 50;

/// Mean turnaround and waiting times of several runs.
///
/// The first entry is the reference the others are compared against; it is
/// marked with `|` on every bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    labels: Vec<String>,
    turnaround: Vec<f64>,
    waiting: Vec<f64>,
}

impl Comparison {
    pub fn new(
        labels: Vec<String>,
        turnaround: Vec<f64>,
        waiting: Vec<f64>,
    ) -> Result<Comparison, ReportError> {
        if labels.is_empty() || turnaround.is_empty() || waiting.is_empty() {
            return Err(ReportError::EmptyComparison);
        }
        if labels.len() != turnaround.len() || labels.len() != waiting.len() {
            return Err(ReportError::LengthMismatch {
                labels: labels.len(),
                turnaround: turnaround.len(),
                waiting: waiting.len(),
            });
        }

        Ok(Comparison {
            labels,
            turnaround,
            waiting,
        })
    }

    pub fn from_logs(logs: &[Log]) -> Result<Comparison, ReportError> {
        Comparison::new(
            logs.iter().map(|log| log.label.clone()).collect(),
            logs.iter().map(|log| log.metrics.mean_turnaround_time).collect(),
            logs.iter().map(|log| log.metrics.mean_waiting_time).collect(),
        )
    }

    /// The label with the lowest mean turnaround time.
    pub fn best_turnaround(&self) -> &str {
        best(&self.labels, &self.turnaround)
    }

    /// The label with the lowest mean waiting time.
    pub fn best_waiting(&self) -> &str {
        best(&self.labels, &self.waiting)
    }

    fn chart(&self, f: &mut fmt::Formatter<'_>, title: &str, values: &[f64]) -> fmt::Result {
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        let columns = |value: f64| {
            if max > 0.0 {
                (value / max * BAR_WIDTH as f64).round() as usize
            } else {
                0
            }
        };
        let reference = columns(values[0]);
        let label_width = self.labels.iter().map(String::len).max().unwrap_or(0);

        writeln!(f, "{title}")?;
        for (label, &value) in self.labels.iter().zip(values) {
            let length = columns(value);
            let bar: String = (0..=BAR_WIDTH)
                .map(|column| match column {
                    column if column == reference && reference > 0 => '|',
                    column if column < length => '=',
                    _ => ' ',
                })
                .collect();
            writeln!(f, "{label:<label_width$} {} {value:.2}", bar.trim_end())?;
        }
        writeln!(f, "reference ({}) = {:.2}", self.labels[0], values[0])
    }
}

fn best<'a>(labels: &'a [String], values: &[f64]) -> &'a str {
    labels
        .iter()
        .zip(values)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or("", |(label, _)| label.as_str())
}

impl Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chart(f, "Turnaround Time Comparison", &self.turnaround)?;
        writeln!(f)?;
        self.chart(f, "Waiting Time Comparison", &self.waiting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels() -> Vec<String> {
        vec!["ARR Q=4".to_string(), "RR Q=2".to_string()]
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(matches!(
            Comparison::new(vec![], vec![1.0], vec![1.0]),
            Err(ReportError::EmptyComparison)
        ));
        assert!(matches!(
            Comparison::new(labels(), vec![], vec![1.0, 2.0]),
            Err(ReportError::EmptyComparison)
        ));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(matches!(
            Comparison::new(labels(), vec![1.0], vec![1.0, 2.0]),
            Err(ReportError::LengthMismatch {
                labels: 2,
                turnaround: 1,
                waiting: 2
            })
        ));
    }

    #[test]
    fn mismatch_message_names_every_length() {
        let err = Comparison::new(labels(), vec![1.0], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "comparison inputs differ in length: 2 labels, 1 turnaround times, 3 waiting times"
        );
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let comparison = Comparison::new(labels(), vec![10.0, 20.0], vec![5.0, 2.5]).unwrap();
        let rendered = comparison.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Turnaround Time Comparison");
        assert_eq!(lines[1], format!("ARR Q=4 {}| 10.00", "=".repeat(25)));
        assert_eq!(
            lines[2],
            format!("RR Q=2  {}|{} 20.00", "=".repeat(25), "=".repeat(24))
        );
        assert_eq!(lines[3], "reference (ARR Q=4) = 10.00");
        assert_eq!(lines[6], format!("ARR Q=4 {}| 5.00", "=".repeat(50)));
    }

    #[test]
    fn picks_lowest_means() {
        let comparison = Comparison::new(labels(), vec![10.0, 20.0], vec![5.0, 2.5]).unwrap();

        assert_eq!(comparison.best_turnaround(), "ARR Q=4");
        assert_eq!(comparison.best_waiting(), "RR Q=2");
    }
}
