use crate::config::job_config::{JobConfig, Operation, ResolvedCase};
use crate::core::equality::loose_equal;
use crate::core::index::loose_index_of;
use crate::utils::error::{CompareError, Result};
use crate::utils::monitor::PerfMarks;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CaseResult {
    Equal(bool),
    IndexOf(isize),
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub op: Operation,
    pub result: CaseResult,
    pub expected: Option<CaseResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u128>,
}

impl CaseOutcome {
    /// Cases without an expectation always pass.
    pub fn passed(&self) -> bool {
        !matches!(self.expected, Some(expected) if expected != self.result)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub job: String,
    pub outcomes: Vec<CaseOutcome>,
    /// Cases left unrun after an early stop.
    pub skipped: usize,
}

impl JobReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len() + self.skipped
    }

    pub fn into_result(self) -> Result<Self> {
        match self.failed() {
            0 => Ok(self),
            failed => Err(CompareError::ExpectationFailed {
                failed,
                total: self.total(),
            }),
        }
    }
}

pub struct JobRunner {
    config: JobConfig,
    perf: PerfMarks,
}

impl JobRunner {
    pub fn new(config: JobConfig) -> Self {
        let monitoring = config.monitoring_enabled();
        Self::new_with_monitoring(config, monitoring)
    }

    pub fn new_with_monitoring(config: JobConfig, monitor_enabled: bool) -> Self {
        Self {
            config,
            perf: PerfMarks::new(monitor_enabled),
        }
    }

    pub fn total_time(&self) -> Duration {
        self.perf.total()
    }

    /// Runs every case in order. Configuration and input errors abort the run;
    /// unmet expectations are only recorded in the report.
    pub fn run(&mut self) -> Result<JobReport> {
        tracing::info!(
            "Running job '{}' ({} cases)",
            self.config.job.name,
            self.config.cases.len()
        );

        let mut outcomes = Vec::with_capacity(self.config.cases.len());
        for (index, case) in self.config.cases.iter().enumerate() {
            let resolved = self.config.resolve(index, case)?;

            let start_tag = format!("case-{}-start", index);
            let end_tag = format!("case-{}-end", index);
            self.perf.mark(&start_tag);
            let result = match &resolved {
                ResolvedCase::Equal { left, right } => CaseResult::Equal(loose_equal(left, right)),
                ResolvedCase::IndexOf { sequence, value } => {
                    CaseResult::IndexOf(loose_index_of(sequence, value))
                }
            };
            self.perf.mark(&end_tag);
            let elapsed = self.perf.measure(&case.name, &start_tag, &end_tag);

            let expected = match (&case.expect, case.op) {
                (Some(toml::Value::Boolean(b)), Operation::Equal) => Some(CaseResult::Equal(*b)),
                (Some(toml::Value::Integer(i)), Operation::IndexOf) => {
                    Some(CaseResult::IndexOf(*i as isize))
                }
                _ => None,
            };

            let outcome = CaseOutcome {
                name: case.name.clone(),
                op: case.op,
                result,
                expected,
                elapsed_us: elapsed.map(|d| d.as_micros()),
            };

            if outcome.passed() {
                tracing::debug!("✅ {} -> {:?}", outcome.name, outcome.result);
            } else {
                tracing::warn!(
                    "❌ {} -> {:?}, expected {:?}",
                    outcome.name,
                    outcome.result,
                    outcome.expected
                );
            }

            let stop = !outcome.passed() && self.config.stop_on_failure();
            outcomes.push(outcome);
            if stop {
                tracing::info!("Stopping after first failing case");
                break;
            }
        }

        if self.perf.is_enabled() {
            tracing::info!(
                "⏱ Compared {} cases in {:?}",
                outcomes.len(),
                self.perf.total()
            );
        }

        let skipped = self.config.cases.len() - outcomes.len();
        Ok(JobReport {
            job: self.config.job.name.clone(),
            outcomes,
            skipped,
        })
    }
}
