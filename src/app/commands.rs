use crate::adapters::load_value;
use crate::config::job_config::JobConfig;
use crate::config::{CliConfig, Command};
use crate::core::coerce::to_display_string;
use crate::core::equality::loose_equal;
use crate::core::index::loose_index_of;
use crate::core::job::{CaseResult, JobReport, JobRunner};
use crate::domain::model::Value;
use crate::utils::error::{CompareError, Result};
use crate::utils::monitor::{PerfMarks, ProcessStats};
use crate::utils::validation::Validate;
use std::io::Write;

/// Validates the parsed command line and runs the selected command, writing
/// results to `out`.
pub fn execute<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    if config.monitor {
        tracing::info!("🔍 Monitoring enabled");
    }

    match &config.command {
        Command::Equal { left, right } => {
            let left = load_value(left)?;
            let right = load_value(right)?;
            let equal = timed(config, "equal", || loose_equal(&left, &right));
            write_result(config, out, &CaseResult::Equal(equal), None)?;
        }
        Command::IndexOf { sequence, value } => {
            let sequence = match load_value(sequence)? {
                Value::Array(items) => items,
                _ => {
                    return Err(CompareError::InvalidConfigValueError {
                        field: "sequence".to_string(),
                        value: sequence.display().to_string(),
                        reason: "Document is not an array".to_string(),
                    })
                }
            };
            let value = load_value(value)?;
            let index = timed(config, "index-of", || loose_index_of(&sequence, &value));
            let matched = usize::try_from(index).ok().map(|i| &sequence[i]);
            write_result(config, out, &CaseResult::IndexOf(index), matched)?;
        }
        Command::Run {
            config: job_path,
            fail_fast,
        } => {
            let mut job = JobConfig::from_file(job_path)?;
            if *fail_fast {
                job.settings.get_or_insert_with(Default::default).stop_on_failure = Some(true);
            }
            job.validate()?;
            tracing::info!("✅ Job configuration loaded and validated");

            let monitor = config.monitor || job.monitoring_enabled();
            let report = JobRunner::new_with_monitoring(job, monitor).run()?;
            write_report(config, out, &report)?;
            log_process_stats(config);
            report.into_result()?;
            return Ok(());
        }
    }

    log_process_stats(config);
    Ok(())
}

fn timed<T>(config: &CliConfig, name: &str, compare: impl FnOnce() -> T) -> T {
    let mut perf = PerfMarks::new(config.monitor);
    perf.mark("start");
    let result = compare();
    perf.mark("end");
    if let Some(elapsed) = perf.measure(name, "start", "end") {
        tracing::info!("⏱ {} took {:?}", name, elapsed);
    }
    result
}

fn log_process_stats(config: &CliConfig) {
    if config.monitor {
        if let Some(stats) = ProcessStats::current() {
            stats.log("Finished");
        }
    }
}

fn write_result<W: Write>(
    config: &CliConfig,
    out: &mut W,
    result: &CaseResult,
    matched: Option<&Value>,
) -> Result<()> {
    if config.json {
        let matched = matched.map(serde_json::to_value).transpose()?;
        writeln!(out, "{}", serde_json::json!({ "result": result, "matched": matched }))?;
        return Ok(());
    }
    match result {
        CaseResult::Equal(equal) => writeln!(out, "{}", equal)?,
        CaseResult::IndexOf(index) => {
            writeln!(out, "{}", index)?;
            if let Some(value) = matched {
                let rendered = to_display_string(value);
                if !rendered.is_empty() {
                    writeln!(out, "{}", rendered)?;
                }
            }
        }
    }
    Ok(())
}

fn write_report<W: Write>(config: &CliConfig, out: &mut W, report: &JobReport) -> Result<()> {
    if config.json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
        return Ok(());
    }

    writeln!(out, "📋 Job: {}", report.job)?;
    for outcome in &report.outcomes {
        let mark = if outcome.passed() { "✅" } else { "❌" };
        let result = match outcome.result {
            CaseResult::Equal(equal) => equal.to_string(),
            CaseResult::IndexOf(index) => index.to_string(),
        };
        match outcome.expected {
            Some(expected) if !outcome.passed() => writeln!(
                out,
                "  {} {}: {} (expected {:?})",
                mark, outcome.name, result, expected
            )?,
            _ => writeln!(out, "  {} {}: {}", mark, outcome.name, result)?,
        }
    }
    if report.skipped > 0 {
        writeln!(out, "  ⏭ {} cases skipped", report.skipped)?;
    }
    writeln!(
        out,
        "{} passed, {} failed",
        report.outcomes.len() - report.failed(),
        report.failed()
    )?;
    Ok(())
}
