pub mod job_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "loose-compare")]
#[command(about = "Loose structural comparison of JSON, TOML and CSV documents")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log comparison timings and process memory")]
    pub monitor: bool,

    #[arg(long, global = true, help = "Print results and logs as JSON")]
    pub json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check whether two documents are loose-equal
    Equal { left: PathBuf, right: PathBuf },

    /// Find the first element of a sequence document loose-equal to a value document
    IndexOf { sequence: PathBuf, value: PathBuf },

    /// Run a TOML comparison job
    Run {
        #[arg(short, long, default_value = "compare-job.toml")]
        config: PathBuf,

        /// Stop at the first case that misses its expectation
        #[arg(long)]
        fail_fast: bool,
    },
}

#[cfg(feature = "cli")]
impl Command {
    /// Input files the command reads, checked before anything runs.
    pub fn input_paths(&self) -> Vec<&PathBuf> {
        match self {
            Command::Equal { left, right } => vec![left, right],
            Command::IndexOf { sequence, value } => vec![sequence, value],
            Command::Run { config, .. } => vec![config],
        }
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        use crate::utils::validation::{validate_file_extension, validate_path};

        let allowed: &[&str] = match self.command {
            Command::Run { .. } => &["toml"],
            _ => &crate::adapters::SUPPORTED_EXTENSIONS,
        };
        for path in self.command.input_paths() {
            let text = path.to_string_lossy();
            validate_path("input", &text)?;
            validate_file_extension("input", &text, allowed)?;
        }
        Ok(())
    }
}
