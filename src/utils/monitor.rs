use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Named timing marks. A measure consumes its start and end marks.
///
/// When disabled every call is a no-op, so callers can mark unconditionally.
#[derive(Debug, Default)]
pub struct PerfMarks {
    enabled: bool,
    marks: HashMap<String, Instant>,
    measures: Vec<(String, Duration)>,
}

impl PerfMarks {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mark(&mut self, tag: &str) {
        if self.enabled {
            self.marks.insert(tag.to_string(), Instant::now());
        }
    }

    /// Records the time between two marks under `name` and clears both marks.
    pub fn measure(&mut self, name: &str, start_tag: &str, end_tag: &str) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        let start = self.marks.remove(start_tag)?;
        let end = self.marks.remove(end_tag)?;
        let elapsed = end.saturating_duration_since(start);
        tracing::debug!("⏱ {} took {:?}", name, elapsed);
        self.measures.push((name.to_string(), elapsed));
        Some(elapsed)
    }

    pub fn measures(&self) -> &[(String, Duration)] {
        &self.measures
    }

    pub fn total(&self) -> Duration {
        self.measures.iter().map(|(_, d)| *d).sum()
    }
}

#[cfg(feature = "cli")]
mod process {
    use sysinfo::{Pid, System};

    /// Resident memory and CPU usage of the current process.
    #[derive(Debug, Clone, Copy)]
    pub struct ProcessStats {
        pub memory_mb: u64,
        pub cpu_usage: f32,
    }

    impl ProcessStats {
        pub fn current() -> Option<Self> {
            let pid: Pid = sysinfo::get_current_pid().ok()?;
            let mut system = System::new();
            system.refresh_all();
            let process = system.process(pid)?;
            Some(Self {
                memory_mb: process.memory() / 1024 / 1024,
                cpu_usage: process.cpu_usage(),
            })
        }

        pub fn log(&self, phase: &str) {
            tracing::info!(
                "📊 {} - Memory: {}MB, CPU: {:.1}%",
                phase,
                self.memory_mb,
                self.cpu_usage
            );
        }
    }
}

#[cfg(feature = "cli")]
pub use process::ProcessStats;
