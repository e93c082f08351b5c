//! Performance metrics and profiling utilities for `collatab`.
//!
//! This module provides:
//! - [`PhaseTimer`] - A wrapper around `Instant` for timing different phases
//! - [`ProfileData`] - Structured data for performance metrics
//! - [`print_profile_summary`] - Terminal output for profiling results
//! - [`save_stats_json`] - JSON output for scripting integration
//!
//! # Usage
//!
//! ```rust
//! use collatab::metrics::{PhaseTimer, ProfileData};
//!
//! let mut profile = ProfileData::new();
//! let timer = PhaseTimer::new("Load");
//!
//! // ... do work ...
//!
//! profile.add_phase(timer.finish());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A timer for measuring the duration of a specific phase or operation.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    /// The name of the phase being timed
    pub name: String,
    /// The start time of the phase
    pub start: Instant,
}

impl PhaseTimer {
    /// Creates a new timer and starts timing the specified phase.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Finishes timing the phase and returns the elapsed duration.
    pub fn finish(self) -> PhaseResult {
        PhaseResult {
            name: self.name,
            duration: self.start.elapsed(),
        }
    }
}

/// The result of a completed phase timing operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseResult {
    /// The name of the phase that was timed
    pub name: String,
    /// The duration of the phase
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

/// Durations are written as fractional milliseconds; renders are usually sub-millisecond.
mod duration_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(millis / 1000.0)
            .map_err(|e| D::Error::custom(format!("invalid duration {millis} ms: {e}")))
    }
}

/// Timing data for one invocation: load, render and write phases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    /// Timing results for each phase
    pub phases: Vec<PhaseResult>,
    /// Additional metadata (witness and column counts, views)
    pub metadata: BTreeMap<String, String>,
}

impl ProfileData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_phase(&mut self, phase: PhaseResult) {
        self.phases.push(phase);
    }

    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Gets the total duration of all phases combined.
    pub fn total_duration(&self) -> Duration {
        self.phases.iter().map(|p| p.duration).sum()
    }

    /// Formats the human-readable summary printed by [`print_profile_summary`].
    ///
    /// # Example Output
    /// ```text
    /// Render phase timings
    ///   Load               1.204 ms
    ///   Render             0.311 ms
    ///   Write              0.052 ms
    /// Total:               1.567 ms
    /// ```
    pub fn summary(&self) -> String {
        let mut out = String::from("Render phase timings\n");
        for phase in &self.phases {
            out.push_str(&format!(
                "  {:<15} {:>8.3} ms\n",
                phase.name,
                phase.duration.as_secs_f64() * 1000.0
            ));
        }
        out.push_str(&format!(
            "Total:            {:>8.3} ms\n",
            self.total_duration().as_secs_f64() * 1000.0
        ));

        if !self.metadata.is_empty() {
            out.push_str("\nAdditional metrics:\n");
            for (key, value) in &self.metadata {
                out.push_str(&format!("  {:<15} {}\n", key, value));
            }
        }
        out
    }
}

/// Prints the profile summary to stderr, keeping stdout free for rendered output.
pub fn print_profile_summary(profile: &ProfileData) {
    eprintln!("\n{}", profile.summary());
}

/// Saves profiling statistics as `stats.json` next to `output_path`.
///
/// # Returns
/// The path of the written stats file.
pub fn save_stats_json(output_path: &Path, profile: &ProfileData) -> anyhow::Result<PathBuf> {
    let stats_path = output_path.with_file_name("stats.json");

    let stats = serde_json::json!({
        "phases": profile.phases,
        "total_duration_ms": profile.total_duration().as_secs_f64() * 1000.0,
        "metadata": profile.metadata,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    std::fs::write(&stats_path, serde_json::to_string_pretty(&stats)?)?;
    Ok(stats_path)
}

/// Times a block of code, returning `(result, PhaseResult)`.
///
/// # Example
/// ```rust
/// use collatab::time_phase;
///
/// let (result, timing) = time_phase!("Render", {
///     // ... some expensive operation ...
///     42
/// });
/// assert_eq!(result, 42);
/// assert_eq!(timing.name, "Render");
/// ```
#[macro_export]
macro_rules! time_phase {
    ($name:expr, $code:block) => {{
        let timer = $crate::metrics::PhaseTimer::new($name);
        let result = $code;
        let timing = timer.finish();
        (result, timing)
    }};
}
