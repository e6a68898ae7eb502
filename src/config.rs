use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Quick commands are picked with a single digit.
pub const MAX_QUICK_COMMANDS: usize = 9;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    #[serde(default)]
    pub timing: TimingConfig,
    /// Shortcuts that pre-fill the command input.
    #[serde(default)]
    pub quick_commands: Vec<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated stage latency and the cosmetic duration shown per stage.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct TimingConfig {
    #[serde(default = "default_stage_latency")]
    pub stage_latency_ms: MsRange,
    #[serde(default = "default_stage_duration")]
    pub stage_duration_ms: MsRange,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            stage_latency_ms: default_stage_latency(),
            stage_duration_ms: default_stage_duration(),
        }
    }
}

impl TimingConfig {
    /// No suspension between stages; durations still look realistic.
    pub fn instant() -> Self {
        Self {
            stage_latency_ms: MsRange::fixed(0),
            ..Self::default()
        }
    }
}

fn default_stage_latency() -> MsRange {
    MsRange { min: 1000, max: 2000 }
}

fn default_stage_duration() -> MsRange {
    MsRange { min: 200, max: 700 }
}

/// Half-open millisecond range `[min, max)`. Degenerates to `min` when
/// `min >= max`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct MsRange {
    pub min: u64,
    pub max: u64,
}

impl MsRange {
    pub fn fixed(ms: u64) -> Self {
        Self { min: ms, max: ms }
    }

    /// Draws a value uniformly from the range.
    pub fn sample_ms(&self) -> u64 {
        if self.min >= self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..self.max)
    }

    pub fn sample(&self) -> Duration {
        Duration::from_millis(self.sample_ms())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Directory for `events.jsonl`; `None` uses the per-session default.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl EditorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).context("Failed to parse config as YAML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        const DEFAULT_EDITOR_YAML: &str = include_str!("../editor.yaml");

        serde_yaml::from_str(DEFAULT_EDITOR_YAML)
            .expect("Failed to parse embedded editor.yaml - this is a bug in the editor.yaml file")
    }

    fn validate(&self) -> Result<()> {
        for (name, range) in [
            ("stage_latency_ms", self.timing.stage_latency_ms),
            ("stage_duration_ms", self.timing.stage_duration_ms),
        ] {
            if range.min > range.max {
                anyhow::bail!(
                    "timing.{}: min ({}) is greater than max ({})",
                    name,
                    range.min,
                    range.max
                );
            }
        }

        if self.quick_commands.len() > MAX_QUICK_COMMANDS {
            anyhow::bail!(
                "At most {} quick commands are supported, found {}",
                MAX_QUICK_COMMANDS,
                self.quick_commands.len()
            );
        }

        if let Some(blank) = self.quick_commands.iter().position(|c| c.trim().is_empty()) {
            anyhow::bail!("Quick command {} is blank", blank + 1);
        }

        Ok(())
    }

    /// Directory for this session's structured log.
    pub fn log_dir(&self, session_id: &str) -> PathBuf {
        match &self.logging.dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(".agentic-editor")
                .join("logs")
                .join(session_id),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
