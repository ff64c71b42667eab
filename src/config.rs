//! Configuration module

use crate::error::ConfigError;
use crate::ops::OperationKind;
use crate::types::RunSettings;
use crate::workload::Spacing;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "SEARCH_BENCH_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/bench.json";

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input sizes to sweep
    pub sizes: Vec<usize>,

    /// Timed repetitions per case
    pub iterations: u32,

    /// Untimed repetitions before measurement
    pub warmup: u32,

    /// Algorithm under test
    pub operation: OperationKind,

    /// Value generator for workloads
    pub spacing: Spacing,

    /// Run fixtures against the operation before sweeping
    pub self_check: bool,

    pub parallel: ParallelConfig,

    pub output: OutputFormat,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    pub enabled: bool,
    pub workers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000, 100_000],
            iterations: 1000,
            warmup: 10,
            operation: OperationKind::LinearSearch,
            spacing: Spacing::Sequential,
            self_check: true,
            parallel: ParallelConfig::default(),
            output: OutputFormat::Text,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            workers: num_cpus::get(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

impl Config {
    /// Load config from the file named by `SEARCH_BENCH_CONFIG`, falling back
    /// to defaults when the file does not exist.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if Path::new(&config_path).exists() {
            Self::load(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Save config to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Size 0 is allowed; its non-absent cases are reported as skipped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.parallel.enabled && self.parallel.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            iterations: self.iterations,
            warmup: self.warmup,
        }
    }
}
