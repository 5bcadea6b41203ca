//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::DEFAULT_TICK_HZ;

/// Simulation settings.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | `PARTICLES_TICK_HZ` | 10 | Frame loop rate |
/// | `PARTICLES_SEED` | wall clock | Seed for the shared random source |
/// | `PARTICLES_TEMPLATES` | embedded set | Template JSON path |
/// | `PARTICLES_LOG_PATH` | unset | Log file; logging is off when unset |
/// | `PARTICLES_LOG` | `info` | `tracing` filter directive |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub tick_hz: u32,
    pub seed: u32,
    pub templates_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            seed: 1,
            templates_path: None,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let tick_hz = non_empty("PARTICLES_TICK_HZ")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|hz| *hz > 0)
            .unwrap_or(DEFAULT_TICK_HZ);

        let seed = non_empty("PARTICLES_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            tick_hz,
            seed,
            templates_path: non_empty("PARTICLES_TEMPLATES").map(PathBuf::from),
            log_path: non_empty("PARTICLES_LOG_PATH").map(PathBuf::from),
            log_filter: non_empty("PARTICLES_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
