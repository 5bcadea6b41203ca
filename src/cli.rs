//! Command-line overrides on top of [`SimConfig`].

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::engine::SimConfig;

pub const USAGE: &str = "usage: tui-particles [--templates <path>] [--seed <n>] [--hz <n>]";

/// Apply `--templates`, `--seed` and `--hz` to `config`.
///
/// Returns `Ok(false)` when `--help` was given and the caller should exit.
pub fn apply_args(config: &mut SimConfig, args: &[String]) -> Result<bool> {
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--templates" | "-t" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --templates"))?;
                config.templates_path = Some(PathBuf::from(v));
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--hz" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --hz"))?;
                config.tick_hz = v
                    .parse::<u32>()
                    .ok()
                    .filter(|hz| *hz > 0)
                    .ok_or_else(|| anyhow!("invalid --hz value: {}", v))?;
            }
            "--help" | "-h" => return Ok(false),
            other => {
                return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }

    Ok(true)
}
