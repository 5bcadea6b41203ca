//! TUI particles (workspace facade crate).
//!
//! Re-exports the member crates under stable module names
//! (`tui_particles::{core,engine,input,templates,term,types}`) and hosts the small
//! amount of glue the binary needs: argument parsing, launch helpers and log setup.

pub mod cli;
pub mod demo;
pub mod logging;

pub use tui_particles_core as core;
pub use tui_particles_engine as engine;
pub use tui_particles_input as input;
pub use tui_particles_templates as templates;
pub use tui_particles_term as term;
pub use tui_particles_types as types;

/// Template set used when no path is configured.
pub const DEFAULT_TEMPLATES: &str = include_str!("../data/fireworks.json");
