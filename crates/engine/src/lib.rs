//! Engine module - emitter registry and the frame loop
//!
//! Owns everything that has a notion of time passing:
//!
//! - [`scheduler`]: arena-backed registry of running emitters, update-all then render-all
//! - [`frame_loop`]: fixed-rate ticking, synchronously or on a tokio interval
//! - [`config`]: environment-driven [`SimConfig`]
//!
//! There is no process-wide state: every simulation is an explicit [`Scheduler`]
//! value, so tests can run as many as they like side by side.

pub mod config;
pub mod frame_loop;
pub mod scheduler;

pub use tui_particles_core as core;
pub use tui_particles_types as types;

pub use config::SimConfig;
pub use frame_loop::FrameLoop;
pub use scheduler::{EmitterId, Scheduler, TickStats};
