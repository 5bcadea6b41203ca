//! Terminal rendering module.
//!
//! Particles are drawn into a [`FrameBuffer`] (which implements the core
//! [`Surface`](crate::core::Surface) contract) and the [`TerminalRenderer`] flushes
//! only the cells that changed since the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Let emitters issue console-style cursor/color/write calls
//! - Avoid full-screen repaints at the tick rate

pub mod fb;
pub mod renderer;

pub use tui_particles_core as core;
pub use tui_particles_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
