//! Terminal input module.
//!
//! Maps `crossterm` key events onto the demo's [`DemoAction`]s. The particle
//! engine itself takes no input; this only steers where the next burst goes.

pub mod map;

pub use tui_particles_types as types;

pub use map::{handle_key_event, should_quit, DemoAction};
