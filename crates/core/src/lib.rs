//! Core simulation module - particles, emitters and the shared random source
//!
//! This crate contains the particle physics and the per-emitter lifecycle.
//! It has **no dependency** on a terminal, a clock or a registry, which keeps it:
//!
//! - **Deterministic**: Same seed and same deltas produce identical particle state
//! - **Testable**: Any [`Surface`] implementation can stand in for the screen
//! - **Portable**: Runs headless, in a framebuffer, or against a real terminal
//!
//! # Module Structure
//!
//! - [`emitter`]: template buckets, spawn/update/render/stop
//! - [`particle`]: per-particle state and the Euler step
//! - [`pool`]: generic checkout/return resource pool
//! - [`rng`]: LCG random source and [`random_unit`]
//! - [`surface`]: the display contract the emitter draws against
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use tui_particles_core::{Emitter, Pool, SimpleRng};
//! use tui_particles_types::{Color, EmissionTemplate, Vector2i};
//!
//! let pool: Pool<SimpleRng> = Pool::new();
//! let spark = Rc::new(EmissionTemplate::single('*', Color::Yellow, 90.0, 10.0, 1.0));
//!
//! let mut emitter = Emitter::new([spark], Vector2i::new(5, 5));
//! emitter.start(&mut *pool.check_out(42));
//!
//! assert_eq!(emitter.particle_count(), 1);
//! assert_eq!(pool.checked_out(), 0);
//! ```
//!
//! # Timing
//!
//! Deltas are in seconds (`f32`). A particle whose remaining lifetime is at most
//! the delta is removed in the same tick that exhausts it.

pub mod emitter;
pub mod particle;
pub mod pool;
pub mod rng;
pub mod surface;

pub use tui_particles_types as types;

// Re-export commonly used types for convenience
pub use emitter::{create_emitter, Bucket, Emitter};
pub use particle::Particle;
pub use pool::{Checkout, Pool, PoolError, Poolable};
pub use rng::{random_unit, RandomSource, SimpleRng};
pub use surface::{screen_cell, Surface};
