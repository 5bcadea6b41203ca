//! Per-particle simulation state.

use crate::types::{Vector2f, GRAVITY};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position at the end of the previous tick (spawn point before the first).
    pub previous_origin: Vector2f,
    pub origin: Vector2f,
    pub velocity: Vector2f,
    pub remaining_lifetime: f32,
}

impl Particle {
    pub fn spawn(origin: Vector2f, velocity: Vector2f, lifetime: f32) -> Self {
        Self {
            previous_origin: origin,
            origin,
            velocity,
            remaining_lifetime: lifetime,
        }
    }

    /// Advance one explicit Euler step.
    ///
    /// Velocity is updated before position, so gravity affects this step's motion.
    pub fn integrate(&mut self, dt: f32, gravity_scale: f32) {
        self.velocity += GRAVITY * (dt * gravity_scale);
        self.previous_origin = self.origin;
        self.origin += self.velocity * dt;
        self.remaining_lifetime -= dt;
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_lifetime <= 0.0
    }
}
