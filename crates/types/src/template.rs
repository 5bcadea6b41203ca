//! Emission templates: immutable spawn recipes.

use crate::Color;

/// Declarative description of one spawn group.
///
/// Templates are validated by whoever builds them (see the `templates` crate);
/// the simulation assumes `lifetime_seconds > 0` and `min <= max` on the
/// direction range and never re-checks.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionTemplate {
    /// Particles spawned per `start`. Zero is legal.
    pub count: u32,
    /// Launch angle range in degrees, `(min, max)`. 0° is +X, 90° is straight up.
    pub direction_range: (f32, f32),
    pub glyph: char,
    pub color: Color,
    pub lifetime_seconds: f32,
    /// Multiplier on [`crate::GRAVITY`]. Any sign; 0 disables gravity.
    pub gravity_scale: f32,
    pub start_speed: f32,
}

impl EmissionTemplate {
    /// A one-particle template with gravity disabled, mostly useful in tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_particles_types::{Color, EmissionTemplate};
    ///
    /// let t = EmissionTemplate::single('*', Color::Yellow, 90.0, 10.0, 1.0);
    /// assert_eq!(t.count, 1);
    /// assert_eq!(t.direction_range, (90.0, 90.0));
    /// assert_eq!(t.gravity_scale, 0.0);
    /// ```
    pub fn single(glyph: char, color: Color, angle_deg: f32, speed: f32, lifetime: f32) -> Self {
        Self {
            count: 1,
            direction_range: (angle_deg, angle_deg),
            glyph,
            color,
            lifetime_seconds: lifetime,
            gravity_scale: 0.0,
            start_speed: speed,
        }
    }
}
