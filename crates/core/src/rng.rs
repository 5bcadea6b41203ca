//! RNG module - the shared random source
//!
//! Provides a small deterministic LCG and the only randomized primitive of the
//! simulation, [`random_unit`]. Callers never own a generator; they check one out
//! of a [`crate::Pool`] so every sample in the process goes through one instance.

use crate::pool::Poolable;
use crate::types::Vector2f;

/// Anything that can produce uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f32_01(&mut self) -> f32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl RandomSource for SimpleRng {
    fn next_f32_01(&mut self) -> f32 {
        // Top 24 bits: the low bits of an LCG are weak, and 24 bits fit the f32
        // mantissa exactly so the result never rounds up to 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

impl Poolable for SimpleRng {
    type Args = u32;

    fn construct(seed: u32) -> Self {
        SimpleRng::new(seed)
    }
}

/// Uniform direction inside `[min_deg, max_deg]`, as a unit vector `(cos, sin)`.
///
/// A degenerate range (`min == max`) always yields that exact direction but still
/// consumes one sample, so spawn sequences stay aligned across templates.
pub fn random_unit<R: RandomSource + ?Sized>(min_deg: f32, max_deg: f32, rng: &mut R) -> Vector2f {
    let t = rng.next_f32_01();
    Vector2f::from_angle_deg(min_deg + (max_deg - min_deg) * t)
}
