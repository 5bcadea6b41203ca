//! 2D vectors for screen cells and simulation space.

use std::ops::{Add, AddAssign, Mul};

/// Integer vector in screen-cell space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn scale(self, s: i32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Widen into simulation space. Exact for any cell a terminal can show.
    pub fn to_float(self) -> Vector2f {
        Vector2f::new(self.x as f32, self.y as f32)
    }
}

impl Add for Vector2i {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2i {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Floating-point vector in simulation space (Y up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector pointing at `degrees` (0 = +X, 90 = +Y).
    ///
    /// Evaluated in `f64`: in `f32`, `cos(90°)` is about `-4.4e-8`, enough to pull a
    /// particle launched straight up from column 1 onto column 0.
    pub fn from_angle_deg(degrees: f32) -> Self {
        let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
        Self::new(cos as f32, sin as f32)
    }

    /// Narrow into screen-cell space, truncating toward zero.
    ///
    /// Lossy: `(5.9, -0.5)` becomes `(5, 0)`.
    pub fn to_screen(self) -> Vector2i {
        Vector2i::new(self.x as i32, self.y as i32)
    }
}

impl Add for Vector2f {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2f {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vector2f {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}
