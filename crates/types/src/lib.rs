//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used throughout the particle engine.
//! All types are plain values with no engine dependencies, so they can be used
//! by the simulation core, the template loader, and the terminal renderer alike.
//!
//! # Coordinate Spaces
//!
//! - **Simulation space** ([`Vector2f`]): Y grows upward, units are cells.
//! - **Screen space** ([`Vector2i`]): terminal columns/rows, row 0 at the top.
//!
//! Conversion between the two is always explicit ([`Vector2i::to_float`],
//! [`Vector2f::to_screen`]) so precision loss stays visible at the call site.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_HZ` | 10 | Frame loop rate |
//! | `GRAVITY` | (0, -9.8) | Downward acceleration in cells/s² |
//!
//! # Examples
//!
//! ```
//! use tui_particles_types::{Color, Vector2f, Vector2i};
//!
//! let anchor = Vector2i::new(5, 5);
//! let sim = anchor.to_float() + Vector2f::new(0.0, 10.0).scale(0.1);
//! assert_eq!(sim.to_screen(), Vector2i::new(5, 6));
//!
//! assert_eq!("darkyellow".parse::<Color>(), Ok(Color::DarkYellow));
//! ```

use std::str::FromStr;

use thiserror::Error;

pub mod template;
pub mod vector;

pub use template::EmissionTemplate;
pub use vector::{Vector2f, Vector2i};

/// Default frame loop rate (10 ticks per second)
pub const DEFAULT_TICK_HZ: u32 = 10;

/// Downward acceleration applied to every particle, before `gravity_scale`.
pub const GRAVITY: Vector2f = Vector2f { x: 0.0, y: -9.8 };

/// Glyph written when a particle's cell is erased.
pub const BLANK: char = ' ';

/// Fixed 16-entry console palette.
///
/// Names match the classic console color set so template files stay readable:
/// dark variants first, then their bright counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    #[default]
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Every palette entry, in palette order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Palette name as written in template files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::DarkBlue => "DarkBlue",
            Color::DarkGreen => "DarkGreen",
            Color::DarkCyan => "DarkCyan",
            Color::DarkRed => "DarkRed",
            Color::DarkMagenta => "DarkMagenta",
            Color::DarkYellow => "DarkYellow",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }
}

/// Returned when a name is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    /// Parse a palette name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_particles_types::Color;
    ///
    /// assert_eq!("Red".parse::<Color>(), Ok(Color::Red));
    /// assert_eq!("DARKCYAN".parse::<Color>(), Ok(Color::DarkCyan));
    /// assert!("orange".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
