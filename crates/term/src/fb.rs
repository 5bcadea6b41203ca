//! Framebuffer and style types for terminal rendering.
//!
//! [`FrameBuffer`] doubles as the particle [`Surface`]: it keeps a cursor and a
//! foreground color so the emitter can position-then-write exactly as it would
//! against a live console.

use crate::core::Surface;
use crate::types::Color;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Rgb::new(0, 0, 0),
            Color::DarkBlue => Rgb::new(0, 0, 128),
            Color::DarkGreen => Rgb::new(0, 128, 0),
            Color::DarkCyan => Rgb::new(0, 128, 128),
            Color::DarkRed => Rgb::new(128, 0, 0),
            Color::DarkMagenta => Rgb::new(128, 0, 128),
            Color::DarkYellow => Rgb::new(128, 128, 0),
            Color::Gray => Rgb::new(192, 192, 192),
            Color::DarkGray => Rgb::new(128, 128, 128),
            Color::Blue => Rgb::new(0, 0, 255),
            Color::Green => Rgb::new(0, 255, 0),
            Color::Cyan => Rgb::new(0, 255, 255),
            Color::Red => Rgb::new(255, 0, 0),
            Color::Magenta => Rgb::new(255, 0, 255),
            Color::Yellow => Rgb::new(255, 255, 0),
            Color::White => Rgb::new(255, 255, 255),
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Color::Gray.into(),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: (u16, u16),
    fg: Color,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            cursor: (0, 0),
            fg: Color::default(),
        }
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible. Contents are
    /// blanked since old rows no longer line up.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell { ch, style });
            cx += 1;
        }
    }

    /// Row contents as a string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }
}

impl Surface for FrameBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_cursor(&mut self, col: u16, row: u16) {
        self.cursor = (col, row);
    }

    fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    fn set_foreground(&mut self, color: Color) {
        self.fg = color;
    }

    fn foreground(&self) -> Color {
        self.fg
    }

    fn write(&mut self, ch: char) {
        let (x, y) = self.cursor;
        let style = CellStyle {
            fg: self.fg.into(),
            ..CellStyle::default()
        };
        self.set(x, y, Cell { ch, style });
        self.cursor.0 = x.saturating_add(1);
    }
}
