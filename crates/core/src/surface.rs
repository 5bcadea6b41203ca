//! Display surface contract.
//!
//! The simulation only ever positions a cursor, picks a foreground color and
//! writes single characters. Implementations decide what a write means
//! (framebuffer cell, terminal escape sequence, test recorder).

use crate::types::{Color, Vector2f, BLANK};

/// Character grid addressed by `(col, row)`, row 0 at the top.
pub trait Surface {
    fn width(&self) -> u16;
    fn height(&self) -> u16;

    fn set_cursor(&mut self, col: u16, row: u16);
    fn cursor(&self) -> (u16, u16);

    fn set_foreground(&mut self, color: Color);
    fn foreground(&self) -> Color;

    /// Write at the cursor and advance it one column. Off-grid writes are dropped.
    fn write(&mut self, ch: char);
}

/// Map a simulation position to a screen cell, flipping Y.
///
/// Returns `None` when the position falls outside the grid.
pub fn screen_cell<S: Surface + ?Sized>(surface: &S, pos: Vector2f) -> Option<(u16, u16)> {
    let cell = pos.to_screen();
    let width = i32::from(surface.width());
    let height = i32::from(surface.height());
    let row = height - cell.y;
    if cell.x < 0 || cell.x >= width || row < 0 || row >= height {
        return None;
    }
    Some((cell.x as u16, row as u16))
}

pub(crate) fn put<S: Surface + ?Sized>(surface: &mut S, pos: Vector2f, ch: char) {
    if let Some((col, row)) = screen_cell(surface, pos) {
        surface.set_cursor(col, row);
        surface.write(ch);
    }
}

pub(crate) fn erase<S: Surface + ?Sized>(surface: &mut S, pos: Vector2f) {
    put(surface, pos, BLANK);
}
