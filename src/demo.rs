//! Launch helpers for the demo binary.
//!
//! Kept out of `main.rs` so the relaunch rules can be tested without a terminal.

use std::rc::Rc;

use crate::core::{create_emitter, Pool, SimpleRng, Surface};
use crate::engine::{EmitterId, Scheduler};
use crate::term::FrameBuffer;
use crate::types::{EmissionTemplate, Vector2i};

/// Keep a launch point strictly inside the surface so its first tick isn't culled.
pub fn clamp_to(fb: &FrameBuffer, p: Vector2i) -> Vector2i {
    let max_x = (i32::from(fb.width()) - 1).max(1);
    let max_y = (i32::from(fb.height()) - 1).max(1);
    Vector2i::new(p.x.clamp(1, max_x), p.y.clamp(1, max_y))
}

/// Somewhere in the lower half of the screen. Borrows the shared generator only
/// for the duration of the draw so the next `start` reuses the same instance.
pub fn random_origin(pool: &Pool<SimpleRng>, seed: u32, fb: &FrameBuffer) -> Vector2i {
    let mut rng = pool.check_out(seed);
    let w = u32::from(fb.width()).saturating_sub(2).max(1);
    let h = (u32::from(fb.height()) / 2).max(1);
    let x = 1 + rng.next_range(w) as i32;
    let y = 1 + rng.next_range(h) as i32;
    clamp_to(fb, Vector2i::new(x, y))
}

/// Start a burst of every template at `origin`.
pub fn launch(
    scheduler: &mut Scheduler,
    pool: &Pool<SimpleRng>,
    templates: &[Rc<EmissionTemplate>],
    origin: Vector2i,
) -> EmitterId {
    scheduler.start(create_emitter(templates.iter().cloned(), origin), pool)
}

/// Resize the surface and restart from a single burst at the (clamped) cursor.
///
/// Old particles no longer line up with the new grid, so every running emitter is
/// dropped first. Returns the clamped cursor.
pub fn resize_and_relaunch(
    scheduler: &mut Scheduler,
    pool: &Pool<SimpleRng>,
    fb: &mut FrameBuffer,
    templates: &[Rc<EmissionTemplate>],
    cursor: Vector2i,
    (width, height): (u16, u16),
) -> Vector2i {
    scheduler.clear();
    fb.resize(width, height);
    let cursor = clamp_to(fb, cursor);
    launch(scheduler, pool, templates, cursor);
    cursor
}
