//! The bundled template set loads and runs.

use tui_particles::core::{create_emitter, Pool, SimpleRng};
use tui_particles::engine::{FrameLoop, Scheduler};
use tui_particles::templates::{load_templates_from_path, load_templates_from_str};
use tui_particles::term::FrameBuffer;
use tui_particles::types::{Color, Vector2i};
use tui_particles::DEFAULT_TEMPLATES;

#[test]
fn default_templates_parse() {
    let templates = load_templates_from_str(DEFAULT_TEMPLATES).unwrap();
    assert_eq!(templates.len(), 4);
    assert_eq!(templates[0].glyph, '*');
    assert_eq!(templates[0].color, Color::Yellow);
    assert_eq!(templates[0].direction_range, (0.0, 360.0));
    assert_eq!(templates[2].direction_range, (60.0, 120.0));
    assert_eq!(templates[3].color, Color::DarkMagenta);
    assert!(templates[3].gravity_scale < 0.0);
}

#[test]
fn bundled_file_matches_embedded_copy() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fireworks.json");
    let from_disk = load_templates_from_path(path).unwrap();
    let embedded = load_templates_from_str(DEFAULT_TEMPLATES).unwrap();
    assert_eq!(from_disk.len(), embedded.len());
    for (a, b) in from_disk.iter().zip(&embedded) {
        assert_eq!(**a, **b);
    }
}

#[test]
fn default_burst_burns_out() {
    let templates = load_templates_from_str(DEFAULT_TEMPLATES).unwrap();
    let total: u32 = templates.iter().map(|t| t.count).sum();
    let longest = templates
        .iter()
        .map(|t| t.lifetime_seconds)
        .fold(0.0f32, f32::max);

    let pool: Pool<SimpleRng> = Pool::new();
    let mut scheduler = Scheduler::new(2024);
    let mut fb = FrameBuffer::new(80, 24);
    let mut frame_loop = FrameLoop::new(10);

    let emitter = create_emitter(templates.iter().cloned(), Vector2i::new(40, 8));
    let id = scheduler.start(emitter, &pool);
    assert_eq!(scheduler.get(id).unwrap().particle_count(), total as usize);

    let max_ticks = (longest / frame_loop.delta_time()).ceil() as usize + 1;
    for _ in 0..max_ticks {
        frame_loop.step(&mut scheduler, &mut fb);
    }

    assert!(scheduler.get(id).unwrap().is_spent());
    assert_eq!(scheduler.sweep_finished().len(), 1);
    assert!(scheduler.is_empty());
    assert!(fb.cells().iter().all(|c| c.ch == ' '));
}
