//! Async frame loop timing under tokio's paused clock.

use std::rc::Rc;
use std::time::Duration;

use tui_particles::core::{Emitter, Pool, SimpleRng};
use tui_particles::engine::{FrameLoop, Scheduler};
use tui_particles::term::FrameBuffer;
use tui_particles::types::{Color, EmissionTemplate, Vector2i};

#[tokio::test(start_paused = true)]
async fn run_until_ticks_at_fixed_rate() {
    let spark = Rc::new(EmissionTemplate::single('*', Color::Yellow, 90.0, 10.0, 1.0));
    let pool: Pool<SimpleRng> = Pool::new();
    let mut scheduler = Scheduler::new(3);
    let id = scheduler.start(Emitter::new([spark], Vector2i::new(5, 5)), &pool);

    let mut fb = FrameBuffer::new(20, 20);
    let mut frame_loop = FrameLoop::new(10);

    // Ticks at 0ms, 100ms, ... 900ms; the stop fires at 950ms.
    let ticks = frame_loop
        .run_until(&mut scheduler, &mut fb, tokio::time::sleep(Duration::from_millis(950)))
        .await;

    assert_eq!(ticks, 10);
    assert_eq!(scheduler.get(id).map(|e| e.particle_count()), Some(0));
    assert!(fb.cells().iter().all(|c| c.ch == ' '));
}

#[tokio::test(start_paused = true)]
async fn run_until_stops_immediately_when_already_stopped() {
    let pool: Pool<SimpleRng> = Pool::new();
    let mut scheduler = Scheduler::new(3);
    scheduler.start(
        Emitter::new(
            [Rc::new(EmissionTemplate::single('*', Color::Red, 0.0, 1.0, 5.0))],
            Vector2i::new(5, 5),
        ),
        &pool,
    );

    let mut fb = FrameBuffer::new(20, 20);
    let mut frame_loop = FrameLoop::new(10);
    let ticks = frame_loop.run_until(&mut scheduler, &mut fb, async {}).await;

    assert_eq!(ticks, 0);
    assert_eq!(scheduler.len(), 1);
}
