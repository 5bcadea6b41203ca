use std::alloc::{GlobalAlloc, Layout, System};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_particles::core::{Emitter, Pool, SimpleRng};
use tui_particles::engine::{FrameLoop, Scheduler};
use tui_particles::term::FrameBuffer;
use tui_particles::types::{Color, EmissionTemplate, Vector2i};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn scheduler_tick_is_allocation_free_after_start() {
    // Slow, long-lived, weightless particles: nothing is culled while counting.
    let drift = Rc::new(EmissionTemplate {
        count: 64,
        direction_range: (0.0, 360.0),
        glyph: '*',
        color: Color::Yellow,
        lifetime_seconds: 100.0,
        gravity_scale: 0.0,
        start_speed: 1.0,
    });

    let pool: Pool<SimpleRng> = Pool::new();
    let mut scheduler = Scheduler::new(42);
    scheduler.start(Emitter::new([drift], Vector2i::new(100, 30)), &pool);

    let mut fb = FrameBuffer::new(200, 60);
    let mut frame_loop = FrameLoop::new(10);

    // Warm-up.
    frame_loop.step(&mut scheduler, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..20 {
            let stats = frame_loop.step(&mut scheduler, &mut fb);
            assert_eq!(stats.live, 64);
        }
    });
    assert_eq!(allocs, 0);
}
