//! Terminal particle demo (default binary).
//!
//! Launches bursts from the configured templates and keeps them going: each
//! emitter that burns out is relaunched somewhere new. Uses crossterm for input and
//! the framebuffer renderer for output; `event::poll` is the wait between ticks.

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_particles::cli::{apply_args, USAGE};
use tui_particles::core::{Pool, SimpleRng};
use tui_particles::demo::{clamp_to, launch, random_origin, resize_and_relaunch};
use tui_particles::engine::{FrameLoop, Scheduler, SimConfig};
use tui_particles::input::{handle_key_event, should_quit, DemoAction};
use tui_particles::logging::init_logging;
use tui_particles::templates::{load_templates_from_path, load_templates_from_str};
use tui_particles::term::{CellStyle, FrameBuffer, Rgb, TerminalRenderer};
use tui_particles::types::{EmissionTemplate, Vector2i};
use tui_particles::DEFAULT_TEMPLATES;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = SimConfig::from_env();
    if !apply_args(&mut config, &args)? {
        println!("{}", USAGE);
        return Ok(());
    }
    init_logging(&config)?;

    let templates = match config.templates_path.as_ref() {
        Some(path) => load_templates_from_path(path)?,
        None => load_templates_from_str(DEFAULT_TEMPLATES)?,
    };
    info!(templates = templates.len(), hz = config.tick_hz, seed = config.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &templates);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &SimConfig,
    templates: &[Rc<EmissionTemplate>],
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let pool: Pool<SimpleRng> = Pool::new();
    let mut scheduler = Scheduler::new(config.seed);
    let mut frame_loop = FrameLoop::new(config.tick_hz);

    let mut cursor = Vector2i::new(i32::from(w / 2), i32::from(h / 3).max(1));
    launch(&mut scheduler, &pool, templates, cursor);

    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = frame_loop
            .period()
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    match handle_key_event(key) {
                        Some(DemoAction::MoveCursor(delta)) => {
                            cursor = clamp_to(&fb, cursor + delta);
                        }
                        Some(DemoAction::Burst) => {
                            launch(&mut scheduler, &pool, templates, cursor);
                        }
                        Some(DemoAction::RandomBurst) => {
                            let origin = random_origin(&pool, config.seed, &fb);
                            launch(&mut scheduler, &pool, templates, origin);
                        }
                        Some(DemoAction::Clear) => {
                            scheduler.clear();
                            fb.clear(Default::default());
                        }
                        None => {}
                    }
                }
                Event::Resize(w, h) => {
                    cursor = resize_and_relaunch(
                        &mut scheduler,
                        &pool,
                        &mut fb,
                        templates,
                        cursor,
                        (w, h),
                    );
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= frame_loop.period() {
            last_tick = Instant::now();

            frame_loop.step(&mut scheduler, &mut fb);

            for mut emitter in scheduler.sweep_finished() {
                emitter.set_origin(random_origin(&pool, config.seed, &fb));
                scheduler.start(emitter, &pool);
            }

            draw_status(&mut fb, cursor, scheduler.len());
            term.draw(&fb)?;
        }
    }

    scheduler.clear();
    pool.close()?;
    Ok(())
}

/// Row 0 maps to simulation y = height, which is always culled, so particles never
/// draw over the status line.
fn draw_status(fb: &mut FrameBuffer, cursor: Vector2i, emitters: usize) {
    let style = CellStyle {
        fg: Rgb::new(120, 120, 120),
        ..CellStyle::default()
    };
    let text = format!(
        " emitters {:>3}  cursor {:>3},{:<3}  space burst  r random  c clear  q quit ",
        emitters, cursor.x, cursor.y
    );
    fb.put_str(0, 0, &text, style);
}
