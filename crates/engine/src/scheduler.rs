//! Scheduler - the registry of running emitters
//!
//! Emitters live in an arena of stable slots with a free list. An [`EmitterId`]
//! pairs a slot index with the slot's generation, so an id kept after `stop`
//! never reaches whatever emitter reuses that slot later.
//!
//! Ticks visit emitters in registration order: every emitter is updated first,
//! then every emitter renders, so nobody draws another emitter's half-updated state.

use tracing::{debug, trace};

use crate::core::{Emitter, Pool, SimpleRng, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterId {
    index: u32,
    generation: u32,
}

/// Per-tick counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub emitters: usize,
    pub live: usize,
    pub culled: usize,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    emitter: Option<Emitter>,
}

#[derive(Debug)]
pub struct Scheduler {
    slots: Vec<Slot>,
    free: Vec<u32>,
    order: Vec<EmitterId>,
    rng_seed: u32,
}

impl Scheduler {
    /// `rng_seed` seeds the random source if the pool has to construct one.
    pub fn new(rng_seed: u32) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            rng_seed,
        }
    }

    /// Spawn the emitter's particles and register it for ticking.
    ///
    /// The shared random source is checked out once for the whole batch.
    pub fn start(&mut self, mut emitter: Emitter, pool: &Pool<SimpleRng>) -> EmitterId {
        {
            let mut rng = pool.check_out(self.rng_seed);
            emitter.start(&mut *rng);
        }

        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.emitter = Some(emitter);
                EmitterId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    emitter: Some(emitter),
                });
                EmitterId {
                    index,
                    generation: 0,
                }
            }
        };

        self.order.push(id);
        debug!(slot = id.index, running = self.order.len(), "emitter registered");
        id
    }

    /// Unregister an emitter and hand it back with all particles discarded.
    ///
    /// Returns `None` for an id that is not (or no longer) registered.
    pub fn stop(&mut self, id: EmitterId) -> Option<Emitter> {
        let slot = self.slot_mut(id)?;
        let mut emitter = slot.emitter.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        emitter.stop();
        self.free.push(id.index);
        self.order.retain(|other| *other != id);
        debug!(slot = id.index, running = self.order.len(), "emitter stopped");
        Some(emitter)
    }

    pub fn get(&self, id: EmitterId) -> Option<&Emitter> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.emitter.as_ref()
    }

    pub fn get_mut(&mut self, id: EmitterId) -> Option<&mut Emitter> {
        self.slot_mut(id)?.emitter.as_mut()
    }

    pub fn contains(&self, id: EmitterId) -> bool {
        self.get(id).is_some()
    }

    /// Running emitters in tick order.
    pub fn ids(&self) -> &[EmitterId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Stop every emitter whose particles are all gone and return them.
    pub fn sweep_finished(&mut self) -> Vec<Emitter> {
        let spent: Vec<EmitterId> = self
            .order
            .iter()
            .copied()
            .filter(|id| self.get(*id).is_some_and(Emitter::is_spent))
            .collect();

        spent.into_iter().filter_map(|id| self.stop(id)).collect()
    }

    /// Stop everything.
    pub fn clear(&mut self) {
        let ids = self.order.clone();
        for id in ids {
            self.stop(id);
        }
    }

    /// One frame: update all, render all, then restore the surface's cursor and color.
    pub fn tick<S: Surface + ?Sized>(&mut self, dt: f32, surface: &mut S) -> TickStats {
        let saved_cursor = surface.cursor();
        let saved_fg = surface.foreground();

        let mut stats = TickStats {
            emitters: self.order.len(),
            ..TickStats::default()
        };

        for id in &self.order {
            if let Some(emitter) = self.slots[id.index as usize].emitter.as_mut() {
                stats.culled += emitter.update_frame(dt, surface);
            }
        }

        for id in &self.order {
            if let Some(emitter) = self.slots[id.index as usize].emitter.as_ref() {
                emitter.render_frame(surface);
                stats.live += emitter.particle_count();
            }
        }

        surface.set_cursor(saved_cursor.0, saved_cursor.1);
        surface.set_foreground(saved_fg);

        trace!(live = stats.live, culled = stats.culled, "tick");
        stats
    }

    fn slot_mut(&mut self, id: EmitterId) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        Some(slot)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, EmissionTemplate, Vector2i};
    use std::rc::Rc;

    /// Surface that only tracks cursor/color and counts writes.
    #[derive(Default)]
    struct Counter {
        cursor: (u16, u16),
        fg: Color,
        writes: usize,
    }

    impl Surface for Counter {
        fn width(&self) -> u16 {
            40
        }
        fn height(&self) -> u16 {
            40
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
        fn write(&mut self, _ch: char) {
            self.writes += 1;
            self.cursor.0 += 1;
        }
    }

    fn emitter(lifetime: f32) -> Emitter {
        let t = Rc::new(EmissionTemplate::single('*', Color::Red, 90.0, 10.0, lifetime));
        Emitter::new([t], Vector2i::new(10, 10))
    }

    #[test]
    fn start_registers_and_returns_rng() {
        let pool = Pool::new();
        let mut s = Scheduler::new(7);
        let id = s.start(emitter(1.0), &pool);

        assert!(s.contains(id));
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(id).map(Emitter::particle_count), Some(1));
        assert_eq!(pool.checked_out(), 0);
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn stop_unregisters_and_clears_particles() {
        let pool = Pool::new();
        let mut s = Scheduler::new(7);
        let id = s.start(emitter(1.0), &pool);

        let stopped = s.stop(id).expect("registered");
        assert_eq!(stopped.particle_count(), 0);
        assert!(!stopped.is_active());
        assert!(s.is_empty());
        assert!(s.stop(id).is_none());
    }

    #[test]
    fn stale_id_does_not_reach_reused_slot() {
        let pool = Pool::new();
        let mut s = Scheduler::new(7);
        let old = s.start(emitter(1.0), &pool);
        s.stop(old);

        let new = s.start(emitter(1.0), &pool);
        assert_ne!(old, new);
        assert!(s.get(old).is_none());
        assert!(s.get_mut(old).is_none());
        assert!(s.contains(new));
    }

    #[test]
    fn tick_restores_cursor_and_color() {
        let pool = Pool::new();
        let mut s = Scheduler::new(7);
        s.start(emitter(1.0), &pool);

        let mut surface = Counter {
            cursor: (3, 4),
            fg: Color::White,
            writes: 0,
        };
        let stats = s.tick(0.1, &mut surface);

        assert_eq!(stats.emitters, 1);
        assert_eq!(stats.live, 1);
        assert!(surface.writes > 0);
        assert_eq!(surface.cursor, (3, 4));
        assert_eq!(surface.fg, Color::White);
    }

    #[test]
    fn sweep_finished_stops_spent_emitters() {
        let pool = Pool::new();
        let mut s = Scheduler::new(7);
        let short = s.start(emitter(0.1), &pool);
        let long = s.start(emitter(5.0), &pool);

        let mut surface = Counter::default();
        let stats = s.tick(0.1, &mut surface);
        assert_eq!(stats.culled, 1);

        let finished = s.sweep_finished();
        assert_eq!(finished.len(), 1);
        assert!(!s.contains(short));
        assert!(s.contains(long));
        assert_eq!(s.ids(), &[long]);
    }

    #[test]
    fn clear_stops_everything() {
        let pool = Pool::new();
        let mut s = Scheduler::default();
        s.start(emitter(1.0), &pool);
        s.start(emitter(1.0), &pool);
        s.clear();
        assert!(s.is_empty());
    }
}
