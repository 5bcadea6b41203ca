//! Emitter - spawns, simulates and draws particle groups
//!
//! An [`Emitter`] holds a fixed, ordered set of [`EmissionTemplate`]s for its whole
//! life. Each template owns one [`Bucket`] of live particles; bucket order is
//! template order, and particle order within a bucket is spawn order, so a frame
//! always draws in the same sequence.
//!
//! The emitter itself never touches a clock or a registry: the frame loop calls
//! [`Emitter::update_frame`] and [`Emitter::render_frame`] with its own delta.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::particle::Particle;
use crate::rng::{random_unit, RandomSource};
use crate::surface::{erase, put, Surface};
use crate::types::{EmissionTemplate, Vector2i};

/// Live particles spawned from one template.
#[derive(Debug, Clone)]
pub struct Bucket {
    template: Rc<EmissionTemplate>,
    particles: Vec<Particle>,
}

impl Bucket {
    pub fn template(&self) -> &Rc<EmissionTemplate> {
        &self.template
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[derive(Debug, Clone)]
pub struct Emitter {
    origin: Vector2i,
    buckets: Vec<Bucket>,
    active: bool,
}

/// Build an idle emitter anchored at `origin`.
pub fn create_emitter<I>(templates: I, origin: Vector2i) -> Emitter
where
    I: IntoIterator<Item = Rc<EmissionTemplate>>,
{
    Emitter::new(templates, origin)
}

impl Emitter {
    /// Templates are grouped by identity; passing the same `Rc` twice yields one bucket.
    pub fn new<I>(templates: I, origin: Vector2i) -> Self
    where
        I: IntoIterator<Item = Rc<EmissionTemplate>>,
    {
        let mut buckets: Vec<Bucket> = Vec::new();
        for template in templates {
            if buckets.iter().any(|b| Rc::ptr_eq(&b.template, &template)) {
                debug!("duplicate emission template ignored");
                continue;
            }
            buckets.push(Bucket {
                template,
                particles: Vec::new(),
            });
        }

        Self {
            origin,
            buckets,
            active: false,
        }
    }

    pub fn origin(&self) -> Vector2i {
        self.origin
    }

    /// Move the anchor. Only affects the next `start`; live particles keep flying.
    pub fn set_origin(&mut self, origin: Vector2i) {
        self.origin = origin;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particle_count(&self) -> usize {
        self.buckets.iter().map(|b| b.particles.len()).sum()
    }

    /// Active but every particle has expired or left the surface.
    pub fn is_spent(&self) -> bool {
        self.active && self.particle_count() == 0
    }

    pub fn buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    /// Live particles spawned from `template`, if it belongs to this emitter.
    pub fn particles_of(&self, template: &Rc<EmissionTemplate>) -> Option<&[Particle]> {
        self.buckets
            .iter()
            .find(|b| Rc::ptr_eq(&b.template, template))
            .map(|b| b.particles.as_slice())
    }

    /// Spawn every template's particles at the current origin.
    ///
    /// Restarting an active emitter discards its current particles first.
    pub fn start<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        if self.active {
            debug!("restarting active emitter");
        }

        let origin = self.origin.to_float();
        for bucket in self.buckets.iter_mut() {
            let template = &bucket.template;
            let (min_deg, max_deg) = template.direction_range;

            bucket.particles.clear();
            bucket.particles.reserve(template.count as usize);
            for _ in 0..template.count {
                let velocity = random_unit(min_deg, max_deg, rng) * template.start_speed;
                bucket
                    .particles
                    .push(Particle::spawn(origin, velocity, template.lifetime_seconds));
            }
        }

        self.active = true;
        debug!(
            x = self.origin.x,
            y = self.origin.y,
            particles = self.particle_count(),
            "emitter started"
        );
    }

    /// Integrate every particle by `dt` seconds and cull the dead ones.
    ///
    /// A particle is culled when its lifetime reaches zero or its cell lies on or
    /// beyond any surface edge. Culled particles have their last drawn cell erased.
    /// Returns the number of particles removed.
    pub fn update_frame<S: Surface + ?Sized>(&mut self, dt: f32, surface: &mut S) -> usize {
        let width = i32::from(surface.width());
        let height = i32::from(surface.height());
        let mut culled = 0usize;

        for bucket in self.buckets.iter_mut() {
            let gravity_scale = bucket.template.gravity_scale;
            bucket.particles.retain_mut(|p| {
                p.integrate(dt, gravity_scale);

                let cell = p.origin.to_screen();
                let outside = cell.x <= 0 || cell.x >= width || cell.y <= 0 || cell.y >= height;
                if p.is_expired() || outside {
                    erase(surface, p.previous_origin);
                    culled += 1;
                    return false;
                }
                true
            });
        }

        if culled > 0 {
            trace!(culled, remaining = self.particle_count(), "particles culled");
        }
        culled
    }

    /// Erase each particle's previous cell, then draw its glyph at the current one.
    pub fn render_frame<S: Surface + ?Sized>(&self, surface: &mut S) {
        for bucket in &self.buckets {
            let template = &bucket.template;
            for p in &bucket.particles {
                erase(surface, p.previous_origin);
                surface.set_foreground(template.color);
                put(surface, p.origin, template.glyph);
            }
        }
    }

    /// Drop all live particles. Templates are kept so the emitter can start again.
    pub fn stop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.particles.clear();
        }
        self.active = false;
    }
}
