//! Fixed-rate frame loop.
//!
//! [`FrameLoop::step`] runs exactly one tick and is what a host with its own event
//! loop (the crossterm binary) calls. [`FrameLoop::run_until`] drives ticks from a
//! tokio interval and yields between them, until a stop future resolves.

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::core::Surface;
use crate::scheduler::{Scheduler, TickStats};

#[derive(Debug, Clone)]
pub struct FrameLoop {
    tick_hz: u32,
    period: Duration,
    delta_time: f32,
    ticks: u64,
}

impl FrameLoop {
    /// `tick_hz` of zero is treated as one tick per second.
    pub fn new(tick_hz: u32) -> Self {
        let tick_hz = tick_hz.max(1);
        Self {
            tick_hz,
            period: Duration::from_secs(1) / tick_hz,
            delta_time: 1.0 / tick_hz as f32,
            ticks: 0,
        }
    }

    pub fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Seconds of simulated time per tick.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn step<S: Surface + ?Sized>(
        &mut self,
        scheduler: &mut Scheduler,
        surface: &mut S,
    ) -> TickStats {
        self.ticks += 1;
        scheduler.tick(self.delta_time, surface)
    }

    /// Tick at the fixed rate until `stop` completes. Returns the total tick count.
    ///
    /// The first tick runs immediately. Late ticks are delayed rather than
    /// bunched, so a stalled host never replays a burst of catch-up frames.
    pub async fn run_until<S, F>(
        &mut self,
        scheduler: &mut Scheduler,
        surface: &mut S,
        stop: F,
    ) -> u64
    where
        S: Surface + ?Sized,
        F: Future<Output = ()>,
    {
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(stop);

        debug!(hz = self.tick_hz, "frame loop running");
        loop {
            tokio::select! {
                biased;
                _ = &mut stop => break,
                _ = timer.tick() => {
                    self.step(scheduler, surface);
                }
            }
        }
        debug!(ticks = self.ticks, "frame loop stopped");
        self.ticks
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_TICK_HZ)
    }
}
