//! The sample → push → render cycle, driven by an owned fixed-period ticker.

use std::time::{Duration, Instant};

use crate::app::{PanelStatus, PanelView};
use crate::error::Result;
use crate::system::collector::{Clock, CounterSource};
use crate::system::sampler::RateSampler;
use crate::system::window::RollingWindow;

/// Consecutive sampler failures before the panel is marked stale.
pub const FAILURE_ESCALATION: u32 = 3;

/// Sink for dashboard views plus the source of the quit signal.
pub trait Renderer {
    fn render(&mut self, view: &PanelView) -> Result<()>;

    /// Wait up to `timeout` for user input; `true` means quit was requested.
    fn poll_quit(&mut self, timeout: Duration) -> Result<bool>;
}

/// Fixed-period timer. A tick that overruns defers the next one; missed
/// periods are never replayed.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn start(period: Duration, now: Instant) -> Self {
        Self { period, last_tick: now }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.period
    }

    /// Time left until the next tick, zero if already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new sample was pushed and rendered.
    Rendered,
    /// Sampling failed; the window and the last frame are unchanged.
    Skipped,
    /// Sampling failed again and the stale indicator was rendered.
    Escalated,
}

/// Owns the sampler, the rolling window and the timer.
pub struct Dashboard<S, C> {
    sampler: RateSampler<S, C>,
    window: RollingWindow,
    ticker: Ticker,
    consecutive_failures: u32,
    status: PanelStatus,
    ticks: u64,
}

impl<S: CounterSource, C: Clock> Dashboard<S, C> {
    pub fn new(sampler: RateSampler<S, C>, capacity: usize, period: Duration) -> Self {
        tracing::info!(capacity, period_ms = period.as_millis() as u64, "dashboard started");
        Self {
            sampler,
            window: RollingWindow::new(capacity),
            ticker: Ticker::start(period, Instant::now()),
            consecutive_failures: 0,
            status: PanelStatus::Live,
            ticks: 0,
        }
    }

    /// Copy of the current state for the renderer.
    pub fn view(&self) -> PanelView {
        PanelView {
            samples: self.window.snapshot(),
            capacity: self.window.capacity(),
            interfaces: self.sampler.source().interface_names(),
            status: self.status.clone(),
        }
    }

    /// One sample → push → render cycle.
    ///
    /// Sampler failures are absorbed here; only renderer errors propagate.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> Result<TickOutcome> {
        self.ticks += 1;

        match self.sampler.sample() {
            Ok(rates) => {
                if self.consecutive_failures > 0 {
                    tracing::info!(
                        failures = self.consecutive_failures,
                        "sampling recovered"
                    );
                }
                self.consecutive_failures = 0;
                self.status = PanelStatus::Live;
                self.window.push(rates);
                renderer.render(&self.view())?;
                Ok(TickOutcome::Rendered)
            }
            Err(e) => {
                self.consecutive_failures += 1;
                tracing::warn!(
                    tick = self.ticks,
                    failures = self.consecutive_failures,
                    error = %e,
                    "sampling failed, skipping tick"
                );

                if self.consecutive_failures < FAILURE_ESCALATION {
                    return Ok(TickOutcome::Skipped);
                }
                self.status = PanelStatus::Stale {
                    failures: self.consecutive_failures,
                    reason: e.to_string(),
                };
                renderer.render(&self.view())?;
                Ok(TickOutcome::Escalated)
            }
        }
    }

    /// Run ticks until the renderer reports a quit.
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> Result<()> {
        renderer.render(&self.view())?;

        loop {
            if renderer.poll_quit(self.ticker.remaining(Instant::now()))? {
                tracing::info!(ticks = self.ticks, "quit requested, stopping");
                return Ok(());
            }

            if self.ticker.is_due(Instant::now()) {
                self.tick(renderer)?;
                self.ticker.reset(Instant::now());
            }
        }
    }

    pub fn window(&self) -> &RollingWindow {
        &self.window
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
