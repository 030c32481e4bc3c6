//! Fakes for the sampler's collaborators.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::error::{MonitorError, Result};
use crate::system::collector::{Clock, CounterSource};
use crate::system::network::ByteCounters;

/// Replays a fixed list of readings; `Err(msg)` entries become
/// `CounterSourceUnavailable`. Running out of readings is also an error.
pub struct ScriptedCounters {
    readings: VecDeque<std::result::Result<ByteCounters, &'static str>>,
}

impl ScriptedCounters {
    pub fn new(readings: Vec<std::result::Result<ByteCounters, &'static str>>) -> Self {
        Self { readings: readings.into() }
    }
}

impl CounterSource for ScriptedCounters {
    fn read_counters(&mut self) -> Result<ByteCounters> {
        match self.readings.pop_front() {
            Some(Ok(counters)) => Ok(counters),
            Some(Err(msg)) => Err(MonitorError::CounterSourceUnavailable(msg.into())),
            None => Err(MonitorError::CounterSourceUnavailable("script exhausted".into())),
        }
    }

    fn interface_names(&self) -> Vec<String> {
        vec!["eth0".into(), "lo".into()]
    }
}

/// Clock that only moves when told to. Clones share the same offset.
#[derive(Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}
