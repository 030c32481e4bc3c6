use crate::error::{MonitorError, Result};
use crate::system::collector::{Clock, CounterSource};
use crate::system::network::{CounterSnapshot, Direction, RatePair};

/// Turns cumulative byte counters into bytes/second rates.
///
/// The first reading is taken at construction and only serves as the baseline;
/// it is never reported as a rate.
pub struct RateSampler<S, C> {
    source: S,
    clock: C,
    previous: CounterSnapshot,
}

impl<S: CounterSource, C: Clock> RateSampler<S, C> {
    pub fn new(mut source: S, clock: C) -> Result<Self> {
        let counters = source.read_counters()?;
        let previous = CounterSnapshot::capture(counters, clock.now());
        tracing::debug!(
            rx = previous.received_bytes,
            tx = previous.sent_bytes,
            "sampler baseline seeded"
        );

        Ok(Self { source, clock, previous })
    }

    /// Take a new reading and return the rate since the previous one.
    ///
    /// The new reading replaces the baseline even when the interval turns out
    /// to be degenerate, so one clock anomaly does not skew later ticks.
    pub fn sample(&mut self) -> Result<RatePair> {
        let counters = self.source.read_counters()?;
        let current = CounterSnapshot::capture(counters, self.clock.now());
        let previous = std::mem::replace(&mut self.previous, current);

        let elapsed = current
            .timestamp
            .saturating_duration_since(previous.timestamp)
            .as_secs_f64();
        if elapsed <= 0.0 {
            return Err(MonitorError::DegenerateInterval { elapsed_secs: elapsed });
        }
        tracing::debug!(dt = elapsed, "time slice");

        let rx = counter_delta(Direction::Rx, previous.received_bytes, current.received_bytes);
        let tx = counter_delta(Direction::Tx, previous.sent_bytes, current.sent_bytes);

        Ok(RatePair::new(rx as f64 / elapsed, tx as f64 / elapsed))
    }

    pub fn previous(&self) -> &CounterSnapshot {
        &self.previous
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Bytes moved since the last reading; a counter that went backwards
/// (interface reset or wraparound) counts as zero.
fn counter_delta(direction: Direction, previous: u64, current: u64) -> u64 {
    match current.checked_sub(previous) {
        Some(delta) => delta,
        None => {
            tracing::warn!(
                direction = direction.label(),
                previous,
                current,
                "counter regression, clamping delta to zero"
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::system::network::ByteCounters;
    use crate::system::testing::{ManualClock, ScriptedCounters};

    fn counters(rx: u64, tx: u64) -> ByteCounters {
        ByteCounters { received_bytes: rx, sent_bytes: tx }
    }

    #[test]
    fn rate_is_delta_over_elapsed() {
        let clock = ManualClock::new();
        let source = ScriptedCounters::new(vec![Ok(counters(1000, 500)), Ok(counters(2000, 1500))]);
        let mut sampler = RateSampler::new(source, clock.clone()).unwrap();

        clock.advance(Duration::from_secs(1));
        let rate = sampler.sample().unwrap();

        assert_eq!(rate.rx_rate, 1000.0);
        assert_eq!(rate.tx_rate, 1000.0);
    }

    #[test]
    fn irregular_intervals_are_time_normalised() {
        let clock = ManualClock::new();
        let source = ScriptedCounters::new(vec![
            Ok(counters(0, 0)),
            Ok(counters(500, 250)),
            Ok(counters(3500, 250)),
        ]);
        let mut sampler = RateSampler::new(source, clock.clone()).unwrap();

        clock.advance(Duration::from_millis(250));
        let first = sampler.sample().unwrap();
        assert!((first.rx_rate - 2000.0).abs() < 1e-9);
        assert!((first.tx_rate - 1000.0).abs() < 1e-9);

        clock.advance(Duration::from_millis(1500));
        let second = sampler.sample().unwrap();
        assert!((second.rx_rate - 2000.0).abs() < 1e-9);
        assert_eq!(second.tx_rate, 0.0);
    }

    #[test]
    fn regression_reports_zero_for_that_direction_only() {
        let clock = ManualClock::new();
        let source = ScriptedCounters::new(vec![Ok(counters(10_000, 100)), Ok(counters(40, 600))]);
        let mut sampler = RateSampler::new(source, clock.clone()).unwrap();

        clock.advance(Duration::from_secs(2));
        let rate = sampler.sample().unwrap();

        assert_eq!(rate.rx_rate, 0.0);
        assert_eq!(rate.tx_rate, 250.0);
        // the regressed reading becomes the new baseline
        assert_eq!(sampler.previous().received_bytes, 40);
    }

    #[test]
    fn zero_interval_is_rejected_but_baseline_advances() {
        let clock = ManualClock::new();
        let source = ScriptedCounters::new(vec![
            Ok(counters(0, 0)),
            Ok(counters(100, 100)),
            Ok(counters(300, 200)),
        ]);
        let mut sampler = RateSampler::new(source, clock.clone()).unwrap();

        let err = sampler.sample().unwrap_err();
        assert!(matches!(err, MonitorError::DegenerateInterval { .. }));
        assert_eq!(sampler.previous().received_bytes, 100);

        clock.advance(Duration::from_secs(1));
        let rate = sampler.sample().unwrap();
        assert_eq!(rate.rx_rate, 200.0);
        assert_eq!(rate.tx_rate, 100.0);
    }

    #[test]
    fn source_failure_propagates_and_keeps_baseline() {
        let clock = ManualClock::new();
        let source = ScriptedCounters::new(vec![
            Ok(counters(1000, 1000)),
            Err("adapter gone"),
            Ok(counters(3000, 2000)),
        ]);
        let mut sampler = RateSampler::new(source, clock.clone()).unwrap();

        clock.advance(Duration::from_secs(1));
        let err = sampler.sample().unwrap_err();
        assert!(matches!(err, MonitorError::CounterSourceUnavailable(_)));
        assert_eq!(sampler.previous().received_bytes, 1000);

        clock.advance(Duration::from_secs(1));
        let rate = sampler.sample().unwrap();
        assert_eq!(rate.rx_rate, 1000.0);
        assert_eq!(rate.tx_rate, 500.0);
    }

    #[test]
    fn construction_fails_without_baseline() {
        let source = ScriptedCounters::new(vec![Err("unsupported platform")]);
        let result = RateSampler::new(source, ManualClock::new());
        assert!(matches!(result, Err(MonitorError::CounterSourceUnavailable(_))));
    }

    #[test]
    fn monotonic_counters_never_give_negative_rates() {
        let clock = ManualClock::new();
        let readings: Vec<_> = (0..20u64).map(|i| Ok(counters(i * i * 37, i * 11))).collect();
        let mut sampler = RateSampler::new(ScriptedCounters::new(readings), clock.clone()).unwrap();

        let mut prev_rx = 0u64;
        let mut prev_tx = 0u64;
        for i in 1..20u64 {
            let step = Duration::from_millis(100 * i);
            clock.advance(step);
            let rate = sampler.sample().unwrap();
            let expected_rx = (i * i * 37 - prev_rx) as f64 / step.as_secs_f64();
            let expected_tx = (i * 11 - prev_tx) as f64 / step.as_secs_f64();
            assert!(rate.rx_rate >= 0.0 && rate.tx_rate >= 0.0);
            assert!((rate.rx_rate - expected_rx).abs() < 1e-6);
            assert!((rate.tx_rate - expected_tx).abs() < 1e-6);
            prev_rx = i * i * 37;
            prev_tx = i * 11;
        }
    }
}
