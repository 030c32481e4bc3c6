use std::time::Instant;

/// Cumulative byte totals summed across every interface on the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCounters {
    /// Total bytes received since boot
    pub received_bytes: u64,
    /// Total bytes sent since boot
    pub sent_bytes: u64,
}

/// One counter reading stamped with the monotonic instant it was taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub received_bytes: u64,
    pub sent_bytes: u64,
    pub timestamp: Instant,
}

impl CounterSnapshot {
    pub fn capture(counters: ByteCounters, timestamp: Instant) -> Self {
        Self {
            received_bytes: counters.received_bytes,
            sent_bytes: counters.sent_bytes,
            timestamp,
        }
    }
}

/// Throughput derived from two snapshots, in bytes per second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatePair {
    pub rx_rate: f64,
    pub tx_rate: f64,
}

impl RatePair {
    pub fn new(rx_rate: f64, tx_rate: f64) -> Self {
        Self { rx_rate, tx_rate }
    }
}

/// Traffic direction, used for labels and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rx,
    Tx,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Rx => "RX",
            Direction::Tx => "TX",
        }
    }

    pub fn rate(&self, pair: &RatePair) -> f64 {
        match self {
            Direction::Rx => pair.rx_rate,
            Direction::Tx => pair.tx_rate,
        }
    }
}
