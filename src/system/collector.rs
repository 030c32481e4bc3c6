use std::time::Instant;

use sysinfo::Networks;

use crate::error::{MonitorError, Result};
use crate::system::network::ByteCounters;

/// Anything that can report cumulative RX/TX byte totals for the host.
pub trait CounterSource {
    /// Read the current totals. Must fail rather than return stale or zero data.
    fn read_counters(&mut self) -> Result<ByteCounters>;

    /// Names of the interfaces contributing to the totals.
    fn interface_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Monotonic time source for the sampler.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// `Instant::now()`; never goes backward within a process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Counter source backed by the `sysinfo` crate, aggregated over all interfaces.
pub struct SysinfoCounters {
    networks: Networks,
}

impl SysinfoCounters {
    pub fn new() -> Result<Self> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MonitorError::CounterSourceUnavailable(format!(
                "sysinfo does not support {}",
                std::env::consts::OS
            )));
        }

        let networks = Networks::new_with_refreshed_list();
        tracing::info!(interfaces = networks.iter().count(), "network interfaces discovered");
        Ok(Self { networks })
    }
}

impl CounterSource for SysinfoCounters {
    fn read_counters(&mut self) -> Result<ByteCounters> {
        // true = drop interfaces that disappeared since the last refresh
        self.networks.refresh(true);

        if self.networks.iter().next().is_none() {
            return Err(MonitorError::CounterSourceUnavailable(
                "no network interfaces reported".into(),
            ));
        }

        let mut counters = ByteCounters::default();
        for (_name, data) in self.networks.iter() {
            counters.received_bytes = counters.received_bytes.saturating_add(data.total_received());
            counters.sent_bytes = counters.sent_bytes.saturating_add(data.total_transmitted());
        }

        Ok(counters)
    }

    fn interface_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.networks.iter().map(|(name, _)| name.to_string()).collect();
        names.sort();
        names
    }
}
