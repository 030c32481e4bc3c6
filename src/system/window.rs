use std::collections::VecDeque;

use crate::system::network::RatePair;

/// One minute of history at the default one-second tick.
pub const DEFAULT_CAPACITY: usize = 60;

/// Fixed-capacity history of rate samples, oldest first.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    samples: VecDeque<RatePair>,
    capacity: usize,
}

impl RollingWindow {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if at capacity.
    pub fn push(&mut self, sample: RatePair) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Current contents, oldest to newest.
    pub fn snapshot(&self) -> Vec<RatePair> {
        self.samples.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<&RatePair> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
