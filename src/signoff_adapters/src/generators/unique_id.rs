use std::sync::atomic::{AtomicU64, Ordering};

use rand::{Rng, distr::Alphanumeric};
use signoff_core::UniqueIdGenerator;

pub const DEFAULT_RANDOM_LENGTH: usize = 20;

/// Generates ids shaped like `LR-42-3kT9...-host`.
///
/// The counter keeps ids from one process distinct, the random segment keeps
/// ids from different processes apart and the optional suffix names the node.
#[derive(Debug)]
pub struct DefaultUniqueIdGenerator {
    counter: AtomicU64,
    random_length: usize,
    suffix: Option<String>,
}

impl DefaultUniqueIdGenerator {
    pub fn new(random_length: usize, suffix: Option<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            random_length,
            suffix: suffix.filter(|suffix| !suffix.is_empty()),
        }
    }

    fn next_count(&self) -> u64 {
        // Wraps to 1, never 0.
        let previous = self
            .counter
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                Some(if count == u64::MAX { 1 } else { count + 1 })
            })
            .unwrap_or_else(|count| count);
        if previous == u64::MAX { 1 } else { previous + 1 }
    }

    fn random_segment(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.random_length)
            .map(char::from)
            .collect()
    }
}

impl Default for DefaultUniqueIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_LENGTH, None)
    }
}

impl UniqueIdGenerator for DefaultUniqueIdGenerator {
    fn new_id(&self, prefix: &str) -> String {
        let mut id = format!("{prefix}-{}-{}", self.next_count(), self.random_segment());
        if let Some(suffix) = &self.suffix {
            id.push('-');
            id.push_str(suffix);
        }
        id
    }
}
