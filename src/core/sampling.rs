//! Log sampling for high-volume scenarios
//!
//! Within each tick, the first `initial` entries at a level are written
//! verbatim; after that only every `thereafter`-th entry is. Counters are kept
//! per level and reset when the tick elapses.
//!
//! # Example
//!
//! ```
//! use rust_log_facade::{LogLevel, LogSampler, SamplingConfig};
//!
//! let sampler = LogSampler::new(SamplingConfig::default());
//! assert!(sampler.should_sample(LogLevel::Info));
//! ```

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Configuration for log sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Entries per level written verbatim in each tick
    pub initial: u64,

    /// After `initial`, write one entry out of this many
    pub thereafter: u64,

    /// Length of the counting window
    pub tick: Duration,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            initial: 100,
            thereafter: 100,
            tick: Duration::from_secs(1),
        }
    }
}

impl SamplingConfig {
    pub fn new(initial: u64, thereafter: u64) -> Self {
        Self {
            initial,
            thereafter,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}

/// Entry count for one level within the current tick
#[derive(Debug)]
struct Counter {
    /// Nanoseconds since the sampler epoch at which the count resets
    reset_after: AtomicU64,
    count: AtomicU64,
}

impl Counter {
    const fn new() -> Self {
        Self {
            reset_after: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Increment and return the count, starting a new window if the tick passed
    fn inc_check_reset(&self, now: u64, tick: u64) -> u64 {
        let reset_after = self.reset_after.load(Ordering::Acquire);
        if reset_after > now {
            return self.count.fetch_add(1, Ordering::Relaxed) + 1;
        }

        self.count.store(1, Ordering::Relaxed);
        let next = now.saturating_add(tick);
        if self
            .reset_after
            .compare_exchange(reset_after, next, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            // another thread started the window
            return self.count.fetch_add(1, Ordering::Relaxed) + 1;
        }
        1
    }
}

/// Thread-safe decimating sampler
pub struct LogSampler {
    config: SamplingConfig,
    epoch: Instant,
    counters: [Counter; LogLevel::ALL.len()],
}

impl LogSampler {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            epoch: Instant::now(),
            counters: [const { Counter::new() }; LogLevel::ALL.len()],
        }
    }

    /// Decide whether an entry at `level` should be written now
    pub fn should_sample(&self, level: LogLevel) -> bool {
        let now = self.epoch.elapsed().as_nanos() as u64;
        self.should_sample_at(level, now)
    }

    pub(crate) fn should_sample_at(&self, level: LogLevel, now: u64) -> bool {
        let tick = self.config.tick.as_nanos() as u64;
        let n = self.counters[level.index()].inc_check_reset(now, tick);

        n <= self.config.initial
            || (self.config.thereafter > 0 && (n - self.config.initial) % self.config.thereafter == 0)
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }
}

impl std::fmt::Debug for LogSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSampler")
            .field("config", &self.config)
            .finish()
    }
}
