//! Time source for token expiry checks.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current time in epoch seconds.
pub trait Clock {
    fn now_secs(&self) -> u64;
}

/// Wall clock backed by [`SystemTime`]. Not usable on `wasm32-unknown-unknown`;
/// the browser front end supplies its own clock there.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    #[must_use]
    pub fn new(now_secs: u64) -> Self {
        Self {
            now: Cell::new(now_secs),
        }
    }

    pub fn set(&self, now_secs: u64) {
        self.now.set(now_secs);
    }

    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().saturating_add(secs));
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now.get()
    }
}
