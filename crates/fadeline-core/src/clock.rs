//! Wall-clock port.
//!
//! Cache expiry and the "years of experience" label both need the current
//! time. `std::time::SystemTime` is unusable on `wasm32-unknown-unknown`, so
//! the browser build supplies its own clock and tests use [`ManualClock`].

use std::cell::Cell;
use std::time::Duration;

/// Source of the current time in Unix epoch milliseconds.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Clock backed by `SystemTime`. Native targets only.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Settable clock for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    /// Create a clock frozen at `now_millis`.
    pub fn at(now_millis: i64) -> Self {
        Self {
            now: Cell::new(now_millis),
        }
    }

    /// Move the clock to an absolute time.
    pub fn set(&self, now_millis: i64) {
        self.now.set(now_millis);
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(duration_millis(by)));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

/// Duration in whole milliseconds, saturating at `i64::MAX`.
pub(crate) fn duration_millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}
