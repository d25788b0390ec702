//! Time source for the carousel.
//!
//! The carousel never reads the system clock directly. Hosts inject a
//! `Clock`; the terminal front end uses `SystemClock`, while tests and the
//! `simulate` command drive a `ManualClock` so timer behavior is exact and
//! nothing sleeps.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of monotonic time
pub trait Clock: Send {
    fn now(&self) -> Instant;
}

/// Wall-clock time via `Instant::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Simulated time that only moves when told to
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and hand another to the carousel.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        let origin = Instant::now();
        Self {
            origin,
            now: Arc::new(Mutex::new(origin)),
        }
    }

    /// Move time forward by `by`
    #[cfg(test)]
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    /// Jump to `at` after the origin (never moves backwards)
    pub fn set_elapsed(&self, at: Duration) {
        let target = self.origin + at;
        let mut now = self.now.lock().unwrap();
        if target > *now {
            *now = target;
        }
    }

    /// Time elapsed since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.now() - self.origin
    }

    /// The instant this clock started at
    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shares_time_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(250));
        assert_eq!(clock.now(), clock.origin() + Duration::from_millis(250));
    }

    #[test]
    fn test_set_elapsed_never_rewinds() {
        let clock = ManualClock::new();
        clock.set_elapsed(Duration::from_secs(10));
        clock.set_elapsed(Duration::from_secs(4));
        assert_eq!(clock.elapsed(), Duration::from_secs(10));
    }
}
