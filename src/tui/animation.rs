//! Slide transition animation.
//!
//! Tracks the strip offset (in percent of the viewport width) as it eases
//! from the previous position to the one the render model asks for. A
//! retarget mid-flight starts from wherever the strip currently is.

use std::time::{Duration, Instant};

/// CSS `ease-in-out` approximated by a cubic in/out curve
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct SlideAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    /// Completion not yet reported via `take_finished`
    pending: bool,
}

impl SlideAnimation {
    /// At rest at `offset`
    pub fn at_rest(offset: f64, now: Instant) -> Self {
        Self {
            from: offset,
            to: offset,
            started: now,
            duration: Duration::ZERO,
            pending: false,
        }
    }

    /// Move toward `to`; `None` jumps there without animating
    pub fn retarget(&mut self, to: f64, transition: Option<Duration>, now: Instant) {
        if (to - self.to).abs() < f64::EPSILON {
            return;
        }
        match transition {
            Some(duration) if !duration.is_zero() => {
                self.from = self.offset(now);
                self.duration = duration;
                self.pending = true;
            }
            _ => {
                self.from = to;
                self.duration = Duration::ZERO;
                self.pending = false;
            }
        }
        self.to = to;
        self.started = now;
    }

    /// Current offset
    pub fn offset(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.started) < self.duration
    }

    /// True exactly once after an animated transition completes
    pub fn take_finished(&mut self, now: Instant) -> bool {
        if self.pending && !self.is_running(now) {
            self.pending = false;
            return true;
        }
        false
    }
}
