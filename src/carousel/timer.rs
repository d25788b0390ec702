//! Single timer slot shared by the periodic and resume timers.
//!
//! The slot holds at most one armed timer. Arming replaces whatever was
//! there, so the periodic auto-advance and the one-shot resume can never be
//! armed together. Timers here are deadlines, not callbacks: the host polls
//! `deadline()` and reports back when it passes, so a disarmed or dropped
//! slot leaves nothing behind that could fire later.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Which timer is armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Repeating auto-advance
    Periodic,
    /// One-shot resume after an interaction cooldown
    Resume,
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Periodic => "periodic",
            Self::Resume => "resume",
        }
    }
}

/// An armed timer and when it is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmedTimer {
    pub kind: TimerKind,
    pub deadline: Instant,
}

impl ArmedTimer {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline (zero once due)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Slot that owns the (at most one) armed timer
#[derive(Debug, Default)]
pub struct TimerSlot {
    armed: Option<ArmedTimer>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// Arm `kind` to fire at `deadline`, replacing any armed timer
    ///
    /// Returns the timer that was cancelled, if any.
    pub fn arm(&mut self, kind: TimerKind, deadline: Instant) -> Option<ArmedTimer> {
        self.armed.replace(ArmedTimer { kind, deadline })
    }

    /// Cancel whatever is armed; safe to call when nothing is
    pub fn disarm(&mut self) -> Option<ArmedTimer> {
        self.armed.take()
    }

    pub fn armed(&self) -> Option<ArmedTimer> {
        self.armed
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|t| t.deadline)
    }

    /// Remove and return the armed timer if it is due at `now`
    pub fn take_due(&mut self, now: Instant) -> Option<ArmedTimer> {
        match self.armed {
            Some(timer) if timer.is_due(now) => self.armed.take(),
            _ => None,
        }
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        if let Some(timer) = self.armed.take() {
            tracing::trace!(kind = timer.kind.as_str(), "timer cancelled on drop");
        }
    }
}
