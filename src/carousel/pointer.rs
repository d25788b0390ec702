//! Pointer/touch tracking and swipe classification.

use thiserror::Error;

/// Default horizontal distance a swipe must exceed, in pixels
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Navigation implied by a completed pointer sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left (start > end): show the next slide
    Next,
    /// Finger moved right: show the previous slide
    Prev,
    /// Too short, or malformed input
    None,
}

/// A pointer coordinate that cannot be used
#[derive(Debug, Error, PartialEq)]
#[error("malformed pointer coordinate: {0}")]
pub struct MalformedPointer(pub f64);

fn checked(x: f64) -> Result<f64, MalformedPointer> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(MalformedPointer(x))
    }
}

/// Classify a pointer sequence from its start and end x coordinates
///
/// `|start - end|` must strictly exceed `threshold`; exactly the threshold
/// is not a swipe.
pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Result<Swipe, MalformedPointer> {
    let delta = checked(start_x)? - checked(end_x)?;

    Ok(if delta.abs() <= threshold {
        Swipe::None
    } else if delta > 0.0 {
        Swipe::Next
    } else {
        Swipe::Prev
    })
}

/// Tracks one pointer sequence (down, any number of moves, up)
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    start_x: Option<f64>,
    last_x: Option<f64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a sequence is in progress
    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Begin a sequence, discarding any unfinished one
    pub fn down(&mut self, x: f64) -> Result<(), MalformedPointer> {
        self.start_x = None;
        self.last_x = None;
        let x = checked(x)?;
        self.start_x = Some(x);
        self.last_x = Some(x);
        Ok(())
    }

    /// Record movement; ignored when no sequence is active
    pub fn move_to(&mut self, x: f64) -> Result<(), MalformedPointer> {
        let x = checked(x)?;
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
        Ok(())
    }

    /// End the sequence and classify it
    ///
    /// A release without a prior `down` (or after a malformed `down`) is not
    /// a swipe. A sequence with no movement ends where it started.
    pub fn up(&mut self, threshold: f64) -> Swipe {
        let (start, end) = match (self.start_x.take(), self.last_x.take()) {
            (Some(start), Some(end)) => (start, end),
            _ => return Swipe::None,
        };
        classify(start, end, threshold).unwrap_or(Swipe::None)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }
}
