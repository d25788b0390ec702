//! Slide-strip positioning and wrap-around arithmetic.
//!
//! Two interchangeable strategies satisfy the same wrap invariant:
//!
//! - `Modular`: the strip holds exactly the real slides and positions wrap
//!   with `rem_euclid`. Wrapping from the last slide to the first animates
//!   back across the strip.
//! - `ClonePadded`: the strip is `[clone(last), real.., clone(first)]`.
//!   Stepping past either end lands on a clone with animation, then
//!   `on_transition_end` snaps to the matching real slide with animation
//!   suppressed so the jump is invisible.
//!
//! Either way `current_index()` always reports a real slide index.

use serde::{Deserialize, Serialize};

/// Wrap-around strategy for the slide strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopMode {
    /// Plain modular indexing over the real slides
    #[default]
    Modular,
    /// Virtual clones at both ends for a seamless visual wrap
    ClonePadded,
}

impl LoopMode {
    /// Parse mode string from config
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "modular" => Some(Self::Modular),
            "clone-padded" | "clones" => Some(Self::ClonePadded),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modular => "modular",
            Self::ClonePadded => "clone-padded",
        }
    }
}

/// Normalize any integer target into `[0, count - 1]`
///
/// Negative targets wrap from the end (`-1` is the last slide). Returns 0
/// for an empty sequence without dividing by zero.
pub fn normalize(target: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    target.rem_euclid(count as i64) as usize
}

/// Position of the slide strip plus the animation gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    mode: LoopMode,
    count: usize,
    /// Position in strip space (includes clones in `ClonePadded` mode)
    position: usize,
    /// Whether the next position change is rendered with a transition
    animate: bool,
}

impl Track {
    /// Create a track showing the first real slide
    pub fn new(mode: LoopMode, count: usize) -> Self {
        let position = match mode {
            LoopMode::ClonePadded if count > 0 => 1,
            _ => 0,
        };

        Self {
            mode,
            count,
            position,
            animate: true,
        }
    }

    /// Number of rendered strip cells (real slides plus clones)
    pub fn strip_len(&self) -> usize {
        match self.mode {
            LoopMode::ClonePadded if self.count > 0 => self.count + 2,
            _ => self.count,
        }
    }

    /// Raw strip position, used for the translate offset
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn animation_enabled(&self) -> bool {
        self.animate
    }

    /// Real slide index currently shown (clones resolve to their twin)
    pub fn current_index(&self) -> usize {
        if self.count == 0 {
            return 0;
        }
        match self.mode {
            LoopMode::Modular => self.position,
            LoopMode::ClonePadded => self.real_index_of(self.position),
        }
    }

    /// Real slide index rendered in strip cell `cell`
    pub fn real_index_of(&self, cell: usize) -> usize {
        if self.count == 0 {
            return 0;
        }
        match self.mode {
            LoopMode::Modular => cell % self.count,
            LoopMode::ClonePadded => normalize(cell as i64 - 1, self.count),
        }
    }

    /// Whether strip cell `cell` is a virtual clone
    pub fn is_clone(&self, cell: usize) -> bool {
        self.mode == LoopMode::ClonePadded
            && self.count > 0
            && (cell == 0 || cell == self.count + 1)
    }

    /// Move to a real slide, normalizing out-of-range targets
    ///
    /// Returns whether the shown slide changed.
    pub fn go_to(&mut self, target: i64) -> bool {
        if self.count == 0 {
            return false;
        }
        self.settle();

        let before = self.current_index();
        let real = normalize(target, self.count);
        self.position = match self.mode {
            LoopMode::Modular => real,
            LoopMode::ClonePadded => real + 1,
        };
        self.animate = true;

        before != real
    }

    /// Step by `delta` slides (next = +1, prev = -1)
    pub fn step(&mut self, delta: i64) -> bool {
        if self.count == 0 {
            return false;
        }
        self.settle();

        let before = self.current_index();
        match self.mode {
            LoopMode::Modular => {
                self.position = normalize(self.position as i64 + delta, self.count);
            }
            LoopMode::ClonePadded => {
                // Single steps may land on a clone; larger jumps go straight to the real cell
                let target = self.position as i64 + delta;
                self.position = if (0..=self.count as i64 + 1).contains(&target) {
                    target as usize
                } else {
                    normalize(target - 1, self.count) + 1
                };
            }
        }
        self.animate = true;

        before != self.current_index()
    }

    /// Host reports that the slide transition finished
    ///
    /// Parked on a clone, snap to the matching real cell and suppress the
    /// transition for that snap. Returns whether a snap happened.
    pub fn on_transition_end(&mut self) -> bool {
        if self.settle() {
            self.animate = false;
            true
        } else {
            false
        }
    }

    /// Host reports that a frame has been presented
    ///
    /// Re-enables animation once the snapped position is on screen.
    pub fn acknowledge_frame(&mut self) -> bool {
        if self.animate {
            return false;
        }
        self.animate = true;
        true
    }

    /// Move off a clone cell onto its real twin without touching `animate`
    fn settle(&mut self) -> bool {
        if !self.is_clone(self.position) {
            return false;
        }
        self.position = if self.position == 0 { self.count } else { 1 };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_wraps_negative() {
        assert_eq!(normalize(-1, 3), 2);
        assert_eq!(normalize(-4, 3), 2);
        assert_eq!(normalize(3, 3), 0);
        assert_eq!(normalize(7, 3), 1);
    }

    #[test]
    fn test_normalize_empty_is_zero() {
        assert_eq!(normalize(5, 0), 0);
        assert_eq!(normalize(-5, 0), 0);
    }

    #[test]
    fn test_modular_prev_from_first_goes_to_last() {
        let mut track = Track::new(LoopMode::Modular, 4);
        assert!(track.step(-1));
        assert_eq!(track.current_index(), 3);
        assert!(track.step(1));
        assert_eq!(track.current_index(), 0);
    }

    #[test]
    fn test_empty_track_ignores_navigation() {
        let mut track = Track::new(LoopMode::ClonePadded, 0);
        assert!(!track.step(1));
        assert!(!track.go_to(-3));
        assert_eq!(track.current_index(), 0);
        assert_eq!(track.strip_len(), 0);
    }

    #[test]
    fn test_clone_padded_starts_on_first_real_cell() {
        let track = Track::new(LoopMode::ClonePadded, 3);
        assert_eq!(track.position(), 1);
        assert_eq!(track.current_index(), 0);
        assert_eq!(track.strip_len(), 5);
        assert!(track.is_clone(0));
        assert!(track.is_clone(4));
        assert!(!track.is_clone(2));
    }

    #[test]
    fn test_clone_padded_wrap_forward_snaps_after_transition() {
        let mut track = Track::new(LoopMode::ClonePadded, 3);
        track.go_to(2);
        assert_eq!(track.position(), 3);

        track.step(1);
        // Parked on the clone of the first slide, already reporting index 0
        assert_eq!(track.position(), 4);
        assert_eq!(track.current_index(), 0);
        assert!(track.animation_enabled());

        assert!(track.on_transition_end());
        assert_eq!(track.position(), 1);
        assert!(!track.animation_enabled());

        assert!(track.acknowledge_frame());
        assert!(track.animation_enabled());
        assert!(!track.acknowledge_frame());
    }

    #[test]
    fn test_clone_padded_wrap_backward_snaps_to_last() {
        let mut track = Track::new(LoopMode::ClonePadded, 3);
        track.step(-1);
        assert_eq!(track.position(), 0);
        assert_eq!(track.current_index(), 2);

        track.on_transition_end();
        assert_eq!(track.position(), 3);
        assert_eq!(track.current_index(), 2);
    }

    #[test]
    fn test_clone_padded_navigation_settles_pending_clone() {
        let mut track = Track::new(LoopMode::ClonePadded, 3);
        track.step(-1);
        // No transition end reported; the next step still lands on a real slide
        track.step(-1);
        assert_eq!(track.current_index(), 1);
        assert_eq!(track.position(), 2);
    }

    #[test]
    fn test_transition_end_on_real_cell_is_noop() {
        let mut track = Track::new(LoopMode::ClonePadded, 3);
        track.step(1);
        assert!(!track.on_transition_end());
        assert!(track.animation_enabled());

        let mut modular = Track::new(LoopMode::Modular, 3);
        assert!(!modular.on_transition_end());
    }

    fn apply(track: &mut Track, steps: &[i64]) -> Vec<usize> {
        steps
            .iter()
            .map(|&delta| {
                track.step(delta);
                track.current_index()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_range(
            count in 1usize..12,
            steps in prop::collection::vec(prop_oneof![Just(1i64), Just(-1i64)], 0..64),
            clone_padded in any::<bool>(),
        ) {
            let mode = if clone_padded { LoopMode::ClonePadded } else { LoopMode::Modular };
            let mut track = Track::new(mode, count);
            for index in apply(&mut track, &steps) {
                prop_assert!(index < count);
            }
            prop_assert!(track.position() < track.strip_len());
        }

        #[test]
        fn prop_strategies_agree(
            count in 1usize..8,
            steps in prop::collection::vec(-3i64..=3, 0..48),
        ) {
            let mut modular = Track::new(LoopMode::Modular, count);
            let mut padded = Track::new(LoopMode::ClonePadded, count);
            prop_assert_eq!(apply(&mut modular, &steps), apply(&mut padded, &steps));
        }

        #[test]
        fn prop_go_to_normalizes(count in 1usize..16, target in -1000i64..1000) {
            let mut track = Track::new(LoopMode::Modular, count);
            track.go_to(target);
            prop_assert_eq!(track.current_index() as i64, target.rem_euclid(count as i64));
        }
    }
}
