//! Auto-rotation pause/resume policy.
//!
//! ```text
//!              mount (eligible)            mount (reduced motion / < 2 slides)
//!                    │                                  │
//!                    ▼                                  ▼
//!   ┌──────────► RUNNING ─── interaction ──┐        STOPPED  (absorbing)
//!   │            │  ▲  │ periodic fires:   │
//!   │ hover end  │  │  │ advance + re-arm  ▼
//!   │ (no recent │  │  └──────────── PAUSED_COOLDOWN ◄── interaction (restart)
//!   │ interaction)  │ resume fires,    │  ▲
//!   │            │  │ not hovered:     │  │ hover end within cooldown:
//!   │ hover start│  │ advance          │  │ arm the *remaining* cooldown
//!   │            ▼  │                  ▼  │
//!   └─────────── PAUSED_HOVER ◄── hover start
//! ```
//!
//! `transition` is pure: (state, event, context) -> (state, effects).
//! `RotationScheduler` applies timer effects to its single `TimerSlot` and
//! hands `Advance` back to the carousel.

use super::timer::{ArmedTimer, TimerKind, TimerSlot};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Default auto-advance interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10_000);

/// Default pause after a user interaction
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(30_000);

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationState {
    /// Periodic timer armed
    Running,
    /// Pointer resting on the carousel; nothing armed
    PausedHover,
    /// Resume timer armed after an interaction
    PausedCooldown,
    /// Never rotates: reduced motion, too few slides, or unmounted
    Stopped,
}

impl RotationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::PausedHover => "PAUSED_HOVER",
            Self::PausedCooldown => "PAUSED_COOLDOWN",
            Self::Stopped => "STOPPED",
        }
    }
}

impl fmt::Display for RotationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// Manual navigation (dot, arrow, swipe, key)
    Interaction,
    HoverStart,
    HoverEnd,
    TimerFired(TimerKind),
    Unmount,
}

/// What the policy asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm `kind` to fire `after` from the event time (replaces any armed timer)
    Arm(TimerKind, Duration),
    /// Cancel whatever is armed
    Disarm,
    /// Show the next slide
    Advance,
}

/// Timing knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub interval: Duration,
    pub cooldown: Duration,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Facts the policy reads but does not own
#[derive(Debug, Clone, Copy)]
pub struct EventContext {
    /// When the event logically happened (a timer's deadline for timer events)
    pub now: Instant,
    pub hovered: bool,
    pub last_interaction: Option<Instant>,
}

/// Initial state on mount
pub fn initial(eligible: bool, policy: &RotationPolicy) -> (RotationState, Vec<Effect>) {
    if eligible {
        (
            RotationState::Running,
            vec![Effect::Arm(TimerKind::Periodic, policy.interval)],
        )
    } else {
        (RotationState::Stopped, vec![Effect::Disarm])
    }
}

/// The pause/resume policy
pub fn transition(
    state: RotationState,
    event: SchedulerEvent,
    policy: &RotationPolicy,
    ctx: &EventContext,
) -> (RotationState, Vec<Effect>) {
    use RotationState::*;
    use SchedulerEvent::*;

    let resume_running = || {
        (
            Running,
            vec![
                Effect::Advance,
                Effect::Arm(TimerKind::Periodic, policy.interval),
            ],
        )
    };

    match (state, event) {
        (Stopped, Unmount) => (Stopped, vec![Effect::Disarm]),
        (Stopped, _) => (Stopped, Vec::new()),
        (_, Unmount) => (Stopped, vec![Effect::Disarm]),

        (Running | PausedCooldown, HoverStart) => (PausedHover, vec![Effect::Disarm]),
        (PausedHover, HoverStart) => (PausedHover, Vec::new()),

        (Running | PausedCooldown, Interaction) => (
            PausedCooldown,
            vec![Effect::Arm(TimerKind::Resume, policy.cooldown)],
        ),
        // Hover dominates; the timestamp alone carries the cooldown to hover end
        (PausedHover, Interaction) => (PausedHover, Vec::new()),

        (PausedHover, HoverEnd) => match remaining_cooldown(policy, ctx) {
            Some(remaining) => (
                PausedCooldown,
                vec![Effect::Arm(TimerKind::Resume, remaining)],
            ),
            None => (
                Running,
                vec![Effect::Arm(TimerKind::Periodic, policy.interval)],
            ),
        },
        (Running | PausedCooldown, HoverEnd) => (state, Vec::new()),

        (Running, TimerFired(TimerKind::Periodic)) => (
            Running,
            vec![
                Effect::Advance,
                Effect::Arm(TimerKind::Periodic, policy.interval),
            ],
        ),
        (PausedCooldown, TimerFired(TimerKind::Resume)) if ctx.hovered => {
            (PausedHover, vec![Effect::Disarm])
        }
        (PausedCooldown, TimerFired(TimerKind::Resume)) => resume_running(),

        // A timer of the wrong kind for this state is stale
        (_, TimerFired(_)) => (state, Vec::new()),
    }
}

/// Cooldown left after the last interaction, if any is left
fn remaining_cooldown(policy: &RotationPolicy, ctx: &EventContext) -> Option<Duration> {
    let last = ctx.last_interaction?;
    let elapsed = ctx.now.saturating_duration_since(last);
    let remaining = policy.cooldown.saturating_sub(elapsed);
    (!remaining.is_zero()).then_some(remaining)
}

/// Outcome of feeding one event to the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: RotationState,
    pub to: RotationState,
    /// The carousel should call `next()`
    pub advance: bool,
}

/// Owns the rotation state and the single timer slot
#[derive(Debug)]
pub struct RotationScheduler {
    policy: RotationPolicy,
    state: RotationState,
    slot: TimerSlot,
}

impl RotationScheduler {
    /// Mount: start running when eligible, otherwise stay stopped
    pub fn mount(policy: RotationPolicy, eligible: bool, now: Instant) -> Self {
        let (state, effects) = initial(eligible, &policy);
        let mut scheduler = Self {
            policy,
            state,
            slot: TimerSlot::new(),
        };
        scheduler.apply(&effects, now);
        tracing::debug!(state = %state, "rotation scheduler mounted");
        scheduler
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    /// Whether the periodic auto-advance is live
    pub fn auto_rotate_active(&self) -> bool {
        self.state == RotationState::Running
    }

    pub fn armed(&self) -> Option<ArmedTimer> {
        self.slot.armed()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.slot.deadline()
    }

    /// Feed an event through the policy and apply its timer effects
    pub fn handle(&mut self, event: SchedulerEvent, ctx: &EventContext) -> Step {
        let from = self.state;
        let (to, effects) = transition(from, event, &self.policy, ctx);
        self.state = to;
        self.apply(&effects, ctx.now);

        if from != to {
            tracing::debug!(from = %from, to = %to, event = ?event, "rotation state changed");
        }

        Step {
            from,
            to,
            advance: effects.contains(&Effect::Advance),
        }
    }

    /// Take the armed timer if it is due at `now`
    pub fn take_due(&mut self, now: Instant) -> Option<ArmedTimer> {
        self.slot.take_due(now)
    }

    /// Re-anchor a periodic timer that is already behind `now`
    ///
    /// Periodic re-arms are anchored on the previous deadline. After a long
    /// stall (suspended host) that anchor is in the past; skip the missed
    /// ticks instead of replaying them.
    pub fn catch_up(&mut self, now: Instant) {
        if let Some(timer) = self.slot.armed() {
            if timer.kind == TimerKind::Periodic && timer.deadline <= now {
                self.slot.arm(TimerKind::Periodic, now + self.policy.interval);
            }
        }
    }

    fn apply(&mut self, effects: &[Effect], at: Instant) {
        for effect in effects {
            match *effect {
                Effect::Arm(kind, after) => {
                    self.slot.arm(kind, at + after);
                }
                Effect::Disarm => {
                    self.slot.disarm();
                }
                Effect::Advance => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SEC: Duration = Duration::from_secs(1);

    fn ctx(now: Instant, hovered: bool, last_interaction: Option<Instant>) -> EventContext {
        EventContext {
            now,
            hovered,
            last_interaction,
        }
    }

    #[test]
    fn test_mount_eligible_arms_periodic() {
        let t0 = Instant::now();
        let scheduler = RotationScheduler::mount(RotationPolicy::default(), true, t0);
        assert_eq!(scheduler.state(), RotationState::Running);
        let armed = scheduler.armed().unwrap();
        assert_eq!(armed.kind, TimerKind::Periodic);
        assert_eq!(armed.deadline, t0 + DEFAULT_INTERVAL);
    }

    #[test]
    fn test_mount_ineligible_is_stopped() {
        let scheduler = RotationScheduler::mount(RotationPolicy::default(), false, Instant::now());
        assert_eq!(scheduler.state(), RotationState::Stopped);
        assert!(scheduler.armed().is_none());
    }

    #[test]
    fn test_interaction_swaps_periodic_for_resume() {
        let t0 = Instant::now();
        let mut scheduler = RotationScheduler::mount(RotationPolicy::default(), true, t0);

        let at = t0 + 3 * SEC;
        let step = scheduler.handle(SchedulerEvent::Interaction, &ctx(at, false, Some(at)));

        assert_eq!(step.to, RotationState::PausedCooldown);
        assert!(!step.advance);
        let armed = scheduler.armed().unwrap();
        assert_eq!(armed.kind, TimerKind::Resume);
        assert_eq!(armed.deadline, at + DEFAULT_COOLDOWN);
    }

    #[test]
    fn test_hover_start_disarms_everything() {
        let t0 = Instant::now();
        let policy = RotationPolicy::default();

        for state in [RotationState::Running, RotationState::PausedCooldown] {
            let (next, effects) =
                transition(state, SchedulerEvent::HoverStart, &policy, &ctx(t0, true, None));
            assert_eq!(next, RotationState::PausedHover);
            assert_eq!(effects, vec![Effect::Disarm]);
        }
    }

    #[test]
    fn test_hover_end_without_interaction_resumes() {
        let t0 = Instant::now();
        let (next, effects) = transition(
            RotationState::PausedHover,
            SchedulerEvent::HoverEnd,
            &RotationPolicy::default(),
            &ctx(t0, false, None),
        );
        assert_eq!(next, RotationState::Running);
        assert_eq!(effects, vec![Effect::Arm(TimerKind::Periodic, DEFAULT_INTERVAL)]);
    }

    #[test]
    fn test_hover_end_honors_remaining_cooldown() {
        let t = Instant::now();
        let (next, effects) = transition(
            RotationState::PausedHover,
            SchedulerEvent::HoverEnd,
            &RotationPolicy::default(),
            &ctx(t + 20 * SEC, false, Some(t)),
        );
        assert_eq!(next, RotationState::PausedCooldown);
        assert_eq!(effects, vec![Effect::Arm(TimerKind::Resume, 10 * SEC)]);
    }

    #[test]
    fn test_hover_end_after_cooldown_expired_resumes() {
        let t = Instant::now();
        let (next, _) = transition(
            RotationState::PausedHover,
            SchedulerEvent::HoverEnd,
            &RotationPolicy::default(),
            &ctx(t + 30 * SEC, false, Some(t)),
        );
        assert_eq!(next, RotationState::Running);
    }

    #[test]
    fn test_resume_fired_while_hovered_parks_in_hover() {
        let t0 = Instant::now();
        let (next, effects) = transition(
            RotationState::PausedCooldown,
            SchedulerEvent::TimerFired(TimerKind::Resume),
            &RotationPolicy::default(),
            &ctx(t0, true, Some(t0)),
        );
        assert_eq!(next, RotationState::PausedHover);
        assert!(!effects.contains(&Effect::Advance));
    }

    #[test]
    fn test_resume_fired_advances_and_restarts_periodic() {
        let t0 = Instant::now();
        let (next, effects) = transition(
            RotationState::PausedCooldown,
            SchedulerEvent::TimerFired(TimerKind::Resume),
            &RotationPolicy::default(),
            &ctx(t0, false, None),
        );
        assert_eq!(next, RotationState::Running);
        assert_eq!(
            effects,
            vec![
                Effect::Advance,
                Effect::Arm(TimerKind::Periodic, DEFAULT_INTERVAL)
            ]
        );
    }

    #[test]
    fn test_stopped_is_absorbing() {
        let t0 = Instant::now();
        let policy = RotationPolicy::default();
        for event in [
            SchedulerEvent::Interaction,
            SchedulerEvent::HoverStart,
            SchedulerEvent::HoverEnd,
            SchedulerEvent::TimerFired(TimerKind::Periodic),
            SchedulerEvent::TimerFired(TimerKind::Resume),
        ] {
            let (next, effects) =
                transition(RotationState::Stopped, event, &policy, &ctx(t0, false, None));
            assert_eq!(next, RotationState::Stopped);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_unmount_disarms_from_any_state() {
        let t0 = Instant::now();
        let mut scheduler = RotationScheduler::mount(RotationPolicy::default(), true, t0);
        scheduler.handle(SchedulerEvent::Interaction, &ctx(t0, false, Some(t0)));

        scheduler.handle(SchedulerEvent::Unmount, &ctx(t0, false, Some(t0)));
        assert_eq!(scheduler.state(), RotationState::Stopped);
        assert!(scheduler.armed().is_none());

        // Idempotent
        scheduler.handle(SchedulerEvent::Unmount, &ctx(t0, false, Some(t0)));
        assert!(scheduler.armed().is_none());
    }

    #[test]
    fn test_catch_up_skips_missed_ticks() {
        let t0 = Instant::now();
        let mut scheduler = RotationScheduler::mount(RotationPolicy::default(), true, t0);
        let fired = scheduler.take_due(t0 + 65 * SEC).unwrap();
        scheduler.handle(
            SchedulerEvent::TimerFired(fired.kind),
            &ctx(fired.deadline, false, None),
        );
        assert_eq!(scheduler.next_deadline(), Some(t0 + 20 * SEC));

        scheduler.catch_up(t0 + 65 * SEC);
        assert_eq!(scheduler.next_deadline(), Some(t0 + 75 * SEC));
    }

    fn event_strategy() -> impl Strategy<Value = SchedulerEvent> {
        prop_oneof![
            Just(SchedulerEvent::Interaction),
            Just(SchedulerEvent::HoverStart),
            Just(SchedulerEvent::HoverEnd),
            Just(SchedulerEvent::TimerFired(TimerKind::Periodic)),
            Just(SchedulerEvent::TimerFired(TimerKind::Resume)),
        ]
    }

    proptest! {
        #[test]
        fn prop_armed_timer_matches_state(
            events in prop::collection::vec((event_strategy(), 0u64..40_000), 0..80),
        ) {
            let t0 = Instant::now();
            let mut now = t0;
            let mut hovered = false;
            let mut last_interaction = None;
            let mut scheduler = RotationScheduler::mount(RotationPolicy::default(), true, t0);

            for (event, gap_ms) in events {
                now += Duration::from_millis(gap_ms);
                match event {
                    SchedulerEvent::HoverStart => hovered = true,
                    SchedulerEvent::HoverEnd => hovered = false,
                    SchedulerEvent::Interaction => last_interaction = Some(now),
                    _ => {}
                }
                scheduler.handle(event, &ctx(now, hovered, last_interaction));

                let armed = scheduler.armed().map(|t| t.kind);
                match scheduler.state() {
                    RotationState::Running => prop_assert_eq!(armed, Some(TimerKind::Periodic)),
                    RotationState::PausedCooldown => prop_assert_eq!(armed, Some(TimerKind::Resume)),
                    RotationState::PausedHover | RotationState::Stopped => prop_assert_eq!(armed, None),
                }
                if hovered {
                    prop_assert!(!scheduler.auto_rotate_active());
                }
            }
        }
    }
}
