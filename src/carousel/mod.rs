//! Auto-rotating, interaction-aware banner carousel
//!
//! The carousel owns the visible slide, the hover flag, pointer tracking and
//! the rotation scheduler. Hosts translate their input events into the
//! handlers below, ask `next_deadline()` when to wake up, and call `poll()`
//! when that deadline passes. Everything runs on the caller's thread in
//! discrete turns; there is nothing to lock.
//!
//! Every handler applies navigation first and raises the interaction signal
//! last, so the scheduler always observes the updated index.

pub mod clock;
pub mod index;
pub mod motion;
pub mod pointer;
pub mod scheduler;
pub mod slide;
pub mod timer;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use index::LoopMode;
pub use motion::{DesktopMotionPreference, FixedMotionPreference, MotionPreference};
pub use pointer::{Swipe, SWIPE_THRESHOLD_PX};
pub use scheduler::{RotationPolicy, RotationState};
pub use slide::{CarouselError, Slide, SlideDeck};
pub use timer::{ArmedTimer, TimerKind};
pub use view::CarouselView;

use index::Track;
use pointer::PointerTracker;
use scheduler::{EventContext, RotationScheduler, SchedulerEvent};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Arrow control direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Keys the carousel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Construction options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub policy: RotationPolicy,
    pub swipe_threshold_px: f64,
    pub loop_mode: LoopMode,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            policy: RotationPolicy::default(),
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            loop_mode: LoopMode::default(),
        }
    }
}

impl CarouselOptions {
    fn validate(&self) -> Result<(), CarouselError> {
        if self.policy.interval.is_zero() {
            return Err(CarouselError::ZeroDuration { name: "interval" });
        }
        if self.policy.cooldown.is_zero() {
            return Err(CarouselError::ZeroDuration { name: "cooldown" });
        }
        Ok(())
    }
}

/// Point-in-time summary, for logs and the `simulate` timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub index: usize,
    pub slide_count: usize,
    pub state: RotationState,
    pub armed: Option<TimerKind>,
    /// Milliseconds until the armed timer fires
    pub due_in_ms: Option<u64>,
    pub hovered: bool,
    pub animation_enabled: bool,
}

/// The carousel component
pub struct Carousel {
    deck: SlideDeck,
    track: Track,
    scheduler: RotationScheduler,
    pointer: PointerTracker,
    clock: Box<dyn Clock>,
    swipe_threshold_px: f64,
    reduced_motion: bool,
    hovered: bool,
    last_interaction: Option<Instant>,
    mounted: bool,
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.deck.len())
            .field("index", &self.track.current_index())
            .field("state", &self.scheduler.state())
            .field("hovered", &self.hovered)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl Carousel {
    /// Mount a carousel showing the first slide
    ///
    /// Queries the motion capability once. Rotation starts only with motion
    /// allowed and at least two slides.
    pub fn mount(
        deck: SlideDeck,
        options: CarouselOptions,
        clock: Box<dyn Clock>,
        motion: Option<&dyn MotionPreference>,
    ) -> Result<Self, CarouselError> {
        options.validate()?;

        let reduced_motion = motion::resolve(motion);
        let eligible = !reduced_motion && deck.len() >= 2;
        let now = clock.now();
        let scheduler = RotationScheduler::mount(options.policy, eligible, now);

        tracing::info!(
            slides = deck.len(),
            reduced_motion,
            loop_mode = options.loop_mode.as_str(),
            "Carousel mounted ({})",
            scheduler.state()
        );

        Ok(Self {
            track: Track::new(options.loop_mode, deck.len()),
            deck,
            scheduler,
            pointer: PointerTracker::new(),
            clock,
            swipe_threshold_px: options.swipe_threshold_px,
            reduced_motion,
            hovered: false,
            last_interaction: None,
            mounted: true,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Show slide `target`, wrapping out-of-range values
    pub fn go_to(&mut self, target: i64) {
        if !self.mounted {
            return;
        }
        if self.track.go_to(target) {
            self.log_slide();
        }
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: i64) {
        if !self.mounted {
            return;
        }
        if self.track.step(delta) {
            self.log_slide();
        }
    }

    fn log_slide(&self) {
        tracing::debug!(
            index = self.track.current_index(),
            position = self.track.position(),
            "slide changed"
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input handlers
    // ─────────────────────────────────────────────────────────────────────

    /// Dot indicator clicked
    pub fn on_dot_select(&mut self, index: usize) {
        if !self.interactive() {
            return;
        }
        self.go_to(index as i64);
        self.signal_interaction();
    }

    /// Previous/next arrow clicked
    pub fn on_arrow_click(&mut self, direction: Direction) {
        if !self.interactive() {
            return;
        }
        match direction {
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
        }
        self.signal_interaction();
    }

    /// A complete pointer/touch sequence from `start_x` to `end_x`
    pub fn on_pointer_sequence(&mut self, start_x: f64, end_x: f64) {
        if !self.interactive() {
            return;
        }
        let swipe = match pointer::classify(start_x, end_x, self.swipe_threshold_px) {
            Ok(swipe) => swipe,
            Err(e) => {
                tracing::warn!("Ignoring swipe: {}", e);
                Swipe::None
            }
        };
        self.apply_swipe(swipe);
        self.signal_interaction();
    }

    /// Pointer pressed; counts as an interaction on its own
    pub fn pointer_down(&mut self, x: f64) {
        if !self.interactive() {
            return;
        }
        if let Err(e) = self.pointer.down(x) {
            tracing::warn!("Ignoring pointer down: {}", e);
        }
        self.signal_interaction();
    }

    pub fn pointer_move(&mut self, x: f64) {
        if !self.interactive() {
            return;
        }
        if let Err(e) = self.pointer.move_to(x) {
            tracing::warn!("Ignoring pointer move: {}", e);
        }
    }

    /// Pointer released: classify the swipe, navigate, signal interaction
    pub fn pointer_up(&mut self) {
        if !self.interactive() {
            return;
        }
        if !self.pointer.is_active() {
            return;
        }
        let swipe = self.pointer.up(self.swipe_threshold_px);
        self.apply_swipe(swipe);
        self.signal_interaction();
    }

    fn apply_swipe(&mut self, swipe: Swipe) {
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Prev => self.prev(),
            Swipe::None => {}
        }
    }

    /// Key pressed while the carousel has focus; returns whether it was used
    pub fn on_key_down(&mut self, key: Key) -> bool {
        if !self.interactive() {
            return false;
        }
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => return false,
        }
        self.signal_interaction();
        true
    }

    pub fn on_mouse_enter(&mut self) {
        if !self.mounted || self.hovered {
            return;
        }
        self.hovered = true;
        self.dispatch(SchedulerEvent::HoverStart);
    }

    pub fn on_mouse_leave(&mut self) {
        if !self.mounted || !self.hovered {
            return;
        }
        self.hovered = false;
        self.dispatch(SchedulerEvent::HoverEnd);
    }

    fn interactive(&self) -> bool {
        self.mounted && !self.deck.is_empty()
    }

    /// Trailing step of every manual navigation handler
    fn signal_interaction(&mut self) {
        self.last_interaction = Some(self.clock.now());
        self.dispatch(SchedulerEvent::Interaction);
    }

    fn dispatch(&mut self, event: SchedulerEvent) {
        let ctx = self.context(self.clock.now());
        self.scheduler.handle(event, &ctx);
    }

    fn context(&self, now: Instant) -> EventContext {
        EventContext {
            now,
            hovered: self.hovered,
            last_interaction: self.last_interaction,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────────────────

    /// When the host should next call `poll()`
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.mounted {
            return None;
        }
        self.scheduler.next_deadline()
    }

    /// Fire the armed timer if it is due; returns whether the slide advanced
    pub fn poll(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let now = self.clock.now();
        let Some(timer) = self.scheduler.take_due(now) else {
            return false;
        };

        // The timer fired at its deadline, however late the host noticed
        let ctx = self.context(timer.deadline);
        let step = self
            .scheduler
            .handle(SchedulerEvent::TimerFired(timer.kind), &ctx);
        if step.advance {
            self.next();
        }
        self.scheduler.catch_up(now);
        step.advance
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────

    /// Host finished animating to the current position
    pub fn on_transition_end(&mut self) {
        if self.mounted && self.track.on_transition_end() {
            tracing::trace!(position = self.track.position(), "snapped off clone");
        }
    }

    /// Host presented a frame; re-enables animation after a snap
    pub fn acknowledge_frame(&mut self) {
        if self.mounted {
            self.track.acknowledge_frame();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Tear down: cancel every timer and stop reacting to input
    ///
    /// Safe to call repeatedly; also runs on drop.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.dispatch(SchedulerEvent::Unmount);
        self.pointer.cancel();
        self.mounted = false;
        tracing::debug!("carousel unmounted");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn current_index(&self) -> usize {
        self.track.current_index()
    }

    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.track.current_index())
    }

    pub fn rotation_state(&self) -> RotationState {
        self.scheduler.state()
    }

    pub fn armed_timer(&self) -> Option<ArmedTimer> {
        self.scheduler.armed()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn last_interaction(&self) -> Option<Instant> {
        self.last_interaction
    }

    pub fn animation_enabled(&self) -> bool {
        self.track.animation_enabled()
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Strip position (differs from the index in clone-padded mode)
    pub fn position(&self) -> usize {
        self.track.position()
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Render model for the current state
    pub fn view(&self) -> CarouselView {
        CarouselView::build(
            &self.deck,
            &self.track,
            self.reduced_motion,
            self.scheduler.auto_rotate_active(),
        )
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        let now = self.clock.now();
        let armed = self.next_deadline().and(self.scheduler.armed());
        CarouselSnapshot {
            index: self.current_index(),
            slide_count: self.slide_count(),
            state: self.rotation_state(),
            armed: armed.map(|t| t.kind),
            due_in_ms: armed.map(|t| duration_ms(t.remaining(now))),
            hovered: self.is_hovered(),
            animation_enabled: self.animation_enabled(),
        }
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn duration_ms(d: Duration) -> u64 {
    d.as_millis().min(u64::MAX as u128) as u64
}
