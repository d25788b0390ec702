// TUI application state
//
// Owns the mounted carousel and translates terminal input into carousel
// handlers. Timing (animation, key repeat) reads the carousel's clock so the
// whole screen runs on one notion of "now".

use super::animation::SlideAnimation;
use super::input::InputHandler;
use super::layout::{HitTarget, ScreenLayout};
use crate::carousel::{Carousel, Direction, Key};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    pub carousel: Carousel,

    /// Log buffer for the log panel
    pub log_buffer: LogBuffer,

    pub theme: Theme,

    /// Rects from the last draw, used for hit-testing
    pub layout: ScreenLayout,

    /// Whether the log panel is shown (toggled with L)
    pub show_logs: bool,

    pub should_quit: bool,

    animation: SlideAnimation,
    input: InputHandler,
    /// Pixels per terminal column for swipe distances
    cell_width_px: f64,
    start_time: Instant,
}

impl App {
    pub fn new(carousel: Carousel, log_buffer: LogBuffer, config: &Config) -> Self {
        let now = carousel.now();
        let offset = carousel.view().translate_percent as f64;
        Self {
            carousel,
            log_buffer,
            theme: Theme::by_name(&config.theme),
            layout: ScreenLayout::default(),
            show_logs: true,
            should_quit: false,
            animation: SlideAnimation::at_rest(offset, now),
            input: InputHandler::with_default_config(),
            cell_width_px: config.carousel.cell_width_px,
            start_time: now,
        }
    }

    fn now(&self) -> Instant {
        self.carousel.now()
    }

    /// Uptime formatted as HH:MM:SS
    pub fn uptime(&self) -> String {
        let secs = self.now().saturating_duration_since(self.start_time).as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────

    /// Point the animation at the position the render model asks for
    fn sync_animation(&mut self) {
        let now = self.now();
        let view = self.carousel.view();
        let transition = view
            .transition
            .map(|t| Duration::from_millis(t.duration_ms));
        self.animation
            .retarget(view.translate_percent as f64, transition, now);

        // Without a transition there is no end to wait for: snap off a clone now
        if transition.is_none() {
            let before = self.carousel.position();
            self.carousel.on_transition_end();
            if self.carousel.position() != before {
                let view = self.carousel.view();
                self.animation
                    .retarget(view.translate_percent as f64, None, now);
            }
        }
    }

    /// Strip offset to draw this frame, in percent of the viewport width
    pub fn strip_offset(&self) -> f64 {
        self.animation.offset(self.now())
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running(self.now())
    }

    /// Fire due timers and finish completed transitions
    pub fn tick(&mut self) {
        if self.carousel.poll() {
            self.sync_animation();
        }

        let now = self.now();
        if self.animation.take_finished(now) {
            self.carousel.on_transition_end();
            // A snap off a clone lands here without a transition
            self.sync_animation();
        }
    }

    /// Called after each frame reaches the terminal
    pub fn frame_presented(&mut self) {
        self.carousel.acknowledge_frame();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let key = key_event.code;

        if key_event.kind == KeyEventKind::Release {
            self.input.handle_key_release(key);
            return;
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let now = self.now();
        if !self.input.handle_key_press(key, now) {
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('L') => self.show_logs = !self.show_logs,
            KeyCode::Left | KeyCode::Char('h') => {
                self.carousel.on_key_down(Key::ArrowLeft);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.carousel.on_key_down(Key::ArrowRight);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.carousel.slide_count() {
                    self.carousel.on_dot_select(index);
                }
            }
            _ => {
                self.carousel.on_key_down(Key::Other);
            }
        }
        self.sync_animation();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);

        if self.layout.is_over_carousel(col, row) {
            self.carousel.on_mouse_enter();
        } else {
            self.carousel.on_mouse_leave();
        }

        let x = col as f64 * self.cell_width_px;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.layout.hit_test(col, row) {
                Some(HitTarget::Prev) => self.carousel.on_arrow_click(Direction::Prev),
                Some(HitTarget::Next) => self.carousel.on_arrow_click(Direction::Next),
                Some(HitTarget::Dot(index)) => self.carousel.on_dot_select(index),
                Some(HitTarget::Viewport) => self.carousel.pointer_down(x),
                Some(HitTarget::Frame) | None => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => self.carousel.pointer_move(x),
            MouseEventKind::Up(MouseButton::Left) => self.carousel.pointer_up(),
            _ => {}
        }
        self.sync_animation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{
        CarouselOptions, FixedMotionPreference, LoopMode, ManualClock, RotationState, Slide,
        SlideDeck,
    };
    use ratatui::layout::Rect;

    const MS: Duration = Duration::from_millis(1);

    fn app_with(options: CarouselOptions) -> (App, ManualClock) {
        app_with_motion(options, false)
    }

    fn app_with_motion(options: CarouselOptions, reduced_motion: bool) -> (App, ManualClock) {
        let clock = ManualClock::new();
        let deck = SlideDeck::new(
            (1..=3)
                .map(|i| Slide::new(i.to_string(), format!("b{i}.png"), format!("Banner {i}")))
                .collect(),
        )
        .unwrap();
        let carousel = Carousel::mount(
            deck,
            options,
            Box::new(clock.clone()),
            Some(&FixedMotionPreference(reduced_motion)),
        )
        .unwrap();
        let mut app = App::new(carousel, LogBuffer::new(), &Config::default());
        app.layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30), 3, false);
        (app, clock)
    }

    fn setup() -> (App, ManualClock) {
        app_with(CarouselOptions::default())
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn clicking_next_arrow_navigates_and_pauses() {
        let (mut app, _clock) = setup();
        let next = app.layout.next;

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), next.x, next.y + 2));

        assert_eq!(app.carousel.current_index(), 1);
        assert!(app.carousel.is_hovered());
        assert_eq!(app.carousel.rotation_state(), RotationState::PausedHover);
    }

    #[test]
    fn clicking_a_dot_selects_it() {
        let (mut app, _clock) = setup();
        let dot = app.layout.dots[2];

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), dot.x, dot.y));
        assert_eq!(app.carousel.current_index(), 2);
    }

    #[test]
    fn hover_tracks_pointer_position() {
        let (mut app, _clock) = setup();
        let vp = app.layout.viewport;

        app.handle_mouse(mouse(MouseEventKind::Moved, vp.x + 1, vp.y + 1));
        assert_eq!(app.carousel.rotation_state(), RotationState::PausedHover);

        app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0));
        assert!(!app.carousel.is_hovered());
        assert_eq!(app.carousel.rotation_state(), RotationState::Running);
    }

    #[test]
    fn drag_across_viewport_swipes() {
        let (mut app, _clock) = setup();
        let vp = app.layout.viewport;
        let (start, row) = (vp.x + 40, vp.y + 2);

        // 10 columns at 8px = 80px leftward drag
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start, row));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), start - 10, row));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), start - 10, row));
        assert_eq!(app.carousel.current_index(), 1);

        // 5 columns = 40px, below threshold
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start, row));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), start + 5, row));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), start + 5, row));
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn arrow_keys_and_digits_navigate() {
        let (mut app, clock) = setup();

        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.carousel.current_index(), 1);
        assert_eq!(app.carousel.rotation_state(), RotationState::PausedCooldown);

        clock.advance(50 * MS);
        app.handle_key(press(KeyCode::Char('h')));
        assert_eq!(app.carousel.current_index(), 0);

        app.handle_key(press(KeyCode::Char('3')));
        assert_eq!(app.carousel.current_index(), 2);

        // No slide 9: ignored
        app.handle_key(press(KeyCode::Char('9')));
        assert_eq!(app.carousel.current_index(), 2);
    }

    #[test]
    fn quit_keys() {
        let (mut app, _clock) = setup();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let (mut app, _clock) = setup();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn tick_advances_on_timer_and_animates() {
        let (mut app, clock) = setup();

        clock.advance(Duration::from_secs(10));
        app.tick();
        assert_eq!(app.carousel.current_index(), 1);
        assert!(app.is_animating());

        clock.advance(250 * MS);
        let mid = app.strip_offset();
        assert!(mid < 0.0 && mid > -100.0);

        clock.advance(250 * MS);
        app.tick();
        assert!(!app.is_animating());
        assert_eq!(app.strip_offset(), -100.0);
    }

    #[test]
    fn clone_padded_wrap_snaps_after_transition() {
        let (mut app, clock) = app_with(CarouselOptions {
            loop_mode: LoopMode::ClonePadded,
            ..CarouselOptions::default()
        });

        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.carousel.current_index(), 2);
        assert_eq!(app.carousel.position(), 0);

        clock.advance(500 * MS);
        app.tick();
        // Snapped to the real last cell without animating
        assert_eq!(app.carousel.position(), 3);
        assert!(!app.carousel.animation_enabled());
        assert_eq!(app.strip_offset(), -300.0);

        app.frame_presented();
        assert!(app.carousel.animation_enabled());
    }

    #[test]
    fn reduced_motion_clone_padded_wrap_lands_on_real_slide() {
        let (mut app, clock) = app_with_motion(
            CarouselOptions {
                loop_mode: LoopMode::ClonePadded,
                ..CarouselOptions::default()
            },
            true,
        );

        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.carousel.current_index(), 2);
        assert_eq!(app.carousel.position(), 3);
        assert_eq!(app.strip_offset(), -300.0);

        for _ in 0..20 {
            clock.advance(100 * MS);
            app.tick();
            app.frame_presented();
        }
        assert_eq!(app.carousel.position(), 3);
        assert_eq!(app.strip_offset(), -300.0);
        assert!(app.carousel.animation_enabled());

        // Wrapping forward off the last slide lands on the first real cell
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.carousel.current_index(), 0);
        assert_eq!(app.carousel.position(), 1);
        assert_eq!(app.strip_offset(), -100.0);
        assert!(!app.is_animating());
    }

    #[test]
    fn unmapped_keys_leave_rotation_alone() {
        let (mut app, _clock) = setup();
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.carousel.current_index(), 0);
        assert_eq!(app.carousel.rotation_state(), RotationState::Running);
        assert!(app.carousel.last_interaction().is_none());
    }

    #[test]
    fn log_panel_toggle() {
        let (mut app, _clock) = setup();
        assert!(app.show_logs);
        app.handle_key(press(KeyCode::Char('L')));
        assert!(!app.show_logs);
    }
}
