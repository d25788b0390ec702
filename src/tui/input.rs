// Input handling with configurable key behaviors
//
// Terminals report held keys as a stream of presses. This module decides
// which of those presses become carousel actions:
// - State-change keys trigger once per press (quit, log toggle)
// - Repeatable keys trigger on press, then repeat while held (slide arrows)
//
// Every call takes the current instant so behavior is testable without sleeping.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between triggers of a state-change key when the terminal
/// never sends Release events
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger only on state change (press then release)
    StateChange,

    /// Trigger on press, then repeat after an initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Slide navigation: a held arrow pages through slides at a readable pace
    pub fn slide_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(600),
            repeat_interval: Duration::from_millis(400),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    pressed_at: Option<Instant>,
    last_triggered: Option<Instant>,
}

/// Input handler that manages key behaviors
#[derive(Debug, Default)]
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press; returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);
        let state = self.key_states.entry(key).or_default();

        let (Some(pressed_at), Some(last)) = (state.pressed_at, state.last_triggered) else {
            // New press always triggers
            state.pressed_at = Some(now);
            state.last_triggered = Some(now);
            return true;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= STATE_CHANGE_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(pressed_at) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };
        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.key_states.remove(&key);
    }

    /// Key bindings for the carousel screen
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::slide_navigation(),
        );

        handler.configure_keys(
            &[
                KeyCode::Esc,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('L'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_state_change_no_repeat() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.handle_key_press(KeyCode::Char('q'), t0));
        assert!(!handler.handle_key_press(KeyCode::Char('q'), t0 + 30 * MS));

        handler.handle_key_release(KeyCode::Char('q'));
        assert!(handler.handle_key_press(KeyCode::Char('q'), t0 + 40 * MS));
    }

    #[test]
    fn test_state_change_debounces_without_release() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.handle_key_press(KeyCode::Enter, t0));
        assert!(!handler.handle_key_press(KeyCode::Enter, t0 + 100 * MS));
        assert!(handler.handle_key_press(KeyCode::Enter, t0 + 160 * MS));
    }

    #[test]
    fn test_held_arrow_repeats_after_delay() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.handle_key_press(KeyCode::Right, t0));
        assert!(!handler.handle_key_press(KeyCode::Right, t0 + 300 * MS));
        assert!(handler.handle_key_press(KeyCode::Right, t0 + 600 * MS));
        assert!(!handler.handle_key_press(KeyCode::Right, t0 + 800 * MS));
        assert!(handler.handle_key_press(KeyCode::Right, t0 + 1000 * MS));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.handle_key_press(KeyCode::Right, t0));
        assert!(handler.handle_key_press(KeyCode::Left, t0 + MS));
    }
}
