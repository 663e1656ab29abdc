//! Keyboard and cursor input state.
//!
//! Tracks held keys for per-frame movement and converts mouse input into
//! look deltas. While the cursor is free, absolute positions are
//! differenced, and the first event only seeds the reference position so
//! entering the window does not produce a rotation jump. While the cursor
//! is captured, look comes from raw device motion instead: a locked
//! cursor reports a frozen position, and a confined one stops at the
//! window edge.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

/// Aggregated input state, fed by window and device events and read once
/// per frame.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    last_cursor: Option<(f64, f64)>,
    captured: bool,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release.
    pub fn key_event(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            let _ = self.held.insert(code);
        } else {
            let _ = self.held.remove(&code);
        }
    }

    /// Whether `code` is currently held down.
    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Record whether the cursor is captured. The stored cursor reference
    /// is dropped on every transition, so the next absolute position
    /// seeds fresh instead of producing a jump.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        self.last_cursor = None;
    }

    /// Convert an absolute cursor position into a look delta.
    ///
    /// The vertical delta is inverted since screen y grows downward while
    /// pitch grows upward. Returns `None` for the seeding event, and
    /// while the cursor is captured (raw motion drives look then).
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        if self.captured {
            return None;
        }
        let delta = self.last_cursor.map(|(last_x, last_y)| {
            ((x - last_x) as f32, (last_y - y) as f32)
        });
        self.last_cursor = Some((x, y));
        delta
    }

    /// Convert a raw device motion delta into a look delta, vertical axis
    /// inverted as for [`cursor_moved`](Self::cursor_moved). Returns
    /// `None` while the cursor is free (absolute positions drive look
    /// then).
    #[must_use]
    pub fn mouse_motion(&self, dx: f64, dy: f64) -> Option<(f32, f32)> {
        if !self.captured {
            return None;
        }
        Some((dx as f32, -(dy as f32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cursor_event_only_seeds_the_reference() {
        let mut input = InputState::new();
        assert_eq!(input.cursor_moved(400.0, 300.0), None);
        assert_eq!(input.cursor_moved(410.0, 290.0), Some((10.0, 10.0)));
    }

    #[test]
    fn vertical_delta_is_inverted() {
        let mut input = InputState::new();
        let _ = input.cursor_moved(100.0, 100.0);
        assert_eq!(input.cursor_moved(100.0, 140.0), Some((0.0, -40.0)));
    }

    #[test]
    fn held_keys_track_press_and_release() {
        let mut input = InputState::new();
        assert!(!input.is_held(KeyCode::KeyW));
        input.key_event(KeyCode::KeyW, true);
        input.key_event(KeyCode::KeyA, true);
        assert!(input.is_held(KeyCode::KeyW));
        assert!(input.is_held(KeyCode::KeyA));
        input.key_event(KeyCode::KeyW, false);
        assert!(!input.is_held(KeyCode::KeyW));
        assert!(input.is_held(KeyCode::KeyA));
    }

    #[test]
    fn repeated_presses_are_idempotent() {
        let mut input = InputState::new();
        input.key_event(KeyCode::KeyD, true);
        input.key_event(KeyCode::KeyD, true);
        input.key_event(KeyCode::KeyD, false);
        assert!(!input.is_held(KeyCode::KeyD));
    }

    #[test]
    fn raw_motion_is_ignored_while_free() {
        let input = InputState::new();
        assert_eq!(input.mouse_motion(5.0, 3.0), None);
    }

    #[test]
    fn captured_look_comes_from_raw_motion() {
        let mut input = InputState::new();
        input.set_captured(true);
        assert_eq!(input.mouse_motion(4.0, -2.5), Some((4.0, 2.5)));
        // Absolute positions are frozen or edge-pinned while captured;
        // they must not feed look a second time.
        assert_eq!(input.cursor_moved(400.0, 300.0), None);
        assert_eq!(input.cursor_moved(410.0, 300.0), None);
    }

    #[test]
    fn releasing_capture_reseeds_the_cursor_reference() {
        let mut input = InputState::new();
        let _ = input.cursor_moved(100.0, 100.0);
        input.set_captured(true);
        let _ = input.mouse_motion(30.0, 0.0);
        input.set_captured(false);
        assert_eq!(input.cursor_moved(500.0, 500.0), None);
        assert_eq!(input.cursor_moved(510.0, 495.0), Some((10.0, 5.0)));
    }
}
