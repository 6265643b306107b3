use std::collections::HashMap;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyAction, KeyPress, Modifiers, PointerMoveEvent};

/// Current input state for the window.
///
/// Records the latest event per key and the pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    /// Most recent event for every key seen so far.
    keys: HashMap<Key, KeyPress>,

    /// Pointer position observed by the previous `mouse_delta` call.
    mouse_baseline: Option<(f32, f32)>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key(press) => {
                // A modifier's own event carries the state from before it.
                if !press.key.is_modifier() {
                    self.modifiers = press.modifiers;
                }

                let was_down = self.is_pressed(press.key);
                match press.action {
                    KeyAction::Pressed if !was_down => {
                        frame.record_press(press.key);
                    }
                    KeyAction::Released if was_down => {
                        frame.record_release(press.key);
                    }
                    _ => {}
                }

                self.keys.insert(press.key, *press);
            }
        }

        frame.push_event(ev);
    }

    /// True iff the last recorded action for `key` is `Pressed` or `Repeat`.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.keys.get(&key).is_some_and(|kp| kp.action.is_down())
    }

    /// Last recorded event for `key`.
    pub fn last_press(&self, key: Key) -> Option<&KeyPress> {
        self.keys.get(&key)
    }

    /// Pointer movement since the previous call, in logical pixels (+y down).
    ///
    /// The first call with a known pointer position only establishes the
    /// baseline and returns `(0, 0)`. While the pointer is outside the window
    /// the baseline is held.
    pub fn mouse_delta(&mut self) -> (f32, f32) {
        let Some((x, y)) = self.pointer_pos else {
            return (0.0, 0.0);
        };

        let (bx, by) = self.mouse_baseline.replace((x, y)).unwrap_or((x, y));
        (x - bx, y - by)
    }
}
