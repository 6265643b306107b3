use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Input transitions collected between two redraws.
///
/// [`InputState`](super::InputState) answers "is it held?"; this answers
/// "did it change this frame?", which one-shot bindings need. The runtime
/// clears it after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    events: Vec<InputEvent>,
    pressed: HashSet<Key>,
    released: HashSet<Key>,
}

impl InputFrame {
    /// Events in arrival order.
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Key went down this frame; auto-repeat does not count.
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn was_released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.pressed.clear();
        self.released.clear();
    }

    pub(super) fn record_press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub(super) fn record_release(&mut self, key: Key) {
        self.released.insert(key);
    }

    pub(super) fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_forgets_transitions() {
        let mut frame = InputFrame::default();
        frame.record_press(Key::R);
        frame.record_release(Key::W);
        frame.push_event(InputEvent::PointerLeft);

        assert!(frame.was_pressed(Key::R));
        assert!(frame.was_released(Key::W));
        assert!(!frame.is_empty());

        frame.clear();
        assert!(!frame.was_pressed(Key::R));
        assert!(!frame.was_released(Key::W));
        assert!(frame.is_empty());
    }
}
