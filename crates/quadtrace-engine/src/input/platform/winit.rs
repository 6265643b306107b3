use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::Window;

use crate::input::{InputEvent, InputState, Key, KeyAction, KeyPress, Modifiers, PointerMoveEvent};

/// Converts one winit window event into an [`InputEvent`].
///
/// Key events are stamped with the modifiers currently held in `state`.
/// Events the input layer does not track yield `None`.
pub fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            Some(InputEvent::ModifiersChanged(map_modifiers(m.state())))
        }

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = pointer_position(window, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let action = match (event.state, event.repeat) {
                (ElementState::Pressed, false) => KeyAction::Pressed,
                (ElementState::Pressed, true) => KeyAction::Repeat,
                (ElementState::Released, _) => KeyAction::Released,
            };

            let (key, code) = map_key(event.physical_key);

            Some(InputEvent::Key(KeyPress {
                key,
                code,
                action,
                modifiers: state.modifiers,
            }))
        }

        _ => None,
    }
}

fn pointer_position(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

const KEY_TABLE: &[(KeyCode, Key)] = &[
    (KeyCode::Escape, Key::Escape),
    (KeyCode::Enter, Key::Enter),
    (KeyCode::Space, Key::Space),
    (KeyCode::ArrowUp, Key::ArrowUp),
    (KeyCode::ArrowDown, Key::ArrowDown),
    (KeyCode::ArrowLeft, Key::ArrowLeft),
    (KeyCode::ArrowRight, Key::ArrowRight),
    (KeyCode::ShiftLeft, Key::Shift),
    (KeyCode::ShiftRight, Key::Shift),
    (KeyCode::ControlLeft, Key::Control),
    (KeyCode::ControlRight, Key::Control),
    (KeyCode::AltLeft, Key::Alt),
    (KeyCode::AltRight, Key::Alt),
    (KeyCode::SuperLeft, Key::Meta),
    (KeyCode::SuperRight, Key::Meta),
    (KeyCode::KeyA, Key::A),
    (KeyCode::KeyB, Key::B),
    (KeyCode::KeyC, Key::C),
    (KeyCode::KeyD, Key::D),
    (KeyCode::KeyE, Key::E),
    (KeyCode::KeyF, Key::F),
    (KeyCode::KeyG, Key::G),
    (KeyCode::KeyH, Key::H),
    (KeyCode::KeyI, Key::I),
    (KeyCode::KeyJ, Key::J),
    (KeyCode::KeyK, Key::K),
    (KeyCode::KeyL, Key::L),
    (KeyCode::KeyM, Key::M),
    (KeyCode::KeyN, Key::N),
    (KeyCode::KeyO, Key::O),
    (KeyCode::KeyP, Key::P),
    (KeyCode::KeyQ, Key::Q),
    (KeyCode::KeyR, Key::R),
    (KeyCode::KeyS, Key::S),
    (KeyCode::KeyT, Key::T),
    (KeyCode::KeyU, Key::U),
    (KeyCode::KeyV, Key::V),
    (KeyCode::KeyW, Key::W),
    (KeyCode::KeyX, Key::X),
    (KeyCode::KeyY, Key::Y),
    (KeyCode::KeyZ, Key::Z),
];

/// Maps a physical key to `(Key, platform code)`.
fn map_key(pk: PhysicalKey) -> (Key, u32) {
    let PhysicalKey::Code(code) = pk else {
        // Native codes have no portable numeric form.
        return (Key::Other(0), 0);
    };

    let raw = code as u32;
    let key = KEY_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(Key::Other(raw), |&(_, k)| k);
    (key, raw)
}
