use glam::Vec3;

use quadtrace_engine::coords::Transform;
use quadtrace_engine::input::{InputState, Key};

/// Keyboard/mouse fly camera.
///
/// Movement is along world axes; the mouse only changes where the camera looks.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// Units per second.
    pub speed: f32,
    /// Units per second while Shift is held.
    pub fast_speed: f32,
    /// Degrees per logical pixel of pointer movement.
    pub mouse_sensitivity: f32,
    pub max_pitch: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            speed: 2.0,
            fast_speed: 5.0,
            mouse_sensitivity: 0.1,
            max_pitch: 89.0,
        }
    }
}

impl CameraController {
    /// Applies one frame of input to `camera`.
    pub fn update(&self, camera: &mut Transform, input: &mut InputState, dt: f32) {
        let speed = if input.is_pressed(Key::Shift) { self.fast_speed } else { self.speed };
        let step = speed * dt;

        let bindings = [
            (Key::W, Vec3::NEG_Z),
            (Key::S, Vec3::Z),
            (Key::A, Vec3::NEG_X),
            (Key::D, Vec3::X),
            (Key::Space, Vec3::Y),
            (Key::Control, Vec3::NEG_Y),
        ];
        for (key, dir) in bindings {
            if input.is_pressed(key) {
                camera.position += dir * step;
            }
        }

        // Screen +y is down; looking up needs positive pitch.
        let (dx, dy) = input.mouse_delta();
        camera.rotate(
            dx * self.mouse_sensitivity,
            -dy * self.mouse_sensitivity,
            self.max_pitch,
        );
    }
}
