use glam::Vec3;

/// Position, scale and orientation of an object or camera.
///
/// `rotation` is in degrees: `x` is yaw (positive turns right), `y` is pitch
/// (positive looks up), `z` is roll.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Default::default() }
    }

    /// Unit view direction derived from yaw and pitch.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.rotation.x.to_radians();
        let pitch = self.rotation.y.to_radians();
        Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            -pitch.cos() * yaw.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        -self.forward().cross(self.right()).normalize()
    }

    /// Adds yaw/pitch in degrees; pitch is clamped to `±max_pitch`.
    pub fn rotate(&mut self, yaw: f32, pitch: f32, max_pitch: f32) {
        self.rotation.x = (self.rotation.x + yaw) % 360.0;
        self.rotation.y = (self.rotation.y + pitch).clamp(-max_pitch, max_pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    // ── basis ─────────────────────────────────────────────────────────────

    #[test]
    fn identity_basis_looks_down_negative_z() {
        let t = Transform::default();
        assert!(approx(t.forward(), Vec3::NEG_Z));
        assert!(approx(t.right(), Vec3::X));
        assert!(approx(t.up(), Vec3::Y));
    }

    #[test]
    fn positive_yaw_turns_right() {
        let t = Transform { rotation: Vec3::new(90.0, 0.0, 0.0), ..Default::default() };
        assert!(approx(t.forward(), Vec3::X));
        assert!(approx(t.right(), Vec3::Z));
    }

    #[test]
    fn positive_pitch_looks_up() {
        let t = Transform { rotation: Vec3::new(0.0, 45.0, 0.0), ..Default::default() };
        assert!(t.forward().y > 0.0);
        assert!((t.forward().length() - 1.0).abs() < 1e-5);
        assert!(t.up().dot(t.forward()).abs() < 1e-5);
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_clamps_pitch() {
        let mut t = Transform::default();
        t.rotate(0.0, 200.0, 89.0);
        assert_eq!(t.rotation.y, 89.0);
        t.rotate(0.0, -500.0, 89.0);
        assert_eq!(t.rotation.y, -89.0);
    }

    #[test]
    fn rotate_wraps_yaw() {
        let mut t = Transform::default();
        t.rotate(370.0, 0.0, 89.0);
        assert!((t.rotation.x - 10.0).abs() < 1e-4);
    }
}
