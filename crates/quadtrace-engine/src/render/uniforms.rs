use bytemuck::{Pod, Zeroable};

use crate::coords::{Transform, Viewport};

/// Per-frame values pushed to the active shader.
///
/// Layout matches this WGSL block (vec3 fields padded to 16 bytes):
///
/// ```wgsl
/// struct FrameUniforms {
///     cam_pos: vec3<f32>,
///     aspect_ratio: f32,
///     cam_forward: vec3<f32>,
///     time: f32,
///     cam_right: vec3<f32>,
///     cam_up: vec3<f32>,
///     viewport: vec2<f32>,
/// }
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub cam_pos: [f32; 3],
    pub aspect_ratio: f32,
    pub cam_forward: [f32; 3],
    pub time: f32,
    pub cam_right: [f32; 3],
    pub _pad0: f32,
    pub cam_up: [f32; 3],
    pub _pad1: f32,
    pub viewport: [f32; 2],
    pub _pad2: [f32; 2],
}

impl FrameUniforms {
    /// Builds the uniform block for `camera` rendering into `viewport`.
    pub fn new(camera: &Transform, viewport: Viewport, time: f32) -> Self {
        Self {
            cam_pos: camera.position.to_array(),
            aspect_ratio: viewport.aspect_ratio(),
            cam_forward: camera.forward().to_array(),
            time,
            cam_right: camera.right().to_array(),
            _pad0: 0.0,
            cam_up: camera.up().to_array(),
            _pad1: 0.0,
            viewport: [viewport.width, viewport.height],
            _pad2: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn size_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 80);
    }

    #[test]
    fn carries_camera_and_viewport() {
        let cam = Transform::from_position(Vec3::new(0.0, 1.0, 4.0));
        let u = FrameUniforms::new(&cam, Viewport::new(1200.0, 600.0), 2.5);

        assert_eq!(u.cam_pos, [0.0, 1.0, 4.0]);
        assert_eq!(u.viewport, [1200.0, 600.0]);
        assert_eq!(u.aspect_ratio, 2.0);
        assert_eq!(u.time, 2.5);
        assert_eq!(u.cam_forward, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn casts_to_bytes() {
        let u = FrameUniforms::default();
        assert_eq!(bytemuck::bytes_of(&u).len(), 80);
    }
}
