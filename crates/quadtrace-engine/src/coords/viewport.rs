/// Drawable size in physical pixels.
///
/// Uploaded to shaders every frame so fragment code can map `@builtin(position)`
/// to normalized screen coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height; 1.0 for a degenerate viewport.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_square_is_one() {
        assert_eq!(Viewport::new(1200.0, 1200.0).aspect_ratio(), 1.0);
    }

    #[test]
    fn aspect_ratio_widescreen() {
        assert_eq!(Viewport::new(1920.0, 1080.0).aspect_ratio(), 1920.0 / 1080.0);
    }

    #[test]
    fn zero_height_is_invalid() {
        let vp = Viewport::new(800.0, 0.0);
        assert!(!vp.is_valid());
        assert_eq!(vp.aspect_ratio(), 1.0);
    }
}
