/// Averages frame rate over fixed windows of wall time.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: f32,
    started_at: f32,
    frames: u32,
}

impl FpsCounter {
    /// `window` is the averaging period in seconds.
    pub fn new(window: f32) -> Self {
        Self { window, started_at: 0.0, frames: 0 }
    }

    /// Counts one frame at `elapsed` seconds; returns the rate when a window closes.
    pub fn frame(&mut self, elapsed: f32) -> Option<f32> {
        self.frames += 1;
        let span = elapsed - self.started_at;
        if span < self.window {
            return None;
        }

        let fps = self.frames as f32 / span;
        self.started_at = elapsed;
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let mut fps = FpsCounter::new(1.0);
        let mut reports = Vec::new();
        for i in 1..=120 {
            if let Some(rate) = fps.frame(i as f32 / 60.0) {
                reports.push(rate);
            }
        }
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| (r - 60.0).abs() < 0.5));
    }

    #[test]
    fn silent_inside_window() {
        let mut fps = FpsCounter::new(1.0);
        assert_eq!(fps.frame(0.1), None);
        assert_eq!(fps.frame(0.5), None);
    }
}
