/// How the window's GPU context is created.
///
/// The renderer needs no optional features: one uniform buffer and one
/// render pipeline run on downlevel limits.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may use. `WGPU_BACKEND` overrides the default.
    pub backends: wgpu::Backends,

    /// Adapter choice. `WGPU_POWER_PREF` overrides the default.
    pub power_preference: wgpu::PowerPreference,

    /// Pick an sRGB surface so the fragment stage can output linear colour.
    pub prefer_srgb: bool,

    /// FIFO is vsync and always supported.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_limits: wgpu::Limits,

    /// Hint only; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::from_env().unwrap_or(wgpu::Backends::all()),
            power_preference: wgpu::PowerPreference::from_env()
                .unwrap_or(wgpu::PowerPreference::HighPerformance),
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
