use anyhow::{Context, Result};
use glam::Vec3;

use quadtrace_engine::coords::Transform;
use quadtrace_engine::core::{App, AppControl, FrameCtx};
use quadtrace_engine::device::Gpu;
use quadtrace_engine::input::Key;
use quadtrace_engine::render::{FrameUniforms, ScreenQuad, Shader, ShaderCtx, ShaderError};
use quadtrace_engine::resources::ResourceLoader;

use crate::camera::CameraController;
use crate::config::ViewerConfig;
use crate::fps::FpsCounter;

const CLEAR: wgpu::Color = wgpu::Color { r: 0.2, g: 0.3, b: 0.3, a: 1.0 };

/// The application: one raytracing shader, one quad, one camera.
pub struct Viewer {
    config: ViewerConfig,
    loader: ResourceLoader,
    quad: ScreenQuad,
    camera: Transform,
    controller: CameraController,
    fps: FpsCounter,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let loader = ResourceLoader::new(config.resource_root.clone());
        Self {
            config,
            loader,
            quad: ScreenQuad::new(),
            camera: Transform::from_position(Vec3::new(0.0, 1.0, 4.0)),
            controller: CameraController::default(),
            fps: FpsCounter::default(),
        }
    }

    fn load_shader(&mut self, gpu: &Gpu<'_>) -> Result<(), ShaderError> {
        let ctx = ShaderCtx {
            device: gpu.device(),
            format: gpu.surface_format(),
        };
        self.loader.load::<Shader>(
            &self.config.shader_key,
            ctx,
            (self.config.vertex_path.as_str(), self.config.fragment_path.as_str()),
        )?;
        Ok(())
    }
}

impl App for Viewer {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        self.load_shader(gpu).with_context(|| {
            format!(
                "failed to load shader `{}` from {:?}",
                self.config.shader_key, self.config.resource_root
            )
        })
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.is_pressed(Key::Escape) {
            ctx.runtime.exit();
        }

        self.controller.update(&mut self.camera, ctx.input, ctx.time.dt);

        if ctx.input_frame.was_pressed(Key::R) {
            // The previous program stays in place if the new one fails to load.
            match self.load_shader(ctx.gpu) {
                Ok(()) => {
                    let paths = self.loader.get::<Shader>(&self.config.shader_key).paths();
                    log::info!("shader `{}` reloaded from {paths:?}", self.config.shader_key);
                }
                Err(e) => log::error!("shader reload failed, keeping previous program: {e}"),
            }
        }

        let shader = self.loader.get::<Shader>(&self.config.shader_key);
        let uniforms = FrameUniforms::new(&self.camera, ctx.gpu.viewport(), ctx.time.elapsed);
        shader.set_uniforms(ctx.gpu.queue(), &uniforms);

        if let Some(rate) = self.fps.frame(ctx.time.elapsed) {
            ctx.window.set_title(&format!("{} | {rate:.0} fps", self.config.title));
            log::debug!("{rate:.1} fps, camera at {}", self.camera.position);
        }

        let quad = &mut self.quad;
        ctx.render(CLEAR, |rctx, target| quad.draw(rctx, target, shader))
    }
}
