use std::fs;

use thiserror::Error;

use crate::resources::{Resource, ResourceError, ResourcePaths};

use super::quad::QuadVertex;
use super::uniforms::FrameUniforms;

/// Entry point every vertex source must define.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Entry point every fragment source must define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to read shader source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("shader source {path} does not define `fn {entry}`")]
    MissingEntryPoint { path: String, entry: &'static str },

    #[error("shader {path} failed to compile: {message}")]
    Compile { path: String, message: String },

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// What a [`Shader`] needs besides its source files.
#[derive(Clone, Copy)]
pub struct ShaderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub format: wgpu::TextureFormat,
}

/// WGSL program drawn over the full-screen quad.
///
/// Built from a vertex source and a fragment source (or a single file holding
/// both stages). The program sees one [`FrameUniforms`] block at
/// `@group(0) @binding(0)` in both stages.
pub struct Shader {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniforms: wgpu::Buffer,
    paths: ResourcePaths,
}

impl Resource for Shader {
    type Context<'a> = ShaderCtx<'a>;
    type Error = ShaderError;

    fn load(ctx: ShaderCtx<'_>, paths: &ResourcePaths) -> Result<Self, ShaderError> {
        let vs_path = paths.first();
        let fs_path = paths.second().unwrap_or(vs_path);

        let vs_src = read_source(vs_path)?;
        require_entry_point(&vs_src, vs_path, VERTEX_ENTRY)?;

        let fs_src = if fs_path == vs_path { vs_src.clone() } else { read_source(fs_path)? };
        require_entry_point(&fs_src, fs_path, FRAGMENT_ENTRY)?;

        Self::build(ctx, vs_path, vs_src, fs_path, fs_src, paths.clone())
    }
}

impl Shader {
    fn build(
        ctx: ShaderCtx<'_>,
        vs_path: &str,
        vs_src: String,
        fs_path: &str,
        fs_src: String,
        paths: ResourcePaths,
    ) -> Result<Self, ShaderError> {
        let device = ctx.device;

        let vs_module = compile_module(device, vs_path, vs_src)?;
        let fs_module = if fs_path == vs_path {
            vs_module.clone()
        } else {
            compile_module(device, fs_path, fs_src)?
        };

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("quadtrace frame uniforms bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<FrameUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadtrace frame uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadtrace frame uniforms bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("quadtrace shader pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quadtrace shader pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });
        // Entry-point interface mismatches between the stages show up here.
        scope_result(pollster::block_on(scope.pop()), &format!("{vs_path} + {fs_path}"))?;

        Ok(Self {
            pipeline,
            bind_group,
            uniforms,
            paths,
        })
    }

    /// Uploads this frame's uniform values.
    pub fn set_uniforms(&self, queue: &wgpu::Queue, values: &FrameUniforms) {
        queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(values));
    }

    /// Paths the program was built from.
    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    pub(super) fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub(super) fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Builds a WGSL module, turning validation errors into [`ShaderError::Compile`].
fn compile_module(
    device: &wgpu::Device,
    path: &str,
    src: String,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(path),
        source: wgpu::ShaderSource::Wgsl(src.into()),
    });
    scope_result(pollster::block_on(scope.pop()), path)?;
    Ok(module)
}

fn scope_result(captured: Option<wgpu::Error>, path: &str) -> Result<(), ShaderError> {
    match captured {
        None => Ok(()),
        Some(err) => Err(ShaderError::Compile {
            path: path.to_owned(),
            message: err.to_string(),
        }),
    }
}

fn read_source(path: &str) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_owned(),
        source,
    })
}

fn require_entry_point(src: &str, path: &str, entry: &'static str) -> Result<(), ShaderError> {
    if defines_fn(src, entry) {
        Ok(())
    } else {
        Err(ShaderError::MissingEntryPoint {
            path: path.to_owned(),
            entry,
        })
    }
}

/// True if `src` declares `fn <name>(` outside of `//` comments.
fn defines_fn(src: &str, name: &str) -> bool {
    src.lines()
        .map(|line| line.split("//").next().unwrap_or(""))
        .any(|code| {
            code.match_indices(name).any(|(at, _)| {
                let before = code[..at].trim_end();
                let after = code[at + name.len()..].trim_start();
                let fn_keyword = before
                    .strip_suffix("fn")
                    .is_some_and(|rest| rest.is_empty() || rest.ends_with(char::is_whitespace));
                fn_keyword && before.len() < at && after.starts_with('(')
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_plain_entry_point() {
        let src = "@vertex\nfn vs_main(@location(0) p: vec3<f32>) -> @builtin(position) vec4<f32> {";
        assert!(defines_fn(src, VERTEX_ENTRY));
    }

    #[test]
    fn finds_entry_point_after_attribute_on_same_line() {
        assert!(defines_fn("@fragment fn fs_main() -> @location(0) vec4<f32> {}", FRAGMENT_ENTRY));
    }

    #[test]
    fn ignores_commented_out_entry_point() {
        assert!(!defines_fn("// fn fs_main() {}\nfn other() {}", FRAGMENT_ENTRY));
    }

    #[test]
    fn ignores_calls_and_longer_names() {
        assert!(!defines_fn("let c = fs_main();", FRAGMENT_ENTRY));
        assert!(!defines_fn("fn fs_main_helper() {}", FRAGMENT_ENTRY));
        assert!(!defines_fn("fn my_fs_main() {}", FRAGMENT_ENTRY));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_source("does/not/exist.wgsl").unwrap_err();
        assert!(matches!(err, ShaderError::Io { ref path, .. } if path == "does/not/exist.wgsl"));
        assert!(err.to_string().contains("does/not/exist.wgsl"));
    }

    #[test]
    fn empty_error_scope_is_ok() {
        assert!(scope_result(None, "a.wgsl").is_ok());
    }

    #[test]
    fn captured_validation_error_becomes_compile_error() {
        let captured = wgpu::Error::Validation {
            source: Box::new(std::io::Error::other("parse")),
            description: "expected `;`, found `}`".to_owned(),
        };
        let err = scope_result(Some(captured), "res/broken.wgsl").unwrap_err();

        assert!(matches!(
            err,
            ShaderError::Compile { ref path, ref message }
                if path == "res/broken.wgsl" && message.contains("expected `;`")
        ));
        assert!(err.to_string().contains("res/broken.wgsl"));
    }

    #[test]
    fn missing_entry_point_is_an_error() {
        let err = require_entry_point("fn vs_main() {}", "a.wgsl", FRAGMENT_ENTRY).unwrap_err();
        assert!(matches!(err, ShaderError::MissingEntryPoint { entry: "fs_main", .. }));
    }
}
