use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::{RenderCtx, RenderTarget, Shader};

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 3], // NDC
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [1.0, 1.0, 0.0] },
    QuadVertex { pos: [1.0, -1.0, 0.0] },
    QuadVertex { pos: [-1.0, -1.0, 0.0] },
    QuadVertex { pos: [-1.0, 1.0, 0.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// Full-screen quad drawn with a [`Shader`].
///
/// Buffers are created lazily on the first draw.
#[derive(Default)]
pub struct ScreenQuad {
    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
}

impl ScreenQuad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one render pass covering the target with `shader`.
    ///
    /// The target's current contents are loaded, so clear it beforehand.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, shader: &Shader) {
        self.ensure_buffers(ctx);

        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.begin_pass("quadtrace screen quad", wgpu::LoadOp::Load);

        rpass.set_pipeline(shader.pipeline());
        rpass.set_bind_group(0, shader.bind_group(), &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() && self.ibo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadtrace quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadtrace quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}
