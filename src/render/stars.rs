use super::helpers;
use super::targets::DEPTH_FORMAT;
use backdrop_core::uniforms::StarUniforms;
use glam::Vec3;
use wgpu::util::DeviceExt;

const STAR_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

// Two triangles per star quad
const QUAD_VERTICES: u32 = 6;

pub(crate) struct StarResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) star_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl StarResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..QUAD_VERTICES, 0..self.star_count);
    }
}

/// Additive: stars brighten whatever is behind them and never darken.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub(crate) fn create_star_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    stars: &[Vec3],
) -> StarResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(backdrop_core::STARS_WGSL.into()),
    });
    let (uniform_buffer, bgl, bind_group) = helpers::create_uniform_binding(
        device,
        "star_uniforms",
        std::mem::size_of::<StarUniforms>() as u64,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("stars_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &STAR_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(ADDITIVE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let positions: Vec<[f32; 3]> = stars.iter().map(|s| s.to_array()).collect();
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_positions"),
        contents: bytemuck::cast_slice(&positions),
        usage: wgpu::BufferUsages::VERTEX,
    });

    StarResources {
        pipeline,
        instance_buffer,
        star_count: stars.len() as u32,
        uniform_buffer,
        bind_group,
    }
}
