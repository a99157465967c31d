use glam::Vec2;
use wgpu::util::DeviceExt;

use crate::model::Spotlight;
use crate::utils::Vertex;

/// Tint over everything outside the spotlight, and the backdrop behind the
/// screenshot while the spotlight is on.
pub const SPOTLIGHT_TINT: [f32; 4] = [0.0, 0.0, 0.0, 190.0 / 255.0];

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotlightUniform {
    pub tint: [f32; 4],
    pub cursor_pos: [f32; 2],
    pub radius_multiplier: f32,
    pub _pad0: f32,
    pub resolution: [f32; 2],
    pub _pad1: [f32; 2],
}

pub struct CameraResources {
    pub camera_buffer: wgpu::Buffer,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub camera_bind_group: wgpu::BindGroup,
}

pub struct TextureResources {
    pub texture: wgpu::Texture,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub texture_bind_group: wgpu::BindGroup,
}

pub struct SpotlightResources {
    pub spotlight_buffer: wgpu::Buffer,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub spotlight_bind_group: wgpu::BindGroup,
}

pub struct PipelineResources {
    pub plain_pipeline: wgpu::RenderPipeline,
    pub spotlight_pipeline: wgpu::RenderPipeline,
}

/// Which spotlight values to upload this frame, already in the shader's
/// bottom-up coordinate convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightParams {
    pub cursor_pos: [f32; 2],
    pub radius_multiplier: f32,
}

/// Per-frame draw decisions, computed without touching the GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    pub clear_color: wgpu::Color,
    pub spotlight: Option<SpotlightParams>,
}

/// Decide clear color, pipeline, and uniform values for one frame.
pub fn plan_frame(spotlight: &Spotlight, cursor_pos: Vec2, surface_height: f32) -> FramePlan {
    if spotlight.enabled {
        FramePlan {
            clear_color: wgpu::Color {
                r: SPOTLIGHT_TINT[0] as f64,
                g: SPOTLIGHT_TINT[1] as f64,
                b: SPOTLIGHT_TINT[2] as f64,
                a: SPOTLIGHT_TINT[3] as f64,
            },
            spotlight: Some(SpotlightParams {
                // The fragment shader measures distances bottom-up.
                cursor_pos: [cursor_pos.x, surface_height - cursor_pos.y],
                radius_multiplier: spotlight.radius_multiplier,
            }),
        }
    } else {
        FramePlan {
            clear_color: wgpu::Color::TRANSPARENT,
            spotlight: None,
        }
    }
}

pub fn create_camera_resources(device: &wgpu::Device) -> CameraResources {
    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("camera_buffer"),
        size: 64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("camera_bind_group_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("camera_bind_group"),
        layout: &bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: camera_buffer.as_entire_binding(),
        }],
    });

    CameraResources {
        camera_buffer,
        bind_group_layout,
        camera_bind_group,
    }
}

/// Upload the captured screenshot and wrap it in a bind group.
pub fn create_screenshot_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    pixels: &image::RgbaImage,
) -> TextureResources {
    let (width, height) = pixels.dimensions();
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("screenshot_texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels.as_raw(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    // Nearest keeps pixels crisp when zoomed in.
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("screenshot_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("screenshot_bind_group_layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let texture_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("screenshot_bind_group"),
        layout: &bind_group_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    });

    TextureResources {
        texture,
        bind_group_layout,
        texture_bind_group,
    }
}

pub fn create_spotlight_resources(device: &wgpu::Device) -> SpotlightResources {
    let spotlight_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("spotlight_buffer"),
        size: 48,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("spotlight_bind_group_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let spotlight_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("spotlight_bind_group"),
        layout: &bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: spotlight_buffer.as_entire_binding(),
        }],
    });

    SpotlightResources {
        spotlight_buffer,
        bind_group_layout,
        spotlight_bind_group,
    }
}

/// Build the plain and spotlight pipelines from the shared shader module.
pub fn create_pipelines(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    camera_layout: &wgpu::BindGroupLayout,
    texture_layout: &wgpu::BindGroupLayout,
    spotlight_layout: &wgpu::BindGroupLayout,
) -> PipelineResources {
    let shader_src = include_str!("shaders/spotlight.wgsl");
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("spotlight_shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pipeline_layout"),
        bind_group_layouts: &[camera_layout, texture_layout, spotlight_layout],
        push_constant_ranges: &[],
    });

    let build = |label: &str, fs_entry: &str| {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(fs_entry),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
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
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    };

    PipelineResources {
        plain_pipeline: build("plain_pipeline", "fs_plain"),
        spotlight_pipeline: build("spotlight_pipeline", "fs_spotlight"),
    }
}
