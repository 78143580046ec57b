use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::core::{GpuContext, WindowDimensions};
use crate::mesh::MeshKind;
use crate::overlay::{Overlay, OverlayStats};
use crate::scene::{campfire_scene, SceneObject, Shading, TextureKind};
use crate::texture::{SceneTexture, TextureImage};
use crate::transform::FrameTransforms;
use crate::types::{CameraUniform, ObjectUniform, Vertex};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const OBJECT_SHADER: &str = include_str!("shaders/object.wgsl");
const LIGHT_SHADER: &str = include_str!("shaders/light.wgsl");

struct GpuMesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

/// One scene object with its own uniform buffer
struct DrawCall {
    object: SceneObject,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Rasterizes the campfire scene with depth testing
pub struct SceneRenderer {
    gpu: GpuContext,
    depth_view: wgpu::TextureView,
    object_pipeline: wgpu::RenderPipeline,
    light_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
    textures: Vec<SceneTexture>,
    draws: Vec<DrawCall>,
    overlay: Option<Overlay>,
}

impl SceneRenderer {
    pub async fn new(window: Arc<Window>, assets: &Path, show_overlay: bool) -> Result<Self> {
        let gpu = GpuContext::new(window.clone()).await?;
        let device = gpu.device();
        let format = gpu.surface_format();

        let uniform_layout = Self::create_uniform_layout(device);
        let texture_layout = SceneTexture::bind_group_layout(device);

        let object_pipeline = Self::create_pipeline(
            device,
            "Object Pipeline",
            OBJECT_SHADER,
            &[&uniform_layout, &uniform_layout, &texture_layout],
            Vertex::desc(),
            format,
        );
        let light_pipeline = Self::create_pipeline(
            device,
            "Light Pipeline",
            LIGHT_SHADER,
            &[&uniform_layout],
            Vertex::position_desc(),
            format,
        );

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bind_group = Self::create_uniform_bind_group(
            device,
            &uniform_layout,
            &camera_buffer,
            "Camera Bind Group",
        );

        let meshes = MeshKind::ALL
            .iter()
            .map(|kind| {
                let data = kind.build();
                GpuMesh {
                    buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some(kind.label()),
                        contents: bytemuck::cast_slice(&data.vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
                    vertex_count: data.vertex_count(),
                }
            })
            .collect();

        log::info!("loading textures from {}", assets.display());
        let textures = TextureKind::ALL
            .iter()
            .map(|kind| {
                let image = TextureImage::load_or_fallback(assets, *kind);
                SceneTexture::upload(device, gpu.queue(), &texture_layout, &image, kind.file_name())
            })
            .collect();

        let draws: Vec<DrawCall> = campfire_scene()
            .into_iter()
            .map(|object| {
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(object.name),
                    size: std::mem::size_of::<ObjectUniform>() as wgpu::BufferAddress,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = Self::create_uniform_bind_group(
                    device,
                    &uniform_layout,
                    &uniform_buffer,
                    object.name,
                );
                DrawCall {
                    object,
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        let depth_view = Self::create_depth_view(device, gpu.dimensions());
        let overlay = show_overlay.then(|| Overlay::new(&window, device, format));

        log::info!("scene renderer initialized: {} draw calls", draws.len());

        Ok(Self {
            gpu,
            depth_view,
            object_pipeline,
            light_pipeline,
            camera_buffer,
            camera_bind_group,
            meshes,
            textures,
            draws,
            overlay,
        })
    }

    pub fn dimensions(&self) -> WindowDimensions {
        self.gpu.dimensions()
    }

    pub fn resize(&mut self, dimensions: WindowDimensions) {
        if self.gpu.resize(dimensions) {
            self.depth_view = Self::create_depth_view(self.gpu.device(), dimensions);
        }
    }

    /// Reconfigure after the surface was lost or became outdated
    pub fn reconfigure(&mut self) {
        self.gpu.reconfigure();
    }

    /// Returns true if the overlay consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        match &mut self.overlay {
            Some(overlay) => overlay.handle_event(window, event),
            None => false,
        }
    }

    pub fn render(
        &mut self,
        window: &Window,
        transforms: &FrameTransforms,
        stats: &OverlayStats,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let queue = self.gpu.queue();
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[transforms.camera_uniform()]),
        );
        for draw in &self.draws {
            queue.write_buffer(
                &draw.uniform_buffer,
                0,
                bytemuck::cast_slice(&[transforms.object_uniform(&draw.object)]),
            );
        }

        let output = self.gpu.surface().get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            for draw in &self.draws {
                let mesh = &self.meshes[draw.object.mesh.index()];

                match draw.object.shading {
                    Shading::Lit { texture, .. } => {
                        render_pass.set_pipeline(&self.object_pipeline);
                        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
                        render_pass.set_bind_group(1, &draw.bind_group, &[]);
                        render_pass.set_bind_group(
                            2,
                            &self.textures[texture.index()].bind_group,
                            &[],
                        );
                    }
                    Shading::Emissive { .. } => {
                        render_pass.set_pipeline(&self.light_pipeline);
                        render_pass.set_bind_group(0, &draw.bind_group, &[]);
                    }
                }

                render_pass.set_vertex_buffer(0, mesh.buffer.slice(..));
                render_pass.draw(0..mesh.vertex_count, 0..1);
            }
        }

        let mut command_buffers = Vec::new();
        if let Some(overlay) = &mut self.overlay {
            command_buffers = overlay.render(
                self.gpu.device(),
                self.gpu.queue(),
                &mut encoder,
                &view,
                window,
                self.gpu.dimensions(),
                stats,
            );
        }

        command_buffers.push(encoder.finish());
        self.gpu.queue().submit(command_buffers);
        output.present();
        Ok(())
    }

    fn create_uniform_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Uniform Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    fn create_uniform_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
        label: &str,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        label: &str,
        source: &str,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
        vertex_layout: wgpu::VertexBufferLayout<'static>,
        format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts,
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Planes and the open ring are seen from both sides
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    fn create_depth_view(device: &wgpu::Device, dimensions: WindowDimensions) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: dimensions.width.max(1),
                height: dimensions.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}
