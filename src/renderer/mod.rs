//! Draws the chess set
//!
//! Each mesh is uploaded once. Every placement gets its own transform uniform
//! and reuses the vertex and index buffers of its mesh, so a rook drawn four
//! times still occupies one pair of buffers.

mod shaders;

use crate::backend::{BackendError, BackendResult, GpuContext, DEPTH_FORMAT};
use crate::mesh::MeshData;
use crate::pieces::{MeshKind, PieceSet};
use crate::resources::{MaterialKind, MaterialTextures, TextureData};
use crate::scene::{CameraUniformData, LightsUniform, Placement, Transform, POINT_LIGHT_COUNT};
use bytemuck::{Pod, Zeroable};
use std::collections::HashMap;
use wgpu::util::DeviceExt;

pub use shaders::{LIGHT_CUBE_SHADER, LIT_SHADER};

/// Background colour
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

/// Scale of the markers drawn at the point lights
pub const LIGHT_CUBE_SCALE: f32 = 0.2;

/// Bytes per vertex: position, normal, uv
pub const VERTEX_STRIDE: u64 = 32;

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

/// Uniform data written once per frame
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameUniforms {
    pub camera: CameraUniformData,
    pub lights: LightsUniform,
}

/// GPU resources for a mesh
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} vertices", mesh.label)),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} indices", mesh.label)),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count() as u32,
        }
    }
}

/// Transform uniform and its bind group
struct GpuObject {
    transform_buffer: wgpu::Buffer,
    transform_bind_group: wgpu::BindGroup,
}

impl GpuObject {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        transform: &Transform,
        label: &str,
    ) -> Self {
        let transform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&transform.uniform_data()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.as_entire_binding(),
            }],
        });

        Self {
            transform_buffer,
            transform_bind_group,
        }
    }
}

struct DrawItem {
    mesh: MeshKind,
    material: MaterialKind,
    object: GpuObject,
}

pub struct Renderer {
    lit_pipeline: wgpu::RenderPipeline,
    light_cube_pipeline: wgpu::RenderPipeline,

    camera_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,

    meshes: HashMap<MeshKind, GpuMesh>,
    materials: HashMap<MaterialKind, wgpu::BindGroup>,
    draw_items: Vec<DrawItem>,
    light_cubes: Vec<GpuObject>,
}

impl Renderer {
    pub fn new(
        gpu: &GpuContext,
        pieces: &PieceSet,
        placements: &[Placement],
        textures: &[MaterialTextures],
    ) -> BackendResult<Self> {
        let device = &gpu.device;

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Layout"),
            entries: &[
                uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                uniform_layout_entry(1, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Layout"),
            entries: &[uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Layout"),
            entries: &[
                texture_layout_entry(0),
                texture_layout_entry(1),
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniformData>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lights_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Lights Buffer"),
            size: std::mem::size_of::<LightsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });

        let meshes: HashMap<MeshKind, GpuMesh> = pieces
            .iter()
            .map(|(kind, mesh)| (kind, GpuMesh::upload(device, mesh)))
            .collect();

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Marble Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let materials: HashMap<MaterialKind, wgpu::BindGroup> = textures
            .iter()
            .map(|material| {
                let diffuse = upload_texture(gpu, &material.diffuse);
                let specular = upload_texture(gpu, &material.specular);
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("{:?} Material", material.kind)),
                    layout: &material_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(&diffuse),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::TextureView(&specular),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::Sampler(&sampler),
                        },
                    ],
                });
                (material.kind, bind_group)
            })
            .collect();

        if let Some(missing) = placements
            .iter()
            .find(|p| !materials.contains_key(&p.material))
        {
            return Err(BackendError::InitializationFailed(format!(
                "no textures supplied for the {:?} material",
                missing.material
            )));
        }

        let draw_items = placements
            .iter()
            .enumerate()
            .map(|(i, placement)| DrawItem {
                mesh: placement.mesh,
                material: placement.material,
                object: GpuObject::new(
                    device,
                    &object_layout,
                    &placement.transform,
                    &format!("{} #{}", placement.mesh.name(), i),
                ),
            })
            .collect();

        // positions are written every frame from the light uniform
        let light_cubes = (0..POINT_LIGHT_COUNT)
            .map(|i| {
                GpuObject::new(
                    device,
                    &object_layout,
                    &Transform::default().with_uniform_scale(LIGHT_CUBE_SCALE),
                    &format!("light cube #{}", i),
                )
            })
            .collect();

        let lit_pipeline = create_pipeline(
            gpu,
            "Lit Pipeline",
            LIT_SHADER,
            &[&frame_layout, &object_layout, &material_layout],
        );
        let light_cube_pipeline = create_pipeline(
            gpu,
            "Light Cube Pipeline",
            LIGHT_CUBE_SHADER,
            &[&frame_layout, &object_layout],
        );

        log::info!(
            "Renderer ready: {} meshes, {} placements, {} materials",
            meshes.len(),
            placements.len(),
            textures.len()
        );

        Ok(Self {
            lit_pipeline,
            light_cube_pipeline,
            camera_buffer,
            lights_buffer,
            frame_bind_group,
            meshes,
            materials,
            draw_items,
            light_cubes,
        })
    }

    pub fn placement_count(&self) -> usize {
        self.draw_items.len()
    }

    /// Draw one frame. A lost or outdated surface is reconfigured and the
    /// frame skipped.
    pub fn render(&mut self, gpu: &mut GpuContext, uniforms: &FrameUniforms) -> BackendResult<()> {
        let frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(BackendError::SurfaceLost) => {
                log::debug!("Surface lost, reconfiguring");
                gpu.reconfigure();
                return Ok(());
            }
            Err(BackendError::Timeout) => {
                log::warn!("Timed out waiting for the next frame");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        gpu.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniforms.camera));
        gpu.queue
            .write_buffer(&self.lights_buffer, 0, bytemuck::bytes_of(&uniforms.lights));
        for (cube, light) in self.light_cubes.iter().zip(uniforms.lights.points.iter()) {
            let transform = Transform::from_position(light.position.truncate())
                .with_uniform_scale(LIGHT_CUBE_SCALE);
            gpu.queue.write_buffer(
                &cube.transform_buffer,
                0,
                bytemuck::bytes_of(&transform.uniform_data()),
            );
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.lit_pipeline);
            pass.set_bind_group(0, &self.frame_bind_group, &[]);
            for item in &self.draw_items {
                let (Some(mesh), Some(material)) =
                    (self.meshes.get(&item.mesh), self.materials.get(&item.material))
                else {
                    continue;
                };
                pass.set_bind_group(1, &item.object.transform_bind_group, &[]);
                pass.set_bind_group(2, material, &[]);
                draw_mesh(&mut pass, mesh);
            }

            if let Some(cube_mesh) = self.meshes.get(&MeshKind::LightCube) {
                pass.set_pipeline(&self.light_cube_pipeline);
                pass.set_bind_group(0, &self.frame_bind_group, &[]);
                for cube in &self.light_cubes {
                    pass.set_bind_group(1, &cube.transform_bind_group, &[]);
                    draw_mesh(&mut pass, cube_mesh);
                }
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn draw_mesh<'a>(pass: &mut wgpu::RenderPass<'a>, mesh: &'a GpuMesh) {
    if mesh.index_count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
    pass.draw_indexed(0..mesh.index_count, 0, 0..1);
}

fn uniform_layout_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

/// Create an sRGB texture with every mip level of `data` and return its view
fn upload_texture(gpu: &GpuContext, data: &TextureData) -> wgpu::TextureView {
    let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
        label: Some(&data.name),
        size: wgpu::Extent3d {
            width: data.width(),
            height: data.height(),
            depth_or_array_layers: 1,
        },
        mip_level_count: data.mip_level_count(),
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (level, mip) in data.mips.iter().enumerate() {
        gpu.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: level as u32,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &mip.data,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(mip.width * 4),
                rows_per_image: Some(mip.height),
            },
            wgpu::Extent3d {
                width: mip.width,
                height: mip.height,
                depth_or_array_layers: 1,
            },
        );
    }

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_pipeline(
    gpu: &GpuContext,
    label: &str,
    source: &str,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let device = &gpu.device;
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
            entry_point: "vs_main",
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: VERTEX_STRIDE,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: gpu.surface_format(),
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // lathed windings are not consistent
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
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::FLOATS_PER_POINT;

    #[test]
    fn test_vertex_layout_matches_points() {
        assert_eq!(VERTEX_STRIDE as usize, FLOATS_PER_POINT * std::mem::size_of::<f32>());
        let offsets: Vec<u64> = VERTEX_ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }

    #[test]
    fn test_frame_uniform_size() {
        assert_eq!(
            std::mem::size_of::<FrameUniforms>(),
            std::mem::size_of::<CameraUniformData>() + std::mem::size_of::<LightsUniform>()
        );
    }

    #[test]
    fn test_shader_entry_points() {
        for source in [LIT_SHADER, LIGHT_CUBE_SHADER] {
            assert!(source.contains("fn vs_main"));
            assert!(source.contains("fn fs_main"));
        }
    }
}
