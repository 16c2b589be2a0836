use scene_core::{EnvironmentMap, LiveTexture, SceneState, MSAA_SAMPLES};
use web_sys as web;

mod cube;
mod environment;
mod helpers;
mod targets;
mod texture;

use cube::{create_cube_pipeline, create_cube_resources, CubePipeline, CubeResources, CubeUniforms};
use environment::{upload_environment, EnvResources};
use targets::RenderTargets;
use texture::CanvasTexture;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    cube_pipeline: CubePipeline,
    env: EnvResources,
    // Set once the animation asset arrived and the cube was attached
    cube: Option<CubeResources>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        environment: &EnvironmentMap,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits; older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas so the page shows through around the cube
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLES);
        let cube_pipeline = create_cube_pipeline(&device, format, MSAA_SAMPLES);
        let env = upload_environment(&device, &queue, environment);
        log::info!(
            "[gpu] surface {}x{} {:?}, env {} mips",
            width,
            height,
            format,
            env.max_mip as u32 + 1
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            cube_pipeline,
            env,
            cube: None,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    /// Upload the attached cube's geometry and allocate its live texture.
    pub fn attach_cube(&mut self, state: &SceneState, live: &LiveTexture) -> anyhow::Result<()> {
        if self.cube.is_some() {
            anyhow::bail!("cube already uploaded");
        }
        let mesh = state
            .scene
            .mesh()
            .ok_or_else(|| anyhow::anyhow!("no mesh in scene"))?;
        let texture = CanvasTexture::new(&self.device, live);
        self.cube = Some(create_cube_resources(
            &self.device,
            &self.cube_pipeline,
            &self.env,
            mesh,
            texture,
        ));
        Ok(())
    }

    /// Drop the cube's GPU resources, e.g. when its player failed to start.
    pub fn detach_cube(&mut self) {
        self.cube = None;
    }

    /// Re-upload the player canvas if the player drew since the last frame.
    pub fn refresh_live_texture(&self, live: &LiveTexture, canvas: &web::HtmlCanvasElement) {
        if let Some(cube) = &self.cube {
            if live.take_dirty() {
                cube.texture.refresh(&self.queue, canvas);
            }
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, state: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        if let (Some(cube), Some(mesh)) = (&self.cube, state.scene.mesh()) {
            let u = CubeUniforms::new(&state.camera, mesh, self.env.max_mip);
            self.queue
                .write_buffer(&cube.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(cube) = &self.cube {
                if state.scene.mesh().is_some() {
                    rpass.set_pipeline(&self.cube_pipeline.pipeline);
                    rpass.set_bind_group(0, &cube.bind_group, &[]);
                    rpass.set_vertex_buffer(0, cube.vertex_buffer.slice(..));
                    rpass.set_index_buffer(cube.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..cube.index_count, 0, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
