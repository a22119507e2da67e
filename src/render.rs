use backdrop_core::uniforms::{SphereUniforms, StarUniforms};
use backdrop_core::{BufferSize, Camera, FrameState, InitError, Palette, Scene, StarStyle};
use web_sys as web;

mod helpers;
mod sphere;
mod stars;
mod targets;

use sphere::{create_sphere_resources, SphereResources};
use stars::{create_star_resources, StarResources};
use targets::RenderTargets;

/// WebGPU renderer for the sphere and starfield.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    sphere: SphereResources,
    stars: StarResources,

    camera: Camera,
    palette: Palette,
    star_style: StarStyle,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl GpuState {
    /// Bring up the device and upload `scene`. Every failure maps onto an
    /// [`InitError`] so the caller can switch to the 2D fallback.
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> Result<Self, InitError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| InitError::Surface(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(InitError::Adapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| InitError::Device(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats)
            .ok_or_else(|| InitError::Surface("no supported surface format".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: crate::constants::MAX_FRAME_LATENCY,
        };
        surface.configure(&device, &config);

        // Shader and pipeline problems surface here, not as a missing backend
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let sphere = create_sphere_resources(&device, format, &scene.sphere);
        let stars = create_star_resources(&device, format, &scene.stars);
        if let Some(err) = device.pop_error_scope().await {
            return Err(InitError::ShaderCompile(err.to_string()));
        }

        let targets = RenderTargets::new(&device, width, height);
        let clear = scene.palette.clear;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            sphere,
            stars,
            camera: scene.camera.clone(),
            palette: scene.palette,
            star_style: scene.star_style,
            clear_color: wgpu::Color {
                r: clear.x as f64,
                g: clear.y as f64,
                b: clear.z as f64,
                a: 1.0,
            },
            width,
            height,
        })
    }

    /// Reconfigure for a new backing-store size and CSS aspect ratio.
    pub fn resize(&mut self, buffer: BufferSize, aspect: f32) {
        self.camera.set_aspect(aspect);
        if buffer.is_empty() {
            return;
        }
        if buffer.width != self.width || buffer.height != self.height {
            self.width = buffer.width;
            self.height = buffer.height;
            self.config.width = buffer.width;
            self.config.height = buffer.height;
            self.surface.configure(&self.device, &self.config);
            self.targets
                .recreate(&self.device, buffer.width, buffer.height);
        }
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    pub fn render(&mut self, frame: &FrameState) -> Result<(), wgpu::SurfaceError> {
        let view_m = self.camera.view_matrix();
        let proj_m = self.camera.projection_matrix();
        let res = self.resolution();

        let sphere_u = SphereUniforms::new(
            view_m,
            proj_m,
            frame.sphere.matrix(),
            self.palette.accent,
            self.palette.accent2,
            frame.mouse,
            res,
            frame.time,
            frame.motion,
        );
        let star_u = StarUniforms::new(
            view_m,
            proj_m,
            frame.stars.matrix(),
            self.star_style.color,
            self.star_style.opacity,
            res,
            self.star_style.size,
        );
        self.queue.write_buffer(
            &self.sphere.uniform_buffer,
            0,
            bytemuck::bytes_of(&sphere_u),
        );
        self.queue
            .write_buffer(&self.stars.uniform_buffer, 0, bytemuck::bytes_of(&star_u));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque sphere first so the stars depth-test against it
            rpass.set_pipeline(&self.sphere.pipeline);
            rpass.set_bind_group(0, &self.sphere.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
            rpass.draw(0..self.sphere.vertex_count, 0..1);

            self.stars.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
