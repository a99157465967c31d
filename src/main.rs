use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Fullscreen, Window},
};

use zoomlight::{
    capture::ScreenShot,
    controller::{input::winit_input, FrameContext, InputSnapshot, InputState},
    logging, utils,
    view::{render, GpuContext},
};

struct App {
    // Core GPU resources
    gpu: GpuContext,
    window: Arc<Window>,

    // Rendering state
    pipelines: render::PipelineResources,
    quad: utils::MeshBuffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
    spotlight_buffer: wgpu::Buffer,
    spotlight_bind_group: wgpu::BindGroup,

    // Frame state
    frame: FrameContext,
    input: InputState,
    last_snapshot: InputSnapshot,
    last_frame_time: Instant,
}

impl App {
    async fn new(window: Arc<Window>, pixels: &image::RgbaImage) -> Result<Self> {
        let gpu = GpuContext::new(window.clone()).await?;

        let camera_resources = render::create_camera_resources(&gpu.device);
        let texture_resources = render::create_screenshot_texture(&gpu.device, &gpu.queue, pixels);
        let spotlight_resources = render::create_spotlight_resources(&gpu.device);

        let pipelines = render::create_pipelines(
            &gpu.device,
            gpu.format,
            &camera_resources.bind_group_layout,
            &texture_resources.bind_group_layout,
            &spotlight_resources.bind_group_layout,
        );

        let quad = utils::create_screen_quad(pixels.width(), pixels.height()).upload(&gpu.device);

        Ok(Self {
            gpu,
            window,
            pipelines,
            quad,
            camera_buffer: camera_resources.camera_buffer,
            camera_bind_group: camera_resources.camera_bind_group,
            texture_bind_group: texture_resources.texture_bind_group,
            spotlight_buffer: spotlight_resources.spotlight_buffer,
            spotlight_bind_group: spotlight_resources.spotlight_bind_group,
            frame: FrameContext::new(),
            input: InputState::new(),
            last_snapshot: InputSnapshot::default(),
            last_frame_time: Instant::now(),
        })
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        if let Some(input_event) = winit_input::window_event_to_input(event) {
            self.input.process_event(&input_event);
            true
        } else {
            false
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gpu.resize(new_size.width, new_size.height);
    }

    fn update(&mut self, dt: f32) {
        let snapshot = self.input.snapshot(dt);
        self.frame.update(&snapshot);
        self.last_snapshot = snapshot;

        let view_proj = self
            .frame
            .camera
            .view_proj(self.gpu.config.width, self.gpu.config.height);
        let camera_uniform = render::CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
        };
        self.gpu
            .queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));
    }

    fn should_exit(&self) -> bool {
        self.frame.should_exit(&self.last_snapshot)
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let plan = render::plan_frame(
            &self.frame.spotlight,
            self.last_snapshot.cursor_pos,
            self.gpu.config.height as f32,
        );

        if let Some(params) = plan.spotlight {
            let uniform = render::SpotlightUniform {
                tint: render::SPOTLIGHT_TINT,
                cursor_pos: params.cursor_pos,
                radius_multiplier: params.radius_multiplier,
                _pad0: 0.0,
                resolution: [self.gpu.config.width as f32, self.gpu.config.height as f32],
                _pad1: [0.0; 2],
            };
            self.gpu
                .queue
                .write_buffer(&self.spotlight_buffer, 0, bytemuck::bytes_of(&uniform));
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(plan.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if plan.spotlight.is_some() {
                render_pass.set_pipeline(&self.pipelines.spotlight_pipeline);
            } else {
                render_pass.set_pipeline(&self.pipelines.plain_pipeline);
            }
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_bind_group(1, &self.texture_bind_group, &[]);
            render_pass.set_bind_group(2, &self.spotlight_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.quad.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.quad.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.quad.index_count, 0, 0..1);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn main() -> Result<()> {
    logging::init();

    // Capture before any window exists, so the overlay is not in its own shot.
    let screenshot = ScreenShot::take().map_err(|e| {
        tracing::error!("screen capture failed: {e:#}");
        e
    })?;
    let image = image::open(screenshot.path())
        .context("failed to load the captured screenshot")?
        .to_rgba8();
    tracing::info!("captured {}x{} screenshot", image.width(), image.height());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window_attributes = Window::default_attributes()
        .with_title("zoomlight")
        .with_fullscreen(Some(Fullscreen::Borderless(None)))
        .with_transparent(true);
    let window = Arc::new(
        event_loop
            .create_window(window_attributes)
            .context("failed to create window")?,
    );

    let mut app = pollster::block_on(App::new(window.clone(), &image))?;
    // Pixel data now lives in the texture
    drop(image);

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::Resized(physical_size) => {
                            app.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            let now = Instant::now();
                            let dt = (now - app.last_frame_time).as_secs_f32();
                            app.last_frame_time = now;

                            app.update(dt);
                            if app.should_exit() {
                                elwt.exit();
                                return;
                            }

                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => app.gpu.reconfigure(),
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                Err(e) => tracing::warn!("surface error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        })
        .context("event loop error")?;

    Ok(())
}
