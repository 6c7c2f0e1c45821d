//! Gravity Simulation
//!
//! Real-time N-body gravity. Bodies are stepped at a fixed rate and drawn
//! each frame as tessellated circles in a single indexed draw call.
//!
//! Controls: Space pauses, W toggles wireframe, Escape quits.

use gravity_renderer::{
    BatchRenderer, Color, FillMode, GeometryBatch, GpuError, SurfaceFrame, Viewport,
    CIRCLE_SEGMENTS,
};
use gravity_simulation::{Clock, MonotonicClock, Scenario, Simulation, Ticker};
use std::error::Error;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Gravity Simulation";
const WINDOW_SIZE: u32 = 900;

/// Surface, device and queue for one window
struct GpuContext {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl GpuContext {
    async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("✓ Using GPU: {}", adapter.get_info().name);

        // Wireframe needs line rasterization; take it when the adapter has it
        let optional_features = adapter.features() & FillMode::Wireframe.required_features();

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: optional_features,
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        // Colors are plain 0-255 channel values, so prefer a non-sRGB target
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(GpuError::UnsupportedSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }
}

/// Logs frames drawn over each second of wall-clock time
struct FrameCounter {
    frames: u32,
    next_report: f64,
    last_frame: f64,
}

impl FrameCounter {
    fn new(now: f64) -> Self {
        Self {
            frames: 0,
            next_report: now + 1.0,
            last_frame: now,
        }
    }

    fn frame(&mut self, now: f64) {
        let delta = now - self.last_frame;
        self.last_frame = now;

        if now >= self.next_report {
            log::info!("FPS: {} (dt={:.6})", self.frames, delta);
            self.next_report = now + 1.0;
            self.frames = 0;
        }

        self.frames += 1;
    }
}

struct GpuState {
    gpu: GpuContext,
    renderer: BatchRenderer,
    batch: GeometryBatch,

    simulation: Simulation,
    ticker: Ticker,
    clock: MonotonicClock,

    frame_counter: FrameCounter,
    paused: bool,
}

impl GpuState {
    async fn new(window: Arc<Window>, scenario: Scenario) -> Result<Self, Box<dyn Error>> {
        let simulation = Simulation::new(&scenario)?;
        log::info!("Tick rate: {}", scenario.params.steps_per_second);
        for (index, body) in simulation.snapshots().enumerate() {
            log::debug!(
                "Body {}: radius {} color #{:06X}",
                index,
                body.radius,
                Color::from(body.color).to_packed()
            );
        }

        let gpu = GpuContext::new(window).await?;
        let renderer = BatchRenderer::new(&gpu.device, gpu.config.format);
        log::info!("✓ Renderer initialized");
        log::info!("Window size: {}x{}", gpu.config.width, gpu.config.height);

        let batch = GeometryBatch::new(Viewport::from_physical(gpu.config.width, gpu.config.height));

        let clock = MonotonicClock::new();
        let now = clock.now();
        let ticker = Ticker::new(scenario.params.steps_per_second, now)?;

        Ok(Self {
            gpu,
            renderer,
            batch,
            simulation,
            ticker,
            clock,
            frame_counter: FrameCounter::new(now),
            paused: false,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let viewport = Viewport::from_physical(new_size.width, new_size.height);
        if viewport.is_empty() {
            return;
        }

        self.gpu.resize(new_size.width, new_size.height);
        self.batch.set_viewport(viewport);
        log::debug!("Viewport resized to {}x{}", new_size.width, new_size.height);
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!(
            "Simulation {}",
            if self.paused { "paused" } else { "resumed" }
        );
    }

    fn toggle_wireframe(&mut self) {
        let fill_mode = self.renderer.fill_mode().toggled();
        if self.renderer.set_fill_mode(fill_mode) {
            log::info!("Fill mode: {:?}", fill_mode);
        }
    }

    /// Run every step that came due since the last frame
    fn update(&mut self) {
        let steps = self.ticker.tick(self.clock.now());

        // Steps that come due while paused are dropped
        if self.paused {
            return;
        }

        if steps > 1 {
            log::debug!("Running {} steps this frame", steps);
        }
        self.simulation.run(steps);
    }

    fn render(&mut self, window_size: PhysicalSize<u32>) -> Result<(), wgpu::SurfaceError> {
        self.update();

        // Minimized: keep simulating, skip drawing
        if Viewport::from_physical(window_size.width, window_size.height).is_empty() {
            return Ok(());
        }

        let output = self.gpu.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        for body in self.simulation.snapshots() {
            self.batch.add_circle(
                body.position,
                body.radius,
                body.color.into(),
                CIRCLE_SEGMENTS,
            );
        }

        log::debug!(
            "Vertices: {}; Indices: {}",
            self.batch.vertices().len(),
            self.batch.indices().len()
        );

        let mut frame = SurfaceFrame {
            renderer: &mut self.renderer,
            device: &self.gpu.device,
            queue: &self.gpu.queue,
            view: &view,
        };
        self.batch.submit(&mut frame);

        output.present();
        self.frame_counter.frame(self.clock.now());
        Ok(())
    }
}

#[derive(Default)]
struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_SIZE, WINDOW_SIZE));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), Scenario::two_body())) {
            Ok(state) => self.gpu_state = Some(state),
            Err(e) => {
                log::error!("Failed to initialize: {}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Space),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.toggle_pause();
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::KeyW),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.toggle_wireframe();
                }
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render(window.inner_size()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.resize(window.inner_size())
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting gravity simulation...");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;

    Ok(())
}
