use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use campfire_scene::camera::{Camera, INITIAL_POSITION};
use campfire_scene::cli::Cli;
use campfire_scene::context::AppContext;
use campfire_scene::core::WinitController;
use campfire_scene::frame::{FpsCounter, FrameIterator};
use campfire_scene::overlay::OverlayStats;
use campfire_scene::renderer::SceneRenderer;
use campfire_scene::window::Window;

struct App {
    cli: Cli,
    window: Option<Window>,
    renderer: Option<SceneRenderer>,
    ctx: AppContext,
    input: WinitController,
    frames: FrameIterator,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli) -> Self {
        let mut camera = Camera::with_formula(INITIAL_POSITION, cli.basis);
        if let Some(fov) = cli.fov {
            camera.set_zoom(fov);
        }

        Self {
            cli,
            window: None,
            renderer: None,
            ctx: AppContext::new(camera),
            input: WinitController::new(),
            frames: FrameIterator::new(),
            fps: FpsCounter::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frames.next() else {
            return;
        };
        self.fps.tick(frame.delta);
        self.ctx.update(&self.input, frame.delta);
        self.input.reset_deltas();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let transforms = self.ctx.transforms(renderer.dimensions());
        let stats = OverlayStats {
            fps: self.fps.fps(),
            frame: frame.number,
            mode: self.ctx.projection_mode(),
            speed: self.ctx.camera.movement_speed(),
            position: self.ctx.camera.position,
        };

        match renderer.render(window.inner(), &transforms, &stats) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("skipping frame: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title("Campfire")
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.cli.width,
                    self.cli.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            &self.cli.assets,
            !self.cli.no_ui,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let window = Window::new(window);
        window.capture_cursor();

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.frames.restart();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Camera input is recorded whether or not egui wants the event
        self.input.process_event(&event);

        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window.inner(), &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.into());
                }
            }
            WindowEvent::Focused(focused) => {
                if let Some(window) = &self.window {
                    if focused {
                        window.capture_cursor();
                    } else {
                        window.release_cursor();
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.window.is_some() {
            self.input.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!(
        "window {}x{}, assets {}, basis {:?}",
        cli.width,
        cli.height,
        cli.assets.display(),
        cli.basis
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Controls: WASD move, Q/E up/down, mouse look, scroll speed, P projection, Escape quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
