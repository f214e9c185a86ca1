use std::sync::Arc;

use clap::Parser;
use rand::thread_rng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use starfield::cli::Cli;
use starfield::clock::FrameClock;
use starfield::config::StarfieldConfig;
use starfield::lifecycle::Starfield;
use starfield::renderer::PointRenderer;
use starfield::scene::SceneState;
use starfield::schedule::{RedrawScheduler, ResizeRegistry};
use starfield::viewport::Viewport;

const FPS_REPORT_INTERVAL: f32 = 1.0;

type Background = Starfield<PointRenderer, RedrawScheduler, ResizeRegistry>;

struct App {
    cli: Cli,
    config: StarfieldConfig,
    window: Option<Arc<Window>>,
    background: Option<Background>,
    clock: FrameClock,
}

impl App {
    fn new(cli: Cli, config: StarfieldConfig) -> Self {
        Self {
            cli,
            config,
            window: None,
            background: None,
            clock: FrameClock::new(FPS_REPORT_INTERVAL),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Starfield")
                .with_transparent(true)
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let viewport = Viewport::capped(
            size.width,
            size.height,
            window.scale_factor(),
            self.config.max_pixel_ratio,
        );

        let surface_window = window.clone();
        let mounted = Starfield::mount(
            Some(|scene: &SceneState| {
                pollster::block_on(PointRenderer::new(surface_window, scene))
            }),
            viewport,
            &self.config,
            RedrawScheduler::new(window.clone()),
            ResizeRegistry::new(),
            &mut thread_rng(),
        );

        match mounted {
            Ok(Some(background)) => {
                self.window = Some(window);
                self.background = Some(background);
            }
            Ok(None) => {
                // No drawable surface; nothing to render
            }
            Err(e) => {
                log::error!("failed to initialize starfield: {}", e);
                event_loop.exit();
            }
        }
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
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if let Some(background) = &mut self.background {
                    background.unmount();
                }
                self.background = None;
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                let scale = self
                    .window
                    .as_ref()
                    .map_or(1.0, |window| window.scale_factor());
                let viewport =
                    Viewport::capped(size.width, size.height, scale, self.config.max_pixel_ratio);
                if let Some(background) = &mut self.background {
                    background.on_resize(viewport);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(fps) = self.clock.tick() {
                    log::info!("fps: {:.1}", fps);
                }
                if let Some(background) = &mut self.background {
                    if let Err(e) = background.on_frame() {
                        log::error!("draw failed: {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => StarfieldConfig::from_file(path)?,
        None => StarfieldConfig::default(),
    };
    if let Some(count) = cli.particles {
        config.particle_count = count;
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
