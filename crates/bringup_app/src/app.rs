//! Winit-based Application Runner
//!
//! [`App`] opens a window and drives the bring-up up to a chosen
//! [`Stage`]:
//!
//! - every stage opens the window and polls events until it is closed
//! - from [`Stage::Instance`] on, the GPU stages run once, right after the
//!   window is created
//! - [`Stage::ClearScreen`] additionally clears and presents a frame on
//!   every redraw
//!
//! # Example
//!
//! ```rust,ignore
//! use bringup_app::App;
//! use bringup_core::Stage;
//!
//! fn main() -> bringup_core::Result<()> {
//!     bringup_app::logging::init();
//!     App::new(Stage::Device).with_title("Device").run()
//! }
//! ```

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use bringup_core::{AppSettings, Error, Result, Stage};
use bringup_gpu::GpuStack;
use bringup_gpu::frame::{self, FrameOutcome};
use bringup_gpu::surface;

use crate::stats::FrameStats;

/// Application builder.
pub struct App {
    stage: Stage,
    settings: AppSettings,
}

impl App {
    /// Creates a builder that stops at `stage`, with default settings.
    #[must_use]
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            settings: AppSettings::default(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.window.title = title.into();
        self
    }

    /// Replaces all settings. The title set by [`with_title`](Self::with_title)
    /// is overwritten, so call this first.
    #[must_use]
    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs the event loop until the window is closed or a stage fails.
    ///
    /// The loop spins continuously only when frames are presented.
    pub fn run(self) -> Result<()> {
        log::info!("Running bring-up up to stage `{}`", self.stage);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(if self.stage.needs_surface() {
            ControlFlow::Poll
        } else {
            ControlFlow::Wait
        });

        let mut runner = AppRunner::new(self.stage, self.settings);
        event_loop.run_app(&mut runner)?;
        runner.finish()
    }
}

/// Internal runner that implements winit's `ApplicationHandler`.
struct AppRunner {
    stage: Stage,
    settings: AppSettings,

    gpu: GpuStack,
    window: Option<Arc<Window>>,
    stats: FrameStats,

    /// First failure; returned from [`App::run`].
    error: Option<Error>,
}

impl AppRunner {
    fn new(stage: Stage, settings: AppSettings) -> Self {
        Self {
            stage,
            settings,
            gpu: GpuStack::default(),
            window: None,
            stats: FrameStats::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("Fatal bring-up error: {error}");
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    fn finish(mut self) -> Result<()> {
        self.gpu.release();
        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let window_settings = &self.settings.window;
        let attributes = Window::default_attributes()
            .with_title(&window_settings.title)
            .with_inner_size(LogicalSize::new(
                f64::from(window_settings.width),
                f64::from(window_settings.height),
            ))
            .with_resizable(window_settings.resizable);

        let window = event_loop.create_window(attributes)?;
        Ok(Arc::new(window))
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(surface), Some(gpu)) = (&self.gpu.surface, &self.gpu.device) else {
            return;
        };

        match frame::render_clear_frame(gpu, surface, self.settings.clear_color) {
            Ok(outcome) if outcome.should_exit() => {
                log::error!("Surface is out of memory, stopping");
                event_loop.exit();
                return;
            }
            Ok(outcome) => {
                if outcome.needs_reconfigure() {
                    surface.reconfigure(&gpu.device);
                }
                if outcome != FrameOutcome::Presented {
                    log::debug!("Frame {}: {outcome:?}", self.stats.total_frames());
                }
            }
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }

        if let Some(fps) = self.stats.update() {
            log::debug!("{fps:.1} fps");
        }
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };
        self.window = Some(window.clone());
        log::info!("Window opened: \"{}\"", self.settings.window.title);

        let size = window.inner_size();
        match GpuStack::bring_up(self.stage, &self.settings, window.clone(), (size.width, size.height)) {
            Ok(gpu) => self.gpu = gpu,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        }

        log::info!("Bring-up complete up to stage `{}`", self.stage);
        if self.stage.needs_surface() {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                if let (Some(surface), Some(gpu)) = (&mut self.gpu.surface, &self.gpu.device) {
                    surface.resize(&gpu.device, physical_size.width, physical_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                // Minimized windows keep their old surface size; skip until restored.
                let presentable = self.window.as_ref().is_some_and(|window| {
                    let size = window.inner_size();
                    surface::is_presentable(size.width, size.height)
                });
                if presentable {
                    self.render_frame(event_loop);
                }
                if self.stage.needs_surface()
                    && let Some(window) = &self.window
                {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.error.is_none()
            && let Some(gpu) = &self.gpu.device
            && gpu.is_lost()
        {
            let message = gpu
                .lost_message()
                .unwrap_or_else(|| "no reason given".to_string());
            self.fail(event_loop, Error::DeviceLost(message));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu.device
            && gpu.uncaptured_error_count() > 0
        {
            log::warn!("{} uncaptured device error(s) during the run", gpu.uncaptured_error_count());
        }
        self.gpu.release();
    }
}
