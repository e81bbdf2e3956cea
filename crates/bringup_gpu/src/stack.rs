//! Bring-up driver.
//!
//! [`GpuStack`] performs every GPU stage a [`Stage`] includes, in order, and
//! owns the objects each stage creates.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use bringup_core::{AppSettings, Result, Stage};

use crate::adapter::{self, AdapterReport};
use crate::device::{self, DeviceReport, GpuDevice};
use crate::instance;
use crate::queue;
use crate::surface::{self, SurfaceState};

/// GPU objects created so far. Every field stays `None` past the last stage
/// that was run.
///
/// Field order is drop order: surface, device, adapter, instance.
#[derive(Default)]
pub struct GpuStack {
    pub surface: Option<SurfaceState>,
    pub device: Option<GpuDevice>,
    pub adapter: Option<wgpu::Adapter>,
    pub instance: Option<wgpu::Instance>,
    queue_verified: bool,
}

impl GpuStack {
    /// Runs the GPU stages up to and including `stage`.
    ///
    /// `window` is only used when `stage` presents; `size` is its inner size
    /// in physical pixels.
    pub fn bring_up<W>(stage: Stage, settings: &AppSettings, window: W, size: (u32, u32)) -> Result<Self>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        Self::run_stages(stage, settings, size, |instance| {
            if stage.needs_surface() {
                surface::create_surface(instance, window).map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Like [`bring_up`](Self::bring_up) without a window. Stages that
    /// present are skipped, so the stack stops at [`Stage::CommandQueue`]
    /// at most.
    pub fn bring_up_headless(stage: Stage, settings: &AppSettings) -> Result<Self> {
        Self::run_stages(stage, settings, (1, 1), |_| Ok(None))
    }

    fn run_stages<F>(stage: Stage, settings: &AppSettings, size: (u32, u32), make_surface: F) -> Result<Self>
    where
        F: FnOnce(&wgpu::Instance) -> Result<Option<wgpu::Surface<'static>>>,
    {
        let mut stack = Self::default();
        if !stage.includes(Stage::Instance) {
            return Ok(stack);
        }

        let instance = stack.instance.insert(instance::create_instance(&settings.gpu));
        if !stage.includes(Stage::Adapter) {
            return Ok(stack);
        }

        #[cfg(not(target_arch = "wasm32"))]
        for report in instance::enumerate_adapter_reports(instance, settings.gpu.backends) {
            log::debug!("Available adapter: {}", report.summary());
        }

        // Created before the adapter so the adapter can be checked against it.
        let surface = make_surface(instance)?;

        let adapter = stack.adapter.insert(adapter::request_adapter_blocking(
            instance,
            &settings.gpu,
            surface.as_ref(),
        )?);
        AdapterReport::from_adapter(adapter).log();
        if !stage.includes(Stage::Device) {
            return Ok(stack);
        }

        let gpu = stack
            .device
            .insert(device::request_device_blocking(adapter, &settings.gpu)?);
        DeviceReport::from_device(&gpu.device).log();
        if !stage.includes(Stage::CommandQueue) {
            return Ok(stack);
        }

        queue::submit_debug_markers(gpu)?;
        stack.queue_verified = true;

        if let Some(surface) = surface {
            stack.surface = Some(SurfaceState::new(
                surface,
                adapter,
                &gpu.device,
                size,
                &settings.surface,
            )?);
        }

        Ok(stack)
    }

    /// The last stage whose work is done and whose objects are alive.
    #[must_use]
    pub fn reached(&self) -> Stage {
        if self.surface.is_some() {
            Stage::ClearScreen
        } else if self.device.is_some() && self.queue_verified {
            Stage::CommandQueue
        } else if self.device.is_some() {
            Stage::Device
        } else if self.adapter.is_some() {
            Stage::Adapter
        } else if self.instance.is_some() {
            Stage::Instance
        } else {
            Stage::Window
        }
    }

    /// Releases everything in reverse creation order.
    pub fn release(&mut self) {
        if self.instance.is_none() {
            return;
        }
        log::info!("Releasing GPU objects...");
        self.surface = None;
        self.device = None;
        self.queue_verified = false;
        self.adapter = None;
        self.instance = None;
    }
}
