//! Device request, error callbacks and inspection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use bringup_core::names;
use bringup_core::{Error, GpuSettings, Result};

use crate::adapter::log_capabilities;

/// State shared with the uncaptured-error and device-lost callbacks.
#[derive(Debug, Default)]
pub struct DeviceDiagnostics {
    error_count: AtomicU64,
    last_error: Mutex<Option<String>>,
    lost: AtomicBool,
    lost_message: Mutex<Option<String>>,
}

impl DeviceDiagnostics {
    pub fn record_error(&self, message: String) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
        *self.last_error.lock() = Some(message);
    }

    /// Keeps why the device was lost. The message is stored before the
    /// flag is raised.
    pub fn record_lost(&self, reason: wgpu::DeviceLostReason, message: &str) {
        *self.lost_message.lock() = Some(format!("{message} ({reason:?})"));
        self.lost.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.lost.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn lost_message(&self) -> Option<String> {
        self.lost_message.lock().clone()
    }
}

/// A device, its queue, and what its callbacks have observed.
pub struct GpuDevice {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    diagnostics: Arc<DeviceDiagnostics>,
}

impl GpuDevice {
    #[must_use]
    pub fn uncaptured_error_count(&self) -> u64 {
        self.diagnostics.error_count()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.diagnostics.last_error()
    }

    /// `true` once the device-lost callback has fired for a reason other
    /// than the device being destroyed.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.diagnostics.is_lost()
    }

    /// Message the device-lost callback was given, with its reason.
    #[must_use]
    pub fn lost_message(&self) -> Option<String> {
        self.diagnostics.lost_message()
    }

    /// Processes pending callbacks, blocking until all submitted work is done
    /// when `wait` is set.
    pub fn poll(&self, wait: bool) -> Result<()> {
        let poll_type = if wait {
            wgpu::PollType::Wait
        } else {
            wgpu::PollType::Poll
        };
        self.device.poll(poll_type)?;
        Ok(())
    }
}

/// Requests a device from `adapter` and blocks until the request resolves.
///
/// Fails early with [`Error::MissingFeatures`] when the adapter lacks a
/// required feature.
pub fn request_device_blocking(adapter: &wgpu::Adapter, settings: &GpuSettings) -> Result<GpuDevice> {
    let missing = names::missing_features(adapter.features(), settings.required_features);
    if !missing.is_empty() {
        return Err(Error::MissingFeatures(missing));
    }

    let required_limits = settings.limits.resolve(&adapter.limits());

    log::info!("Requesting device \"{}\"...", settings.device_label);
    let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: Some(settings.device_label.as_str()),
        required_features: settings.required_features,
        required_limits,
        memory_hints: wgpu::MemoryHints::Performance,
        ..Default::default()
    }))?;
    log::info!("Got device: {device:?}");

    let diagnostics = Arc::new(DeviceDiagnostics::default());

    let on_error = Arc::clone(&diagnostics);
    device.on_uncaptured_error(Box::new(move |error: wgpu::Error| {
        log::error!("Uncaptured device error: {error}");
        on_error.record_error(error.to_string());
    }));

    let on_lost = Arc::clone(&diagnostics);
    device.set_device_lost_callback(move |reason, message| {
        if matches!(reason, wgpu::DeviceLostReason::Destroyed) {
            log::info!("Device destroyed: {message}");
        } else {
            log::error!("Device lost ({reason:?}): {message}");
            on_lost.record_lost(reason, &message);
        }
    });

    Ok(GpuDevice {
        device,
        queue,
        diagnostics,
    })
}

/// Features and limits the device was actually created with.
#[derive(Debug, Clone)]
pub struct DeviceReport {
    pub limits: wgpu::Limits,
    pub features: wgpu::Features,
}

impl DeviceReport {
    #[must_use]
    pub fn from_device(device: &wgpu::Device) -> Self {
        Self {
            limits: device.limits(),
            features: device.features(),
        }
    }

    pub fn log(&self) {
        log::info!(
            "Device features: [{}]",
            names::feature_names(self.features).join(", ")
        );
        log_capabilities(&self.limits, self.features);
    }
}
