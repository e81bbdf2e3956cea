//! Adapter request and inspection.

use bringup_core::names;
use bringup_core::{GpuSettings, Result};

/// Requests an adapter and blocks until the request resolves.
///
/// `compatible_surface` must be given when the adapter will present to that
/// surface.
pub fn request_adapter_blocking(
    instance: &wgpu::Instance,
    settings: &GpuSettings,
    compatible_surface: Option<&wgpu::Surface<'_>>,
) -> Result<wgpu::Adapter> {
    log::info!("Requesting adapter...");

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: settings.power_preference,
        force_fallback_adapter: settings.force_fallback_adapter,
        compatible_surface,
    }))?;

    log::info!("Got adapter: \"{}\"", adapter.get_info().name);
    Ok(adapter)
}

/// What inspecting an adapter reveals: identity, limits and features.
#[derive(Debug, Clone)]
pub struct AdapterReport {
    pub name: String,
    pub vendor: u32,
    pub device: u32,
    pub device_type: wgpu::DeviceType,
    pub backend: wgpu::Backend,
    pub driver: String,
    pub driver_info: String,
    pub limits: wgpu::Limits,
    pub features: wgpu::Features,
}

impl AdapterReport {
    #[must_use]
    pub fn from_adapter(adapter: &wgpu::Adapter) -> Self {
        Self::new(&adapter.get_info(), adapter.limits(), adapter.features())
    }

    #[must_use]
    pub fn new(info: &wgpu::AdapterInfo, limits: wgpu::Limits, features: wgpu::Features) -> Self {
        Self {
            name: info.name.clone(),
            vendor: info.vendor,
            device: info.device,
            device_type: info.device_type,
            backend: info.backend,
            driver: info.driver.clone(),
            driver_info: info.driver_info.clone(),
            limits,
            features,
        }
    }

    /// One line: name, type, backend and PCI ids.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "\"{}\" ({}, {}, vendor {:#06x}, device {:#06x})",
            self.name,
            names::device_type_name(self.device_type),
            names::backend_name(self.backend),
            self.vendor,
            self.device,
        )
    }

    #[must_use]
    pub fn feature_names(&self) -> Vec<&'static str> {
        names::feature_names(self.features)
    }

    pub fn log(&self) {
        log::info!("Adapter: {}", self.summary());
        if !self.driver.is_empty() || !self.driver_info.is_empty() {
            log::info!("  driver: {} {}", self.driver, self.driver_info);
        }
        log_capabilities(&self.limits, self.features);
    }
}

/// Writes the limit table and feature list at `debug`.
pub(crate) fn log_capabilities(limits: &wgpu::Limits, features: wgpu::Features) {
    log::debug!("  limits:");
    for (name, value) in names::limit_entries(limits) {
        log::debug!("    - {name}: {value}");
    }

    let feature_names = names::feature_names(features);
    log::debug!("  features ({}):", feature_names.len());
    for name in feature_names {
        log::debug!("    - {name}");
    }
    log::trace!("  raw features: {features:?}");
}
