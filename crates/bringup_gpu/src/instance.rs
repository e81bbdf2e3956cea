//! Instance creation.

use bringup_core::GpuSettings;

use crate::adapter::AdapterReport;

/// Creates the wgpu instance for the configured backends.
///
/// With `validation` enabled the backend validation layers and debug labels
/// are turned on. Either way the `WGPU_*` environment variables can override
/// the flags.
#[must_use]
pub fn create_instance(settings: &GpuSettings) -> wgpu::Instance {
    let flags = if settings.validation {
        wgpu::InstanceFlags::debugging()
    } else {
        wgpu::InstanceFlags::from_build_config()
    }
    .with_env();

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: settings.backends,
        flags,
        ..Default::default()
    });

    log::info!("WGPU instance created (backends: {:?}, flags: {flags:?})", settings.backends);
    instance
}

/// Lists every adapter the instance can see on `backends`.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn enumerate_adapter_reports(
    instance: &wgpu::Instance,
    backends: wgpu::Backends,
) -> Vec<AdapterReport> {
    instance
        .enumerate_adapters(backends)
        .iter()
        .map(AdapterReport::from_adapter)
        .collect()
}
