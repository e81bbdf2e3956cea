//! Window surface (swap chain) management.
//!
//! [`SurfaceState`] owns the surface and its configuration and is
//! responsible for resize handling. The `choose_*` functions pick the
//! configuration from what the adapter supports.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use bringup_core::names;
use bringup_core::{Error, Result, SurfaceSettings};

/// Creates a surface that presents to `window`.
pub fn create_surface<W>(instance: &wgpu::Instance, window: W) -> Result<wgpu::Surface<'static>>
where
    W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
{
    let surface = instance.create_surface(window)?;
    log::debug!("WGPU surface created for the window.");
    Ok(surface)
}

/// What an adapter can present to a surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSupport {
    pub formats: Vec<wgpu::TextureFormat>,
    pub present_modes: Vec<wgpu::PresentMode>,
    pub alpha_modes: Vec<wgpu::CompositeAlphaMode>,
}

impl From<wgpu::SurfaceCapabilities> for SurfaceSupport {
    fn from(caps: wgpu::SurfaceCapabilities) -> Self {
        Self {
            formats: caps.formats,
            present_modes: caps.present_modes,
            alpha_modes: caps.alpha_modes,
        }
    }
}

/// First sRGB format when `prefer_srgb`, otherwise the adapter's first
/// (preferred) format.
#[must_use]
pub fn choose_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    if prefer_srgb && let Some(format) = formats.iter().copied().find(wgpu::TextureFormat::is_srgb) {
        return Some(format);
    }
    formats.first().copied()
}

/// `Fifo` with vsync. Without it, the first of `Mailbox` and `Immediate`
/// that is supported, else `Fifo`, which every surface supports.
#[must_use]
pub fn choose_present_mode(modes: &[wgpu::PresentMode], vsync: bool) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    [wgpu::PresentMode::Mailbox, wgpu::PresentMode::Immediate]
        .into_iter()
        .find(|mode| modes.contains(mode))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

#[must_use]
pub fn choose_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

/// A window with a zero dimension (minimized) has nothing to present to.
#[inline]
#[must_use]
pub fn is_presentable(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}

/// Builds the surface configuration for a `width`×`height` target.
///
/// Zero dimensions are clamped to 1.
pub fn surface_configuration(
    support: &SurfaceSupport,
    width: u32,
    height: u32,
    settings: &SurfaceSettings,
) -> Result<wgpu::SurfaceConfiguration> {
    let format = choose_format(&support.formats, settings.prefer_srgb)
        .ok_or_else(|| Error::SurfaceUnsupported("no surface formats offered".to_string()))?;

    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: choose_present_mode(&support.present_modes, settings.vsync),
        desired_maximum_frame_latency: settings.max_frame_latency,
        alpha_mode: choose_alpha_mode(&support.alpha_modes),
        view_formats: vec![],
    })
}

/// A configured surface.
pub struct SurfaceState {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl SurfaceState {
    pub fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        (width, height): (u32, u32),
        settings: &SurfaceSettings,
    ) -> Result<Self> {
        let support = SurfaceSupport::from(surface.get_capabilities(adapter));
        let config = surface_configuration(&support, width, height, settings)?;
        surface.configure(device, &config);

        log::info!(
            "Surface configured: {}x{} {:?}, present mode {}, alpha {}",
            config.width,
            config.height,
            config.format,
            names::present_mode_name(config.present_mode),
            names::alpha_mode_name(config.alpha_mode),
        );

        Ok(Self { surface, config })
    }

    /// Reconfigures for a new size. Zero sizes (minimized windows) are
    /// ignored; returns whether the surface was reconfigured.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        if !is_presentable(width, height) {
            log::warn!("Ignoring resize to zero dimensions: {width}x{height}");
            return false;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(device, &self.config);
        log::debug!("Surface resized to {width}x{height}");
        true
    }

    /// Re-applies the current configuration after the surface was lost or
    /// became outdated.
    pub fn reconfigure(&self, device: &wgpu::Device) {
        self.surface.configure(device, &self.config);
    }

    #[inline]
    #[must_use]
    pub fn surface(&self) -> &wgpu::Surface<'static> {
        &self.surface
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }

    /// Returns the surface color format.
    #[inline]
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }
}
