//! Application Settings
//!
//! [`AppSettings`] collects everything the bring-up programs can configure:
//! the window, how the adapter and device are requested, how the surface is
//! configured, and the clear color.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bringup_core::settings::AppSettings;
//!
//! // Defaults: 640×480, vsync, red-ish clear color
//! let settings = AppSettings::default();
//!
//! // Every field of the JSON file is optional
//! let settings = AppSettings::from_json_str(r#"{ "surface": { "vsync": false } }"#)?;
//! ```
//!
//! # File Format
//!
//! ```json
//! {
//!   "window":  { "title": "WebGPU Demo", "width": 640, "height": 480, "resizable": true },
//!   "gpu":     { "backends": "vulkan,metal", "power_preference": "low-power",
//!                "force_fallback_adapter": false, "validation": true,
//!                "required_features": ["timestamp-query"], "limits": "downlevel",
//!                "device_label": "My Device" },
//!   "surface": { "vsync": true, "prefer_srgb": true, "max_frame_latency": 2 },
//!   "clear_color": [0.9, 0.1, 0.2, 1.0]
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::{Error, Result};
use crate::names;

// ---------------------------------------------------------------------------
// WindowSettings
// ---------------------------------------------------------------------------

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "WebGPU Demo".into(),
            width: 640,
            height: 480,
            resizable: true,
        }
    }
}

// ---------------------------------------------------------------------------
// GpuSettings
// ---------------------------------------------------------------------------

/// Which limits the device is requested with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LimitsPreset {
    /// `wgpu::Limits::default()`, the WebGPU baseline.
    #[default]
    Default,
    /// `wgpu::Limits::downlevel_defaults()`.
    Downlevel,
    /// `wgpu::Limits::downlevel_webgl2_defaults()`, widened to the adapter's
    /// texture resolution limits.
    DownlevelWebgl2,
    /// Everything the adapter supports.
    Adapter,
}

impl LimitsPreset {
    /// Resolves the preset against the limits an adapter reports.
    #[must_use]
    pub fn resolve(self, adapter_limits: &wgpu::Limits) -> wgpu::Limits {
        match self {
            Self::Default => wgpu::Limits::default(),
            Self::Downlevel => wgpu::Limits::downlevel_defaults(),
            Self::DownlevelWebgl2 => {
                wgpu::Limits::downlevel_webgl2_defaults().using_resolution(adapter_limits.clone())
            }
            Self::Adapter => adapter_limits.clone(),
        }
    }
}

impl FromStr for LimitsPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "default" => Ok(Self::Default),
            "downlevel" => Ok(Self::Downlevel),
            "downlevel-webgl2" | "webgl2" => Ok(Self::DownlevelWebgl2),
            "adapter" => Ok(Self::Adapter),
            other => Err(Error::invalid_setting(
                "gpu.limits",
                format!("expected default, downlevel, downlevel-webgl2 or adapter, got `{other}`"),
            )),
        }
    }
}

/// How the instance, adapter and device are created.
#[derive(Debug, Clone)]
pub struct GpuSettings {
    /// Backends the instance may use.
    pub backends: wgpu::Backends,
    /// GPU adapter selection preference.
    pub power_preference: wgpu::PowerPreference,
    /// Ask for a software adapter.
    pub force_fallback_adapter: bool,
    /// Enable backend validation layers and debug labels.
    pub validation: bool,
    /// Features the device must be created with.
    pub required_features: wgpu::Features,
    pub limits: LimitsPreset,
    pub device_label: String,
}

impl Default for GpuSettings {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            validation: cfg!(debug_assertions),
            required_features: wgpu::Features::empty(),
            limits: LimitsPreset::Default,
            device_label: "My Device".into(),
        }
    }
}

/// Parses a comma separated backend list such as `"vulkan,metal"`.
pub fn parse_backends(list: &str) -> Result<wgpu::Backends> {
    let mut backends = wgpu::Backends::empty();
    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        backends |= match name.to_ascii_lowercase().as_str() {
            "all" => wgpu::Backends::all(),
            "primary" => wgpu::Backends::PRIMARY,
            "secondary" => wgpu::Backends::SECONDARY,
            "vulkan" | "vk" => wgpu::Backends::VULKAN,
            "metal" | "mtl" => wgpu::Backends::METAL,
            "dx12" | "d3d12" => wgpu::Backends::DX12,
            "gl" | "gles" | "opengl" => wgpu::Backends::GL,
            "webgpu" => wgpu::Backends::BROWSER_WEBGPU,
            other => {
                return Err(Error::invalid_setting(
                    "gpu.backends",
                    format!("unknown backend `{other}`"),
                ));
            }
        };
    }

    if backends.is_empty() {
        return Err(Error::invalid_setting("gpu.backends", "no backend given"));
    }
    Ok(backends)
}

pub fn parse_power_preference(name: &str) -> Result<wgpu::PowerPreference> {
    match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "high-performance" => Ok(wgpu::PowerPreference::HighPerformance),
        "low-power" => Ok(wgpu::PowerPreference::LowPower),
        "none" => Ok(wgpu::PowerPreference::None),
        other => Err(Error::invalid_setting(
            "gpu.power_preference",
            format!("expected high-performance, low-power or none, got `{other}`"),
        )),
    }
}

pub fn parse_features<S: AsRef<str>>(list: &[S]) -> Result<wgpu::Features> {
    list.iter().try_fold(wgpu::Features::empty(), |acc, name| {
        let name = name.as_ref();
        names::feature_from_name(name)
            .map(|flag| acc | flag)
            .ok_or_else(|| {
                Error::invalid_setting("gpu.required_features", format!("unknown feature `{name}`"))
            })
    })
}

// ---------------------------------------------------------------------------
// SurfaceSettings
// ---------------------------------------------------------------------------

/// Swap chain configuration preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSettings {
    /// Cap presentation to the display refresh rate.
    pub vsync: bool,
    /// Pick an sRGB surface format when one is offered.
    pub prefer_srgb: bool,
    /// Maximum number of frames queued for presentation.
    pub max_frame_latency: u32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            prefer_srgb: true,
            max_frame_latency: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// AppSettings
// ---------------------------------------------------------------------------

/// Color every frame is cleared to in the clear-screen stage.
pub const DEFAULT_CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.9,
    g: 0.1,
    b: 0.2,
    a: 1.0,
};

/// Complete configuration of a bring-up program.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub window: WindowSettings,
    pub gpu: GpuSettings,
    pub surface: SurfaceSettings,
    pub clear_color: wgpu::Color,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            gpu: GpuSettings::default(),
            surface: SurfaceSettings::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
        }
    }
}

impl AppSettings {
    /// Parses settings from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: SettingsFile = serde_json::from_str(json)?;
        file.apply(Self::default())
    }

    /// Reads and parses a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Loads the file named by the first command line argument, or returns
    /// the defaults when there is none.
    pub fn from_args() -> Result<Self> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

// ---------------------------------------------------------------------------
// On-disk representation
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    window: WindowFile,
    gpu: GpuFile,
    surface: SurfaceFile,
    clear_color: Option<[f64; 4]>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WindowFile {
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    resizable: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GpuFile {
    backends: Option<String>,
    power_preference: Option<String>,
    force_fallback_adapter: Option<bool>,
    validation: Option<bool>,
    required_features: Vec<String>,
    limits: Option<String>,
    device_label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SurfaceFile {
    vsync: Option<bool>,
    prefer_srgb: Option<bool>,
    max_frame_latency: Option<u32>,
}

impl SettingsFile {
    fn apply(self, mut settings: AppSettings) -> Result<AppSettings> {
        let window = &mut settings.window;
        if let Some(title) = self.window.title {
            window.title = title;
        }
        if let Some(width) = self.window.width {
            window.width = width;
        }
        if let Some(height) = self.window.height {
            window.height = height;
        }
        if let Some(resizable) = self.window.resizable {
            window.resizable = resizable;
        }
        if window.width == 0 || window.height == 0 {
            return Err(Error::invalid_setting(
                "window",
                format!("size must be non-zero, got {}x{}", window.width, window.height),
            ));
        }

        let gpu = &mut settings.gpu;
        if let Some(list) = self.gpu.backends {
            gpu.backends = parse_backends(&list)?;
        }
        if let Some(name) = self.gpu.power_preference {
            gpu.power_preference = parse_power_preference(&name)?;
        }
        if let Some(fallback) = self.gpu.force_fallback_adapter {
            gpu.force_fallback_adapter = fallback;
        }
        if let Some(validation) = self.gpu.validation {
            gpu.validation = validation;
        }
        gpu.required_features |= parse_features(&self.gpu.required_features)?;
        if let Some(name) = self.gpu.limits {
            gpu.limits = name.parse()?;
        }
        if let Some(label) = self.gpu.device_label {
            gpu.device_label = label;
        }

        let surface = &mut settings.surface;
        if let Some(vsync) = self.surface.vsync {
            surface.vsync = vsync;
        }
        if let Some(prefer_srgb) = self.surface.prefer_srgb {
            surface.prefer_srgb = prefer_srgb;
        }
        if let Some(latency) = self.surface.max_frame_latency {
            if latency == 0 {
                return Err(Error::invalid_setting(
                    "surface.max_frame_latency",
                    "must be at least 1",
                ));
            }
            surface.max_frame_latency = latency;
        }

        if let Some([r, g, b, a]) = self.clear_color {
            settings.clear_color = wgpu::Color { r, g, b, a };
        }

        Ok(settings)
    }
}
