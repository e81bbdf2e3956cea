//! # Bring-up
//!
//! A step-by-step walkthrough of initializing wgpu and presenting cleared
//! frames to a window:
//!
//! ```text
//! window → instance → adapter → device → command queue → swap chain + render pass
//! ```
//!
//! Each program under `demo_apps/steps` stops at one [`Stage`]. The work is
//! split across three crates, re-exported here:
//!
//! - [`base`]: errors, settings, stages, name tables
//! - [`gpu`]: one module per GPU stage and the [`GpuStack`] driving them
//! - [`app`]: the winit runner, logging and frame statistics
//!
//! ```rust,ignore
//! use bringup::prelude::*;
//!
//! fn main() -> bringup::Result<()> {
//!     bringup::app::logging::init();
//!     App::new(Stage::ClearScreen)
//!         .with_settings(AppSettings::from_args()?)
//!         .run()
//! }
//! ```

pub use bringup_app as app;
pub use bringup_core as base;
pub use bringup_gpu as gpu;

pub use bringup_app::App;
pub use bringup_core::{AppSettings, Error, Result, Stage};
pub use bringup_gpu::GpuStack;

pub use wgpu;

pub mod prelude {
    pub use bringup_app::{App, FrameStats};
    pub use bringup_core::{
        AppSettings, Error, GpuSettings, LimitsPreset, Result, Stage, SurfaceSettings,
        WindowSettings,
    };
    pub use bringup_gpu::{
        AdapterReport, DeviceReport, FrameAction, FrameOutcome, GpuDevice, GpuStack, SurfaceState,
    };
}
