//! Shared foundations of the bring-up walkthrough: the error type, settings,
//! the stage enum and the wgpu name tables.

pub mod errors;
pub mod names;
pub mod settings;
pub mod stage;

pub use errors::{Error, Result};
pub use settings::{AppSettings, GpuSettings, LimitsPreset, SurfaceSettings, WindowSettings};
pub use stage::Stage;
