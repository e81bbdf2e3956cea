//! The GPU half of the bring-up walkthrough.
//!
//! One module per stage, in bring-up order:
//!
//! - [`instance`]: create the instance, enumerate adapters
//! - [`adapter`]: request an adapter (blocking) and inspect it
//! - [`device`]: request a device (blocking), error and device-lost callbacks
//! - [`queue`]: submit a command buffer and wait for the work-done callback
//! - [`surface`]: configure the swap chain
//! - [`frame`]: acquire, clear, submit and present one frame
//!
//! [`GpuStack`] runs them in sequence for a given stage.

pub mod adapter;
pub mod device;
pub mod frame;
pub mod instance;
pub mod queue;
pub mod stack;
pub mod surface;

pub use adapter::AdapterReport;
pub use device::{DeviceReport, GpuDevice};
pub use frame::{FrameAction, FrameOutcome};
pub use stack::GpuStack;
pub use surface::{SurfaceState, SurfaceSupport};
