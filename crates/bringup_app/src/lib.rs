//! Application framework for the bring-up programs: the winit runner,
//! logger setup and frame statistics.

pub mod app;
pub mod logging;
pub mod stats;

pub use app::App;
pub use stats::FrameStats;
