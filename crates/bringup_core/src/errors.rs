//! Error Types
//!
//! This module defines the error type shared by every bring-up stage.
//!
//! # Overview
//!
//! [`Error`] covers all failure modes of the walkthrough:
//! - GPU bring-up failures (adapter, device, surface, queue)
//! - Windowing failures (event loop, window creation)
//! - Configuration loading and validation
//!
//! All fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`.

use thiserror::Error;

/// The error type for the bring-up crates.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // GPU Bring-up Errors
    // ========================================================================
    /// No adapter matched the request options.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(#[from] wgpu::RequestAdapterError),

    /// The adapter does not support every required feature.
    #[error("Adapter is missing required features: {}", .0.join(", "))]
    MissingFeatures(Vec<&'static str>),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create a surface for the window.
    #[error("Failed to create surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// The surface cannot be presented by the chosen adapter.
    #[error("Surface not supported by adapter: {0}")]
    SurfaceUnsupported(String),

    /// Polling the device failed.
    #[error("Device poll failed: {0}")]
    DevicePoll(#[from] wgpu::PollError),

    /// The device-lost callback fired while the device was in use.
    #[error("Device lost: {0}")]
    DeviceLost(String),

    /// The submitted-work-done callback never fired.
    #[error("Submitted work did not complete: {0}")]
    WorkNotCompleted(String),

    // ========================================================================
    // Windowing Errors
    // ========================================================================
    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Window creation error (winit).
    #[error("Could not open window: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Reading a settings file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings file is not valid JSON for [`crate::settings::AppSettings`].
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting has a value outside its accepted set.
    #[error("Invalid setting `{key}`: {message}")]
    InvalidSetting {
        /// Name of the offending setting
        key: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// A stage name or index did not match any bring-up stage.
    #[error("Unknown stage: {0}")]
    UnknownStage(String),
}

impl Error {
    pub(crate) fn invalid_setting(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key,
            message: message.into(),
        }
    }
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
