//! Bring-up stages.
//!
//! Each demo program stops at one [`Stage`] and performs every stage before
//! it, in order.

use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// One step of the GPU bring-up sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Open a window and poll events until it is closed.
    Window,
    /// Create the GPU instance.
    Instance,
    /// Request and inspect an adapter.
    Adapter,
    /// Request and inspect a device, install its callbacks.
    Device,
    /// Submit a command buffer and wait for it to complete.
    CommandQueue,
    /// Configure the surface and clear it every frame.
    ClearScreen,
}

impl Stage {
    /// Every stage, in bring-up order.
    pub const ALL: [Stage; 6] = [
        Stage::Window,
        Stage::Instance,
        Stage::Adapter,
        Stage::Device,
        Stage::CommandQueue,
        Stage::ClearScreen,
    ];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` when running up to `self` performs `other`.
    #[inline]
    #[must_use]
    pub fn includes(self, other: Stage) -> bool {
        other <= self
    }

    #[must_use]
    pub fn next(self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Only the clear-screen stage presents, so only it needs a surface.
    #[inline]
    #[must_use]
    pub fn needs_surface(self) -> bool {
        self == Stage::ClearScreen
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Stage::Window => "window",
            Stage::Instance => "instance",
            Stage::Adapter => "adapter",
            Stage::Device => "device",
            Stage::CommandQueue => "command-queue",
            Stage::ClearScreen => "clear-screen",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        if let Ok(index) = normalized.parse::<usize>() {
            return Self::ALL
                .get(index)
                .copied()
                .ok_or_else(|| Error::UnknownStage(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|stage| stage.name() == normalized)
            .ok_or_else(|| Error::UnknownStage(s.to_string()))
    }
}
