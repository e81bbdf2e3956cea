//! The per-frame acquire / record / submit / present cycle.

use bringup_core::Result;

use crate::device::GpuDevice;
use crate::surface::SurfaceState;

/// What to do about a frame whose surface texture could not be acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    /// Drop this frame and try again next time.
    Skip,
    /// Reconfigure the surface before the next frame.
    Reconfigure,
    /// Unrecoverable; stop rendering.
    Exit,
}

/// Result of one call to [`render_clear_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// Presented, but the surface no longer matches the window exactly.
    PresentedSuboptimal,
    Skipped(FrameAction),
}

impl FrameOutcome {
    #[must_use]
    pub fn needs_reconfigure(self) -> bool {
        matches!(
            self,
            Self::PresentedSuboptimal | Self::Skipped(FrameAction::Reconfigure)
        )
    }

    #[must_use]
    pub fn should_exit(self) -> bool {
        self == Self::Skipped(FrameAction::Exit)
    }
}

#[must_use]
pub fn classify_surface_error(error: &wgpu::SurfaceError) -> FrameAction {
    match error {
        wgpu::SurfaceError::Timeout => FrameAction::Skip,
        wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost => FrameAction::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => FrameAction::Exit,
        _ => FrameAction::Skip,
    }
}

/// Records a render pass that clears `view` to `clear_color` and draws
/// nothing.
pub fn record_clear_pass(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    clear_color: wgpu::Color,
) {
    let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Clear pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear_color),
                store: wgpu::StoreOp::Store,
            },
        })],
        ..Default::default()
    });
}

/// Acquires the next surface texture, clears it to `clear_color` in a single
/// render pass, submits and presents.
pub fn render_clear_frame(
    gpu: &GpuDevice,
    surface: &SurfaceState,
    clear_color: wgpu::Color,
) -> Result<FrameOutcome> {
    let output = match surface.surface().get_current_texture() {
        Ok(output) => output,
        Err(e) => {
            let action = classify_surface_error(&e);
            log::warn!("Cannot acquire next surface texture ({e}), {action:?}");
            return Ok(FrameOutcome::Skipped(action));
        }
    };
    let view = output.texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some("Surface texture view"),
        ..Default::default()
    });

    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Clear encoder"),
        });
    record_clear_pass(&mut encoder, &view, clear_color);

    gpu.queue.submit(std::iter::once(encoder.finish()));

    let suboptimal = output.suboptimal;
    output.present();
    gpu.poll(false)?;

    Ok(if suboptimal {
        FrameOutcome::PresentedSuboptimal
    } else {
        FrameOutcome::Presented
    })
}
