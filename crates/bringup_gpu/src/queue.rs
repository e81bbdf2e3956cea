//! Command queue round trip.

use bringup_core::{Error, Result};

use crate::device::GpuDevice;

/// Records a command buffer holding two debug markers, submits it and blocks
/// until the queue reports the work as done.
pub fn submit_debug_markers(gpu: &GpuDevice) -> Result<()> {
    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Command encoder"),
        });
    encoder.insert_debug_marker("Do one thing");
    encoder.insert_debug_marker("Do another thing");
    let command = encoder.finish();

    log::info!("Submitting command...");
    gpu.queue.submit(std::iter::once(command));

    // Covers everything submitted so far, so it must come after `submit`.
    let (done_tx, done_rx) = flume::bounded(1);
    gpu.queue.on_submitted_work_done(move || {
        let _ = done_tx.send(());
    });

    gpu.poll(true)?;
    done_rx
        .try_recv()
        .map_err(|e| Error::WorkNotCompleted(e.to_string()))?;

    log::info!("Queued work finished");
    Ok(())
}
