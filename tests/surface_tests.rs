//! Surface Configuration Tests
//!
//! Tests for:
//! - Format, present mode and alpha mode selection
//! - Surface configuration building and size clamping

use bringup::base::{Error, SurfaceSettings};
use bringup::gpu::SurfaceSupport;
use bringup::gpu::surface::{
    choose_alpha_mode, choose_format, choose_present_mode, is_presentable, surface_configuration,
};
use wgpu::{CompositeAlphaMode, PresentMode, TextureFormat};

fn desktop_support() -> SurfaceSupport {
    SurfaceSupport {
        formats: vec![TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb],
        present_modes: vec![PresentMode::Fifo, PresentMode::Immediate, PresentMode::Mailbox],
        alpha_modes: vec![CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied],
    }
}

// ============================================================================
// Format
// ============================================================================

#[test]
fn srgb_format_is_preferred_when_asked() {
    let formats = desktop_support().formats;
    assert_eq!(choose_format(&formats, true), Some(TextureFormat::Bgra8UnormSrgb));
    assert_eq!(choose_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
}

#[test]
fn first_format_is_used_without_srgb_candidates() {
    let formats = [TextureFormat::Rgba16Float, TextureFormat::Rgb10a2Unorm];
    assert_eq!(choose_format(&formats, true), Some(TextureFormat::Rgba16Float));
    assert_eq!(choose_format(&[], true), None);
}

// ============================================================================
// Present mode
// ============================================================================

#[test]
fn vsync_always_uses_fifo() {
    let modes = desktop_support().present_modes;
    assert_eq!(choose_present_mode(&modes, true), PresentMode::Fifo);
}

#[test]
fn without_vsync_mailbox_beats_immediate() {
    let modes = desktop_support().present_modes;
    assert_eq!(choose_present_mode(&modes, false), PresentMode::Mailbox);
    assert_eq!(
        choose_present_mode(&[PresentMode::Fifo, PresentMode::Immediate], false),
        PresentMode::Immediate
    );
}

#[test]
fn without_vsync_falls_back_to_fifo() {
    assert_eq!(choose_present_mode(&[PresentMode::Fifo], false), PresentMode::Fifo);
    assert_eq!(choose_present_mode(&[], false), PresentMode::Fifo);
}

// ============================================================================
// Alpha mode
// ============================================================================

#[test]
fn alpha_mode_prefers_opaque() {
    assert_eq!(choose_alpha_mode(&desktop_support().alpha_modes), CompositeAlphaMode::Opaque);
    assert_eq!(
        choose_alpha_mode(&[CompositeAlphaMode::PostMultiplied, CompositeAlphaMode::Inherit]),
        CompositeAlphaMode::PostMultiplied
    );
    assert_eq!(choose_alpha_mode(&[]), CompositeAlphaMode::Auto);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn configuration_uses_window_size_and_settings() {
    let settings = SurfaceSettings {
        vsync: false,
        prefer_srgb: true,
        max_frame_latency: 3,
    };
    let config = surface_configuration(&desktop_support(), 640, 480, &settings).unwrap();

    assert_eq!(config.usage, wgpu::TextureUsages::RENDER_ATTACHMENT);
    assert_eq!(config.format, TextureFormat::Bgra8UnormSrgb);
    assert_eq!((config.width, config.height), (640, 480));
    assert_eq!(config.present_mode, PresentMode::Mailbox);
    assert_eq!(config.alpha_mode, CompositeAlphaMode::Opaque);
    assert_eq!(config.desired_maximum_frame_latency, 3);
    assert!(config.view_formats.is_empty());
}

#[test]
fn configuration_clamps_zero_size_to_one() {
    let config =
        surface_configuration(&desktop_support(), 0, 0, &SurfaceSettings::default()).unwrap();
    assert_eq!((config.width, config.height), (1, 1));
}

#[test]
fn configuration_without_formats_is_unsupported() {
    let support = SurfaceSupport {
        formats: vec![],
        ..desktop_support()
    };
    let result = surface_configuration(&support, 640, 480, &SurfaceSettings::default());
    assert!(matches!(result, Err(Error::SurfaceUnsupported(_))));
}

#[test]
fn minimized_windows_are_not_presentable() {
    assert!(is_presentable(640, 480));
    assert!(is_presentable(1, 1));
    assert!(!is_presentable(0, 480));
    assert!(!is_presentable(640, 0));
    assert!(!is_presentable(0, 0));
}
