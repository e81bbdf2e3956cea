//! Frame Loop Tests
//!
//! Tests for:
//! - Surface error classification
//! - FrameOutcome helpers
//! - FrameStats counting

use std::time::{Duration, Instant};

use bringup::app::FrameStats;
use bringup::gpu::frame::classify_surface_error;
use bringup::gpu::{FrameAction, FrameOutcome};
use wgpu::SurfaceError;

// ============================================================================
// Surface errors
// ============================================================================

#[test]
fn timeouts_skip_the_frame() {
    assert_eq!(classify_surface_error(&SurfaceError::Timeout), FrameAction::Skip);
}

#[test]
fn outdated_and_lost_surfaces_are_reconfigured() {
    assert_eq!(classify_surface_error(&SurfaceError::Outdated), FrameAction::Reconfigure);
    assert_eq!(classify_surface_error(&SurfaceError::Lost), FrameAction::Reconfigure);
}

#[test]
fn out_of_memory_exits() {
    assert_eq!(classify_surface_error(&SurfaceError::OutOfMemory), FrameAction::Exit);
}

// ============================================================================
// FrameOutcome
// ============================================================================

#[test]
fn outcome_helpers() {
    assert!(!FrameOutcome::Presented.needs_reconfigure());
    assert!(FrameOutcome::PresentedSuboptimal.needs_reconfigure());
    assert!(FrameOutcome::Skipped(FrameAction::Reconfigure).needs_reconfigure());
    assert!(!FrameOutcome::Skipped(FrameAction::Skip).needs_reconfigure());

    assert!(FrameOutcome::Skipped(FrameAction::Exit).should_exit());
    assert!(!FrameOutcome::Presented.should_exit());
    assert!(!FrameOutcome::Skipped(FrameAction::Skip).should_exit());
}

// ============================================================================
// FrameStats
// ============================================================================

#[test]
fn stats_report_nothing_within_the_first_second() {
    let start = Instant::now();
    let mut stats = FrameStats::starting_at(start);

    for i in 1..=10 {
        assert_eq!(stats.update_at(start + Duration::from_millis(i * 16)), None);
    }
    assert_eq!(stats.total_frames(), 10);
    assert!(stats.current_fps.abs() < f32::EPSILON);
}

#[test]
fn stats_report_fps_once_a_second_has_passed() {
    let start = Instant::now();
    let mut stats = FrameStats::starting_at(start);

    for i in 1..60 {
        assert_eq!(stats.update_at(start + Duration::from_millis(i * 10)), None);
    }
    let fps = stats.update_at(start + Duration::from_secs(1)).unwrap();
    assert!((fps - 60.0).abs() < 0.01, "fps = {fps}");
    assert!((stats.current_fps - fps).abs() < f32::EPSILON);

    // The window restarts after each report
    assert_eq!(stats.update_at(start + Duration::from_millis(1010)), None);
    assert_eq!(stats.total_frames(), 61);
}
