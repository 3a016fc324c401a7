//! End-to-end pipeline tests.
//!
//! Tests that need a real video run against fixtures under
//! `tests/fixtures/` and are skipped when the fixtures are absent, matching
//! how decode-dependent behaviour is verified elsewhere in the suite.

use std::path::Path;

use gifclip::{ClipOptions, GifClipError, SamplePlan, VideoProbe, make_gif, sample_frames};

/// A ~10 second clip at a detectable frame rate.
const SAMPLE_VIDEO: &str = "tests/fixtures/sample_video.mp4";
/// A clip shorter than the 5 second minimum.
const SHORT_VIDEO: &str = "tests/fixtures/sample_short.mp4";
/// A clip longer than the 30 second maximum.
const LONG_VIDEO: &str = "tests/fixtures/sample_long.mp4";

#[test]
fn valid_clip_produces_gif() {
    if !Path::new(SAMPLE_VIDEO).exists() {
        return;
    }

    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let output_base = temporary_directory.path().join("clip");
    let output_name = output_base.to_str().expect("temp path is not UTF-8");

    let output = make_gif(SAMPLE_VIDEO, output_name, &ClipOptions::new())
        .expect("Conversion failed for a valid clip");

    assert_eq!(output.extension().and_then(|e| e.to_str()), Some("gif"));
    let bytes = std::fs::read(&output).expect("Output file missing");
    assert!(bytes.starts_with(b"GIF89a"));
}

#[test]
fn short_clip_is_rejected() {
    if !Path::new(SHORT_VIDEO).exists() {
        return;
    }

    let result = make_gif(SHORT_VIDEO, "unused", &ClipOptions::new());
    assert!(
        matches!(result, Err(GifClipError::DurationTooShort { .. })),
        "Expected a too-short rejection",
    );
}

#[test]
fn long_clip_is_rejected() {
    if !Path::new(LONG_VIDEO).exists() {
        return;
    }

    let result = make_gif(LONG_VIDEO, "unused", &ClipOptions::new());
    assert!(
        matches!(result, Err(GifClipError::DurationTooLong { .. })),
        "Expected a too-long rejection",
    );
}

#[test]
fn sampled_sequence_respects_plan_bound() {
    if !Path::new(SAMPLE_VIDEO).exists() {
        return;
    }

    let info = VideoProbe::probe(SAMPLE_VIDEO).expect("Probe failed");
    let plan = SamplePlan {
        start_frame: 0,
        stop_frame: info.frame_count,
        stride: 10,
    };

    let frames =
        sample_frames(SAMPLE_VIDEO, &plan, &ClipOptions::new()).expect("Sampling failed");

    assert!(
        frames.len() as u64 <= plan.nominal_count(),
        "Sampled {} frames, plan allows at most {}",
        frames.len(),
        plan.nominal_count(),
    );
    assert!(!frames.is_empty(), "Expected at least one decoded frame");

    // Every frame shares the geometry of the first (the encoder's base image).
    let width = frames[0].width();
    let height = frames[0].height();
    assert!(frames.iter().all(|f| f.width() == width && f.height() == height));
}

#[test]
fn narrow_source_keeps_native_size() {
    if !Path::new(SAMPLE_VIDEO).exists() {
        return;
    }

    let info = VideoProbe::probe(SAMPLE_VIDEO).expect("Probe failed");
    if info.width >= 1920 {
        return;
    }

    let plan = SamplePlan {
        start_frame: 0,
        stop_frame: 30,
        stride: 10,
    };
    let frames =
        sample_frames(SAMPLE_VIDEO, &plan, &ClipOptions::new()).expect("Sampling failed");

    if let Some(frame) = frames.first() {
        assert_eq!(frame.width(), info.width);
        assert_eq!(frame.height(), info.height);
    }
}
