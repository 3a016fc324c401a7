//! The conversion pipeline.
//!
//! [`make_gif`] runs the four stages in order — probe, duration gate, frame
//! sampling, GIF encoding — with an unconditional early exit at the first
//! failure. There are no retries and no cleanup of partially written output.

use std::path::{Path, PathBuf};

use crate::{
    config::ClipOptions,
    error::GifClipError,
    gif::{output_path, write_gif},
    probe::{VideoInfo, VideoProbe},
    sampler::{SamplePlan, sample_frames_with},
    validation::{check_duration, video_length_seconds},
};

/// Frame rate assumed by the duration and stop-frame computation.
///
/// The probed rate is discarded and this fixed value used in its place, so
/// for sources not actually running at 60 fps the computed duration drifts
/// from the real one accordingly.
pub const NOMINAL_FRAME_RATE: u32 = 60;

/// Compute the sampling plan for a probed video, applying the duration gate.
///
/// The probed rate is discarded; duration and the stop-frame index are
/// computed at [`NOMINAL_FRAME_RATE`].
///
/// # Errors
///
/// [`GifClipError::DurationTooShort`] / [`GifClipError::DurationTooLong`]
/// when the computed duration falls outside the configured window.
pub fn plan_clip(info: &VideoInfo, options: &ClipOptions) -> Result<SamplePlan, GifClipError> {
    let frame_rate = NOMINAL_FRAME_RATE;
    let duration_seconds = video_length_seconds(frame_rate, info.frame_count);
    check_duration(duration_seconds, options)?;

    Ok(SamplePlan {
        start_frame: 0,
        stop_frame: (duration_seconds * f64::from(frame_rate)) as u64,
        stride: options.frame_stride,
    })
}

/// Convert the video at `video_path` into `<name>.gif`.
///
/// Returns the path of the written file. See [`make_gif_with`] for the
/// progress-reporting variant.
///
/// # Errors
///
/// Any probe, validation, sampling, or encoding failure; see
/// [`GifClipError`].
pub fn make_gif<P: AsRef<Path>>(
    video_path: P,
    name: &str,
    options: &ClipOptions,
) -> Result<PathBuf, GifClipError> {
    make_gif_with(video_path, name, options, |_, _| {})
}

/// Convert the video at `video_path` into `<name>.gif`, invoking `on_frame`
/// with `(sampled_so_far, nominal_total)` after each decoded frame.
///
/// # Errors
///
/// See [`make_gif`].
pub fn make_gif_with<P, F>(
    video_path: P,
    name: &str,
    options: &ClipOptions,
    on_frame: F,
) -> Result<PathBuf, GifClipError>
where
    P: AsRef<Path>,
    F: FnMut(u64, u64),
{
    let video_path = video_path.as_ref();

    let info = VideoProbe::probe(video_path)?;
    let plan = plan_clip(&info, options)?;

    log::debug!(
        "Converting {} ({} planned frames) -> {name}.gif",
        video_path.display(),
        plan.nominal_count(),
    );

    let frames = sample_frames_with(video_path, &plan, options, on_frame)?;

    let output = output_path(name);
    write_gif(&output, &frames, NOMINAL_FRAME_RATE)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{NOMINAL_FRAME_RATE, plan_clip};
    use crate::{
        config::ClipOptions, error::GifClipError, probe::VideoInfo, sampler::SamplePlan,
        validation::video_length_seconds,
    };

    fn info_with_frames(frame_count: u64) -> VideoInfo {
        VideoInfo {
            width: 1280,
            height: 720,
            frame_rate: 30,
            frame_count,
        }
    }

    #[test]
    fn plan_rejects_short_clip_before_any_decode() {
        // 180 frames at the nominal 60 fps = 3 seconds.
        let result = plan_clip(&info_with_frames(180), &ClipOptions::new());
        assert!(matches!(result, Err(GifClipError::DurationTooShort { .. })));
    }

    #[test]
    fn plan_rejects_long_clip_before_any_decode() {
        // 2400 frames at the nominal 60 fps = 40 seconds.
        let result = plan_clip(&info_with_frames(2400), &ClipOptions::new());
        assert!(matches!(result, Err(GifClipError::DurationTooLong { .. })));
    }

    #[test]
    fn plan_ignores_probed_rate() {
        // 600 frames reads as 10s at the nominal rate even though the
        // probed rate (30 fps) would make it 20s; both land in the window,
        // but the stop frame must come from the nominal computation.
        let plan = plan_clip(&info_with_frames(600), &ClipOptions::new()).unwrap();
        assert_eq!(plan.start_frame, 0);
        assert_eq!(plan.stop_frame, 600);
        assert_eq!(plan.stride, 10);
    }

    #[test]
    fn stop_frame_recovers_frame_count_at_nominal_rate() {
        // duration = count / 60, stop = duration * 60: the round trip is the
        // frame count for counts divisible by the rate.
        let frame_count = 600;
        let duration = video_length_seconds(NOMINAL_FRAME_RATE, frame_count);
        let stop_frame = (duration * f64::from(NOMINAL_FRAME_RATE)) as u64;
        assert_eq!(stop_frame, frame_count);
    }

    #[test]
    fn ten_second_clip_plans_sixty_samples() {
        let plan = SamplePlan {
            start_frame: 0,
            stop_frame: 600,
            stride: 10,
        };
        assert_eq!(plan.nominal_count(), 60);
    }
}
