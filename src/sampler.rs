//! Strided frame sampling.
//!
//! [`SamplePlan`] describes a half-open frame range stepped by a fixed
//! stride; [`sample_frames`] decodes the selected frames, scales them to the
//! resize target when one applies, and returns them in temporal order as
//! [`image::DynamicImage`] values.
//!
//! Individual frames that fail to decode are skipped without surfacing an
//! error, so the returned sequence may be shorter than
//! [`SamplePlan::nominal_count`].

use std::path::Path;

use ffmpeg_next::{
    Rational,
    codec::context::Context as CodecContext,
    format::Pixel,
    frame::Video as VideoFrame,
    media::Type,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{
    aspect::{AspectRatio, resize_for_width},
    config::ClipOptions,
    error::GifClipError,
    probe::stream_frame_rate,
};

/// A half-open frame index range `[start_frame, stop_frame)` stepped by
/// `stride`.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct SamplePlan {
    /// First frame index to sample (inclusive).
    pub start_frame: u64,
    /// End of the sampled range (exclusive).
    pub stop_frame: u64,
    /// Number of frame indices advanced between consecutive samples.
    pub stride: u64,
}

impl SamplePlan {
    /// Iterate the frame indices selected by this plan, in ascending order.
    pub fn frame_numbers(&self) -> std::iter::StepBy<std::ops::Range<u64>> {
        let stride = self.stride.max(1) as usize;
        (self.start_frame..self.stop_frame).step_by(stride)
    }

    /// Number of indices the plan selects: `ceil((stop - start) / stride)`.
    pub fn nominal_count(&self) -> u64 {
        let span = self.stop_frame.saturating_sub(self.start_frame);
        span.div_ceil(self.stride.max(1))
    }
}

/// Decode the frames selected by `plan` from the video at `path`.
///
/// See [`sample_frames_with`] for the progress-reporting variant.
///
/// # Errors
///
/// Fails only when the file cannot be opened, has no video stream, or
/// reports a zero frame rate. Per-frame decode failures are skipped
/// silently; an all-failures run returns `Ok` with an empty vector.
pub fn sample_frames<P: AsRef<Path>>(
    path: P,
    plan: &SamplePlan,
    options: &ClipOptions,
) -> Result<Vec<DynamicImage>, GifClipError> {
    sample_frames_with(path, plan, options, |_, _| {})
}

/// Decode the frames selected by `plan`, invoking `on_frame` with
/// `(sampled_so_far, nominal_total)` after each successfully decoded frame.
///
/// The demuxer and decoder are scoped to this call and dropped on every
/// return path.
///
/// # Errors
///
/// See [`sample_frames`].
pub fn sample_frames_with<P, F>(
    path: P,
    plan: &SamplePlan,
    options: &ClipOptions,
    mut on_frame: F,
) -> Result<Vec<DynamicImage>, GifClipError>
where
    P: AsRef<Path>,
    F: FnMut(u64, u64),
{
    let path = path.as_ref();

    ffmpeg_next::init().map_err(|error| GifClipError::FileOpen {
        path: path.to_path_buf(),
        reason: format!("FFmpeg initialisation failed: {error}"),
    })?;

    let mut input_context =
        ffmpeg_next::format::input(&path).map_err(|error| GifClipError::FileOpen {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

    let (video_stream_index, time_base, frames_per_second, mut decoder) = {
        let stream = input_context
            .streams()
            .best(Type::Video)
            .ok_or(GifClipError::NoVideoStream)?;

        let frames_per_second = stream_frame_rate(&stream);
        if frames_per_second <= 0.0 {
            return Err(GifClipError::InvalidFrameRate);
        }

        let decoder_context = CodecContext::from_parameters(stream.parameters())?;
        let decoder = decoder_context.decoder().video()?;
        (stream.index(), stream.time_base(), frames_per_second, decoder)
    };

    // Resize target is computed once from the native geometry.
    let source_width = decoder.width();
    let source_height = decoder.height();
    let aspect = AspectRatio::of(source_width, source_height);
    let target = resize_for_width(aspect, source_width, options.max_width);
    let (output_width, output_height) = target.unwrap_or((source_width, source_height));

    log::debug!(
        "Sampling [{}, {}) stride {} from {} ({source_width}x{source_height} -> {output_width}x{output_height})",
        plan.start_frame,
        plan.stop_frame,
        plan.stride,
        path.display(),
    );

    // One scaler pass handles both the resize and the conversion from the
    // decoder's native pixel layout to RGB display order.
    let mut scaler = ScalingContext::get(
        decoder.format(),
        source_width,
        source_height,
        Pixel::RGB24,
        output_width,
        output_height,
        ScalingFlags::BILINEAR,
    )?;

    let targets: Vec<u64> = plan.frame_numbers().collect();
    let nominal_total = plan.nominal_count();
    let mut frames: Vec<DynamicImage> = Vec::with_capacity(targets.len());

    if targets.is_empty() {
        return Ok(frames);
    }

    // Seek to the first target, then decode forward matching targets in
    // ascending order (the stream is already sorted the way we need).
    let first_timestamp =
        frame_number_to_stream_timestamp(targets[0], frames_per_second, time_base);
    if let Err(error) = input_context.seek(first_timestamp, ..first_timestamp) {
        log::debug!("Seek to frame {} failed: {error}", targets[0]);
    }

    let mut target_index = 0;
    let mut decoded_frame = VideoFrame::empty();
    let mut rgb_frame = VideoFrame::empty();

    for (stream, packet) in input_context.packets() {
        if target_index >= targets.len() {
            break;
        }
        if stream.index() != video_stream_index {
            continue;
        }

        // A packet the decoder rejects simply loses the frames it carried.
        if let Err(error) = decoder.send_packet(&packet) {
            log::debug!("Dropping undecodable packet: {error}");
            continue;
        }

        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            if target_index >= targets.len() {
                break;
            }

            let pts = decoded_frame.pts().unwrap_or(0);
            let current = pts_to_frame_number(pts, time_base, frames_per_second);

            // Targets the seek landed past can never be produced.
            while target_index < targets.len() && targets[target_index] < current {
                target_index += 1;
            }

            if target_index < targets.len() && current == targets[target_index] {
                match scale_to_image(&mut scaler, &decoded_frame, &mut rgb_frame) {
                    Some(image) => {
                        frames.push(image);
                        on_frame(frames.len() as u64, nominal_total);
                    }
                    None => log::debug!("Skipping frame {current}: scale/convert failed"),
                }
                target_index += 1;
            }
        }
    }

    // Flush the decoder for any targets still pending at end of stream.
    if target_index < targets.len() && decoder.send_eof().is_ok() {
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            if target_index >= targets.len() {
                break;
            }

            let pts = decoded_frame.pts().unwrap_or(0);
            let current = pts_to_frame_number(pts, time_base, frames_per_second);

            while target_index < targets.len() && targets[target_index] < current {
                target_index += 1;
            }

            if target_index < targets.len() && current == targets[target_index] {
                match scale_to_image(&mut scaler, &decoded_frame, &mut rgb_frame) {
                    Some(image) => {
                        frames.push(image);
                        on_frame(frames.len() as u64, nominal_total);
                    }
                    None => log::debug!("Skipping frame {current}: scale/convert failed"),
                }
                target_index += 1;
            }
        }
    }

    log::debug!(
        "Sampled {} of {} planned frames from {}",
        frames.len(),
        nominal_total,
        path.display(),
    );

    Ok(frames)
}

/// Run the scaler and convert the result to a [`DynamicImage`].
///
/// Returns `None` on any failure; the sampler drops such frames.
fn scale_to_image(
    scaler: &mut ScalingContext,
    decoded_frame: &VideoFrame,
    rgb_frame: &mut VideoFrame,
) -> Option<DynamicImage> {
    if let Err(error) = scaler.run(decoded_frame, rgb_frame) {
        log::debug!("Scaler failed: {error}");
        return None;
    }
    let width = rgb_frame.width();
    let height = rgb_frame.height();
    let buffer = frame_to_rgb_buffer(rgb_frame, width, height);
    RgbImage::from_raw(width, height, buffer).map(DynamicImage::ImageRgb8)
}

/// Copy pixel data from an FFmpeg video frame into a tightly-packed RGB
/// buffer, stripping any per-row stride padding.
fn frame_to_rgb_buffer(video_frame: &VideoFrame, width: u32, height: u32) -> Vec<u8> {
    let stride = video_frame.stride(0);
    let expected_stride = (width as usize) * 3;
    let data = video_frame.data(0);

    if stride == expected_stride {
        data[..expected_stride * (height as usize)].to_vec()
    } else {
        let mut buffer = Vec::with_capacity(expected_stride * (height as usize));
        for row in 0..(height as usize) {
            let row_start = row * stride;
            buffer.extend_from_slice(&data[row_start..row_start + expected_stride]);
        }
        buffer
    }
}

/// Convert a frame number to a timestamp in the stream's time base.
fn frame_number_to_stream_timestamp(
    frame_number: u64,
    frames_per_second: f64,
    time_base: Rational,
) -> i64 {
    let seconds = frame_number as f64 / frames_per_second;
    let numerator = time_base.numerator() as f64;
    let denominator = time_base.denominator() as f64;
    (seconds * denominator / numerator) as i64
}

/// Rescale a PTS value to a frame number.
fn pts_to_frame_number(pts: i64, time_base: Rational, frames_per_second: f64) -> u64 {
    let seconds = pts as f64 * time_base.numerator() as f64 / time_base.denominator() as f64;
    (seconds * frames_per_second) as u64
}
