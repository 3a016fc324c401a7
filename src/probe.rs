//! Lightweight video probing.
//!
//! [`VideoProbe`] opens a video file, reads the stream geometry, frame rate,
//! and frame count, and releases the demuxer before returning. Probing and
//! frame sampling open the file independently; no handle outlives the call
//! that created it.

use std::path::Path;

use ffmpeg_next::{codec::context::Context as CodecContext, media::Type};

use crate::error::GifClipError;

/// Metadata read from a video stream at probe time.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct VideoInfo {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frame rate rounded to the nearest whole frames-per-second.
    pub frame_rate: u32,
    /// Total number of frames in the stream.
    pub frame_count: u64,
}

/// Lightweight video file probe.
///
/// Opens the file, extracts [`VideoInfo`], and immediately drops the
/// demuxer. The result is owned and fully independent of any file handle.
///
/// # Example
///
/// ```no_run
/// use gifclip::VideoProbe;
///
/// let info = VideoProbe::probe("input.mp4")?;
/// println!("{}x{} @ {} fps, {} frames", info.width, info.height, info.frame_rate, info.frame_count);
/// # Ok::<(), gifclip::GifClipError>(())
/// ```
pub struct VideoProbe;

impl VideoProbe {
    /// Probe a video file and return its stream metadata.
    ///
    /// # Errors
    ///
    /// - [`GifClipError::FileOpen`] if the file cannot be opened or
    ///   recognised as a media file.
    /// - [`GifClipError::NoVideoStream`] if the file has no video stream.
    /// - [`GifClipError::InvalidFrameRate`] if the stream reports a zero
    ///   frame rate.
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<VideoInfo, GifClipError> {
        let path = path.as_ref();

        log::debug!("Probing video file: {}", path.display());

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| GifClipError::FileOpen {
            path: path.to_path_buf(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| GifClipError::FileOpen {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;

        let stream = input_context
            .streams()
            .best(Type::Video)
            .ok_or(GifClipError::NoVideoStream)?;

        let decoder_context = CodecContext::from_parameters(stream.parameters())?;
        let decoder = decoder_context.decoder().video()?;
        let width = decoder.width();
        let height = decoder.height();

        let frames_per_second = stream_frame_rate(&stream);
        let frame_rate = frames_per_second.round() as u32;
        if frame_rate == 0 {
            return Err(GifClipError::InvalidFrameRate);
        }

        // Prefer the container's recorded frame count; estimate from the
        // duration when the container does not carry one.
        let frame_count = if stream.frames() > 0 {
            stream.frames() as u64
        } else {
            let duration_seconds = input_context.duration() as f64 / 1_000_000.0;
            (duration_seconds.max(0.0) * frames_per_second) as u64
        };

        log::debug!(
            "Probed {}: {width}x{height} @ {frame_rate} fps, {frame_count} frames",
            path.display(),
        );

        // `input_context` is dropped here, releasing the demuxer.
        Ok(VideoInfo {
            width,
            height,
            frame_rate,
            frame_count,
        })
    }
}

/// Read a stream's frame rate, preferring the average rate and falling back
/// to the nominal rate field.
pub(crate) fn stream_frame_rate(stream: &ffmpeg_next::format::stream::Stream<'_>) -> f64 {
    let average = stream.avg_frame_rate();
    if average.denominator() != 0 && average.numerator() > 0 {
        return f64::from(average.numerator()) / f64::from(average.denominator());
    }
    let nominal = stream.rate();
    if nominal.denominator() != 0 && nominal.numerator() > 0 {
        return f64::from(nominal.numerator()) / f64::from(nominal.denominator());
    }
    0.0
}
