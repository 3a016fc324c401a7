//! Error types for the `gifclip` crate.
//!
//! This module defines [`GifClipError`], the unified error type returned by
//! all fallible operations in the crate. Variants carry enough context (file
//! paths, duration bounds, upstream messages) to diagnose a failure without
//! additional logging at the call site.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `gifclip` operations.
///
/// Every public method that can fail returns `Result<T, GifClipError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GifClipError {
    /// The video file could not be opened.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::VideoProbe::probe`] or
        /// [`crate::sample_frames`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// The video is too short to convert.
    #[error("Video is too short: {seconds:.2}s (minimum is {minimum}s)")]
    DurationTooShort {
        /// Computed duration of the video.
        seconds: f64,
        /// Lower bound of the accepted duration window.
        minimum: f64,
    },

    /// The video is too long to convert.
    #[error("Video is too long: {seconds:.2}s (maximum is {maximum}s)")]
    DurationTooLong {
        /// Computed duration of the video.
        seconds: f64,
        /// Upper bound of the accepted duration window.
        maximum: f64,
    },

    /// The video stream reports a frame rate of zero.
    #[error("Video stream reports an invalid frame rate")]
    InvalidFrameRate,

    /// GIF encoding was invoked with zero frames.
    #[error("No frames were sampled; cannot encode an empty GIF")]
    EmptyFrameSequence,

    /// GIF encoding failed.
    #[error("GIF encoding error: {0}")]
    GifEncodeError(String),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate during frame conversion.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}

impl From<FfmpegError> for GifClipError {
    fn from(error: FfmpegError) -> Self {
        GifClipError::FfmpegError(error.to_string())
    }
}
