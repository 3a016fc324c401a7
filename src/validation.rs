//! Duration computation and the pre-decode validation gate.
//!
//! The pipeline rejects clips outside a configured duration window before
//! any frame is decoded. Duration is derived purely from the frame count
//! and the nominal frame rate.

use crate::{config::ClipOptions, error::GifClipError};

/// Compute a video's length in seconds from its frame rate and frame count.
///
/// Pure division; the caller must guard against a zero frame rate (see
/// [`GifClipError::InvalidFrameRate`]).
pub fn video_length_seconds(frame_rate: u32, frame_count: u64) -> f64 {
    frame_count as f64 / f64::from(frame_rate)
}

/// Check a duration against the window configured in [`ClipOptions`].
///
/// # Errors
///
/// - [`GifClipError::DurationTooShort`] when `seconds < min_duration`.
/// - [`GifClipError::DurationTooLong`] when `seconds > max_duration`.
pub fn check_duration(seconds: f64, options: &ClipOptions) -> Result<(), GifClipError> {
    if seconds < options.min_duration {
        return Err(GifClipError::DurationTooShort {
            seconds,
            minimum: options.min_duration,
        });
    }
    if seconds > options.max_duration {
        return Err(GifClipError::DurationTooLong {
            seconds,
            maximum: options.max_duration,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_duration, video_length_seconds};
    use crate::config::ClipOptions;

    #[test]
    fn length_is_count_over_rate() {
        assert!((video_length_seconds(60, 600) - 10.0).abs() < f64::EPSILON);
        assert!((video_length_seconds(30, 450) - 15.0).abs() < f64::EPSILON);
        assert!((video_length_seconds(24, 36) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn duration_inside_window_passes() {
        let options = ClipOptions::new();
        assert!(check_duration(5.0, &options).is_ok());
        assert!(check_duration(12.5, &options).is_ok());
        assert!(check_duration(30.0, &options).is_ok());
    }

    #[test]
    fn too_short_is_rejected() {
        let options = ClipOptions::new();
        let error = check_duration(3.0, &options).unwrap_err();
        assert!(
            error.to_string().contains("too short"),
            "unexpected message: {error}",
        );
    }

    #[test]
    fn too_long_is_rejected() {
        let options = ClipOptions::new();
        let error = check_duration(40.0, &options).unwrap_err();
        assert!(
            error.to_string().contains("too long"),
            "unexpected message: {error}",
        );
    }

    #[test]
    fn custom_window_is_honored() {
        let options = ClipOptions::new().with_duration_bounds(1.0, 2.0);
        assert!(check_duration(1.5, &options).is_ok());
        assert!(check_duration(0.5, &options).is_err());
        assert!(check_duration(2.5, &options).is_err());
    }
}
