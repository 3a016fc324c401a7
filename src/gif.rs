//! Animated GIF encoding.
//!
//! Writes an ordered frame sequence as a single looping GIF file. The first
//! frame anchors the output dimensions; the remaining frames are appended in
//! order with the format's default inter-frame delay.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use gif::{Encoder, Frame, Repeat};
use image::DynamicImage;

use crate::error::GifClipError;

/// Map an output base name to the file path the encoder writes.
pub fn output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.gif"))
}

/// Encode a sequence of frames as an infinitely looping GIF at `path`.
///
/// Frames are quantized to a 256-colour palette using the `gif` crate's
/// built-in quantiser. `frame_rate` is accepted for interface parity with
/// the sampling stage but does not influence playback timing; frames carry
/// the format's default delay.
///
/// Every frame must share the geometry of the first (the base image); the
/// sampler guarantees this for its own output.
///
/// # Errors
///
/// - [`GifClipError::EmptyFrameSequence`] if `frames` is empty — there is no
///   base image to anchor the write.
/// - [`GifClipError::GifEncodeError`] if a frame's dimensions differ from
///   the base image's, if the file cannot be created, or if a frame cannot
///   be written.
pub fn write_gif<P: AsRef<Path>>(
    path: P,
    frames: &[DynamicImage],
    frame_rate: u32,
) -> Result<(), GifClipError> {
    let path = path.as_ref();
    log::debug!(
        "Encoding {} frames to GIF file {} (nominal rate {frame_rate})",
        frames.len(),
        path.display(),
    );

    let first = frames.first().ok_or(GifClipError::EmptyFrameSequence)?;
    let base_width = first.width();
    let base_height = first.height();

    if let Some(mismatch) = frames
        .iter()
        .find(|f| f.width() != base_width || f.height() != base_height)
    {
        return Err(GifClipError::GifEncodeError(format!(
            "Frame size {}x{} does not match the base image size {base_width}x{base_height}",
            mismatch.width(),
            mismatch.height(),
        )));
    }

    let width = base_width as u16;
    let height = base_height as u16;

    let file = File::create(path)
        .map_err(|e| GifClipError::GifEncodeError(format!("Failed to create GIF file: {e}")))?;

    let mut encoder = Encoder::new(file, width, height, &[])
        .map_err(|e| GifClipError::GifEncodeError(format!("Failed to create GIF encoder: {e}")))?;

    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| GifClipError::GifEncodeError(format!("Failed to set GIF repeat: {e}")))?;

    for image in frames {
        let rgba = image.to_rgba8();
        let mut pixels = rgba.into_raw();

        let gif_frame = Frame::from_rgba_speed(width, height, &mut pixels, 10);
        encoder
            .write_frame(&gif_frame)
            .map_err(|e| GifClipError::GifEncodeError(format!("Failed to write GIF frame: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::output_path;

    #[test]
    fn output_path_appends_gif_extension() {
        assert_eq!(output_path("clip"), std::path::PathBuf::from("clip.gif"));
        assert_eq!(
            output_path("out/my-clip"),
            std::path::PathBuf::from("out/my-clip.gif"),
        );
    }
}
