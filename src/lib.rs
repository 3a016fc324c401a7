//! # gifclip
//!
//! Turn a short video clip into a looping animated GIF.
//!
//! `gifclip` samples a video at a fixed frame stride, downscales frames that
//! exceed a maximum width while preserving the aspect ratio, and writes the
//! result as an infinitely looping GIF. Decoding is powered by FFmpeg via
//! the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate; encoding
//! uses the [`gif`](https://crates.io/crates/gif) crate.
//!
//! The pipeline is strictly linear: probe the file, reject clips outside the
//! accepted duration window, decode the sampled frames, encode. Nothing is
//! retried and no state persists between stages — every FFmpeg handle is
//! scoped to the call that opened it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gifclip::{ClipOptions, make_gif};
//!
//! let output = make_gif("input.mp4", "my-clip", &ClipOptions::new())?;
//! println!("wrote {}", output.display());
//! # Ok::<(), gifclip::GifClipError>(())
//! ```
//!
//! ## Stage-by-stage
//!
//! ```no_run
//! use gifclip::{ClipOptions, SamplePlan, VideoProbe, sample_frames, write_gif};
//!
//! let options = ClipOptions::new().with_max_width(1280);
//! let info = VideoProbe::probe("input.mp4")?;
//! let plan = SamplePlan { start_frame: 0, stop_frame: info.frame_count, stride: 10 };
//! let frames = sample_frames("input.mp4", &plan, &options)?;
//! write_gif("out.gif", &frames, info.frame_rate)?;
//! # Ok::<(), gifclip::GifClipError>(())
//! ```
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

pub mod aspect;
pub mod config;
pub mod error;
pub mod ffmpeg;
pub mod gif;
pub mod pipeline;
pub mod probe;
pub mod sampler;
pub mod validation;

pub use aspect::{AspectRatio, resize_for_width};
pub use config::{
    ClipOptions, DEFAULT_FRAME_STRIDE, DEFAULT_MAX_DURATION, DEFAULT_MAX_WIDTH,
    DEFAULT_MIN_DURATION,
};
pub use error::GifClipError;
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use gif::{output_path, write_gif};
pub use pipeline::{NOMINAL_FRAME_RATE, make_gif, make_gif_with, plan_clip};
pub use probe::{VideoInfo, VideoProbe};
pub use sampler::{SamplePlan, sample_frames, sample_frames_with};
pub use validation::{check_duration, video_length_seconds};
