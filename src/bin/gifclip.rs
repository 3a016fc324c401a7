use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use gifclip::{
    ClipOptions, DEFAULT_FRAME_STRIDE, DEFAULT_MAX_WIDTH, FfmpegLogLevel, GifClipError,
    NOMINAL_FRAME_RATE, VideoProbe, output_path, plan_clip, sample_frames_with,
    set_ffmpeg_log_level, write_gif,
};
use indicatif::{ProgressBar, ProgressStyle};

const CLI_AFTER_HELP: &str = "Examples:\n  gifclip input.mp4 --name my-clip\n  gifclip input.mp4 -n my-clip --max-width 1280 --progress\n  gifclip input.mp4 -n my-clip --log-level quiet";

#[derive(Debug, Parser)]
#[command(
    name = "gifclip",
    version,
    about = "Turn a short video clip into a looping animated GIF",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input video path.
    video_path: PathBuf,

    /// Output base name; the file is written as `<name>.gif`.
    #[arg(short = 'n', long)]
    name: String,

    /// Maximum output width in pixels; wider sources are downscaled.
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    max_width: u32,

    /// Sample every Nth frame.
    #[arg(long, default_value_t = DEFAULT_FRAME_STRIDE)]
    stride: u64,

    /// Show a progress bar while frames are decoded.
    #[arg(long)]
    progress: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_log_level(value: &str) -> Option<FfmpegLogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Some(FfmpegLogLevel::Quiet),
        "panic" => Some(FfmpegLogLevel::Panic),
        "fatal" => Some(FfmpegLogLevel::Fatal),
        "error" => Some(FfmpegLogLevel::Error),
        "warning" | "warn" => Some(FfmpegLogLevel::Warning),
        "info" => Some(FfmpegLogLevel::Info),
        "verbose" => Some(FfmpegLogLevel::Verbose),
        "debug" => Some(FfmpegLogLevel::Debug),
        "trace" => Some(FfmpegLogLevel::Trace),
        _ => None,
    }
}

/// Human-readable explanation printed under the `[error]` marker.
fn describe_error(error: &GifClipError) -> String {
    match error {
        GifClipError::FileOpen { .. } => "The video file could not be found or opened".to_string(),
        GifClipError::NoVideoStream => "The file does not contain a video stream".to_string(),
        _ => error.to_string(),
    }
}

fn run(cli: &Cli) -> Result<(), GifClipError> {
    let options = ClipOptions::new()
        .with_max_width(cli.max_width)
        .with_frame_stride(cli.stride);

    let info = VideoProbe::probe(&cli.video_path)?;
    let plan = plan_clip(&info, &options)?;

    // The banner marks the start of decoding; failures before this point
    // print only the error block.
    println!("---- GIF creation started ----");

    let progress_bar = if cli.progress {
        let bar = ProgressBar::new(plan.nominal_count());
        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("##-"));
        }
        Some(bar)
    } else {
        None
    };

    let frames = sample_frames_with(&cli.video_path, &plan, &options, |current, _total| {
        if let Some(bar) = &progress_bar {
            bar.set_position(current);
        }
    })?;

    if let Some(bar) = progress_bar {
        bar.finish_with_message("done");
    }

    write_gif(output_path(&cli.name), &frames, NOMINAL_FRAME_RATE)?;

    println!("---- GIF creation finished ----");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        match parse_log_level(level) {
            Some(parsed) => set_ffmpeg_log_level(parsed),
            None => {
                eprintln!(
                    "{} {}",
                    "warning:".yellow().bold(),
                    format!("unsupported --log-level: {level}").yellow()
                );
            }
        }
    }

    if let Err(error) = run(&cli) {
        println!("{}", "[error]".red().bold());
        println!("{}", describe_error(&error));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, parse_log_level};
    use clap::Parser;

    #[test]
    fn parse_log_level_aliases() {
        assert!(parse_log_level("quiet").is_some());
        assert!(parse_log_level("WARN").is_some());
        assert!(parse_log_level("Trace").is_some());
        assert!(parse_log_level("loud").is_none());
    }

    #[test]
    fn name_flag_is_required() {
        assert!(Cli::try_parse_from(["gifclip", "input.mp4"]).is_err());
        let cli = Cli::try_parse_from(["gifclip", "input.mp4", "--name", "out"]).unwrap();
        assert_eq!(cli.name, "out");
        assert_eq!(cli.max_width, 1920);
        assert_eq!(cli.stride, 10);
    }

    #[test]
    fn short_name_flag_parses() {
        let cli = Cli::try_parse_from(["gifclip", "input.mp4", "-n", "clip"]).unwrap();
        assert_eq!(cli.name, "clip");
    }
}
