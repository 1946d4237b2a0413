//! `ffprobe` / `ffmpeg` child-process wrappers used for video posters.
//!
//! Both binaries must be on `PATH`. Nothing here decodes media in-process.

use std::path::Path;
use std::process::Output;

use serde::Deserialize;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum FfmpegError {
    #[error("ffprobe/ffmpeg binary not found: {0}")]
    NotFound(std::io::Error),

    #[error("ffprobe/ffmpeg execution failed (exit code {exit_code:?}): {stderr}")]
    ExecutionFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("failed to parse ffprobe output: {0}")]
    ParseError(String),

    #[error("video file not found: {0}")]
    VideoNotFound(String),
}

/// Timing facts about the first video stream of a file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInfo {
    /// Frames per second, `0.0` when unknown.
    pub fps: f64,
    /// Frame count, reported or estimated from duration; `0` when unknown.
    pub total_frames: i64,
}

#[derive(Debug, Deserialize)]
struct ProbeReport {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    #[serde(default)]
    format: ProbeFormat,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
    /// `"30/1"`, `"24000/1001"`, ...
    r_frame_rate: Option<String>,
    duration: Option<String>,
    nb_frames: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

fn ensure_exists(path: &Path) -> Result<(), FfmpegError> {
    if path.exists() {
        Ok(())
    } else {
        Err(FfmpegError::VideoNotFound(path.display().to_string()))
    }
}

async fn run(command: &mut Command) -> Result<Output, FfmpegError> {
    let output = command.output().await.map_err(FfmpegError::NotFound)?;
    if !output.status.success() {
        return Err(FfmpegError::ExecutionFailed {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(output)
}

/// Probe `path` for frame rate and frame count.
pub async fn probe_video(path: &Path) -> Result<VideoInfo, FfmpegError> {
    ensure_exists(path)?;

    let output = run(
        Command::new("ffprobe")
            .args(["-v", "quiet", "-print_format", "json"])
            .args(["-show_format", "-show_streams"])
            .arg(path),
    )
    .await?;

    parse_probe(&String::from_utf8_lossy(&output.stdout))
}

/// Decode the frame at `timestamp_secs` of `video` into a PNG at `output`,
/// at the video's native resolution.
pub async fn extract_frame(
    video: &Path,
    output: &Path,
    timestamp_secs: f64,
) -> Result<(), FfmpegError> {
    ensure_exists(video)?;

    run(
        Command::new("ffmpeg")
            .args(["-y", "-v", "error", "-ss", &format!("{timestamp_secs:.3}"), "-i"])
            .arg(video)
            .args(["-frames:v", "1", "-f", "image2", "-vcodec", "png"])
            .arg(output),
    )
    .await?;

    // ffmpeg exits 0 when seeking past the end and writes nothing.
    if !output.exists() {
        return Err(FfmpegError::ExecutionFailed {
            exit_code: Some(0),
            stderr: "no frame decoded at the requested position".into(),
        });
    }
    Ok(())
}

/// Turn ffprobe's JSON report into [`VideoInfo`].
///
/// The frame count comes from `nb_frames` when the container reports it,
/// otherwise from duration times frame rate. Container duration wins over
/// stream duration.
fn parse_probe(json: &str) -> Result<VideoInfo, FfmpegError> {
    let report: ProbeReport =
        serde_json::from_str(json).map_err(|e| FfmpegError::ParseError(format!("{e}: {json}")))?;

    let Some(stream) = report
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
    else {
        return Ok(VideoInfo {
            fps: 0.0,
            total_frames: 0,
        });
    };

    let fps = stream.r_frame_rate.as_deref().map(parse_rate).unwrap_or(0.0);
    let reported = stream
        .nb_frames
        .as_deref()
        .and_then(|n| n.parse::<i64>().ok());
    let total_frames = reported.unwrap_or_else(|| {
        let duration = report
            .format
            .duration
            .as_deref()
            .or(stream.duration.as_deref())
            .and_then(|d| d.parse::<f64>().ok())
            .unwrap_or(0.0);
        if duration > 0.0 && fps > 0.0 {
            (duration * fps).round() as i64
        } else {
            0
        }
    });

    Ok(VideoInfo { fps, total_frames })
}

/// `"num/den"` or a plain number; `0.0` for anything unusable.
fn parse_rate(raw: &str) -> f64 {
    match raw.split_once('/') {
        Some((num, den)) => {
            let num = num.parse::<f64>().unwrap_or(0.0);
            let den = den.parse::<f64>().unwrap_or(0.0);
            if den > 0.0 {
                num / den
            } else {
                0.0
            }
        }
        None => raw.parse::<f64>().unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn rates() {
        assert_eq!(parse_rate("30/1"), 30.0);
        assert!((parse_rate("24000/1001") - 23.976).abs() < 0.01);
        assert_eq!(parse_rate("25"), 25.0);
        assert_eq!(parse_rate("30/0"), 0.0);
        assert_eq!(parse_rate("n/a"), 0.0);
    }

    #[test]
    fn reported_frame_count_is_used() {
        let info = parse_probe(
            r#"{"streams":[{"codec_type":"audio"},
                {"codec_type":"video","r_frame_rate":"30/1","nb_frames":"1800"}],
               "format":{"duration":"99"}}"#,
        )
        .unwrap();
        assert_eq!(info, VideoInfo { fps: 30.0, total_frames: 1800 });
    }

    #[test]
    fn frame_count_estimated_from_container_duration() {
        let info = parse_probe(
            r#"{"streams":[{"codec_type":"video","r_frame_rate":"25/1","duration":"4"}],
               "format":{"duration":"10"}}"#,
        )
        .unwrap();
        assert_eq!(info.total_frames, 250);
    }

    #[test]
    fn stream_duration_is_the_fallback() {
        let info = parse_probe(
            r#"{"streams":[{"codec_type":"video","r_frame_rate":"25/1","duration":"4"}],
               "format":{}}"#,
        )
        .unwrap();
        assert_eq!(info.total_frames, 100);
    }

    #[test]
    fn audio_only_files_have_no_frames() {
        let info = parse_probe(r#"{"streams":[{"codec_type":"audio"}],"format":{}}"#).unwrap();
        assert_eq!(info, VideoInfo { fps: 0.0, total_frames: 0 });
    }

    #[test]
    fn garbage_output_is_a_parse_error() {
        assert_matches!(parse_probe("not json"), Err(FfmpegError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_file_is_reported_before_spawning() {
        let result = probe_video(Path::new("/nonexistent/clip.mp4")).await;
        assert_matches!(result, Err(FfmpegError::VideoNotFound(_)));
    }
}
