//! Poster-frame extraction for uploaded service videos.

use std::path::Path;

use crate::ffmpeg;
use crate::imaging::{encode_jpeg, fit_to_width, JPEG_QUALITY, THUMBNAIL_MAX_WIDTH};
use crate::upload::UploadError;

/// How far into the clip the poster frame is taken, in seconds.
pub const FRAME_TIME_SECS: f64 = 1.0;

/// Share of the clip beyond which the poster frame is never taken, so very
/// short clips still get a representative frame.
pub const MAX_FRAME_FRACTION: f64 = 0.1;

/// Pick the frame index used as the poster.
///
/// The frame `frame_time_secs` into the clip, capped at 10% of its length,
/// and never earlier than frame 1.
pub fn target_frame(fps: f64, total_frames: i64, frame_time_secs: f64) -> i64 {
    let by_time = (frame_time_secs * fps).floor() as i64;
    let by_fraction = (total_frames as f64 * MAX_FRAME_FRACTION).floor() as i64;
    by_time.min(by_fraction).max(1)
}

/// Seek position, in seconds, of `frame` at `fps`.
pub fn frame_timestamp(frame: i64, fps: f64) -> f64 {
    if fps > 0.0 {
        frame as f64 / fps
    } else {
        0.0
    }
}

/// Write a JPEG poster frame for `video` to `output`.
///
/// The frame is decoded by ffmpeg into a temporary PNG next to `output`,
/// then scaled down to [`THUMBNAIL_MAX_WIDTH`] and re-encoded on the blocking
/// pool. The temporary frame is always removed.
pub async fn render_thumbnail(video: &Path, output: &Path) -> Result<(), UploadError> {
    let info = ffmpeg::probe_video(video).await?;
    let frame = target_frame(info.fps, info.total_frames, FRAME_TIME_SECS);
    let timestamp = frame_timestamp(frame, info.fps);

    let frame_png = output.with_extension("frame.png");
    let result = async {
        ffmpeg::extract_frame(video, &frame_png, timestamp).await?;

        let src = frame_png.clone();
        let dest = output.to_path_buf();
        tokio::task::spawn_blocking(move || -> Result<(), UploadError> {
            let decoded =
                image::open(&src).map_err(|e| UploadError::InvalidImage(e.to_string()))?;
            let rgb = image::DynamicImage::ImageRgb8(decoded.to_rgb8());
            let fitted = fit_to_width(rgb, THUMBNAIL_MAX_WIDTH);
            let jpeg = encode_jpeg(&fitted.to_rgb8(), JPEG_QUALITY)
                .map_err(|e| UploadError::InvalidImage(e.to_string()))?;
            std::fs::write(&dest, jpeg)?;
            Ok(())
        })
        .await
        .map_err(|e| UploadError::Io(std::io::Error::other(e)))?
    }
    .await;

    let _ = tokio::fs::remove_file(&frame_png).await;
    result
}
