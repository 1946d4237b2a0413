//! File storage for uploaded images and videos.
//!
//! Files live under a single root directory that the HTTP layer also serves
//! statically. Database rows keep paths relative to that root, e.g.
//! `carousel/3f0c….jpg`.

use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::ffmpeg::FfmpegError;
use crate::imaging;
use crate::media::{is_external_url, PLACEHOLDER_IMAGE};
use crate::thumbnail;

/// Default image ceiling: 10 MiB.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Default video ceiling: 100 MiB.
pub const DEFAULT_MAX_VIDEO_BYTES: usize = 100 * 1024 * 1024;

/// Video content types accepted for upload.
pub const ALLOWED_VIDEO_TYPES: &[&str] = &[
    "video/mp4",
    "video/webm",
    "video/ogg",
    "video/quicktime",
    "video/x-msvideo",
];

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File too large. Maximum size is {limit} bytes")]
    TooLarge { limit: usize },

    #[error("{0}")]
    UnsupportedType(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Ffmpeg(#[from] FfmpegError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Size ceilings applied before anything is written to disk.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_image_bytes: usize,
    pub max_video_bytes: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            max_video_bytes: DEFAULT_MAX_VIDEO_BYTES,
        }
    }
}

/// A file received from a client, fully buffered.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Upload directory with the size and type rules for stored files.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    limits: UploadLimits,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, limits: UploadLimits) -> Self {
        Self {
            root: root.into(),
            limits,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn limits(&self) -> UploadLimits {
        self.limits
    }

    /// Create the root directory if needed.
    pub async fn ensure_root(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Absolute location of a stored relative path.
    ///
    /// Absolute paths and parent-directory components are rejected so a
    /// stored reference can never escape the root.
    pub fn resolve(&self, rel: &str) -> Result<PathBuf, UploadError> {
        let path = Path::new(rel);
        let escapes = rel.is_empty()
            || path
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(UploadError::InvalidPath(rel.to_string()));
        }
        Ok(self.root.join(path))
    }

    async fn ensure_subdir(&self, subdir: &str) -> Result<PathBuf, UploadError> {
        let dir = self.resolve(subdir)?;
        tokio::fs::create_dir_all(&dir).await?;
        Ok(dir)
    }

    /// Store an image as a normalised JPEG and return its relative path.
    pub async fn save_image(&self, file: IncomingFile, subdir: &str) -> Result<String, UploadError> {
        if file.bytes.len() > self.limits.max_image_bytes {
            return Err(UploadError::TooLarge {
                limit: self.limits.max_image_bytes,
            });
        }
        let is_image = file
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            return Err(UploadError::UnsupportedType(
                "File must be an image".to_string(),
            ));
        }

        let dir = self.ensure_subdir(subdir).await?;
        let file_name = format!("{}.jpg", Uuid::new_v4());
        let dest = dir.join(&file_name);
        tokio::fs::write(&dest, &file.bytes).await?;

        let target = dest.clone();
        let reencoded = tokio::task::spawn_blocking(move || -> Result<(), UploadError> {
            let jpeg = imaging::normalize_to_jpeg(&file.bytes)
                .map_err(|e| UploadError::InvalidImage(e.to_string()))?;
            std::fs::write(&target, jpeg)?;
            Ok(())
        })
        .await
        .map_err(|e| UploadError::Io(std::io::Error::other(e)))?;

        if let Err(e) = reencoded {
            let _ = tokio::fs::remove_file(&dest).await;
            return Err(e);
        }

        Ok(format!("{subdir}/{file_name}"))
    }

    /// Store a video as uploaded and return its relative path.
    pub async fn save_video(&self, file: IncomingFile, subdir: &str) -> Result<String, UploadError> {
        if file.bytes.len() > self.limits.max_video_bytes {
            return Err(UploadError::TooLarge {
                limit: self.limits.max_video_bytes,
            });
        }
        let content_type = file.content_type.as_deref().unwrap_or_default();
        if !ALLOWED_VIDEO_TYPES.contains(&content_type) {
            return Err(UploadError::UnsupportedType(format!(
                "Invalid video type. Allowed types: {}",
                ALLOWED_VIDEO_TYPES.join(", ")
            )));
        }

        let dir = self.ensure_subdir(subdir).await?;
        let ext = video_extension(file.file_name.as_deref());
        let file_name = format!("{}.{ext}", Uuid::new_v4());
        tokio::fs::write(dir.join(&file_name), &file.bytes).await?;

        Ok(format!("{subdir}/{file_name}"))
    }

    /// Extract a poster frame from a stored video into `subdir`.
    pub async fn extract_video_thumbnail(
        &self,
        video_rel: &str,
        subdir: &str,
    ) -> Result<String, UploadError> {
        let video = self.resolve(video_rel)?;
        if !tokio::fs::try_exists(&video).await.unwrap_or(false) {
            return Err(UploadError::NotFound(video_rel.to_string()));
        }

        let dir = self.ensure_subdir(subdir).await?;
        let file_name = format!("{}.jpg", Uuid::new_v4());
        thumbnail::render_thumbnail(&video, &dir.join(&file_name)).await?;

        Ok(format!("{subdir}/{file_name}"))
    }

    /// Like [`extract_video_thumbnail`](Self::extract_video_thumbnail) but
    /// falls back to the shared placeholder.
    pub async fn thumbnail_or_placeholder(&self, video_rel: &str, subdir: &str) -> String {
        match self.extract_video_thumbnail(video_rel, subdir).await {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(video = %video_rel, error = %e, "Thumbnail extraction failed, using placeholder");
                PLACEHOLDER_IMAGE.to_string()
            }
        }
    }

    /// Copy a file from outside the store to `subdir/file_name`.
    pub async fn copy_into(
        &self,
        source: &Path,
        subdir: &str,
        file_name: &str,
    ) -> Result<String, UploadError> {
        let rel = format!("{subdir}/{file_name}");
        let dest = self.resolve(&rel)?;
        self.ensure_subdir(subdir).await?;
        tokio::fs::copy(source, &dest).await?;
        Ok(rel)
    }

    /// Remove a stored file. Returns whether anything was deleted.
    ///
    /// The placeholder and external URLs are never touched.
    pub async fn delete(&self, rel: &str) -> bool {
        if rel.is_empty() || rel == PLACEHOLDER_IMAGE || is_external_url(rel) {
            return false;
        }
        let path = match self.resolve(rel) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(path = %rel, error = %e, "Refusing to delete file");
                return false;
            }
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!(path = %rel, error = %e, "Failed to delete file");
                false
            }
        }
    }
}

/// Extension kept for a stored video, from the client's file name.
fn video_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "mp4".to_string())
}
