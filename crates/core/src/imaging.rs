//! Image re-encoding used for uploads and video thumbnails.
//!
//! Every stored image is normalised to an 8-bit RGB JPEG so the public site
//! only ever serves one format.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, RgbImage};

/// JPEG quality for every image written to the upload store.
pub const JPEG_QUALITY: u8 = 85;

/// Widest thumbnail kept as-is; wider frames are scaled down.
pub const THUMBNAIL_MAX_WIDTH: u32 = 800;

/// Encode an RGB buffer as JPEG at the given quality.
pub fn encode_jpeg(rgb: &RgbImage, quality: u8) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode_image(rgb)?;
    Ok(buf)
}

/// Decode arbitrary image bytes and re-encode them as a normalised JPEG.
///
/// Alpha and palette images are flattened to RGB.
pub fn normalize_to_jpeg(bytes: &[u8]) -> Result<Vec<u8>, ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    encode_jpeg(&decoded.to_rgb8(), JPEG_QUALITY)
}

/// Scale `img` down to `max_width` keeping its aspect ratio. Narrower images
/// are returned unchanged.
pub fn fit_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    if img.width() <= max_width {
        return img;
    }
    let ratio = f64::from(max_width) / f64::from(img.width());
    let height = ((f64::from(img.height()) * ratio) as u32).max(1);
    img.resize_exact(max_width, height, FilterType::Lanczos3)
}
