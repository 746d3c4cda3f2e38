use image::imageops::FilterType;

use crate::error::AssetError;

/// Default longest edge of generated thumbnails
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

/// Decoded RGBA thumbnail, ready to hand to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode image bytes and shrink them so neither edge exceeds `max_edge`.
///
/// Images already small enough keep their size. Aspect ratio is preserved.
pub fn generate_thumbnail(bytes: &[u8], max_edge: u32) -> Result<Thumbnail, image::ImageError> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > max_edge || img.height() > max_edge {
        img.resize(max_edge, max_edge, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.into_rgba8();
    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Same as `generate_thumbnail`, off the async executor
pub async fn generate_thumbnail_async(bytes: Vec<u8>, max_edge: u32) -> Result<Thumbnail, AssetError> {
    // Spawn blocking because decoding and resizing are CPU-intensive
    let thumbnail = tokio::task::spawn_blocking(move || generate_thumbnail(&bytes, max_edge)).await??;
    Ok(thumbnail)
}
