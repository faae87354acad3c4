use std::fmt;

use async_trait::async_trait;
use image::DynamicImage;

/// Errors that can occur while fetching an image.
/// Rendered as a per-image fallback; never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadError {
    /// Connection, timeout or malformed locator.
    Network(String),
    /// Server answered with a non-success status.
    Http { status: u16 },
    /// Bytes arrived but are not a supported image.
    Decode(String),
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::Network(msg) => write!(f, "network error: {msg}"),
            ImageLoadError::Http { status } => write!(f, "HTTP {status}"),
            ImageLoadError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ImageLoadError {}

/// A decoded, downscaled RGB image ready for terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// `pixels` is row-major and must hold `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode encoded image bytes and shrink to fit within `max_width` columns,
    /// keeping the aspect ratio.
    pub fn decode(bytes: &[u8], max_width: u32) -> Result<Self, ImageLoadError> {
        let image =
            image::load_from_memory(bytes).map_err(|e| ImageLoadError::Decode(e.to_string()))?;
        Ok(Self::from_image(&image, max_width))
    }

    pub fn from_image(image: &DynamicImage, max_width: u32) -> Self {
        let max_width = max_width.max(1);
        let rgb = image.thumbnail(max_width, max_width.saturating_mul(4)).to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| p.0).collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), clamped to the image bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        if self.pixels.is_empty() {
            return [0, 0, 0];
        }
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        self.pixels[(y * self.width + x) as usize]
    }
}

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Returns the name of the fetcher.
    fn name(&self) -> &str;

    /// Fetch and decode the image behind `locator`.
    async fn fetch(&self, locator: &str) -> Result<Thumbnail, ImageLoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_downscales_keeping_aspect() {
        let thumb = Thumbnail::decode(&png_bytes(800, 450), 64).unwrap();
        assert_eq!(thumb.width(), 64);
        assert_eq!(thumb.height(), 36);
        assert_eq!(thumb.pixel(10, 10), [10, 20, 30]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = Thumbnail::decode(b"definitely not an image", 64).unwrap_err();
        assert!(matches!(err, ImageLoadError::Decode(_)));
    }

    #[test]
    fn test_pixel_is_clamped() {
        let thumb = Thumbnail::new(2, 1, vec![[1, 1, 1], [2, 2, 2]]);
        assert_eq!(thumb.pixel(5, 5), [2, 2, 2]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ImageLoadError::Http { status: 404 }.to_string(), "HTTP 404");
        assert_eq!(
            ImageLoadError::Network("timed out".into()).to_string(),
            "network error: timed out"
        );
    }
}
