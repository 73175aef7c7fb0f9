//! Image loading utilities for icon and text data
//!
//! Provides PNG loading plus the small amount of pixel manipulation the theme
//! needs before handing buffers to a render backend.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::assets::AssetError;

/// Pixel buffer ready for GPU upload
///
/// Pixels are 8-bit RGBA with straight alpha, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image {}: {}", path_ref.display(), e)))?;

        let rgba_img = img.to_rgba8();
        log::debug!("Loaded image {}x{} from {:?}", rgba_img.width(), rgba_img.height(), path_ref);

        Ok(Self::from_rgba_image(rgba_img))
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        Ok(Self::from_rgba_image(img.to_rgba8()))
    }

    /// Wrap an `image` crate buffer
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: image.into_raw(),
            width,
            height,
        }
    }

    /// A fully transparent image
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::solid_color(width, height, [0, 0, 0, 0])
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self { data, width, height }
    }

    /// Convert into an `image` crate buffer
    pub fn into_rgba_image(self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data)
    }

    /// Non-uniformly scale to exactly `width` x `height`
    pub fn resized(&self, width: u32, height: u32) -> Self {
        if self.width == width && self.height == height {
            return self.clone();
        }

        match RgbaImage::from_raw(self.width, self.height, self.data.clone()) {
            Some(source) => Self::from_rgba_image(imageops::resize(&source, width, height, FilterType::Triangle)),
            None => {
                log::warn!("Image buffer does not match {}x{}, substituting transparency", self.width, self.height);
                Self::transparent(width, height)
            }
        }
    }

    /// RGBA value of one pixel, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Whether every pixel has zero alpha
    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
