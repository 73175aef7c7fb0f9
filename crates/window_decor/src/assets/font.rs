//! Font loading and single-line text rasterization
//!
//! Glyphs are rasterized with `fontdue` and composited into an [`ImageData`]
//! buffer one line at a time; decorations never need wrapping or shaping
//! beyond simple horizontal advances.

use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::assets::{AssetError, ImageData};
use crate::foundation::math::{color_to_rgba8, Color};

/// A loaded TrueType/OpenType font
pub struct FontFace {
    font: Font,
    name: String,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace").field("name", &self.name).finish()
    }
}

impl FontFace {
    /// Load a font from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();
        let bytes = std::fs::read(path_ref)?;
        Self::from_bytes(&bytes, path_ref.display().to_string())
    }

    /// Load a font from raw TTF/OTF bytes
    pub fn from_bytes(bytes: &[u8], name: impl Into<String>) -> Result<Self, AssetError> {
        let name = name.into();
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| AssetError::LoadFailed(format!("fontdue error for {}: {}", name, e)))?;

        log::info!("Loaded font {}", name);
        Ok(Self { font, name })
    }

    /// Name the font was loaded under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rasterize `text` on a single line into a fresh `width` x `height` buffer
    ///
    /// The pen starts at `x = 0` with the baseline at `y = font_size`; glyphs
    /// past the right edge are dropped. Coverage is written as the alpha of
    /// `color` over a fully transparent background.
    pub fn rasterize_line(
        &self,
        text: &str,
        font_size: f32,
        color: &Color,
        width: u32,
        height: u32,
    ) -> ImageData {
        let mut image = ImageData::transparent(width, height);
        let [r, g, b, a] = color_to_rgba8(color);
        let baseline = font_size.round() as i32;
        let mut pen_x = 0.0f32;

        for ch in text.chars() {
            if pen_x >= width as f32 {
                break;
            }

            let (metrics, bitmap) = self.font.rasterize(ch, font_size);
            let glyph_x = pen_x.round() as i32 + metrics.xmin;
            let glyph_y = baseline - (metrics.ymin + metrics.height as i32);

            for row in 0..metrics.height {
                let py = glyph_y + row as i32;
                if py < 0 || py >= height as i32 {
                    continue;
                }
                for col in 0..metrics.width {
                    let px = glyph_x + col as i32;
                    if px < 0 || px >= width as i32 {
                        continue;
                    }

                    let coverage = u32::from(bitmap[row * metrics.width + col]);
                    if coverage == 0 {
                        continue;
                    }

                    let alpha = (coverage * u32::from(a) / 255) as u8;
                    let idx = ((py as u32 * width + px as u32) * 4) as usize;
                    // Overlapping glyph edges keep the stronger coverage
                    if alpha > image.data[idx + 3] {
                        image.data[idx..idx + 4].copy_from_slice(&[r, g, b, alpha]);
                    }
                }
            }

            pen_x += metrics.advance_width;
        }

        image
    }
}
