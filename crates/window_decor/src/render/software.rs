//! CPU render backend
//!
//! Composites into an in-memory `image::RgbaImage`. Used by the preview tool
//! and by pixel-level tests; it honours the same bracket and scissor rules a
//! GPU backend would.

use image::{Rgba, RgbaImage};
use slotmap::SlotMap;

use super::{RenderBackend, RenderError, RenderResult, RenderTarget, TextureHandle};
use crate::assets::ImageData;
use crate::foundation::math::color_to_rgba8;
use crate::foundation::{Color, Rect};

/// Counters describing backend activity since creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Completed begin/end brackets
    pub passes: u64,
    /// Texture uploads, including in-place replacements
    pub uploads: u64,
    /// Texture releases
    pub releases: u64,
}

/// Software rasterizer implementing [`RenderBackend`]
pub struct SoftwareRenderer {
    framebuffer: RgbaImage,
    textures: SlotMap<TextureHandle, RgbaImage>,
    scissor: Rect,
    in_pass: bool,
    stats: RenderStats,
}

impl SoftwareRenderer {
    /// Create a renderer with a transparent `width` x `height` framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_clear_color(width, height, [0, 0, 0, 0])
    }

    /// Create a renderer with a framebuffer filled with `clear`
    pub fn with_clear_color(width: u32, height: u32, clear: [u8; 4]) -> Self {
        Self {
            framebuffer: RgbaImage::from_pixel(width, height, Rgba(clear)),
            textures: SlotMap::with_key(),
            scissor: Rect::new(0, 0, width as i32, height as i32),
            in_pass: false,
            stats: RenderStats::default(),
        }
    }

    /// The composited framebuffer
    pub fn framebuffer(&self) -> &RgbaImage {
        &self.framebuffer
    }

    /// Consume the renderer, returning the framebuffer
    pub fn into_framebuffer(self) -> RgbaImage {
        self.framebuffer
    }

    /// RGBA value of one framebuffer pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.framebuffer.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Number of live textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Activity counters
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.framebuffer.width() as i32, self.framebuffer.height() as i32)
    }

    fn require_pass(&self, call: &'static str) -> RenderResult<()> {
        if self.in_pass {
            Ok(())
        } else {
            Err(RenderError::NotInPass(call))
        }
    }

    /// Drawable part of `rect` after scissor and framebuffer clipping
    fn clip(&self, rect: &Rect) -> Option<Rect> {
        rect.intersection(&self.scissor)?.intersection(&self.bounds())
    }
}

/// Source-over blend of straight-alpha `src` onto straight-alpha `dst`
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let sa = f32::from(src[3]) / 255.0;
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }

    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| {
        let value = (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}

impl RenderBackend for SoftwareRenderer {
    fn begin(&mut self, _target: &RenderTarget) -> RenderResult<()> {
        if self.in_pass {
            return Err(RenderError::PassAlreadyActive);
        }
        self.in_pass = true;
        self.scissor = self.bounds();
        Ok(())
    }

    fn set_scissor(&mut self, scissor: Rect) -> RenderResult<()> {
        self.require_pass("set_scissor")?;
        self.scissor = scissor;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) -> RenderResult<()> {
        self.require_pass("fill_rect")?;
        let Some(area) = self.clip(&rect) else {
            return Ok(());
        };

        let src = color_to_rgba8(color);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let px = self.framebuffer.get_pixel_mut(x as u32, y as u32);
                px.0 = blend_over(src, px.0);
            }
        }
        Ok(())
    }

    fn upload_image(
        &mut self,
        image: &ImageData,
        reuse: Option<TextureHandle>,
    ) -> RenderResult<TextureHandle> {
        self.require_pass("upload_image")?;
        let pixels = image
            .clone()
            .into_rgba_image()
            .ok_or_else(|| RenderError::InvalidImage(format!(
                "{} bytes for {}x{}",
                image.data.len(),
                image.width,
                image.height
            )))?;

        self.stats.uploads += 1;
        if let Some(handle) = reuse {
            if let Some(slot) = self.textures.get_mut(handle) {
                *slot = pixels;
                return Ok(handle);
            }
        }

        let handle = self.textures.insert(pixels);
        log::trace!("Uploaded {}x{} texture {:?}", image.width, image.height, handle);
        Ok(handle)
    }

    fn draw_texture(&mut self, texture: TextureHandle, rect: Rect, flip_y: bool) -> RenderResult<()> {
        self.require_pass("draw_texture")?;
        let Some(area) = self.clip(&rect) else {
            return Ok(());
        };
        let source = self
            .textures
            .get(texture)
            .ok_or(RenderError::UnknownTexture(texture))?;
        if source.width() == 0 || source.height() == 0 {
            return Ok(());
        }

        // Nearest-neighbour stretch of the whole texture into `rect`
        for y in area.y..area.bottom() {
            let v = ((y - rect.y) as f32 + 0.5) / rect.height as f32;
            let mut sy = ((v * source.height() as f32) as u32).min(source.height() - 1);
            if flip_y {
                sy = source.height() - 1 - sy;
            }
            for x in area.x..area.right() {
                let u = ((x - rect.x) as f32 + 0.5) / rect.width as f32;
                let sx = ((u * source.width() as f32) as u32).min(source.width() - 1);

                let src = source.get_pixel(sx, sy).0;
                let px = self.framebuffer.get_pixel_mut(x as u32, y as u32);
                px.0 = blend_over(src, px.0);
            }
        }
        Ok(())
    }

    fn release_texture(&mut self, texture: TextureHandle) {
        if self.textures.remove(texture).is_some() {
            self.stats.releases += 1;
        } else {
            log::warn!("release_texture: unknown texture {:?}", texture);
        }
    }

    fn end(&mut self) -> RenderResult<()> {
        self.require_pass("end")?;
        self.in_pass = false;
        self.scissor = self.bounds();
        self.stats.passes += 1;
        Ok(())
    }
}
