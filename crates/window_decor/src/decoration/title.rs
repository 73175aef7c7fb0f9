//! Cached title texture

use crate::error::DecorResult;
use crate::foundation::Rect;
use crate::render::{render_scoped, RenderBackend, RenderTarget, TextureHandle};
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
struct TitleKey {
    title: String,
    width: u32,
    height: u32,
}

/// Title text rasterized at output resolution
///
/// The text is only rasterized again when the title string or the physical
/// size of the title area changes, and always re-uploaded into the same
/// texture.
#[derive(Debug, Default)]
pub struct TitleCache {
    key: Option<TitleKey>,
    texture: Option<TextureHandle>,
}

impl TitleCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the next render to rasterize again
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Whether the cached image matches `title` at the given physical size
    pub fn is_current(&self, title: &str, width: u32, height: u32) -> bool {
        self.texture.is_some()
            && self
                .key
                .as_ref()
                .is_some_and(|key| key.title == title && key.width == width && key.height == height)
    }

    /// Texture holding the title, if one was uploaded
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    /// Give up the texture so the caller can release it
    pub fn take_texture(&mut self) -> Option<TextureHandle> {
        self.key = None;
        self.texture.take()
    }

    /// Draw `title` into `rect` (logical), clipped to `scissor` (framebuffer)
    pub fn render(
        &mut self,
        backend: &mut dyn RenderBackend,
        target: &RenderTarget,
        theme: &Theme,
        title: &str,
        rect: Rect,
        scissor: Rect,
    ) -> DecorResult<()> {
        let geometry = target.framebuffer_box_from_geometry_box(rect);
        if geometry.is_empty() {
            return Ok(());
        }

        let (width, height) = (geometry.width as u32, geometry.height as u32);
        let pixels = if self.is_current(title, width, height) {
            None
        } else {
            log::debug!("Rasterizing title {:?} at {}x{}", title, width, height);
            Some(theme.render_text(title, width, height))
        };

        let flip_y = target.flips_images();
        let texture = &mut self.texture;

        render_scoped(backend, target, scissor, |b| {
            if let Some(pixels) = &pixels {
                *texture = Some(b.upload_image(pixels, *texture)?);
            }
            match *texture {
                Some(handle) => b.draw_texture(handle, geometry, flip_y),
                None => Ok(()),
            }
        })?;

        if pixels.is_some() {
            self.key = Some(TitleKey { title: title.to_string(), width, height });
        }
        Ok(())
    }
}
