//! Render target description
//!
//! Three coordinate spaces are involved when compositing a decoration:
//! - geometry: logical pixels in output-layout coordinates
//! - damage: physical pixels relative to the output, top-left origin
//! - framebuffer: physical pixels in the backend's own row order

use crate::foundation::{Rect, Region};
use crate::foundation::math::Offset;

/// Row order of a framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageOrigin {
    /// First row is the top row (software, Vulkan)
    #[default]
    TopLeft,
    /// First row is the bottom row (OpenGL)
    BottomLeft,
}

/// Framebuffer a decoration is rendered into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    /// Output rectangle in logical layout coordinates
    pub geometry: Rect,
    /// Output scale factor
    pub scale: f32,
    /// Framebuffer width in physical pixels
    pub width: i32,
    /// Framebuffer height in physical pixels
    pub height: i32,
    /// Row order of the framebuffer
    pub origin: ImageOrigin,
}

impl RenderTarget {
    /// Describe an output covering `geometry` at `scale`
    pub fn new(geometry: Rect, scale: f32) -> Self {
        let physical = Rect::new(0, 0, geometry.width, geometry.height).scaled(scale);
        Self {
            geometry,
            scale,
            width: physical.width,
            height: physical.height,
            origin: ImageOrigin::TopLeft,
        }
    }

    /// Set the framebuffer row order
    pub fn with_origin(mut self, origin: ImageOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// The whole framebuffer, in damage coordinates
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Convert a logical layout rectangle to damage coordinates
    pub fn damage_box_from_geometry_box(&self, rect: Rect) -> Rect {
        rect.translated(Offset::new(-self.geometry.x, -self.geometry.y))
            .scaled(self.scale)
    }

    /// Convert a logical layout region to damage coordinates
    pub fn damage_region_from_geometry(&self, region: &Region) -> Region {
        region
            .translated(Offset::new(-self.geometry.x, -self.geometry.y))
            .scaled(self.scale)
    }

    /// Convert a damage rectangle to the framebuffer's row order
    pub const fn framebuffer_box_from_damage_box(&self, rect: Rect) -> Rect {
        match self.origin {
            ImageOrigin::TopLeft => rect,
            ImageOrigin::BottomLeft => {
                Rect::new(rect.x, self.height - rect.bottom(), rect.width, rect.height)
            }
        }
    }

    /// Convert a logical layout rectangle straight to framebuffer coordinates
    pub fn framebuffer_box_from_geometry_box(&self, rect: Rect) -> Rect {
        self.framebuffer_box_from_damage_box(self.damage_box_from_geometry_box(rect))
    }

    /// Whether top-down images must be flipped vertically when drawn
    pub fn flips_images(&self) -> bool {
        self.origin == ImageOrigin::BottomLeft
    }
}
