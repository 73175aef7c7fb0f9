//! Math utilities and types
//!
//! Decoration geometry is integral (logical pixels); colors are RGBA floats.

pub use nalgebra::{Vector2, Vector4};

/// 2D integer point, relative to whatever origin the caller documents
pub type Point = nalgebra::Point2<i32>;

/// 2D integer offset
pub type Offset = Vector2<i32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA color with straight (non-premultiplied) alpha, components in `0.0..=1.0`
pub type Color = Vec4;

/// Build a color from its components
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::new(r, g, b, a)
}

/// Convert a float color to 8-bit RGBA, clamping out of range components
pub fn color_to_rgba8(color: &Color) -> [u8; 4] {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [to_u8(color.x), to_u8(color.y), to_u8(color.z), to_u8(color.w)]
}
