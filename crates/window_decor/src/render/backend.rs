//! Backend abstraction trait for decoration rendering
//!
//! The decoration core needs very little from a graphics API: flat-colored
//! quads, image upload, stretched image blits and a scissor. Backends
//! implement exactly that, nothing more.

use super::{RenderResult, RenderTarget, TextureHandle};
use crate::assets::ImageData;
use crate::foundation::{Color, Rect};

/// Rendering capability consumed by the decoration core
///
/// All rectangles are in framebuffer coordinates. Every call except
/// [`release_texture`](Self::release_texture) must happen between
/// [`begin`](Self::begin) and [`end`](Self::end).
pub trait RenderBackend {
    /// Open a render bracket on `target`; the scissor starts as the whole framebuffer
    fn begin(&mut self, target: &RenderTarget) -> RenderResult<()>;

    /// Restrict subsequent drawing to `scissor`
    fn set_scissor(&mut self, scissor: Rect) -> RenderResult<()>;

    /// Blend a flat-colored rectangle over the framebuffer
    fn fill_rect(&mut self, rect: Rect, color: &Color) -> RenderResult<()>;

    /// Upload pixels, replacing the contents of `reuse` when given
    fn upload_image(
        &mut self,
        image: &ImageData,
        reuse: Option<TextureHandle>,
    ) -> RenderResult<TextureHandle>;

    /// Stretch a texture into `rect`, flipping it vertically if `flip_y`
    fn draw_texture(&mut self, texture: TextureHandle, rect: Rect, flip_y: bool) -> RenderResult<()>;

    /// Free a texture; unknown handles are ignored
    fn release_texture(&mut self, texture: TextureHandle);

    /// Close the render bracket
    fn end(&mut self) -> RenderResult<()>;
}

/// Run `draw` inside a begin/end bracket with `scissor` applied
///
/// The bracket is always closed, even when `draw` fails; the first error wins.
pub fn render_scoped<F>(
    backend: &mut dyn RenderBackend,
    target: &RenderTarget,
    scissor: Rect,
    draw: F,
) -> RenderResult<()>
where
    F: FnOnce(&mut dyn RenderBackend) -> RenderResult<()>,
{
    backend.begin(target)?;

    let result = backend.set_scissor(scissor).and_then(|()| draw(&mut *backend));
    let end_result = backend.end();

    result.and(end_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{Op, RecordingBackend};
    use crate::render::RenderError;

    #[test]
    fn test_scoped_bracket_wraps_draw_calls() {
        let mut backend = RecordingBackend::new();
        let target = RenderTarget::new(Rect::new(0, 0, 100, 100), 1.0);
        let color = Color::new(1.0, 0.0, 0.0, 1.0);

        render_scoped(&mut backend, &target, Rect::new(0, 0, 10, 10), |b| {
            b.fill_rect(Rect::new(0, 0, 50, 50), &color)
        })
        .unwrap();

        assert_eq!(
            backend.ops,
            vec![
                Op::Begin,
                Op::Scissor(Rect::new(0, 0, 10, 10)),
                Op::Fill(Rect::new(0, 0, 50, 50)),
                Op::End,
            ]
        );
    }

    #[test]
    fn test_scoped_bracket_closes_on_error() {
        let mut backend = RecordingBackend::new();
        let target = RenderTarget::new(Rect::new(0, 0, 100, 100), 1.0);

        let result = render_scoped(&mut backend, &target, Rect::new(0, 0, 10, 10), |_| {
            Err(RenderError::Backend("device lost".into()))
        });

        assert_eq!(result, Err(RenderError::Backend("device lost".into())));
        assert_eq!(backend.ops.last(), Some(&Op::End));
        assert!(!backend.in_pass);
    }
}
