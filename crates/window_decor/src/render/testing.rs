//! Recording backend for unit tests

use slotmap::SlotMap;

use super::{RenderBackend, RenderError, RenderResult, RenderTarget, TextureHandle};
use crate::assets::ImageData;
use crate::foundation::{Color, Rect};

/// One backend call, as observed by [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Begin,
    Scissor(Rect),
    Fill(Rect),
    Upload { texture: TextureHandle, reused: bool, size: (u32, u32) },
    Draw { texture: TextureHandle, rect: Rect, flip_y: bool },
    Release(TextureHandle),
    End,
}

/// Backend that records every call and enforces bracket discipline
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub ops: Vec<Op>,
    pub in_pass: bool,
    pub textures: SlotMap<TextureHandle, (u32, u32)>,
    pub fill_colors: Vec<Color>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploads(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Upload { .. })).count()
    }

    pub fn draws(&self) -> Vec<(TextureHandle, Rect)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Draw { texture, rect, .. } => Some((*texture, *rect)),
                _ => None,
            })
            .collect()
    }

    pub fn releases(&self) -> Vec<TextureHandle> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Release(texture) => Some(*texture),
                _ => None,
            })
            .collect()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
        self.fill_colors.clear();
    }

    fn require_pass(&self, call: &'static str) -> RenderResult<()> {
        if self.in_pass {
            Ok(())
        } else {
            Err(RenderError::NotInPass(call))
        }
    }
}

impl RenderBackend for RecordingBackend {
    fn begin(&mut self, _target: &RenderTarget) -> RenderResult<()> {
        if self.in_pass {
            return Err(RenderError::PassAlreadyActive);
        }
        self.in_pass = true;
        self.ops.push(Op::Begin);
        Ok(())
    }

    fn set_scissor(&mut self, scissor: Rect) -> RenderResult<()> {
        self.require_pass("set_scissor")?;
        self.ops.push(Op::Scissor(scissor));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &Color) -> RenderResult<()> {
        self.require_pass("fill_rect")?;
        self.ops.push(Op::Fill(rect));
        self.fill_colors.push(*color);
        Ok(())
    }

    fn upload_image(
        &mut self,
        image: &ImageData,
        reuse: Option<TextureHandle>,
    ) -> RenderResult<TextureHandle> {
        self.require_pass("upload_image")?;
        let size = (image.width, image.height);
        let (texture, reused) = match reuse {
            Some(handle) if self.textures.contains_key(handle) => {
                self.textures[handle] = size;
                (handle, true)
            }
            _ => (self.textures.insert(size), false),
        };
        self.ops.push(Op::Upload { texture, reused, size });
        Ok(texture)
    }

    fn draw_texture(&mut self, texture: TextureHandle, rect: Rect, flip_y: bool) -> RenderResult<()> {
        self.require_pass("draw_texture")?;
        if !self.textures.contains_key(texture) {
            return Err(RenderError::UnknownTexture(texture));
        }
        self.ops.push(Op::Draw { texture, rect, flip_y });
        Ok(())
    }

    fn release_texture(&mut self, texture: TextureHandle) {
        self.textures.remove(texture);
        self.ops.push(Op::Release(texture));
    }

    fn end(&mut self) -> RenderResult<()> {
        self.require_pass("end")?;
        self.in_pass = false;
        self.ops.push(Op::End);
        Ok(())
    }
}
