//! Decoration buttons
//!
//! A button owns one rasterized icon and, once rendered, the backend texture
//! holding it. Rasterization happens eagerly on [`Button::set_type`]; the
//! upload is deferred to the next render so it always lands inside a render
//! bracket.

use std::rc::Rc;

use super::area::DecorationAction;
use crate::assets::ImageData;
use crate::error::{DecorError, DecorResult};
use crate::foundation::Rect;
use crate::render::{render_scoped, RenderBackend, RenderTarget, TextureHandle};
use crate::theme::Theme;

/// Kind of decoration button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonType {
    /// Closes the window
    Close,
    /// Toggles the maximized state
    Maximize,
    /// Minimizes the window
    Minimize,
}

impl ButtonType {
    /// Every button type
    pub const ALL: [Self; 3] = [Self::Close, Self::Maximize, Self::Minimize];

    /// Action produced by a completed click on a button of this type
    pub const fn action(self) -> DecorationAction {
        match self {
            Self::Close => DecorationAction::Close,
            Self::Maximize => DecorationAction::Maximize,
            Self::Minimize => DecorationAction::Minimize,
        }
    }
}

/// A clickable button inside the title bar
#[derive(Debug)]
pub struct Button {
    theme: Rc<Theme>,
    button_type: Option<ButtonType>,
    pixels: Option<ImageData>,
    texture: Option<TextureHandle>,
    dirty: bool,
    hover: bool,
    pressed: bool,
}

impl Button {
    /// Create a button with no type; it cannot be rendered until [`set_type`](Self::set_type)
    pub fn new(theme: Rc<Theme>) -> Self {
        Self {
            theme,
            button_type: None,
            pixels: None,
            texture: None,
            dirty: false,
            hover: false,
            pressed: false,
        }
    }

    /// Set the button type and rasterize its icon
    pub fn set_type(&mut self, button_type: ButtonType) {
        let (width, height) = self.theme.config().button_raster_size;
        log::debug!("Rasterizing {:?} button at {}x{}", button_type, width, height);

        self.button_type = Some(button_type);
        self.pixels = Some(self.theme.get_button_surface(button_type, width, height));
        self.dirty = true;
    }

    /// The button type, if one has been set
    pub fn button_type(&self) -> Option<ButtonType> {
        self.button_type
    }

    /// Action produced by a completed click, `None` if no type is set
    pub fn action(&self) -> DecorationAction {
        self.button_type.map_or(DecorationAction::None, ButtonType::action)
    }

    /// Record whether the pointer is over the button
    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }

    /// Record whether the button is held down
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Whether the pointer is over the button
    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    /// Whether the button is held down
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Always true; uploads still only happen when the pixels changed
    pub fn needs_repaint(&self) -> bool {
        true
    }

    /// Texture currently holding the icon, if it was uploaded
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    /// Give up ownership of the uploaded texture so the caller can release it
    ///
    /// The next render uploads the icon again.
    pub fn take_texture(&mut self) -> Option<TextureHandle> {
        let texture = self.texture.take();
        if texture.is_some() {
            self.dirty = true;
        }
        texture
    }

    /// Draw the icon stretched into `rect` (logical), clipped to `scissor` (framebuffer)
    pub fn render(
        &mut self,
        backend: &mut dyn RenderBackend,
        target: &RenderTarget,
        rect: Rect,
        scissor: Rect,
    ) -> DecorResult<()> {
        let Some(pixels) = self.pixels.as_ref() else {
            log::error!("Button rendered before its type was set");
            return Err(DecorError::ProgrammingError(
                "Button::render called before Button::set_type".to_string(),
            ));
        };

        let geometry = target.framebuffer_box_from_geometry_box(rect);
        let flip_y = target.flips_images();
        let texture = &mut self.texture;
        let dirty = &mut self.dirty;

        render_scoped(backend, target, scissor, |b| {
            let current = *texture;
            let handle = match current {
                Some(handle) if !*dirty => handle,
                reuse => {
                    let handle = b.upload_image(pixels, reuse)?;
                    log::trace!("Uploaded button icon to {:?}", handle);
                    *texture = Some(handle);
                    *dirty = false;
                    handle
                }
            };
            b.draw_texture(handle, geometry, flip_y)
        })?;

        Ok(())
    }
}
