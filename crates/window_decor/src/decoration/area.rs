//! Decoration areas
//!
//! An area is a rectangle of the decoration that reacts to input, is painted,
//! or both. What it does is carried by its [`AreaContent`]; only button areas
//! own a [`Button`].

use super::button::Button;
use crate::foundation::Rect;
use crate::input::ResizeEdges;

/// What the windowing layer should do in response to an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorationAction {
    /// Nothing to do
    #[default]
    None,
    /// Start an interactive move
    Move,
    /// Start an interactive resize
    Resize,
    /// Close the window
    Close,
    /// Toggle maximization
    Maximize,
    /// Minimize the window
    Minimize,
}

/// Kind of an area, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaType {
    /// Dragging starts a move
    Move,
    /// Title text is painted here; pressing grabs
    Title,
    /// A clickable button
    Button,
    /// Dragging starts a resize
    Resize,
}

impl AreaType {
    /// Whether areas of this kind are painted
    pub const fn is_renderable(self) -> bool {
        matches!(self, Self::Title | Self::Button)
    }
}

/// Area payload
#[derive(Debug)]
pub enum AreaContent {
    /// Move handle
    Move,
    /// Title bar
    Title,
    /// Button owned by this area
    Button(Button),
    /// Resize strip along the given edges
    Resize(ResizeEdges),
}

/// A rectangular zone of the decoration
#[derive(Debug)]
pub struct Area {
    geometry: Rect,
    content: AreaContent,
}

impl Area {
    /// Create an area with the given content
    pub fn new(geometry: Rect, content: AreaContent) -> Self {
        Self { geometry, content }
    }

    /// Rectangle in decoration-local logical coordinates
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Payload of this area
    pub fn content(&self) -> &AreaContent {
        &self.content
    }

    /// Payload of this area, mutably
    pub fn content_mut(&mut self) -> &mut AreaContent {
        &mut self.content
    }

    /// Kind of this area
    pub fn area_type(&self) -> AreaType {
        match self.content {
            AreaContent::Move => AreaType::Move,
            AreaContent::Title => AreaType::Title,
            AreaContent::Button(_) => AreaType::Button,
            AreaContent::Resize(_) => AreaType::Resize,
        }
    }

    /// Whether this area is painted
    pub fn is_renderable(&self) -> bool {
        self.area_type().is_renderable()
    }

    /// The button, for button areas
    pub fn button(&self) -> Option<&Button> {
        match &self.content {
            AreaContent::Button(button) => Some(button),
            _ => None,
        }
    }

    /// The button, for button areas
    pub fn button_mut(&mut self) -> Option<&mut Button> {
        match &mut self.content {
            AreaContent::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Edges affected by dragging, for resize areas
    pub fn resize_edges(&self) -> Option<ResizeEdges> {
        match self.content {
            AreaContent::Resize(edges) => Some(edges),
            _ => None,
        }
    }
}
