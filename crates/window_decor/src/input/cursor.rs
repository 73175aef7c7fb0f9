//! Cursor shape hints

use super::edges::ResizeEdges;

/// Cursor shape requested while the pointer is over the decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// Regular arrow pointer
    Default,
    /// Resize cursor for the given edges
    Resize(ResizeEdges),
}

impl CursorShape {
    /// Cursor for an edge mask; an empty mask means the default pointer
    pub fn for_edges(edges: ResizeEdges) -> Self {
        if edges.is_empty() {
            Self::Default
        } else {
            Self::Resize(edges)
        }
    }

    /// Conventional cursor theme name
    pub fn name(&self) -> &'static str {
        let Self::Resize(edges) = self else {
            return "default";
        };

        // Top wins over bottom and left over right on windows too small to tell apart
        let north = edges.contains(ResizeEdges::TOP);
        let south = !north && edges.contains(ResizeEdges::BOTTOM);
        let west = edges.contains(ResizeEdges::LEFT);
        let east = !west && edges.contains(ResizeEdges::RIGHT);

        match (north, south, west, east) {
            (true, _, true, _) => "nw-resize",
            (true, _, _, true) => "ne-resize",
            (_, true, true, _) => "sw-resize",
            (_, true, _, true) => "se-resize",
            (true, ..) => "n-resize",
            (_, true, ..) => "s-resize",
            (_, _, true, _) => "w-resize",
            (.., true) => "e-resize",
            _ => "default",
        }
    }
}
