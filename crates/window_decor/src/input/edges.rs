//! Resize edge masks

use bitflags::bitflags;

use crate::foundation::Point;

bitflags! {
    /// Which window edges a resize affects
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResizeEdges: u32 {
        /// Top edge
        const TOP = 1 << 0;
        /// Bottom edge
        const BOTTOM = 1 << 1;
        /// Left edge
        const LEFT = 1 << 2;
        /// Right edge
        const RIGHT = 1 << 3;
    }
}

/// Edges within `thickness` of `point` on a decoration of `width` x `height`
///
/// Thresholds are inclusive on both sides, so a point exactly `thickness`
/// pixels from an edge still counts.
pub fn edges_at(point: Point, width: i32, height: i32, thickness: i32) -> ResizeEdges {
    let mut edges = ResizeEdges::empty();
    if point.x <= thickness {
        edges |= ResizeEdges::LEFT;
    }
    if point.x >= width - thickness {
        edges |= ResizeEdges::RIGHT;
    }
    if point.y <= thickness {
        edges |= ResizeEdges::TOP;
    }
    if point.y >= height - thickness {
        edges |= ResizeEdges::BOTTOM;
    }
    edges
}
