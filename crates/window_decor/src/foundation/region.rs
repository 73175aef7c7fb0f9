//! Rectangle regions
//!
//! A [`Region`] is a union of rectangles kept as a list of pairwise disjoint
//! rectangles, so iterating it visits every covered pixel exactly once.

use super::geometry::Rect;
use super::math::{Offset, Point};

/// Union of integer rectangles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// Create an empty region
    pub const fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Create a region covering a single rectangle
    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add_rect(rect);
        region
    }

    /// Whether the region covers no pixels
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The disjoint rectangles making up the region
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Iterate over the disjoint rectangles making up the region
    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    /// Number of pixels covered
    pub fn area(&self) -> i64 {
        self.rects.iter().map(Rect::area).sum()
    }

    /// Smallest rectangle containing the whole region
    pub fn extents(&self) -> Option<Rect> {
        let first = self.rects.first()?;
        let (mut x1, mut y1, mut x2, mut y2) = (first.x, first.y, first.right(), first.bottom());
        for rect in &self.rects[1..] {
            x1 = x1.min(rect.x);
            y1 = y1.min(rect.y);
            x2 = x2.max(rect.right());
            y2 = y2.max(rect.bottom());
        }
        Some(Rect::from_corners(x1, y1, x2, y2))
    }

    /// Add a rectangle to the region
    pub fn add_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        let mut pieces = vec![rect];
        for existing in &self.rects {
            pieces = pieces
                .iter()
                .flat_map(|piece| piece.subtract(existing))
                .collect();
            if pieces.is_empty() {
                return;
            }
        }
        self.rects.extend(pieces);
    }

    /// Part of the region inside `clip`
    pub fn intersect_rect(&self, clip: &Rect) -> Self {
        Self {
            rects: self.rects.iter().filter_map(|r| r.intersection(clip)).collect(),
        }
    }

    /// Part of the region also covered by `other`
    pub fn intersect(&self, other: &Self) -> Self {
        // Both inputs are disjoint sets, so the pairwise overlaps are disjoint too
        let rects = self
            .rects
            .iter()
            .flat_map(|a| other.rects.iter().filter_map(move |b| a.intersection(b)))
            .collect();
        Self { rects }
    }

    /// The region moved by `offset`
    pub fn translated(&self, offset: Offset) -> Self {
        Self {
            rects: self.rects.iter().map(|r| r.translated(offset)).collect(),
        }
    }

    /// The region scaled into a denser pixel grid, rounding outwards
    pub fn scaled(&self, scale: f32) -> Self {
        // Outward rounding can make neighbours overlap, so rebuild through add_rect
        self.rects.iter().map(|r| r.scaled(scale)).collect()
    }

    /// Whether `point` lies inside the region
    pub fn contains_point(&self, point: Point) -> bool {
        self.rects.iter().any(|r| r.contains(point))
    }

    /// Whether both regions cover exactly the same pixels
    pub fn covers_same(&self, other: &Self) -> bool {
        let area = self.area();
        area == other.area() && self.intersect(other).area() == area
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        let mut region = Self::new();
        region.extend(iter);
        region
    }
}

impl Extend<Rect> for Region {
    fn extend<I: IntoIterator<Item = Rect>>(&mut self, iter: I) {
        for rect in iter {
            self.add_rect(rect);
        }
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
