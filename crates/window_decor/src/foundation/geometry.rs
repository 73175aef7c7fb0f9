//! Integer rectangles
//!
//! Rectangles are half-open: a rectangle at `(x, y)` with size `(w, h)` contains
//! the points `x <= px < x + w`, `y <= py < y + h`.

use serde::{Deserialize, Serialize};

use super::math::{Offset, Point};

/// Axis-aligned integer rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from its two corners `(x1, y1)` inclusive, `(x2, y2)` exclusive
    pub const fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Number of pixels covered
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    /// Whether `point` lies inside the rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Overlapping part of two rectangles, `None` if they do not overlap
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        let result = Self::from_corners(x1, y1, x2, y2);
        (!result.is_empty()).then_some(result)
    }

    /// Move the rectangle by `offset`
    pub fn translated(&self, offset: Offset) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Grow the rectangle by `amount` on all four sides
    pub const fn expanded(&self, amount: i32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + 2 * amount,
            self.height + 2 * amount,
        )
    }

    /// Scale into a pixel grid `scale` times denser, rounding outwards
    pub fn scaled(&self, scale: f32) -> Self {
        let x1 = (self.x as f32 * scale).floor() as i32;
        let y1 = (self.y as f32 * scale).floor() as i32;
        let x2 = (self.right() as f32 * scale).ceil() as i32;
        let y2 = (self.bottom() as f32 * scale).ceil() as i32;
        Self::from_corners(x1, y1, x2, y2)
    }

    /// Parts of this rectangle not covered by `other`, as up to four disjoint rectangles
    pub fn subtract(&self, other: &Self) -> Vec<Self> {
        let Some(overlap) = self.intersection(other) else {
            return if self.is_empty() { Vec::new() } else { vec![*self] };
        };

        let candidates = [
            // Band above the overlap, full width
            Self::from_corners(self.x, self.y, self.right(), overlap.y),
            // Band below the overlap, full width
            Self::from_corners(self.x, overlap.bottom(), self.right(), self.bottom()),
            // Left and right of the overlap, overlap height only
            Self::from_corners(self.x, overlap.y, overlap.x, overlap.bottom()),
            Self::from_corners(overlap.right(), overlap.y, self.right(), overlap.bottom()),
        ];

        candidates.into_iter().filter(|r| !r.is_empty()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(14, 14)));
        assert!(!rect.contains(Point::new(15, 10)));
        assert!(!rect.contains(Point::new(10, 15)));
        assert!(!rect.contains(Point::new(9, 12)));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 5, 5)));

        let c = Rect::new(10, 0, 5, 5);
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_subtract_hole_in_the_middle() {
        let outer = Rect::new(0, 0, 10, 10);
        let hole = Rect::new(3, 3, 4, 4);
        let pieces = outer.subtract(&hole);

        assert_eq!(pieces.len(), 4);
        let covered: i64 = pieces.iter().map(Rect::area).sum();
        assert_eq!(covered, 100 - 16);
        for piece in &pieces {
            assert!(piece.intersection(&hole).is_none());
            assert!(outer.contains_rect(piece));
        }
    }

    #[test]
    fn test_subtract_disjoint_and_covering() {
        let a = Rect::new(0, 0, 4, 4);
        assert_eq!(a.subtract(&Rect::new(10, 10, 2, 2)), vec![a]);
        assert!(a.subtract(&Rect::new(-1, -1, 10, 10)).is_empty());
    }

    #[test]
    fn test_scaled_rounds_outwards() {
        assert_eq!(Rect::new(1, 1, 3, 3).scaled(2.0), Rect::new(2, 2, 6, 6));
        assert_eq!(Rect::new(1, 1, 1, 1).scaled(1.5), Rect::new(1, 1, 2, 2));
    }

    #[test]
    fn test_expanded() {
        assert_eq!(Rect::new(730, 5, 60, 40).expanded(5), Rect::new(725, 0, 70, 50));
    }
}
