//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the decoration core:
//! - Math types (points, colors)
//! - Integer rectangles and rectangle regions
//! - Handle-based collections
//! - Logging utilities

pub mod math;
pub mod geometry;
pub mod region;
pub mod collections;
pub mod logging;

pub use geometry::Rect;
pub use math::{Color, Point};
pub use region::Region;
