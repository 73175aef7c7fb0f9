//! Window decorations
//!
//! Architecture:
//! - area: rectangular zones and the actions they produce
//! - button: title bar buttons and their icon textures
//! - layout: area construction and press/release classification
//! - title: cached title text texture
//! - surface: the decoration as seen by the windowing layer

pub mod area;
pub mod button;
pub mod layout;
pub mod title;
pub mod surface;

pub use area::{Area, AreaContent, AreaType, DecorationAction};
pub use button::{Button, ButtonType};
pub use layout::DecorationLayout;
pub use surface::{DecoratedView, DecorationSurface};
pub use title::TitleCache;
