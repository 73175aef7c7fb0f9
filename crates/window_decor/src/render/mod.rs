//! Rendering system
//!
//! Decorations never talk to a graphics API directly. Everything that touches
//! the GPU goes through the [`RenderBackend`] capability trait, always inside a
//! begin/end bracket opened by [`render_scoped`]. This keeps layout and input
//! logic testable without a real graphics backend.
//!
//! Architecture:
//! - target: description of the framebuffer being drawn into
//! - backend: the capability trait and the scoped bracket helper
//! - software: CPU compositor into an `image::RgbaImage`

pub mod target;
pub mod backend;
pub mod software;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{render_scoped, RenderBackend};
pub use software::SoftwareRenderer;
pub use target::{ImageOrigin, RenderTarget};

pub use crate::foundation::collections::TextureHandle;

use thiserror::Error;

/// Result type for backend operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A drawing or upload call was made outside a begin/end bracket
    #[error("Render call outside of a begin/end bracket: {0}")]
    NotInPass(&'static str),

    /// `begin` was called while a bracket was already open
    #[error("Render pass already active")]
    PassAlreadyActive,

    /// The texture handle does not name a live texture
    #[error("Unknown texture {0:?}")]
    UnknownTexture(TextureHandle),

    /// The pixel buffer does not match its declared size
    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    Backend(String),
}
