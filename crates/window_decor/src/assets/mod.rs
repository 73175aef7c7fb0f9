//! Asset loading
//!
//! Icon images and fonts used by the theme. Everything here is synchronous and
//! runs on the compositor thread.

pub mod image_loader;
pub mod font;

pub use font::FontFace;
pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
