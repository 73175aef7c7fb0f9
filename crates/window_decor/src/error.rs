//! Decoration-level errors

use thiserror::Error;

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::render::RenderError;

/// Result type for decoration operations
pub type DecorResult<T> = Result<T, DecorError>;

/// Errors surfaced by the decoration core
#[derive(Error, Debug)]
pub enum DecorError {
    /// An operation was called out of its required order
    ///
    /// These indicate a bug in the caller, not a runtime condition.
    #[error("Programming error: {0}")]
    ProgrammingError(String),

    /// An icon or font asset could not be loaded
    #[error("Asset missing: {0}")]
    AssetMissing(#[from] AssetError),

    /// The theme configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The render backend failed
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}
