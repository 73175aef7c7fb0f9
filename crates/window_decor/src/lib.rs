//! # Window Decor
//!
//! Server-side window decorations for a compositing window manager: a title
//! bar with a close button, a resize border, and the input handling that
//! turns pointer gestures into move, resize and close requests.
//!
//! ## Features
//!
//! - **Layout**: deterministic area construction with generation-checked handles
//! - **Input**: press/release classification, resize edge detection, cursor hints
//! - **Theme**: configurable colors and sizes, font and icon rasterization
//! - **Rendering**: backend-agnostic drawing with a software backend included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use window_decor::prelude::*;
//!
//! # fn run(view: &mut dyn DecoratedView) -> Result<(), DecorError> {
//! let theme = Rc::new(Theme::new(ThemeConfig::default())?);
//! let mut decoration = DecorationSurface::new(theme, view);
//!
//! let content = Rect::new(100, 100, 790, 540);
//! decoration.notify_view_resized(decoration.expand_geometry(content), view);
//!
//! let target = RenderTarget::new(Rect::new(0, 0, 1920, 1080), 1.0);
//! let mut backend = SoftwareRenderer::new(1920, 1080);
//! let damage = Region::from_rect(target.bounds());
//! decoration.render(&mut backend, &target, Point::new(95, 45), &damage)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod events;
pub mod input;
pub mod render;
pub mod theme;
pub mod decoration;

mod error;

pub use error::{DecorError, DecorResult};

/// Common imports for decoration users
pub mod prelude {
    pub use crate::{
        DecorError, DecorResult,
        config::{Config, ThemeConfig},
        decoration::{
            AreaType, ButtonType, DecoratedView, DecorationAction, DecorationLayout, DecorationSurface,
        },
        events::{EventBus, ViewEvent, ViewTopic},
        foundation::{Color, Point, Rect, Region},
        input::{CursorShape, PointerButton, ResizeEdges},
        render::{ImageOrigin, RenderBackend, RenderTarget, SoftwareRenderer},
        theme::Theme,
    };
}
