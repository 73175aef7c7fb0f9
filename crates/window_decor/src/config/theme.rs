//! # Theme Configuration
//!
//! Style values for decorations: title bar height, border thickness, colors,
//! font, and the icon assets used for buttons. Defaults match the stock
//! decoration look (dark translucent frame, white title text).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::decoration::ButtonType;
use crate::foundation::math::{rgba, Color};

/// Directories searched when the configured font is not a path to a file
const FONT_DIRS: &[&str] = &[
    "resources/fonts/",
    "/usr/share/fonts/truetype/dejavu/",
    "/usr/share/fonts/TTF/",
    "/usr/share/fonts/dejavu/",
    "/usr/share/fonts/truetype/liberation/",
    "/usr/share/fonts/",
];

/// Generic family names and the file stem tried for each
const GENERIC_FAMILIES: &[(&str, &str)] = &[
    ("serif", "DejaVuSerif"),
    ("sans-serif", "DejaVuSans"),
    ("sans", "DejaVuSans"),
    ("monospace", "DejaVuSansMono"),
];

/// Icon image files for each button type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconPaths {
    /// Icon for the close button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<PathBuf>,
    /// Icon for the maximize button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximize: Option<PathBuf>,
    /// Icon for the minimize button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimize: Option<PathBuf>,
}

impl IconPaths {
    /// Configured icon file for `button`, if any
    pub fn path_for(&self, button: ButtonType) -> Option<&Path> {
        match button {
            ButtonType::Close => self.close.as_deref(),
            ButtonType::Maximize => self.maximize.as_deref(),
            ButtonType::Minimize => self.minimize.as_deref(),
        }
    }
}

/// # Decoration Theme Configuration
///
/// Immutable once handed to a [`Theme`](crate::theme::Theme).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Font family name or path to a TrueType/OpenType file
    pub font: String,
    /// Height of the title bar in logical pixels
    pub title_height: i32,
    /// Thickness of the resize border in logical pixels
    pub border_size: i32,
    /// Frame color while the window is focused
    pub active_color: Color,
    /// Frame color while the window is not focused
    pub inactive_color: Color,
    /// Title text color
    pub text_color: Color,
    /// Fixed resolution buttons are rasterized at, `(width, height)`
    pub button_raster_size: (u32, u32),
    /// Button icon assets
    pub icons: IconPaths,
}

impl ThemeConfig {
    /// Create the default theme configuration
    pub fn new() -> Self {
        Self {
            font: "serif".to_string(),
            title_height: 50,
            border_size: 5,
            active_color: rgba(0.15, 0.15, 0.15, 0.8),
            inactive_color: rgba(0.25, 0.25, 0.25, 0.95),
            text_color: rgba(1.0, 1.0, 1.0, 1.0),
            button_raster_size: (60, 30),
            icons: IconPaths::default(),
        }
    }

    /// Set the font
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set title bar height and border thickness
    pub fn with_sizes(mut self, title_height: i32, border_size: i32) -> Self {
        self.title_height = title_height;
        self.border_size = border_size;
        self
    }

    /// Set active and inactive frame colors
    pub fn with_colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }

    /// Set the icon file for one button type
    pub fn with_icon(mut self, button: ButtonType, path: impl Into<PathBuf>) -> Self {
        let slot = match button {
            ButtonType::Close => &mut self.icons.close,
            ButtonType::Maximize => &mut self.icons.maximize,
            ButtonType::Minimize => &mut self.icons.minimize,
        };
        *slot = Some(path.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.border_size <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "border_size",
                reason: format!("must be positive, got {}", self.border_size),
            });
        }

        if self.title_height <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "title_height",
                reason: format!("must be positive, got {}", self.title_height),
            });
        }

        // The layout carves the button padding out of the title bar
        if self.title_height < self.border_size {
            return Err(ConfigError::InvalidValue {
                field: "title_height",
                reason: format!(
                    "must not be smaller than border_size ({} < {})",
                    self.title_height, self.border_size
                ),
            });
        }

        let (width, height) = self.button_raster_size;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "button_raster_size",
                reason: format!("must be non-zero, got {width}x{height}"),
            });
        }

        Ok(())
    }

    /// Resolve the configured font to a file on disk
    ///
    /// An existing path is used as-is; otherwise the font directories are
    /// searched for `<name>.ttf`/`<name>.otf`, mapping generic family names
    /// (`serif`, `sans-serif`, `monospace`) to a common file stem first.
    pub fn resolve_font_path(&self) -> Option<PathBuf> {
        let direct = Path::new(&self.font);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }

        let stem = GENERIC_FAMILIES
            .iter()
            .find(|(family, _)| family.eq_ignore_ascii_case(&self.font))
            .map_or(self.font.as_str(), |&(_, stem)| stem);

        FONT_DIRS
            .iter()
            .flat_map(|dir| {
                ["ttf", "otf"]
                    .into_iter()
                    .map(move |ext| PathBuf::from(format!("{dir}{stem}.{ext}")))
            })
            .find(|candidate| candidate.is_file())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ThemeConfig {}
