//! Decoration theme
//!
//! Owns the style configuration and does the stateless rasterization work:
//! flat backgrounds, title text and button icons. One theme is typically
//! shared by every decoration through an `Rc<Theme>`.

use crate::assets::{FontFace, ImageData};
use crate::config::ThemeConfig;
use crate::decoration::ButtonType;
use crate::error::DecorResult;
use crate::foundation::math::color_to_rgba8;
use crate::foundation::{Color, Rect};
use crate::render::{render_scoped, RenderBackend, RenderResult, RenderTarget};

/// Title text is sized relative to the height of the buffer it is drawn into
const FONT_SCALE: f32 = 0.8;

/// Manages the look of decorations: colors, sizes, text and icons
#[derive(Debug)]
pub struct Theme {
    config: ThemeConfig,
    font: Option<FontFace>,
}

impl Theme {
    /// Create a theme, degrading gracefully when the font cannot be loaded
    ///
    /// Without a font, title text renders as a transparent buffer.
    pub fn new(config: ThemeConfig) -> DecorResult<Self> {
        config.validate()?;

        let font = match config.resolve_font_path() {
            Some(path) => match FontFace::from_file(&path) {
                Ok(font) => Some(font),
                Err(e) => {
                    log::warn!("Failed to load font {}: {}; titles will not be drawn", path.display(), e);
                    None
                }
            },
            None => {
                log::warn!("Font '{}' not found; titles will not be drawn", config.font);
                None
            }
        };

        log::info!(
            "Decoration theme ready: title {}px, border {}px, font {}",
            config.title_height,
            config.border_size,
            font.as_ref().map_or("<none>", FontFace::name)
        );
        Ok(Self { config, font })
    }

    /// Create a theme, failing if the font or any configured icon cannot be loaded
    pub fn load_strict(config: ThemeConfig) -> DecorResult<Self> {
        config.validate()?;

        let path = config
            .resolve_font_path()
            .ok_or_else(|| crate::assets::AssetError::NotFound(format!("font '{}'", config.font)))?;
        let font = FontFace::from_file(path)?;

        for button in ButtonType::ALL {
            if let Some(icon) = config.icons.path_for(button) {
                ImageData::from_file(icon)?;
            }
        }

        Ok(Self { config, font: Some(font) })
    }

    /// Create a theme with an already loaded font (or none)
    pub fn with_font(config: ThemeConfig, font: Option<FontFace>) -> DecorResult<Self> {
        config.validate()?;
        Ok(Self { config, font })
    }

    /// The configuration this theme was built from
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Whether title text can be rendered
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// The available height for displaying the title
    pub fn get_title_height(&self) -> i32 {
        self.config.title_height
    }

    /// The available border for resizing
    pub fn get_border_size(&self) -> i32 {
        self.config.border_size
    }

    /// Frame color for the given activation state
    pub fn background_color(&self, active: bool) -> &Color {
        if active {
            &self.config.active_color
        } else {
            &self.config.inactive_color
        }
    }

    /// Fill `rectangle` (logical layout coordinates) with the frame color
    ///
    /// Drawing is clipped to `scissor`, given in framebuffer coordinates.
    pub fn render_background(
        &self,
        backend: &mut dyn RenderBackend,
        target: &RenderTarget,
        rectangle: Rect,
        scissor: Rect,
        active: bool,
    ) -> RenderResult<()> {
        let rect = target.framebuffer_box_from_geometry_box(rectangle);
        let color = self.background_color(active);

        render_scoped(backend, target, scissor, |b| b.fill_rect(rect, color))
    }

    /// Render `text` left-aligned into a fresh `width` x `height` buffer
    pub fn render_text(&self, text: &str, width: u32, height: u32) -> ImageData {
        match &self.font {
            Some(font) => {
                let font_size = height as f32 * FONT_SCALE;
                font.rasterize_line(text, font_size, &self.config.text_color, width, height)
            }
            None => ImageData::transparent(width, height),
        }
    }

    /// Icon for `button`, scaled to exactly `width` x `height` over transparency
    ///
    /// Falls back to a drawn placeholder glyph when no icon asset is
    /// configured or the asset fails to load.
    pub fn get_button_surface(&self, button: ButtonType, width: u32, height: u32) -> ImageData {
        let Some(path) = self.config.icons.path_for(button) else {
            log::debug!("No icon configured for {:?}, using placeholder", button);
            return placeholder_glyph(button, width, height, &self.config.text_color);
        };

        match ImageData::from_file(path) {
            Ok(icon) => icon.resized(width, height),
            Err(e) => {
                log::warn!("Icon for {:?} unavailable ({}), using placeholder", button, e);
                placeholder_glyph(button, width, height, &self.config.text_color)
            }
        }
    }
}

/// Procedurally drawn stand-in for a button icon
///
/// The glyph sits in a centered square half the size of the shorter side.
fn placeholder_glyph(button: ButtonType, width: u32, height: u32, color: &Color) -> ImageData {
    let mut image = ImageData::transparent(width, height);
    let side = width.min(height) as f32 * 0.5;
    if side < 1.0 {
        return image;
    }

    let left = (width as f32 - side) / 2.0;
    let top = (height as f32 - side) / 2.0;
    let stroke = (side / 8.0).max(1.0);
    let rgba = color_to_rgba8(color);

    for y in 0..height {
        for x in 0..width {
            // Pixel center relative to the glyph square
            let u = x as f32 + 0.5 - left;
            let v = y as f32 + 0.5 - top;
            if u < 0.0 || v < 0.0 || u > side || v > side {
                continue;
            }

            let inked = match button {
                ButtonType::Close => {
                    let diagonal = (u - v).abs() / std::f32::consts::SQRT_2;
                    let anti_diagonal = (u + v - side).abs() / std::f32::consts::SQRT_2;
                    diagonal <= stroke / 2.0 || anti_diagonal <= stroke / 2.0
                }
                ButtonType::Maximize => {
                    u <= stroke || v <= stroke || u >= side - stroke || v >= side - stroke
                }
                ButtonType::Minimize => v >= side - stroke,
            };

            if inked {
                let idx = ((y * width + x) * 4) as usize;
                image.data[idx..idx + 4].copy_from_slice(&rgba);
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecorError;
    use crate::render::testing::{Op, RecordingBackend};

    fn fontless_theme() -> Theme {
        Theme::with_font(ThemeConfig::default(), None).unwrap()
    }

    #[test]
    fn test_sizes_come_from_config() {
        let theme = Theme::with_font(ThemeConfig::default().with_sizes(30, 3), None).unwrap();
        assert_eq!(theme.get_title_height(), 30);
        assert_eq!(theme.get_border_size(), 3);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = Theme::with_font(ThemeConfig::default().with_sizes(0, 5), None);
        assert!(matches!(result, Err(DecorError::Config(_))));
    }

    #[test]
    fn test_strict_load_reports_missing_font() {
        let config = ThemeConfig::default().with_font("/nonexistent/window_decor.ttf");
        let result = Theme::load_strict(config);
        assert!(matches!(result, Err(DecorError::AssetMissing(_))));
    }

    #[test]
    fn test_missing_font_degrades() {
        let config = ThemeConfig::default().with_font("/nonexistent/window_decor.ttf");
        let theme = Theme::new(config).unwrap();
        assert!(!theme.has_font());

        let text = theme.render_text("Terminal", 200, 40);
        assert_eq!((text.width, text.height), (200, 40));
        assert!(text.is_fully_transparent());
    }

    #[test]
    #[ignore = "needs a sans-serif font installed in one of the system font directories"]
    fn test_render_text_with_system_font() {
        let config = ThemeConfig::default().with_font("sans-serif");
        let path = config
            .resolve_font_path()
            .expect("no sans-serif font found in the system font directories");
        let font = FontFace::from_file(path).unwrap();
        let theme = Theme::with_font(config, Some(font)).unwrap();

        let text = theme.render_text("Hello", 200, 40);
        assert_eq!((text.width, text.height), (200, 40));
        assert!(!text.is_fully_transparent());
        // Left-aligned: nothing is drawn in the right half for a short string
        for y in 0..40 {
            assert_eq!(text.pixel(199, y).unwrap()[3], 0);
        }
    }

    #[test]
    fn test_render_background_uses_activation_color() {
        let theme = fontless_theme();
        let target = RenderTarget::new(Rect::new(0, 0, 800, 600), 1.0);
        let mut backend = RecordingBackend::new();

        theme
            .render_background(&mut backend, &target, Rect::new(10, 10, 100, 50), Rect::new(10, 10, 5, 5), false)
            .unwrap();

        assert_eq!(
            backend.ops,
            vec![
                Op::Begin,
                Op::Scissor(Rect::new(10, 10, 5, 5)),
                Op::Fill(Rect::new(10, 10, 100, 50)),
                Op::End,
            ]
        );
        assert_eq!(backend.fill_colors, vec![theme.config().inactive_color]);
    }

    #[test]
    fn test_button_surface_scales_icon_exactly() {
        let path = std::env::temp_dir().join("window_decor_theme_close_icon.png");
        image::RgbaImage::from_pixel(16, 16, image::Rgba([200, 30, 30, 255]))
            .save(&path)
            .unwrap();

        let config = ThemeConfig::default().with_icon(ButtonType::Close, &path);
        let theme = Theme::with_font(config, None).unwrap();
        let surface = theme.get_button_surface(ButtonType::Close, 60, 30);

        assert_eq!((surface.width, surface.height), (60, 30));
        let [r, g, b, a] = surface.pixel(30, 15).unwrap();
        assert!(r.abs_diff(200) <= 1 && g.abs_diff(30) <= 1 && b.abs_diff(30) <= 1);
        assert_eq!(a, 255);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_icon_uses_placeholder() {
        let config = ThemeConfig::default().with_icon(ButtonType::Close, "/nonexistent/close.png");
        let theme = Theme::with_font(config, None).unwrap();
        let surface = theme.get_button_surface(ButtonType::Close, 60, 30);

        assert_eq!((surface.width, surface.height), (60, 30));
        // The cross passes through the center, the corners stay clear
        assert_eq!(surface.pixel(30, 15).unwrap()[3], 255);
        assert_eq!(surface.pixel(0, 0).unwrap()[3], 0);
    }

    #[test]
    fn test_placeholder_glyphs_differ_per_button() {
        let theme = fontless_theme();
        let close = theme.get_button_surface(ButtonType::Close, 60, 30);
        let maximize = theme.get_button_surface(ButtonType::Maximize, 60, 30);
        let minimize = theme.get_button_surface(ButtonType::Minimize, 60, 30);

        assert_ne!(close, maximize);
        assert_ne!(maximize, minimize);
        // Minimize is a bar at the bottom of the glyph square, empty in the middle
        assert_eq!(minimize.pixel(30, 15).unwrap()[3], 0);
    }
}
