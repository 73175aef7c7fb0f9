//! Decoration preview
//!
//! Drives one decoration through a short scripted session (resize, title
//! change and a click on the close button) against the software backend and
//! writes the frame to a PNG.
//!
//! Usage: `decor_preview [theme.toml|theme.ron] [output.png]`

use std::rc::Rc;

use window_decor::foundation::logging;
use window_decor::prelude::*;

const OUTPUT_WIDTH: i32 = 1024;
const OUTPUT_HEIGHT: i32 = 768;

/// Stand-in for a compositor view that logs every request
struct PreviewView {
    title: String,
    activated: bool,
    damaged: usize,
}

impl DecoratedView for PreviewView {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn is_activated(&self) -> bool {
        self.activated
    }

    fn damage(&mut self) {
        self.damaged += 1;
    }

    fn request_move(&mut self) {
        log::info!("View requested an interactive move");
    }

    fn request_resize(&mut self, edges: ResizeEdges) {
        log::info!("View requested an interactive resize: {:?}", edges);
    }

    fn request_action(&mut self, action: DecorationAction) {
        log::info!("View requested action {:?}", action);
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        log::debug!("Cursor set to {}", cursor.name());
    }
}

fn load_theme(path: Option<&str>) -> Result<Theme, DecorError> {
    let config = match path {
        Some(path) => {
            log::info!("Loading theme from {}", path);
            ThemeConfig::load_from_file(path)?
        }
        None => ThemeConfig::default(),
    };
    Theme::new(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = args.first().map(String::as_str);
    let output_path = args.get(1).map_or("decoration.png", String::as_str);

    let theme = Rc::new(load_theme(config_path)?);
    let mut view = PreviewView {
        title: "Terminal".to_string(),
        activated: true,
        damaged: 0,
    };

    let mut bus = EventBus::new();
    let mut decoration = DecorationSurface::new(Rc::clone(&theme), &view);
    decoration.attach(&mut bus);

    let content = Rect::new(120, 140, 760, 520);
    let decorated = decoration.expand_geometry(content);
    bus.publish(ViewEvent::Resized(decorated));
    bus.publish(ViewEvent::TitleChanged("Terminal - ~/src/window_decor".to_string()));
    decoration.process_events(&mut bus, &mut view);

    log::info!(
        "Content {:?} decorated as {:?}, offset {:?}",
        content,
        decorated,
        decoration.get_offset()
    );

    // Hover the border, then click the close button
    decoration.on_pointer_enter(2, decorated.height / 2, &mut view);
    let close_button = decoration
        .layout()
        .areas()
        .find(|(_, area)| area.area_type() == AreaType::Button)
        .map(|(_, area)| area.geometry());
    if let Some(rect) = close_button {
        let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
        decoration.on_pointer_motion(x, y, &mut view);
        decoration.on_pointer_button(PointerButton::Left, true, &mut view);
        let action = decoration.on_pointer_button(PointerButton::Left, false, &mut view);
        log::info!("Click on the close button classified as {:?}", action);
    }
    decoration.on_pointer_leave();

    let target = RenderTarget::new(Rect::new(0, 0, OUTPUT_WIDTH, OUTPUT_HEIGHT), 1.0);
    let mut renderer =
        SoftwareRenderer::with_clear_color(OUTPUT_WIDTH as u32, OUTPUT_HEIGHT as u32, [40, 60, 90, 255]);
    let damage = Region::from_rect(target.bounds());
    let origin = Point::new(decorated.x, decorated.y);

    decoration.render(&mut renderer, &target, origin, &damage)?;

    decoration.release_resources(&mut renderer);
    decoration.detach(&mut bus);

    let stats = renderer.stats();
    log::info!(
        "Rendered {} passes, {} uploads, {} releases, {} damage requests",
        stats.passes,
        stats.uploads,
        stats.releases,
        view.damaged
    );

    renderer.framebuffer().save(output_path)?;
    log::info!("Wrote {}", output_path);
    Ok(())
}
