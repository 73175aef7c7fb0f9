//! Decoration surface
//!
//! The surface is the decoration as the windowing layer sees it: it tracks
//! the decorated size, routes pointer and touch input, converts between
//! content and decorated geometry, and paints the frame for each damaged
//! rectangle.

use std::rc::Rc;

use super::area::{AreaContent, DecorationAction};
use super::layout::DecorationLayout;
use super::title::TitleCache;
use crate::error::DecorResult;
use crate::events::{EventBus, SubscriberId, ViewEvent, ViewTopic};
use crate::foundation::math::Offset;
use crate::foundation::{Point, Rect, Region};
use crate::input::{edges_at, CursorShape, PointerButton, ResizeEdges};
use crate::render::{RenderBackend, RenderTarget, TextureHandle};
use crate::theme::Theme;

/// Size of a decoration before its first resize notification
const INITIAL_SIZE: i32 = 100;

/// The window a decoration belongs to, as provided by the windowing layer
///
/// Requests are fire-and-forget; the decoration never performs a move,
/// resize or close itself.
pub trait DecoratedView {
    /// Current window title
    fn title(&self) -> String;

    /// Whether the window is fullscreen
    fn is_fullscreen(&self) -> bool;

    /// Whether the window is activated (focused)
    fn is_activated(&self) -> bool;

    /// Schedule a repaint of the window and its decoration
    fn damage(&mut self);

    /// Start an interactive move
    fn request_move(&mut self);

    /// Start an interactive resize along `edges`
    fn request_resize(&mut self, edges: ResizeEdges);

    /// Carry out a completed button click
    fn request_action(&mut self, action: DecorationAction);

    /// Show `cursor` while the pointer is over the decoration
    fn set_cursor(&mut self, cursor: CursorShape);
}

/// Server-side decoration of one window
#[derive(Debug)]
pub struct DecorationSurface {
    theme: Rc<Theme>,
    layout: DecorationLayout,
    title_cache: TitleCache,

    title: String,
    active: bool,
    fullscreen: bool,

    width: i32,
    height: i32,
    border_thickness: i32,
    title_thickness: i32,
    cached_region: Region,

    cursor: Point,
    subscription: Option<SubscriberId>,
    pending_release: Vec<TextureHandle>,
}

impl DecorationSurface {
    /// Create a decoration for `view`
    ///
    /// The decoration assumes a 100x100 size until the first resize
    /// notification arrives.
    pub fn new(theme: Rc<Theme>, view: &dyn DecoratedView) -> Self {
        let layout = DecorationLayout::new(Rc::clone(&theme));
        let mut surface = Self {
            theme,
            layout,
            title_cache: TitleCache::new(),
            title: view.title(),
            active: view.is_activated(),
            fullscreen: view.is_fullscreen(),
            width: INITIAL_SIZE,
            height: INITIAL_SIZE,
            border_thickness: 0,
            title_thickness: 0,
            cached_region: Region::new(),
            cursor: Point::new(-1, -1),
            subscription: None,
            pending_release: Vec::new(),
        };
        surface.update_decoration_size();
        surface
    }

    /// Subscribe to view notifications on `bus`
    pub fn attach(&mut self, bus: &mut EventBus) -> SubscriberId {
        if let Some(id) = self.subscription {
            return id;
        }

        let id = bus.add_subscriber();
        for topic in ViewTopic::ALL {
            bus.subscribe(id, topic);
        }
        self.subscription = Some(id);
        id
    }

    /// Unsubscribe from `bus`; queued notifications are dropped
    pub fn detach(&mut self, bus: &mut EventBus) {
        if let Some(id) = self.subscription.take() {
            for topic in ViewTopic::ALL {
                bus.unsubscribe(id, topic);
            }
            bus.remove_subscriber(id);
        }
    }

    /// Handle every notification queued for this decoration, oldest first
    pub fn process_events(&mut self, bus: &mut EventBus, view: &mut dyn DecoratedView) {
        let Some(id) = self.subscription else {
            return;
        };

        for event in bus.drain(id) {
            self.handle_view_event(event, view);
        }
    }

    /// Handle one view notification
    pub fn handle_view_event(&mut self, event: ViewEvent, view: &mut dyn DecoratedView) {
        match event {
            ViewEvent::TitleChanged(title) => self.notify_title_changed(title, view),
            ViewEvent::Resized(geometry) => self.notify_view_resized(geometry, view),
            ViewEvent::FullscreenChanged(fullscreen) => self.notify_view_fullscreen(fullscreen, view),
            ViewEvent::ActivationChanged(active) => self.notify_view_activated(active, view),
            ViewEvent::FocusLost => self.notify_focus_lost(),
        }
    }

    /// The window-manager geometry of the view changed
    ///
    /// `geometry` is the decorated geometry, as produced by
    /// [`expand_geometry`](Self::expand_geometry).
    pub fn notify_view_resized(&mut self, geometry: Rect, view: &mut dyn DecoratedView) {
        view.damage();

        if (geometry.width, geometry.height) != (self.width, self.height) {
            self.pending_release.extend(self.title_cache.take_texture());
        }
        self.width = geometry.width;
        self.height = geometry.height;
        self.update_decoration_size();

        view.damage();
    }

    /// The view was activated or deactivated
    pub fn notify_view_activated(&mut self, active: bool, view: &mut dyn DecoratedView) {
        if self.active != active {
            view.damage();
        }
        self.active = active;
    }

    /// The view entered or left fullscreen
    pub fn notify_view_fullscreen(&mut self, fullscreen: bool, view: &mut dyn DecoratedView) {
        if self.fullscreen == fullscreen {
            return;
        }

        self.fullscreen = fullscreen;
        self.update_decoration_size();
        view.damage();
    }

    /// The view's title changed
    pub fn notify_title_changed(&mut self, title: String, view: &mut dyn DecoratedView) {
        if self.title == title {
            return;
        }

        log::debug!("Decoration title changed to {:?}", title);
        self.title = title;
        self.title_cache.invalidate();
        view.damage();
    }

    /// The decoration or its window lost input focus
    pub fn notify_focus_lost(&mut self) {
        self.layout.handle_focus_lost();
    }

    fn update_decoration_size(&mut self) {
        if self.fullscreen {
            self.border_thickness = 0;
            self.title_thickness = 0;
            self.layout.clear();
        } else {
            self.border_thickness = self.theme.get_border_size();
            self.title_thickness = self.theme.get_title_height();
            self.layout.resize(self.width, self.height);
        }

        self.cached_region = self.layout.calculate_region();
    }

    /// Title currently displayed
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the active frame color is used
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the decoration is hidden for fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Border thickness in effect, 0 while fullscreen
    pub fn border_thickness(&self) -> i32 {
        self.border_thickness
    }

    /// Title bar height in effect, 0 while fullscreen
    pub fn title_thickness(&self) -> i32 {
        self.title_thickness
    }

    /// The decoration layout
    pub fn layout(&self) -> &DecorationLayout {
        &self.layout
    }

    /// Union of every area, in decoration-local coordinates
    pub fn cached_region(&self) -> &Region {
        &self.cached_region
    }

    /// Position of the decoration relative to the window content
    pub fn get_offset(&self) -> Point {
        Point::new(
            -self.border_thickness,
            -(self.border_thickness + self.title_thickness),
        )
    }

    /// Decorated size, `(width, height)`
    pub fn get_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Grow a content rectangle to include the decoration
    pub fn expand_geometry(&self, content: Rect) -> Rect {
        let border = self.border_thickness;
        let title = self.title_thickness;

        Rect::new(
            content.x - border,
            content.y - border - title,
            content.width + 2 * border,
            content.height + 2 * border + title,
        )
    }

    /// Content size for a requested decorated size, each dimension at least 1
    pub fn shrink_target_size(&self, target_width: i32, target_height: i32) -> (i32, i32) {
        let border = self.border_thickness;
        let title = self.title_thickness;

        (
            (target_width - 2 * border).max(1),
            (target_height - 2 * border - title).max(1),
        )
    }

    /// Whether the decoration-local point `(x, y)` belongs to the decoration
    pub fn accepts_input(&self, x: i32, y: i32) -> bool {
        self.cached_region.contains_point(Point::new(x, y))
    }

    /// Edges a press at `point` would resize
    pub fn edges_at(&self, point: Point) -> ResizeEdges {
        edges_at(point, self.width, self.height, self.border_thickness)
    }

    /// The pointer entered the decoration at `(x, y)`
    pub fn on_pointer_enter(&mut self, x: i32, y: i32, view: &mut dyn DecoratedView) {
        self.on_pointer_motion(x, y, view);
    }

    /// The pointer moved to `(x, y)`
    pub fn on_pointer_motion(&mut self, x: i32, y: i32, view: &mut dyn DecoratedView) {
        self.cursor = Point::new(x, y);
        self.layout.handle_motion(x, y);
        view.set_cursor(CursorShape::for_edges(self.edges_at(self.cursor)));
    }

    /// The pointer left the decoration
    pub fn on_pointer_leave(&mut self) {
        self.cursor = Point::new(-1, -1);
        self.layout.handle_motion(self.cursor.x, self.cursor.y);
    }

    /// A pointer button was pressed or released at the current pointer position
    ///
    /// Only the primary button is handled. A press always requests a move,
    /// or a resize when it lands on an edge, before the layout classifies it.
    pub fn on_pointer_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
        view: &mut dyn DecoratedView,
    ) -> DecorationAction {
        if button != PointerButton::Left {
            return DecorationAction::None;
        }

        if pressed {
            self.request_move_or_resize(self.cursor, view);
        }

        let action = self.layout.handle_press_event(pressed);
        match action {
            DecorationAction::Close | DecorationAction::Maximize | DecorationAction::Minimize => {
                log::debug!("Decoration button clicked: {:?}", action);
                view.request_action(action);
            }
            DecorationAction::None | DecorationAction::Move | DecorationAction::Resize => {}
        }
        action
    }

    /// A touch point went down at `(x, y)`
    pub fn on_touch_down(&mut self, x: i32, y: i32, view: &mut dyn DecoratedView) {
        self.request_move_or_resize(Point::new(x, y), view);
    }

    fn request_move_or_resize(&self, point: Point, view: &mut dyn DecoratedView) {
        let edges = self.edges_at(point);
        if edges.is_empty() {
            view.request_move();
        } else {
            view.request_resize(edges);
        }
    }

    /// Paint the decoration placed at `offset` (logical layout coordinates)
    ///
    /// `damage` is in damage coordinates of `target`. Each damaged rectangle is
    /// painted in its own render brackets.
    pub fn render(
        &mut self,
        backend: &mut dyn RenderBackend,
        target: &RenderTarget,
        offset: Point,
        damage: &Region,
    ) -> DecorResult<()> {
        self.release_retired(backend);

        let origin = Offset::new(offset.x, offset.y);
        let frame = target
            .damage_region_from_geometry(&self.cached_region.translated(origin))
            .intersect(damage);

        for rect in &frame {
            let scissor = target.framebuffer_box_from_damage_box(*rect);
            if let Err(e) = self.render_scissor_box(backend, target, origin, scissor) {
                log::error!("Failed to render decoration: {}", e);
                return Err(e);
            }
        }
        Ok(())
    }

    fn render_scissor_box(
        &mut self,
        backend: &mut dyn RenderBackend,
        target: &RenderTarget,
        origin: Offset,
        scissor: Rect,
    ) -> DecorResult<()> {
        let frame = Rect::new(origin.x, origin.y, self.width, self.height);
        self.theme
            .render_background(backend, target, frame, scissor, self.active)?;

        for handle in self.layout.get_renderable_areas() {
            let Some(area) = self.layout.area_mut(handle) else {
                continue;
            };
            let geometry = area.geometry().translated(origin);

            match area.content_mut() {
                AreaContent::Title => {
                    self.title_cache
                        .render(backend, target, &self.theme, &self.title, geometry, scissor)?;
                }
                AreaContent::Button(button) => button.render(backend, target, geometry, scissor)?,
                AreaContent::Move | AreaContent::Resize(_) => {}
            }
        }
        Ok(())
    }

    fn release_retired(&mut self, backend: &mut dyn RenderBackend) {
        let retired = self.layout.take_retired_textures();
        for texture in retired.into_iter().chain(self.pending_release.drain(..)) {
            log::trace!("Releasing retired decoration texture {:?}", texture);
            backend.release_texture(texture);
        }
    }

    /// Release every texture this decoration holds
    ///
    /// Anything still needed is uploaded again on the next render.
    pub fn release_resources(&mut self, backend: &mut dyn RenderBackend) {
        self.layout.retire_textures();
        self.pending_release.extend(self.title_cache.take_texture());
        self.release_retired(backend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::render::testing::{Op, RecordingBackend};
    use crate::render::{ImageOrigin, SoftwareRenderer};

    #[derive(Debug, Default)]
    struct MockView {
        title: String,
        fullscreen: bool,
        activated: bool,
        damage_count: usize,
        moves: usize,
        resizes: Vec<ResizeEdges>,
        actions: Vec<DecorationAction>,
        cursors: Vec<CursorShape>,
    }

    impl DecoratedView for MockView {
        fn title(&self) -> String {
            self.title.clone()
        }
        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
        fn is_activated(&self) -> bool {
            self.activated
        }
        fn damage(&mut self) {
            self.damage_count += 1;
        }
        fn request_move(&mut self) {
            self.moves += 1;
        }
        fn request_resize(&mut self, edges: ResizeEdges) {
            self.resizes.push(edges);
        }
        fn request_action(&mut self, action: DecorationAction) {
            self.actions.push(action);
        }
        fn set_cursor(&mut self, cursor: CursorShape) {
            self.cursors.push(cursor);
        }
    }

    fn theme() -> Rc<Theme> {
        Rc::new(Theme::with_font(ThemeConfig::default().with_sizes(50, 5), None).unwrap())
    }

    fn surface(view: &mut MockView) -> DecorationSurface {
        view.title = "term".into();
        view.activated = true;
        let mut surface = DecorationSurface::new(theme(), &*view);
        surface.notify_view_resized(Rect::new(0, 0, 800, 600), view);
        surface
    }

    fn full_damage(width: i32, height: i32) -> Region {
        Region::from_rect(Rect::new(0, 0, width, height))
    }

    #[test]
    fn test_geometry_transforms() {
        let mut view = MockView::default();
        let surface = surface(&mut view);

        assert_eq!(surface.get_offset(), Point::new(-5, -55));
        assert_eq!(
            surface.expand_geometry(Rect::new(100, 100, 790, 540)),
            Rect::new(95, 45, 800, 600)
        );
        assert_eq!(surface.shrink_target_size(800, 600), (790, 540));
        assert_eq!(surface.shrink_target_size(4, 20), (1, 1));
    }

    #[test]
    fn test_resize_updates_region() {
        let mut view = MockView::default();
        let surface = surface(&mut view);

        assert_eq!(surface.get_size(), (800, 600));
        assert!(surface.cached_region().covers_same(&surface.layout().calculate_region()));
        assert!(surface.accepts_input(2, 300));
        assert!(surface.accepts_input(100, 25));
        assert!(!surface.accepts_input(400, 300));
        assert!(view.damage_count >= 1);
    }

    #[test]
    fn test_fullscreen_hides_decoration() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.notify_view_fullscreen(true, &mut view);
        assert_eq!((surface.border_thickness(), surface.title_thickness()), (0, 0));
        assert!(surface.cached_region().is_empty());
        assert_eq!(surface.get_offset(), Point::new(0, 0));
        assert_eq!(surface.expand_geometry(Rect::new(0, 0, 1920, 1080)), Rect::new(0, 0, 1920, 1080));
        assert!(!surface.accepts_input(2, 300));

        surface.notify_view_fullscreen(false, &mut view);
        assert_eq!((surface.border_thickness(), surface.title_thickness()), (5, 50));
        assert_eq!(surface.layout().len(), 7);
    }

    #[test]
    fn test_fullscreen_at_creation() {
        let mut view = MockView { fullscreen: true, ..MockView::default() };
        let mut surface = DecorationSurface::new(theme(), &view);
        surface.notify_view_resized(Rect::new(0, 0, 1920, 1080), &mut view);

        assert!(surface.is_fullscreen());
        assert!(surface.layout().is_empty());
    }

    #[test]
    fn test_cursor_follows_edges() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_pointer_enter(2, 300, &mut view);
        surface.on_pointer_motion(798, 598, &mut view);
        surface.on_pointer_motion(400, 25, &mut view);

        assert_eq!(
            view.cursors,
            vec![
                CursorShape::Resize(ResizeEdges::LEFT),
                CursorShape::Resize(ResizeEdges::RIGHT | ResizeEdges::BOTTOM),
                CursorShape::Default,
            ]
        );
    }

    #[test]
    fn test_press_requests_resize_on_edges() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_pointer_motion(798, 598, &mut view);
        let action = surface.on_pointer_button(PointerButton::Left, true, &mut view);

        assert_eq!(action, DecorationAction::Resize);
        assert_eq!(view.resizes, vec![ResizeEdges::RIGHT | ResizeEdges::BOTTOM]);
        assert_eq!(view.moves, 0);
    }

    #[test]
    fn test_press_on_title_requests_move() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_pointer_motion(100, 25, &mut view);
        surface.on_pointer_button(PointerButton::Left, true, &mut view);
        surface.on_pointer_button(PointerButton::Left, false, &mut view);

        assert_eq!(view.moves, 1);
        assert!(view.resizes.is_empty());
        assert!(view.actions.is_empty());
    }

    #[test]
    fn test_click_on_close_requests_close() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_pointer_motion(760, 25, &mut view);
        surface.on_pointer_button(PointerButton::Left, true, &mut view);
        let action = surface.on_pointer_button(PointerButton::Left, false, &mut view);

        assert_eq!(action, DecorationAction::Close);
        assert_eq!(view.actions, vec![DecorationAction::Close]);
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_pointer_motion(760, 25, &mut view);
        surface.on_pointer_button(PointerButton::Right, true, &mut view);
        surface.on_pointer_button(PointerButton::Right, false, &mut view);

        assert_eq!(view.moves, 0);
        assert!(view.actions.is_empty());
        assert!(!surface.layout().is_grabbed());
    }

    #[test]
    fn test_focus_loss_cancels_click() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_pointer_motion(760, 25, &mut view);
        surface.on_pointer_button(PointerButton::Left, true, &mut view);
        surface.notify_focus_lost();
        surface.on_pointer_button(PointerButton::Left, false, &mut view);

        assert!(view.actions.is_empty());
    }

    #[test]
    fn test_pointer_leave_cancels_click() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_pointer_motion(760, 25, &mut view);
        surface.on_pointer_button(PointerButton::Left, true, &mut view);
        surface.on_pointer_leave();
        surface.on_pointer_button(PointerButton::Left, false, &mut view);

        assert!(view.actions.is_empty());
    }

    #[test]
    fn test_touch_down_requests_move_or_resize() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);

        surface.on_touch_down(2, 300, &mut view);
        surface.on_touch_down(400, 25, &mut view);

        assert_eq!(view.resizes, vec![ResizeEdges::LEFT]);
        assert_eq!(view.moves, 1);
    }

    #[test]
    fn test_activation_change_damages_once() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let before = view.damage_count;

        surface.notify_view_activated(true, &mut view);
        assert_eq!(view.damage_count, before);

        surface.notify_view_activated(false, &mut view);
        assert_eq!(view.damage_count, before + 1);
        assert!(!surface.is_active());
    }

    #[test]
    fn test_events_from_bus() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let mut bus = EventBus::new();
        surface.attach(&mut bus);

        bus.publish(ViewEvent::Resized(Rect::new(0, 0, 1024, 768)));
        bus.publish(ViewEvent::TitleChanged("vim".into()));
        bus.publish(ViewEvent::ActivationChanged(false));
        surface.process_events(&mut bus, &mut view);

        assert_eq!(surface.get_size(), (1024, 768));
        assert_eq!(surface.title(), "vim");
        assert!(!surface.is_active());

        surface.detach(&mut bus);
        assert_eq!(bus.publish(ViewEvent::FocusLost), 0);
    }

    #[test]
    fn test_render_brackets_per_damage_rect() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let target = RenderTarget::new(Rect::new(0, 0, 800, 600), 1.0);
        let mut backend = RecordingBackend::new();

        // Only the top strip is damaged
        surface
            .render(&mut backend, &target, Point::new(0, 0), &Region::from_rect(Rect::new(0, 0, 800, 3)))
            .unwrap();

        let begins = backend.ops.iter().filter(|op| **op == Op::Begin).count();
        let ends = backend.ops.iter().filter(|op| **op == Op::End).count();
        assert_eq!(begins, ends);
        assert!(!backend.in_pass);
        // Background, title and button each get their own bracket
        assert_eq!(begins % 3, 0);

        let damaged = Rect::new(0, 0, 800, 3);
        let scissors: Vec<Rect> = backend
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Scissor(rect) => Some(*rect),
                _ => None,
            })
            .collect();
        assert!(scissors.iter().all(|rect| damaged.contains_rect(rect)));
        assert_eq!(scissors.iter().map(Rect::area).sum::<i64>(), 3 * damaged.area());
        assert_eq!(backend.fill_colors[0], surface.theme.config().active_color);
    }

    #[test]
    fn test_undamaged_decoration_is_not_painted() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let target = RenderTarget::new(Rect::new(0, 0, 800, 600), 1.0);
        let mut backend = RecordingBackend::new();

        // Damage inside the content area only
        surface
            .render(&mut backend, &target, Point::new(0, 0), &Region::from_rect(Rect::new(100, 100, 50, 50)))
            .unwrap();

        assert!(backend.ops.is_empty());
    }

    #[test]
    fn test_resize_releases_old_textures_on_next_render() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let target = RenderTarget::new(Rect::new(0, 0, 1024, 768), 1.0);
        let mut backend = RecordingBackend::new();

        surface.render(&mut backend, &target, Point::new(0, 0), &full_damage(800, 600)).unwrap();
        let live = backend.textures.len();
        assert_eq!(live, 2);

        surface.notify_view_resized(Rect::new(0, 0, 1024, 768), &mut view);
        backend.clear_ops();
        surface.render(&mut backend, &target, Point::new(0, 0), &full_damage(1024, 768)).unwrap();

        assert_eq!(backend.releases().len(), 2);
        assert_eq!(backend.textures.len(), 2);
    }

    #[test]
    fn test_release_resources_frees_everything() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let target = RenderTarget::new(Rect::new(0, 0, 800, 600), 1.0);
        let mut backend = RecordingBackend::new();

        surface.render(&mut backend, &target, Point::new(0, 0), &full_damage(800, 600)).unwrap();
        surface.release_resources(&mut backend);

        assert!(backend.textures.is_empty());

        // Rendering again uploads fresh textures
        surface.render(&mut backend, &target, Point::new(0, 0), &full_damage(800, 600)).unwrap();
        assert_eq!(backend.textures.len(), 2);
    }

    #[test]
    fn test_software_render_paints_frame() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let target = RenderTarget::new(Rect::new(0, 0, 800, 600), 1.0);
        let mut renderer = SoftwareRenderer::new(800, 600);

        surface.render(&mut renderer, &target, Point::new(0, 0), &full_damage(800, 600)).unwrap();

        // Border strip has the frame color, the content area is untouched
        let active = crate::foundation::math::color_to_rgba8(&surface.theme.config().active_color);
        assert_eq!(renderer.pixel(2, 300), Some(active));
        assert_eq!(renderer.pixel(400, 300), Some([0, 0, 0, 0]));
        // The placeholder close glyph crosses the center of the button
        assert_eq!(renderer.pixel(760, 25), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_render_with_offset_and_flipped_target() {
        let mut view = MockView::default();
        let mut surface = surface(&mut view);
        let target = RenderTarget::new(Rect::new(0, 0, 1000, 700), 1.0).with_origin(ImageOrigin::BottomLeft);
        let mut backend = RecordingBackend::new();

        surface
            .render(&mut backend, &target, Point::new(50, 40), &full_damage(1000, 700))
            .unwrap();

        // The close button sits at (780, 45) in layout coordinates
        let button = Rect::new(780, 700 - 45 - 40, 60, 40);
        assert!(backend
            .ops
            .iter()
            .any(|op| matches!(op, Op::Draw { rect, flip_y: true, .. } if *rect == button)));
    }
}
