//! Decoration layout and input classification
//!
//! The layout splits a decoration of a given size into areas and turns raw
//! pointer press/release events into [`DecorationAction`]s. It only
//! classifies intent; performing the move, resize or close is up to the
//! windowing layer.

use std::rc::Rc;

use super::area::{Area, AreaContent, AreaType, DecorationAction};
use super::button::{Button, ButtonType};
use crate::foundation::collections::{AreaHandle, HandleMap};
use crate::foundation::{Point, Rect, Region};
use crate::input::ResizeEdges;
use crate::render::TextureHandle;
use crate::theme::Theme;

/// Button height as a fraction of the title bar height
const BUTTON_HEIGHT_PC: f64 = 0.8;
/// Button width relative to its height
const BUTTON_ASPECT_RATIO: f64 = 1.5;

/// Manages the areas of one decoration and its pointer grab state
///
/// Areas are rebuilt from scratch on every [`resize`](Self::resize). Handles
/// to areas of an earlier generation resolve to nothing afterwards.
#[derive(Debug)]
pub struct DecorationLayout {
    theme: Rc<Theme>,
    titlebar_size: i32,
    border_size: i32,
    button_width: i32,
    button_height: i32,
    button_padding: i32,

    areas: HandleMap<AreaHandle, Area>,
    /// Construction order, used for hit-testing and painting
    order: Vec<AreaHandle>,

    current_input: Point,
    grab_origin: Option<Point>,
    hovered: Option<AreaHandle>,
    retired_textures: Vec<TextureHandle>,
}

impl DecorationLayout {
    /// Create an empty layout sized from the theme
    pub fn new(theme: Rc<Theme>) -> Self {
        let titlebar_size = theme.get_title_height();
        let border_size = theme.get_border_size();
        // Width truncates the unrounded product, not the truncated height
        let button_height = (f64::from(titlebar_size) * BUTTON_HEIGHT_PC) as i32;
        let button_width = (f64::from(titlebar_size) * BUTTON_HEIGHT_PC * BUTTON_ASPECT_RATIO) as i32;
        let button_padding = (titlebar_size - button_height) / 2;

        Self {
            theme,
            titlebar_size,
            border_size,
            button_width,
            button_height,
            button_padding,
            areas: HandleMap::with_key(),
            order: Vec::new(),
            current_input: Point::new(-1, -1),
            grab_origin: None,
            hovered: None,
            retired_textures: Vec::new(),
        }
    }

    /// Size of the title bar buttons, `(width, height)`
    pub fn button_size(&self) -> (i32, i32) {
        (self.button_width, self.button_height)
    }

    /// Space between a button and the edges of the title bar
    pub fn button_padding(&self) -> i32 {
        self.button_padding
    }

    /// Regenerate the layout for a decoration of `width` x `height`
    pub fn resize(&mut self, width: i32, height: i32) {
        self.clear();

        let border = self.border_size;
        let padding = self.button_padding;

        // Close button
        let button_geometry = Rect::new(
            width - border - padding - self.button_width,
            padding,
            self.button_width,
            self.button_height,
        );
        let mut button = Button::new(Rc::clone(&self.theme));
        button.set_type(ButtonType::Close);
        self.push(button_geometry, AreaContent::Button(button));

        // Padding around the button still allows moving
        let move_geometry = button_geometry.expanded(padding);
        self.push(move_geometry, AreaContent::Move);

        // Title up to the move area
        self.push(
            Rect::new(border, border, move_geometry.x - border, self.titlebar_size),
            AreaContent::Title,
        );

        self.push(Rect::new(0, 0, border, height), AreaContent::Resize(ResizeEdges::LEFT));
        self.push(
            Rect::new(width - border, 0, border, height),
            AreaContent::Resize(ResizeEdges::RIGHT),
        );
        self.push(Rect::new(0, 0, width, border), AreaContent::Resize(ResizeEdges::TOP));
        self.push(
            Rect::new(0, height - border, width, border),
            AreaContent::Resize(ResizeEdges::BOTTOM),
        );

        log::debug!("Decoration layout rebuilt for {}x{} ({} areas)", width, height, self.order.len());
    }

    /// Discard every area and cancel any grab
    ///
    /// Textures held by discarded buttons are queued for release, see
    /// [`take_retired_textures`](Self::take_retired_textures).
    pub fn clear(&mut self) {
        self.retire_textures();
        self.areas.clear();
        self.order.clear();
        self.grab_origin = None;
        self.hovered = None;
    }

    fn push(&mut self, geometry: Rect, content: AreaContent) -> AreaHandle {
        let handle = self.areas.insert(Area::new(geometry, content));
        self.order.push(handle);
        handle
    }

    /// Number of areas in the current generation
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the layout has no areas
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up an area; handles from a previous generation yield `None`
    pub fn area(&self, handle: AreaHandle) -> Option<&Area> {
        self.areas.get(handle)
    }

    /// Look up an area mutably
    pub fn area_mut(&mut self, handle: AreaHandle) -> Option<&mut Area> {
        self.areas.get_mut(handle)
    }

    /// All areas in construction order
    pub fn areas(&self) -> impl Iterator<Item = (AreaHandle, &Area)> + '_ {
        self.order
            .iter()
            .filter_map(move |&handle| self.areas.get(handle).map(|area| (handle, area)))
    }

    /// First area, in construction order, containing `point`
    pub fn find_area_at(&self, point: Point) -> Option<AreaHandle> {
        self.areas()
            .find(|(_, area)| area.geometry().contains(point))
            .map(|(handle, _)| handle)
    }

    /// Title and button areas in construction order
    pub fn get_renderable_areas(&self) -> Vec<AreaHandle> {
        self.areas()
            .filter(|(_, area)| area.is_renderable())
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Union of every area, renderable or not
    pub fn calculate_region(&self) -> Region {
        self.areas().map(|(_, area)| area.geometry()).collect()
    }

    /// Record the pointer position, relative to the decoration
    pub fn handle_motion(&mut self, x: i32, y: i32) {
        self.current_input = Point::new(x, y);

        let hovered = self
            .find_area_at(self.current_input)
            .filter(|&handle| self.area_type(handle) == Some(AreaType::Button));
        if hovered == self.hovered {
            return;
        }

        if let Some(button) = self.hovered.and_then(|h| self.button_mut(h)) {
            button.set_hover(false);
        }
        if let Some(button) = hovered.and_then(|h| self.button_mut(h)) {
            button.set_hover(true);
        }
        self.hovered = hovered;
    }

    /// Last recorded pointer position
    pub fn current_input(&self) -> Point {
        self.current_input
    }

    /// Classify a press (`pressed == true`) or release at the current pointer position
    pub fn handle_press_event(&mut self, pressed: bool) -> DecorationAction {
        if pressed {
            return self.handle_press();
        }

        let Some(origin) = self.grab_origin.take() else {
            return DecorationAction::None;
        };

        let begin = self.find_area_at(origin);
        let end = self.find_area_at(self.current_input);

        if let Some(button) = begin.and_then(|h| self.button_mut(h)) {
            button.set_pressed(false);
        }

        let action = match (begin, end) {
            (Some(begin), Some(end)) if begin == end => self
                .area(begin)
                .and_then(Area::button)
                .map_or(DecorationAction::None, Button::action),
            _ => DecorationAction::None,
        };

        log::debug!("Release at {:?} (grabbed at {:?}): {:?}", self.current_input, origin, action);
        action
    }

    fn handle_press(&mut self) -> DecorationAction {
        let handle = self.find_area_at(self.current_input);
        match handle.and_then(|h| self.area_type(h)) {
            Some(AreaType::Move) => return DecorationAction::Move,
            Some(AreaType::Resize) => return DecorationAction::Resize,
            _ => {}
        }

        self.grab_origin = Some(self.current_input);
        if let Some(button) = handle.and_then(|h| self.button_mut(h)) {
            button.set_pressed(true);
        }
        DecorationAction::None
    }

    /// Cancel any in-progress grab without producing an action
    pub fn handle_focus_lost(&mut self) {
        if let Some(origin) = self.grab_origin.take() {
            log::debug!("Grab at {:?} canceled by focus loss", origin);
            if let Some(button) = self.find_area_at(origin).and_then(|h| self.button_mut(h)) {
                button.set_pressed(false);
            }
        }
    }

    /// Whether a press is waiting for its release
    pub fn is_grabbed(&self) -> bool {
        self.grab_origin.is_some()
    }

    /// Queue the textures of every live button for release
    ///
    /// The buttons upload their icons again on their next render.
    pub fn retire_textures(&mut self) {
        for (_, area) in self.areas.iter_mut() {
            if let Some(texture) = area.button_mut().and_then(Button::take_texture) {
                self.retired_textures.push(texture);
            }
        }
    }

    /// Take the textures of discarded buttons; the caller must release them
    pub fn take_retired_textures(&mut self) -> Vec<TextureHandle> {
        std::mem::take(&mut self.retired_textures)
    }

    fn area_type(&self, handle: AreaHandle) -> Option<AreaType> {
        self.areas.get(handle).map(Area::area_type)
    }

    fn button_mut(&mut self, handle: AreaHandle) -> Option<&mut Button> {
        self.areas.get_mut(handle).and_then(Area::button_mut)
    }
}
