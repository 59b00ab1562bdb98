//! Committing rendered views to a display surface.
//!
//! A surface exposes up to three elements: the rows container, the total
//! display and the header badge. Each is optional. Writing to an element the
//! page doesn't have is a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cart::{CartObserver, CartState};
use crate::render::html::render_items_html;
use crate::render::{CartRenderer, PanelView};

/// Page elements the cart writes into.
pub trait DisplaySurface {
    /// Replace the rows container content. Returns `false` if the page has no
    /// rows container.
    fn set_items_html(&mut self, html: &str) -> bool;

    /// Replace the total display text. Returns `false` if absent.
    fn set_total_text(&mut self, text: &str) -> bool;

    /// Replace the badge text. Returns `false` if absent.
    fn set_badge_text(&mut self, text: &str) -> bool;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for Rc<RefCell<T>> {
    fn set_items_html(&mut self, html: &str) -> bool {
        self.borrow_mut().set_items_html(html)
    }

    fn set_total_text(&mut self, text: &str) -> bool {
        self.borrow_mut().set_total_text(text)
    }

    fn set_badge_text(&mut self, text: &str) -> bool {
        self.borrow_mut().set_badge_text(text)
    }
}

/// In-memory surface holding the last written content of each element.
///
/// `None` means the element is not on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlSurface {
    /// Rows container content.
    pub items: Option<String>,
    /// Total display text.
    pub total: Option<String>,
    /// Badge text.
    pub badge: Option<String>,
}

impl HtmlSurface {
    /// A page with all three elements.
    pub fn full() -> Self {
        Self {
            items: Some(String::new()),
            total: Some(String::new()),
            badge: Some(String::new()),
        }
    }

    /// A page with only the header badge (no cart panel).
    pub fn badge_only() -> Self {
        Self {
            badge: Some(String::new()),
            ..Self::default()
        }
    }

    /// A page with the cart panel but no header badge.
    pub fn without_badge() -> Self {
        Self {
            badge: None,
            ..Self::full()
        }
    }
}

fn replace(slot: &mut Option<String>, content: &str) -> bool {
    match slot {
        Some(current) => {
            current.clear();
            current.push_str(content);
            true
        }
        None => false,
    }
}

impl DisplaySurface for HtmlSurface {
    fn set_items_html(&mut self, html: &str) -> bool {
        replace(&mut self.items, html)
    }

    fn set_total_text(&mut self, text: &str) -> bool {
        replace(&mut self.total, text)
    }

    fn set_badge_text(&mut self, text: &str) -> bool {
        replace(&mut self.badge, text)
    }
}

/// Write a panel view and badge text to a surface.
///
/// Always a full replacement of each present element.
pub fn commit<D: DisplaySurface + ?Sized>(surface: &mut D, view: &PanelView, badge: &str) {
    if !surface.set_items_html(&render_items_html(view)) {
        tracing::trace!("no cart rows container on surface");
    }
    if !surface.set_total_text(&view.total) {
        tracing::trace!("no cart total element on surface");
    }
    if !surface.set_badge_text(badge) {
        tracing::trace!("no cart badge on surface");
    }
}

/// Observer that re-renders the whole panel and badge on every cart change.
#[derive(Debug, Clone)]
pub struct SurfaceBinding<D> {
    renderer: CartRenderer,
    surface: D,
}

impl<D: DisplaySurface> SurfaceBinding<D> {
    /// Bind a renderer to a surface.
    pub fn new(renderer: CartRenderer, surface: D) -> Self {
        Self { renderer, surface }
    }

    /// The bound surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Render `state` and commit it.
    pub fn render(&mut self, state: &CartState) {
        let view = self.renderer.render_panel(state);
        let badge = self.renderer.render_badge_count(state);
        commit(&mut self.surface, &view, &badge);
    }
}

impl<D: DisplaySurface> CartObserver for SurfaceBinding<D> {
    fn cart_changed(&mut self, state: &CartState) {
        self.render(state);
    }
}
