//! Cart rendering.
//!
//! Rendering is split in two steps: [`CartRenderer`] derives a view model from
//! the cart state, and [`commit`] writes that view to whatever
//! [`DisplaySurface`] the page provides.

pub mod html;
mod surface;
mod view;

pub use surface::{commit, DisplaySurface, HtmlSurface, SurfaceBinding};
pub use view::{CartRenderer, PanelBody, PanelView, RowView};
