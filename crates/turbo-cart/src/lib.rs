//! Storefront shopping-cart engine for TurboCommerce.
//!
//! The cart is the only stateful piece of the storefront's page script. This
//! crate provides:
//!
//! - **Store**: [`CartStore`] owns the line items and is the only way to
//!   mutate them (add, change quantity, remove, clear/checkout).
//! - **Persistence**: [`CartPersistence`] mirrors the cart into a durable
//!   key-value slot after every mutation; [`SlotPersistence`] implements it
//!   over any `turbo_cache` backend.
//! - **Rendering**: [`render::CartRenderer`] derives the panel view and badge
//!   count; [`render::SurfaceBinding`] commits them to a display surface.
//! - **Notices**: toast messages derived from cart state, and
//!   [`notice::DeferredEffect`] for delayed UI work.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use turbo_cache::MemoryStore;
//! use turbo_cart::prelude::*;
//!
//! let config = CartConfig::default();
//! let mut store = CartStore::load(
//!     SlotPersistence::new(MemoryStore::new(), &config),
//!     config.clone(),
//! );
//!
//! let surface = Rc::new(RefCell::new(HtmlSurface::full()));
//! store.subscribe(SurfaceBinding::new(
//!     CartRenderer::from_config(&config),
//!     Rc::clone(&surface),
//! ));
//!
//! store.add_item("Watch X", "\u{20b9}8,500", Some("images/watch-x.png"));
//! assert_eq!(surface.borrow().badge.as_deref(), Some("1"));
//! assert_eq!(surface.borrow().total.as_deref(), Some("\u{20b9}8,500"));
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod money;
pub mod notice;
pub mod persistence;
pub mod render;

pub use cart::{CartState, CartStore, LineItem, PriceInput};
pub use config::CartConfig;
pub use error::CartError;
pub use money::Money;
pub use persistence::{CartPersistence, SlotPersistence};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{
        AddOutcome, CartObserver, CartState, CartStore, CheckoutSummary, LineItem, PriceInput,
        QuantityChange, MAX_QUANTITY_PER_ITEM,
    };
    pub use crate::config::CartConfig;
    pub use crate::error::CartError;
    pub use crate::money::Money;
    pub use crate::notice::{DeferredEffect, Notice, NoticeIcon};
    pub use crate::persistence::{CartPersistence, SlotPersistence};
    pub use crate::render::{
        CartRenderer, DisplaySurface, HtmlSurface, PanelBody, PanelView, RowView, SurfaceBinding,
    };
}
