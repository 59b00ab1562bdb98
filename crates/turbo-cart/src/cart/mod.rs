//! Shopping cart module.
//!
//! Contains the cart state, price input resolution and the owning store.

mod cart;
mod price;
mod store;

pub use cart::{AddOutcome, CartState, LineItem, QuantityChange, MAX_QUANTITY_PER_ITEM};
pub use price::{parse_price, PriceInput};
pub use store::{CartObserver, CartStore, CheckoutSummary};
