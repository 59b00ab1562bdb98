//! The cart store: sole owner and mutator of cart state.

use crate::cart::price::PriceInput;
use crate::cart::{AddOutcome, CartState, LineItem, QuantityChange};
use crate::config::CartConfig;
use crate::money::Money;
use crate::persistence::CartPersistence;

/// Something that wants to hear about every cart change (panel renderer,
/// header badge).
pub trait CartObserver {
    /// Called after the new state has been handed to persistence.
    fn cart_changed(&mut self, state: &CartState);
}

impl<F: FnMut(&CartState)> CartObserver for F {
    fn cart_changed(&mut self, state: &CartState) {
        self(state)
    }
}

/// What was bought at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Line items at the moment of checkout.
    pub items: Vec<LineItem>,
    /// Sum of quantities.
    pub total_quantity: i64,
    /// Grand total.
    pub total_value: Money,
}

/// Owns the cart state, mirrors it to persistence and notifies observers.
///
/// Every mutation runs to completion (update, save, notify) before returning.
/// Save failures are logged and remembered but never surface as errors: the
/// in-memory state stays authoritative for the rest of the session.
///
/// # Example
///
/// ```rust
/// use turbo_cache::MemoryStore;
/// use turbo_cart::prelude::*;
///
/// let config = CartConfig::default();
/// let slot = SlotPersistence::new(MemoryStore::new(), &config);
/// let mut store = CartStore::load(slot, config);
///
/// store.add_item("Watch X", "\u{20b9}8,500", None);
/// store.add_item("Watch X", PriceInput::Unspecified, None);
///
/// assert_eq!(store.total_quantity(), 2);
/// assert_eq!(store.total_value().amount, 17_000);
/// ```
pub struct CartStore<P> {
    state: CartState,
    persistence: P,
    config: CartConfig,
    observers: Vec<Box<dyn CartObserver>>,
    clear_epoch: u64,
    last_save_error: Option<String>,
}

impl<P: CartPersistence> CartStore<P> {
    /// Create the store from whatever the persistence slot holds.
    pub fn load(persistence: P, config: CartConfig) -> Self {
        let state = persistence.load();
        tracing::debug!(
            items = state.len(),
            total_quantity = state.total_quantity(),
            "cart loaded"
        );
        Self {
            state,
            persistence,
            config,
            observers: Vec::new(),
            clear_epoch: 0,
            last_save_error: None,
        }
    }

    /// Register an observer. It is immediately called with the current state
    /// so its surface starts in sync.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        let mut observer = Box::new(observer);
        observer.cart_changed(&self.state);
        self.observers.push(observer);
    }

    /// Re-notify every observer without changing anything (e.g. when the cart
    /// panel is opened).
    pub fn refresh(&mut self) {
        self.notify();
    }

    /// Add one unit of a product.
    ///
    /// An existing name gets its quantity bumped; otherwise a new line item
    /// is appended using the resolved price and image (falling back to the
    /// configured defaults). Never fails.
    pub fn add_item(
        &mut self,
        name: &str,
        price: impl Into<PriceInput>,
        image_ref: Option<&str>,
    ) -> AddOutcome {
        let name = name.trim();
        let unit_price = price.into().resolve(self.config.default_unit_price());
        let image_ref = image_ref
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.config.default_image.as_str());

        let outcome = self.state.add(name, unit_price, image_ref);
        match outcome {
            AddOutcome::Ignored => {
                tracing::warn!("ignoring add-to-cart without a product name");
            }
            AddOutcome::AtLimit { index } => {
                tracing::debug!(product = name, index, "line item already at quantity limit");
            }
            AddOutcome::Added { index } => {
                tracing::debug!(product = name, index, price = unit_price.amount, "line item added");
                self.commit();
            }
            AddOutcome::Incremented { index, quantity } => {
                tracing::debug!(product = name, index, quantity, "line item incremented");
                self.commit();
            }
        }
        outcome
    }

    /// Adjust the quantity of the item at `index` by `delta`.
    ///
    /// A resulting quantity of zero or less removes the item. Returns `None`
    /// (and changes nothing) when `index` is out of range.
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> Option<QuantityChange> {
        let Some(change) = self.state.change_quantity(index, delta) else {
            tracing::debug!(index, delta, "quantity change on missing index ignored");
            return None;
        };
        match &change {
            QuantityChange::Updated { quantity } => {
                tracing::debug!(index, delta, quantity, "line item quantity changed");
            }
            QuantityChange::Removed(item) => {
                tracing::debug!(index, product = %item.name, "line item dropped to zero");
            }
        }
        self.commit();
        Some(change)
    }

    /// Remove the item at `index`. Returns `None` when `index` is out of range.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        let Some(item) = self.state.remove(index) else {
            tracing::debug!(index, "remove on missing index ignored");
            return None;
        };
        tracing::debug!(index, product = %item.name, "line item removed");
        self.commit();
        Some(item)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.state.clear();
        self.clear_epoch += 1;
        tracing::debug!(epoch = self.clear_epoch, "cart cleared");
        self.commit();
    }

    /// Check out: capture what is in the cart, then clear it.
    ///
    /// Returns `None` on an empty cart; nothing is cleared or saved.
    pub fn checkout(&mut self) -> Option<CheckoutSummary> {
        if self.state.is_empty() {
            return None;
        }
        let summary = CheckoutSummary {
            items: self.state.items().to_vec(),
            total_quantity: self.state.total_quantity(),
            total_value: self.state.total_value(),
        };
        tracing::info!(
            items = summary.items.len(),
            total_quantity = summary.total_quantity,
            total_value = summary.total_value.amount,
            "checkout"
        );
        self.clear();
        Some(summary)
    }

    /// Sum of quantities, derived fresh.
    pub fn total_quantity(&self) -> i64 {
        self.state.total_quantity()
    }

    /// Grand total, derived fresh.
    pub fn total_value(&self) -> Money {
        self.state.total_value()
    }

    /// Read-only view of the state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Engine configuration.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The persistence adapter.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Number of times the cart has been cleared since load.
    pub fn clear_epoch(&self) -> u64 {
        self.clear_epoch
    }

    /// Message from the most recent failed save, cleared by the next
    /// successful one.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    fn commit(&mut self) {
        match self.persistence.save(&self.state) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "cart save failed; keeping in-memory state");
                self.last_save_error = Some(e.to_string());
            }
        }
        self.notify();
    }

    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer.cart_changed(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::SlotPersistence;
    use std::cell::RefCell;
    use std::rc::Rc;
    use turbo_cache::MemoryStore;

    fn store() -> CartStore<SlotPersistence<MemoryStore>> {
        let config = CartConfig::default();
        CartStore::load(SlotPersistence::new(MemoryStore::new(), &config), config)
    }

    #[test]
    fn test_add_uses_fallbacks() {
        let mut store = store();
        store.add_item("Watch X", PriceInput::Unspecified, None);

        let item = &store.state().items()[0];
        assert_eq!(item.unit_price.amount, crate::config::DEFAULT_PRICE);
        assert_eq!(item.image_ref, crate::config::DEFAULT_IMAGE);
    }

    #[test]
    fn test_add_blank_image_uses_fallback() {
        let mut store = store();
        store.add_item("Watch X", 100_i64, Some("  "));
        assert_eq!(store.state().items()[0].image_ref, crate::config::DEFAULT_IMAGE);
    }

    #[test]
    fn test_add_trims_name() {
        let mut store = store();
        store.add_item(" Watch X ", 100_i64, None);
        store.add_item("Watch X", 100_i64, None);
        assert_eq!(store.state().len(), 1);
        assert_eq!(store.state().items()[0].name, "Watch X");
    }

    #[test]
    fn test_add_free_item() {
        let mut store = store();
        store.add_item("Sticker", PriceInput::Free, None);
        assert_eq!(store.total_value(), Money::zero());
        assert_eq!(store.total_quantity(), 1);
    }

    #[test]
    fn test_observers_see_every_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();
        let log = Rc::clone(&seen);
        store.subscribe(move |state: &CartState| log.borrow_mut().push(state.total_quantity()));

        store.add_item("A", 100_i64, None);
        store.add_item("A", 100_i64, None);
        store.change_quantity(0, -1);
        store.remove_item(0);
        store.refresh();

        assert_eq!(*seen.borrow(), vec![0, 1, 2, 1, 0, 0]);
    }

    #[test]
    fn test_out_of_range_is_silent_noop() {
        let seen = Rc::new(RefCell::new(0));
        let mut store = store();
        let count = Rc::clone(&seen);
        store.subscribe(move |_: &CartState| *count.borrow_mut() += 1);

        assert_eq!(store.change_quantity(3, 1), None);
        assert_eq!(store.remove_item(0), None);
        // Only the initial subscribe notification.
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_checkout() {
        let mut store = store();
        assert_eq!(store.checkout(), None);
        assert_eq!(store.clear_epoch(), 0);

        store.add_item("A", 100_i64, None);
        store.add_item("B", 200_i64, None);
        store.add_item("B", 200_i64, None);
        let summary = store.checkout().unwrap();

        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total_value, Money::new(500));
        assert!(store.state().is_empty());
        assert_eq!(store.clear_epoch(), 1);
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let config = CartConfig::default();
        let backend = MemoryStore::disabled();
        let mut store = CartStore::load(SlotPersistence::new(backend.clone(), &config), config);

        store.add_item("A", 100_i64, None);
        assert_eq!(store.total_quantity(), 1);
        assert!(store.last_save_error().is_some());

        backend.set_disabled(false);
        store.add_item("A", 100_i64, None);
        assert_eq!(store.total_quantity(), 2);
        assert!(store.last_save_error().is_none());
    }
}
