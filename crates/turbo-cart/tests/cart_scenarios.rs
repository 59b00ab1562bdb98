//! End-to-end cart behavior through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use turbo_cache::{KvStore, MemoryStore};
use turbo_cart::prelude::*;

fn open(backend: &MemoryStore) -> CartStore<SlotPersistence<MemoryStore>> {
    let config = CartConfig::default();
    CartStore::load(SlotPersistence::new(backend.clone(), &config), config)
}

fn slot_json(backend: &MemoryStore) -> serde_json::Value {
    let bytes = backend.get_raw("cart").unwrap().expect("slot written");
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn scenario_a_formatted_price_is_parsed() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);

    store.add_item("Watch X", "\u{20b9}8,500", None);

    let item = &store.state().items()[0];
    assert_eq!(item.name, "Watch X");
    assert_eq!(item.unit_price, Money::new(8500));
    assert_eq!(item.quantity, 1);
    assert_eq!(store.total_value(), Money::new(8500));
}

#[test]
fn scenario_b_same_name_twice_is_one_item() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);

    store.add_item("Watch X", PriceInput::Unspecified, None);
    store.add_item("Watch X", PriceInput::Unspecified, None);

    assert_eq!(store.state().len(), 1);
    assert_eq!(store.state().items()[0].quantity, 2);
    assert_eq!(store.total_quantity(), 2);
}

#[test]
fn scenario_c_decrement_last_unit_removes_item() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);
    store.add_item("Watch X", 8500_i64, None);

    let change = store.change_quantity(0, -1);

    assert!(matches!(change, Some(QuantityChange::Removed(_))));
    assert!(store.state().is_empty());
    assert_eq!(store.total_value(), Money::zero());
    assert_eq!(store.total_quantity(), 0);
    assert_eq!(slot_json(&backend), serde_json::json!([]));
}

#[test]
fn scenario_d_remove_first_keeps_second() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);
    store.add_item("A", 100_i64, None);
    store.add_item("B", 200_i64, None);

    let removed = store.remove_item(0).unwrap();

    assert_eq!(removed.name, "A");
    assert_eq!(store.state().len(), 1);
    assert_eq!(store.state().items()[0].name, "B");
    assert_eq!(store.total_value(), Money::new(200));
}

#[test]
fn scenario_e_clear_persists_empty_array() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);
    store.add_item("A", 100_i64, None);
    store.add_item("B", 200_i64, None);
    assert_eq!(slot_json(&backend).as_array().map(Vec::len), Some(2));

    store.clear();

    assert!(store.state().is_empty());
    assert_eq!(slot_json(&backend), serde_json::json!([]));
}

#[test]
fn decrement_drops_total_quantity() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);
    store.add_item("A", 100_i64, None);
    store.add_item("B", 200_i64, None);
    store.add_item("B", 200_i64, None);
    assert_eq!(store.total_quantity(), 3);

    store.change_quantity(0, -1);

    assert_eq!(store.total_quantity(), 2);
    assert!(store.state().find("A").is_none());
    assert!(store.state().items().iter().all(|i| i.quantity >= 1));
}

#[test]
fn cart_survives_reload() {
    let backend = MemoryStore::new();
    {
        let mut store = open(&backend);
        store.add_item("Watch X", "\u{20b9}8,500", Some("images/x.png"));
        store.add_item("Watch X", PriceInput::Unspecified, None);
        store.add_item("Band", 1200_i64, None);
    }

    let store = open(&backend);
    assert_eq!(store.state().len(), 2);
    assert_eq!(store.state().items()[0].image_ref, "images/x.png");
    assert_eq!(store.total_quantity(), 3);
    assert_eq!(store.total_value(), Money::new(2 * 8500 + 1200));
}

#[test]
fn corrupt_slot_loads_empty_and_is_overwritten() {
    let backend = MemoryStore::new();
    backend.set_raw("cart", b"definitely not json").unwrap();

    let mut store = open(&backend);
    assert!(store.state().is_empty());

    store.add_item("A", 100_i64, None);
    assert_eq!(
        slot_json(&backend),
        serde_json::json!([{"name": "A", "price": 100, "image": "images/placeholder.png", "qty": 1}])
    );
}

#[test]
fn quota_failure_keeps_session_working() {
    let backend = MemoryStore::with_quota(100);
    let mut store = open(&backend);

    store.add_item("A", 100_i64, None);
    assert!(store.last_save_error().is_none());

    store.add_item("A very long product name that will not fit", 100_i64, None);
    assert!(store.last_save_error().is_some());
    assert_eq!(store.state().len(), 2);
    assert_eq!(store.total_value(), Money::new(200));

    // The slot still holds the last write that fit.
    assert_eq!(slot_json(&backend).as_array().map(Vec::len), Some(1));
}

#[test]
fn out_of_range_indices_are_noops() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);
    store.add_item("A", 100_i64, None);
    let before = store.state().clone();

    assert_eq!(store.change_quantity(1, -1), None);
    assert_eq!(store.change_quantity(usize::MAX, 1), None);
    assert_eq!(store.remove_item(7), None);

    assert_eq!(store.state(), &before);
}

#[test]
fn surfaces_track_every_mutation() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);
    let panel = Rc::new(RefCell::new(HtmlSurface::full()));
    let header = Rc::new(RefCell::new(HtmlSurface::badge_only()));
    store.subscribe(SurfaceBinding::new(CartRenderer::new("\u{20b9}"), Rc::clone(&panel)));
    store.subscribe(SurfaceBinding::new(CartRenderer::new("\u{20b9}"), Rc::clone(&header)));

    assert_eq!(header.borrow().badge.as_deref(), Some("0"));

    store.add_item("Watch X", 8500_i64, None);
    store.add_item("Watch X", 8500_i64, None);
    assert_eq!(header.borrow().badge.as_deref(), Some("2"));
    assert_eq!(panel.borrow().total.as_deref(), Some("\u{20b9}17,000"));

    store.clear();
    assert_eq!(header.borrow().badge.as_deref(), Some("0"));
    assert!(panel
        .borrow()
        .items
        .as_deref()
        .unwrap()
        .contains("Your cart is empty."));
}

#[test]
fn observers_run_after_save() {
    let backend = MemoryStore::new();
    let mut store = open(&backend);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let probe_backend = backend.clone();
    let log = Rc::clone(&seen);
    store.subscribe(move |state: &CartState| {
        let persisted = probe_backend
            .get_raw("cart")
            .unwrap()
            .map(|b| serde_json::from_slice::<Vec<serde_json::Value>>(&b).unwrap().len());
        log.borrow_mut().push((state.len(), persisted));
    });

    store.add_item("A", 100_i64, None);
    store.add_item("B", 100_i64, None);

    assert_eq!(*seen.borrow(), vec![(0, None), (1, Some(1)), (2, Some(2))]);
}
