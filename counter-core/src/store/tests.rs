use super::*;
use shared::MenuItem;
use shared::order::CustomerUpdate;

fn burger() -> MenuItem {
    MenuItem {
        id: 1,
        name: "Cheeseburger".to_string(),
        price: 4.99,
        category: "Burgers".to_string(),
    }
}

fn fries() -> MenuItem {
    MenuItem {
        id: 6,
        name: "French Fries".to_string(),
        price: 2.49,
        category: "Sides".to_string(),
    }
}

fn cola() -> MenuItem {
    MenuItem {
        id: 11,
        name: "Cola".to_string(),
        price: 1.79,
        category: "Drinks".to_string(),
    }
}

#[test]
fn test_add_appends_in_insertion_order() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::AddItem { item: burger() });
    store.apply(OrderCommand::AddItem { item: fries() });
    store.apply(OrderCommand::AddItem { item: cola() });

    let snapshot = store.snapshot();
    assert_eq!(snapshot.item_count(), 3);
    assert_eq!(snapshot.items[0].id, 1);
    assert_eq!(snapshot.items[1].id, 6);
    assert_eq!(snapshot.items[2].id, 11);
}

#[test]
fn test_adding_same_item_twice_keeps_two_lines() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::AddItem { item: burger() });
    store.apply(OrderCommand::AddItem { item: burger() });

    let snapshot = store.snapshot();
    assert_eq!(snapshot.item_count(), 2);
    // No quantity collapsing: each line billed at full price
    assert_eq!(snapshot.subtotal, 9.98);
}

#[test]
fn test_remove_takes_first_match_only() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::AddItem { item: burger() });
    store.apply(OrderCommand::AddItem { item: fries() });
    store.apply(OrderCommand::AddItem { item: burger() });

    store.apply(OrderCommand::RemoveItem { item_id: 1 });

    let snapshot = store.snapshot();
    assert_eq!(snapshot.item_count(), 2);
    // Surviving items keep insertion order: fries first, then the
    // second burger instance
    assert_eq!(snapshot.items[0].id, 6);
    assert_eq!(snapshot.items[1].id, 1);
}

#[test]
fn test_remove_absent_id_is_noop() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::AddItem { item: burger() });

    let before = store.snapshot().items.clone();
    store.apply(OrderCommand::RemoveItem { item_id: 999 });

    assert_eq!(store.snapshot().items, before);
}

#[test]
fn test_length_tracks_adds_minus_successful_removes() {
    let mut store = OrderStore::new();
    for _ in 0..4 {
        store.apply(OrderCommand::AddItem { item: cola() });
    }
    store.apply(OrderCommand::RemoveItem { item_id: 11 });
    store.apply(OrderCommand::RemoveItem { item_id: 11 });
    store.apply(OrderCommand::RemoveItem { item_id: 42 }); // no match

    assert_eq!(store.snapshot().item_count(), 2);
}

#[test]
fn test_customer_partial_update_merges() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::UpdateCustomer {
        update: CustomerUpdate {
            name: Some("A".to_string()),
            phone: Some("1".to_string()),
            address: None,
        },
    });
    store.apply(OrderCommand::UpdateCustomer {
        update: CustomerUpdate {
            address: Some("X".to_string()),
            ..Default::default()
        },
    });

    let customer = &store.snapshot().customer;
    assert_eq!(customer.name, "A");
    assert_eq!(customer.phone, "1");
    assert_eq!(customer.address, "X");
}

#[test]
fn test_totals_follow_every_mutation() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::AddItem { item: burger() });
    assert_eq!(store.snapshot().total, 4.99);

    store.apply(OrderCommand::SetDiscount { amount: 1.00 });
    assert_eq!(store.snapshot().total, 3.99);

    store.apply(OrderCommand::SetDeliveryCharge { amount: 0.50 });
    assert_eq!(store.snapshot().total, 4.49);

    store.apply(OrderCommand::RemoveItem { item_id: 1 });
    assert_eq!(store.snapshot().subtotal, 0.0);
    // Adjustments still apply to the empty order
    assert_eq!(store.snapshot().total, -0.50);
}

#[test]
fn test_snapshot_reads_are_idempotent() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::AddItem { item: fries() });

    let first = store.snapshot().clone();
    let second = store.snapshot().clone();
    assert_eq!(first, second);
}

#[test]
fn test_reset_starts_a_fresh_order() {
    let mut store = OrderStore::new();
    store.apply(OrderCommand::AddItem { item: burger() });
    store.apply(OrderCommand::SetDiscount { amount: 1.00 });
    let old_id = store.snapshot().order_id;

    store.reset();

    let snapshot = store.snapshot();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.discount, 0.0);
    assert_eq!(snapshot.total, 0.0);
    assert_ne!(snapshot.order_id, old_id);
}
