//! Order lifecycle tests through the service layer — status transitions
//! and the cancellation restock.

use cafe_service::{
    handlers,
    service::{HandlerError, Service, Session},
    AppState, Category, NewMenuItem, OrderStatus,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn customer(id: &str) -> Session {
    let mut session = Session::new();
    session.set("x-user-id", id);
    session.set("x-user-role", "customer");
    session
}

fn admin() -> Session {
    let mut session = Session::new();
    session.set("x-user-id", "staff-1");
    session.set("x-user-role", "admin");
    session
}

/// Service plus a handle on the shared state for direct assertions.
fn setup() -> (Service<AppState>, AppState) {
    let state = AppState::new();
    (handlers::service(state.clone()), state)
}

fn add_item(state: &AppState, name: &str, price: Decimal, quantity: u32) -> String {
    state
        .catalog
        .insert(NewMenuItem {
            name: name.into(),
            description: "test item".into(),
            price,
            category: Category::Drink,
            available_quantity: quantity,
            image_url: None,
        })
        .unwrap()
        .id
}

fn place(service: &Service<AppState>, owner: &str, item_id: &str, quantity: u32) -> String {
    let result = service
        .dispatch(
            "order.place",
            json!({ "items": [{ "item_id": item_id, "quantity": quantity }] }),
            customer(owner),
        )
        .unwrap();
    result["order_id"].as_str().unwrap().to_string()
}

fn set_status(
    service: &Service<AppState>,
    order_id: &str,
    status: &str,
) -> Result<Value, HandlerError> {
    service.dispatch(
        "order.set_status",
        json!({ "id": order_id, "status": status }),
        admin(),
    )
}

#[test]
fn orders_walk_forward_through_the_lifecycle() {
    let (service, state) = setup();
    let tea = add_item(&state, "Tea", dec!(2.00), 5);
    let order_id = place(&service, "u1", &tea, 1);

    assert_eq!(
        state.orders.get(&order_id).unwrap().unwrap().status,
        OrderStatus::Pending
    );

    for status in ["preparing", "ready", "completed"] {
        let result = set_status(&service, &order_id, status).unwrap();
        assert_eq!(result["status"], json!(status));
    }
    assert_eq!(
        state.orders.get(&order_id).unwrap().unwrap().status,
        OrderStatus::Completed
    );
}

#[test]
fn going_back_to_pending_is_rejected() {
    let (service, state) = setup();
    let tea = add_item(&state, "Tea", dec!(2.00), 5);
    let order_id = place(&service, "u1", &tea, 1);

    set_status(&service, &order_id, "preparing").unwrap();

    let err = set_status(&service, &order_id, "pending").unwrap_err();
    assert!(matches!(err, HandlerError::Rejected(_)));
    assert_eq!(
        state.orders.get(&order_id).unwrap().unwrap().status,
        OrderStatus::Preparing
    );
}

#[test]
fn terminal_orders_reject_every_transition() {
    let (service, state) = setup();
    let tea = add_item(&state, "Tea", dec!(2.00), 5);
    let order_id = place(&service, "u1", &tea, 1);

    set_status(&service, &order_id, "preparing").unwrap();
    set_status(&service, &order_id, "ready").unwrap();
    set_status(&service, &order_id, "completed").unwrap();

    for status in ["pending", "preparing", "ready", "cancelled"] {
        let err = set_status(&service, &order_id, status).unwrap_err();
        assert!(matches!(err, HandlerError::Rejected(_)), "-> {status}");
    }
    assert_eq!(
        state.orders.get(&order_id).unwrap().unwrap().status,
        OrderStatus::Completed
    );
}

#[test]
fn unknown_status_value_is_a_decode_error() {
    let (service, state) = setup();
    let tea = add_item(&state, "Tea", dec!(2.00), 5);
    let order_id = place(&service, "u1", &tea, 1);

    let err = set_status(&service, &order_id, "shipped").unwrap_err();
    assert!(matches!(err, HandlerError::DecodeFailed(_)));
}

#[test]
fn unknown_order_is_not_found() {
    let (service, _state) = setup();
    let err = set_status(&service, "missing", "preparing").unwrap_err();
    assert!(matches!(err, HandlerError::NotFound(_)));
}

#[test]
fn cancellation_restocks_the_reserved_quantities() {
    let (service, state) = setup();
    let tea = add_item(&state, "Tea", dec!(2.00), 5);
    let order_id = place(&service, "u1", &tea, 3);
    assert_eq!(state.catalog.current_quantity(&tea).unwrap(), Some(2));

    set_status(&service, &order_id, "cancelled").unwrap();
    assert_eq!(state.catalog.current_quantity(&tea).unwrap(), Some(5));
}

#[test]
fn cancellation_cannot_restock_twice() {
    let (service, state) = setup();
    let tea = add_item(&state, "Tea", dec!(2.00), 5);
    let order_id = place(&service, "u1", &tea, 3);

    set_status(&service, &order_id, "cancelled").unwrap();
    // Cancelled is terminal, so the second attempt fails before any release.
    set_status(&service, &order_id, "cancelled").unwrap_err();
    assert_eq!(state.catalog.current_quantity(&tea).unwrap(), Some(5));
}

#[test]
fn cancellation_of_a_ready_order_still_restocks() {
    let (service, state) = setup();
    let tea = add_item(&state, "Tea", dec!(2.00), 5);
    let order_id = place(&service, "u1", &tea, 2);

    set_status(&service, &order_id, "preparing").unwrap();
    set_status(&service, &order_id, "ready").unwrap();
    set_status(&service, &order_id, "cancelled").unwrap();
    assert_eq!(state.catalog.current_quantity(&tea).unwrap(), Some(5));
}
