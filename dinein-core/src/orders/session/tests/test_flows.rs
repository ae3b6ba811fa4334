use super::*;

#[test]
fn test_reserve_and_order_full_flow() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    assert_eq!(session.state(), SessionState::Reserving);

    session.set_guest_count("3");
    session.select_table(5).unwrap();
    let details = session.submit_reservation().unwrap();
    assert_eq!(session.state(), SessionState::Ordering);
    assert_eq!(
        details.to_string(),
        "Table 5 for 3 guests at Restaurant 1 on 10/16/2026 at 19:30."
    );

    session.increment(1);
    session.increment(1);
    session.increment(2);
    let expected_total = session.compute_total();

    let summary = session.place_order().unwrap();
    assert_eq!(summary.total, expected_total);
    assert_eq!(summary.total, Decimal::new(3097, 2));
    assert_eq!(summary.item_count(), 3);
    assert_eq!(summary.table_number(), Some(5));
    assert_eq!(summary.restaurant_name, "Restaurant 1");

    assert!(session.selection().is_empty());
    assert_eq!(session.state(), SessionState::Submitted);
}

#[test]
fn test_place_order_empty_fails_without_state_change() {
    let mut session = ordering_session();

    let err = session.place_order().unwrap_err();
    assert_eq!(err, SessionError::EmptySelection);
    assert_eq!(session.state(), SessionState::Ordering);
}

#[test]
fn test_place_order_zero_total_is_empty() {
    let catalog = vec![MenuItem::new(1, "Water", Decimal::ZERO)];
    let mut session =
        OrderSession::new("Restaurant 1", catalog, FlowKind::MenuOnly, now()).unwrap();
    session.increment(1);

    assert_eq!(session.place_order(), Err(SessionError::EmptySelection));
    assert_eq!(session.quantity(1), 1);
}

#[test]
fn test_place_order_requires_ordering_state() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    // Cart edits are allowed directly, but ordering needs a reservation
    session.increment(1);

    let err = session.place_order().unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidState {
            state: SessionState::Reserving,
            ..
        }
    ));
    assert_eq!(session.quantity(1), 1);
}

#[test]
fn test_menu_only_flow() {
    let mut session = create_test_session(FlowKind::MenuOnly);
    assert_eq!(session.state(), SessionState::Ordering);

    session.increment(2);
    let summary = session.place_order().unwrap();
    assert_eq!(summary.reservation, None);
    assert_eq!(summary.total, Decimal::new(1299, 2));
}

#[test]
fn test_summary_total_matches_its_lines() {
    let catalog = vec![
        MenuItem::new(1, "Mint", Decimal::new(5, 3)),
        MenuItem::new(2, "Gum", Decimal::new(5, 3)),
    ];
    let mut session =
        OrderSession::new("Restaurant 1", catalog, FlowKind::MenuOnly, now()).unwrap();
    session.increment(1);
    session.increment(2);

    let summary = session.place_order().unwrap();
    let lines: Decimal = summary.line_items.iter().map(|l| l.line_total).sum();
    assert_eq!(summary.total, lines);
    assert_eq!(summary.total, Decimal::new(2, 2));
}

#[test]
fn test_reserve_only_flow() {
    let mut session = create_test_session(FlowKind::ReserveOnly);
    session.set_guest_count("4");

    let details = session.submit_reservation().unwrap();
    assert_eq!(session.state(), SessionState::Reserved);
    assert_eq!(details.table_number, None);
    assert_eq!(
        details.to_string(),
        "Table for 4 guests at Restaurant 1 on 10/16/2026 at 19:30."
    );
}

#[test]
fn test_skip_ordering_keeps_reservation() {
    let mut session = ordering_session();
    session.increment(1);

    let details = session.skip_ordering().unwrap();
    assert_eq!(session.state(), SessionState::Reserved);
    assert_eq!(details.table_number, Some(5));
    assert!(session.selection().is_empty());
    assert_eq!(session.confirmed_reservation(), Some(&details));
}

#[test]
fn test_skip_ordering_without_reservation_fails() {
    let mut session = create_test_session(FlowKind::MenuOnly);
    assert!(matches!(
        session.skip_ordering(),
        Err(SessionError::InvalidState { .. })
    ));
    assert_eq!(session.state(), SessionState::Ordering);
}

#[test]
fn test_submit_twice_fails() {
    let mut session = ordering_session();
    assert!(matches!(
        session.submit_reservation(),
        Err(SessionError::InvalidState {
            state: SessionState::Ordering,
            ..
        })
    ));
}

#[test]
fn test_cart_frozen_after_submit() {
    let mut session = create_test_session(FlowKind::MenuOnly);
    session.increment(1);
    session.place_order().unwrap();

    assert_eq!(session.increment(1), 0);
    assert_eq!(session.decrement(1), 0);
    assert!(session.selection().is_empty());
    assert_eq!(session.place_order(), Err(SessionError::EmptySelection));
}

#[test]
fn test_each_order_gets_new_summary_id() {
    let mut first = create_test_session(FlowKind::MenuOnly);
    let mut second = create_test_session(FlowKind::MenuOnly);
    first.increment(1);
    second.increment(1);

    let a = first.place_order().unwrap();
    let b = second.place_order().unwrap();
    assert_ne!(a.order_id, b.order_id);
    assert_eq!(a.line_items, b.line_items);
}
