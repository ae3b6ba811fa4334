use super::*;

#[test]
fn test_validate_guests_zero() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    session.set_guest_count(0);

    let err = session.validate_for_submit().unwrap_err();
    assert_eq!(err.field, ValidationField::Guests);
    assert_eq!(err.field.as_str(), "guests");
}

#[test]
fn test_validate_table_missing() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    session.set_guest_count(3);

    let err = session.validate_for_submit().unwrap_err();
    assert_eq!(err.field, ValidationField::Table);
    assert_eq!(err.field.as_str(), "table");
}

#[test]
fn test_validate_guests_and_table_ok() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    session.set_guest_count(3);
    session.select_table(5).unwrap();

    assert!(session.validate_for_submit().is_ok());
}

#[test]
fn test_validate_table_not_required_for_reserve_only() {
    let mut session = create_test_session(FlowKind::ReserveOnly);
    session.set_guest_count("2");
    assert!(session.validate_for_submit().is_ok());
}

#[test]
fn test_guest_input_is_free_text_until_submit() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    session.select_table(2).unwrap();

    for bad in ["", "abc", "-1", "0", "2.5"] {
        session.set_guest_count(bad);
        assert_eq!(session.reservation().guests_input(), bad);
        let err = session.submit_reservation().unwrap_err();
        assert_eq!(
            err,
            SessionError::Validation(ValidationError::guests()),
            "input {bad:?} should be rejected"
        );
        assert_eq!(session.state(), SessionState::Reserving);
    }
}

#[test]
fn test_table_range() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    assert_eq!(session.available_tables(), 1..=20);
    assert!(session.select_table(20).is_ok());
    assert!(session.select_table(21).is_err());
    assert!(session.select_table(0).is_err());
    assert_eq!(session.reservation().table_number(), Some(20));

    let mut small = create_test_session(FlowKind::ReserveAndOrder).with_table_count(4);
    assert_eq!(small.available_tables(), 1..=4);
    assert!(small.select_table(5).is_err());
}

#[test]
fn test_past_date_accepted() {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    let past = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    session.set_reservation_date_time(past, chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    session.set_guest_count(2);
    session.select_table(1).unwrap();

    let details = session.submit_reservation().unwrap();
    assert_eq!(details.date, past);
}

#[test]
fn test_date_time_defaults_to_session_start() {
    let session = create_test_session(FlowKind::ReserveAndOrder);
    assert_eq!(session.reservation().date(), now().date());
    assert_eq!(session.reservation().time(), now().time());
}
