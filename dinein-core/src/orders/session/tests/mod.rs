use super::*;
use chrono::NaiveDate;
use shared::order::{CommandErrorCode, SessionCommandPayload, ValidationField};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(19, 30, 0)
        .unwrap()
}

fn burger_pizza() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Burger", Decimal::new(899, 2)),
        MenuItem::new(2, "Pizza", Decimal::new(1299, 2)),
    ]
}

fn create_test_session(flow: FlowKind) -> OrderSession {
    OrderSession::new("Restaurant 1", burger_pizza(), flow, now()).unwrap()
}

/// Session already past the reservation step
fn ordering_session() -> OrderSession {
    let mut session = create_test_session(FlowKind::ReserveAndOrder);
    session.set_guest_count("3");
    session.select_table(5).unwrap();
    session.submit_reservation().unwrap();
    assert_eq!(session.state(), SessionState::Ordering);
    session
}

fn run(session: &mut OrderSession, payload: SessionCommandPayload) -> CommandResponse {
    session.execute(SessionCommand::new(payload))
}

mod test_flows;
mod test_validation;
