use std::path::Path;

use anyhow::{Context, bail};
use chrono::Local;
use dinein_core::{OrderSession, Receipt, StaticMenuProvider, setup_environment};
use shared::order::{FlowKind, SessionCommand, SessionCommandPayload};

const DEMO_RESTAURANT: &str = "Restaurant 1";

/// Reserve table 5 for three guests, then two burgers and a pizza
fn demo_script() -> Vec<SessionCommandPayload> {
    vec![
        SessionCommandPayload::SetGuestCount {
            value: "3".to_string(),
        },
        SessionCommandPayload::SelectTable { table: 5 },
        SessionCommandPayload::SubmitReservation,
        SessionCommandPayload::Increment { item_id: 1 },
        SessionCommandPayload::Increment { item_id: 1 },
        SessionCommandPayload::Increment { item_id: 2 },
        SessionCommandPayload::PlaceOrder,
    ]
}

fn load_script(path: &Path) -> anyhow::Result<Vec<SessionCommandPayload>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid script {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    tracing::info!(environment = %config.environment, "DineIn session runner starting");

    let script = match std::env::args().nth(1) {
        Some(path) => load_script(Path::new(&path))?,
        None => demo_script(),
    };

    let mut session = OrderSession::from_provider(
        DEMO_RESTAURANT,
        &StaticMenuProvider,
        FlowKind::ReserveAndOrder,
        Local::now().naive_local(),
    )?
    .with_table_count(config.table_count);

    let mut placed = None;
    for payload in script {
        let resp = session.execute(SessionCommand::new(payload));
        if let Some(err) = &resp.error {
            println!("! {}", err.message);
        }
        if let Some(reservation) = &resp.reservation {
            println!("Reservation Confirmed: {reservation}");
        }
        if resp.summary.is_some() {
            placed = resp.summary;
        }
    }

    let Some(summary) = placed else {
        bail!("script finished in state {} without placing an order", session.state());
    };

    let mut receipt = Receipt::new(summary);
    for line in receipt.render(&config.currency_symbol) {
        println!("{line}");
    }
    receipt.pay()?;
    println!("Payment Successful!");

    Ok(())
}
