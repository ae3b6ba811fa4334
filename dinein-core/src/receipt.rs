//! Receipt for a placed order

use shared::order::OrderSummary;
use shared::{AppError, ErrorCode};
use thiserror::Error;
use tracing::info;

use crate::orders::format_money;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("Order {0} is already paid")]
    AlreadyPaid(String),

    #[error("Cannot cancel a paid order")]
    CancelAfterPayment,
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        let app = AppError::with_message(ErrorCode::OrderAlreadyPaid, err.to_string());
        match err {
            ReceiptError::AlreadyPaid(order_id) => app.with_detail("order_id", order_id),
            ReceiptError::CancelAfterPayment => app,
        }
    }
}

/// Receipt screen state
///
/// The summary is frozen; only the payment and cancel-prompt flags move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    summary: OrderSummary,
    paid: bool,
    cancel_prompt_open: bool,
}

impl Receipt {
    pub fn new(summary: OrderSummary) -> Self {
        Self {
            summary,
            paid: false,
            cancel_prompt_open: false,
        }
    }

    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    /// Mark the order paid; a second payment is refused
    pub fn pay(&mut self) -> Result<(), ReceiptError> {
        if self.paid {
            return Err(ReceiptError::AlreadyPaid(self.summary.order_id.clone()));
        }
        self.paid = true;
        self.cancel_prompt_open = false;
        info!(order_id = %self.summary.order_id, total = %self.summary.total, "Payment processed");
        Ok(())
    }

    pub fn pay_button_label(&self) -> &'static str {
        if self.paid { "Paid" } else { "Pay" }
    }

    /// The cancel button is hidden once paid
    pub fn can_cancel(&self) -> bool {
        !self.paid
    }

    pub fn open_cancel_prompt(&mut self) -> Result<(), ReceiptError> {
        if self.paid {
            return Err(ReceiptError::CancelAfterPayment);
        }
        self.cancel_prompt_open = true;
        Ok(())
    }

    pub fn close_cancel_prompt(&mut self) {
        self.cancel_prompt_open = false;
    }

    pub fn is_cancel_prompt_open(&self) -> bool {
        self.cancel_prompt_open
    }

    /// Receipt text, one line per entry
    pub fn render(&self, currency_symbol: &str) -> Vec<String> {
        let summary = &self.summary;
        let mut lines = vec![
            "Receipt".to_string(),
            format!("Restaurant: {}", summary.restaurant_name),
        ];

        if let Some(reservation) = &summary.reservation {
            if let Some(table) = reservation.table_number {
                lines.push(format!("Table Number: {table}"));
            }
            lines.push(format!("Guests: {}", reservation.guest_count));
            lines.push(format!("Date: {}", reservation.date_display()));
            lines.push(format!("Time: {}", reservation.time_display()));
        }

        lines.extend(summary.line_items.iter().map(|line| {
            format!(
                "{} x {} - {} each",
                line.quantity,
                line.name,
                format_money(line.unit_price, currency_symbol)
            )
        }));
        lines.push(format!(
            "Total: {}",
            format_money(summary.total, currency_symbol)
        ));
        lines
    }
}
