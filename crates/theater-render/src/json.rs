//! # JSON Statements
//!
//! Machine-readable statements. Each amount is emitted twice: exact integer
//! cents for programs and the formatted string for display.
//!
//! ```json
//! {
//!   "customer": "BigCo",
//!   "lines": [
//!     { "play": "Hamlet", "seats": 55, "amountCents": 65000, "amount": "$650.00" }
//!   ],
//!   "totalAmountCents": 65000,
//!   "totalAmount": "$650.00",
//!   "totalCredits": 25
//! }
//! ```

use serde::Serialize;

use theater_core::StatementSummary;

use crate::currency::CurrencyFormatter;
use crate::error::RenderResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonStatement<'a> {
    customer: &'a str,
    lines: Vec<JsonLine<'a>>,
    total_amount_cents: i64,
    total_amount: String,
    total_credits: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLine<'a> {
    play: &'a str,
    seats: u32,
    amount_cents: i64,
    amount: String,
}

/// Renders the statement as pretty-printed JSON.
pub fn render_json(
    summary: &StatementSummary,
    currency: &dyn CurrencyFormatter,
) -> RenderResult<String> {
    let statement = JsonStatement {
        customer: &summary.customer,
        lines: summary
            .lines
            .iter()
            .map(|line| JsonLine {
                play: &line.play_name,
                seats: line.audience,
                amount_cents: line.amount.cents(),
                amount: currency.format(line.amount),
            })
            .collect(),
        total_amount_cents: summary.total_amount.cents(),
        total_amount: currency.format(summary.total_amount),
        total_credits: summary.total_credits,
    };

    Ok(serde_json::to_string_pretty(&statement)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::LocaleCurrency;
    use theater_core::{LineItem, Money};

    #[test]
    fn test_json_statement() {
        let summary = StatementSummary {
            customer: "BigCo".to_string(),
            lines: vec![
                LineItem {
                    play_name: "Hamlet".to_string(),
                    amount: Money::from_cents(65_000),
                    audience: 55,
                },
                LineItem {
                    play_name: "As You Like It".to_string(),
                    amount: Money::from_cents(58_000),
                    audience: 35,
                },
            ],
            total_amount: Money::from_cents(123_000),
            total_credits: 37,
        };

        let json = render_json(&summary, &LocaleCurrency::en_us()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["customer"], "BigCo");
        assert_eq!(value["lines"][0]["play"], "Hamlet");
        assert_eq!(value["lines"][1]["seats"], 35);
        assert_eq!(value["lines"][1]["amountCents"], 58_000);
        assert_eq!(value["totalAmountCents"], 123_000);
        assert_eq!(value["totalAmount"], "$1,230.00");
        assert_eq!(value["totalCredits"], 37);
    }

    #[test]
    fn test_credit_total_beyond_u32() {
        let summary = StatementSummary {
            customer: "Stadium".to_string(),
            lines: vec![],
            total_amount: Money::zero(),
            total_credits: 12_884_901_795,
        };

        let json = render_json(&summary, &LocaleCurrency::en_us()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totalCredits"], 12_884_901_795u64);
    }
}
