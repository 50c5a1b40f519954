//! # Plain Text Statements
//!
//! ```text
//! Statement for BigCo
//!   Hamlet: $650.00 (55 seats)
//!   As You Like It: $580.00 (35 seats)
//!   Othello: $500.00 (40 seats)
//! Amount owed is $1,730.00
//! You earned 47 credits
//! ```

use std::fmt::Write;

use theater_core::StatementSummary;

use crate::currency::CurrencyFormatter;

/// Renders the plain text statement. Every line ends with `\n`.
pub fn render_text(summary: &StatementSummary, currency: &dyn CurrencyFormatter) -> String {
    let mut out = format!("Statement for {}\n", summary.customer);

    // Writing to a String cannot fail.
    for line in &summary.lines {
        let _ = writeln!(
            out,
            "  {}: {} ({} seats)",
            line.play_name,
            currency.format(line.amount),
            line.audience
        );
    }

    let _ = writeln!(out, "Amount owed is {}", currency.format(summary.total_amount));
    let _ = writeln!(out, "You earned {} credits", summary.total_credits);
    out
}
