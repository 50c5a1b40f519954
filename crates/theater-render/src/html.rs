//! # HTML Statements
//!
//! Produces an HTML fragment. Customer and play names are escaped; amounts
//! and counts are generated here and need no escaping.

use html_escape::encode_text;
use std::fmt::Write;

use theater_core::StatementSummary;

use crate::currency::CurrencyFormatter;

/// Renders the statement as an HTML fragment.
pub fn render_html(summary: &StatementSummary, currency: &dyn CurrencyFormatter) -> String {
    let mut out = format!("<h1>Statement for {}</h1>\n", encode_text(&summary.customer));
    out.push_str("<table>\n");
    out.push_str("<tr><th>play</th><th>seats</th><th>cost</th></tr>\n");

    for line in &summary.lines {
        let _ = writeln!(
            out,
            "  <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&line.play_name),
            line.audience,
            encode_text(&currency.format(line.amount))
        );
    }

    out.push_str("</table>\n");
    let _ = writeln!(
        out,
        "<p>Amount owed is <em>{}</em></p>",
        encode_text(&currency.format(summary.total_amount))
    );
    let _ = writeln!(
        out,
        "<p>You earned <em>{}</em> credits</p>",
        summary.total_credits
    );
    out
}
