//! # Statement Aggregation
//!
//! Turns an [`Invoice`] into a [`StatementSummary`].
//!
//! ## Flow
//! ```text
//! for each performance (invoice order)
//!      │
//!      ├── catalog.lookup(play_id) ──── missing ──► UnknownPlay      (abort)
//!      │
//!      ├── price_play(play, audience) ─ bad genre ► UnsupportedGenre (abort)
//!      │
//!      └── push LineItem, add amount + credits to totals
//! ```
//!
//! Fail-fast: the first error ends the computation and no summary is
//! returned. Nothing here logs or touches I/O.

use crate::catalog::PlayCatalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::price_play;
use crate::types::{Invoice, LineItem, StatementSummary};

/// Computes the statement summary for an invoice.
///
/// ## Errors
/// - [`crate::CoreError::UnknownPlay`] if a performance's play is not in the
///   catalog
/// - [`crate::CoreError::UnsupportedGenre`] if a play's genre is unknown
pub fn summarize(invoice: &Invoice, catalog: &impl PlayCatalog) -> CoreResult<StatementSummary> {
    let mut lines = Vec::with_capacity(invoice.performances.len());
    let mut total_amount = Money::zero();
    let mut total_credits: u64 = 0;

    for performance in &invoice.performances {
        let play = catalog.lookup(&performance.play_id)?;
        let line = price_play(play, performance.audience)?;

        total_amount += line.amount;
        total_credits += line.credits;
        lines.push(LineItem {
            play_name: play.name.clone(),
            amount: line.amount,
            audience: performance.audience,
        });
    }

    Ok(StatementSummary {
        customer: invoice.customer.clone(),
        lines,
        total_amount,
        total_credits,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
