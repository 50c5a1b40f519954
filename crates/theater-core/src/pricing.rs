//! # Pricing Engine
//!
//! Genre-specific amount and volume credit rules for one performance.
//!
//! ## Pricing Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TRAGEDY                                                                │
//! │    $400.00 base                                                         │
//! │    + $10.00 per attendee above 30                                       │
//! │                                                                         │
//! │  COMEDY                                                                 │
//! │    $300.00 base                                                         │
//! │    + $100.00 flat + $5.00 per attendee above 20 (only when above 20)    │
//! │    + $3.00 per attendee, always                                         │
//! │                                                                         │
//! │  VOLUME CREDITS                                                         │
//! │    1 per attendee above 30, any genre                                   │
//! │    + 1 per 5 attendees for comedy (remainder dropped)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The formulas take a parsed [`Genre`]; only [`price_play`] touches the raw
//! catalog string and can fail.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Genre, LineResult, Play};

// =============================================================================
// Business Constants
// =============================================================================

/// Tragedy base amount: $400.00.
pub const TRAGEDY_BASE_AMOUNT: Money = Money::from_cents(40_000);

/// Audience above which tragedies charge per person.
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;

/// Tragedy charge per attendee above the threshold: $10.00.
pub const TRAGEDY_OVER_THRESHOLD_PER_PERSON: Money = Money::from_cents(1_000);

/// Comedy base amount: $300.00.
pub const COMEDY_BASE_AMOUNT: Money = Money::from_cents(30_000);

/// Audience above which comedies charge the over-capacity surcharge.
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;

/// Flat comedy surcharge once the threshold is crossed: $100.00.
pub const COMEDY_OVER_THRESHOLD_AMOUNT: Money = Money::from_cents(10_000);

/// Comedy charge per attendee above the threshold: $5.00.
pub const COMEDY_OVER_THRESHOLD_PER_PERSON: Money = Money::from_cents(500);

/// Comedy charge for every attendee: $3.00.
pub const COMEDY_AMOUNT_PER_ATTENDEE: Money = Money::from_cents(300);

/// Attendees up to this count earn no base volume credits.
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;

/// Comedies earn one extra credit per this many attendees.
pub const COMEDY_EXTRA_CREDIT_FACTOR: u32 = 5;

// =============================================================================
// Formulas
// =============================================================================

/// Amount owed for one performance.
///
/// ## Example
/// ```rust
/// use theater_core::pricing::amount_for;
/// use theater_core::Genre;
///
/// assert_eq!(amount_for(Genre::Tragedy, 55).cents(), 65_000);
/// assert_eq!(amount_for(Genre::Comedy, 35).cents(), 58_000);
/// ```
pub fn amount_for(genre: Genre, audience: u32) -> Money {
    match genre {
        Genre::Tragedy => {
            let mut amount = TRAGEDY_BASE_AMOUNT;
            if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                amount += TRAGEDY_OVER_THRESHOLD_PER_PERSON
                    .times(audience - TRAGEDY_AUDIENCE_THRESHOLD);
            }
            amount
        }
        Genre::Comedy => {
            let mut amount = COMEDY_BASE_AMOUNT;
            if audience > COMEDY_AUDIENCE_THRESHOLD {
                amount += COMEDY_OVER_THRESHOLD_AMOUNT
                    + COMEDY_OVER_THRESHOLD_PER_PERSON.times(audience - COMEDY_AUDIENCE_THRESHOLD);
            }
            amount + COMEDY_AMOUNT_PER_ATTENDEE.times(audience)
        }
    }
}

/// Volume credits earned for one performance.
///
/// ## Example
/// ```rust
/// use theater_core::pricing::credits_for;
/// use theater_core::Genre;
///
/// assert_eq!(credits_for(Genre::Tragedy, 55), 25);
/// assert_eq!(credits_for(Genre::Comedy, 35), 5 + 7);
/// ```
pub fn credits_for(genre: Genre, audience: u32) -> u64 {
    let base = u64::from(audience.saturating_sub(BASE_VOLUME_CREDIT_THRESHOLD));
    match genre {
        Genre::Comedy => base + u64::from(audience / COMEDY_EXTRA_CREDIT_FACTOR),
        Genre::Tragedy => base,
    }
}

/// Amount and credits for one performance of a known genre.
pub fn price(genre: Genre, audience: u32) -> LineResult {
    LineResult {
        amount: amount_for(genre, audience),
        credits: credits_for(genre, audience),
    }
}

/// Prices a performance of a catalog play.
///
/// ## Errors
/// [`crate::CoreError::UnsupportedGenre`] if the play's genre string is not
/// a known [`Genre`].
pub fn price_play(play: &Play, audience: u32) -> CoreResult<LineResult> {
    let genre = play.genre()?;
    Ok(price(genre, audience))
}

// =============================================================================
// Unit Tests
// =============================================================================
