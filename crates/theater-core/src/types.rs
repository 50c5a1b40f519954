//! # Domain Types
//!
//! Core domain types used throughout the statement engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (immutable)                                                      │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Play       │   │   Performance   │   │     Invoice     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  play_id (FK)   │◄──│  customer       │       │
//! │  │  name           │   │  audience       │   │  performances   │       │
//! │  │  genre (raw)    │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  DERIVED (never persisted)                                              │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   LineResult    │   │    LineItem     │   │StatementSummary │       │
//! │  │  amount         │   │  play_name      │──►│  customer       │       │
//! │  │  credits        │   │  amount         │   │  lines          │       │
//! │  └─────────────────┘   │  audience       │   │  total_amount   │       │
//! │                        └─────────────────┘   │  total_credits  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Raw Genre Strings
//! Catalog data carries the genre as free text. It is parsed into the closed
//! [`Genre`] enum only when a play is priced, so an invoice that references
//! an `"opera"` fails with [`CoreError::UnsupportedGenre`] at that point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Genre
// =============================================================================

/// The genre of a play, which selects the pricing formula.
///
/// Adding a variant forces every `match` in [`crate::pricing`] to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Returns the canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Genre::Tragedy => "tragedy",
            Genre::Comedy => "comedy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = CoreError;

    /// Parses a genre. Only the exact lowercase names are accepted.
    ///
    /// The error keeps the string exactly as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(Genre::Tragedy),
            "comedy" => Ok(Genre::Comedy),
            _ => Err(CoreError::UnsupportedGenre(s.to_string())),
        }
    }
}

// =============================================================================
// Play
// =============================================================================

/// A play in the catalog.
///
/// In `plays.json` the id is the map key and the genre field is called
/// `type`:
/// ```json
/// { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Catalog identifier. Filled from the map key when absent in JSON.
    #[serde(default)]
    pub id: String,

    /// Display name printed on the statement.
    pub name: String,

    /// Genre exactly as it appears in the catalog data.
    #[serde(rename = "type", alias = "genre")]
    pub genre: String,
}

impl Play {
    /// Creates a play.
    pub fn new(id: impl Into<String>, name: impl Into<String>, genre: impl Into<String>) -> Self {
        Play {
            id: id.into(),
            name: name.into(),
            genre: genre.into(),
        }
    }

    /// Parses the raw genre into [`Genre`].
    ///
    /// ## Errors
    /// [`CoreError::UnsupportedGenre`] with the raw genre string.
    pub fn genre(&self) -> CoreResult<Genre> {
        self.genre.parse()
    }
}

// =============================================================================
// Performance & Invoice
// =============================================================================

/// One performance billed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Foreign key into the play catalog.
    #[serde(rename = "playID", alias = "play_id")]
    pub play_id: String,

    /// Number of attendees.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice. Performance order is preserved on the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }
}

// =============================================================================
// Derived Results
// =============================================================================

/// Amount and volume credits for a single performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResult {
    /// Amount owed in cents.
    pub amount: Money,
    /// Volume credits earned.
    pub credits: u64,
}

/// The statement's record for one performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub play_name: String,
    pub amount: Money,
    pub audience: u32,
}

/// Everything a renderer needs to print a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub customer: String,
    /// Line items in invoice order.
    pub lines: Vec<LineItem>,
    /// Sum of all line amounts, in cents.
    pub total_amount: Money,
    /// Sum of all line credits.
    pub total_credits: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_from_str() {
        assert_eq!("tragedy".parse::<Genre>().unwrap(), Genre::Tragedy);
        assert_eq!("comedy".parse::<Genre>().unwrap(), Genre::Comedy);
    }

    #[test]
    fn test_genre_is_case_and_whitespace_sensitive() {
        for raw in [" Comedy ", "Tragedy", " COMEDY ", "TRAGEDY\n", "comedy "] {
            assert_eq!(
                raw.parse::<Genre>().unwrap_err(),
                CoreError::UnsupportedGenre(raw.to_string())
            );
        }
    }

    #[test]
    fn test_unknown_genre_keeps_raw_string() {
        let err = "opera".parse::<Genre>().unwrap_err();
        assert_eq!(err, CoreError::UnsupportedGenre("opera".to_string()));

        let err = "".parse::<Genre>().unwrap_err();
        assert_eq!(err, CoreError::UnsupportedGenre(String::new()));
    }

    #[test]
    fn test_genre_display_round_trips() {
        for genre in [Genre::Tragedy, Genre::Comedy] {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_play_genre() {
        let play = Play::new("hamlet", "Hamlet", "tragedy");
        assert_eq!(play.genre().unwrap(), Genre::Tragedy);

        let play = Play::new("aida", "Aida", "opera");
        assert!(matches!(play.genre(), Err(CoreError::UnsupportedGenre(g)) if g == "opera"));
    }

    #[test]
    fn test_play_deserializes_type_field() {
        let play: Play = serde_json::from_str(r#"{"name":"Hamlet","type":"tragedy"}"#).unwrap();
        assert_eq!(play.id, "");
        assert_eq!(play.name, "Hamlet");
        assert_eq!(play.genre, "tragedy");
    }

    #[test]
    fn test_invoice_deserializes_play_id_field() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"customer":"BigCo","performances":[{"playID":"hamlet","audience":55}]}"#,
        )
        .unwrap();
        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(invoice.performances, vec![Performance::new("hamlet", 55)]);
    }

    #[test]
    fn test_negative_audience_is_rejected() {
        let result: Result<Performance, _> =
            serde_json::from_str(r#"{"playID":"hamlet","audience":-1}"#);
        assert!(result.is_err());
    }
}
