//! # theater-core: Pure Business Logic for Theater Statements
//!
//! This crate computes what a customer owes for a set of performances and
//! how many volume credits they earned. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Theater Statements Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    theater-cli (binary)                         │   │
//! │  │     config ──► load plays/invoices ──► summarize ──► print      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    theater-render                               │   │
//! │  │          text / html / json, locale currency formatting         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ StatementSummary                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ theater-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ statement │  │  catalog  │  │   │
//! │  │   │   Play    │  │  amount   │  │ summarize │  │  lookup   │  │   │
//! │  │   │  Invoice  │  │  credits  │  │  totals   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO FLOATS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Play, Genre, Invoice, StatementSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Genre-specific pricing and volume credit rules
//! - [`statement`] - Per-invoice aggregation into a summary
//! - [`catalog`] - Play lookup collaborator
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for invoices
//!
//! ## Example Usage
//!
//! ```rust
//! use theater_core::{summarize, InMemoryCatalog, Invoice, Performance, Play};
//!
//! let catalog = InMemoryCatalog::from_plays([
//!     Play::new("hamlet", "Hamlet", "tragedy"),
//!     Play::new("as-like", "As You Like It", "comedy"),
//! ]);
//! let invoice = Invoice::new(
//!     "BigCo",
//!     vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
//! );
//!
//! let summary = summarize(&invoice, &catalog).unwrap();
//! assert_eq!(summary.total_amount.cents(), 65_000 + 58_000);
//! assert_eq!(summary.total_credits, 25 + 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod statement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{InMemoryCatalog, PlayCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use statement::summarize;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum performances accepted on a single invoice.
///
/// ## Business Reason
/// A statement is printed on one page; anything larger is a data error.
pub const MAX_PERFORMANCES_PER_INVOICE: usize = 500;

/// Maximum audience for a single performance.
///
/// Keeps every per-line amount far below `i64::MAX` cents even after
/// summing a full invoice.
pub const MAX_AUDIENCE: u32 = 100_000;
