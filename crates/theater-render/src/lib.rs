//! # theater-render: Statement Renderers
//!
//! Formats a [`StatementSummary`] for people (text, HTML) or programs
//! (JSON). Money stays in integer cents until [`CurrencyFormatter`] turns it
//! into a display string.
//!
//! ## Rendering Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  StatementSummary ──┬──► text::render_text ──► "Statement for BigCo…"  │
//! │  (theater-core)     │                                                   │
//! │                     ├──► html::render_html ──► "<h1>Statement for…"    │
//! │                     │                                                   │
//! │                     └──► json::render_json ──► "{ \"customer\": …"     │
//! │                                 ▲                                       │
//! │                                 │                                       │
//! │                 CurrencyFormatter (en-US / de-DE)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use theater_core::{Money, StatementSummary, LineItem};
//! use theater_render::{render, LocaleCurrency, OutputFormat};
//!
//! let summary = StatementSummary {
//!     customer: "BigCo".to_string(),
//!     lines: vec![LineItem {
//!         play_name: "Hamlet".to_string(),
//!         amount: Money::from_cents(65_000),
//!         audience: 55,
//!     }],
//!     total_amount: Money::from_cents(65_000),
//!     total_credits: 25,
//! };
//!
//! let text = render(&summary, OutputFormat::Text, &LocaleCurrency::en_us()).unwrap();
//! assert!(text.contains("Hamlet: $650.00 (55 seats)"));
//! ```

pub mod currency;
pub mod error;
pub mod format;
pub mod html;
pub mod json;
pub mod text;

pub use currency::{CurrencyFormatter, Locale, LocaleCurrency};
pub use error::{RenderError, RenderResult};
pub use format::{render, OutputFormat};

#[doc(no_inline)]
pub use theater_core::StatementSummary;
