//! # Error Types
//!
//! Domain-specific error types for theater-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  theater-core errors (this file)                                       │
//! │  ├── CoreError        - Statement computation failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  theater-render errors (separate crate)                                │
//! │  └── RenderError      - Unknown output format / locale                 │
//! │                                                                         │
//! │  theater-cli errors (app)                                              │
//! │  ├── ConfigError      - Bad configuration values                       │
//! │  └── LoadError        - Unreadable or malformed JSON input             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Keep the offending identifier in the variant
//! 3. Data-integrity errors are never retried

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Statement computation errors.
///
/// Either variant aborts the whole statement: no partial summary is ever
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A play's genre is outside the known set.
    ///
    /// ## When This Occurs
    /// - The catalog lists a play as `"opera"`, `"history"`, etc.
    /// - The genre string is empty
    #[error("unknown type: {0}")]
    UnsupportedGenre(String),

    /// A performance references a play that is not in the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before an invoice reaches the pricing
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Too many entries in a collection.
    #[error("{field} cannot have more than {max} entries")]
    TooMany { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
