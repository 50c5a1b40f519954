//! # Validation Module
//!
//! Input validation for invoices coming from outside the process.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Shape of plays.json / invoices.json                               │
//! │  └── Audience must fit a u32 (negative counts rejected)                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Customer name, play id lengths                                    │
//! │  └── Audience and invoice size limits                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: summarize()                                                  │
//! │  ├── Play id must exist in catalog          → UnknownPlay              │
//! │  └── Genre must be tragedy / comedy         → UnsupportedGenre         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use theater_core::validation::validate_invoice;
//! use theater_core::{Invoice, Performance};
//!
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//! assert!(validate_invoice(&invoice).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::Invoice;
use crate::{MAX_AUDIENCE, MAX_PERFORMANCES_PER_INVOICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_CUSTOMER_NAME_LEN: usize = 200;
const MAX_PLAY_ID_LEN: usize = 64;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer".to_string(),
        });
    }

    if name.chars().count() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a play identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_play_id(play_id: &str) -> ValidationResult<()> {
    if play_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "playID".to_string(),
        });
    }

    if play_id.chars().count() > MAX_PLAY_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "playID".to_string(),
            max: MAX_PLAY_ID_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an audience count.
///
/// Zero is allowed: a performance nobody attended still bills the base
/// amount.
pub fn validate_audience(audience: u32) -> ValidationResult<()> {
    if audience > MAX_AUDIENCE {
        return Err(ValidationError::OutOfRange {
            field: "audience".to_string(),
            min: 0,
            max: i64::from(MAX_AUDIENCE),
        });
    }

    Ok(())
}

// =============================================================================
// Invoice Validator
// =============================================================================

/// Validates a whole invoice before it is summarized.
///
/// Stops at the first violation.
pub fn validate_invoice(invoice: &Invoice) -> ValidationResult<()> {
    validate_customer_name(&invoice.customer)?;

    if invoice.performances.len() > MAX_PERFORMANCES_PER_INVOICE {
        return Err(ValidationError::TooMany {
            field: "performances".to_string(),
            max: MAX_PERFORMANCES_PER_INVOICE,
        });
    }

    for performance in &invoice.performances {
        validate_play_id(&performance.play_id)?;
        validate_audience(performance.audience)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Performance;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("BigCo").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_play_id() {
        assert!(validate_play_id("hamlet").is_ok());
        assert!(validate_play_id("as-like").is_ok());
        assert!(validate_play_id("").is_err());
        assert!(validate_play_id(&"p".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_audience() {
        assert!(validate_audience(0).is_ok());
        assert!(validate_audience(MAX_AUDIENCE).is_ok());
        assert_eq!(
            validate_audience(MAX_AUDIENCE + 1).unwrap_err(),
            ValidationError::OutOfRange {
                field: "audience".to_string(),
                min: 0,
                max: 100_000,
            }
        );
    }

    #[test]
    fn test_validate_invoice() {
        let ok = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
        assert!(validate_invoice(&ok).is_ok());

        let no_customer = Invoice::new(" ", vec![]);
        assert!(matches!(
            validate_invoice(&no_customer),
            Err(ValidationError::Required { .. })
        ));

        let blank_play = Invoice::new("BigCo", vec![Performance::new("", 10)]);
        assert!(validate_invoice(&blank_play).is_err());

        let too_many = Invoice::new(
            "BigCo",
            vec![Performance::new("hamlet", 1); MAX_PERFORMANCES_PER_INVOICE + 1],
        );
        assert!(matches!(
            validate_invoice(&too_many),
            Err(ValidationError::TooMany { .. })
        ));
    }
}
