//! # Validation Module
//!
//! Form-input validation used by the command layer before it submits a
//! state transform. The UI does its own surface checks; these are the rules
//! that actually gate a write.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

/// Maximum length for entity names (services, products, people).
const MAX_NAME_LEN: usize = 200;

/// Validates a required name field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
///
/// Returns the trimmed name on success.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a price. Zero is allowed (free items); negatives are not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.cents() < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "taxRate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}
