//! Input validation for new vehicle records.
//!
//! The only guard logic in the tool: a record is constructed only after
//! every field passes, so no partial entry ever reaches the garage.

use crate::error::{Error, Result};

/// Require a non-empty value after trimming.
///
/// Returns the trimmed value, or [`Error::RequiredField`] naming the
/// offending field.
pub fn require_non_empty(field: &'static str, input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::RequiredField { field });
    }
    Ok(trimmed.to_string())
}

/// Parse a price string into a strictly positive number.
///
/// Rejects anything that does not parse as a finite number greater
/// than zero.
pub fn parse_price(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(Error::InvalidPrice {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("model", " adder ").unwrap(), "adder");
        assert!(require_non_empty("model", "").is_err());
        assert!(require_non_empty("model", "   \t").is_err());
    }

    #[test]
    fn test_parse_price_accepts_positive_numbers() {
        assert_eq!(parse_price("18000").unwrap(), 18000.0);
        assert_eq!(parse_price(" 15000.5 ").unwrap(), 15000.5);
    }

    #[test]
    fn test_parse_price_rejects_bad_input() {
        assert!(parse_price("-5").is_err());
        assert!(parse_price("0").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }
}
