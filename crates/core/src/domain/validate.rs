// Field validation shared by entity constructors

use super::error::{DomainError, Result};

/// Default maximum length for names and short labels
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length for free-text descriptions
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Largest unit count accepted on a single sale or order line
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Trim `value` and require it to be non-empty and at most `max` characters
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    if trimmed.chars().count() > max {
        return Err(DomainError::FieldTooLong { field, max });
    }
    Ok(trimmed.to_string())
}

/// Like [`required_text`] but blank input becomes `None`
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_text(field, v, max).map(Some),
    }
}

/// Amount must be finite and strictly positive
pub fn positive_amount(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidAmount { field, value })
    }
}

/// Amount must be finite and zero or more
pub fn non_negative_amount(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidAmount { field, value })
    }
}

/// Quantity must be in `1..=MAX_QUANTITY`
pub fn positive_quantity(value: i64) -> Result<i64> {
    if (1..=MAX_QUANTITY).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::InvalidQuantity(value))
    }
}

/// Minimal shape check: something@something
pub fn email(value: &str) -> Result<String> {
    let email = required_text("email", value, 254)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            Ok(email.to_lowercase())
        }
        _ => Err(DomainError::InvalidEmail(email)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", "  Bread ", 10).unwrap(), "Bread");
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("name", "   ", 10).unwrap_err();
        assert_eq!(err, DomainError::EmptyField { field: "name" });
    }

    #[test]
    fn test_required_text_too_long() {
        let err = required_text("name", &"a".repeat(11), 10).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text("city", Some("  "), 10).unwrap(), None);
        assert_eq!(optional_text("city", None, 10).unwrap(), None);
        assert_eq!(
            optional_text("city", Some("Novi Sad"), 10).unwrap(),
            Some("Novi Sad".to_string())
        );
    }

    #[test]
    fn test_amounts() {
        assert!(positive_amount("amount", 0.0).is_err());
        assert!(positive_amount("amount", f64::NAN).is_err());
        assert!(positive_amount("amount", -3.0).is_err());
        assert_eq!(positive_amount("amount", 12.5).unwrap(), 12.5);

        assert_eq!(non_negative_amount("price", 0.0).unwrap(), 0.0);
        assert!(non_negative_amount("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_quantity() {
        assert!(positive_quantity(0).is_err());
        assert_eq!(positive_quantity(3).unwrap(), 3);
        assert_eq!(positive_quantity(MAX_QUANTITY).unwrap(), MAX_QUANTITY);
        assert!(positive_quantity(MAX_QUANTITY + 1).is_err());
        assert!(positive_quantity(i64::MAX).is_err());
    }

    #[test]
    fn test_email() {
        assert_eq!(email(" Shop@Example.com ").unwrap(), "shop@example.com");
        assert!(email("no-at-sign").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("shop@").is_err());
    }
}
