use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;
use validator::ValidateEmail;

/// Accepted phone formats: `+<7-15 digits>` or `NNN-NNN-NNNN`
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+\d{7,15}|\d{3}-\d{3}-\d{4})$").unwrap());

/// Check email syntax. Empty input is reported as missing rather than
/// malformed so bulk error messages stay meaningful.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !email.validate_email() {
        return Err(format!("Invalid email format: '{}'", email));
    }
    Ok(())
}

/// Check phone syntax against the accepted patterns.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err(format!(
            "Invalid phone format: '{}'. Expected +1234567890 or 123-456-7890",
            phone
        ))
    }
}

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: Uuid,
    /// Customer display name
    pub name: String,
    /// Customer email (unique, case-insensitive)
    pub email: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new customer. Field validation runs in the service
/// through `validate_email` and `validate_phone`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Customer {
    /// Create a new customer from a CreateCustomer DTO
    pub fn new(input: CreateCustomer) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_valid_addresses() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("bob.smith+tag@mail.co.uk").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_empty() {
        let err = validate_email("").unwrap_err();
        assert!(err.contains("required"));

        let err = validate_email("   ").unwrap_err();
        assert!(err.contains("required"));
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(validate_email("bad-email").is_err());
        assert!(validate_email("missing@tld@twice").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_validate_phone_international_format() {
        assert!(validate_phone("+1234567890").is_ok());
        assert!(validate_phone("+1234567").is_ok()); // 7 digits, minimum
        assert!(validate_phone("+123456789012345").is_ok()); // 15 digits, maximum

        assert!(validate_phone("+123456").is_err()); // 6 digits, too short
        assert!(validate_phone("+1234567890123456").is_err()); // 16 digits, too long
    }

    #[test]
    fn test_validate_phone_dashed_format() {
        assert!(validate_phone("123-456-7890").is_ok());

        assert!(validate_phone("123-45-7890").is_err());
        assert!(validate_phone("1234567890").is_err());
        assert!(validate_phone("123-456-78901").is_err());
    }

    #[test]
    fn test_customer_new_preserves_input() {
        let customer = Customer::new(CreateCustomer {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: Some("+1234567890".to_string()),
        });

        assert_eq!(customer.name, "Alice");
        assert_eq!(customer.email, "alice@example.com");
        assert_eq!(customer.phone.as_deref(), Some("+1234567890"));
    }
}
