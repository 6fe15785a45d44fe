use crate::utils::error::{Result, ShowcaseError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("sample.name", "Ann").is_ok());
        assert!(validate_non_empty_string("sample.name", "").is_err());
        assert!(validate_non_empty_string("sample.name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("delay_ms", 0u64, 0, 60_000).is_ok());
        assert!(validate_range("delay_ms", 60_000u64, 0, 60_000).is_ok());

        match validate_range("delay_ms", 60_001u64, 0, 60_000) {
            Err(ShowcaseError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "delay_ms");
                assert_eq!(value, "60001");
            }
            other => panic!("Expected InvalidConfigValueError, got {:?}", other),
        }
    }
}
