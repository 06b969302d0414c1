//! Field-level validation for the calculator form.
//!
//! These are the pre-checks a caller runs before invoking the projection
//! engine. Each rule is independent; results are data (per-field errors),
//! never panics. The engine re-validates the remaining-amount and rate
//! rules on its own as a defensive boundary.

use crate::domain::formatting::parse_amount;
use crate::domain::models::form::{FieldError, FormField, FormValidation};

/// Validates raw form input before it reaches the projection engine.
#[derive(Clone)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Validate one field on its own.
    ///
    /// Rules: the value must parse as a non-negative number (thousands
    /// separators are tolerated), and the accrual rate must not be zero.
    pub fn validate_field(&self, field: FormField, raw: &str) -> Option<FieldError> {
        if raw.trim().is_empty() {
            return Some(FieldError::Missing);
        }
        let value = match parse_amount(raw) {
            Some(value) => value,
            None => return Some(FieldError::NotANumber),
        };
        if value < 0.0 {
            return Some(FieldError::Negative);
        }
        if field == FormField::RatePerHour && value == 0.0 {
            return Some(FieldError::ZeroRate);
        }
        None
    }

    /// Cross-field rule: the current amount must stay strictly below the
    /// required amount when both are positive. Reported against the
    /// "current" field.
    pub fn validate_current_below_required(
        &self,
        required_raw: &str,
        current_raw: &str,
    ) -> Option<FieldError> {
        let required = parse_amount(required_raw)?;
        let current = parse_amount(current_raw)?;
        if required > 0.0 && current > 0.0 && current >= required {
            return Some(FieldError::CurrentExceedsRequired);
        }
        None
    }

    /// Validate the whole form: every independent rule plus the
    /// cross-field rule.
    pub fn validate_form(&self, required: &str, current: &str, rate: &str) -> FormValidation {
        let mut validation = FormValidation {
            required_amount: self.validate_field(FormField::RequiredAmount, required),
            current_amount: self.validate_field(FormField::CurrentAmount, current),
            rate_per_hour: self.validate_field(FormField::RatePerHour, rate),
        };
        if validation.current_amount.is_none() {
            validation.current_amount = self.validate_current_below_required(required, current);
        }
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_separated_numbers() {
        let service = ValidationService::new();
        assert_eq!(service.validate_field(FormField::RequiredAmount, "1000"), None);
        assert_eq!(service.validate_field(FormField::RequiredAmount, "1,234,567"), None);
        assert_eq!(service.validate_field(FormField::RatePerHour, "12.5"), None);
    }

    #[test]
    fn rejects_empty_and_non_numeric_input() {
        let service = ValidationService::new();
        assert_eq!(
            service.validate_field(FormField::RequiredAmount, ""),
            Some(FieldError::Missing)
        );
        assert_eq!(
            service.validate_field(FormField::RequiredAmount, "   "),
            Some(FieldError::Missing)
        );
        assert_eq!(
            service.validate_field(FormField::RequiredAmount, "abc"),
            Some(FieldError::NotANumber)
        );
    }

    #[test]
    fn rejects_negative_values() {
        let service = ValidationService::new();
        assert_eq!(
            service.validate_field(FormField::CurrentAmount, "-5"),
            Some(FieldError::Negative)
        );
    }

    #[test]
    fn zero_rate_is_invalid_only_for_the_rate_field() {
        let service = ValidationService::new();
        assert_eq!(
            service.validate_field(FormField::RatePerHour, "0"),
            Some(FieldError::ZeroRate)
        );
        assert_eq!(service.validate_field(FormField::CurrentAmount, "0"), None);
    }

    #[test]
    fn cross_field_rule_reports_against_current() {
        let service = ValidationService::new();
        let validation = service.validate_form("1000", "1000", "50");
        assert_eq!(validation.required_amount, None);
        assert_eq!(validation.current_amount, Some(FieldError::CurrentExceedsRequired));
        assert!(!validation.is_valid());
    }

    #[test]
    fn cross_field_rule_needs_both_positive() {
        let service = ValidationService::new();
        // Zero current is allowed regardless of the required amount.
        assert!(service.validate_form("1000", "0", "50").is_valid());
        // Both-zero input fails on its own rules, not the cross-field rule.
        let validation = service.validate_form("0", "0", "50");
        assert_eq!(validation.current_amount, None);
    }

    #[test]
    fn valid_form_passes_all_rules() {
        let service = ValidationService::new();
        let validation = service.validate_form("1,000", "200", "100");
        assert!(validation.is_valid());
    }
}
