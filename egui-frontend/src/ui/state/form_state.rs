//! # Form State Module
//!
//! Explicit state for the calculator form: the raw field strings exactly as
//! typed, per-field validation errors, and the selected timezone. All
//! updates go through pure functions on this struct so the form logic is
//! testable without any UI.
//!
//! While the user is typing, empty fields are not flagged; the "please
//! enter a value" errors only appear when the whole form is validated on
//! submit.

use backend::domain::models::form::FormField;
use backend::domain::ValidationService;
use shared::FormSnapshot;

/// All state belonging to the calculator form.
#[derive(Debug, Clone)]
pub struct CalculatorFormState {
    pub required_amount: String,
    pub current_amount: String,
    pub rate_per_hour: String,
    /// Selected IANA timezone id
    pub timezone: String,
    /// Live filter text for the timezone selector popup
    pub timezone_filter: String,
    pub required_error: Option<String>,
    pub current_error: Option<String>,
    pub rate_error: Option<String>,
    pub is_valid: bool,
}

impl CalculatorFormState {
    pub fn new() -> Self {
        Self {
            required_amount: String::new(),
            current_amount: String::new(),
            rate_per_hour: String::new(),
            timezone: shared::DEFAULT_TIMEZONE.to_string(),
            timezone_filter: String::new(),
            required_error: None,
            current_error: None,
            rate_error: None,
            is_valid: true,
        }
    }

    /// Reset every field to its default, including the timezone.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Rebuild form state from a persisted snapshot.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            required_amount: snapshot.required_amount.clone(),
            current_amount: snapshot.current_amount.clone(),
            rate_per_hour: snapshot.rate_per_hour.clone(),
            timezone: snapshot.timezone.clone(),
            ..Self::new()
        }
    }

    /// Capture the current field values for persistence.
    pub fn to_snapshot(&self, dark_mode: bool) -> FormSnapshot {
        FormSnapshot {
            required_amount: self.required_amount.clone(),
            current_amount: self.current_amount.clone(),
            rate_per_hour: self.rate_per_hour.clone(),
            timezone: self.timezone.clone(),
            dark_mode,
        }
    }

    /// Set one field and revalidate with the while-typing rules.
    pub fn set_field(&mut self, field: FormField, value: String, rules: &ValidationService) {
        match field {
            FormField::RequiredAmount => self.required_amount = value,
            FormField::CurrentAmount => self.current_amount = value,
            FormField::RatePerHour => self.rate_per_hour = value,
        }
        self.revalidate(rules);
    }

    /// While-typing validation: empty fields pass, everything else runs the
    /// full field rules plus the cross-field ordering rule.
    pub fn revalidate(&mut self, rules: &ValidationService) {
        self.required_error =
            Self::soft_error(rules, FormField::RequiredAmount, &self.required_amount);
        self.current_error = Self::soft_error(rules, FormField::CurrentAmount, &self.current_amount)
            .or_else(|| {
                rules
                    .validate_current_below_required(&self.required_amount, &self.current_amount)
                    .map(|e| e.to_string())
            });
        self.rate_error = Self::soft_error(rules, FormField::RatePerHour, &self.rate_per_hour);
        self.refresh_validity();
    }

    /// Submit-time validation: every rule, including missing-value checks.
    pub fn validate_all(&mut self, rules: &ValidationService) {
        let validation =
            rules.validate_form(&self.required_amount, &self.current_amount, &self.rate_per_hour);
        self.required_error = validation.required_amount.map(|e| e.to_string());
        self.current_error = validation.current_amount.map(|e| e.to_string());
        self.rate_error = validation.rate_per_hour.map(|e| e.to_string());
        self.refresh_validity();
    }

    /// Whether all three numeric fields have something typed in them.
    pub fn has_all_inputs(&self) -> bool {
        !self.required_amount.trim().is_empty()
            && !self.current_amount.trim().is_empty()
            && !self.rate_per_hour.trim().is_empty()
    }

    fn soft_error(rules: &ValidationService, field: FormField, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            None
        } else {
            rules.validate_field(field, raw).map(|e| e.to_string())
        }
    }

    fn refresh_validity(&mut self) {
        self.is_valid = self.required_error.is_none()
            && self.current_error.is_none()
            && self.rate_error.is_none();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ValidationService {
        ValidationService::new()
    }

    #[test]
    fn new_form_is_empty_and_valid() {
        let form = CalculatorFormState::new();
        assert!(form.is_valid);
        assert!(!form.has_all_inputs());
        assert_eq!(form.timezone, shared::DEFAULT_TIMEZONE);
    }

    #[test]
    fn typing_garbage_flags_the_field() {
        let mut form = CalculatorFormState::new();
        form.set_field(FormField::RequiredAmount, "abc".to_string(), &rules());
        assert!(form.required_error.is_some());
        assert!(!form.is_valid);
    }

    #[test]
    fn empty_fields_are_not_flagged_while_typing() {
        let mut form = CalculatorFormState::new();
        form.set_field(FormField::RequiredAmount, "1000".to_string(), &rules());
        // The other fields are still empty but the form stays valid.
        assert!(form.is_valid);
        assert!(form.current_error.is_none());
        assert!(form.rate_error.is_none());
    }

    #[test]
    fn submit_validation_flags_missing_fields() {
        let mut form = CalculatorFormState::new();
        form.validate_all(&rules());
        assert!(form.required_error.is_some());
        assert!(form.current_error.is_some());
        assert!(form.rate_error.is_some());
        assert!(!form.is_valid);
    }

    #[test]
    fn cross_field_error_lands_on_current_and_clears() {
        let mut form = CalculatorFormState::new();
        form.set_field(FormField::RequiredAmount, "1000".to_string(), &rules());
        form.set_field(FormField::CurrentAmount, "1500".to_string(), &rules());
        assert!(form.current_error.is_some());
        assert!(form.required_error.is_none());

        // Raising the required amount clears the error on the current field.
        form.set_field(FormField::RequiredAmount, "2000".to_string(), &rules());
        assert!(form.current_error.is_none());
        assert!(form.is_valid);
    }

    #[test]
    fn clear_restores_defaults() {
        let mut form = CalculatorFormState::new();
        form.set_field(FormField::RequiredAmount, "abc".to_string(), &rules());
        form.timezone = "Asia/Tokyo".to_string();
        form.clear();
        assert!(form.required_amount.is_empty());
        assert!(form.required_error.is_none());
        assert!(form.is_valid);
        assert_eq!(form.timezone, shared::DEFAULT_TIMEZONE);
    }

    #[test]
    fn snapshot_round_trip_preserves_fields() {
        let mut form = CalculatorFormState::new();
        form.set_field(FormField::RequiredAmount, "1,000,000".to_string(), &rules());
        form.set_field(FormField::CurrentAmount, "250,000".to_string(), &rules());
        form.set_field(FormField::RatePerHour, "12,500".to_string(), &rules());
        form.timezone = "Europe/Berlin".to_string();

        let snapshot = form.to_snapshot(true);
        assert!(snapshot.dark_mode);

        let restored = CalculatorFormState::from_snapshot(&snapshot);
        assert_eq!(restored.required_amount, "1,000,000");
        assert_eq!(restored.current_amount, "250,000");
        assert_eq!(restored.rate_per_hour, "12,500");
        assert_eq!(restored.timezone, "Europe/Berlin");
    }
}
