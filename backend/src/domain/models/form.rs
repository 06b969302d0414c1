use thiserror::Error;

/// The three numeric fields of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    RequiredAmount,
    CurrentAmount,
    RatePerHour,
}

impl FormField {
    /// Label used in user-facing validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::RequiredAmount => "Required experience",
            FormField::CurrentAmount => "Current experience",
            FormField::RatePerHour => "Experience per hour",
        }
    }
}

/// A single field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a value")]
    Missing,
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Value cannot be negative")]
    Negative,
    #[error("Experience per hour cannot be 0")]
    ZeroRate,
    #[error("Current experience cannot meet or exceed the required experience")]
    CurrentExceedsRequired,
}

/// Per-field validation outcome for the whole form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValidation {
    pub required_amount: Option<FieldError>,
    pub current_amount: Option<FieldError>,
    pub rate_per_hour: Option<FieldError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.required_amount.is_none()
            && self.current_amount.is_none()
            && self.rate_per_hour.is_none()
    }
}
