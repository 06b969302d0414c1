use serde::{Deserialize, Serialize};
use std::fmt;

/// Default timezone preselected for new users.
pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

/// Request payload for a completion-time projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Total experience required to reach the goal
    pub required_amount: f64,
    /// Experience accumulated so far
    pub current_amount: f64,
    /// Experience gained per hour, assumed constant
    pub rate_per_hour: f64,
    /// IANA timezone identifier used for displaying the completion time
    pub timezone: String,
}

/// Why a projection could not produce a completion time (or, for
/// `UnknownTimezone`, why it fell back to the local zone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationError {
    /// The current amount already meets or exceeds the required amount
    AlreadyComplete,
    /// The accrual rate is zero or negative
    InvalidRate,
    /// The timezone identifier was not recognized; the completion time
    /// was formatted in the system local zone instead
    UnknownTimezone,
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            CalculationError::AlreadyComplete => {
                "Current experience already meets or exceeds the required amount"
            }
            CalculationError::InvalidRate => "Experience per hour must be greater than 0",
            CalculationError::UnknownTimezone => {
                "Unrecognized timezone; completion time shown in the local zone"
            }
        };
        write!(f, "{}", message)
    }
}

/// Result of a completion-time projection.
///
/// All fields are plain data so the result can cross the REST boundary
/// unchanged. Domain errors ride on `error` rather than failing the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeCalculation {
    /// Completion time formatted as `YYYY-MM-DD HH:MM` in the requested
    /// zone (empty when `error` is `AlreadyComplete` or `InvalidRate`)
    pub completion_time: String,
    /// Experience still needed: required minus current
    pub remaining_amount: f64,
    /// Hours until completion at the given rate (unrounded)
    pub hours_needed: f64,
    /// Whole days in the duration breakdown
    pub days_needed: i64,
    /// Whole hours left over after the days, in [0, 24)
    pub hours_remainder: i64,
    /// Whole minutes left over after the hours, in [0, 60)
    pub minutes_remainder: i64,
    /// The timezone identifier the caller asked for
    pub timezone: String,
    /// Set when the projection could not complete normally
    pub error: Option<CalculationError>,
}

/// Coarse geographic bucket used to group timezone entries in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionGroup {
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Africa,
}

impl RegionGroup {
    /// Display order for grouped listings.
    pub const ALL: [RegionGroup; 6] = [
        RegionGroup::Asia,
        RegionGroup::Europe,
        RegionGroup::NorthAmerica,
        RegionGroup::SouthAmerica,
        RegionGroup::Oceania,
        RegionGroup::Africa,
    ];

    /// Human-readable group heading.
    pub fn label(&self) -> &'static str {
        match self {
            RegionGroup::Asia => "Asian timezones",
            RegionGroup::Europe => "European timezones",
            RegionGroup::NorthAmerica => "North American timezones",
            RegionGroup::SouthAmerica => "South American timezones",
            RegionGroup::Oceania => "Oceanian timezones",
            RegionGroup::Africa => "African timezones",
        }
    }
}

/// A selectable timezone as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneOption {
    /// IANA zone name, e.g. "Asia/Tokyo"
    pub id: String,
    /// Display label, e.g. "Japan Standard Time (Tokyo)"
    pub label: String,
    /// Geographic bucket for UI grouping
    pub group: RegionGroup,
    /// Offset label, e.g. "UTC+9" or "UTC+1/+2" for DST zones
    pub utc_offset: String,
}

/// One region's worth of timezone options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneGroup {
    pub group: RegionGroup,
    pub label: String,
    pub timezones: Vec<TimezoneOption>,
}

/// Response for the grouped timezone listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneListResponse {
    pub groups: Vec<TimezoneGroup>,
}

/// Last-entered form values, persisted so the form survives restarts.
///
/// Field values are kept as the raw strings the user typed (including
/// thousands separators); parsing happens on calculation, not storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub required_amount: String,
    pub current_amount: String,
    pub rate_per_hour: String,
    pub timezone: String,
    /// Whether the dark theme was active
    pub dark_mode: bool,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            required_amount: String::new(),
            current_amount: String::new(),
            rate_per_hour: String::new(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            dark_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_error_serializes_snake_case() {
        let json = serde_json::to_string(&CalculationError::AlreadyComplete).unwrap();
        assert_eq!(json, "\"already_complete\"");
    }

    #[test]
    fn form_snapshot_default_uses_default_timezone() {
        let snapshot = FormSnapshot::default();
        assert_eq!(snapshot.timezone, DEFAULT_TIMEZONE);
        assert!(!snapshot.dark_mode);
        assert!(snapshot.required_amount.is_empty());
    }

    #[test]
    fn upgrade_calculation_round_trips_through_json() {
        let calc = UpgradeCalculation {
            completion_time: "2026-08-07 20:00".to_string(),
            remaining_amount: 800.0,
            hours_needed: 8.0,
            days_needed: 0,
            hours_remainder: 8,
            minutes_remainder: 0,
            timezone: "Asia/Tokyo".to_string(),
            error: None,
        };
        let json = serde_json::to_string(&calc).unwrap();
        let back: UpgradeCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calc);
    }
}
