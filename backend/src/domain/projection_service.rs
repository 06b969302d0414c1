//! Completion-time projection logic.
//!
//! This module contains the core calculation for the planner: given a
//! required experience total, the experience accumulated so far, and a
//! constant per-hour accrual rate, it projects the instant at which the
//! goal completes and formats that instant in a user-selected time zone.
//!
//! ## Key Responsibilities
//!
//! - **Projection**: remaining amount, hours needed, and the completion instant
//! - **Duration Breakdown**: days / hours / minutes decomposition for display
//! - **Timezone Display**: projecting the completion instant into an IANA zone
//! - **Error Taxonomy**: domain errors returned as data, never thrown
//!
//! ## Business Rules
//!
//! - The completion instant is computed in absolute (UTC) time; the selected
//!   zone changes only how the instant is displayed
//! - A goal that is already met reports `AlreadyComplete` with zeroed fields
//! - A non-positive rate reports `InvalidRate` and keeps the remaining amount
//! - An unrecognized zone is non-fatal: the timestamp falls back to the
//!   system local zone and the result carries `UnknownTimezone`

use chrono::{DateTime, Duration, Local, Utc};
use chrono_tz::Tz;
use log::info;

use crate::domain::commands::projection::ProjectCompletionCommand;
use crate::domain::formatting::TIMESTAMP_FORMAT;
use shared::{CalculationError, UpgradeCalculation};

/// Service computing completion-time projections.
///
/// Stateless; every projection is independent. The current instant is a
/// parameter so results are reproducible in tests.
#[derive(Clone)]
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Project the completion time using the system clock.
    pub fn project_completion_now(&self, command: ProjectCompletionCommand) -> UpgradeCalculation {
        self.project_completion(command, Utc::now())
    }

    /// Project the completion time for a fixed "now" instant.
    ///
    /// Validation of the remaining amount and the rate happens here as well
    /// as in the validation service; the engine does not trust its caller.
    pub fn project_completion(
        &self,
        command: ProjectCompletionCommand,
        now: DateTime<Utc>,
    ) -> UpgradeCalculation {
        info!(
            "Projecting completion: required={}, current={}, rate={}/h, tz={}",
            command.required_amount, command.current_amount, command.rate_per_hour, command.timezone
        );

        let remaining_amount = command.required_amount - command.current_amount;

        if remaining_amount <= 0.0 {
            return UpgradeCalculation {
                completion_time: String::new(),
                remaining_amount: 0.0,
                hours_needed: 0.0,
                days_needed: 0,
                hours_remainder: 0,
                minutes_remainder: 0,
                timezone: command.timezone,
                error: Some(CalculationError::AlreadyComplete),
            };
        }

        if command.rate_per_hour <= 0.0 {
            return UpgradeCalculation {
                completion_time: String::new(),
                remaining_amount,
                hours_needed: 0.0,
                days_needed: 0,
                hours_remainder: 0,
                minutes_remainder: 0,
                timezone: command.timezone,
                error: Some(CalculationError::InvalidRate),
            };
        }

        let hours_needed = remaining_amount / command.rate_per_hour;

        // Absolute completion instant; the zone below is display-only.
        let completion_utc = Duration::try_milliseconds((hours_needed * 3_600_000.0).round() as i64)
            .and_then(|needed| now.checked_add_signed(needed));

        let mut error = None;
        let completion_time = match completion_utc {
            Some(instant) => match command.timezone.parse::<Tz>() {
                Ok(tz) => instant.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string(),
                Err(_) => {
                    error = Some(CalculationError::UnknownTimezone);
                    instant.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
                }
            },
            // Projections past the calendar range have no meaningful timestamp.
            None => String::new(),
        };

        let days_needed = (hours_needed / 24.0).floor() as i64;
        let hours_remainder = (hours_needed % 24.0).floor() as i64;
        let minutes_remainder = (trim_division_noise(hours_needed.fract()) * 60.0).floor() as i64;

        UpgradeCalculation {
            completion_time,
            remaining_amount,
            hours_needed,
            days_needed,
            hours_remainder,
            minutes_remainder,
            timezone: command.timezone,
            error,
        }
    }
}

/// Repeating-decimal rates land the fractional hour a hair above the true
/// value (1/3 h divides to 0.33333333333333570), which would flip the floored
/// minute count upward. Truncate past ten decimal places before flooring.
fn trim_division_noise(fraction: f64) -> f64 {
    (fraction * 1e10).floor() / 1e10
}
