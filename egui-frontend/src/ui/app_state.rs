//! # App State Module
//!
//! The central application state for the planner and the actions the UI
//! triggers (calculate, reset, theme toggle). Rendering lives in
//! [`crate::ui::components`]; everything here is plain logic so it can be
//! tested against a temp-dir backend.

use anyhow::Result;
use log::{info, warn};

use backend::domain::commands::projection::ProjectCompletionCommand;
use backend::domain::formatting::parse_amount;
use backend::Backend;
use backend::FormSnapshotStorage;
use shared::{CalculationError, UpgradeCalculation};

use crate::ui::state::{CalculatorFormState, UiState};

/// Main application struct for the egui planner.
pub struct PlannerApp {
    pub backend: Backend,

    // Form and UI state
    pub form: CalculatorFormState,
    pub ui_state: UiState,

    // Last projection result, if any
    pub result: Option<UpgradeCalculation>,
}

impl PlannerApp {
    /// Initialize the app with the platform backend, restoring the last
    /// form snapshot when one exists.
    pub fn new() -> Result<Self> {
        let backend = Backend::new()?;
        Ok(Self::with_backend(backend))
    }

    /// Initialize against an explicit backend (tests pass a temp-dir one).
    pub fn with_backend(backend: Backend) -> Self {
        let mut form = CalculatorFormState::new();
        let mut ui_state = UiState::new();

        match backend.form_snapshot_store.load_snapshot() {
            Ok(Some(snapshot)) => {
                info!("Restoring saved form values");
                form = CalculatorFormState::from_snapshot(&snapshot);
                ui_state.dark_mode = snapshot.dark_mode;
            }
            Ok(None) => {}
            Err(e) => warn!("Could not load saved form values: {}", e),
        }

        Self {
            backend,
            form,
            ui_state,
            result: None,
        }
    }

    /// Run the projection for the current form values.
    pub fn calculate(&mut self) {
        self.ui_state.clear_messages();
        self.form.validate_all(&self.backend.validation_service);

        if !self.form.is_valid {
            self.ui_state.error_message = Some("Please check the highlighted fields".to_string());
            return;
        }

        let command = ProjectCompletionCommand {
            required_amount: parse_amount(&self.form.required_amount).unwrap_or(0.0),
            current_amount: parse_amount(&self.form.current_amount).unwrap_or(0.0),
            rate_per_hour: parse_amount(&self.form.rate_per_hour).unwrap_or(0.0),
            timezone: self.form.timezone.clone(),
        };

        let result = self.backend.projection_service.project_completion_now(command);

        match result.error {
            Some(CalculationError::UnknownTimezone) | None => {
                self.ui_state.success_message = Some("Calculation complete".to_string());
            }
            Some(error) => {
                self.ui_state.error_message = Some(error.to_string());
            }
        }

        self.result = Some(result);
        self.persist_snapshot();
    }

    /// Clear the form, the result, and the persisted snapshot.
    pub fn reset_form(&mut self) {
        self.form.clear();
        self.result = None;
        self.ui_state.clear_messages();

        if let Err(e) = self.backend.form_snapshot_store.clear_snapshot() {
            warn!("Could not clear saved form values: {}", e);
        }
        self.ui_state.success_message = Some("Form reset".to_string());
    }

    /// Switch between the light and dark themes.
    pub fn toggle_theme(&mut self) {
        self.ui_state.dark_mode = !self.ui_state.dark_mode;
        self.persist_snapshot();
    }

    /// Persist the current form values; failures are logged, not surfaced.
    pub fn persist_snapshot(&self) {
        let snapshot = self.form.to_snapshot(self.ui_state.dark_mode);
        if let Err(e) = self.backend.form_snapshot_store.save_snapshot(&snapshot) {
            warn!("Could not save form values: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::domain::models::form::FormField;
    use tempfile::tempdir;

    fn test_app() -> (PlannerApp, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp dir");
        let app = PlannerApp::with_backend(Backend::with_data_dir(dir.path()));
        (app, dir)
    }

    fn fill_form(app: &mut PlannerApp, required: &str, current: &str, rate: &str) {
        let rules = app.backend.validation_service.clone();
        app.form.set_field(FormField::RequiredAmount, required.to_string(), &rules);
        app.form.set_field(FormField::CurrentAmount, current.to_string(), &rules);
        app.form.set_field(FormField::RatePerHour, rate.to_string(), &rules);
    }

    #[test]
    fn calculate_produces_a_result_and_persists() {
        let (mut app, _dir) = test_app();
        fill_form(&mut app, "1,000", "200", "100");

        app.calculate();

        let result = app.result.as_ref().expect("Result should be set");
        assert_eq!(result.error, None);
        assert_eq!(result.remaining_amount, 800.0);
        assert_eq!(result.hours_needed, 8.0);
        assert!(app.ui_state.success_message.is_some());

        let snapshot = app
            .backend
            .form_snapshot_store
            .load_snapshot()
            .expect("Load should not fail")
            .expect("Snapshot should exist after calculating");
        assert_eq!(snapshot.required_amount, "1,000");
    }

    #[test]
    fn calculate_with_invalid_input_sets_error_and_no_result() {
        let (mut app, _dir) = test_app();
        fill_form(&mut app, "abc", "200", "100");

        app.calculate();

        assert!(app.result.is_none());
        assert!(app.ui_state.error_message.is_some());
    }

    #[test]
    fn domain_errors_surface_as_messages() {
        let (mut app, _dir) = test_app();
        fill_form(&mut app, "1,000", "0", "0");

        // Zero rate is caught by validation before the engine runs.
        app.calculate();
        assert!(app.result.is_none());
        assert!(app.ui_state.error_message.is_some());
    }

    #[test]
    fn reset_clears_everything() {
        let (mut app, _dir) = test_app();
        fill_form(&mut app, "1,000", "200", "100");
        app.calculate();
        assert!(app.result.is_some());

        app.reset_form();

        assert!(app.result.is_none());
        assert!(app.form.required_amount.is_empty());
        assert_eq!(
            app.backend
                .form_snapshot_store
                .load_snapshot()
                .expect("Load should not fail"),
            None
        );
    }

    #[test]
    fn startup_restores_persisted_form() {
        let dir = tempdir().expect("Failed to create temp dir");

        {
            let mut app = PlannerApp::with_backend(Backend::with_data_dir(dir.path()));
            fill_form(&mut app, "5,000", "1,000", "250");
            app.ui_state.dark_mode = true;
            app.persist_snapshot();
        }

        let restored = PlannerApp::with_backend(Backend::with_data_dir(dir.path()));
        assert_eq!(restored.form.required_amount, "5,000");
        assert_eq!(restored.form.rate_per_hour, "250");
        assert!(restored.ui_state.dark_mode);
    }
}
