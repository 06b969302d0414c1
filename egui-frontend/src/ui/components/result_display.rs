//! # Result Display
//!
//! Card rendering for a finished projection: the completion time in the
//! chosen zone, the duration and its day/hour/minute breakdown, the
//! remaining amount, and a copy-to-clipboard action. Domain errors render
//! as a compact error card instead.

use eframe::egui;

use backend::domain::formatting::{abbreviate_amount, format_amount, format_duration};
use shared::{CalculationError, UpgradeCalculation};

use crate::ui::app_state::PlannerApp;
use crate::ui::components::theme::Theme;

impl PlannerApp {
    pub fn render_result_display(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.result.clone() else {
            return;
        };
        let theme = Theme::current(self.ui_state.dark_mode);

        ui.add_space(14.0);

        match result.error {
            Some(CalculationError::AlreadyComplete) | Some(CalculationError::InvalidRate) => {
                self.render_error_card(ui, &result);
            }
            _ => {
                egui::Frame::none()
                    .fill(theme.card_background)
                    .stroke(egui::Stroke::new(1.0, theme.accent))
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::same(20.0))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        self.render_result_body(ui, &result);
                    });
            }
        }
    }

    fn render_error_card(&mut self, ui: &mut egui::Ui, result: &UpgradeCalculation) {
        let theme = Theme::current(self.ui_state.dark_mode);
        let message = result
            .error
            .map(|error| error.to_string())
            .unwrap_or_default();

        egui::Frame::none()
            .fill(theme.card_background)
            .stroke(egui::Stroke::new(1.0, theme.error))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("⚠ Calculation error")
                            .font(egui::FontId::proportional(16.0))
                            .strong()
                            .color(theme.error),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(message)
                            .font(egui::FontId::proportional(13.0))
                            .color(theme.text_primary),
                    );
                });
            });
    }

    fn render_result_body(&mut self, ui: &mut egui::Ui, result: &UpgradeCalculation) {
        let theme = Theme::current(self.ui_state.dark_mode);

        let zone_label = self
            .backend
            .timezone_catalog
            .lookup(&result.timezone)
            .map(|entry| format!("{} ({})", entry.label, entry.utc_offset))
            .unwrap_or_else(|| result.timezone.clone());
        let duration_text = format_duration(
            result.days_needed,
            result.hours_remainder,
            result.minutes_remainder,
        );

        ui.label(
            egui::RichText::new("🎯 Projection result")
                .font(egui::FontId::proportional(17.0))
                .strong()
                .color(theme.accent),
        );
        ui.add_space(10.0);

        // Completion time
        ui.label(
            egui::RichText::new("Completion time")
                .font(egui::FontId::proportional(12.0))
                .color(theme.text_secondary),
        );
        ui.label(
            egui::RichText::new(&result.completion_time)
                .font(egui::FontId::proportional(24.0))
                .strong()
                .color(theme.accent),
        );
        ui.label(
            egui::RichText::new(&zone_label)
                .font(egui::FontId::proportional(12.0))
                .color(theme.text_secondary),
        );

        if result.error == Some(CalculationError::UnknownTimezone) {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(CalculationError::UnknownTimezone.to_string())
                    .font(egui::FontId::proportional(12.0))
                    .color(theme.warning),
            );
        }

        ui.add_space(12.0);

        // Duration and remaining amount side by side
        ui.columns(2, |columns| {
            columns[0].label(
                egui::RichText::new("Duration")
                    .font(egui::FontId::proportional(12.0))
                    .color(theme.text_secondary),
            );
            columns[0].label(
                egui::RichText::new(&duration_text)
                    .font(egui::FontId::proportional(16.0))
                    .strong()
                    .color(theme.success),
            );
            columns[0].label(
                egui::RichText::new(format!("≈ {} hours", format_amount(result.hours_needed, 1)))
                    .font(egui::FontId::proportional(11.0))
                    .color(theme.text_secondary),
            );

            columns[1].label(
                egui::RichText::new("Remaining experience")
                    .font(egui::FontId::proportional(12.0))
                    .color(theme.text_secondary),
            );
            columns[1].label(
                egui::RichText::new(format_amount(result.remaining_amount, 0))
                    .font(egui::FontId::proportional(16.0))
                    .strong()
                    .color(theme.heading),
            );
            if result.remaining_amount >= 1000.0 {
                columns[1].label(
                    egui::RichText::new(format!("≈ {}", abbreviate_amount(result.remaining_amount)))
                        .font(egui::FontId::proportional(11.0))
                        .color(theme.text_secondary),
                );
            }
        });

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        // Day / hour / minute breakdown
        ui.columns(3, |columns| {
            breakdown_cell(&mut columns[0], theme, result.days_needed, "days");
            breakdown_cell(&mut columns[1], theme, result.hours_remainder, "hours");
            breakdown_cell(&mut columns[2], theme, result.minutes_remainder, "minutes");
        });

        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            let copy = egui::Button::new(
                egui::RichText::new("📋 Copy result")
                    .font(egui::FontId::proportional(14.0))
                    .color(egui::Color32::WHITE),
            )
            .fill(theme.accent)
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(130.0, 34.0));

            if ui.add(copy).on_hover_text("Copy the result to the clipboard").clicked() {
                let text = format!(
                    "Completion time: {}\nDuration: {}\nRemaining experience: {}\nTimezone: {}",
                    result.completion_time,
                    duration_text,
                    format_amount(result.remaining_amount, 0),
                    zone_label,
                );
                ui.ctx().copy_text(text);
                self.ui_state.success_message = Some("Result copied to clipboard".to_string());
            }
        });
    }
}

fn breakdown_cell(ui: &mut egui::Ui, theme: &Theme, value: i64, unit: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(value.to_string())
                .font(egui::FontId::proportional(22.0))
                .strong()
                .color(theme.accent),
        );
        ui.label(
            egui::RichText::new(unit)
                .font(egui::FontId::proportional(11.0))
                .color(theme.text_secondary),
        );
    });
}
