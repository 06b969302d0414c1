//! # Calculator Form
//!
//! The input card: three labeled numeric fields with inline validation,
//! the timezone selector, and the Calculate / Reset buttons. Validation
//! runs on every change; field values persist as the user types.

use eframe::egui;

use crate::ui::app_state::PlannerApp;
use crate::ui::components::theme::Theme;

impl PlannerApp {
    pub fn render_calculator_form(&mut self, ui: &mut egui::Ui) {
        let theme = Theme::current(self.ui_state.dark_mode);

        egui::Frame::none()
            .fill(theme.card_background)
            .stroke(egui::Stroke::new(1.0, theme.card_border))
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                let mut changed = false;

                let error = self.form.required_error.clone();
                changed |= amount_field(
                    ui,
                    &theme,
                    "🏆 Required experience",
                    "Total experience needed for the level-up",
                    &mut self.form.required_amount,
                    error.as_deref(),
                );

                let error = self.form.current_error.clone();
                changed |= amount_field(
                    ui,
                    &theme,
                    "📈 Current experience",
                    "Experience you already have",
                    &mut self.form.current_amount,
                    error.as_deref(),
                );

                let error = self.form.rate_error.clone();
                changed |= amount_field(
                    ui,
                    &theme,
                    "⚡ Experience per hour",
                    "Experience gained per hour",
                    &mut self.form.rate_per_hour,
                    error.as_deref(),
                );

                if changed {
                    self.form.revalidate(&self.backend.validation_service);
                    self.persist_snapshot();
                }

                ui.add_space(6.0);
                self.render_timezone_selector(ui);
                ui.add_space(16.0);

                self.render_form_buttons(ui, &theme);
                self.render_messages(ui, &theme);
            });
    }

    fn render_form_buttons(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        ui.horizontal(|ui| {
            let can_calculate = self.form.is_valid && self.form.has_all_inputs();

            let calculate_color = if can_calculate {
                theme.accent
            } else {
                egui::Color32::from_rgb(160, 160, 160)
            };
            let calculate = egui::Button::new(
                egui::RichText::new("🧮 Calculate")
                    .font(egui::FontId::proportional(15.0))
                    .color(egui::Color32::WHITE),
            )
            .fill(calculate_color)
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(140.0, 38.0));

            let response = ui.add(calculate);
            if response.clicked() && can_calculate {
                self.calculate();
            }
            if !can_calculate && response.hovered() {
                response.on_hover_text("Fill in all fields and fix any errors first");
            }

            ui.add_space(8.0);

            let reset = egui::Button::new(
                egui::RichText::new("↺ Reset").font(egui::FontId::proportional(15.0)),
            )
            .stroke(egui::Stroke::new(1.0, theme.card_border))
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(100.0, 38.0));

            if ui.add(reset).clicked() {
                self.reset_form();
            }
        });
    }

    fn render_messages(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        if let Some(message) = self.ui_state.error_message.clone() {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("⚠ {}", message))
                    .font(egui::FontId::proportional(13.0))
                    .color(theme.error),
            );
        }
        if let Some(message) = self.ui_state.success_message.clone() {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(message)
                    .font(egui::FontId::proportional(13.0))
                    .color(theme.success),
            );
        }
    }
}

/// One labeled amount field with its hint and inline error. Returns true
/// when the value changed this frame.
fn amount_field(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    hint: &str,
    value: &mut String,
    error: Option<&str>,
) -> bool {
    ui.label(
        egui::RichText::new(label)
            .font(egui::FontId::proportional(14.0))
            .color(theme.text_primary),
    );
    ui.add_space(3.0);

    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY)
            .font(egui::FontId::proportional(15.0)),
    );

    if let Some(error) = error {
        ui.add_space(2.0);
        ui.label(
            egui::RichText::new(error)
                .font(egui::FontId::proportional(12.0))
                .color(theme.error),
        );
    }
    ui.add_space(10.0);

    response.changed()
}
