//! # Header Component
//!
//! Title row with the app name, a one-line tagline, and the theme toggle.

use eframe::egui;

use crate::ui::app_state::PlannerApp;
use crate::ui::components::theme::Theme;

impl PlannerApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let theme = Theme::current(self.ui_state.dark_mode);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🎮").font(egui::FontId::proportional(26.0)));
            ui.add_space(4.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Level-Up Planner")
                        .font(egui::FontId::proportional(22.0))
                        .strong()
                        .color(theme.heading),
                );
                ui.label(
                    egui::RichText::new("Projects when your experience goal completes, in any timezone")
                        .font(egui::FontId::proportional(12.0))
                        .color(theme.text_secondary),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (icon, hover) = if self.ui_state.dark_mode {
                    ("☀", "Switch to light mode")
                } else {
                    ("🌙", "Switch to dark mode")
                };
                let toggle = egui::Button::new(egui::RichText::new(icon).font(egui::FontId::proportional(18.0)))
                    .fill(theme.card_background)
                    .stroke(egui::Stroke::new(1.0, theme.card_border))
                    .rounding(egui::Rounding::same(8.0))
                    .min_size(egui::vec2(36.0, 36.0));
                if ui.add(toggle).on_hover_text(hover).clicked() {
                    self.toggle_theme();
                }
            });
        });
    }
}
