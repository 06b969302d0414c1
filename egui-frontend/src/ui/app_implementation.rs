//! # App Implementation
//!
//! The `eframe::App` frame loop: applies the active theme, then renders
//! the header, the form card, and the result card in a scrollable column.

use eframe::egui;

use crate::ui::app_state::PlannerApp;
use crate::ui::components::theme::Theme;

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = Theme::current(self.ui_state.dark_mode);
        theme.apply(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(theme.background)
                    .inner_margin(egui::Margin::same(18.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(14.0);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_calculator_form(ui);
                        self.render_result_display(ui);
                        ui.add_space(10.0);
                    });
            });
    }
}
