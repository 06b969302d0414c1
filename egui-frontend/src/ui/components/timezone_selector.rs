//! # Timezone Selector
//!
//! Grouped combo box over the static timezone catalog with a live filter
//! box. Matching is delegated to the catalog's search, so the filter sees
//! labels, IANA ids, and offset strings alike.

use eframe::egui;

use crate::ui::app_state::PlannerApp;
use crate::ui::components::theme::Theme;
use shared::RegionGroup;

impl PlannerApp {
    pub fn render_timezone_selector(&mut self, ui: &mut egui::Ui) {
        let theme = Theme::current(self.ui_state.dark_mode);

        ui.label(
            egui::RichText::new("🌍 Timezone")
                .font(egui::FontId::proportional(14.0))
                .color(theme.text_primary),
        );
        ui.add_space(3.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.form.timezone_filter)
                .hint_text("Filter by name, id, or offset")
                .desired_width(f32::INFINITY)
                .font(egui::FontId::proportional(13.0)),
        );
        ui.add_space(4.0);

        let selected = self.backend.timezone_catalog.lookup(&self.form.timezone);
        let selected_text = match selected {
            Some(entry) => format!("{}  {}", entry.label, entry.utc_offset),
            None => self.form.timezone.clone(),
        };

        let mut selection_changed = false;

        egui::ComboBox::from_id_source("timezone_selector")
            .width(ui.available_width())
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                let matches = self.backend.timezone_catalog.search(&self.form.timezone_filter);
                if matches.is_empty() {
                    ui.label(
                        egui::RichText::new("No matching timezones")
                            .font(egui::FontId::proportional(12.0))
                            .color(theme.text_secondary),
                    );
                    return;
                }

                for group in RegionGroup::ALL {
                    let members: Vec<_> =
                        matches.iter().filter(|entry| entry.group == group).collect();
                    if members.is_empty() {
                        continue;
                    }

                    ui.label(
                        egui::RichText::new(group.label())
                            .font(egui::FontId::proportional(12.0))
                            .strong()
                            .color(theme.accent),
                    );
                    for entry in members {
                        let text = format!("{}  {}", entry.label, entry.utc_offset);
                        if ui
                            .selectable_value(&mut self.form.timezone, entry.id.to_string(), text)
                            .clicked()
                        {
                            selection_changed = true;
                        }
                    }
                    ui.add_space(4.0);
                }
            });

        if let Some(entry) = selected {
            ui.add_space(2.0);
            ui.label(
                egui::RichText::new(format!("Selected: {} ({})", entry.label, entry.utc_offset))
                    .font(egui::FontId::proportional(11.0))
                    .color(theme.text_secondary),
            );
        }

        if selection_changed {
            self.form.timezone_filter.clear();
            self.persist_snapshot();
        }
    }
}
