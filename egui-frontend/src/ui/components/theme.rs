//! # Theme Configuration
//!
//! Centralized color configuration for the planner. All rendering pulls
//! colors from these constants so the light and dark palettes stay
//! consistent across components.

use eframe::egui;
use eframe::egui::Color32;

/// One complete color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Whether this palette builds on egui's dark visuals
    pub dark: bool,
    /// Window background
    pub background: Color32,
    /// Card and form container fill
    pub card_background: Color32,
    /// Card outline
    pub card_border: Color32,
    /// Headings
    pub heading: Color32,
    /// Main body text
    pub text_primary: Color32,
    /// De-emphasized text (hints, captions)
    pub text_secondary: Color32,
    /// Primary accent (buttons, highlighted values)
    pub accent: Color32,
    /// Validation and calculation errors
    pub error: Color32,
    /// Non-fatal warnings (timezone fallback)
    pub warning: Color32,
    /// Success banners and confirmations
    pub success: Color32,
}

/// Light palette, the default.
pub const LIGHT_THEME: Theme = Theme {
    dark: false,
    background: Color32::from_rgb(240, 244, 255),
    card_background: Color32::WHITE,
    card_border: Color32::from_rgb(220, 224, 235),
    heading: Color32::from_rgb(45, 55, 72),
    text_primary: Color32::from_rgb(60, 60, 60),
    text_secondary: Color32::from_rgb(113, 128, 150),
    accent: Color32::from_rgb(59, 130, 246),
    error: Color32::from_rgb(220, 50, 50),
    warning: Color32::from_rgb(217, 119, 6),
    success: Color32::from_rgb(22, 163, 74),
};

/// Dark palette.
pub const DARK_THEME: Theme = Theme {
    dark: true,
    background: Color32::from_rgb(17, 24, 39),
    card_background: Color32::from_rgb(31, 41, 55),
    card_border: Color32::from_rgb(55, 65, 81),
    heading: Color32::from_rgb(229, 231, 235),
    text_primary: Color32::from_rgb(209, 213, 219),
    text_secondary: Color32::from_rgb(156, 163, 175),
    accent: Color32::from_rgb(96, 165, 250),
    error: Color32::from_rgb(248, 113, 113),
    warning: Color32::from_rgb(251, 191, 36),
    success: Color32::from_rgb(74, 222, 128),
};

impl Theme {
    /// Palette for the given mode.
    pub fn current(dark_mode: bool) -> &'static Theme {
        if dark_mode {
            &DARK_THEME
        } else {
            &LIGHT_THEME
        }
    }

    /// Install this palette's base visuals on the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.background;
        ctx.set_visuals(visuals);
    }
}
