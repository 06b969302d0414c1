use eframe::egui;
use log::{error, info};

mod app;
mod ui;

use app::PlannerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Level-Up Planner egui application");

    // Window sized for a single-column form plus the result card
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 780.0])
            .with_min_inner_size([460.0, 600.0])
            .with_title("Level-Up Planner")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Level-Up Planner",
        options,
        Box::new(|cc| {
            // Enable persistence for window state
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match PlannerApp::new() {
                Ok(app) => {
                    info!("Successfully initialized planner app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
