// Step Tracker Application
// Main entry point

use step_tracker::models::settings::ScreenConfig;
use step_tracker::services::settings::ConfigService;
use step_tracker::ui_egui::StepTrackerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Step Tracker");

    let config_service = ConfigService::with_default_path();
    if let Err(err) = config_service.ensure_exists() {
        log::warn!("Could not write default config: {err:?}");
    }
    let config = config_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Steps tracking")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([
                ScreenConfig::MIN_WINDOW_WIDTH,
                ScreenConfig::MIN_WINDOW_HEIGHT,
            ]),
        ..Default::default()
    };

    eframe::run_native(
        "Step Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(StepTrackerApp::new(cc, config)))),
    )
}
