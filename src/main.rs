mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PlancoApp;
use config::AppConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional first argument: path to a JSON config file.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::resolve_or_default(config_path.as_deref());
    log::info!(
        "Source file {} (separator {:?})",
        config.file_path.display(),
        config.separator
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Plan Comptable – Explorateur",
        options,
        Box::new(|_cc| Ok(Box::new(PlancoApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
