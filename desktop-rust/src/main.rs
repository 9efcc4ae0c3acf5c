mod app;
mod io;
mod model;

use app::DesktopApp;
use material_lookup_common::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .try_init();

    let config = AppConfig::load().unwrap_or_else(|err| {
        tracing::warn!("config load failed, using defaults: {}", err);
        AppConfig::default()
    });

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Consulta de Materiais",
        options,
        Box::new(|_cc| Box::new(DesktopApp::new(config))),
    )
}
