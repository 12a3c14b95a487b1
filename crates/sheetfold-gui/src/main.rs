//! Sheetfold desktop front end

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::ConsolidatorApp;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([700.0, 420.0])
            .with_min_inner_size([520.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sheetfold - Excel Consolidator",
        options,
        Box::new(|cc| Ok(Box::new(ConsolidatorApp::new(cc)))),
    )
}
