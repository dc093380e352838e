// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod backend;
mod config;
mod model;
mod report;
mod state;
mod ui;

use app::MedLensApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("MedLens"),
        ..Default::default()
    };

    eframe::run_native(
        "MedLens",
        options,
        Box::new(|_cc| Box::new(MedLensApp::new())),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
