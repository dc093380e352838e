// src/ui/sidebar.rs
use eframe::egui;

use crate::state::{AppState, HealthState};

pub fn show_sidebar(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("🩺 MedLens");
    ui.label("Upload your health report (PDF or image)");
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.label("Supported formats:");
        ui.label("• PDF");
        ui.label("• PNG / JPG / JPEG");
        ui.small("Text extraction + AI analysis");
    });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    ui.label("Backend status:");
    match state.health {
        HealthState::Ready { models_loaded: true } => {
            ui.colored_label(egui::Color32::GREEN, "● Ready");
        }
        HealthState::Ready { models_loaded: false } => {
            ui.colored_label(egui::Color32::GREEN, "● Ready");
            ui.colored_label(
                egui::Color32::from_rgb(255, 140, 0),
                "Models still loading",
            );
        }
        HealthState::Unreachable => {
            ui.colored_label(egui::Color32::RED, "● Unreachable");
        }
        HealthState::Unknown => {
            ui.label("● Unknown");
        }
    }

    ui.add_space(8.0);
    ui.small(format!("Service: {}", state.config.analyze_url));
}
