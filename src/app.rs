// src/app.rs
use std::time::Duration;

use eframe::egui;

use crate::backend::{self, BackendError};
use crate::config::BackendConfig;
use crate::state::{AnalysisPhase, AppState, HealthState};
use crate::ui;

pub struct MedLensApp {
    state: AppState,
}

impl MedLensApp {
    /// Runs the readiness probe up front; the probe gates the first render,
    /// so an unreachable backend never shows the upload widget at all.
    pub fn new() -> Self {
        let config = BackendConfig::from_env();
        let health = backend::check_health(&config);
        Self {
            state: AppState::new(config, health),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let can_clear = self.state.report.is_some();
                if ui.add_enabled(can_clear, egui::Button::new("Clear Report")).clicked() {
                    self.state.clear_report();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    fn show_main(&mut self, ui: &mut egui::Ui) {
        ui.heading("Health Report Analyzer");
        ui.label("Upload your lab report / blood test PDF or photo → get AI-powered insights, health score & recommendations");
        ui.add_space(8.0);

        if !self.state.offers_upload() {
            // Hard stop: no upload, no retry.
            ui.group(|ui| {
                ui.colored_label(
                    egui::Color32::RED,
                    "⚠ Backend service is not responding right now. Please try again in a few minutes.",
                );
            });
            return;
        }

        if self.state.health == (HealthState::Ready { models_loaded: false }) {
            ui.colored_label(
                egui::Color32::from_rgb(255, 140, 0),
                "Backend models are loading or not ready yet. Analysis may be limited.",
            );
            ui.add_space(8.0);
        }

        ui::upload::show_upload_view(ui, &mut self.state);
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);

        match &self.state.phase {
            AnalysisPhase::Done(done) => ui::results::show_results_view(ui, done),
            AnalysisPhase::Failed(err) => show_failure(ui, err),
            AnalysisPhase::Idle | AnalysisPhase::Running => {}
        }
    }
}

fn show_failure(ui: &mut egui::Ui, err: &BackendError) {
    ui.colored_label(egui::Color32::RED, format!("⚠ {err}"));
    if let BackendError::UnexpectedStatus { body, .. } = err {
        if !body.is_empty() {
            ui.code(body);
        }
    }
}

impl eframe::App for MedLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_analysis();
        if self.state.is_running() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui::sidebar::show_sidebar(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    self.show_main(ui);
                });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
