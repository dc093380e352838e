// src/ui/results.rs
use eframe::egui;

use crate::model::AnalysisResult;
use crate::state::CompletedAnalysis;
use crate::ui::format::{fmt_opt, fmt_scalar, fmt_score, fmt_value};

const HIGH_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);
const WARN_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 140, 0);

pub fn show_results_view(ui: &mut egui::Ui, done: &CompletedAnalysis) {
    let result = &done.result;

    ui.horizontal(|ui| {
        ui.colored_label(egui::Color32::GREEN, "✔ Analysis complete!");
        ui.small(format!("at {}", done.finished_at.format("%H:%M:%S")));
    });
    ui.add_space(8.0);

    show_health_summary(ui, result);
    ui.add_space(12.0);
    show_extracted_values(ui, result);
    ui.add_space(12.0);
    show_findings(ui, result);
    show_recommendations(ui, result);
    ui.add_space(12.0);

    egui::CollapsingHeader::new("Full JSON response (debug)")
        .default_open(false)
        .show(ui, |ui| {
            let pretty = serde_json::to_string_pretty(&result.raw)
                .unwrap_or_else(|_| result.raw.to_string());
            ui.code(pretty);
        });
}

fn show_health_summary(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.heading("Health Summary");
    ui.add_space(4.0);

    let health = &result.health_summary;
    let metrics = [
        ("Health Score", fmt_score(health.health_score)),
        ("Risk Level", fmt_opt(&health.risk_level).to_string()),
        ("Status", fmt_opt(&health.status).to_string()),
    ];

    let card_width = ui.available_width() / 3.0 - 8.0;
    ui.horizontal(|ui| {
        for (label, value) in metrics {
            ui.group(|ui| {
                ui.set_min_width(card_width);
                ui.vertical(|ui| {
                    ui.small(label);
                    ui.heading(value);
                });
            });
        }
    });

    if !health.risk_probabilities.is_empty() {
        ui.add_space(4.0);
        egui::CollapsingHeader::new("Risk probabilities")
            .default_open(false)
            .show(ui, |ui| {
                for (category, percent) in &health.risk_probabilities {
                    ui.add(egui::ProgressBar::new((percent / 100.0).clamp(0.0, 1.0) as f32));
                    ui.small(format!("{category}: {percent}%"));
                }
            });
    }
}

fn show_extracted_values(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.heading("Extracted Test Values");
    ui.add_space(4.0);

    if result.extracted_values.is_empty() {
        ui.label("No numeric values could be extracted automatically.");
        return;
    }

    egui::Grid::new("extracted_values_grid")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Test");
            ui.strong("Value");
            ui.end_row();
            for (test, value) in &result.extracted_values {
                ui.label(test);
                ui.label(fmt_value(*value));
                ui.end_row();
            }
        });
}

fn show_findings(ui: &mut egui::Ui, result: &AnalysisResult) {
    let detailed = &result.detailed_analysis;

    if detailed.abnormal_tests_count > 0 {
        ui.heading("Abnormal Findings");
        ui.add_space(4.0);
        for item in &detailed.abnormal_tests {
            let color = if item.is_high() { HIGH_COLOR } else { WARN_COLOR };
            ui.horizontal(|ui| {
                ui.strong(fmt_opt(&item.test));
                ui.label(format!(
                    "{} ({})",
                    fmt_scalar(&item.value),
                    fmt_opt(&item.normal_range)
                ));
                ui.label("→");
                ui.colored_label(color, egui::RichText::new(fmt_opt(&item.status)).strong());
            });
        }
        ui.add_space(12.0);
    }

    if detailed.warnings_count > 0 {
        ui.heading("Important Warnings");
        ui.add_space(4.0);
        for warning in &detailed.warnings {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(
                    WARN_COLOR,
                    format!(
                        "⚠ {}: {} ({})",
                        fmt_opt(&warning.category),
                        fmt_opt(&warning.message),
                        fmt_opt(&warning.urgency)
                    ),
                );
            });
        }
        ui.add_space(12.0);
    }
}

fn show_recommendations(ui: &mut egui::Ui, result: &AnalysisResult) {
    if result.recommendations.is_empty() && result.next_steps.is_empty() {
        return;
    }

    ui.heading("Recommendations & Next Steps");
    ui.add_space(4.0);

    for rec in &result.recommendations {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong(format!("{} priority: {}", fmt_opt(&rec.priority), fmt_opt(&rec.action)));
            if let Some(details) = &rec.details {
                ui.label(details);
            }
        });
    }

    for step in result.next_steps.values() {
        ui.small(step);
    }
}
