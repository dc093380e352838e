// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;

use crate::config::SOFT_SIZE_LIMIT_MB;
use crate::report::{ReportKind, UploadedReport};
use crate::state::AppState;
use crate::ui::format::fmt_size_mb;

pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui.button("📂 Choose Report…").clicked() {
            pick_report(ui.ctx(), state);
        }
        if state.report.is_some() && ui.button("✖ Clear").clicked() {
            state.clear_report();
        }
    });

    // Metadata only; the byte buffer stays put
    let Some((kind, file_name, size_mb, oversized)) = state
        .report
        .as_ref()
        .map(|r| (r.kind, r.file_name.clone(), r.size_mb(), r.oversized()))
    else {
        ui.add_space(8.0);
        ui.label("Please upload a PDF or image of your health report to begin.");
        return;
    };

    ui.add_space(8.0);
    ui.heading("Uploaded file");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        // Left column - preview
        ui.group(|ui| {
            ui.set_min_width(200.0);
            match (kind, &state.preview) {
                (ReportKind::Image, Some(texture)) => {
                    ui.add(egui::Image::from_texture(texture).max_width(220.0));
                }
                (ReportKind::Image, None) => {
                    ui.label("Could not preview image");
                }
                (ReportKind::Pdf, _) => {
                    ui.label("PDF uploaded – preview not available");
                }
            }
        });

        // Right column - details
        ui.vertical(|ui| {
            ui.label(format!("File: {file_name}"));
            ui.label(format!("Size: {}", fmt_size_mb(size_mb)));
            if oversized {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 140, 0),
                    format!(
                        "Larger than the ~{SOFT_SIZE_LIMIT_MB:.0} MB backend limit; the upload may be rejected"
                    ),
                );
            }
        });
    });

    ui.add_space(12.0);

    if state.is_running() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Sending file to AI backend... (may take 10–40 seconds)");
        });
    } else if ui
        .add_sized(
            [ui.available_width(), 32.0],
            egui::Button::new(egui::RichText::new("Analyze Report →").strong()),
        )
        .clicked()
    {
        state.start_analysis();
    }
}

fn pick_report(ctx: &egui::Context, state: &mut AppState) {
    let file_dialog = FileDialog::new()
        .add_filter("Health reports", &["pdf", "png", "jpg", "jpeg"])
        .set_title("Open Health Report");

    if let Some(path) = file_dialog.pick_file() {
        match UploadedReport::load(&path) {
            Ok(report) => state.set_report(ctx, report),
            Err(e) => state.error_message = Some(e.to_string()),
        }
    }
}
