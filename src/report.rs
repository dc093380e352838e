// src/report.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use eframe::egui;

use crate::config::{ACCEPTED_EXTENSIONS, SOFT_SIZE_LIMIT_MB};

const PREVIEW_MAX_EDGE: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Pdf,
    Image,
}

impl ReportKind {
    /// Classify by extension; `None` means the file is not accepted and must
    /// be rejected before any network call.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
            return None;
        }
        match ext.as_str() {
            "pdf" => Some(ReportKind::Pdf),
            _ => Some(ReportKind::Image),
        }
    }
}

/// An uploaded report held in memory until the analysis call is issued.
#[derive(Debug, Clone)]
pub struct UploadedReport {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: ReportKind,
    pub bytes: Vec<u8>,
}

impl UploadedReport {
    pub fn load(path: &Path) -> Result<Self> {
        let kind = ReportKind::from_path(path).ok_or_else(|| {
            anyhow!(
                "Unsupported file type: {} (expected .pdf, .png, .jpg or .jpeg)",
                path.display()
            )
        })?;
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            kind,
            bytes,
        })
    }

    pub fn size_mb(&self) -> f64 {
        self.bytes.len() as f64 / (1024.0 * 1024.0)
    }

    pub fn oversized(&self) -> bool {
        self.size_mb() > SOFT_SIZE_LIMIT_MB
    }

    /// Best-effort pixel preview for image uploads. A decode failure is not
    /// an error; the UI falls back to a notice.
    pub fn decode_preview(&self) -> Option<egui::ColorImage> {
        if self.kind != ReportKind::Image {
            return None;
        }
        let decoded = match image::load_from_memory(&self.bytes) {
            Ok(img) => img,
            Err(e) => {
                tracing::warn!("report: could not decode preview for {}: {e}", self.file_name);
                return None;
            }
        };
        let thumb = decoded.thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE);
        let rgba = thumb.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Some(egui::ColorImage::from_rgba_unmultiplied(
            size,
            rgba.as_flat_samples().as_slice(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accepted_extensions_classify() {
        assert_eq!(ReportKind::from_path(Path::new("a.pdf")), Some(ReportKind::Pdf));
        assert_eq!(ReportKind::from_path(Path::new("a.PDF")), Some(ReportKind::Pdf));
        assert_eq!(ReportKind::from_path(Path::new("a.png")), Some(ReportKind::Image));
        assert_eq!(ReportKind::from_path(Path::new("a.jpg")), Some(ReportKind::Image));
        assert_eq!(ReportKind::from_path(Path::new("a.JPEG")), Some(ReportKind::Image));
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert_eq!(ReportKind::from_path(Path::new("a.txt")), None);
        assert_eq!(ReportKind::from_path(Path::new("a.docx")), None);
        assert_eq!(ReportKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn load_rejects_unsupported_before_reading() {
        // Path does not exist; the extension check must fail first.
        let err = UploadedReport::load(Path::new("/nonexistent/report.txt")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }

    #[test]
    fn load_reads_accepted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blood_panel.pdf");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"%PDF-1.4 fake").unwrap();

        let report = UploadedReport::load(&path).unwrap();
        assert_eq!(report.file_name, "blood_panel.pdf");
        assert_eq!(report.kind, ReportKind::Pdf);
        assert_eq!(report.bytes, b"%PDF-1.4 fake");
        assert!(!report.oversized());
    }

    #[test]
    fn pdf_has_no_preview() {
        let report = UploadedReport {
            path: PathBuf::from("a.pdf"),
            file_name: "a.pdf".to_string(),
            kind: ReportKind::Pdf,
            bytes: vec![0; 16],
        };
        assert!(report.decode_preview().is_none());
    }

    #[test]
    fn undecodable_image_degrades_to_no_preview() {
        let report = UploadedReport {
            path: PathBuf::from("a.png"),
            file_name: "a.png".to_string(),
            kind: ReportKind::Image,
            bytes: vec![1, 2, 3, 4],
        };
        assert!(report.decode_preview().is_none());
    }

    #[test]
    fn size_is_reported_in_megabytes() {
        let report = UploadedReport {
            path: PathBuf::from("a.png"),
            file_name: "a.png".to_string(),
            kind: ReportKind::Image,
            bytes: vec![0; 2 * 1024 * 1024],
        };
        assert!((report.size_mb() - 2.0).abs() < 1e-9);
    }
}
