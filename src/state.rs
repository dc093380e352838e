// src/state.rs
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use chrono::{DateTime, Local};
use eframe::egui;

use crate::backend::{self, BackendError};
use crate::config::BackendConfig;
use crate::model::AnalysisResult;
use crate::report::UploadedReport;

/// Outcome of the startup readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Unknown,
    Unreachable,
    Ready { models_loaded: bool },
}

impl HealthState {
    pub fn is_ready(&self) -> bool {
        matches!(self, HealthState::Ready { .. })
    }
}

/// A finished analysis, stamped with completion time.
#[derive(Debug, Clone)]
pub struct CompletedAnalysis {
    pub result: AnalysisResult,
    pub finished_at: DateTime<Local>,
}

/// Phase of the single in-flight interaction. A failure never retains a
/// partial result, and nothing transitions out of `Failed` except a new
/// user action.
#[derive(Debug)]
pub enum AnalysisPhase {
    Idle,
    Running,
    Done(CompletedAnalysis),
    Failed(BackendError),
}

// Core application state
pub struct AppState {
    pub config: BackendConfig,
    pub health: HealthState,

    // Current upload; exists only until the next pick or clear
    pub report: Option<UploadedReport>,
    pub preview: Option<egui::TextureHandle>,

    pub phase: AnalysisPhase,
    pending: Option<Receiver<Result<AnalysisResult, BackendError>>>,

    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(config: BackendConfig, health: HealthState) -> Self {
        Self {
            config,
            health,
            report: None,
            preview: None,
            phase: AnalysisPhase::Idle,
            pending: None,
            error_message: None,
        }
    }

    /// The upload widget is only offered once the backend probe succeeded.
    pub fn offers_upload(&self) -> bool {
        self.health.is_ready()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Running)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            AnalysisPhase::Done(done) => Some(&done.result),
            _ => None,
        }
    }

    pub fn set_report(&mut self, ctx: &egui::Context, report: UploadedReport) {
        self.preview = report
            .decode_preview()
            .map(|img| ctx.load_texture("report_preview", img, egui::TextureOptions::LINEAR));
        self.report = Some(report);
        self.phase = AnalysisPhase::Idle;
    }

    pub fn clear_report(&mut self) {
        self.report = None;
        self.preview = None;
        self.phase = AnalysisPhase::Idle;
        self.pending = None;
    }

    /// Kick off the one analysis request for the current report on a worker
    /// thread. No cancellation and no retry; a second click while running is
    /// ignored.
    pub fn start_analysis(&mut self) {
        if self.is_running() {
            return;
        }
        let Some(report) = self.report.clone() else {
            return;
        };
        let config = self.config.clone();
        let (tx, rx) = mpsc::channel();
        self.phase = AnalysisPhase::Running;
        self.pending = Some(rx);
        thread::spawn(move || {
            let _ = tx.send(backend::analyze(&config, &report));
        });
    }

    /// Poll the worker channel; called once per frame while running.
    pub fn poll_analysis(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply_outcome(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.apply_outcome(Err(BackendError::Other(
                    "analysis worker exited unexpectedly".to_string(),
                )));
            }
        }
    }

    pub fn apply_outcome(&mut self, outcome: Result<AnalysisResult, BackendError>) {
        self.phase = match outcome {
            Ok(result) => {
                tracing::info!("backend: analysis complete");
                AnalysisPhase::Done(CompletedAnalysis {
                    result,
                    finished_at: Local::now(),
                })
            }
            Err(e) => {
                tracing::warn!("backend: analysis failed: {e}");
                AnalysisPhase::Failed(e)
            }
        };
    }
}
