// src/backend/client.rs
use reqwest::blocking::{multipart, Client};
use reqwest::StatusCode;

use crate::backend::error::BackendError;
use crate::config::BackendConfig;
use crate::model::{AnalysisResult, HealthProbe};
use crate::report::UploadedReport;
use crate::state::HealthState;

const MAX_ERROR_BODY_CHARS: usize = 1000;

/// Readiness probe against the health endpoint. Any non-200, unparsable
/// body, or transport failure counts as unreachable; the probe result is a
/// state, never an error.
pub fn check_health(config: &BackendConfig) -> HealthState {
    tracing::info!("backend: probing {}", config.health_url);
    let client = match Client::builder().timeout(config.health_timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("backend: could not build http client: {e}");
            return HealthState::Unreachable;
        }
    };
    match client.get(&config.health_url).send() {
        Ok(response) => {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            interpret_health(status, &body)
        }
        Err(e) => {
            tracing::warn!("backend: health probe failed: {e}");
            HealthState::Unreachable
        }
    }
}

fn interpret_health(status: StatusCode, body: &str) -> HealthState {
    if status != StatusCode::OK {
        tracing::warn!("backend: health probe returned status {status}");
        return HealthState::Unreachable;
    }
    match serde_json::from_str::<HealthProbe>(body) {
        Ok(probe) if probe.is_healthy() => HealthState::Ready {
            models_loaded: probe.models_loaded,
        },
        Ok(probe) => {
            tracing::warn!("backend: service reports status {:?}", probe.status);
            HealthState::Unreachable
        }
        Err(e) => {
            tracing::warn!("backend: unparsable health payload: {e}");
            HealthState::Unreachable
        }
    }
}

/// Submit the report bytes as one multipart POST and await the structured
/// result. Blocking; the caller decides which thread carries the wait.
pub fn analyze(
    config: &BackendConfig,
    report: &UploadedReport,
) -> Result<AnalysisResult, BackendError> {
    tracing::info!(
        "backend: submitting {} ({:.2} MB) for analysis",
        report.file_name,
        report.size_mb()
    );
    let client = Client::builder()
        .timeout(config.analyze_timeout)
        .build()
        .map_err(|e| BackendError::Other(e.to_string()))?;
    let part = multipart::Part::bytes(report.bytes.clone())
        .file_name(report.file_name.clone())
        .mime_str("application/octet-stream")
        .map_err(|e| BackendError::Other(e.to_string()))?;
    let form = multipart::Form::new().part("file", part);

    let response = client
        .post(&config.analyze_url)
        .multipart(form)
        .send()
        .map_err(map_transport_error)?;
    let status = response.status();
    let body = response.text().map_err(map_transport_error)?;
    interpret_analysis(status, &body)
}

fn map_transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_connect() {
        BackendError::Connection
    } else {
        BackendError::Other(e.to_string())
    }
}

/// Pure response interpretation, split out so the wire contract is testable
/// without a live server.
fn interpret_analysis(status: StatusCode, body: &str) -> Result<AnalysisResult, BackendError> {
    match status {
        StatusCode::OK => AnalysisResult::from_json(body)
            .map_err(|e| BackendError::Other(format!("invalid analysis payload: {e}"))),
        StatusCode::BAD_REQUEST => {
            let message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str().map(String::from)))
                .unwrap_or_else(|| "Bad request".to_string());
            Err(BackendError::Rejected { message })
        }
        _ => Err(BackendError::UnexpectedStatus {
            status: status.as_u16(),
            body: truncate_body(body),
        }),
    }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
