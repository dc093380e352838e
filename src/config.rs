// src/config.rs
use std::env;
use std::time::Duration;

/// File extensions the backend accepts, lowercase, without the dot.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

/// Soft upload ceiling in megabytes. Matches the backend limit; shown to the
/// user as guidance but never enforced by rejecting the file.
pub const SOFT_SIZE_LIMIT_MB: f64 = 50.0;

const DEFAULT_ANALYZE_URL: &str = "https://swasthai-5did.onrender.com/analyze";
const DEFAULT_HEALTH_URL: &str = "https://swasthai-5did.onrender.com/health";

const HEALTH_TIMEOUT_SECS: u64 = 8;
const ANALYZE_TIMEOUT_SECS: u64 = 90;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub analyze_url: String,
    pub health_url: String,
    pub health_timeout: Duration,
    pub analyze_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            analyze_url: DEFAULT_ANALYZE_URL.to_string(),
            health_url: DEFAULT_HEALTH_URL.to_string(),
            health_timeout: Duration::from_secs(HEALTH_TIMEOUT_SECS),
            analyze_timeout: Duration::from_secs(ANALYZE_TIMEOUT_SECS),
        }
    }
}

impl BackendConfig {
    /// Default endpoints, overridable via `MEDLENS_API_URL` and
    /// `MEDLENS_HEALTH_URL` for pointing the client at a local backend.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("MEDLENS_API_URL") {
            if !url.is_empty() {
                config.analyze_url = url;
            }
        }
        if let Ok(url) = env::var("MEDLENS_HEALTH_URL") {
            if !url.is_empty() {
                config.health_url = url;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_service() {
        let config = BackendConfig::default();
        assert!(config.analyze_url.ends_with("/analyze"));
        assert!(config.health_url.ends_with("/health"));
        assert_eq!(config.health_timeout, Duration::from_secs(8));
        assert_eq!(config.analyze_timeout, Duration::from_secs(90));
    }

    #[test]
    fn env_overrides_endpoints() {
        env::set_var("MEDLENS_API_URL", "http://localhost:8000/analyze");
        env::set_var("MEDLENS_HEALTH_URL", "http://localhost:8000/health");
        let config = BackendConfig::from_env();
        assert_eq!(config.analyze_url, "http://localhost:8000/analyze");
        assert_eq!(config.health_url, "http://localhost:8000/health");
        env::remove_var("MEDLENS_API_URL");
        env::remove_var("MEDLENS_HEALTH_URL");
    }
}
