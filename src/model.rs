// src/model.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of the health probe endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthProbe {
    pub status: Option<String>,
    pub models_loaded: bool,
}

impl HealthProbe {
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }
}

/// Structured analysis response. The backend guarantees nothing about which
/// fields are present, so every section and scalar is optional and the UI
/// substitutes a placeholder for whatever is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub health_summary: HealthSummary,
    pub extracted_values: BTreeMap<String, f64>,
    pub detailed_analysis: DetailedAnalysis,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: BTreeMap<String, String>,
    /// Full response document, kept for the debug expander.
    #[serde(skip)]
    pub raw: Value,
}

impl AnalysisResult {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let raw: Value = serde_json::from_str(body)?;
        let mut result: AnalysisResult = serde_json::from_value(raw.clone())?;
        result.raw = raw;
        Ok(result)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthSummary {
    pub health_score: Option<f64>,
    pub risk_level: Option<String>,
    pub status: Option<String>,
    /// Risk category -> probability in percent.
    pub risk_probabilities: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAnalysis {
    pub abnormal_tests_count: u32,
    pub abnormal_tests: Vec<AbnormalTest>,
    pub warnings_count: u32,
    pub warnings: Vec<Warning>,
}

/// A lab value the backend flagged as outside its normal range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbnormalTest {
    pub test: Option<String>,
    pub value: Option<Value>,
    pub normal_range: Option<String>,
    pub status: Option<String>,
}

impl AbnormalTest {
    pub fn is_high(&self) -> bool {
        self.status.as_deref() == Some("High")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Warning {
    pub category: Option<String>,
    pub message: Option<String>,
    pub urgency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub priority: Option<String>,
    pub action: Option<String>,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "health_summary": {
            "health_score": 85,
            "risk_level": "Low",
            "status": "Good",
            "risk_probabilities": {"Diabetes": 12.5, "Anemia": 4.0}
        },
        "extracted_values": {"Hemoglobin": 13.8, "Glucose": 92.0},
        "detailed_analysis": {
            "abnormal_tests_count": 1,
            "abnormal_tests": [
                {"test": "TSH", "value": 6.1, "normal_range": "0.4-4.0", "status": "High"}
            ],
            "warnings_count": 1,
            "warnings": [
                {"category": "Thyroid", "message": "TSH elevated", "urgency": "Routine"}
            ]
        },
        "recommendations": [
            {"priority": "High", "action": "Consult an endocrinologist", "details": "Repeat TSH in 6 weeks"}
        ],
        "next_steps": {"step_1": "Book a follow-up"}
    }"#;

    #[test]
    fn full_response_deserializes() {
        let result = AnalysisResult::from_json(FULL_RESPONSE).unwrap();
        assert_eq!(result.health_summary.health_score, Some(85.0));
        assert_eq!(result.health_summary.risk_level.as_deref(), Some("Low"));
        assert_eq!(result.extracted_values["Hemoglobin"], 13.8);
        assert_eq!(result.detailed_analysis.abnormal_tests_count, 1);
        assert!(result.detailed_analysis.abnormal_tests[0].is_high());
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.next_steps["step_1"], "Book a follow-up");
        assert!(result.raw.is_object());
    }

    #[test]
    fn empty_object_is_valid() {
        let result = AnalysisResult::from_json("{}").unwrap();
        assert_eq!(result.health_summary.health_score, None);
        assert!(result.extracted_values.is_empty());
        assert_eq!(result.detailed_analysis.abnormal_tests_count, 0);
        assert!(result.recommendations.is_empty());
        assert!(result.next_steps.is_empty());
    }

    #[test]
    fn missing_extracted_values_yields_empty_map() {
        let result =
            AnalysisResult::from_json(r#"{"health_summary": {"health_score": 70}}"#).unwrap();
        assert!(result.extracted_values.is_empty());
    }

    #[test]
    fn unknown_status_is_not_high() {
        let test: AbnormalTest =
            serde_json::from_str(r#"{"test": "Ferritin", "status": "Low"}"#).unwrap();
        assert!(!test.is_high());
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(AnalysisResult::from_json("[1, 2, 3]").is_err());
        assert!(AnalysisResult::from_json("not json").is_err());
    }
}
