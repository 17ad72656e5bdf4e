//! Wire types for the symptom-analysis endpoint and the pure derivation of
//! results-screen rows from its response.

use serde::{Deserialize, Serialize};

use crate::symptoms::Symptom;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Severity as reported by the service. Received values are trusted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSeverity {
    Moderate,
    High,
}

impl ResponseSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub conditions: Vec<String>,
    pub severity: ResponseSeverity,
    pub confidence: f64,
}

/// Submission guard: a request needs at least one selected symptom, one media
/// file, or a non-blank transcript. Callers must not contact the service when
/// this is false.
pub fn has_input(symptoms: &[&Symptom], media_count: usize, transcript: &str) -> bool {
    !symptoms.is_empty() || media_count > 0 || !transcript.trim().is_empty()
}

/// Joins the selected symptom names (comma separated) and the transcript
/// (period separated) into the single text payload sent for analysis.
pub fn build_request_text(symptoms: &[&Symptom], transcript: &str) -> String {
    let names = symptoms.iter().map(|s| s.name).collect::<Vec<_>>().join(", ");
    [names.as_str(), transcript.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(". ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedSeverity {
    Low,
    Medium,
    High,
}

impl DerivedSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Low => "badge bg-green-100 text-green-800",
            Self::Medium => "badge bg-yellow-100 text-yellow-800",
            Self::High => "badge bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Routine,
    Urgent,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Self::Routine => "routine",
            Self::Urgent => "urgent",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Routine => "badge bg-blue-100 text-blue-800",
            Self::Urgent => "badge bg-orange-100 text-orange-800",
        }
    }
}

/// One rendered row on the results screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionReport {
    pub condition: String,
    pub probability: u32,
    pub severity: DerivedSeverity,
    pub description: String,
    pub recommendations: &'static [&'static str],
    pub urgency: Urgency,
}

const CONDITION_RECOMMENDATIONS: &[&str] = &[
    "Monitor your symptoms closely",
    "Stay hydrated and get adequate rest",
    "Consider consulting a healthcare professional",
    "Follow up if symptoms worsen or persist",
];

const FALLBACK_RECOMMENDATIONS: &[&str] = &[
    "Check your internet connection",
    "Ensure the backend service is running",
    "Try again in a few moments",
];

fn probability(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

/// Derives one report per condition in the response. Probability is the
/// rounded confidence percentage; severity is high only when the service says
/// high, medium when confidence exceeds 0.7, low otherwise; urgency is urgent
/// exactly when the service severity is high.
pub fn condition_reports(response: &AnalysisResponse) -> Vec<ConditionReport> {
    let probability = probability(response.confidence);
    let severity = match response.severity {
        ResponseSeverity::High => DerivedSeverity::High,
        ResponseSeverity::Moderate if response.confidence > 0.7 => DerivedSeverity::Medium,
        ResponseSeverity::Moderate => DerivedSeverity::Low,
    };
    let urgency = match response.severity {
        ResponseSeverity::High => Urgency::Urgent,
        ResponseSeverity::Moderate => Urgency::Routine,
    };

    response
        .conditions
        .iter()
        .map(|condition| ConditionReport {
            condition: condition.clone(),
            probability,
            severity,
            description: format!(
                "Based on your symptoms, this condition has been identified with {probability}% confidence."
            ),
            recommendations: CONDITION_RECOMMENDATIONS,
            urgency,
        })
        .collect()
}

/// The single placeholder row shown when no response was carried to the
/// results screen, for example after direct navigation.
pub fn fallback_report() -> ConditionReport {
    ConditionReport {
        condition: "Unable to analyze - No API response".to_string(),
        probability: 0,
        severity: DerivedSeverity::Low,
        description: "The analysis service is currently unavailable. Please try again later."
            .to_string(),
        recommendations: FALLBACK_RECOMMENDATIONS,
        urgency: Urgency::Routine,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NextSteps {
    pub immediate: &'static [&'static str],
    pub short_term: &'static [&'static str],
    pub monitoring: Vec<String>,
}

pub fn next_steps(response: &AnalysisResponse) -> NextSteps {
    NextSteps {
        immediate: &[
            "Monitor your symptoms for the next 24-48 hours",
            "Stay hydrated and get adequate rest",
            "Take note of any changes in your condition",
        ],
        short_term: &[
            "Schedule a follow-up with your primary care physician",
            "Keep a symptom diary",
            "Consider lifestyle modifications based on recommendations",
        ],
        monitoring: vec![
            "Seek immediate medical attention if symptoms worsen".to_string(),
            "Watch for any emergency warning signs".to_string(),
            format!("Monitor confidence level: {}%", probability(response.confidence)),
        ],
    }
}

/// The sentence read aloud by the results screen's listen button.
pub fn spoken_summary(response: &AnalysisResponse, request_text: &str) -> Option<String> {
    let condition = response.conditions.first()?;
    Some(format!(
        "Based on your symptoms: {request_text}, the analysis shows {condition} with {}% confidence and {} severity.",
        probability(response.confidence),
        response.severity.label(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symptoms::CATALOG;

    fn response(conditions: &[&str], severity: ResponseSeverity, confidence: f64) -> AnalysisResponse {
        AnalysisResponse {
            conditions: conditions.iter().map(|c| c.to_string()).collect(),
            severity,
            confidence,
        }
    }

    #[test]
    fn empty_intake_has_no_input() {
        assert!(!has_input(&[], 0, ""));
        assert!(!has_input(&[], 0, "   \n\t"));
    }

    #[test]
    fn any_single_source_counts_as_input() {
        let fever = &CATALOG[0];
        assert!(has_input(&[fever], 0, ""));
        assert!(has_input(&[], 1, ""));
        assert!(has_input(&[], 0, "my head hurts"));
    }

    #[test]
    fn request_text_joins_names_then_transcript() {
        let fever = &CATALOG[0];
        let cough = &CATALOG[2];
        assert_eq!(
            build_request_text(&[fever, cough], "it started yesterday"),
            "Fever, Cough. it started yesterday"
        );
    }

    #[test]
    fn request_text_skips_empty_parts() {
        let fever = &CATALOG[0];
        assert_eq!(build_request_text(&[fever], ""), "Fever");
        assert_eq!(build_request_text(&[], "just a cough"), "just a cough");
        assert_eq!(build_request_text(&[], "   "), "");
    }

    #[test]
    fn moderate_with_high_confidence_derives_medium_routine() {
        let reports = condition_reports(&response(&["Flu"], ResponseSeverity::Moderate, 0.82));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].condition, "Flu");
        assert_eq!(reports[0].probability, 82);
        assert_eq!(reports[0].severity, DerivedSeverity::Medium);
        assert_eq!(reports[0].urgency, Urgency::Routine);
    }

    #[test]
    fn moderate_with_low_confidence_derives_low() {
        let reports = condition_reports(&response(&["Cold"], ResponseSeverity::Moderate, 0.4));
        assert_eq!(reports[0].probability, 40);
        assert_eq!(reports[0].severity, DerivedSeverity::Low);
    }

    #[test]
    fn high_severity_is_urgent_regardless_of_confidence() {
        let reports = condition_reports(&response(&["Pneumonia"], ResponseSeverity::High, 0.9));
        assert_eq!(reports[0].severity, DerivedSeverity::High);
        assert_eq!(reports[0].urgency, Urgency::Urgent);

        let low_conf = condition_reports(&response(&["Pneumonia"], ResponseSeverity::High, 0.1));
        assert_eq!(low_conf[0].severity, DerivedSeverity::High);
        assert_eq!(low_conf[0].urgency, Urgency::Urgent);
    }

    #[test]
    fn one_report_per_condition_shares_the_derivation() {
        let reports = condition_reports(&response(
            &["Flu", "Common Cold"],
            ResponseSeverity::Moderate,
            0.75,
        ));
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].probability, reports[1].probability);
        assert!(reports[0].description.contains("75% confidence"));
    }

    #[test]
    fn fallback_report_is_a_single_placeholder() {
        let report = fallback_report();
        assert!(report.condition.starts_with("Unable to analyze"));
        assert_eq!(report.probability, 0);
        assert_eq!(report.urgency, Urgency::Routine);
    }

    #[test]
    fn monitoring_steps_carry_the_confidence_percentage() {
        let steps = next_steps(&response(&["Flu"], ResponseSeverity::Moderate, 0.82));
        assert_eq!(steps.monitoring.last().unwrap(), "Monitor confidence level: 82%");
    }

    #[test]
    fn response_deserializes_from_the_wire_shape() {
        let parsed: AnalysisResponse = serde_json::from_str(
            r#"{"conditions":["Flu"],"severity":"moderate","confidence":0.82}"#,
        )
        .unwrap();
        assert_eq!(parsed.conditions, vec!["Flu"]);
        assert_eq!(parsed.severity, ResponseSeverity::Moderate);
        assert!((parsed.confidence - 0.82).abs() < 1e-9);
    }

    #[test]
    fn request_serializes_to_a_text_field() {
        let body = serde_json::to_string(&AnalysisRequest { text: "fever, cough".into() }).unwrap();
        assert_eq!(body, r#"{"text":"fever, cough"}"#);
    }

    #[test]
    fn spoken_summary_reads_the_top_condition() {
        let resp = response(&["Flu"], ResponseSeverity::Moderate, 0.82);
        let spoken = spoken_summary(&resp, "Fever, Cough").unwrap();
        assert!(spoken.contains("the analysis shows Flu with 82% confidence"));
        assert!(spoken.contains("moderate severity"));

        assert!(spoken_summary(&response(&[], ResponseSeverity::Moderate, 0.5), "x").is_none());
    }
}
