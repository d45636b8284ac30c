//! Maps an [`AuditOutcome`] onto a renderable [`DisplayModel`].
//!
//! Pure and total: every optional field access is defensive, so a partial
//! payload degrades gracefully instead of failing.

use sentinel_types::{AuditOutcome, AuditReport, DisplayModel, Severity};

/// Badge text when the service omitted a status, or the audit failed.
const UNKNOWN_BADGE: &str = "UNKNOWN";

/// Risk scores above this get elevated-risk styling.
const ELEVATED_RISK_THRESHOLD: f64 = 50.0;

/// Build the display model for the current outcome.
#[must_use]
pub fn present(outcome: &AuditOutcome) -> DisplayModel {
    match outcome {
        AuditOutcome::Idle => DisplayModel::default(),
        AuditOutcome::Loading => DisplayModel {
            scanning: true,
            ..DisplayModel::default()
        },
        AuditOutcome::Success(report) => present_report(report),
        AuditOutcome::Failure(message) => DisplayModel {
            badge: Some(UNKNOWN_BADGE.to_string()),
            severity: Severity::Unknown,
            body: Some(message.clone()),
            ..DisplayModel::default()
        },
    }
}

fn present_report(report: &AuditReport) -> DisplayModel {
    let badge = report
        .status
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_else(|| UNKNOWN_BADGE.to_string());

    let (severity, safety_integrity) = match report.risk_score {
        Some(score) => {
            let severity = if score > ELEVATED_RISK_THRESHOLD {
                Severity::Elevated
            } else {
                Severity::Nominal
            };
            (severity, Some(safety_integrity(score)))
        }
        None => (Severity::Unknown, None),
    };

    let body = report
        .reason
        .clone()
        .unwrap_or_else(|| raw_payload_text(report));

    DisplayModel {
        badge: Some(badge),
        severity,
        safety_integrity,
        body: Some(body),
        analysis: report.analysis.clone(),
        scanning: false,
    }
}

/// `100 - risk_score`, clamped into the expected 0-100 range so an
/// out-of-range or non-finite score cannot produce a nonsense percentage.
fn safety_integrity(risk_score: f64) -> u8 {
    let clamped = if risk_score.is_finite() {
        risk_score.clamp(0.0, 100.0)
    } else {
        100.0
    };
    (100.0 - clamped).round() as u8
}

/// Serialize the full payload for display when the service gave no reason.
fn raw_payload_text(report: &AuditReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentinel_types::AUDIT_FAILURE_MESSAGE;

    fn report(status: &str, risk_score: f64) -> AuditReport {
        AuditReport {
            status: Some(status.to_string()),
            risk_score: Some(risk_score),
            ..AuditReport::default()
        }
    }

    #[test]
    fn idle_renders_nothing() {
        let model = present(&AuditOutcome::Idle);
        assert_eq!(model, DisplayModel::default());
        assert!(!model.scanning);
    }

    #[test]
    fn loading_only_sets_scanning() {
        let model = present(&AuditOutcome::Loading);
        assert!(model.scanning);
        assert_eq!(model.badge, None);
        assert_eq!(model.body, None);
    }

    #[test]
    fn safe_low_risk_report_is_nominal() {
        let model = present(&AuditOutcome::Success(report("Safe", 10.0)));
        assert_eq!(model.badge.as_deref(), Some("SAFE"));
        assert_eq!(model.severity, Severity::Nominal);
        assert_eq!(model.safety_integrity, Some(90));
    }

    #[test]
    fn risky_high_risk_report_is_elevated() {
        let model = present(&AuditOutcome::Success(report("Risky", 80.0)));
        assert_eq!(model.badge.as_deref(), Some("RISKY"));
        assert_eq!(model.severity, Severity::Elevated);
        assert_eq!(model.safety_integrity, Some(20));
    }

    #[test]
    fn threshold_score_is_still_nominal() {
        let model = present(&AuditOutcome::Success(report("Safe", 50.0)));
        assert_eq!(model.severity, Severity::Nominal);
    }

    #[test]
    fn missing_status_yields_unknown_badge() {
        let report = AuditReport {
            risk_score: Some(5.0),
            ..AuditReport::default()
        };
        let model = present(&AuditOutcome::Success(report));
        assert_eq!(model.badge.as_deref(), Some("UNKNOWN"));
    }

    #[test]
    fn missing_score_yields_unknown_severity_and_no_integrity() {
        let report = AuditReport {
            status: Some("Safe".to_string()),
            ..AuditReport::default()
        };
        let model = present(&AuditOutcome::Success(report));
        assert_eq!(model.severity, Severity::Unknown);
        assert_eq!(model.safety_integrity, None);
    }

    #[test]
    fn reason_becomes_the_body() {
        let report = AuditReport {
            reason: Some("No malicious patterns detected.".to_string()),
            ..AuditReport::default()
        };
        let model = present(&AuditOutcome::Success(report));
        assert_eq!(model.body.as_deref(), Some("No malicious patterns detected."));
    }

    #[test]
    fn missing_reason_falls_back_to_raw_payload() {
        let mut extra = serde_json::Map::new();
        extra.insert("gas_used".to_string(), serde_json::json!(1500));
        let report = AuditReport {
            status: Some("Safe".to_string()),
            extra,
            ..AuditReport::default()
        };
        let model = present(&AuditOutcome::Success(report));
        let body = model.body.unwrap();
        assert!(body.contains("gas_used"));
        assert!(body.contains("1500"));
    }

    #[test]
    fn analysis_is_surfaced_separately() {
        let report = AuditReport {
            reason: Some("ok".to_string()),
            analysis: Some("Detailed reasoning.".to_string()),
            ..AuditReport::default()
        };
        let model = present(&AuditOutcome::Success(report));
        assert_eq!(model.analysis.as_deref(), Some("Detailed reasoning."));
        assert_eq!(model.body.as_deref(), Some("ok"));
    }

    #[test]
    fn failure_renders_the_fixed_sentinel() {
        let model = present(&AuditOutcome::Failure(AUDIT_FAILURE_MESSAGE.to_string()));
        assert_eq!(model.badge.as_deref(), Some("UNKNOWN"));
        assert_eq!(model.severity, Severity::Unknown);
        assert_eq!(model.body.as_deref(), Some(AUDIT_FAILURE_MESSAGE));
        assert_eq!(model.safety_integrity, None);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let high = present(&AuditOutcome::Success(report("Risky", 250.0)));
        assert_eq!(high.safety_integrity, Some(0));
        let low = present(&AuditOutcome::Success(report("Safe", -10.0)));
        assert_eq!(low.safety_integrity, Some(100));
    }
}
