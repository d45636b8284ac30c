//! Core domain types for Sentinel.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed message shown to the operator when an audit fails.
///
/// The raw transport error is routed to the diagnostic log only; the rendered
/// report never exposes transport internals.
pub const AUDIT_FAILURE_MESSAGE: &str = "Audit Failed. Check Console.";

// ============================================================================
// Wallet & Access Types
// ============================================================================

/// Snapshot of the external wallet capability.
///
/// Supplied by the application boundary; read-only to the core. A wallet may
/// report `connected` before its address has resolved, so the address is
/// independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletState {
    connected: bool,
    address: Option<String>,
}

impl WalletState {
    /// A wallet that is not connected.
    #[must_use]
    pub const fn disconnected() -> Self {
        Self {
            connected: false,
            address: None,
        }
    }

    /// A connected wallet with a resolved address.
    #[must_use]
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            connected: true,
            address: Some(address.into()),
        }
    }

    /// A connected wallet whose address has not resolved yet.
    #[must_use]
    pub const fn connected_unresolved() -> Self {
        Self {
            connected: true,
            address: None,
        }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Access override granting UI access without a connected wallet.
///
/// Computed once at the application boundary (env/config) and injected as a
/// pure input, so the gating logic stays side-effect free. Intended for
/// demonstration, not production security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessOverride(bool);

impl AccessOverride {
    #[must_use]
    pub const fn new(active: bool) -> Self {
        Self(active)
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.0
    }
}

// ============================================================================
// Audit Target Types
// ============================================================================

/// What kind of on-chain entity a raw target string denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Transaction,
    Address,
}

impl TargetKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetKind::Transaction => "transaction",
            TargetKind::Address => "address",
        }
    }
}

/// Error constructing an [`AuditTarget`] from blank input.
#[derive(Debug, Error)]
#[error("audit target must not be empty")]
pub struct EmptyTargetError;

/// A non-empty audit target.
///
/// Submitting a blank target is a local no-op rather than a request, so the
/// outbound payload type refuses to hold one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditTarget(String);

impl AuditTarget {
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyTargetError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(EmptyTargetError)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The only outbound payload: a target plus its classification.
///
/// Serializes with the wire field name `type` expected by the audit service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRequest {
    pub target: AuditTarget,
    #[serde(rename = "type")]
    pub kind: TargetKind,
}

// ============================================================================
// Audit Response Types
// ============================================================================

/// A completed audit response.
///
/// The service's payload shape is loose: every inspected field is optional and
/// unknown fields are preserved verbatim for raw display. Missing fields are
/// not errors; presentation degrades gracefully instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// Any additional fields the service returned, kept for raw display.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Lifecycle of the current audit.
///
/// Exactly one instance is live per session; each new submission replaces the
/// prior outcome entirely. No history is retained.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuditOutcome {
    #[default]
    Idle,
    Loading,
    Success(AuditReport),
    Failure(String),
}

impl AuditOutcome {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, AuditOutcome::Loading)
    }
}

// ============================================================================
// Display Types
// ============================================================================

/// Severity bucket for report styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Risk score at or below the elevated threshold.
    Nominal,
    /// Risk score above the elevated threshold.
    Elevated,
    /// No risk score available, or the audit failed.
    #[default]
    Unknown,
}

/// Normalized render state derived from an [`AuditOutcome`].
///
/// Pure data: the TUI layer maps this onto widgets without inspecting the
/// outcome itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayModel {
    /// Status badge text (uppercased service status, or `UNKNOWN`).
    /// `None` while no report exists.
    pub badge: Option<String>,
    pub severity: Severity,
    /// `100 - risk_score` when the report carried a numeric score.
    pub safety_integrity: Option<u8>,
    /// Report body: the service's reason, the raw payload, or the fixed
    /// failure message.
    pub body: Option<String>,
    /// AI analysis text, rendered as a separately labeled block.
    pub analysis: Option<String>,
    /// True while an audit is in flight.
    pub scanning: bool,
}

// ============================================================================
// Service Health
// ============================================================================

/// Result of the audit service health probe.
///
/// Purely informational: an offline probe never blocks submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceHealth {
    Online,
    #[default]
    Offline,
}

impl ServiceHealth {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ServiceHealth::Online => "ONLINE",
            ServiceHealth::Offline => "OFFLINE",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_target_rejects_blank_input() {
        assert!(AuditTarget::new("").is_err());
        assert!(AuditTarget::new("   ").is_err());
        assert!(AuditTarget::new("0xabc").is_ok());
    }

    #[test]
    fn audit_target_trims_surrounding_whitespace() {
        let target = AuditTarget::new("  0xabc  ").unwrap();
        assert_eq!(target.as_str(), "0xabc");
    }

    #[test]
    fn audit_request_serializes_kind_as_type() {
        let request = AuditRequest {
            target: AuditTarget::new("0xabc").unwrap(),
            kind: TargetKind::Transaction,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "target": "0xabc", "type": "transaction" })
        );
    }

    #[test]
    fn audit_report_tolerates_missing_fields() {
        let report: AuditReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.status, None);
        assert_eq!(report.risk_score, None);
        assert_eq!(report.reason, None);
        assert_eq!(report.analysis, None);
        assert!(report.extra.is_empty());
    }

    #[test]
    fn audit_report_preserves_unknown_fields() {
        let report: AuditReport = serde_json::from_str(
            r#"{"status":"Safe","risk_score":5,"simulation":"ok","gas_used":1500}"#,
        )
        .unwrap();
        assert_eq!(report.status.as_deref(), Some("Safe"));
        assert_eq!(report.risk_score, Some(5.0));
        assert_eq!(
            report.extra.get("simulation"),
            Some(&serde_json::json!("ok"))
        );
        assert_eq!(report.extra.get("gas_used"), Some(&serde_json::json!(1500)));
    }

    #[test]
    fn audit_outcome_defaults_to_idle() {
        assert_eq!(AuditOutcome::default(), AuditOutcome::Idle);
        assert!(!AuditOutcome::Idle.is_loading());
        assert!(AuditOutcome::Loading.is_loading());
    }

    #[test]
    fn wallet_state_connected_unresolved_has_no_address() {
        let wallet = WalletState::connected_unresolved();
        assert!(wallet.is_connected());
        assert_eq!(wallet.address(), None);
    }

    #[test]
    fn service_health_labels() {
        assert_eq!(ServiceHealth::Online.as_str(), "ONLINE");
        assert_eq!(ServiceHealth::Offline.as_str(), "OFFLINE");
    }
}
