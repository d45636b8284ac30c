//! Application state machine.

use std::time::{Duration, Instant};

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;

use sentinel_client::{AuditClient, ClientError};
use sentinel_config::Settings;
use sentinel_core::{classify, is_unlocked, operator_label, present};
use sentinel_types::{
    AUDIT_FAILURE_MESSAGE, AccessOverride, AuditOutcome, AuditReport, AuditRequest, AuditTarget,
    DisplayModel, ServiceHealth, WalletState,
};

const EVENT_CHANNEL_CAPACITY: usize = 16;
const HEALTH_PROBE_INTERVAL: Duration = Duration::from_secs(10);

/// Result of a submit attempt.
///
/// Everything except `Dispatched` is a rejected no-op: the outcome cell is
/// untouched and no request leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// One request was dispatched and the outcome moved to `Loading`.
    Dispatched,
    /// The target was blank after trimming. Locally suppressed, not surfaced.
    EmptyTarget,
    /// An audit is already in flight. Concurrent submits are rejected rather
    /// than cancel-and-replace, so "at most one in-flight audit" holds even
    /// when the UI-level disablement is bypassed.
    AuditInFlight,
    /// The scan surface is locked (no wallet, no override).
    Locked,
}

/// Events sent back to the UI thread by spawned tasks.
enum EngineEvent {
    AuditSettled {
        seq: u64,
        result: Result<AuditReport, ClientError>,
    },
    HealthChecked(ServiceHealth),
}

struct InFlightAudit {
    seq: u64,
    abort: AbortHandle,
}

/// Application state. Single-threaded owner of the audit outcome cell.
pub struct App {
    wallet: WalletState,
    access_override: AccessOverride,
    client: AuditClient,
    target: String,
    outcome: AuditOutcome,
    health: ServiceHealth,
    events_tx: mpsc::Sender<EngineEvent>,
    events_rx: mpsc::Receiver<EngineEvent>,
    in_flight: Option<InFlightAudit>,
    next_seq: u64,
    last_health_probe: Option<Instant>,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, ClientError> {
        let client = AuditClient::new(settings.audit_base_url)?;
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            wallet: settings.wallet,
            access_override: settings.access_override,
            client,
            target: String::new(),
            outcome: AuditOutcome::Idle,
            health: ServiceHealth::Offline,
            events_tx,
            events_rx,
            in_flight: None,
            next_seq: 0,
            last_health_probe: None,
        })
    }

    // ------------------------------------------------------------------
    // Read accessors for the TUI layer
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        is_unlocked(&self.wallet, self.access_override)
    }

    #[must_use]
    pub fn operator_label(&self) -> String {
        operator_label(&self.wallet, self.access_override)
    }

    #[must_use]
    pub fn display(&self) -> DisplayModel {
        present(&self.outcome)
    }

    #[must_use]
    pub fn outcome(&self) -> &AuditOutcome {
        &self.outcome
    }

    #[must_use]
    pub const fn health(&self) -> ServiceHealth {
        self.health
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.outcome.is_loading()
    }

    // ------------------------------------------------------------------
    // Target input editing
    // ------------------------------------------------------------------

    pub fn push_input(&mut self, c: char) {
        if !c.is_control() {
            self.target.push(c);
        }
    }

    pub fn delete_input_char(&mut self) {
        self.target.pop();
    }

    pub fn clear_input(&mut self) {
        self.target.clear();
    }

    // ------------------------------------------------------------------
    // Audit lifecycle
    // ------------------------------------------------------------------

    /// Submit the current target for audit.
    ///
    /// Exactly one outbound request is dispatched per transition into
    /// `Loading`. A submission from `Success` or `Failure` supersedes the
    /// prior terminal outcome entirely; no fields of the old report survive.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_unlocked() {
            tracing::warn!("Submit rejected: scan surface is locked");
            return SubmitOutcome::Locked;
        }
        let Ok(target) = AuditTarget::new(self.target.as_str()) else {
            return SubmitOutcome::EmptyTarget;
        };
        if self.outcome.is_loading() {
            tracing::warn!("Submit rejected: an audit is already in flight");
            return SubmitOutcome::AuditInFlight;
        }

        let kind = classify(target.as_str());
        let request = AuditRequest { target, kind };

        self.next_seq += 1;
        let seq = self.next_seq;
        tracing::info!(seq, kind = kind.as_str(), "Audit dispatched");

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let (abort, registration) = AbortHandle::new_pair();
        tokio::spawn(Abortable::new(
            async move {
                let result = client.audit(&request).await;
                // Receiver gone means the app is shutting down; drop the result.
                let _ = tx.send(EngineEvent::AuditSettled { seq, result }).await;
            },
            registration,
        ));

        self.in_flight = Some(InFlightAudit { seq, abort });
        self.outcome = AuditOutcome::Loading;
        SubmitOutcome::Dispatched
    }

    /// Drain settled events from spawned tasks. Called once per frame.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::AuditSettled { seq, result } => self.apply_settled(seq, result),
            EngineEvent::HealthChecked(health) => {
                if health != self.health {
                    tracing::info!(health = health.as_str(), "Audit service health changed");
                }
                self.health = health;
            }
        }
    }

    fn apply_settled(&mut self, seq: u64, result: Result<AuditReport, ClientError>) {
        let latest = self.in_flight.as_ref().map(|audit| audit.seq);
        if latest != Some(seq) {
            // A stale response must never overwrite a newer submission.
            tracing::debug!(seq, ?latest, "Discarding stale audit result");
            return;
        }
        self.in_flight = None;
        match result {
            Ok(report) => {
                tracing::info!(seq, "Audit settled successfully");
                self.outcome = AuditOutcome::Success(report);
            }
            Err(e) => {
                // The rendered report only ever shows the fixed sentinel; the
                // raw transport detail stays in the diagnostic log.
                tracing::error!(seq, error = %e, "Audit failed");
                self.outcome = AuditOutcome::Failure(AUDIT_FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Advance time-based work. Called once per frame.
    pub fn tick(&mut self) {
        let due = self
            .last_health_probe
            .is_none_or(|last| last.elapsed() >= HEALTH_PROBE_INTERVAL);
        if due {
            self.last_health_probe = Some(Instant::now());
            self.dispatch_health_probe();
        }
    }

    fn dispatch_health_probe(&self) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let health = client.health().await;
            let _ = tx.send(EngineEvent::HealthChecked(health)).await;
        });
    }

    /// Cancel any in-flight audit task. Called on exit.
    pub fn shutdown(&mut self) {
        if let Some(audit) = self.in_flight.take() {
            tracing::info!(seq = audit.seq, "Aborting in-flight audit on shutdown");
            audit.abort.abort();
        }
    }
}
