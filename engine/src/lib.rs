//! Core engine for Sentinel - state machine and audit orchestration.
//!
//! The [`App`] struct owns all runtime state:
//!
//! - **Access state**: wallet snapshot + access override, gated through
//!   `sentinel_core::gate`
//! - **Audit lifecycle**: the single live [`sentinel_types::AuditOutcome`]
//!   cell, driven Idle → Loading → Success/Failure
//! - **Service health**: the periodic probe result for the status footer
//!
//! # Architecture
//!
//! The TUI layer reads state from `App` and forwards input back to it; no
//! rendering logic lives here. Audit requests run on spawned tokio tasks and
//! report back over an mpsc channel, which the UI thread drains once per
//! frame via [`App::process_events`]. Only the `App` ever mutates the
//! outcome cell.

mod app;

pub use app::{App, SubmitOutcome};
