//! Pure domain logic for Sentinel.
//!
//! Three side-effect-free components live here:
//!
//! - [`gate`] - resolves whether the scan surface is unlocked and derives the
//!   operator label
//! - [`classify`] - tags raw input as a transaction hash or an address
//! - [`present`] - maps an audit outcome onto a renderable display model
//!
//! Everything is a total function over its inputs; nothing here can fail or
//! touch IO. The engine crate owns all mutable state and async work.

pub mod classify;
pub mod gate;
pub mod present;

pub use classify::classify;
pub use gate::{OVERRIDE_OPERATOR_LABEL, UNKNOWN_OPERATOR_LABEL, is_unlocked, operator_label};
pub use present::present;
