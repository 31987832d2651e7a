//! Domain-level types shared by the persistence and API layers.
//!
//! This crate has no I/O: error taxonomy, id/timestamp aliases, status and
//! role vocabularies, period date math, funnel statistics, and the TOTP
//! primitive used for two-factor login.

pub mod actions;
pub mod error;
pub mod period;
pub mod roles;
pub mod stats;
pub mod status;
pub mod totp;
pub mod types;
