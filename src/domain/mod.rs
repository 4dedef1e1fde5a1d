//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — scan config, conflict events, outcome and report structs.
//! - `constants.rs` — defaults and the fixed report messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `ValidateReport` is the `--json` output. Keep it in sync with
//! `docs/contracts/validate_report.schema.json`.

pub mod constants;
pub mod models;
