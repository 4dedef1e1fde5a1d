//! Service layer containing the validation logic and side-effect helpers.
//!
//! ## Service map
//! - `chain.rs` — chain column selection, value extraction, adjacent links.
//! - `hierarchy.rs` — per-run parent registry and row-by-row scan state.
//! - `source.rs` — CSV reading; drives a scan over a file or reader.
//! - `config.rs` — config file loading + merge with CLI flags.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod chain;
pub mod config;
pub mod hierarchy;
pub mod output;
pub mod source;
