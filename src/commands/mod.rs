//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod validate;

pub use validate::handle_validate;
