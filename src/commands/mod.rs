//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — encode/decode.
//! - `about.rs` — version reporting and the bare root command.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate version logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod about;
pub mod runtime;

pub use about::handle_about_commands;
pub use runtime::handle_runtime_commands;
