//! Service layer containing the version logic and side-effect helpers.
//!
//! ## Service map
//! - `normalize.rs` — free-form version strings to strict `Version` triples.
//! - `positional.rs` — flag/positional slot resolution.
//! - `pairing.rs` — width-marker packing of two versions into one.
//! - `requests.rs` — encode/decode orchestration and their error types.
//! - `config.rs` — TOML config loading + packing selection.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`config`, `logging`, `output`).
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod logging;
pub mod normalize;
pub mod output;
pub mod pairing;
pub mod positional;
pub mod requests;
