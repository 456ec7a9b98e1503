//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep the version/pair value types and report structs in one place.
//! - Avoid cyclic imports between the normalizer, the pairing codec and the
//!   command handlers.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — `Version`, `Pair`, report/output structs, config file.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects, no parsing.
//!
//! ## Compatibility note
//! Changes in the report structs affect `--json` outputs.
//! Keep them synchronized with `docs/contracts/*`.

pub mod models;
