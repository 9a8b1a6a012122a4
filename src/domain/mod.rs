//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — database records, identifier sets, findings, settings.
//! - `constants.rs` — sidecar extensions, tool name, allow-listed id prefixes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/subprocess side effects.

pub mod constants;
pub mod models;
