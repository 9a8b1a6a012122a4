//! Service layer containing the checks and their side-effect helpers.
//!
//! ## Service map
//! - `doctor.rs` — run context and the six-step diagnosis.
//! - `checks.rs` — per-identifier predicates (numeric, duplicate, format).
//! - `blastdbcmd.rs` — `IdentifierSource` trait + `blastdbcmd` subprocess wrapper.
//! - `catalog.rs` — database catalog from config entries or a directory scan.
//! - `config.rs` — config file loading and flag overrides.
//! - `permissions.rs` — readability/writability queries.
//! - `output.rs` — progress/finding text rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod blastdbcmd;
pub mod catalog;
pub mod checks;
pub mod config;
pub mod doctor;
pub mod output;
pub mod permissions;
