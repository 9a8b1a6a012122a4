//! Command handler layer.
//!
//! Parses nothing itself: `main` resolves settings, `doctor.rs` matches the
//! subcommand and delegates to `services/*`.

pub mod doctor;

pub use doctor::handle_commands;
