//! Domain model for random note selection.
//!
//! # Responsibility
//! - Define the note reference shape supplied by the host.
//! - Define the selection policies the selector understands.
//!
//! # Invariants
//! - Records are read-only to the selector; the host owns them.

pub mod note;
