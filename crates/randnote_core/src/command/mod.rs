//! Random-note command surface.
//!
//! # Responsibility
//! - Define the stable action ids exposed to the host.
//! - Keep the registered action set in step with the current settings.
//!
//! # Invariants
//! - Built-in actions are always registered.
//! - Exactly one custom-directory action exists per non-blank slot.

pub mod catalog;
pub mod registry;
