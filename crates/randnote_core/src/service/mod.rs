//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate host capabilities around the pure selector.
//! - Keep host wiring (CLI, embedding apps) decoupled from selection rules.

pub mod random_note_service;
