//! Note selection engine.
//!
//! # Responsibility
//! - Narrow the vault listing down to candidates for one policy.
//! - Pick one candidate uniformly at random.
//!
//! # Invariants
//! - Pure and stateless: no I/O, no locks, inputs are never mutated.
//! - A returned note is always a member of the candidate set.
//! - An empty result is a normal outcome, not an error.

mod filter;
mod pick;

pub use filter::{filter_by_policy, window_lower_bound_ms};
pub use pick::{pick_random, pick_random_with};
