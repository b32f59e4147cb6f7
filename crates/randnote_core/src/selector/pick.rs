//! Uniform random pick over a candidate slice.

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one candidate uniformly using the thread-local RNG.
///
/// Returns `None` for an empty slice. The source is not cryptographically
/// secure and no seeding contract is offered.
pub fn pick_random<T>(candidates: &[T]) -> Option<&T> {
    pick_random_with(candidates, &mut rand::thread_rng())
}

/// Same as [`pick_random`] with a caller-supplied RNG.
pub fn pick_random_with<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}
