//! Uniform random move selection.

use rand::Rng;

/// Picks one element of `choices` with equal probability.
///
/// Returns `None` when `choices` is empty. Draws a single index from the
/// RNG, so a seeded generator yields a reproducible sequence.
pub fn pick_uniform<T: Copy, R: Rng>(choices: &[T], rng: &mut R) -> Option<T> {
    if choices.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..choices.len());
    choices.get(index).copied()
}
