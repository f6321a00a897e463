//! Fisher-Yates shuffle with an injected random source.

use rand::Rng;

/// Return a shuffled copy of `items`; the input is left untouched.
///
/// Walks from the last index down, drawing the swap target uniformly from
/// `[0, i]`. The random source is passed in so callers (and tests) can seed
/// it for a reproducible draw.
pub fn shuffle<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
