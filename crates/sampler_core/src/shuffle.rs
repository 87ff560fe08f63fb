//! Fisher-Yates shuffle.
//!
//! [`shuffle_with`] takes an explicit source; [`shuffle`] uses the calling
//! thread's generator from [`crate::rng::thread_local`].

use crate::rng::{ThreadLocalRng, UniformSource};

/// Permutes `items` in place using `source`.
///
/// Walks from the last index down to 1, swapping position `n` with a
/// uniform index `k` in `[0, n]`. Slices shorter than two elements are left
/// untouched and consume no draws.
///
/// # Arguments
///
/// * `items` - Slice permuted in place
/// * `source` - Supplies the index draws via [`UniformSource::sample_index`]
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::shuffle::shuffle_with;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let mut items = vec![1, 2, 3, 4, 5];
/// shuffle_with(&mut items, &mut rng);
///
/// items.sort();
/// assert_eq!(items, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_with<T, S: UniformSource + ?Sized>(items: &mut [T], source: &mut S) {
    for n in (1..items.len()).rev() {
        let k = source.sample_index(n);
        items.swap(k, n);
    }
}

/// Permutes `items` in place using the calling thread's generator.
///
/// The thread-local generator is weakly seeded; do not use this where the
/// permutation must be unpredictable.
///
/// # Examples
///
/// ```rust
/// use sampler_core::shuffle;
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// shuffle(&mut deck);
/// assert_eq!(deck.len(), 52);
/// ```
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut ThreadLocalRng::new());
}
