//! Borrow any `rand` generator as a [`UniformSource`].

use rand::Rng;

use super::source::UniformSource;

/// Adapter exposing a borrowed `rand::Rng` as a [`UniformSource`].
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sampler_core::rng::{RngSource, UniformSource};
///
/// let mut std_rng = StdRng::seed_from_u64(7);
/// let mut source = RngSource::new(&mut std_rng);
/// let u = source.sample_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub struct RngSource<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RngSource<'a, R> {
    /// Wraps a mutable borrow of `rng`.
    #[inline]
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> UniformSource for RngSource<'_, R> {
    #[inline]
    fn sample_uniform(&mut self) -> f64 {
        self.rng.gen()
    }

    #[inline]
    fn sample_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }
}
