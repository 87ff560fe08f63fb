//! The uniform primitive every sampler is built on.

/// A generator of independent uniform samples in `[0, 1)`.
///
/// Samplers in this crate take their source as an explicit `&mut`
/// parameter and never synchronise internally. Implement this trait for
/// a deterministic stub to drive the samplers with a fixed sequence.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::UniformSource;
///
/// struct Half;
///
/// impl UniformSource for Half {
///     fn sample_uniform(&mut self) -> f64 {
///         0.5
///     }
/// }
///
/// let mut half = Half;
/// assert_eq!(half.sample_uniform(), 0.5);
/// assert_eq!(half.sample_index(3), 2);
/// ```
pub trait UniformSource {
    /// Samples `U[0, 1)`.
    fn sample_uniform(&mut self) -> f64;

    /// Samples a uniform integer in `[0, upper]` inclusive.
    ///
    /// The default maps one uniform draw onto `upper + 1` equal buckets.
    /// Generators backed by `rand` override this with an unbiased
    /// `gen_range`.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn sample_index(&mut self, upper: usize) -> usize {
        let index = (self.sample_uniform() * (upper as f64 + 1.0)).floor() as usize;
        // a draw rounding up to 1.0 in the multiplication must not escape
        index.min(upper)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn sample_uniform(&mut self) -> f64 {
        (**self).sample_uniform()
    }

    #[inline]
    fn sample_index(&mut self, upper: usize) -> usize {
        (**self).sample_index(upper)
    }
}
