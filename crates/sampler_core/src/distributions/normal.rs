//! Normal sampling via the Box-Muller transform.
//!
//! Two uniform draws `u1, u2` become one standard normal variate
//!
//! ```text
//! z = sqrt(-2 ln u1) * sin(2 pi u2)
//! ```
//!
//! which is then shifted and scaled to `mu + sigma * z`. Only the sine
//! branch is used; the cosine partner of each pair is discarded.

use std::f64::consts::TAU;

use rand::Rng;
use rand_distr::Distribution;

use crate::rng::{RngSource, UniformSource};

/// Draws one sample from `N(mu, sigma^2)`.
///
/// A first draw of exactly `0.0` would send `ln` to negative infinity, so
/// it is discarded and redrawn before the second draw is taken.
///
/// # Arguments
///
/// * `source` - Uniform source supplying the two draws
/// * `mu` - Mean of the target distribution
/// * `sigma` - Standard deviation of the target distribution
///
/// # Returns
///
/// A finite `f64` for finite `mu` and `sigma`.
///
/// # Termination
///
/// The zero-draw redraw is unbounded: a source that only ever returns
/// `0.0` makes this call loop forever. Any source honouring the
/// `U[0, 1)` contract terminates with probability one.
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::sample_normal;
/// use sampler_core::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let x = sample_normal(&mut rng, 5.0, 2.0);
/// assert!(x.is_finite());
/// ```
pub fn sample_normal<S: UniformSource + ?Sized>(source: &mut S, mu: f64, sigma: f64) -> f64 {
    let u1 = nonzero_uniform(source);
    let u2 = source.sample_uniform();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).sin();
    mu + sigma * z
}

/// Draws one sample from `N(0, 1)`.
#[inline]
pub fn sample_standard_normal<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    sample_normal(source, 0.0, 1.0)
}

fn nonzero_uniform<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    loop {
        let u = source.sample_uniform();
        if u > 0.0 {
            return u;
        }
        tracing::trace!("zero uniform draw in Box-Muller, resampling");
    }
}

/// The normal distribution `N(mu, sigma^2)` as a reusable value.
///
/// Implements [`rand_distr::Distribution`], so it can be driven by any
/// `rand::Rng` as well as by a [`UniformSource`].
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rand_distr::Distribution;
/// use sampler_core::distributions::NormalSampler;
///
/// let normal = NormalSampler::new(0.0, 1.0);
/// let mut rng = StdRng::seed_from_u64(1);
/// let xs: Vec<f64> = normal.sample_iter(&mut rng).take(10).collect();
/// assert_eq!(xs.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalSampler {
    mu: f64,
    sigma: f64,
}

impl NormalSampler {
    /// Creates a sampler with mean `mu` and standard deviation `sigma`.
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Standard normal `N(0, 1)`.
    pub fn standard() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Draws one sample from `source`.
    #[inline]
    pub fn sample_from<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        sample_normal(source, self.mu, self.sigma)
    }
}

impl Default for NormalSampler {
    fn default() -> Self {
        Self::standard()
    }
}

impl Distribution<f64> for NormalSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.sample_from(&mut RngSource::new(rng))
    }
}
