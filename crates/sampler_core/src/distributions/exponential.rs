//! Range-bounded exponential sampling.
//!
//! A raw inverse-CDF draw `t = -ln(u) / lambda` is rescaled onto the
//! requested range with a fixed step of one sixth of its width:
//!
//! ```text
//! result = min_value + t * (max_value - min_value) / 6
//! ```
//!
//! Draws that land at or beyond `max_value` are rejected and redrawn, so
//! every accepted value lies in `[min_value, max_value)`. The rejection
//! skews the distribution towards `min_value`; the divisor is kept at
//! exactly `6` so outputs stay comparable with existing data sets.

use crate::config::SamplerConfig;
use crate::error::{Result, SamplingError};
use crate::lists::Rounding;
use crate::rng::UniformSource;

/// Number of increments the range is divided into.
pub const RANGE_DIVISOR: f64 = 6.0;

/// Validated parameters of the range-bounded exponential sampler.
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::BoundedExponential;
/// use sampler_core::rng::SamplerRng;
///
/// let exp = BoundedExponential::new(0.0, 10.0, 1.0).unwrap();
/// let mut rng = SamplerRng::from_seed(42);
///
/// let x = exp.sample(&mut rng).unwrap();
/// assert!((0.0..10.0).contains(&x));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedExponential {
    min_value: f64,
    max_value: f64,
    lambda: f64,
    increment: f64,
    max_attempts: usize,
}

impl BoundedExponential {
    /// Validates the range and rate.
    ///
    /// # Arguments
    ///
    /// * `min_value` - Inclusive lower bound of accepted samples
    /// * `max_value` - Exclusive upper bound of accepted samples
    /// * `lambda` - Rate of the underlying exponential draw
    ///
    /// # Errors
    ///
    /// - [`SamplingError::InvalidLambda`] if `lambda` is not finite and positive
    /// - [`SamplingError::NonFiniteBound`] if either bound is NaN or infinite
    /// - [`SamplingError::InvalidRange`] if `min_value >= max_value`
    pub fn new(min_value: f64, max_value: f64, lambda: f64) -> Result<Self> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(SamplingError::InvalidLambda { lambda });
        }
        if !(min_value.is_finite() && max_value.is_finite()) {
            return Err(SamplingError::NonFiniteBound {
                min: min_value,
                max: max_value,
            });
        }
        if min_value >= max_value {
            return Err(SamplingError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }

        Ok(Self {
            min_value,
            max_value,
            lambda,
            // divided before subtracting so a span wider than f64::MAX stays finite
            increment: max_value / RANGE_DIVISOR - min_value / RANGE_DIVISOR,
            max_attempts: SamplerConfig::default().max_rejection_attempts,
        })
    }

    /// Applies the rejection cap from `config`.
    pub fn with_config(mut self, config: &SamplerConfig) -> Self {
        self.max_attempts = config.max_rejection_attempts;
        self
    }

    /// Inclusive lower bound.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Exclusive upper bound.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Rate parameter.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Width of one sixth of the range.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Maximum draws per sample before giving up.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draws one value in `[min_value, max_value)`.
    ///
    /// A zero uniform draw gives `t = inf`, which is rejected like any
    /// other overshoot.
    ///
    /// # Errors
    ///
    /// [`SamplingError::RejectionLimitExceeded`] if no draw is accepted
    /// within [`max_attempts`](Self::max_attempts) tries.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> Result<f64> {
        for _ in 0..self.max_attempts {
            let u = source.sample_uniform();
            let t = -u.ln() / self.lambda;
            let result = self.rescale(t);
            if result < self.max_value {
                return Ok(result);
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            min_value = self.min_value,
            max_value = self.max_value,
            lambda = self.lambda,
            "bounded exponential sampler hit its rejection limit"
        );
        Err(SamplingError::RejectionLimitExceeded {
            attempts: self.max_attempts,
        })
    }

    /// Maps a raw draw `t` onto `min_value + t * increment`.
    fn rescale(&self, t: f64) -> f64 {
        let result = self.min_value + t * self.increment;
        if result.is_finite() || !t.is_finite() {
            return result;
        }
        // t * increment alone overflowed; halve both terms so in-range values survive
        2.0 * (self.min_value / 2.0 + t * (self.increment / 2.0))
    }

    /// Draws `count` values in order, rounding each as requested.
    ///
    /// Fails on the first failing draw; no partial list is returned.
    pub fn sample_list<S: UniformSource + ?Sized>(
        &self,
        source: &mut S,
        count: usize,
        rounding: Rounding,
    ) -> Result<Vec<f64>> {
        (0..count)
            .map(|_| self.sample(source).map(|x| rounding.apply(x)))
            .collect()
    }
}

/// Draws one value in `[min_value, max_value)` with the default rejection cap.
///
/// # Examples
///
/// ```rust
/// use sampler_core::distributions::sample_exponential;
/// use sampler_core::rng::SamplerRng;
///
/// let mut rng = SamplerRng::from_seed(3);
/// let x = sample_exponential(&mut rng, 2.0, 4.0, 1.0).unwrap();
/// assert!(x >= 2.0 && x < 4.0);
///
/// assert!(sample_exponential(&mut rng, 0.0, 1.0, 0.0).is_err());
/// ```
pub fn sample_exponential<S: UniformSource + ?Sized>(
    source: &mut S,
    min_value: f64,
    max_value: f64,
    lambda: f64,
) -> Result<f64> {
    BoundedExponential::new(min_value, max_value, lambda)?.sample(source)
}
