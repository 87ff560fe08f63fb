//! List generators.
//!
//! Repeat a single-sample operation `count` times, keeping draw order, and
//! optionally round every value to a fixed number of fractional digits.

use crate::distributions::{sample_normal, BoundedExponential};
use crate::error::Result;
use crate::rng::UniformSource;

/// Rounding applied to each generated value.
///
/// `Decimals(d)` uses `f64::round` on `value * 10^d`, i.e. ties round half
/// away from zero.
///
/// # Examples
///
/// ```rust
/// use sampler_core::Rounding;
///
/// assert_eq!(Rounding::Decimals(2).apply(1.005_1), 1.01);
/// assert_eq!(Rounding::Decimals(0).apply(-2.5), -3.0);
/// assert_eq!(Rounding::None.apply(0.123_456), 0.123_456);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Keep full precision.
    #[default]
    None,
    /// Round to this many fractional digits.
    Decimals(u32),
}

impl Rounding {
    /// Rounds `value` according to this policy.
    ///
    /// Values whose scaled form is not finite are returned unchanged; at
    /// that magnitude they have no fractional digits left to round.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::None => value,
            Rounding::Decimals(digits) => {
                let factor = 10f64.powi(digits.min(i32::MAX as u32) as i32);
                let scaled = value * factor;
                if !scaled.is_finite() {
                    return value;
                }
                scaled.round() / factor
            }
        }
    }
}

impl From<Option<u32>> for Rounding {
    fn from(decimals: Option<u32>) -> Self {
        decimals.map_or(Rounding::None, Rounding::Decimals)
    }
}

/// Draws `count` normal samples in order.
///
/// # Examples
///
/// ```rust
/// use sampler_core::lists::sample_normal_list;
/// use sampler_core::rng::SamplerRng;
/// use sampler_core::Rounding;
///
/// let mut rng = SamplerRng::from_seed(42);
/// let xs = sample_normal_list(&mut rng, 5, 0.0, 1.0, Rounding::Decimals(3));
/// assert_eq!(xs.len(), 5);
/// ```
pub fn sample_normal_list<S: UniformSource + ?Sized>(
    source: &mut S,
    count: usize,
    mu: f64,
    sigma: f64,
    rounding: Rounding,
) -> Vec<f64> {
    (0..count)
        .map(|_| rounding.apply(sample_normal(source, mu, sigma)))
        .collect()
}

/// Draws `count` range-bounded exponential samples in order.
///
/// Parameters are validated once, before any draw.
///
/// # Errors
///
/// Any error of [`BoundedExponential::new`] or
/// [`BoundedExponential::sample`]; no partial list is returned.
pub fn sample_exponential_list<S: UniformSource + ?Sized>(
    source: &mut S,
    count: usize,
    min_value: f64,
    max_value: f64,
    lambda: f64,
    rounding: Rounding,
) -> Result<Vec<f64>> {
    BoundedExponential::new(min_value, max_value, lambda)?.sample_list(source, count, rounding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplingError;
    use crate::rng::SamplerRng;
    use proptest::prelude::*;

    /// Number of fractional digits needed to print `x` exactly.
    fn fractional_digits(x: f64) -> usize {
        let s = format!("{}", x);
        s.split_once('.').map_or(0, |(_, frac)| frac.len())
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(Rounding::Decimals(0).apply(0.5), 1.0);
        assert_eq!(Rounding::Decimals(0).apply(-0.5), -1.0);
        assert_eq!(Rounding::Decimals(0).apply(1.5), 2.0);
        assert_eq!(Rounding::Decimals(0).apply(2.5), 3.0);
        assert_eq!(Rounding::Decimals(1).apply(0.25), 0.3);
    }

    #[test]
    fn test_rounding_extreme_digits() {
        assert_eq!(Rounding::Decimals(400).apply(0.1), 0.1);
        assert_eq!(Rounding::Decimals(u32::MAX).apply(1.5), 1.5);
        assert_eq!(Rounding::Decimals(5).apply(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_rounding_from_option() {
        assert_eq!(Rounding::from(None), Rounding::None);
        assert_eq!(Rounding::from(Some(3)), Rounding::Decimals(3));
        assert_eq!(Rounding::default(), Rounding::None);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = SamplerRng::from_seed(1);
        assert!(sample_normal_list(&mut rng, 0, 0.0, 1.0, Rounding::None).is_empty());
        assert!(
            sample_exponential_list(&mut rng, 0, 0.0, 1.0, 1.0, Rounding::None)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_lists_keep_draw_order() {
        let mut a = SamplerRng::from_seed(8);
        let mut b = SamplerRng::from_seed(8);
        let list = sample_normal_list(&mut a, 20, 1.0, 2.0, Rounding::None);
        let singles: Vec<f64> = (0..20).map(|_| sample_normal(&mut b, 1.0, 2.0)).collect();
        assert_eq!(list, singles);
    }

    #[test]
    fn test_invalid_parameters_fail_before_drawing() {
        let mut rng = SamplerRng::from_seed(1);
        let mut untouched = SamplerRng::from_seed(1);
        assert_eq!(
            sample_exponential_list(&mut rng, 10, 0.0, 1.0, -2.0, Rounding::None),
            Err(SamplingError::InvalidLambda { lambda: -2.0 })
        );
        assert_eq!(rng.sample_uniform(), untouched.sample_uniform());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_list_lengths(seed in any::<u64>(), count in 0..500usize) {
            let mut rng = SamplerRng::from_seed(seed);
            let normal = sample_normal_list(&mut rng, count, 0.0, 1.0, Rounding::None);
            prop_assert_eq!(normal.len(), count);

            let exp = sample_exponential_list(&mut rng, count, 0.0, 1.0, 1.0, Rounding::None)
                .unwrap();
            prop_assert_eq!(exp.len(), count);
        }

        #[test]
        fn prop_rounding_limits_digits(seed in any::<u64>(), digits in 0u32..8) {
            let mut rng = SamplerRng::from_seed(seed);
            let xs = sample_normal_list(&mut rng, 50, 0.0, 10.0, Rounding::Decimals(digits));
            for x in xs {
                prop_assert!(
                    fractional_digits(x) <= digits as usize,
                    "{} has more than {} fractional digits", x, digits
                );
            }
        }

        #[test]
        fn prop_exponential_list_in_range(
            seed in any::<u64>(),
            min in -100.0..100.0f64,
            width in 0.001..50.0f64,
        ) {
            let mut rng = SamplerRng::from_seed(seed);
            let max = min + width;
            let xs = sample_exponential_list(&mut rng, 100, min, max, 1.0, Rounding::None)
                .unwrap();
            for x in xs {
                prop_assert!(x >= min && x < max, "{} escaped [{}, {})", x, min, max);
            }
        }
    }
}
