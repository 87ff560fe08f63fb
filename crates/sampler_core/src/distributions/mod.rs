//! Normal and range-bounded exponential samplers.
//!
//! Both take their uniform source as an explicit parameter.
//!
//! - [`normal`]: Box-Muller `N(mu, sigma^2)`
//! - [`exponential`]: inverse-CDF exponential rescaled and rejected into `[min, max)`

pub mod exponential;
pub mod normal;

pub use exponential::{sample_exponential, BoundedExponential, RANGE_DIVISOR};
pub use normal::{sample_normal, sample_standard_normal, NormalSampler};
