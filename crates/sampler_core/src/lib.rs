//! # sampler_core: Distribution Sampling and Shuffle Utilities
//!
//! A thin layer over a uniform random source providing:
//! - Normal samples via the Box-Muller transform (`distributions::normal`)
//! - Range-bounded exponential samples via inverse-CDF with rejection
//!   (`distributions::exponential`)
//! - Ordered sample lists with optional rounding (`lists`)
//! - In-place Fisher-Yates shuffle (`shuffle`)
//!
//! ## Explicit Sources First
//!
//! Every sampler takes its [`UniformSource`](rng::UniformSource) as an
//! explicit `&mut` parameter. The per-thread generator in
//! [`rng::thread_local`] is a convenience used by [`shuffle()`] and
//! available to any caller through [`ThreadLocalRng`](rng::ThreadLocalRng).
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::distributions::{sample_exponential, sample_normal};
//! use sampler_core::lists::sample_normal_list;
//! use sampler_core::rng::SamplerRng;
//! use sampler_core::{shuffle, Rounding};
//!
//! let mut rng = SamplerRng::from_seed(2024);
//!
//! let x = sample_normal(&mut rng, 5.0, 2.0);
//! assert!(x.is_finite());
//!
//! let y = sample_exponential(&mut rng, 0.0, 10.0, 1.0).unwrap();
//! assert!((0.0..10.0).contains(&y));
//!
//! let xs = sample_normal_list(&mut rng, 10, 0.0, 1.0, Rounding::Decimals(2));
//! assert_eq!(xs.len(), 10);
//!
//! let mut items = vec!['a', 'b', 'c'];
//! shuffle(&mut items);
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through `tracing`; the library installs no subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod distributions;
pub mod error;
pub mod lists;
pub mod rng;
pub mod shuffle;

pub use config::SamplerConfig;
pub use distributions::{
    sample_exponential, sample_normal, sample_standard_normal, BoundedExponential, NormalSampler,
};
pub use error::{ConfigError, Result, SamplingError};
pub use lists::{sample_exponential_list, sample_normal_list, Rounding};
pub use shuffle::{shuffle, shuffle_with};
