//! # Uniform Random Sources
//!
//! Every sampler in this crate consumes a [`UniformSource`]: a generator of
//! independent draws in `[0, 1)` plus a uniform integer draw used by the
//! shuffle.
//!
//! ## Module Structure
//!
//! - [`source`]: the `UniformSource` trait
//! - [`prng`]: seeded wrapper around `rand::rngs::StdRng`
//! - [`adapter`]: borrow any `rand::Rng` as a source
//! - [`thread_local`]: lazily-seeded per-thread generator
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{SamplerRng, ThreadLocalRng, UniformSource};
//!
//! // Explicit, reproducible source
//! let mut rng = SamplerRng::from_seed(12345);
//! let u = rng.sample_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Implicit per-thread source
//! let k = ThreadLocalRng::new().sample_index(4);
//! assert!(k <= 4);
//! ```

pub mod adapter;
pub mod prng;
pub mod source;
pub mod thread_local;

pub use adapter::RngSource;
pub use prng::SamplerRng;
pub use source::UniformSource;
pub use thread_local::{thread_seed, with_thread_rng, ThreadLocalRng};
