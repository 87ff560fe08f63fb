//! Thread-local generator registry.
//!
//! This module provides [`ThreadLocalRng`], a handle to a per-thread
//! [`SamplerRng`] created lazily on first use. Each thread owns its own
//! generator, so no locking is needed when shuffling from many threads.
//!
//! # Seeding
//!
//! A thread's generator is seeded from a coarse system tick (milliseconds
//! since the Unix epoch) mixed with a hash of the thread's [`ThreadId`].
//! This is not a cryptographic seed and must not be used where
//! unpredictability matters.
//!
//! # Example
//!
//! ```rust
//! use sampler_core::rng::{ThreadLocalRng, UniformSource};
//!
//! let mut rng = ThreadLocalRng::new();
//! let u = rng.sample_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread::{self, ThreadId};
use std::time::{SystemTime, UNIX_EPOCH};

use super::prng::SamplerRng;
use super::source::UniformSource;

thread_local! {
    static THREAD_RNG: RefCell<Option<SamplerRng>> = const { RefCell::new(None) };
}

/// Mixes a tick count with a thread identity into a generator seed.
pub(crate) fn seed_for(ticks: u64, thread_id: ThreadId) -> u64 {
    let mut hasher = DefaultHasher::new();
    thread_id.hash(&mut hasher);
    ticks ^ hasher.finish().rotate_left(32)
}

fn coarse_ticks() -> u64 {
    // a clock before the epoch only weakens the seed
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn new_thread_rng() -> SamplerRng {
    let seed = seed_for(coarse_ticks(), thread::current().id());
    tracing::debug!(
        seed,
        thread = ?thread::current().id(),
        "created thread-local sampler rng"
    );
    SamplerRng::from_seed(seed)
}

/// Runs `f` with the calling thread's generator, creating it on first use.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f`.
///
/// # Example
///
/// ```rust
/// use sampler_core::rng::{with_thread_rng, UniformSource};
///
/// let index = with_thread_rng(|rng| rng.sample_index(9));
/// assert!(index <= 9);
/// ```
pub fn with_thread_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SamplerRng) -> R,
{
    THREAD_RNG.with(|slot| {
        let mut slot = slot.borrow_mut();
        let rng = slot.get_or_insert_with(new_thread_rng);
        f(rng)
    })
}

/// Returns the seed of the calling thread's generator.
///
/// Creates the generator if this thread has not used it yet.
pub fn thread_seed() -> u64 {
    with_thread_rng(|rng| rng.seed())
}

/// Handle to the calling thread's generator.
///
/// This is a zero-cost value; the actual generator is thread-local. A handle
/// moved to another thread resolves to that thread's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Creates a new handle.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl UniformSource for ThreadLocalRng {
    #[inline]
    fn sample_uniform(&mut self) -> f64 {
        with_thread_rng(|rng| rng.sample_uniform())
    }

    #[inline]
    fn sample_index(&mut self, upper: usize) -> usize {
        with_thread_rng(|rng| rng.sample_index(upper))
    }
}
