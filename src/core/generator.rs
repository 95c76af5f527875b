//! Synthetic value generation
//!
//! The transformer draws replacement values through the [`NameGenerator`]
//! trait so callers control where synthetic data comes from. Production use
//! goes through [`FakeNameGenerator`]; tests inject deterministic stubs.

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

/// Source of synthetic replacement values
///
/// Implementations must be thread-safe: the transformer is shared across
/// async tasks and draws a fresh value for every replacement. Generation is
/// infallible; implementations always return a non-empty value.
pub trait NameGenerator: Send + Sync {
    /// Produces a plausible given name.
    fn first_name(&self) -> String;

    /// Produces a plausible family name.
    fn last_name(&self) -> String;
}

/// Name generator backed by English name data
///
/// Draws names through a `StdRng` so output can be made reproducible with
/// [`with_seed`](Self::with_seed). Each call produces an independent draw;
/// repeated inputs do not map to repeated outputs.
pub struct FakeNameGenerator {
    /// Random number generator (StdRng is Send + Sync)
    rng: Mutex<StdRng>,
}

impl FakeNameGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a generator with a fixed seed for reproducible output
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn draw<F>(&self, draw_one: F) -> String
    where
        F: FnOnce(&mut StdRng) -> String,
    {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draw_one(&mut rng)
    }
}

impl NameGenerator for FakeNameGenerator {
    fn first_name(&self) -> String {
        self.draw(|rng| FirstName().fake_with_rng(rng))
    }

    fn last_name(&self) -> String {
        self.draw(|rng| LastName().fake_with_rng(rng))
    }
}

impl Default for FakeNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}
