#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i64, max: i64) -> i64;

    /// Produces real random value, uniformly distributed on the interval [min, max).
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool;

    /// Returns an independent generator seeded from this source. Exclusively
    /// owning a generator lets a solver draw values without synchronization.
    fn get_rng(&self) -> SmallRng;
}

/// A default random implementation, optionally seeded for reproducible runs.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with the given seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i64, max: i64) -> i64 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.lock().unwrap().gen_range(min..=max)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.lock().unwrap().gen_range(min..max)
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.rng.lock().unwrap().gen_bool(probability.clamp(0., 1.))
    }

    fn get_rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.rng.lock().unwrap().next_u64())
    }
}
