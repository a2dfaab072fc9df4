//! Random number generation for the sampler.
//!
//! One thread-local ChaCha20 PRNG per worker thread, OS-seeded, so every
//! worker draws from its own independent sequence.

use glam::Vec3A;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32()
}

/// Random unit vector, uniform over the sphere, by rejection sampling.
///
/// Candidates are drawn from the [-1, 1) cube until one lands inside the
/// unit ball, then normalized.
pub fn random_unit_vector() -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
            random_f32_range(-1.0, 1.0),
        );
        if p.length_squared() <= 1.0 {
            return p.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_f32_range_bounds() {
        for _ in 0..1000 {
            let x = random_f32_range(-0.5, 0.5);
            assert!((-0.5..0.5).contains(&x));
        }
    }

    #[test]
    fn test_random_unit_vector_is_unit() {
        for _ in 0..100 {
            let v = random_unit_vector();
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }
}
