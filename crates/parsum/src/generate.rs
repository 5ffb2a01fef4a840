//! Random input generation.

use rand::Rng as _;

/// Generate `length` uniform random values in `0..100`.
pub fn random_array(length: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..length).map(|_| rng.random_range(0..100)).collect()
}
