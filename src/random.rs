//! Random source for grid initialization.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator when a seed is given, OS entropy otherwise.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
