//! Injectable random sources.
//!
//! Every randomised helper takes a `&mut impl Rng`. Use [`seeded`] for
//! reproducible sequences and [`from_entropy`] for production use.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator used when the caller has no preference.
pub type DefaultRng = ChaCha8Rng;

/// A generator that always produces the same sequence for `seed`.
#[must_use]
pub fn seeded(seed: u64) -> DefaultRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A generator seeded from the operating system.
#[must_use]
pub fn from_entropy() -> DefaultRng {
    ChaCha8Rng::from_entropy()
}

/// Uniform draw from `[0, 1)`.
pub(crate) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..1.0)
}
