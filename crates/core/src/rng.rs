//! Draw helpers over the injected random stream.
//!
//! Every draw consumes exactly one `next_u64`, so the draw order of a pass
//! fully determines its output for a given seed.

use rand_chacha::rand_core::Rng;

pub(crate) fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: usize) -> usize {
    debug_assert!(bound > 0);
    (rng.next_u64() % bound as u64) as usize
}

#[cfg(test)]
mod tests {
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    use super::*;

    #[test]
    fn random_below_stays_inside_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(12_345);
        for bound in 1..50 {
            assert!(random_below(&mut rng, bound) < bound);
        }
    }

    #[test]
    fn bound_of_one_always_draws_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(random_below(&mut rng, 1), 0);
        }
    }
}
