//! Random number generator support.

use crate::{BoxedUint, Limb, Odd, Word};
use rand_core::RngCore;

impl BoxedUint {
    /// Generate a random [`BoxedUint`] in the range `[0, modulus)`.
    ///
    /// Samples uniformly by rejection: candidates are masked to the bit length of the modulus, so
    /// on average fewer than two draws are needed.
    pub fn random_below<R: RngCore + ?Sized>(rng: &mut R, modulus: &Odd<BoxedUint>) -> Self {
        let modulus = modulus.as_ref();
        let bits = modulus.bits();
        let nlimbs = modulus.nlimbs();
        let top_limb = ((bits - 1) / Limb::BITS) as usize;
        let top_bits = bits - top_limb as u32 * Limb::BITS;
        let top_mask = Word::MAX >> (Limb::BITS - top_bits);

        loop {
            let mut candidate = Self::zero_with_limbs(nlimbs);
            for limb in candidate.limbs.iter_mut().take(top_limb + 1) {
                *limb = Limb(random_word(rng));
            }
            candidate.limbs[top_limb].0 &= top_mask;

            if candidate < *modulus {
                return candidate;
            }
        }
    }
}

#[cfg(target_pointer_width = "32")]
fn random_word<R: RngCore + ?Sized>(rng: &mut R) -> Word {
    rng.next_u32()
}

#[cfg(target_pointer_width = "64")]
fn random_word<R: RngCore + ?Sized>(rng: &mut R) -> Word {
    rng.next_u64()
}

#[cfg(test)]
mod tests {
    use crate::{BoxedUint, Odd};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn random_below_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let modulus = Odd::new(BoxedUint::from(221u8)).unwrap();

        for _ in 0..256 {
            let n = BoxedUint::random_below(&mut rng, &modulus);
            assert!(n < *modulus.as_ref());
            assert_eq!(n.nlimbs(), 1);
        }
    }

    #[test]
    fn random_below_multi_limb() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let modulus = Odd::new(BoxedUint::from(u128::MAX)).unwrap();
        let a = BoxedUint::random_below(&mut rng, &modulus);
        let b = BoxedUint::random_below(&mut rng, &modulus);
        assert_ne!(a, b);
        assert!(a < *modulus.as_ref());
    }
}
