//! Precomputed Montgomery parameters for a runtime modulus.

use crate::{BoxedUint, Limb, Odd, limb::nlimbs};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Parameters to efficiently go to/from the Montgomery form for an odd modulus whose size and
/// value are both chosen at runtime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontyParams {
    /// The constant modulus, stored in the minimal number of limbs.
    pub(super) modulus: Odd<BoxedUint>,
    /// `R^2 mod modulus`, used to move into Montgomery form.
    pub(super) r2: BoxedUint,
    /// The lowest limb of `-(modulus^-1) mod R`.
    ///
    /// We only need the low limb because during reduction this value is multiplied modulo
    /// `2^Limb::BITS`.
    pub(super) mod_neg_inv: Limb,
}

impl MontyParams {
    /// Instantiates a new set of [`MontyParams`] representing the given odd `modulus`.
    ///
    /// Leading zero limbs of the modulus are dropped, so every value handled with these
    /// parameters uses exactly `ceil(bits(modulus) / Limb::BITS)` limbs.
    pub fn new(modulus: Odd<BoxedUint>) -> Self {
        let nlimbs = nlimbs(modulus.bits()).max(1);
        let modulus = match modulus.resize(nlimbs) {
            Some(resized) => Odd(resized),
            None => modulus,
        };

        let r2 = pow2_limbs_mod(nlimbs * 2, &modulus);
        let mod_neg_inv = modulus.limbs[0].neg_inv_mod_word();

        Self {
            modulus,
            r2,
            mod_neg_inv,
        }
    }

    /// Modulus value.
    pub fn modulus(&self) -> &Odd<BoxedUint> {
        &self.modulus
    }

    /// Number of limbs used by every value reduced with these parameters.
    pub fn nlimbs(&self) -> usize {
        self.modulus.nlimbs()
    }

    /// Bits of precision in the modulus.
    pub fn bits_precision(&self) -> u32 {
        self.modulus.bits_precision()
    }
}

/// Compute `2^(Limb::BITS * limbs) mod modulus`.
fn pow2_limbs_mod(limbs: usize, modulus: &Odd<BoxedUint>) -> BoxedUint {
    let mut power = BoxedUint::zero_with_limbs(limbs + 1);
    power.limbs[limbs] = Limb::ONE;
    let ret = power.rem_vartime(modulus);

    #[cfg(feature = "zeroize")]
    power.zeroize();

    ret
}
