//! [`BoxedUint`] multiplication operations.
//!
//! Both kernels are schoolbook: quadratic in the limb count, which at the 2048-bit class is
//! faster than Karatsuba-style splitting and keeps the per-step cost of the squaring loop flat.

use crate::{BoxedUint, Limb};

impl BoxedUint {
    /// Multiply `self` by `rhs`.
    ///
    /// Returns a widened output with a limb count equal to the sums of the input limb counts.
    pub fn mul_wide(&self, rhs: &Self) -> Self {
        let mut ret = Self::zero_with_limbs(self.nlimbs() + rhs.nlimbs());
        mul_into(&mut ret.limbs, &self.limbs, &rhs.limbs);
        ret
    }

    /// Multiply `self` by itself.
    ///
    /// Returns a widened output with twice the limb count of `self`.
    pub fn square_wide(&self) -> Self {
        let mut ret = Self::zero_with_limbs(self.nlimbs() * 2);
        square_into(&mut ret.limbs, &self.limbs);
        ret
    }
}

/// Compute `out = a * b`. `out` must hold exactly `a.len() + b.len()` limbs; its prior contents
/// are overwritten.
pub(crate) fn mul_into(out: &mut [Limb], a: &[Limb], b: &[Limb]) {
    debug_assert_eq!(out.len(), a.len() + b.len());
    out.iter_mut().for_each(|limb| *limb = Limb::ZERO);

    for (i, &ai) in a.iter().enumerate() {
        let mut carry = Limb::ZERO;
        for (j, &bj) in b.iter().enumerate() {
            (out[i + j], carry) = out[i + j].mac(ai, bj, carry);
        }
        out[i + b.len()] = carry;
    }
}

/// Compute `out = a * a`. `out` must hold exactly `2 * a.len()` limbs; its prior contents are
/// overwritten.
///
/// Cross products `a[i] * a[j]` for `i < j` are accumulated once and doubled, then the diagonal
/// squares are added, which roughly halves the number of word multiplications.
pub(crate) fn square_into(out: &mut [Limb], a: &[Limb]) {
    let n = a.len();
    debug_assert_eq!(out.len(), n * 2);
    out.iter_mut().for_each(|limb| *limb = Limb::ZERO);

    for i in 0..n {
        let mut carry = Limb::ZERO;
        for j in (i + 1)..n {
            (out[i + j], carry) = out[i + j].mac(a[i], a[j], carry);
        }
        out[i + n] = carry;
    }

    // double the cross products; their sum is below a^2 / 2, so no bit is lost at the top
    let mut hi_bit = Limb::ZERO;
    for limb in out.iter_mut() {
        let next = Limb(limb.0 >> (Limb::BITS - 1));
        *limb = Limb((limb.0 << 1) | hi_bit.0);
        hi_bit = next;
    }
    debug_assert_eq!(hi_bit, Limb::ZERO);

    let mut carry = Limb::ZERO;
    for i in 0..n {
        let (lo, hi) = a[i].widening_mul(a[i]);
        let c;
        (out[2 * i], c) = out[2 * i].carrying_add(lo, carry);
        (out[2 * i + 1], carry) = out[2 * i + 1].carrying_add(hi, c);
    }
    debug_assert_eq!(carry, Limb::ZERO);
}
