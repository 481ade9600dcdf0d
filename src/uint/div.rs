//! [`BoxedUint`] division operations.

use super::cmp::cmp_limbs_vartime;
use crate::{BoxedUint, Limb, Odd};
use core::cmp::Ordering;

impl BoxedUint {
    /// Computes `self % rhs`, returning a remainder with the precision of `rhs`.
    ///
    /// Restoring binary long division: one shift and at most one subtraction per significant bit
    /// of `self`. Variable-time with respect to both operands.
    pub fn rem_vartime(&self, rhs: &Odd<BoxedUint>) -> BoxedUint {
        let modulus = rhs.as_ref();

        // The running remainder stays below `2 * modulus`, which needs one extra limb.
        let mut rem = Self::zero_with_limbs(modulus.nlimbs() + 1);

        for i in (0..self.bits()).rev() {
            rem.shl1_assign();
            if self.bit_vartime(i) {
                rem.limbs[0].0 |= 1;
            }

            if cmp_limbs_vartime(&rem.limbs, &modulus.limbs) != Ordering::Less {
                rem.borrowing_sub_assign(&modulus.limbs);
            }
        }

        debug_assert_eq!(rem.limbs[modulus.nlimbs()], Limb::ZERO);
        Self::from(&rem.limbs[..modulus.nlimbs()])
    }
}
