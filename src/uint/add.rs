//! [`BoxedUint`] addition operations.

use crate::{BoxedUint, Limb};

impl BoxedUint {
    /// Computes `self + rhs + carry` in place, returning the carry out of the top limb.
    ///
    /// `rhs` may have fewer limbs than `self`; missing limbs are treated as zero. Limbs of `rhs`
    /// beyond the precision of `self` must be zero.
    #[inline]
    pub(crate) fn carrying_add_assign(&mut self, rhs: &[Limb], mut carry: Limb) -> Limb {
        debug_assert!(rhs.iter().skip(self.nlimbs()).all(|l| l.0 == 0));

        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let b = rhs.get(i).copied().unwrap_or(Limb::ZERO);
            (*limb, carry) = limb.carrying_add(b, carry);
        }

        carry
    }

    /// Perform wrapping addition, discarding overflow. The result has the precision of `self`.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut ret = self.clone();
        ret.carrying_add_assign(rhs.as_limbs(), Limb::ZERO);
        ret
    }
}
