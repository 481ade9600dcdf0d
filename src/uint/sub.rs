//! [`BoxedUint`] subtraction operations.

use crate::{BoxedUint, Limb};

impl BoxedUint {
    /// Computes `self - rhs` in place, returning the borrow out of the top limb (either
    /// [`Limb::ZERO`] or [`Limb::MAX`]).
    ///
    /// `rhs` may have fewer limbs than `self`; missing limbs are treated as zero.
    #[inline]
    pub(crate) fn borrowing_sub_assign(&mut self, rhs: &[Limb]) -> Limb {
        debug_assert!(rhs.iter().skip(self.nlimbs()).all(|l| l.0 == 0));
        let mut borrow = Limb::ZERO;

        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let b = rhs.get(i).copied().unwrap_or(Limb::ZERO);
            (*limb, borrow) = limb.borrowing_sub(b, borrow);
        }

        borrow
    }

    /// Perform wrapping subtraction, discarding underflow. The result has the precision of
    /// `self`.
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        let mut ret = self.clone();
        ret.borrowing_sub_assign(rhs.as_limbs());
        ret
    }
}
