//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// The returned borrow is either [`Limb::ZERO`] or [`Limb::MAX`].
    #[inline(always)]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around the boundary of the
    /// type.
    #[inline(always)]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn borrowing_sub_no_borrow() {
        let (res, borrow) = Limb::ONE.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res.0, 0);
        assert_eq!(borrow.0, 0);
    }

    #[test]
    fn borrowing_sub_with_borrow() {
        let (res, borrow) = Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(res.0, Limb::MAX.0);
        assert_eq!(borrow.0, Limb::MAX.0);
    }
}
