//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};

impl Limb {
    /// Computes `self + (b * c) + carry`, returning the result along with the new carry.
    #[inline(always)]
    pub const fn mac(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(b.0, c.0, self.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }

    /// Compute "wide" multiplication, with a product twice the size of the input.
    ///
    /// Returns `(lo, hi)`.
    #[inline(always)]
    pub(crate) const fn widening_mul(&self, rhs: Self) -> (Self, Self) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }
}
