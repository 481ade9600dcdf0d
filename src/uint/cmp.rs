//! [`BoxedUint`] comparisons.
//!
//! Equality is constant-time and uses the `subtle` crate. Values of different precisions compare
//! by numeric value, with missing high limbs treated as zero.

use super::BoxedUint;
use crate::Limb;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

impl BoxedUint {
    /// Returns the [`Ordering`] between `self` and `rhs` in variable time.
    pub fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        cmp_limbs_vartime(&self.limbs, &rhs.limbs)
    }
}

/// Compare two little-endian limb slices of possibly different lengths.
pub(crate) fn cmp_limbs_vartime(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
    let len = lhs.len().max(rhs.len());

    for i in (0..len).rev() {
        let a = lhs.get(i).copied().unwrap_or(Limb::ZERO);
        let b = rhs.get(i).copied().unwrap_or(Limb::ZERO);
        match a.0.cmp(&b.0) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

impl ConstantTimeEq for BoxedUint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let len = self.nlimbs().max(other.nlimbs());
        let mut ret = Choice::from(1);

        for i in 0..len {
            let a = self.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            let b = other.limbs.get(i).copied().unwrap_or(Limb::ZERO);
            ret &= a.ct_eq(&b);
        }

        ret
    }
}

impl Eq for BoxedUint {}

impl PartialEq for BoxedUint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Ord for BoxedUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for BoxedUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
