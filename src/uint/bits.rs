//! Bit manipulation functions.

use crate::{BoxedUint, Limb};

impl BoxedUint {
    /// Calculate the number of significant bits in this integer, in variable time.
    pub fn bits(&self) -> u32 {
        self.limbs
            .iter()
            .rposition(|limb| limb.0 != 0)
            .map(|i| i as u32 * Limb::BITS + self.limbs[i].bits())
            .unwrap_or(0)
    }

    /// Get the value of the bit at position `index`, as a truthy or falsy `bool`.
    ///
    /// Returns `false` for indices beyond the precision.
    pub fn bit_vartime(&self, index: u32) -> bool {
        let limb = (index / Limb::BITS) as usize;
        let bit = index % Limb::BITS;
        self.limbs
            .get(limb)
            .is_some_and(|limb| (limb.0 >> bit) & 1 == 1)
    }

    /// Shift left by one bit in place, returning the bit shifted out of the top limb.
    pub(crate) fn shl1_assign(&mut self) -> Limb {
        let mut carry = Limb::ZERO;

        for limb in self.limbs.iter_mut() {
            let next = Limb(limb.0 >> (Limb::BITS - 1));
            *limb = Limb((limb.0 << 1) | carry.0);
            carry = next;
        }

        carry
    }
}
