//! Heap-allocated big unsigned integers.

mod add;
mod bits;
mod cmp;
mod div;
pub(crate) mod encoding;
mod mul;
mod sub;

#[cfg(feature = "rand_core")]
mod rand;

pub(crate) use mul::{mul_into, square_into};

use crate::{Limb, Word, limb::nlimbs};
use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;
use subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Fixed-precision heap-allocated big unsigned integer.
///
/// The precision is chosen at runtime instead of compile time, which lets a single build work
/// with whatever modulus width is configured. Arithmetic never grows a value implicitly: widened
/// results (products, remainders) are allocated with an explicit limb count.
#[derive(Clone)]
pub struct BoxedUint {
    /// Boxed slice containing limbs.
    ///
    /// Stored from least significant to most significant.
    pub(crate) limbs: Box<[Limb]>,
}

impl BoxedUint {
    /// Get the value `0` represented as succinctly as possible.
    pub fn zero() -> Self {
        Self {
            limbs: vec![Limb::ZERO; 1].into(),
        }
    }

    /// Get the value `0` with the given number of bits of precision.
    ///
    /// The precision is rounded up to a multiple of [`Limb::BITS`], with a minimum of one limb.
    pub fn zero_with_precision(bits_precision: u32) -> Self {
        Self::zero_with_limbs(nlimbs(bits_precision))
    }

    /// Get the value `0` stored in `nlimbs` limbs (at least one).
    pub(crate) fn zero_with_limbs(nlimbs: usize) -> Self {
        Self {
            limbs: vec![Limb::ZERO; nlimbs.max(1)].into(),
        }
    }

    /// Get the value `1`, represented as succinctly as possible.
    pub fn one() -> Self {
        Self {
            limbs: vec![Limb::ONE; 1].into(),
        }
    }

    /// Get the value `1` with the given number of bits of precision.
    pub fn one_with_precision(bits_precision: u32) -> Self {
        let mut ret = Self::zero_with_precision(bits_precision);
        ret.limbs[0] = Limb::ONE;
        ret
    }

    /// Is this [`BoxedUint`] equal to zero?
    pub fn is_zero(&self) -> Choice {
        self.limbs
            .iter()
            .fold(Choice::from(1), |acc, limb| acc & limb.is_zero())
    }

    /// Is this [`BoxedUint`] equal to one?
    pub fn is_one(&self) -> Choice {
        let mut iter = self.limbs.iter();
        let choice = iter.next().copied().unwrap_or(Limb::ZERO).ct_eq(&Limb::ONE);
        iter.fold(choice, |acc, limb| acc & limb.is_zero())
    }

    /// Is this integer value an odd number?
    pub fn is_odd(&self) -> Choice {
        self.limbs
            .first()
            .map(|limb| limb.is_odd())
            .unwrap_or_else(|| Choice::from(0))
    }

    /// Create a [`BoxedUint`] from an iterator of [`Word`]s, least significant first.
    #[inline]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let limbs: Vec<Limb> = words.into_iter().map(Limb).collect();
        limbs.into()
    }

    /// Borrow the limbs of this [`BoxedUint`].
    pub fn as_limbs(&self) -> &[Limb] {
        self.limbs.as_ref()
    }

    /// Borrow the limbs of this [`BoxedUint`] mutably.
    pub fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self.limbs.as_mut()
    }

    /// Get the number of limbs in this [`BoxedUint`].
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Get the precision of this [`BoxedUint`] in bits.
    pub fn bits_precision(&self) -> u32 {
        self.limbs.len() as u32 * Limb::BITS
    }

    /// Return a copy of this value stored in exactly `nlimbs` limbs.
    ///
    /// Returns `None` if the value does not fit.
    pub fn resize(&self, nlimbs: usize) -> Option<Self> {
        let nlimbs = nlimbs.max(1);
        if self.limbs.iter().skip(nlimbs).any(|limb| limb.0 != 0) {
            return None;
        }

        let mut ret = Self::zero_with_limbs(nlimbs);
        let len = nlimbs.min(self.nlimbs());
        ret.limbs[..len].copy_from_slice(&self.limbs[..len]);
        Some(ret)
    }

    /// Widen this value to at least `nlimbs` limbs. Never truncates.
    pub fn widen(&self, nlimbs: usize) -> Self {
        let mut ret = Self::zero_with_limbs(nlimbs.max(self.nlimbs()));
        ret.limbs[..self.nlimbs()].copy_from_slice(&self.limbs);
        ret
    }
}

impl AsRef<[Limb]> for BoxedUint {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl AsMut<[Limb]> for BoxedUint {
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_limbs_mut()
    }
}

impl Default for BoxedUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u8> for BoxedUint {
    fn from(n: u8) -> Self {
        vec![Limb::from(n); 1].into()
    }
}

impl From<u32> for BoxedUint {
    fn from(n: u32) -> Self {
        vec![Limb::from(n); 1].into()
    }
}

impl From<u64> for BoxedUint {
    fn from(n: u64) -> Self {
        Self::from(u128::from(n))
    }
}

impl From<u128> for BoxedUint {
    fn from(n: u128) -> Self {
        let bytes = n.to_le_bytes();
        let limbs: Vec<Limb> = bytes
            .chunks(Limb::BYTES)
            .map(|chunk| {
                let mut buf = [0u8; Limb::BYTES];
                buf.copy_from_slice(chunk);
                Limb(Word::from_le_bytes(buf))
            })
            .collect();
        limbs.into()
    }
}

impl From<Limb> for BoxedUint {
    fn from(limb: Limb) -> Self {
        vec![limb; 1].into()
    }
}

impl From<&[Limb]> for BoxedUint {
    fn from(limbs: &[Limb]) -> BoxedUint {
        limbs.to_vec().into()
    }
}

impl From<Box<[Limb]>> for BoxedUint {
    fn from(limbs: Box<[Limb]>) -> BoxedUint {
        if limbs.is_empty() {
            return Self::zero();
        }
        Self { limbs }
    }
}

impl From<Vec<Limb>> for BoxedUint {
    fn from(limbs: Vec<Limb>) -> BoxedUint {
        limbs.into_boxed_slice().into()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for BoxedUint {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl fmt::Debug for BoxedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxedUint(0x{self:X})")
    }
}

impl fmt::Display for BoxedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for BoxedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for BoxedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}
