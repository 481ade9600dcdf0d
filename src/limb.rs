//! Big integers are represented as an array of smaller CPU word-size integers
//! called "limbs".

mod add;
mod cmp;
mod mul;
mod sub;

use core::fmt;
use subtle::{Choice, ConditionallySelectable};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

/// Inner integer type that the [`Limb`] newtype wraps.
#[cfg(target_pointer_width = "32")]
pub type Word = u32;

/// Unsigned wide integer type: double the width of [`Word`].
#[cfg(target_pointer_width = "32")]
pub type WideWord = u64;

/// Inner integer type that the [`Limb`] newtype wraps.
#[cfg(target_pointer_width = "64")]
pub type Word = u64;

/// Unsigned wide integer type: double the width of [`Word`].
#[cfg(target_pointer_width = "64")]
pub type WideWord = u128;

/// Calculate the number of limbs required to represent the given number of bits.
#[inline(always)]
pub const fn nlimbs(bits: u32) -> usize {
    bits.div_ceil(Limb::BITS) as usize
}

/// Big integers are represented as an array/vector of smaller CPU word-size integers called
/// "limbs".
///
/// The [`Limb`] type uses a 32-bit or 64-bit saturated representation, depending on the target.
/// All bits of an inner [`Word`] are used to represent larger big integer types.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = (Word::BITS / 8) as usize;

    /// Number of hex characters needed to print one limb.
    pub(crate) const HEX_DIGITS: usize = Self::BYTES * 2;

    /// Is this limb equal to [`Limb::ZERO`]?
    #[inline]
    pub fn is_zero(&self) -> Choice {
        Choice::from((self.0 == 0) as u8)
    }

    /// Is the least significant bit set?
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0 & 1) as u8)
    }

    /// Number of significant bits in this limb.
    #[inline]
    pub const fn bits(self) -> u32 {
        Self::BITS - self.0.leading_zeros()
    }

    /// Compute `-self^-1 mod 2^BITS` for an odd limb.
    ///
    /// Uses Newton iteration: every step doubles the number of correct low bits, starting from
    /// the 3 bits given by `x = self` (since `self * self = 1 mod 8` for odd `self`).
    pub(crate) const fn neg_inv_mod_word(self) -> Self {
        debug_assert!(self.0 & 1 == 1);
        let a = self.0;
        let mut x = a;
        let mut correct_bits = 3;
        while correct_bits < Word::BITS {
            x = x.wrapping_mul(Word::wrapping_sub(2, a.wrapping_mul(x)));
            correct_bits *= 2;
        }
        Limb(x.wrapping_neg())
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Word::conditional_select(&a.0, &b.0, choice))
    }
}

impl From<u8> for Limb {
    #[inline]
    fn from(n: u8) -> Limb {
        Limb(n.into())
    }
}

impl From<u32> for Limb {
    #[inline]
    fn from(n: u32) -> Limb {
        Limb(n.into())
    }
}

impl From<Limb> for Word {
    #[inline]
    fn from(limb: Limb) -> Word {
        limb.0
    }
}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for Limb {}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", &self.0, width = Self::HEX_DIGITS)
    }
}

impl fmt::UpperHex for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$X}", &self.0, width = Self::HEX_DIGITS)
    }
}
