//! Wrapper type for odd integers.

use crate::{BoxedUint, Limb};
use core::{cmp::Ordering, fmt, ops::Deref};
use subtle::{Choice, ConstantTimeEq, CtOption};

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// Wrapper type for odd integers.
///
/// These are frequently used in cryptography, e.g. as a modulus. Montgomery reduction in
/// particular is only defined for odd moduli, so [`crate::modular::MontyParams`] takes one.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Odd<T>(pub(crate) T);

impl<T> Odd<T> {
    /// Provides access to the contents of [`Odd`].
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl Odd<BoxedUint> {
    /// Create a new odd integer.
    ///
    /// Returns a `CtOption` that is `None` if the provided value is even.
    pub fn new(n: BoxedUint) -> CtOption<Self> {
        let is_odd = n.is_odd();
        CtOption::new(Self(n), is_odd)
    }

    /// Generate a random odd integer with exactly `bit_length` significant bits.
    ///
    /// Both the top and bottom bits are forced, so the result is odd and at least
    /// `2^(bit_length - 1) + 1`. Panics if `bit_length` is zero.
    #[cfg(feature = "rand_core")]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Self {
        assert!(bit_length > 0, "bit length must be non-zero");
        let mut bytes = alloc::vec![0u8; bit_length.div_ceil(8) as usize];
        rng.fill_bytes(&mut bytes);

        let mut ret = BoxedUint::from_be_slice(&bytes);
        let top = bit_length - 1;
        let top_limb = (top / Limb::BITS) as usize;

        // clear everything above the top bit, then force it
        for (i, limb) in ret.limbs.iter_mut().enumerate() {
            if i > top_limb {
                *limb = Limb::ZERO;
            } else if i == top_limb {
                let keep = top % Limb::BITS;
                let mask = if keep + 1 == Limb::BITS {
                    Limb::MAX.0
                } else {
                    (Limb::ONE.0 << (keep + 1)) - 1
                };
                limb.0 = (limb.0 & mask) | (Limb::ONE.0 << keep);
            }
        }
        ret.limbs[0].0 |= 1;

        Odd(ret)
    }
}

impl<T> AsRef<T> for Odd<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> ConstantTimeEq for Odd<T>
where
    T: ConstantTimeEq,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<T> Deref for Odd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl PartialEq<Odd<BoxedUint>> for BoxedUint {
    fn eq(&self, other: &Odd<BoxedUint>) -> bool {
        self.eq(&other.0)
    }
}

impl PartialOrd<Odd<BoxedUint>> for BoxedUint {
    fn partial_cmp(&self, other: &Odd<BoxedUint>) -> Option<Ordering> {
        Some(self.cmp(&other.0))
    }
}

impl<T> fmt::Display for Odd<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T> fmt::LowerHex for Odd<T>
where
    T: fmt::LowerHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Odd;
    use crate::BoxedUint;

    #[test]
    fn not_odd_numbers() {
        assert!(bool::from(Odd::new(BoxedUint::zero()).is_none()));
        assert!(bool::from(Odd::new(BoxedUint::from(2u8)).is_none()));
        assert!(bool::from(Odd::new(BoxedUint::from(220u8)).is_none()));
    }

    #[test]
    fn odd_numbers() {
        assert!(bool::from(Odd::new(BoxedUint::one()).is_some()));
        assert!(bool::from(Odd::new(BoxedUint::from(221u8)).is_some()));
    }

    #[test]
    fn compares_with_inner() {
        let odd = Odd::new(BoxedUint::from(221u8)).unwrap();
        assert!(BoxedUint::from(220u8) < odd);
        assert!(BoxedUint::from(221u8) == odd);
    }

    #[cfg(feature = "rand_core")]
    #[test]
    fn random_has_exact_bit_length() {
        use rand_chacha::ChaCha8Rng;
        use rand_core::SeedableRng;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for bits in [1, 2, 63, 64, 65, 127, 128, 2048] {
            let n = Odd::<BoxedUint>::random(&mut rng, bits);
            assert_eq!(n.bits(), bits, "bits = {bits}");
            assert!(bool::from(n.is_odd()));
        }
    }
}
