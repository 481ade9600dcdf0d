//! The squaring engine: a validated modulus, the modular-squaring primitive and the fixed-width
//! residue encoding.

use crate::{BoxedUint, DecodeError, Error, Odd, Result, modular::MontyParams};
use alloc::{string::String, sync::Arc};
use core::fmt;

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// An odd modulus `N > 1` together with its precomputed Montgomery parameters.
///
/// A [`Modulus`] is immutable once built and is meant to be shared read-only (through an
/// [`Arc`]) by every computation that uses it.
#[derive(Clone, Eq, PartialEq)]
pub struct Modulus {
    params: Arc<MontyParams>,
    bits: u32,
}

impl Modulus {
    /// Validate `n` and precompute everything needed to square modulo it.
    ///
    /// Fails with [`Error::InvalidModulus`] if `n <= 1` or `n` is even.
    pub fn new(n: BoxedUint) -> Result<Self> {
        if n.bits() <= 1 {
            return Err(Error::InvalidModulus("modulus must be greater than one"));
        }

        let n = Option::<Odd<BoxedUint>>::from(Odd::new(n))
            .ok_or(Error::InvalidModulus("modulus must be odd"))?;
        let bits = n.bits();

        Ok(Self {
            params: Arc::new(MontyParams::new(n)),
            bits,
        })
    }

    /// Parse a big-endian hexadecimal modulus (optional `0x` prefix, any case).
    pub fn from_be_hex(hex: &str) -> Result<Self> {
        Self::new(BoxedUint::from_be_hex_vartime(hex)?)
    }

    /// Build a modulus from big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::MalformedEncoding(DecodeError::Empty));
        }
        Self::new(BoxedUint::from_be_slice(bytes))
    }

    /// The modulus value.
    pub fn value(&self) -> &Odd<BoxedUint> {
        self.params.modulus()
    }

    /// Number of significant bits in the modulus.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Length of every encoded residue: `ceil(bits / 4)` hex characters.
    pub fn hex_width(&self) -> usize {
        self.bits.div_ceil(4) as usize
    }

    /// Number of limbs used by every residue of this modulus.
    pub fn nlimbs(&self) -> usize {
        self.params.nlimbs()
    }

    /// Montgomery parameters for this modulus.
    pub fn params(&self) -> &Arc<MontyParams> {
        &self.params
    }

    /// Is `value` a residue of this modulus, i.e. in `[0, N)`?
    pub fn contains(&self, value: &BoxedUint) -> bool {
        value < self.value()
    }

    /// Reduce an arbitrary non-negative integer into `[0, N)`.
    ///
    /// The result always uses [`Modulus::nlimbs`] limbs.
    pub fn reduce(&self, value: &BoxedUint) -> BoxedUint {
        value.rem_vartime(self.value())
    }

    /// Generate a uniformly random residue, e.g. a fresh challenge input.
    #[cfg(feature = "rand_core")]
    pub fn random_residue<R: RngCore + ?Sized>(&self, rng: &mut R) -> BoxedUint {
        BoxedUint::random_below(rng, self.value())
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modulus")
            .field("bits", &self.bits)
            .field("value", self.value())
            .finish()
    }
}

/// Compute `value^2 mod N` for a residue `value`.
///
/// This is the literal multiply-then-reduce path. Out-of-range input is rejected with
/// [`Error::InvalidResidue`], never wrapped.
pub fn square_mod(value: &BoxedUint, modulus: &Modulus) -> Result<BoxedUint> {
    if !modulus.contains(value) {
        return Err(Error::InvalidResidue);
    }

    Ok(value.square_wide().rem_vartime(modulus.value()))
}

/// Encode a residue as lowercase hex, left-padded with zeros to [`Modulus::hex_width`]
/// characters.
pub fn encode_fixed_width(residue: &BoxedUint, modulus: &Modulus) -> Result<String> {
    if !modulus.contains(residue) {
        return Err(Error::InvalidResidue);
    }

    residue
        .to_fixed_hex(modulus.hex_width())
        .ok_or(Error::InvalidResidue)
}

/// Decode a fixed-width hex string produced by [`encode_fixed_width`].
///
/// The string must be exactly [`Modulus::hex_width`] hex digits (either case, no prefix).
/// A well-formed string whose value is not below the modulus is rejected with
/// [`Error::InvalidResidue`].
pub fn decode(encoded: &str, modulus: &Modulus) -> Result<BoxedUint> {
    if encoded.len() != modulus.hex_width() {
        return Err(Error::MalformedEncoding(DecodeError::InputSize));
    }
    if !encoded.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::MalformedEncoding(DecodeError::InvalidDigit));
    }

    let value = BoxedUint::from_be_hex_vartime(encoded)?;
    if !modulus.contains(&value) {
        return Err(Error::InvalidResidue);
    }

    value.resize(modulus.nlimbs()).ok_or(Error::InvalidResidue)
}
