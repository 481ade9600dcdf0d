//! Hex and byte encoding for [`BoxedUint`].

use crate::{BoxedUint, DecodeError, Limb, Word};
use alloc::{string::String, vec::Vec};
use core::fmt::Write;

impl BoxedUint {
    /// Create a new [`BoxedUint`] from the provided big endian bytes.
    ///
    /// The result uses as many limbs as needed to hold `bytes.len()` bytes (at least one).
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        let mut ret = Self::zero_with_limbs(bytes.len().div_ceil(Limb::BYTES));

        for (chunk, limb) in bytes.rchunks(Limb::BYTES).zip(ret.limbs.iter_mut()) {
            let mut buf = [0u8; Limb::BYTES];
            buf[Limb::BYTES - chunk.len()..].copy_from_slice(chunk);
            *limb = Limb(Word::from_be_bytes(buf));
        }

        ret
    }

    /// Serialize this [`BoxedUint`] as big-endian, using all limbs of its precision.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.limbs
            .iter()
            .rev()
            .flat_map(|limb| limb.0.to_be_bytes())
            .collect()
    }

    /// Parse a big-endian hexadecimal string of any length.
    ///
    /// Accepts upper and lower case digits and an optional `0x`/`0X` prefix. The result uses as
    /// many limbs as the digits require (at least one).
    pub fn from_be_hex_vartime(hex: &str) -> Result<Self, DecodeError> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex)
            .as_bytes();

        if digits.is_empty() {
            return Err(DecodeError::Empty);
        }

        let mut ret = Self::zero_with_limbs(digits.len().div_ceil(Limb::HEX_DIGITS));

        for (chunk, limb) in digits.rchunks(Limb::HEX_DIGITS).zip(ret.limbs.iter_mut()) {
            let mut word: Word = 0;
            for &c in chunk {
                word = (word << 4) | Word::from(decode_hex_digit(c)?);
            }
            *limb = Limb(word);
        }

        Ok(ret)
    }

    /// Encode as lowercase hexadecimal, left-padded with zeros to exactly `width` characters.
    ///
    /// Returns `None` if the value needs more than `width` digits.
    pub fn to_fixed_hex(&self, width: usize) -> Option<String> {
        if (self.bits() as usize).div_ceil(4) > width {
            return None;
        }

        let mut full = String::with_capacity(self.nlimbs() * Limb::HEX_DIGITS);
        for limb in self.limbs.iter().rev() {
            write!(full, "{limb:x}").ok()?;
        }

        let mut ret = String::with_capacity(width);
        if width >= full.len() {
            ret.extend(core::iter::repeat_n('0', width - full.len()));
            ret.push_str(&full);
        } else {
            // the skipped prefix holds only zero digits, checked above
            ret.push_str(&full[full.len() - width..]);
        }

        Some(ret)
    }
}

/// Decode a single ASCII hex digit.
#[inline]
pub(crate) fn decode_hex_digit(c: u8) -> Result<u8, DecodeError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(DecodeError::InvalidDigit),
    }
}
