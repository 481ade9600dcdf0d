//! Modular reduction implementation.

use crate::Limb;
use subtle::{Choice, ConditionallySelectable};

/// Algorithm 14.32 in Handbook of Applied Cryptography
/// <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>
///
/// Computes `x * R^-1 mod modulus` for `x < modulus * R`, writing the fully reduced result
/// (`< modulus`) into `out`. `x` must hold exactly twice as many limbs as `modulus` and is used
/// as scratch space.
pub(crate) fn montgomery_reduction(
    x: &mut [Limb],
    modulus: &[Limb],
    mod_neg_inv: Limb,
    out: &mut [Limb],
) {
    let n = modulus.len();
    debug_assert_eq!(x.len(), n * 2);
    debug_assert_eq!(out.len(), n);

    let mut meta_carry = Limb::ZERO;

    for i in 0..n {
        let u = x[i].wrapping_mul(mod_neg_inv);

        let mut carry = Limb::ZERO;
        for j in 0..n {
            (x[i + j], carry) = x[i + j].mac(u, modulus[j], carry);
        }

        (x[i + n], meta_carry) = x[i + n].carrying_add(carry, meta_carry);
    }

    // Division by R is simply taking the upper half of the limbs. At this point the value is
    // `meta_carry * R + upper < 2 * modulus`, so one conditional subtraction finishes it.
    let (_, upper) = x.split_at(n);
    let mut borrow = Limb::ZERO;
    for j in 0..n {
        (out[j], borrow) = upper[j].borrowing_sub(modulus[j], borrow);
    }

    // Keep the difference if there was a carry out of the top limb or no borrow occurred.
    let keep_upper = !Choice::from((meta_carry.0 & 1) as u8) & Choice::from((borrow.0 & 1) as u8);
    for j in 0..n {
        out[j].conditional_assign(&upper[j], keep_upper);
    }
}
