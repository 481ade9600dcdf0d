//! Values in Montgomery form over a runtime modulus.

use super::{MontyParams, reduction::montgomery_reduction};
use crate::{
    BoxedUint,
    uint::{mul_into, square_into},
};
use alloc::sync::Arc;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// An integer modulo a runtime modulus, represented in Montgomery form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MontyForm {
    /// Value in the Montgomery domain.
    montgomery_form: BoxedUint,
    /// Montgomery parameters, shared read-only.
    params: Arc<MontyParams>,
}

impl MontyForm {
    /// Instantiates a new [`MontyForm`] that represents `integer` modulo the provided params.
    ///
    /// Returns `None` if `integer` is not already reduced, i.e. not below the modulus.
    pub fn new(integer: &BoxedUint, params: Arc<MontyParams>) -> Option<Self> {
        if integer >= params.modulus() {
            return None;
        }

        let integer = integer.resize(params.nlimbs())?;
        let mut product = BoxedUint::zero_with_limbs(params.nlimbs() * 2);
        mul_into(&mut product.limbs, &integer.limbs, &params.r2.limbs);

        let mut montgomery_form = BoxedUint::zero_with_limbs(params.nlimbs());
        montgomery_reduction(
            &mut product.limbs,
            &params.modulus.limbs,
            params.mod_neg_inv,
            &mut montgomery_form.limbs,
        );

        #[cfg(feature = "zeroize")]
        product.zeroize();

        Some(Self {
            montgomery_form,
            params,
        })
    }

    /// Wrap a value that is already in Montgomery form, e.g. the output of a [`MontySquarer`].
    ///
    /// Returns `None` if the value is not below the modulus.
    pub fn from_montgomery(integer: BoxedUint, params: Arc<MontyParams>) -> Option<Self> {
        if &integer >= params.modulus() {
            return None;
        }

        Some(Self {
            montgomery_form: integer.resize(params.nlimbs())?,
            params,
        })
    }

    /// Retrieves the integer currently encoded in this [`MontyForm`], guaranteed to be reduced.
    pub fn retrieve(&self) -> BoxedUint {
        let n = self.params.nlimbs();
        let mut wide = self.montgomery_form.widen(n * 2);
        let mut ret = BoxedUint::zero_with_limbs(n);
        montgomery_reduction(
            &mut wide.limbs,
            &self.params.modulus.limbs,
            self.params.mod_neg_inv,
            &mut ret.limbs,
        );

        #[cfg(feature = "zeroize")]
        wide.zeroize();

        ret
    }

    /// Computes the (reduced) square of this value.
    pub fn square(&self) -> Self {
        let mut ret = self.clone();
        ret.square_assign();
        ret
    }

    /// Squares this value in place.
    ///
    /// Allocates a scratch buffer per call; loops should use a [`MontySquarer`] instead.
    pub fn square_assign(&mut self) {
        MontySquarer::new(&self.params).square_assign(&mut self.montgomery_form);
    }

    /// Returns the parameter struct used to initialize this value.
    pub fn params(&self) -> &Arc<MontyParams> {
        &self.params
    }

    /// Access the value in Montgomery form.
    pub fn as_montgomery(&self) -> &BoxedUint {
        &self.montgomery_form
    }

    /// Mutably access the value in Montgomery form.
    ///
    /// Callers must keep the value below the modulus.
    pub(crate) fn as_montgomery_mut(&mut self) -> &mut BoxedUint {
        &mut self.montgomery_form
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for MontyForm {
    fn zeroize(&mut self) {
        self.montgomery_form.zeroize();
    }
}

/// Montgomery squarer with a pre-allocated internal buffer to avoid allocations inside a
/// squaring loop.
///
/// Each squarer owns its scratch space, so concurrent computations never share mutable state;
/// only the [`MontyParams`] are shared.
#[derive(Debug)]
pub struct MontySquarer<'a> {
    product: BoxedUint,
    params: &'a MontyParams,
}

impl<'a> MontySquarer<'a> {
    /// Create a new squarer for the given parameters.
    pub fn new(params: &'a MontyParams) -> Self {
        Self {
            product: BoxedUint::zero_with_limbs(params.nlimbs() * 2),
            params,
        }
    }

    /// Square `a` (a value in Montgomery form, below the modulus) in place.
    #[inline]
    pub fn square_assign(&mut self, a: &mut BoxedUint) {
        debug_assert_eq!(a.nlimbs(), self.params.nlimbs());

        square_into(&mut self.product.limbs, &a.limbs);
        montgomery_reduction(
            &mut self.product.limbs,
            &self.params.modulus.limbs,
            self.params.mod_neg_inv,
            &mut a.limbs,
        );
    }
}

#[cfg(feature = "zeroize")]
impl Drop for MontySquarer<'_> {
    fn drop(&mut self) {
        self.product.zeroize();
    }
}
