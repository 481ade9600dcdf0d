//! Modular arithmetic support.
//!
//! This module provides support for Montgomery form arithmetic over a modulus whose size and
//! value are chosen at runtime. Values are stored as `a * R mod N` with `R = 2^(W * limbs)`,
//! so a modular squaring costs one wide multiplication plus one Montgomery reduction and never
//! needs a division.
//!
//! [`MontyParams`] holds the values precomputed from the modulus and is meant to be shared
//! (e.g. behind an `Arc`) by every computation using that modulus. [`MontyForm`] pairs a value
//! with its parameters; [`MontySquarer`] owns the scratch buffer for an in-place squaring loop.

mod monty_form;
mod params;
mod reduction;

pub use self::{
    monty_form::{MontyForm, MontySquarer},
    params::MontyParams,
};
