//! Sequential-squaring verifiable delay function engine.
//!
//! # About
//! Computes `y = x^(2^t) mod N` by performing `t` strictly sequential modular squarings, and
//! encodes `y` as lowercase hexadecimal left-padded to the width of `N`. Any failure projects to
//! the empty string, which never collides with a valid encoding.
//!
//! The arithmetic works over heap-allocated integers whose width is chosen at runtime, so the
//! same build handles whatever modulus is configured. Squaring runs in Montgomery form with a
//! dedicated squaring kernel and a scratch buffer allocated once per computation.
//!
//! # Usage
//! ```
//! use sqr_vdf::{BoxedUint, Modulus, compute};
//!
//! let n = Modulus::new(BoxedUint::from(221u8))?;
//! // 5^(2^3) = 390625 = 118 mod 221
//! assert_eq!(compute(3u64, 5u64, &n).into_sentinel(), "76");
//!
//! // failures collapse to the empty string
//! assert_eq!(compute(-1i64, 5u64, &n).into_sentinel(), "");
//! # Ok::<(), sqr_vdf::Error>(())
//! ```
//!
//! Long computations are submitted to a [`Prover`], which runs each on a worker thread and
//! returns a cancellable [`ComputationHandle`] that resolves as a future.
//!
//! # Logging
//! Events are emitted through [`tracing`]; installing a subscriber is left to the application.
//!
//! # Status
//! Squaring is not constant-time with respect to the modulus width, and the reduction into
//! `[0, N)` of inputs and results is variable-time. None of the values involved are secret.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

pub mod modular;

mod backend;
mod calibrate;
mod computation;
mod config;
mod engine;
mod error;
mod limb;
mod odd;
mod primitives;
mod prover;
mod uint;

pub use crate::{
    backend::{BackendKind, Checkpoint, DirectBackend, MontgomeryBackend, SquaringBackend},
    calibrate::Calibration,
    computation::{
        CancelToken, ComputationResult, ComputationState, Iterations, ResidueInput, compute,
        compute_with,
    },
    config::{ModulusConfig, ModulusRegistry, ProverConfig},
    engine::{Modulus, decode, encode_fixed_width, square_mod},
    error::{DecodeError, Error, ErrorKind, Result},
    limb::{Limb, WideWord, Word, nlimbs},
    odd::Odd,
    prover::{ComputationHandle, Prover},
    uint::BoxedUint,
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
