//! Squaring backends: strategies for running `t` sequential squarings.
//!
//! A backend owns the inner loop. It checks the [`Checkpoint`] at every step boundary and
//! keeps all mutable state local to the call, so one backend value can serve any number of
//! concurrent computations.

use crate::{
    BoxedUint, CancelToken, Error, Modulus, Result, engine::square_mod,
    modular::{MontyForm, MontySquarer},
};
use alloc::sync::Arc;
use core::fmt;
use serde::Deserialize;
use std::time::Instant;
use tracing::debug;

/// Step-boundary interruption check: caller cancellation and an optional deadline.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint<'a> {
    cancel: &'a CancelToken,
    deadline: Option<Instant>,
}

impl<'a> Checkpoint<'a> {
    /// Create a checkpoint observing `cancel` and, if given, `deadline`.
    pub fn new(cancel: &'a CancelToken, deadline: Option<Instant>) -> Self {
        Self { cancel, deadline }
    }

    /// Returns [`Error::Cancelled`] if the token was cancelled or the deadline has passed.
    #[inline]
    pub fn check(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            debug!("cancellation observed at step boundary");
            return Err(Error::Cancelled);
        }

        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                debug!("deadline expired at step boundary");
                return Err(Error::Cancelled);
            }
        }

        Ok(())
    }
}

/// A strategy for computing `start^(2^iterations) mod N` one squaring at a time.
///
/// Implementations must perform exactly `iterations` sequential squarings, must not share
/// mutable state between calls, and must call [`Checkpoint::check`] before every step.
pub trait SquaringBackend: Send + Sync + fmt::Debug {
    /// Which kind of backend this is, for logging.
    fn kind(&self) -> BackendKind;

    /// Square `start` (a residue of `modulus`) `iterations` times.
    fn square_repeated(
        &self,
        start: &BoxedUint,
        iterations: u64,
        modulus: &Modulus,
        checkpoint: &Checkpoint<'_>,
    ) -> Result<BoxedUint>;
}

/// Available [`SquaringBackend`] implementations.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// [`MontgomeryBackend`].
    #[default]
    Montgomery,
    /// [`DirectBackend`].
    Direct,
}

impl BackendKind {
    /// Instantiate the backend of this kind.
    pub fn backend(self) -> Arc<dyn SquaringBackend> {
        match self {
            Self::Montgomery => Arc::new(MontgomeryBackend),
            Self::Direct => Arc::new(DirectBackend),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Montgomery => "montgomery",
            Self::Direct => "direct",
        })
    }
}

/// Squares in Montgomery form: one squaring kernel plus one reduction per step, with a single
/// scratch buffer allocated up front.
#[derive(Clone, Copy, Debug, Default)]
pub struct MontgomeryBackend;

impl SquaringBackend for MontgomeryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Montgomery
    }

    fn square_repeated(
        &self,
        start: &BoxedUint,
        iterations: u64,
        modulus: &Modulus,
        checkpoint: &Checkpoint<'_>,
    ) -> Result<BoxedUint> {
        let params = modulus.params();
        let mut form = MontyForm::new(start, params.clone()).ok_or(Error::InvalidResidue)?;
        let mut squarer = MontySquarer::new(params);

        for _ in 0..iterations {
            checkpoint.check()?;
            squarer.square_assign(form.as_montgomery_mut());
        }

        Ok(form.retrieve())
    }
}

/// Squares with the literal multiply-then-divide primitive, [`square_mod`].
///
/// Much slower than [`MontgomeryBackend`]; useful as a cross-check.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectBackend;

impl SquaringBackend for DirectBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Direct
    }

    fn square_repeated(
        &self,
        start: &BoxedUint,
        iterations: u64,
        modulus: &Modulus,
        checkpoint: &Checkpoint<'_>,
    ) -> Result<BoxedUint> {
        if !modulus.contains(start) {
            return Err(Error::InvalidResidue);
        }

        let mut y = modulus.reduce(start);
        for _ in 0..iterations {
            checkpoint.check()?;
            y = square_mod(&y, modulus)?;
        }

        Ok(y)
    }
}
