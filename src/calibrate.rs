//! Delay calibration: measure squaring throughput and translate a wall-clock delay target into
//! an iteration count.

use crate::{
    BoxedUint, CancelToken, Error, Iterations, Modulus, Result,
    backend::{Checkpoint, MontgomeryBackend, SquaringBackend},
};
use std::time::{Duration, Instant};
use tracing::trace;

/// Measured squaring throughput for one modulus on the current machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calibration {
    squarings_per_sec: f64,
}

impl Calibration {
    /// Time `sample_iterations` squarings with the [`MontgomeryBackend`].
    pub fn measure(modulus: &Modulus, sample_iterations: u64) -> Result<Self> {
        Self::measure_with(&MontgomeryBackend, modulus, sample_iterations)
    }

    /// Time `sample_iterations` squarings with the given backend.
    pub fn measure_with(
        backend: &dyn SquaringBackend,
        modulus: &Modulus,
        sample_iterations: u64,
    ) -> Result<Self> {
        if sample_iterations == 0 {
            return Err(Error::InvalidParameters(
                "calibration needs at least one squaring".into(),
            ));
        }

        // any value whose square is not trivially small
        let start = modulus.reduce(&BoxedUint::from(u128::MAX));
        let cancel = CancelToken::new();
        let checkpoint = Checkpoint::new(&cancel, None);

        let started = Instant::now();
        backend.square_repeated(&start, sample_iterations, modulus, &checkpoint)?;
        let elapsed = started.elapsed();

        trace!(
            sample_iterations,
            elapsed_us = elapsed.as_micros() as u64,
            modulus_bits = modulus.bits(),
            "calibration sample"
        );

        // guard against timers too coarse to see the sample
        let secs = elapsed.as_secs_f64().max(1e-9);
        Self::from_rate(sample_iterations as f64 / secs)
    }

    /// A calibration with a known throughput.
    pub fn from_rate(squarings_per_sec: f64) -> Result<Self> {
        if !squarings_per_sec.is_finite() || squarings_per_sec <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "squaring rate {squarings_per_sec} must be positive and finite"
            )));
        }
        Ok(Self { squarings_per_sec })
    }

    /// Measured throughput.
    pub fn squarings_per_sec(&self) -> f64 {
        self.squarings_per_sec
    }

    /// Squarings that fit in `delay`, rounded down.
    pub fn iterations_for(&self, delay: Duration) -> Iterations {
        // float-to-int `as` saturates
        Iterations::new((self.squarings_per_sec * delay.as_secs_f64()) as u64)
    }

    /// Smallest `k` such that `2^k` squarings take at least `delay`, capped at
    /// [`Iterations::MAX_LOG2`]. Pair with [`Iterations::from_log2`].
    pub fn log2_iterations_for(&self, delay: Duration) -> u32 {
        let target = self.iterations_for(delay).get();
        if target <= 1 {
            return 0;
        }
        let log2 = u64::BITS - (target - 1).leading_zeros();
        log2.min(Iterations::MAX_LOG2)
    }

    /// Expected wall-clock time for `iterations` squarings.
    pub fn estimate(&self, iterations: Iterations) -> Duration {
        Duration::try_from_secs_f64(iterations.get() as f64 / self.squarings_per_sec)
            .unwrap_or(Duration::MAX)
    }
}
