//! A single sequential-squaring computation: input validation, the iteration loop and the
//! projection of its outcome onto a fixed-width hex string or the empty-string sentinel.

use crate::{
    BoxedUint, Error, ErrorKind, Modulus, Result,
    backend::{Checkpoint, MontgomeryBackend, SquaringBackend},
    engine::encode_fixed_width,
};
use alloc::{string::String, sync::Arc};
use core::{fmt, str::FromStr};
use std::{
    sync::atomic::{AtomicBool, AtomicU8, Ordering},
    time::Instant,
};
use tracing::{debug, info, warn};

/// Number of sequential squarings to perform.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Iterations(u64);

impl Iterations {
    /// No squarings: the result is the normalized input.
    pub const ZERO: Self = Self(0);

    /// Largest accepted base-two logarithm for [`Iterations::from_log2`].
    pub const MAX_LOG2: u32 = 63;

    /// Exactly `count` squarings.
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    /// `2^log2` squarings, i.e. `y = x^(2^(2^log2))`.
    ///
    /// Fails with [`Error::InvalidParameters`] if `log2 > 63`.
    pub fn from_log2(log2: u32) -> Result<Self> {
        if log2 > Self::MAX_LOG2 {
            return Err(Error::InvalidParameters(format!(
                "log2 iteration count {log2} exceeds {}",
                Self::MAX_LOG2
            )));
        }
        Ok(Self(1 << log2))
    }

    /// Number of squarings.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Sum of two counts, `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }
}

impl From<u64> for Iterations {
    fn from(count: u64) -> Self {
        Self(count)
    }
}

impl From<u32> for Iterations {
    fn from(count: u32) -> Self {
        Self(count.into())
    }
}

impl TryFrom<i64> for Iterations {
    type Error = Error;

    fn try_from(count: i64) -> Result<Self> {
        u64::try_from(count)
            .map(Self)
            .map_err(|_| Error::InvalidParameters(format!("negative iteration count {count}")))
    }
}

impl TryFrom<&str> for Iterations {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for Iterations {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(count) = s.parse::<u64>() {
            return Ok(Self(count));
        }

        match s.parse::<i128>() {
            Ok(count) if count < 0 => Err(Error::InvalidParameters(format!(
                "negative iteration count {count}"
            ))),
            _ => Err(Error::InvalidParameters(format!(
                "iteration count `{s}` is not a non-negative integer"
            ))),
        }
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Input value `x`, before it is reduced modulo `N`.
///
/// Text inputs are big-endian hexadecimal with an optional `0x` prefix, e.g. a hash digest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResidueInput {
    /// Hexadecimal text, not yet parsed.
    Hex(String),
    /// An integer of any size.
    Integer(BoxedUint),
}

impl ResidueInput {
    /// Parse (if needed) and reduce into `[0, N)`.
    ///
    /// Values at or above the modulus are reduced, not rejected.
    pub fn resolve(&self, modulus: &Modulus) -> Result<BoxedUint> {
        match self {
            Self::Hex(hex) => {
                let x = BoxedUint::from_be_hex_vartime(hex.trim()).map_err(|err| {
                    Error::InvalidParameters(format!("input is not a hex integer: {err}"))
                })?;
                Ok(modulus.reduce(&x))
            }
            Self::Integer(x) => Ok(modulus.reduce(x)),
        }
    }
}

impl From<&str> for ResidueInput {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.into())
    }
}

impl From<String> for ResidueInput {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

impl From<u64> for ResidueInput {
    fn from(x: u64) -> Self {
        Self::Integer(x.into())
    }
}

impl From<BoxedUint> for ResidueInput {
    fn from(x: BoxedUint) -> Self {
        Self::Integer(x)
    }
}

impl From<&BoxedUint> for ResidueInput {
    fn from(x: &BoxedUint) -> Self {
        Self::Integer(x.clone())
    }
}

/// Cooperative cancellation flag, observed by the squaring loop at step boundaries.
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Has cancellation been requested?
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Lifecycle of a computation: `Created -> Running -> {Completed | Failed | Cancelled}`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum ComputationState {
    /// Accepted but not yet started.
    Created = 0,
    /// The squaring loop is running.
    Running = 1,
    /// Finished with a result.
    Completed = 2,
    /// Finished with a failure other than cancellation.
    Failed = 3,
    /// Stopped at a step boundary by cancellation or a deadline.
    Cancelled = 4,
}

impl ComputationState {
    /// Is this a final state?
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Created,
            1 => Self::Running,
            2 => Self::Completed,
            3 => Self::Failed,
            _ => Self::Cancelled,
        }
    }
}

/// State shared between a running computation and its handle.
#[derive(Clone, Debug)]
pub(crate) struct SharedState(Arc<AtomicU8>);

impl SharedState {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicU8::new(ComputationState::Created as u8)))
    }

    pub(crate) fn get(&self) -> ComputationState {
        ComputationState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn set(&self, state: ComputationState) {
        self.0.store(state as u8, Ordering::Release);
    }
}

/// Outcome of a computation.
///
/// Internally typed; [`ComputationResult::into_sentinel`] collapses it to the string contract,
/// where the empty string signals failure and never collides with a valid encoding.
#[derive(Debug)]
pub struct ComputationResult {
    outcome: Result<String>,
}

impl ComputationResult {
    pub(crate) fn failure(err: Error) -> Self {
        Self { outcome: Err(err) }
    }

    /// Did the computation produce a result?
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The encoded result, if the computation succeeded.
    pub fn as_hex(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    /// The failure, if the computation did not succeed.
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }

    /// The failure class, if the computation did not succeed.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.error().map(Error::kind)
    }

    /// Terminal state corresponding to this outcome.
    pub fn state(&self) -> ComputationState {
        match self.kind() {
            None => ComputationState::Completed,
            Some(ErrorKind::Cancelled) => ComputationState::Cancelled,
            Some(_) => ComputationState::Failed,
        }
    }

    /// The typed outcome.
    pub fn into_result(self) -> Result<String> {
        self.outcome
    }

    /// The encoded result, or the empty string on any failure.
    pub fn into_sentinel(self) -> String {
        self.outcome.unwrap_or_default()
    }
}

impl From<Result<String>> for ComputationResult {
    fn from(outcome: Result<String>) -> Self {
        Self { outcome }
    }
}

/// Compute `x^(2^t) mod N` with the [`MontgomeryBackend`], without cancellation or deadline.
///
/// `t` may be anything convertible to [`Iterations`]: integers, or strings holding a decimal
/// count. Negative or unparseable counts, unparseable inputs and every other failure produce a
/// failed [`ComputationResult`]; this function never panics on bad input.
pub fn compute<T, X>(t: T, x: X, modulus: &Modulus) -> ComputationResult
where
    T: TryInto<Iterations>,
    T::Error: Into<Error>,
    X: Into<ResidueInput>,
{
    compute_with(t, x, modulus, &MontgomeryBackend, &CancelToken::new(), None)
}

/// Compute `x^(2^t) mod N` with the given backend, cancellation token and optional deadline.
///
/// Cancellation and the deadline are observed between squarings; either ends the computation
/// with [`Error::Cancelled`].
pub fn compute_with<T, X>(
    t: T,
    x: X,
    modulus: &Modulus,
    backend: &dyn SquaringBackend,
    cancel: &CancelToken,
    deadline: Option<Instant>,
) -> ComputationResult
where
    T: TryInto<Iterations>,
    T::Error: Into<Error>,
    X: Into<ResidueInput>,
{
    let outcome = prepare(t, x, modulus).and_then(|(t, start)| {
        run(t, &start, modulus, backend, &Checkpoint::new(cancel, deadline))
    });

    if let Err(err) = &outcome {
        log_failure(err);
    }

    outcome.into()
}

/// Validate the iteration count and reduce the input.
pub(crate) fn prepare<T, X>(t: T, x: X, modulus: &Modulus) -> Result<(Iterations, BoxedUint)>
where
    T: TryInto<Iterations>,
    T::Error: Into<Error>,
    X: Into<ResidueInput>,
{
    let t = iterations(t)?;
    let start = x.into().resolve(modulus)?;
    Ok((t, start))
}

/// Validate the iteration count alone.
pub(crate) fn iterations<T>(t: T) -> Result<Iterations>
where
    T: TryInto<Iterations>,
    T::Error: Into<Error>,
{
    t.try_into().map_err(Into::<Error>::into)
}

/// Run the loop on an already validated, reduced start value.
pub(crate) fn run(
    t: Iterations,
    start: &BoxedUint,
    modulus: &Modulus,
    backend: &dyn SquaringBackend,
    checkpoint: &Checkpoint<'_>,
) -> Result<String> {
    debug!(
        iterations = t.get(),
        modulus_bits = modulus.bits(),
        backend = %backend.kind(),
        "starting sequential squaring"
    );

    let started = Instant::now();
    let y = backend.square_repeated(start, t.get(), modulus, checkpoint)?;

    if !modulus.contains(&y) {
        return Err(Error::ArithmeticFailure("result is not below the modulus"));
    }

    let encoded = encode_fixed_width(&y, modulus)?;
    let elapsed = started.elapsed();
    info!(
        iterations = t.get(),
        elapsed_ms = elapsed.as_millis() as u64,
        squarings_per_sec = rate(t.get(), elapsed.as_secs_f64()),
        "sequential squaring completed"
    );

    Ok(encoded)
}

/// Log a failure on the secondary diagnostic channel.
pub(crate) fn log_failure(err: &Error) {
    match err.kind() {
        ErrorKind::Cancelled => debug!("computation cancelled"),
        kind => warn!(%kind, error = %err, "computation failed"),
    }
}

fn rate(iterations: u64, secs: f64) -> f64 {
    if secs > 0.0 {
        iterations as f64 / secs
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CancelToken, ComputationResult, ComputationState, Iterations, ResidueInput, SharedState,
        compute, compute_with,
    };
    use crate::{BoxedUint, DirectBackend, Error, ErrorKind, Modulus};

    fn n221() -> Modulus {
        Modulus::new(BoxedUint::from(221u8)).unwrap()
    }

    #[test]
    fn five_to_the_eighth() {
        assert_eq!(compute(3u64, 5u64, &n221()).into_sentinel(), "76");
        assert_eq!(compute("3", "5", &n221()).into_sentinel(), "76");
    }

    #[test]
    fn zero_iterations_reduces_input() {
        assert_eq!(compute(0u64, 226u64, &n221()).into_sentinel(), "05");
        assert_eq!(compute(0u64, "0xDC", &n221()).into_sentinel(), "dc");
    }

    #[test]
    fn invalid_parameters() {
        let n = n221();
        for result in [
            compute(-1i64, 5u64, &n),
            compute("ten", 5u64, &n),
            compute("-3", 5u64, &n),
            compute(3u64, "-5", &n),
            compute(3u64, "xyz", &n),
            compute(3u64, "", &n),
        ] {
            assert_eq!(result.kind(), Some(ErrorKind::InvalidParameters));
            assert_eq!(result.state(), ComputationState::Failed);
            assert_eq!(result.into_sentinel(), "");
        }
    }

    #[test]
    fn cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let result = compute_with(10u64, 5u64, &n221(), &DirectBackend, &token, None);
        assert!(matches!(result.error(), Some(Error::Cancelled)));
        assert_eq!(result.state(), ComputationState::Cancelled);
    }

    #[test]
    fn iterations_parsing() {
        assert_eq!("42".parse::<Iterations>().unwrap(), Iterations::new(42));
        assert_eq!(" 7 ".parse::<Iterations>().unwrap().get(), 7);
        assert!("1e3".parse::<Iterations>().is_err());
        assert!(Iterations::try_from(-1i64).is_err());
        assert_eq!(Iterations::from_log2(20).unwrap().get(), 1 << 20);
        assert_eq!(Iterations::from_log2(63).unwrap().get(), 1 << 63);
        assert!(Iterations::from_log2(64).is_err());
        assert_eq!(Iterations::new(u64::MAX).checked_add(Iterations::new(1)), None);
    }

    #[test]
    fn residue_input_reduces() {
        let n = n221();
        assert_eq!(
            ResidueInput::from("0x1bb").resolve(&n).unwrap(),
            BoxedUint::one()
        );
        assert_eq!(
            ResidueInput::from(BoxedUint::from(u128::MAX)).resolve(&n).unwrap(),
            BoxedUint::from(u128::MAX % 221)
        );
    }

    #[test]
    fn sentinel_projection() {
        let ok = ComputationResult::from(Ok("00ff".to_string()));
        assert!(ok.is_success());
        assert_eq!(ok.as_hex(), Some("00ff"));
        assert_eq!(ok.state(), ComputationState::Completed);

        let failed = ComputationResult::failure(Error::ArithmeticFailure("test"));
        assert_eq!(failed.kind(), Some(ErrorKind::ArithmeticFailure));
        assert_eq!(failed.into_sentinel(), "");
    }

    #[test]
    fn shared_state_round_trips() {
        let state = SharedState::new();
        assert_eq!(state.get(), ComputationState::Created);
        for s in [
            ComputationState::Running,
            ComputationState::Completed,
            ComputationState::Failed,
            ComputationState::Cancelled,
        ] {
            state.set(s);
            assert_eq!(state.get(), s);
        }
        assert!(!ComputationState::Running.is_terminal());
    }
}
