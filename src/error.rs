//! Error types.

use core::{convert::Infallible, fmt};

/// Errors that can occur while decoding a big integer from text or bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// Input is empty.
    Empty,

    /// Input contains a character that isn't a hexadecimal digit.
    InvalidDigit,

    /// Input has the wrong length for the target encoding.
    InputSize,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty value provided"),
            Self::InvalidDigit => write!(f, "invalid hexadecimal digit"),
            Self::InputSize => write!(f, "input size is incorrect"),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Errors produced by the squaring engine, computations and their configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Modulus is not an odd integer greater than one.
    #[error("invalid modulus: {0}")]
    InvalidModulus(&'static str),

    /// Value is not a residue of the modulus, i.e. not in `[0, N)`.
    #[error("value is not below the modulus")]
    InvalidResidue,

    /// Encoded residue has the wrong length or contains non-hex characters.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(DecodeError),

    /// Iteration count or input value could not be accepted.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// No modulus is registered under the requested identifier.
    #[error("unknown modulus identifier `{0}`")]
    UnknownModulus(String),

    /// An intermediate value escaped `[0, N)`.
    #[error("arithmetic invariant violated: {0}")]
    ArithmeticFailure(&'static str),

    /// Compute worker could not be started or terminated without reporting.
    #[error("compute backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Computation was cancelled or its deadline expired.
    #[error("computation cancelled")]
    Cancelled,

    /// Configuration parsing failures.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O related failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidModulus(_)
            | Self::InvalidResidue
            | Self::MalformedEncoding(_)
            | Self::InvalidParameters(_)
            | Self::UnknownModulus(_) => ErrorKind::InvalidParameters,
            Self::ArithmeticFailure(_) => ErrorKind::ArithmeticFailure,
            Self::BackendUnavailable(_) => ErrorKind::BackendUnavailable,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Config(_) | Self::Io(_) => ErrorKind::Configuration,
        }
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::MalformedEncoding(err)
    }
}

/// Failure classes a computation can end in.
///
/// Every kind collapses to the same empty-string sentinel at the string boundary; the kind is
/// kept for logging and for callers that use the typed API.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Iteration count, input or modulus rejected before the loop started.
    InvalidParameters,
    /// Internal invariant violation. Fatal, never retried.
    ArithmeticFailure,
    /// The compute worker could not be started or died.
    BackendUnavailable,
    /// Cancelled by the caller or by a deadline.
    Cancelled,
    /// Configuration could not be loaded.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidParameters => "invalid parameters",
            Self::ArithmeticFailure => "arithmetic failure",
            Self::BackendUnavailable => "backend unavailable",
            Self::Cancelled => "cancelled",
            Self::Configuration => "configuration",
        })
    }
}

/// Convenient alias for results throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;
