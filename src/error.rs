//! Error type shared by every transform entry point.

/// Errors reported by the transform engines.
///
/// Every variant is detected synchronously at the point of failure and
/// returned to the immediate caller; no partial result is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// A transform length (or a 2D dimension) of zero.
    InvalidSize { size: usize },
    /// Complex division by a value whose squared modulus is within tolerance of zero.
    DivisionByZero,
    /// A requested or padded length exceeds the configured limit, `usize`, or the allocator.
    SizeOverflow { requested: usize, limit: usize },
    /// Buffer length disagrees with the dimensions it was passed with.
    MismatchedLengths { expected: usize, actual: usize },
    /// The radix-2 engine was handed a length that is not a power of two.
    NotPowerOfTwo { size: usize },
    /// A tolerance outside `[0, 1)`.
    InvalidTolerance,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidSize { size } => {
                write!(f, "invalid transform size {size}: must be greater than zero")
            }
            FftError::DivisionByZero => write!(f, "complex division by a near-zero value"),
            FftError::SizeOverflow { requested, limit } => write!(
                f,
                "transform length {requested} exceeds the supported limit of {limit} points"
            ),
            FftError::MismatchedLengths { expected, actual } => {
                write!(f, "buffer length mismatch: expected {expected}, got {actual}")
            }
            FftError::NotPowerOfTwo { size } => {
                write!(f, "radix-2 transform requires a power-of-two length, got {size}")
            }
            FftError::InvalidTolerance => write!(f, "tolerance must lie in [0, 1)"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
