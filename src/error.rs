/// Errors reported by the transform and the decomposition algebra.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum FftError {
    /// Vector length is zero, odd where an even length is required,
    /// or not a power of two where the transform requires one.
    InvalidLength(usize),
    /// The two vectors of a combine have different lengths.
    LengthMismatch {
        /// Length of the destination vector.
        left: usize,
        /// Length of the source vector.
        right: usize,
    },
    /// The two views passed to `concatenate` are not adjacent in memory.
    NotContiguous,
    /// A block position at or past the total block count.
    BlockOutOfRange {
        /// The offending block position.
        position: usize,
        /// The total block count.
        count: usize,
    },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "Invalid vector length: {len}"),
            Self::LengthMismatch { left, right } => {
                write!(f, "Vector lengths differ: {left} vs {right}")
            }
            Self::NotContiguous => write!(f, "Views are not contiguous in memory"),
            Self::BlockOutOfRange { position, count } => {
                write!(f, "Block position {position} out of range for {count} blocks")
            }
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for FftError {}
