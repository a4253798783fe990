//! Conversion and layout helpers at the crate boundary.

use bytemuck::cast_slice;
use num_complex::Complex32;

use crate::error::FftError;

/// Reinterprets a flat buffer of `(re, im)` float pairs as a complex vector
/// without copying.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `pairs` holds an odd number of
/// floats.
pub fn complex_from_pairs(pairs: &[f32]) -> Result<&[Complex32], FftError> {
    if pairs.len() % 2 != 0 {
        return Err(FftError::InvalidLength(pairs.len()));
    }
    Ok(cast_slice(pairs))
}

/// Mutable variant of [`complex_from_pairs`], for transforming a pair buffer
/// in place.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if `pairs` holds an odd number of
/// floats.
pub fn complex_from_pairs_mut(pairs: &mut [f32]) -> Result<&mut [Complex32], FftError> {
    if pairs.len() % 2 != 0 {
        return Err(FftError::InvalidLength(pairs.len()));
    }
    Ok(bytemuck::cast_slice_mut(pairs))
}

/// Reinterprets a complex vector as its flat `(re, im)` pair buffer, in
/// index order, without copying.
pub fn pairs_from_complex(signal: &[Complex32]) -> &[f32] {
    cast_slice(signal)
}

/// Separates a signal like `[z0, z1, z2, z3]` into `([z0, z2], [z1, z3])`.
///
/// This is the layout conversion between natural order and the decimated
/// order in which the contiguous halves of a buffer are the even- and
/// odd-indexed subsequences of the original signal. A trailing element of an
/// odd-length signal belongs to neither subsequence and is dropped.
pub fn deinterleave(signal: &[Complex32]) -> (Vec<Complex32>, Vec<Complex32>) {
    signal.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Inverse of [`deinterleave`]: merges the even- and odd-indexed
/// subsequences back into a single natural-order signal.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if the two subsequences differ in
/// length.
pub fn interleave(evens: &[Complex32], odds: &[Complex32]) -> Result<Vec<Complex32>, FftError> {
    if evens.len() != odds.len() {
        return Err(FftError::LengthMismatch {
            left: evens.len(),
            right: odds.len(),
        });
    }

    Ok(evens
        .iter()
        .zip(odds.iter())
        .flat_map(|(even, odd)| [*even, *odd])
        .collect())
}
