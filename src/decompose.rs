//! The decomposition algebra: split, concatenate, and the elementwise
//! combine operators that let a length-N transform be evaluated as a tree of
//! independent half-length sub-problems.
//!
//! All operations here are pure aside from the stated in-place mutation, so
//! an external scheduler may run sibling sub-blocks concurrently: the two
//! views produced by [`split`] never overlap, which the borrow checker
//! enforces.

use num_complex::Complex32;

use crate::error::FftError;
use crate::twiddles::twiddle;
use crate::utils::deinterleave;

/// Splits a vector into non-overlapping views of its first and second
/// halves, in order, without copying. Together the two views cover exactly
/// the parent's range.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the length is zero or odd.
pub fn split(vector: &mut [Complex32]) -> Result<(&mut [Complex32], &mut [Complex32]), FftError> {
    let n = vector.len();
    if n == 0 || n % 2 != 0 {
        return Err(FftError::InvalidLength(n));
    }

    Ok(vector.split_at_mut(n / 2))
}

/// Rebuilds the spanning view over two halves of the same backing storage,
/// with `left` immediately followed by `right`. The inverse of [`split`].
///
/// # Errors
///
/// Returns [`FftError::NotContiguous`] if `right` does not begin exactly
/// where `left` ends.
pub fn concatenate<'a>(
    left: &'a mut [Complex32],
    right: &'a mut [Complex32],
) -> Result<&'a mut [Complex32], FftError> {
    if !std::ptr::eq(left.as_ptr().wrapping_add(left.len()), right.as_ptr()) {
        return Err(FftError::NotContiguous);
    }

    let len = left.len() + right.len();
    // SAFETY: `right` starts one-past-the-end of `left`, so the two
    // exclusive borrows cover a single contiguous region; both are consumed
    // here for the lifetime of the result.
    Ok(unsafe { std::slice::from_raw_parts_mut(left.as_mut_ptr(), len) })
}

/// Elementwise complex addition of `b` into `a`.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if the lengths differ; neither
/// vector is touched in that case.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn combine_add(a: &mut [Complex32], b: &[Complex32]) -> Result<(), FftError> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    a.iter_mut().zip(b.iter()).for_each(|(x, y)| *x += *y);
    Ok(())
}

/// Elementwise complex subtraction of `b` from `a`, into `a`.
///
/// # Errors
///
/// Returns [`FftError::LengthMismatch`] if the lengths differ; neither
/// vector is touched in that case.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn combine_sub(a: &mut [Complex32], b: &[Complex32]) -> Result<(), FftError> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    a.iter_mut().zip(b.iter()).for_each(|(x, y)| *x -= *y);
    Ok(())
}

/// Evaluates the forward FFT through the decomposition algebra instead of
/// the monolithic kernel: the reference composition an external scheduler
/// would distribute.
///
/// Each level deinterleaves the signal into its even- and odd-indexed
/// subsequences, transforms both (recursively, down to length 1), corrects
/// the odd spectrum with [`twiddle`] -- block position 0 for the low output
/// half, block position 1 for the high output half -- and materializes the
/// two halves of the output through [`split`] views with [`combine_add`].
///
/// Produces the same spectrum as [`crate::fft`] to within float rounding.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the length is zero or not a power
/// of two.
pub fn fft_decomposed(signal: &mut [Complex32]) -> Result<(), FftError> {
    let n = signal.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }
    if n == 1 {
        return Ok(());
    }

    let (mut evens, mut odds) = deinterleave(signal);
    fft_decomposed(&mut evens)?;
    fft_decomposed(&mut odds)?;

    // Two phase-corrected copies of the odd spectrum, one per output half.
    let mut odds_hi = odds.clone();
    twiddle(0, 2, &mut odds)?;
    twiddle(1, 2, &mut odds_hi)?;

    let (low, high) = split(signal)?;
    low.copy_from_slice(&evens);
    combine_add(low, &odds)?;
    high.copy_from_slice(&evens);
    combine_add(high, &odds_hi)?;

    Ok(())
}
