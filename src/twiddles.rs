//! Twiddle factor generation and the per-block phase correction.

use std::f32::consts::PI;

use num_complex::Complex32;

use crate::error::FftError;

/// Generates the half-length root-of-unity table for a transform of size
/// `2 * dist`: `tw[k] = exp(-i 2 pi k / (2 * dist))` for `k` in `0..dist`.
///
/// The butterfly recursion indexes this one table at every level, so it is
/// built once per transform.
pub(crate) fn generate_twiddles(dist: usize) -> Vec<Complex32> {
    let angle_mult = -PI / dist as f32;

    (0..dist)
        .map(|k| {
            let (sin, cos) = (angle_mult * k as f32).sin_cos();
            Complex32::new(cos, sin)
        })
        .collect()
}

/// Applies the phase correction that aligns an independently transformed
/// sub-block with its position in the enclosing spectrum, in place.
///
/// `block` is block number `block_position` out of `block_count` blocks of
/// equal size. Each sample at local index `idx` is multiplied by
/// `exp(-i 2 pi k / n)` where `k = block_position * size + idx` is the
/// global frequency index and `n = block_count * size` the global transform
/// length. This generalizes the single butterfly twiddle to arbitrary block
/// granularity.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] for an empty block and
/// [`FftError::BlockOutOfRange`] if `block_position >= block_count`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub fn twiddle(
    block_position: usize,
    block_count: usize,
    block: &mut [Complex32],
) -> Result<(), FftError> {
    let size = block.len();
    if size == 0 {
        return Err(FftError::InvalidLength(0));
    }
    if block_position >= block_count {
        return Err(FftError::BlockOutOfRange {
            position: block_position,
            count: block_count,
        });
    }

    let angle_mult = -2.0 * PI / (block_count * size) as f32;
    for (idx, z) in block.iter_mut().enumerate() {
        let k = (block_position * size + idx) as f32;
        let (sin, cos) = (angle_mult * k).sin_cos();
        *z *= Complex32::new(cos, sin);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_1_SQRT_2;

    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn twiddles_8() {
        let twiddles = generate_twiddles(4);
        let expected = [
            (1.0, 0.0),
            (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            (0.0, -1.0),
            (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        ];

        assert_eq!(twiddles.len(), 4);
        for (tw, (re, im)) in twiddles.iter().zip(expected) {
            assert_float_closeness(tw.re, re, 1e-6);
            assert_float_closeness(tw.im, im, 1e-6);
        }
    }

    #[test]
    fn block_twiddle_first_sample_of_first_block_is_untouched() {
        let mut block = vec![Complex32::new(3.0, -2.0); 4];
        twiddle(0, 2, &mut block).unwrap();

        assert_float_closeness(block[0].re, 3.0, 1e-6);
        assert_float_closeness(block[0].im, -2.0, 1e-6);
    }

    #[test]
    fn block_twiddle_second_of_two_single_sample_blocks_negates() {
        // k = 1, n = 2: multiply by exp(-i pi) = -1
        let mut block = vec![Complex32::new(1.0, 0.5)];
        twiddle(1, 2, &mut block).unwrap();

        assert_float_closeness(block[0].re, -1.0, 1e-6);
        assert_float_closeness(block[0].im, -0.5, 1e-6);
    }

    #[test]
    fn block_twiddle_rejects_empty_block() {
        let mut block: Vec<Complex32> = vec![];
        assert_eq!(twiddle(0, 2, &mut block), Err(FftError::InvalidLength(0)));
    }

    #[test]
    fn block_twiddle_rejects_out_of_range_position() {
        let mut block = vec![Complex32::new(1.0, 0.0); 2];
        assert_eq!(
            twiddle(2, 2, &mut block),
            Err(FftError::BlockOutOfRange {
                position: 2,
                count: 2
            })
        );
    }
}
