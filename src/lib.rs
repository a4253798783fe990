//! A radix-2 Fast Fourier Transform engine over single-precision complex
//! vectors, usable as a monolithic in-place transform ([`fft`]) or as a
//! decomposable primitive for divide-and-combine evaluation (the
//! [`decompose`] module).
//!
//! The forward DFT convention is `exp(-i 2 pi k n / N)` with no `1/N`
//! normalization, and output is in natural order.

use num_complex::Complex32;

pub mod decompose;
mod error;
mod twiddles;
pub mod utils;

pub use decompose::{combine_add, combine_sub, concatenate, fft_decomposed, split};
pub use error::FftError;
pub use twiddles::twiddle;

/// Forward FFT, in place. Decimation in time; the output is the spectrum in
/// natural (non-bit-reversed) order.
///
/// A scratch buffer of the input's size is allocated for the duration of the
/// call. Recursion depth is `log2(N)`.
///
/// # Errors
///
/// Returns [`FftError::InvalidLength`] if the length is zero or not a power
/// of two.
pub fn fft(signal: &mut [Complex32]) -> Result<(), FftError> {
    let n = signal.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }
    // Length 1 is its own transform.
    if n == 1 {
        return Ok(());
    }

    let twiddles = twiddles::generate_twiddles(n / 2);
    let mut scratch = signal.to_vec();
    fft_inner(signal, &mut scratch, 0, 1, &twiddles);

    Ok(())
}

/// One level of the ping-pong butterfly recursion.
///
/// Both slices always span the full signal; `offset` and `step` select the
/// stride-`step` subsequence starting at `offset`. Each level reads its
/// even/odd sub-transforms out of `scratch` and writes the combined spectrum
/// into `buf`, so the buffer roles swap one level down. The recursion
/// bottoms out when `step` reaches the signal length, where a single sample
/// is its own transform and both buffers still hold the input.
fn fft_inner(
    buf: &mut [Complex32],
    scratch: &mut [Complex32],
    offset: usize,
    step: usize,
    twiddles: &[Complex32],
) {
    let n = buf.len();
    if step >= n {
        return;
    }

    fft_inner(scratch, buf, offset, step * 2, twiddles);
    fft_inner(scratch, buf, offset + step, step * 2, twiddles);

    for i in (0..n).step_by(2 * step) {
        let t = twiddles[i / 2] * scratch[offset + i + step];
        let even = scratch[offset + i];
        buf[offset + i / 2] = even + t;
        buf[offset + (i + n) / 2] = even - t;
    }
}

#[cfg(test)]
mod tests {
    use utilities::{assert_float_closeness, gen_random_signal, naive_dft};

    use super::*;

    fn assert_signals_close(actual: &[Complex32], expected: &[Complex32], epsilon: f32) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_float_closeness(a.re, e.re, epsilon);
            assert_float_closeness(a.im, e.im, epsilon);
        }
    }

    #[test]
    fn fft_matches_the_reference_dft() {
        for k in 0..=10 {
            let n = 1 << k;
            let mut signal = vec![Complex32::default(); n];
            gen_random_signal(&mut signal);

            let expected = naive_dft(&signal);
            fft(&mut signal).unwrap();

            assert_signals_close(&signal, &expected, 1e-2);
        }
    }

    #[test]
    fn fft_is_linear() {
        let n = 64;
        let mut a = vec![Complex32::default(); n];
        let mut b = vec![Complex32::default(); n];
        gen_random_signal(&mut a);
        gen_random_signal(&mut b);

        let mut sum: Vec<Complex32> = a.iter().zip(b.iter()).map(|(x, y)| x + y).collect();
        fft(&mut sum).unwrap();

        fft(&mut a).unwrap();
        fft(&mut b).unwrap();
        combine_add(&mut a, &b).unwrap();

        assert_signals_close(&sum, &a, 1e-3);
    }

    #[test]
    fn constant_signal_transforms_to_dc_only() {
        let mut signal = vec![Complex32::new(1.0, 0.0); 4];
        fft(&mut signal).unwrap();

        assert_signals_close(
            &signal,
            &[
                Complex32::new(4.0, 0.0),
                Complex32::new(0.0, 0.0),
                Complex32::new(0.0, 0.0),
                Complex32::new(0.0, 0.0),
            ],
            1e-6,
        );
    }

    #[test]
    fn alternating_two_point_signal() {
        let mut signal = vec![Complex32::new(1.0, 0.0), Complex32::new(-1.0, 0.0)];
        fft(&mut signal).unwrap();

        assert_signals_close(
            &signal,
            &[Complex32::new(0.0, 0.0), Complex32::new(2.0, 0.0)],
            1e-6,
        );
    }

    #[test]
    fn shifted_impulse_has_natural_order_spectrum() {
        // x = [0, 1, 0, 0] -> X[k] = exp(-i 2 pi k / 4) = [1, -i, -1, i]
        let mut signal = vec![Complex32::new(0.0, 0.0); 4];
        signal[1] = Complex32::new(1.0, 0.0);
        fft(&mut signal).unwrap();

        assert_signals_close(
            &signal,
            &[
                Complex32::new(1.0, 0.0),
                Complex32::new(0.0, -1.0),
                Complex32::new(-1.0, 0.0),
                Complex32::new(0.0, 1.0),
            ],
            1e-6,
        );
    }

    #[test]
    fn length_one_signal_is_its_own_transform() {
        let mut signal = vec![Complex32::new(0.3, -0.7)];
        fft(&mut signal).unwrap();

        assert_eq!(signal[0], Complex32::new(0.3, -0.7));
    }

    #[test]
    fn invalid_lengths_are_rejected() {
        let mut empty: Vec<Complex32> = vec![];
        assert_eq!(fft(&mut empty), Err(FftError::InvalidLength(0)));

        let mut signal = vec![Complex32::new(1.0, 0.0); 12];
        assert_eq!(fft(&mut signal), Err(FftError::InvalidLength(12)));
    }
}
