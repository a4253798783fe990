//! Test and benchmark helpers: closeness assertion, random signal
//! generation, and the brute-force reference DFT.

use std::f64::consts::PI;

use num_complex::Complex32;
use num_traits::Float;
use rand::{distributions::Uniform, prelude::*};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Fills the buffer with a random complex signal, components uniform in
/// `[-1, 1)`.
pub fn gen_random_signal(signal: &mut [Complex32]) {
    let mut rng = thread_rng();
    let uniform_dist = Uniform::new(-1.0f32, 1.0);

    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(&mut rng);
        z.im = uniform_dist.sample(&mut rng);
    }
}

/// Brute-force O(N^2) forward DFT, accumulated in f64. Slow but obviously
/// correct; the oracle the fast transforms are tested against.
pub fn naive_dft(signal: &[Complex32]) -> Vec<Complex32> {
    let n = signal.len();

    (0..n)
        .map(|k| {
            let mut acc_re = 0.0f64;
            let mut acc_im = 0.0f64;

            for (m, z) in signal.iter().enumerate() {
                let theta = -2.0 * PI * (k as f64) * (m as f64) / (n as f64);
                let (sin, cos) = theta.sin_cos();
                acc_re += f64::from(z.re) * cos - f64::from(z.im) * sin;
                acc_im += f64::from(z.re) * sin + f64::from(z.im) * cos;
            }

            Complex32::new(acc_re as f32, acc_im as f32)
        })
        .collect()
}
