//! Direct O(n²) DFT evaluation.
//!
//! Slow, but independent of both fast engines; used as the reference the
//! fast paths are checked against.

use alloc::vec::Vec;

use crate::fft::Direction;
use crate::num::{Complex, Float};

/// Evaluate the DFT sum directly. The inverse direction includes the `1/n`
/// normalization, matching [`crate::fft::ifft`].
///
/// Phases are reduced modulo `n` with integer arithmetic and evaluated in
/// `f64` before converting back to `T`.
pub fn dft<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    let n = input.len();
    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };
    let step = sign * 2.0 * core::f64::consts::PI / n as f64;
    let mut output = Vec::with_capacity(n);
    for k in 0..n {
        let mut re = 0.0f64;
        let mut im = 0.0f64;
        for (t, x) in input.iter().enumerate() {
            let phase = ((k as u128 * t as u128) % n as u128) as f64;
            let (s, c) = libm::sincos(step * phase);
            let (xr, xi) = (x.re.to_f64(), x.im.to_f64());
            re += xr * c - xi * s;
            im += xr * s + xi * c;
        }
        if direction == Direction::Inverse {
            re /= n as f64;
            im /= n as f64;
        }
        output.push(Complex::new(T::from_f64(re), T::from_f64(im)));
    }
    output
}
