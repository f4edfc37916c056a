//! Iterative radix-2 decimation-in-time Cooley–Tukey transform.
//!
//! The input is bit-reverse permuted, then `log2(n)` butterfly stages of
//! increasing span `m = 2, 4, …, n` combine the half-transforms in place.
//! Each stage must see the previous stage complete, and the running twiddle
//! restarts at `1` for every group.

use crate::bitrev::bit_reverse_permute;
use crate::error::FftError;
use crate::fft::Direction;
use crate::num::{Complex, Float};

/// In-place radix-2 FFT (or IFFT) of a power-of-two length buffer.
///
/// The inverse direction divides the running twiddle by the stage root rather
/// than multiplying, and scales the result by `1/n`. `epsilon` guards that
/// division.
pub fn cooley_tukey<T: Float>(
    data: &mut [Complex<T>],
    direction: Direction,
    epsilon: T,
) -> Result<(), FftError> {
    let n = data.len();
    if n == 0 {
        return Err(FftError::InvalidSize { size: 0 });
    }
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo { size: n });
    }
    log::trace!("radix-2 {:?} transform of {} points", direction, n);

    // Stage roots are resolved before the buffer is touched, so a failed
    // division guard leaves `data` as it was.
    let stages = n.trailing_zeros() as usize;
    let two_pi = T::from_f64(2.0) * T::pi();
    let mut roots = [Complex::<T>::one(); usize::BITS as usize];
    for (s, wm) in roots.iter_mut().take(stages).enumerate() {
        let root = Complex::expi(-two_pi / T::from_usize(2 << s));
        *wm = match direction {
            Direction::Forward => root,
            Direction::Inverse => Complex::one().try_div_with_epsilon(root, epsilon)?,
        };
    }

    bit_reverse_permute(data);

    for (s, &wm) in roots.iter().take(stages).enumerate() {
        let m = 2usize << s;
        let half = m / 2;
        for group in data.chunks_exact_mut(m) {
            let (lo, hi) = group.split_at_mut(half);
            let mut w = Complex::one();
            for (even, odd) in lo.iter_mut().zip(hi.iter_mut()) {
                let u = *even;
                let t = w * *odd;
                *even = u + t;
                *odd = u - t;
                w = w * wm;
            }
        }
    }

    if direction == Direction::Inverse {
        let scale = T::one() / T::from_usize(n);
        for c in data.iter_mut() {
            *c = c.scale(scale);
        }
    }
    Ok(())
}
