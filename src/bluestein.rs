//! Bluestein's chirp-z algorithm for arbitrary transform lengths.
//!
//! Using `nk = (n² + k² − (k − n)²) / 2`, a length-`n` DFT becomes a chirp
//! pre-multiplication, a linear convolution with the conjugate chirp, and a
//! chirp post-multiplication. The convolution is evaluated as a circular one
//! over `padded_len(n)` points (the smallest power of two `>= 2n`, enough to
//! keep the linear result from wrapping) with three radix-2 transforms.
//!
//! Chirp tables are built per call and dropped on return.

use alloc::vec::Vec;

use crate::config::FftConfig;
use crate::error::FftError;
use crate::fft::Direction;
use crate::num::{Complex, Float};
use crate::radix2::cooley_tukey;

/// Length of the zero-padded convolution for an `n`-point transform.
///
/// Fails with [`FftError::SizeOverflow`] if `2n` rounded up to a power of two
/// overflows `usize` or exceeds `max_len`.
pub fn padded_len(n: usize, max_len: usize) -> Result<usize, FftError> {
    let padded = n
        .checked_mul(2)
        .and_then(usize::checked_next_power_of_two)
        .ok_or(FftError::SizeOverflow {
            requested: usize::MAX,
            limit: max_len,
        })?;
    if padded > max_len {
        return Err(FftError::SizeOverflow {
            requested: padded,
            limit: max_len,
        });
    }
    Ok(padded)
}

/// In-place DFT of any non-zero length via the chirp-z convolution.
pub fn bluestein<T: Float>(
    data: &mut [Complex<T>],
    direction: Direction,
    config: &FftConfig<T>,
) -> Result<(), FftError> {
    let n = data.len();
    if n == 0 {
        return Err(FftError::InvalidSize { size: 0 });
    }
    let m = padded_len(n, config.max_len)?;
    bluestein_padded(data, direction, config, m)
}

/// [`bluestein`] with the convolution length `m = padded_len(n)` already
/// resolved by the caller.
pub(crate) fn bluestein_padded<T: Float>(
    data: &mut [Complex<T>],
    direction: Direction,
    config: &FftConfig<T>,
    m: usize,
) -> Result<(), FftError> {
    let n = data.len();
    log::trace!("bluestein {:?} transform of {} points, padded to {}", direction, n, m);

    let w = chirp(n, direction, config.max_len)?;

    // Convolution kernel: conj(w) mirrored around index 0, zero in the gap.
    let mut y = zeroed::<T>(m, config.max_len)?;
    y[0] = Complex::one();
    for i in 1..n {
        let c = w[i].conj();
        y[i] = c;
        y[m - i] = c;
    }
    cooley_tukey(&mut y, Direction::Forward, config.epsilon)?;

    let mut b = zeroed::<T>(m, config.max_len)?;
    for ((dst, &x), &wi) in b.iter_mut().zip(data.iter()).zip(w.iter()) {
        *dst = x * wi;
    }
    cooley_tukey(&mut b, Direction::Forward, config.epsilon)?;
    for (bi, &yi) in b.iter_mut().zip(y.iter()) {
        *bi *= yi;
    }
    cooley_tukey(&mut b, Direction::Inverse, config.epsilon)?;

    for ((out, &wi), &bi) in data.iter_mut().zip(w.iter()).zip(b.iter()) {
        *out = wi * bi;
    }

    if direction == Direction::Inverse {
        let scale = T::one() / T::from_usize(n);
        for c in data.iter_mut() {
            *c = c.scale(scale);
        }
    }
    Ok(())
}

/// `w[i] = exp(∓iπ i²/n)`, negative exponent for the forward direction.
///
/// `i²` is only needed modulo `2n` (the chirp has period `2n` in `i²`), so
/// it is tracked incrementally as an exact integer.
fn chirp<T: Float>(
    n: usize,
    direction: Direction,
    max_len: usize,
) -> Result<Vec<Complex<T>>, FftError> {
    let mut w = zeroed::<T>(n, max_len)?;
    let period = 2 * n;
    let step = T::pi() / T::from_usize(n);
    let mut phase = 0usize;
    for (i, wi) in w.iter_mut().enumerate() {
        let theta = step * T::from_usize(phase);
        *wi = match direction {
            Direction::Forward => Complex::expi(-theta),
            Direction::Inverse => Complex::expi(theta),
        };
        // (i + 1)² = i² + 2i + 1, reduced without overflowing
        let delta = (2 * i + 1) % period;
        phase = if phase >= period - delta {
            phase - (period - delta)
        } else {
            phase + delta
        };
    }
    Ok(w)
}

fn zeroed<T: Float>(len: usize, limit: usize) -> Result<Vec<Complex<T>>, FftError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| FftError::SizeOverflow {
            requested: len,
            limit,
        })?;
    buf.resize(len, Complex::zero());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::dft;
    use crate::num::{Complex32, Complex64};

    fn signal(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5 + 1.0))
            .collect()
    }

    #[test]
    fn padded_length_is_next_power_of_two_of_twice_n() {
        assert_eq!(padded_len(1, 1 << 20), Ok(2));
        assert_eq!(padded_len(5, 1 << 20), Ok(16));
        assert_eq!(padded_len(8, 1 << 20), Ok(16));
        assert_eq!(padded_len(9, 1 << 20), Ok(32));
    }

    #[test]
    fn padded_length_respects_limits() {
        assert_eq!(
            padded_len(100, 128),
            Err(FftError::SizeOverflow {
                requested: 256,
                limit: 128
            })
        );
        assert!(matches!(
            padded_len(usize::MAX / 2 + 1, usize::MAX),
            Err(FftError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn matches_reference_dft_both_directions() {
        let config = FftConfig::<f64>::default();
        for n in [1usize, 2, 3, 5, 6, 7, 11, 12, 13, 100] {
            let input = signal(n);
            for direction in [Direction::Forward, Direction::Inverse] {
                let expected = dft(&input, direction);
                let mut data = input.clone();
                bluestein(&mut data, direction, &config).unwrap();
                for (i, (a, b)) in data.iter().zip(expected.iter()).enumerate() {
                    assert!(
                        (a.re - b.re).abs() < 1e-8 && (a.im - b.im).abs() < 1e-8,
                        "n = {n}, {direction:?}, index {i}: {a:?} vs {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn single_precision_roundtrip() {
        let config = FftConfig::<f32>::default();
        let input: Vec<Complex32> = (0..15)
            .map(|i| Complex32::new(i as f32, -(i as f32)))
            .collect();
        let mut data = input.clone();
        bluestein(&mut data, Direction::Forward, &config).unwrap();
        bluestein(&mut data, Direction::Inverse, &config).unwrap();
        for (a, b) in data.iter().zip(input.iter()) {
            assert!((a.re - b.re).abs() < 1e-3 && (a.im - b.im).abs() < 1e-3);
        }
    }

    #[test]
    fn oversized_padding_is_reported_before_work() {
        let config = FftConfig::<f64>::default().with_max_len(16);
        let mut data = signal(9);
        let before = data.clone();
        assert_eq!(
            bluestein(&mut data, Direction::Forward, &config),
            Err(FftError::SizeOverflow {
                requested: 32,
                limit: 16
            })
        );
        assert_eq!(data, before);
    }
}
