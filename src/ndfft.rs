//! Two-dimensional FFT by separable row/column passes.
//!
//! Arrays are flat, row-major buffers of `width * height` values: element
//! `(row j, column i)` lives at `j * width + i`. The transform runs the 1D
//! dispatcher over every row, transposes, runs it over every row of the
//! transposed buffer (the original columns), and transposes back. Each 1D
//! inverse pass normalizes by its own length, so the inverse 2D transform is
//! normalized by `1/(width * height)` with no extra scaling.
//!
//! With the `parallel` feature, row passes over arrays of at least
//! [`parallel_2d_threshold`](crate::config::parallel_2d_threshold) elements
//! are spread over the rayon pool. Every row is still transformed by the same
//! sequential code, so results do not depend on the mode.

use alloc::vec::Vec;

use crate::error::FftError;
use crate::fft::{Direction, FftEngine};
use crate::num::{Complex, Float};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Transpose a `rows x cols` row-major matrix into `dst` (`cols x rows`).
///
/// # Panics
///
/// Panics if either slice is shorter than `rows * cols`.
pub fn transpose<E: Copy>(src: &[E], rows: usize, cols: usize, dst: &mut [E]) {
    assert!(src.len() >= rows * cols && dst.len() >= rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            dst[c * rows + r] = src[r * cols + c];
        }
    }
}

/// Flatten nested rows into the row-major layout, returning `(data, width, height)`.
///
/// All rows must have the same, non-zero length.
pub fn flatten_2d<T: Float>(
    rows: Vec<Vec<Complex<T>>>,
) -> Result<(Vec<Complex<T>>, usize, usize), FftError> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Err(FftError::InvalidSize { size: 0 });
    }
    let mut data = Vec::with_capacity(width * height);
    for row in rows {
        if row.len() != width {
            return Err(FftError::MismatchedLengths {
                expected: width,
                actual: row.len(),
            });
        }
        data.extend(row);
    }
    Ok((data, width, height))
}

fn check_dims(len: usize, width: usize, height: usize, max_len: usize) -> Result<usize, FftError> {
    if width == 0 || height == 0 {
        return Err(FftError::InvalidSize { size: 0 });
    }
    let total = width.checked_mul(height).ok_or(FftError::SizeOverflow {
        requested: usize::MAX,
        limit: max_len,
    })?;
    if total != len {
        return Err(FftError::MismatchedLengths {
            expected: total,
            actual: len,
        });
    }
    Ok(total)
}

impl<T: Float> FftEngine<T> {
    /// Separable 2D transform of a `width x height` row-major array, in place.
    pub fn fft2d(
        &self,
        data: &mut [Complex<T>],
        width: usize,
        height: usize,
        direction: Direction,
    ) -> Result<(), FftError> {
        let total = check_dims(data.len(), width, height, self.config().max_len)?;
        log::debug!(
            "{:?} 2d fft of {}x{} ({})",
            direction,
            width,
            height,
            if self.rows_in_parallel(total) {
                "parallel"
            } else {
                "sequential"
            }
        );

        // Everything that can fail is settled before the first row pass
        // writes into `data`.
        self.plan(width)?;
        self.plan(height)?;
        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(total)
            .map_err(|_| FftError::SizeOverflow {
                requested: total,
                limit: self.config().max_len,
            })?;
        scratch.resize(total, Complex::zero());

        self.transform_rows(data, width, direction)?;
        transpose(data, height, width, &mut scratch);
        self.transform_rows(&mut scratch, height, direction)?;
        transpose(&scratch, width, height, data);
        Ok(())
    }

    pub fn fft2(&self, data: &mut [Complex<T>], width: usize, height: usize) -> Result<(), FftError> {
        self.fft2d(data, width, height, Direction::Forward)
    }

    pub fn ifft2(&self, data: &mut [Complex<T>], width: usize, height: usize) -> Result<(), FftError> {
        self.fft2d(data, width, height, Direction::Inverse)
    }

    /// Forward 2D transform of real input into a new complex buffer.
    pub fn fft2_real(&self, input: &[T], width: usize, height: usize) -> Result<Vec<Complex<T>>, FftError> {
        self.real_2d(input, width, height, Direction::Forward)
    }

    /// Inverse 2D transform of real input into a new complex buffer.
    pub fn ifft2_real(&self, input: &[T], width: usize, height: usize) -> Result<Vec<Complex<T>>, FftError> {
        self.real_2d(input, width, height, Direction::Inverse)
    }

    fn real_2d(
        &self,
        input: &[T],
        width: usize,
        height: usize,
        direction: Direction,
    ) -> Result<Vec<Complex<T>>, FftError> {
        check_dims(input.len(), width, height, self.config().max_len)?;
        let mut out: Vec<Complex<T>> = input.iter().copied().map(Complex::from).collect();
        self.fft2d(&mut out, width, height, direction)?;
        Ok(out)
    }

    #[cfg(feature = "parallel")]
    fn rows_in_parallel(&self, total: usize) -> bool {
        total >= crate::config::parallel_2d_threshold()
    }

    #[cfg(not(feature = "parallel"))]
    fn rows_in_parallel(&self, _total: usize) -> bool {
        false
    }

    fn transform_rows(
        &self,
        data: &mut [Complex<T>],
        row_len: usize,
        direction: Direction,
    ) -> Result<(), FftError> {
        #[cfg(feature = "parallel")]
        {
            if self.rows_in_parallel(data.len()) {
                return data
                    .par_chunks_exact_mut(row_len)
                    .try_for_each(|row| self.transform(row, direction));
            }
        }
        for row in data.chunks_exact_mut(row_len) {
            self.transform(row, direction)?;
        }
        Ok(())
    }
}

/// Forward 2D FFT in place.
pub fn fft2<T: Float>(data: &mut [Complex<T>], width: usize, height: usize) -> Result<(), FftError> {
    FftEngine::default().fft2(data, width, height)
}

/// Inverse 2D FFT in place, normalized by `1/(width * height)`.
pub fn ifft2<T: Float>(data: &mut [Complex<T>], width: usize, height: usize) -> Result<(), FftError> {
    FftEngine::default().ifft2(data, width, height)
}

pub fn fft2_real<T: Float>(input: &[T], width: usize, height: usize) -> Result<Vec<Complex<T>>, FftError> {
    FftEngine::default().fft2_real(input, width, height)
}

pub fn ifft2_real<T: Float>(input: &[T], width: usize, height: usize) -> Result<Vec<Complex<T>>, FftError> {
    FftEngine::default().ifft2_real(input, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FftConfig;
    use crate::num::Complex64;
    use alloc::vec;

    fn engine() -> FftEngine<f64> {
        FftEngine::new(FftConfig::default())
    }

    #[test]
    fn transpose_rectangular() {
        // 2 rows x 3 cols
        let src = [1, 2, 3, 4, 5, 6];
        let mut dst = [0; 6];
        transpose(&src, 2, 3, &mut dst);
        assert_eq!(dst, [1, 4, 2, 5, 3, 6]);
        let mut back = [0; 6];
        transpose(&dst, 3, 2, &mut back);
        assert_eq!(back, src);
    }

    #[test]
    fn flatten_rejects_ragged_rows() {
        let rows = vec![
            vec![Complex64::one(), Complex64::zero()],
            vec![Complex64::one()],
        ];
        assert_eq!(
            flatten_2d(rows),
            Err(FftError::MismatchedLengths {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            flatten_2d::<f64>(vec![]),
            Err(FftError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn dimension_errors() {
        let e = engine();
        let mut data = vec![Complex64::zero(); 6];
        assert_eq!(e.fft2(&mut data, 0, 6), Err(FftError::InvalidSize { size: 0 }));
        assert_eq!(
            e.fft2(&mut data, 4, 2),
            Err(FftError::MismatchedLengths {
                expected: 8,
                actual: 6
            })
        );
        assert!(matches!(
            e.fft2(&mut data, usize::MAX, 2),
            Err(FftError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn column_limit_is_checked_before_rows_are_written() {
        // Rows of 4 fit under the limit; columns of 9 need a 32-point padding.
        let e = FftEngine::<f64>::new(FftConfig::default().with_max_len(16));
        let input: Vec<Complex64> = (0..36).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let mut data = input.clone();
        assert_eq!(
            e.fft2(&mut data, 4, 9),
            Err(FftError::SizeOverflow {
                requested: 32,
                limit: 16
            })
        );
        assert_eq!(data, input);
    }

    #[test]
    fn single_row_matches_1d() {
        let e = engine();
        let input: Vec<Complex64> = (0..6).map(|i| Complex64::new(i as f64, 1.0)).collect();
        let mut as_2d = input.clone();
        e.fft2(&mut as_2d, 6, 1).unwrap();
        let as_1d = e.fft_vec(&input).unwrap();
        for (a, b) in as_2d.iter().zip(as_1d.iter()) {
            assert!((a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9);
        }
    }

    #[test]
    fn rectangular_roundtrip() {
        let e = engine();
        for (w, h) in [(3usize, 4usize), (8, 4), (5, 7), (1, 9)] {
            let input: Vec<Complex64> = (0..w * h)
                .map(|i| Complex64::new((i % 7) as f64, (i % 3) as f64 - 1.0))
                .collect();
            let mut data = input.clone();
            e.fft2(&mut data, w, h).unwrap();
            e.ifft2(&mut data, w, h).unwrap();
            for (a, b) in data.iter().zip(input.iter()) {
                assert!(
                    (a.re - b.re).abs() < 1e-9 && (a.im - b.im).abs() < 1e-9,
                    "{w}x{h}: {a:?} vs {b:?}"
                );
            }
        }
    }
}
