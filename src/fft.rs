//! One-dimensional transform entry points.
//!
//! [`FftEngine::transform`] dispatches on the length: powers of two go to the
//! iterative radix-2 engine ([`crate::radix2`]), everything else to
//! Bluestein's algorithm ([`crate::bluestein`]), which itself runs on the
//! radix-2 engine. Forward and inverse share the same dispatch; the inverse
//! is normalized by `1/n`.
//!
//! The free functions [`fft`], [`ifft`], [`fft_real`], [`ifft_real`] and
//! [`transform`] use a default engine. Construct an [`FftEngine`] with a
//! custom [`FftConfig`] to change the tolerance or size limit.

use alloc::vec::Vec;

use crate::bluestein::{bluestein_padded, padded_len};
use crate::config::FftConfig;
use crate::error::FftError;
use crate::num::{Complex, Float};
use crate::radix2::cooley_tukey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// `X[k] = Σ x[n]·e^(−2πi·kn/N)`
    #[default]
    Forward,
    /// `x[n] = (1/N)·Σ X[k]·e^(2πi·kn/N)`
    Inverse,
}

/// Which engine handles a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    CooleyTukey,
    Bluestein,
}

/// Power-of-two test on `log2(n)`: `n` qualifies when the ceiling and floor
/// of its base-2 logarithm agree within `epsilon`.
///
/// The logarithm is always taken in `f64`, independent of the element type.
pub fn is_power_of_two(n: usize, epsilon: f64) -> bool {
    if n == 0 {
        return false;
    }
    let depth = libm::log2(n as f64);
    libm::ceil(depth) - libm::floor(depth) <= epsilon
}

/// A validated dispatch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Plan {
    CooleyTukey,
    Bluestein { padded: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct FftEngine<T: Float> {
    config: FftConfig<T>,
}

impl<T: Float> Default for FftEngine<T> {
    /// An engine configured from the environment (`std`) or the built-in defaults.
    fn default() -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(FftConfig::from_env())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(FftConfig::default())
        }
    }
}

impl<T: Float> FftEngine<T> {
    pub fn new(config: FftConfig<T>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FftConfig<T> {
        &self.config
    }

    /// The engine [`transform`](Self::transform) would use for length `n`.
    pub fn algorithm_for(&self, n: usize) -> Algorithm {
        if is_power_of_two(n, self.config.epsilon.to_f64()) {
            Algorithm::CooleyTukey
        } else {
            Algorithm::Bluestein
        }
    }

    /// Validate an `n`-point transform against this configuration without
    /// touching any data: the length must be non-zero and within `max_len`,
    /// a radix-2 dispatch must really be a power of two, and Bluestein's
    /// padded length must fit too.
    pub(crate) fn plan(&self, n: usize) -> Result<Plan, FftError> {
        if n == 0 {
            return Err(FftError::InvalidSize { size: 0 });
        }
        if n > self.config.max_len {
            return Err(FftError::SizeOverflow {
                requested: n,
                limit: self.config.max_len,
            });
        }
        match self.algorithm_for(n) {
            Algorithm::CooleyTukey if !n.is_power_of_two() => {
                Err(FftError::NotPowerOfTwo { size: n })
            }
            Algorithm::CooleyTukey => Ok(Plan::CooleyTukey),
            Algorithm::Bluestein => Ok(Plan::Bluestein {
                padded: padded_len(n, self.config.max_len)?,
            }),
        }
    }

    /// Transform `data` in place.
    pub fn transform(&self, data: &mut [Complex<T>], direction: Direction) -> Result<(), FftError> {
        let n = data.len();
        match self.plan(n)? {
            Plan::CooleyTukey => {
                log::debug!("{:?} fft of {} points via cooley-tukey", direction, n);
                cooley_tukey(data, direction, self.config.epsilon)
            }
            Plan::Bluestein { padded } => {
                log::debug!(
                    "{:?} fft of {} points via bluestein (padded to {})",
                    direction,
                    n,
                    padded
                );
                bluestein_padded(data, direction, &self.config, padded)
            }
        }
    }

    pub fn fft(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        self.transform(data, Direction::Forward)
    }

    pub fn ifft(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        self.transform(data, Direction::Inverse)
    }

    /// Forward transform into a freshly allocated buffer.
    pub fn fft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = Vec::from(input);
        self.fft(&mut out)?;
        Ok(out)
    }

    pub fn ifft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let mut out = Vec::from(input);
        self.ifft(&mut out)?;
        Ok(out)
    }

    /// Promote real samples to complex (zero imaginary part) and transform.
    pub fn fft_real(&self, input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        self.real_transform(input, Direction::Forward)
    }

    /// Promote real samples to complex and apply a single inverse pass.
    pub fn ifft_real(&self, input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
        self.real_transform(input, Direction::Inverse)
    }

    fn real_transform(&self, input: &[T], direction: Direction) -> Result<Vec<Complex<T>>, FftError> {
        if input.is_empty() {
            return Err(FftError::InvalidSize { size: 0 });
        }
        let mut out: Vec<Complex<T>> = input.iter().copied().map(Complex::from).collect();
        self.transform(&mut out, direction)?;
        Ok(out)
    }
}

pub fn transform<T: Float>(data: &mut [Complex<T>], direction: Direction) -> Result<(), FftError> {
    FftEngine::default().transform(data, direction)
}

/// Forward FFT in place.
pub fn fft<T: Float>(data: &mut [Complex<T>]) -> Result<(), FftError> {
    FftEngine::default().fft(data)
}

/// Inverse FFT in place, normalized by `1/n`.
pub fn ifft<T: Float>(data: &mut [Complex<T>]) -> Result<(), FftError> {
    FftEngine::default().ifft(data)
}

/// Forward FFT of real input into a new complex buffer.
pub fn fft_real<T: Float>(input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
    FftEngine::default().fft_real(input)
}

/// Inverse FFT of real input into a new complex buffer.
pub fn ifft_real<T: Float>(input: &[T]) -> Result<Vec<Complex<T>>, FftError> {
    FftEngine::default().ifft_real(input)
}
