//! Tolerance and size limits used by the transform engines.
//!
//! [`FftConfig`] carries the numerical tolerance that decides power-of-two
//! dispatch and guards complex division, plus the largest transform length
//! (including Bluestein's padded length) the engines will allocate for.
//!
//! With the `std` feature, defaults can be overridden from the environment:
//!
//! - `CHIRPFFT_EPSILON`: tolerance, a float in `[0, 1)` (default `1e-5`)
//! - `CHIRPFFT_MAX_LEN`: maximum number of points (default `2^26`)
//! - `CHIRPFFT_PAR_2D_THRESHOLD`: minimum 2D element count for parallel row
//!   passes (`parallel` feature only, default `4096`)
//!
//! Variables are read once per process. Unparseable or out-of-range values
//! are logged and ignored.

use crate::error::FftError;
use crate::num::Float;

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "std")]
use std::sync::OnceLock;

/// Default tolerance for power-of-two detection and division guarding.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Default upper bound on any buffer a transform allocates, in points.
pub const DEFAULT_MAX_LEN: usize = 1 << 26;

/// Whether `epsilon` is a usable tolerance, i.e. lies in `[0, 1)`.
///
/// At `1` or above every length passes the power-of-two test and every
/// unit-modulus twiddle trips the division guard.
pub fn is_valid_epsilon(epsilon: f64) -> bool {
    (0.0..1.0).contains(&epsilon)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FftConfig<T: Float> {
    /// Tolerance used by the power-of-two test and by complex division.
    pub epsilon: T,
    /// Largest length, in points, of any working buffer.
    pub max_len: usize,
}

impl<T: Float> Default for FftConfig<T> {
    fn default() -> Self {
        Self {
            epsilon: T::from_f64(DEFAULT_EPSILON),
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl<T: Float> FftConfig<T> {
    /// Unchecked constructor; `epsilon` should lie in `[0, 1)` (see
    /// [`is_valid_epsilon`]).
    pub fn new(epsilon: T, max_len: usize) -> Self {
        Self { epsilon, max_len }
    }

    /// Unchecked; use [`try_with_epsilon`](Self::try_with_epsilon) for
    /// untrusted values.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the tolerance, rejecting values outside `[0, 1)`.
    pub fn try_with_epsilon(self, epsilon: T) -> Result<Self, FftError> {
        if is_valid_epsilon(epsilon.to_f64()) {
            Ok(self.with_epsilon(epsilon))
        } else {
            Err(FftError::InvalidTolerance)
        }
    }

    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Defaults, overridden by `CHIRPFFT_EPSILON` / `CHIRPFFT_MAX_LEN`.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        let env = env_overrides();
        let mut config = Self::default();
        if let Some(eps) = env.epsilon {
            config.epsilon = T::from_f64(eps);
        }
        if let Some(max_len) = env.max_len {
            config.max_len = max_len;
        }
        config
    }

    /// Apply overrides from an arbitrary variable source. `lookup` receives
    /// the variable name and returns its raw value, if set.
    pub fn with_overrides_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<alloc::string::String>,
    {
        let overrides = EnvOverrides::read(lookup);
        let mut config = self;
        if let Some(eps) = overrides.epsilon {
            config.epsilon = T::from_f64(eps);
        }
        if let Some(max_len) = overrides.max_len {
            config.max_len = max_len;
        }
        config
    }
}

struct EnvOverrides {
    epsilon: Option<f64>,
    max_len: Option<usize>,
}

impl EnvOverrides {
    fn read<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<alloc::string::String>,
    {
        let epsilon = parse_var::<f64, _>(&lookup, "CHIRPFFT_EPSILON").filter(|&eps| {
            let valid = is_valid_epsilon(eps);
            if !valid {
                log::warn!("ignoring CHIRPFFT_EPSILON={eps}: outside [0, 1)");
            }
            valid
        });
        let max_len = parse_var::<usize, _>(&lookup, "CHIRPFFT_MAX_LEN").filter(|&n| n > 0);
        Self { epsilon, max_len }
    }
}

fn parse_var<V, F>(lookup: &F, key: &str) -> Option<V>
where
    V: core::str::FromStr,
    F: Fn(&str) -> Option<alloc::string::String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<V>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

#[cfg(feature = "std")]
static ENV_OVERRIDES: OnceLock<EnvOverrides> = OnceLock::new();

#[cfg(feature = "std")]
fn env_overrides() -> &'static EnvOverrides {
    ENV_OVERRIDES.get_or_init(|| {
        let overrides = EnvOverrides::read(|key| std::env::var(key).ok());
        log::debug!(
            "environment overrides: epsilon={:?} max_len={:?}",
            overrides.epsilon,
            overrides.max_len
        );
        overrides
    })
}

/// Default minimum number of 2D elements before row passes go parallel.
#[cfg(feature = "parallel")]
pub const DEFAULT_PARALLEL_2D_THRESHOLD: usize = 4096;

/// `0` means no override.
#[cfg(feature = "parallel")]
static PARALLEL_2D_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "parallel")]
static PARALLEL_2D_THRESHOLD_ENV: OnceLock<Option<usize>> = OnceLock::new();

/// Set the minimum `width * height` for which 2D row passes run on the rayon
/// pool. Passing `0` reverts to `CHIRPFFT_PAR_2D_THRESHOLD` or the default.
#[cfg(feature = "parallel")]
pub fn set_parallel_2d_threshold(threshold: usize) {
    PARALLEL_2D_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
pub fn parallel_2d_threshold() -> usize {
    let override_thr = PARALLEL_2D_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return override_thr;
    }
    PARALLEL_2D_THRESHOLD_ENV
        .get_or_init(|| {
            parse_var::<usize, _>(
                &|key: &str| std::env::var(key).ok(),
                "CHIRPFFT_PAR_2D_THRESHOLD",
            )
            .filter(|&n| n > 0)
        })
        .unwrap_or(DEFAULT_PARALLEL_2D_THRESHOLD)
}
