//! # chirpfft - arbitrary-length FFT for Rust
//!
//! Forward and inverse discrete Fourier transforms of any non-zero length,
//! in one and two dimensions, generic over `f32` and `f64`.
//!
//! ## Algorithms
//!
//! - **Power-of-two lengths**: iterative radix-2 decimation-in-time
//!   Cooley–Tukey ([`radix2`]) after an in-place bit-reversal permutation
//!   ([`bitrev`]).
//! - **Every other length**: Bluestein's chirp-z transform ([`bluestein`]),
//!   which rewrites the DFT as a convolution and evaluates it with three
//!   zero-padded radix-2 transforms.
//! - **2D**: separable row/column passes with a transpose in between
//!   ([`ndfft`]).
//!
//! Every call is a pure function of its input: working buffers (chirp tables,
//! transpose scratch) are allocated per call and released on return.
//!
//! ## Usage
//!
//! ```
//! use chirpfft::{fft, ifft, Complex64};
//!
//! let mut data: Vec<Complex64> = [1.0f64, 2.0, 3.0, 4.0, 5.0]
//!     .iter()
//!     .map(|&x| Complex64::from(x))
//!     .collect();
//! fft(&mut data)?;
//! assert!((data[0].re - 15.0).abs() < 1e-9);
//! ifft(&mut data)?;
//! assert!((data[4].re - 5.0).abs() < 1e-9);
//! # Ok::<(), chirpfft::FftError>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FftError`] and environment
//!   overrides for [`FftConfig`]. Without it the crate is `no_std` + `alloc`.
//! - `parallel`: run 2D row passes on the rayon thread pool.
//!
//! ## Logging
//!
//! Dispatch decisions are reported through the [`log`] facade at `debug`
//! level and individual radix-2 passes at `trace`. No logger is installed by
//! the library.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

/// Element trait and complex value type.
pub mod num;

/// Error type for all transforms.
pub mod error;

/// Numerical tolerance and size limits, with environment overrides.
pub mod config;

/// Bit-reversal permutation used before radix-2 butterflies.
pub mod bitrev;

/// Iterative radix-2 Cooley–Tukey engine (power-of-two lengths).
pub mod radix2;

/// Bluestein chirp-z engine (arbitrary lengths).
pub mod bluestein;

/// Length dispatch and the 1D entry points.
pub mod fft;

/// Separable two-dimensional transforms.
pub mod ndfft;

/// Direct O(n²) DFT used as a reference.
pub mod dft;

pub use config::FftConfig;
pub use error::FftError;
pub use fft::{fft, fft_real, ifft, ifft_real, transform, Algorithm, Direction, FftEngine};
pub use ndfft::{fft2, fft2_real, ifft2, ifft2_real};
pub use num::{Complex, Complex32, Complex64, Float};
