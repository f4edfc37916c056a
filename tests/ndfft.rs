use chirpfft::dft::dft;
use chirpfft::ndfft::flatten_2d;
use chirpfft::{
    fft2, fft2_real, ifft2, ifft2_real, Complex, Complex64, Direction, FftConfig, FftEngine, FftError,
};
use proptest::prelude::*;

/// 5x5 array where row `j` holds the constant `j`.
fn gradient() -> Vec<Complex64> {
    (0..5)
        .flat_map(|j| (0..5).map(move |_| Complex64::new(j as f64, 0.0)))
        .collect()
}

#[test]
fn gradient_spectrum_lives_in_column_zero() {
    let mut data = gradient();
    fft2(&mut data, 5, 5).unwrap();

    assert!((data[0].re - 50.0).abs() < 1e-9 && data[0].im.abs() < 1e-9);
    // Each row is constant, so only the zero horizontal frequency survives
    // and column 0 carries 5x the DFT of the row values.
    let column: Vec<Complex64> = (0..5).map(|j| Complex64::new(j as f64, 0.0)).collect();
    let column_spectrum = dft(&column, Direction::Forward);
    for r in 0..5 {
        for c in 0..5 {
            let v = data[r * 5 + c];
            if c == 0 {
                let expected = column_spectrum[r].scale(5.0);
                assert!(
                    (v.re - expected.re).abs() < 1e-9 && (v.im - expected.im).abs() < 1e-9,
                    "({r}, 0) = {v:?}, expected {expected:?}"
                );
            } else {
                assert!(v.norm() < 1e-9, "({r}, {c}) = {v:?}");
            }
        }
    }

    ifft2(&mut data, 5, 5).unwrap();
    for (a, b) in data.iter().zip(gradient().iter()) {
        assert!((a.re - b.re).abs() < 1e-4 && (a.im - b.im).abs() < 1e-4);
    }
}

#[test]
fn horizontal_gradient_spectrum_lives_in_row_zero() {
    // Every row is [0, 1, 2, 3, 4]: only the zero vertical frequency survives.
    let mut data: Vec<Complex64> = (0..5)
        .flat_map(|_| (0..5).map(|i| Complex64::new(i as f64, 0.0)))
        .collect();
    fft2(&mut data, 5, 5).unwrap();
    assert!((data[0].re - 50.0).abs() < 1e-9);
    for r in 1..5 {
        for c in 0..5 {
            assert!(data[r * 5 + c].norm() < 1e-9);
        }
    }
}

#[test]
fn rectangular_matches_nested_dft() {
    let (width, height) = (6usize, 4usize);
    let input: Vec<Complex64> = (0..width * height)
        .map(|i| Complex64::new((i * 7 % 11) as f64, (i % 4) as f64))
        .collect();

    // Reference: DFT of every row, then of every column.
    let mut rows: Vec<Complex64> = input
        .chunks(width)
        .flat_map(|row| dft(row, Direction::Forward))
        .collect();
    for c in 0..width {
        let column: Vec<Complex64> = (0..height).map(|r| rows[r * width + c]).collect();
        for (r, v) in dft(&column, Direction::Forward).into_iter().enumerate() {
            rows[r * width + c] = v;
        }
    }

    let mut data = input.clone();
    fft2(&mut data, width, height).unwrap();
    for (a, b) in data.iter().zip(rows.iter()) {
        assert!((a.re - b.re).abs() < 1e-8 && (a.im - b.im).abs() < 1e-8);
    }
}

#[test]
fn real_input_variants() {
    let input: Vec<f64> = (0..12).map(|i| i as f64 * 0.5).collect();
    let promoted: Vec<Complex64> = input.iter().map(|&x| Complex::from(x)).collect();

    let mut expected = promoted.clone();
    fft2(&mut expected, 4, 3).unwrap();
    assert_eq!(fft2_real(&input, 4, 3).unwrap(), expected);

    let mut expected = promoted;
    ifft2(&mut expected, 4, 3).unwrap();
    assert_eq!(ifft2_real(&input, 4, 3).unwrap(), expected);
}

#[test]
fn flatten_then_transform() {
    let nested = vec![
        vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
        vec![Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0)],
    ];
    let (mut data, width, height) = flatten_2d(nested).unwrap();
    assert_eq!((width, height), (2, 2));
    fft2(&mut data, width, height).unwrap();
    let expected = [10.0, -2.0, -4.0, 0.0];
    for (a, b) in data.iter().zip(expected.iter()) {
        assert!((a.re - b).abs() < 1e-12 && a.im.abs() < 1e-12);
    }
}

#[test]
fn invalid_dimensions() {
    let mut data = vec![Complex64::zero(); 4];
    assert_eq!(fft2(&mut data, 0, 4), Err(FftError::InvalidSize { size: 0 }));
    assert_eq!(ifft2(&mut data, 4, 0), Err(FftError::InvalidSize { size: 0 }));
    assert_eq!(
        fft2(&mut data, 3, 2),
        Err(FftError::MismatchedLengths {
            expected: 6,
            actual: 4
        })
    );
    assert!(matches!(
        fft2_real(&[0.0f32; 4], usize::MAX, 2),
        Err(FftError::SizeOverflow { .. })
    ));
}

#[test]
fn failed_transform_leaves_buffer_untouched() {
    let input: Vec<Complex64> = (0..36)
        .map(|i| Complex64::new(i as f64, -(i as f64) * 0.5))
        .collect();

    // Columns of 9 points need a 32-point Bluestein buffer; rows of 4 do not.
    let limited = FftEngine::new(FftConfig::default().with_max_len(16));
    let mut data = input.clone();
    assert_eq!(
        limited.fft2(&mut data, 4, 9),
        Err(FftError::SizeOverflow {
            requested: 32,
            limit: 16
        })
    );
    assert_eq!(data, input);
    let mut data = input.clone();
    assert!(limited.ifft2(&mut data, 9, 4).is_err());
    assert_eq!(data, input);

    // A tolerance of 1 sends the 9-point columns to radix-2 and makes every
    // inverse twiddle division fail.
    let loose = FftEngine::new(FftConfig::default().with_epsilon(1.0));
    let mut data = input.clone();
    assert_eq!(
        loose.fft2(&mut data, 4, 9),
        Err(FftError::NotPowerOfTwo { size: 9 })
    );
    assert_eq!(data, input);
    let mut data: Vec<Complex64> = input[..32].to_vec();
    assert_eq!(loose.ifft2(&mut data, 4, 8), Err(FftError::DivisionByZero));
    assert_eq!(data, &input[..32]);
}

proptest! {
    #[test]
    fn prop_2d_roundtrip(
        width in 1usize..12,
        height in 1usize..12,
        seed in proptest::collection::vec(-50.0f64..50.0, 144)
    ) {
        let input: Vec<Complex64> = seed
            .iter()
            .take(width * height)
            .enumerate()
            .map(|(i, &v)| Complex64::new(v, seed[143 - i]))
            .collect();
        let mut data = input.clone();
        fft2(&mut data, width, height).unwrap();
        ifft2(&mut data, width, height).unwrap();
        for (a, b) in data.iter().zip(input.iter()) {
            prop_assert!((a.re - b.re).abs() < 1e-8 && (a.im - b.im).abs() < 1e-8);
        }
    }
}
