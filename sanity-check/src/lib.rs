//! Helpers behind the `sanity-check` binary: the gradient demo, PNG output of
//! spectra, and a randomized comparison of the fast engines against the
//! direct DFT.

use chirpfft::dft::dft;
use chirpfft::{Algorithm, Complex, Complex64, Direction, FftEngine, FftError};
use clap::ValueEnum;
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ColorType, EncodableLayout, ImageBuffer, ImageEncoder, Rgb,
};
use rand::Rng;
use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PngDepth {
    Eight,
    Sixteen,
}

/// `width x height` row-major image where row `j` holds the value `j`.
pub fn gradient(width: usize, height: usize) -> Vec<f32> {
    (0..height)
        .flat_map(|j| std::iter::repeat(j as f32).take(width))
        .collect()
}

/// One line per row, each value as `+0.00, `.
pub fn format_real_grid(data: &[f32], width: usize) -> String {
    let mut out = String::new();
    for row in data.chunks(width.max(1)) {
        for v in row {
            let _ = write!(out, "{v:+.2}, ");
        }
        out.push('\n');
    }
    out
}

/// One line per row, each value as `+0.00+0.00j, `.
pub fn format_complex_grid(data: &[Complex<f32>], width: usize) -> String {
    let mut out = String::new();
    for row in data.chunks(width.max(1)) {
        for c in row {
            let _ = write!(out, "{c:.2}, ");
        }
        out.push('\n');
    }
    out
}

/// Grayscale image of `ln(1 + |X|)`, scaled so the largest bin is white.
///
/// With `centered`, the zero frequency is moved to the middle of the image.
pub fn magnitude_image(
    spectrum: &[Complex<f32>],
    width: usize,
    height: usize,
    centered: bool,
) -> ImageBuffer<Rgb<u16>, Vec<u16>> {
    let log_mag: Vec<f32> = spectrum.iter().map(|c| c.norm().ln_1p()).collect();
    let max = log_mag.iter().cloned().fold(0.0f32, f32::max);
    ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let (mut x, mut y) = (x as usize, y as usize);
        if centered {
            x = (x + width - width / 2) % width;
            y = (y + height - height / 2) % height;
        }
        let t = if max > 0.0 { log_mag[y * width + x] / max } else { 0.0 };
        let g = (t.clamp(0.0, 1.0) * 65535.0).round() as u16;
        Rgb([g, g, g])
    })
}

pub fn save_png(
    img: &ImageBuffer<Rgb<u16>, Vec<u16>>,
    path: &Path,
    depth: PngDepth,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(file, CompressionType::Best, FilterType::Adaptive);
    let (w, h) = (img.width(), img.height());
    match depth {
        PngDepth::Eight => {
            let img8: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(w, h, |x, y| {
                let p = img.get_pixel(x, y);
                Rgb([
                    (p.0[0] >> 8) as u8,
                    (p.0[1] >> 8) as u8,
                    (p.0[2] >> 8) as u8,
                ])
            });
            encoder.write_image(img8.as_raw(), w, h, ColorType::Rgb8)?;
        }
        PngDepth::Sixteen => {
            encoder.write_image(img.as_raw().as_bytes(), w, h, ColorType::Rgb16)?;
        }
    }
    Ok(())
}

/// Largest per-component difference between one fast transform and the DFT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub size: usize,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub max_error: f64,
}

/// Transform `input` both ways with `engine` and measure against [`dft`].
pub fn compare_one(
    engine: &FftEngine<f64>,
    input: &[Complex64],
) -> Result<[Comparison; 2], FftError> {
    let algorithm = engine.algorithm_for(input.len());
    let measure = |direction: Direction| -> Result<Comparison, FftError> {
        let mut fast = input.to_vec();
        engine.transform(&mut fast, direction)?;
        let reference = dft(input, direction);
        let max_error = fast
            .iter()
            .zip(reference.iter())
            .map(|(a, b)| (a.re - b.re).abs().max((a.im - b.im).abs()))
            .fold(0.0, f64::max);
        Ok(Comparison {
            size: input.len(),
            algorithm,
            direction,
            max_error,
        })
    };
    Ok([measure(Direction::Forward)?, measure(Direction::Inverse)?])
}

/// Compare `count` random signals with lengths drawn from `1..=max_len`.
pub fn compare_random<R: Rng>(
    engine: &FftEngine<f64>,
    rng: &mut R,
    count: usize,
    max_len: usize,
) -> Result<Vec<Comparison>, FftError> {
    let mut results = Vec::with_capacity(count * 2);
    for _ in 0..count {
        let n = rng.gen_range(1..=max_len.max(1));
        let input: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let pair = compare_one(engine, &input)?;
        log::debug!(
            "n = {n} ({:?}): forward {:.3e}, inverse {:.3e}",
            pair[0].algorithm,
            pair[0].max_error,
            pair[1].max_error
        );
        results.extend(pair);
    }
    Ok(results)
}

/// Worst case per algorithm, `None` if the algorithm was never exercised.
pub fn worst_by_algorithm(results: &[Comparison]) -> [(Algorithm, Option<Comparison>); 2] {
    let worst = |algorithm: Algorithm| {
        results
            .iter()
            .filter(|c| c.algorithm == algorithm)
            .copied()
            .max_by(|a, b| a.max_error.total_cmp(&b.max_error))
    };
    [
        (Algorithm::CooleyTukey, worst(Algorithm::CooleyTukey)),
        (Algorithm::Bluestein, worst(Algorithm::Bluestein)),
    ]
}
