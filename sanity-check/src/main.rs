use anyhow::{bail, Context};
use chirpfft::{fft2_real, ifft2, FftConfig, FftEngine};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sanity_check::{
    compare_random, format_complex_grid, format_real_grid, gradient, magnitude_image, save_png,
    worst_by_algorithm, PngDepth,
};
use std::path::PathBuf;

/// Exercise chirpfft end to end.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform a vertical gradient with fft2 and back with ifft2, printing each stage
    Gradient {
        #[arg(long, default_value_t = 5)]
        width: usize,

        #[arg(long, default_value_t = 5)]
        height: usize,

        /// Optional path to save the log-magnitude spectrum as PNG
        #[arg(long)]
        png: Option<PathBuf>,

        /// Bit depth for the output PNG
        #[arg(long, value_enum, default_value_t = PngDepth::Eight)]
        png_depth: PngDepth,

        /// Move the zero frequency to the image center
        #[arg(long)]
        centered: bool,
    },
    /// Check random-length transforms against the direct DFT
    Compare {
        /// Number of random signals
        #[arg(long, default_value_t = 200)]
        count: usize,

        /// Largest signal length to draw
        #[arg(long, default_value_t = 1024)]
        max_len: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Maximum tolerated per-component error
        #[arg(long, default_value_t = 1e-6)]
        tolerance: f64,
    },
}

fn run_gradient(
    width: usize,
    height: usize,
    png: Option<PathBuf>,
    png_depth: PngDepth,
    centered: bool,
) -> anyhow::Result<()> {
    let data = gradient(width, height);
    println!("original elements of vector are:");
    print!("{}", format_real_grid(&data, width));

    let mut spectrum = fft2_real(&data, width, height)?;
    println!("after FFT2:");
    print!("{}", format_complex_grid(&spectrum, width));

    if let Some(path) = png {
        let img = magnitude_image(&spectrum, width, height, centered);
        save_png(&img, &path, png_depth)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Saved {}", path.display());
    }

    ifft2(&mut spectrum, width, height)?;
    println!("after IFFT2:");
    print!("{}", format_complex_grid(&spectrum, width));
    Ok(())
}

fn run_compare(count: usize, max_len: usize, seed: u64, tolerance: f64) -> anyhow::Result<()> {
    let engine = FftEngine::<f64>::new(FftConfig::from_env());
    let mut rng = StdRng::seed_from_u64(seed);
    let results = compare_random(&engine, &mut rng, count, max_len)?;

    let mut failed = false;
    for (algorithm, worst) in worst_by_algorithm(&results) {
        match worst {
            Some(w) => {
                println!(
                    "{:?}: max error {:.3e} (n = {}, {:?})",
                    algorithm, w.max_error, w.size, w.direction
                );
                failed |= w.max_error > tolerance;
            }
            None => println!("{algorithm:?}: not exercised"),
        }
    }
    if failed {
        bail!("error exceeds tolerance {tolerance:e}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Gradient {
            width,
            height,
            png,
            png_depth,
            centered,
        } => run_gradient(width, height, png, png_depth, centered),
        Command::Compare {
            count,
            max_len,
            seed,
            tolerance,
        } => run_compare(count, max_len, seed, tolerance),
    }
}
