//! Transforms a 5x5 vertical gradient (row `j` holds `j`) with `fft2`, then
//! inverts it with `ifft2`, printing the array after each stage.
//!
//! Run with `RUST_LOG=debug` to see which engine handles each pass.
use chirpfft::{fft2_real, ifft2, Complex32};

fn print_real(data: &[f32], width: usize) {
    for row in data.chunks(width) {
        let line: String = row.iter().map(|v| format!("{v:+.2}, ")).collect();
        println!("{line}");
    }
}

fn print_complex(data: &[Complex32], width: usize) {
    for row in data.chunks(width) {
        let line: String = row.iter().map(|c| format!("{c:.2}, ")).collect();
        println!("{line}");
    }
}

fn main() -> Result<(), chirpfft::FftError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (width, height) = (5usize, 5usize);
    let data: Vec<f32> = (0..height)
        .flat_map(|j| std::iter::repeat(j as f32).take(width))
        .collect();

    println!("original elements of vector are:");
    print_real(&data, width);

    let mut spectrum = fft2_real(&data, width, height)?;
    println!("after FFT2:");
    print_complex(&spectrum, width);

    ifft2(&mut spectrum, width, height)?;
    println!("after IFFT2:");
    print_complex(&spectrum, width);
    Ok(())
}
