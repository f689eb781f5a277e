use change_detector::image::ImageU8;
use rand::prelude::*;

/// Uniform image of the given channel count.
pub fn solid(width: usize, height: usize, channels: usize, value: u8) -> ImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ImageU8::filled(width, height, channels, value)
}

/// Copy of `base` with a filled `side × side` square at `(x0, y0)`.
pub fn with_square(base: &ImageU8, x0: usize, y0: usize, side: usize, value: u8) -> ImageU8 {
    let mut img = base.clone();
    let color = [value; 3];
    for y in y0..(y0 + side).min(base.h) {
        for x in x0..(x0 + side).min(base.w) {
            img.put_pixel(x, y, &color);
        }
    }
    img
}

/// High-contrast checkerboard, a busy scene for resampling and noise tests.
pub fn checkerboard(width: usize, height: usize, cell: usize, channels: usize) -> ImageU8 {
    assert!(cell > 0, "cell size must be positive");
    let mut img = ImageU8::new(width, height, channels);
    for y in 0..height {
        for x in 0..width {
            let val = if (x / cell + y / cell) & 1 == 0 { 32u8 } else { 220u8 };
            img.put_pixel(x, y, &[val; 3]);
        }
    }
    img
}

/// Deterministic pseudo-random noise in `[base - amp, base + amp]`.
pub fn noisy(width: usize, height: usize, base: u8, amp: u8, seed: u64) -> ImageU8 {
    let mut rng = StdRng::seed_from_u64(seed);
    let amp = amp as i32;
    let mut img = ImageU8::gray(width, height);
    for v in img.data.iter_mut() {
        let offset = rng.gen_range(-amp..=amp);
        *v = (base as i32 + offset).clamp(0, 255) as u8;
    }
    img
}
