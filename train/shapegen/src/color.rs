use image::Rgb;
use rand::Rng;

/// Channel cap that keeps outlines away from the white background.
pub const DEFAULT_MAX_BRIGHTNESS: u8 = 230;

/// Each channel uniform in `0..=max_brightness`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R, max_brightness: u8) -> Rgb<u8> {
    Rgb([
        rng.random_range(0..=max_brightness),
        rng.random_range(0..=max_brightness),
        rng.random_range(0..=max_brightness),
    ])
}
