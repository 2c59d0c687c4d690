use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_hollow_rect_mut, rect::Rect};
use rand::Rng;

use super::{ShapeKind, ShapeParams};
use crate::{config::GenCfg, error::GenError, sampler::rejection_sample};

pub fn sample<R: Rng + ?Sized>(rng: &mut R, cfg: &GenCfg) -> Result<ShapeParams, GenError> {
    // sides must differ by more than the gap to not read as a square
    let (width, height) = rejection_sample(
        rng,
        cfg.max_attempts,
        |rng| {
            (
                rng.random_range(cfg.min_side..=cfg.width - 1),
                rng.random_range(cfg.min_side..=cfg.height - 1),
            )
        },
        |(s1, s2)| s1.abs_diff(*s2) > cfg.min_rect_gap,
    )
    .map_err(|e| GenError::SamplingExhausted {
        kind: ShapeKind::Rectangle,
        attempts: e.attempts,
    })?;

    let x = rng.random_range(0..=cfg.width - width - 1);
    let y = rng.random_range(0..=cfg.height - height - 1);
    Ok(ShapeParams::Rectangle {
        x,
        y,
        width,
        height,
    })
}

/// Axis-aligned outline covering pixels `x..=x + w`, `y..=y + h`.
pub fn draw(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let rect = Rect::at(x as i32, y as i32).of_size(w + 1, h + 1);
    draw_hollow_rect_mut(img, rect, color);
}
