use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_circle_mut;
use rand::Rng;

use super::ShapeParams;
use crate::config::GenCfg;

pub fn sample<R: Rng + ?Sized>(rng: &mut R, cfg: &GenCfg) -> ShapeParams {
    let radius = rng.random_range(cfg.min_radius..=cfg.max_extent());
    // top-left of the bounding box, chosen so x + radius < width
    let x = rng.random_range(0..=cfg.width - radius - 1);
    let y = rng.random_range(0..=cfg.height - radius - 1);
    ShapeParams::Circle { x, y, radius }
}

/// Outline of the circle inscribed in `[x, x + size] x [y, y + size]`.
pub fn draw(img: &mut RgbImage, x: u32, y: u32, size: u32, color: Rgb<u8>) {
    let half = (size / 2) as i32;
    let center = (x as i32 + half, y as i32 + half);
    draw_hollow_circle_mut(img, center, half, color);
}
