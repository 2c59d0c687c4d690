use image::{Rgb, RgbImage};
use rand::Rng;

use super::{ShapeParams, rectangle};
use crate::config::GenCfg;

pub fn sample<R: Rng + ?Sized>(rng: &mut R, cfg: &GenCfg) -> ShapeParams {
    let side = rng.random_range(cfg.min_side..=cfg.max_extent());
    let x = rng.random_range(0..=cfg.width - side - 1);
    let y = rng.random_range(0..=cfg.height - side - 1);
    ShapeParams::Square { x, y, side }
}

pub fn draw(img: &mut RgbImage, x: u32, y: u32, side: u32, color: Rgb<u8>) {
    rectangle::draw(img, x, y, side, side, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn side_fits_canvas() {
        let cfg = GenCfg::default();
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..500 {
            let ShapeParams::Square { x, y, side } = sample(&mut rng, &cfg) else {
                unreachable!()
            };
            assert!(side >= cfg.min_side);
            assert!(x + side <= 31 && y + side <= 31);
        }
    }

    #[test]
    fn non_square_canvas_bounds_side_by_short_edge() {
        let cfg = GenCfg {
            width: 48,
            height: 16,
            ..GenCfg::default()
        };
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..200 {
            let ShapeParams::Square { y, side, .. } = sample(&mut rng, &cfg) else {
                unreachable!()
            };
            assert!(y + side < 16);
        }
    }
}
