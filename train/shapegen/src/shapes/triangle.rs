use geometry::{Point, vertices_valid_with};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use rand::Rng;

use super::{ShapeKind, ShapeParams};
use crate::{config::GenCfg, error::GenError, sampler::rejection_sample};

fn random_point<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Point {
    Point::new(
        rng.random_range(0..width) as i32,
        rng.random_range(0..height) as i32,
    )
}

pub fn sample<R: Rng + ?Sized>(rng: &mut R, cfg: &GenCfg) -> Result<ShapeParams, GenError> {
    let vertices = rejection_sample(
        rng,
        cfg.max_attempts,
        |rng| std::array::from_fn(|_| random_point(rng, cfg.width, cfg.height)),
        |[a, b, c]: &[Point; 3]| vertices_valid_with(*a, *b, *c, cfg.min_vertex_separation),
    )
    .map_err(|e| GenError::SamplingExhausted {
        kind: ShapeKind::Triangle,
        attempts: e.attempts,
    })?;
    Ok(ShapeParams::Triangle { vertices })
}

/// Closed outline through the three vertices.
pub fn draw(img: &mut RgbImage, vertices: &[Point; 3], color: Rgb<u8>) {
    for i in 0..3 {
        let (a, b) = (vertices[i], vertices[(i + 1) % 3]);
        draw_line_segment_mut(img, (a.x as f32, a.y as f32), (b.x as f32, b.y as f32), color);
    }
}
