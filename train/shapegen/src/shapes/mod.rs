use std::{fmt, str::FromStr};

use geometry::{BBox, Point};
use image::{Rgb, RgbImage};
use rand::Rng;
use serde::Serialize;

use crate::{config::GenCfg, error::GenError};

pub mod circle;
pub mod rectangle;
pub mod square;
pub mod triangle;

/// Shape category; the directory name doubles as the class label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
    Rectangle,
}

impl ShapeKind {
    /// Generation order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.dir_name() == s)
            .ok_or_else(|| format!("unknown shape category {s:?}"))
    }
}

/// Sampled geometry of one sample. Coordinates are canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ShapeParams {
    /// Circle inscribed in the box `[x, x + radius] x [y, y + radius]`.
    Circle { x: u32, y: u32, radius: u32 },
    Triangle { vertices: [Point; 3] },
    Square { x: u32, y: u32, side: u32 },
    Rectangle { x: u32, y: u32, width: u32, height: u32 },
}

impl ShapeParams {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::Circle { .. } => ShapeKind::Circle,
            ShapeParams::Triangle { .. } => ShapeKind::Triangle,
            ShapeParams::Square { .. } => ShapeKind::Square,
            ShapeParams::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Inclusive extent of everything the shape may draw.
    pub fn bounding_box(&self) -> BBox {
        match *self {
            ShapeParams::Circle { x, y, radius } => extent(x, y, radius, radius),
            ShapeParams::Triangle { vertices: [a, b, c] } => BBox::point(a).include(b).include(c),
            ShapeParams::Square { x, y, side } => extent(x, y, side, side),
            ShapeParams::Rectangle {
                x,
                y,
                width,
                height,
            } => extent(x, y, width, height),
        }
    }

    pub fn draw(&self, img: &mut RgbImage, color: Rgb<u8>) {
        match *self {
            ShapeParams::Circle { x, y, radius } => circle::draw(img, x, y, radius, color),
            ShapeParams::Triangle { vertices } => triangle::draw(img, &vertices, color),
            ShapeParams::Square { x, y, side } => square::draw(img, x, y, side, color),
            ShapeParams::Rectangle {
                x,
                y,
                width,
                height,
            } => rectangle::draw(img, x, y, width, height, color),
        }
    }
}

fn extent(x: u32, y: u32, w: u32, h: u32) -> BBox {
    BBox::new(x as i32, y as i32, (x + w) as i32, (y + h) as i32)
}

/// Samples parameters for `kind`. `cfg` must have passed [`GenCfg::validate`].
pub fn sample<R: Rng + ?Sized>(
    kind: ShapeKind,
    rng: &mut R,
    cfg: &GenCfg,
) -> Result<ShapeParams, GenError> {
    match kind {
        ShapeKind::Circle => Ok(circle::sample(rng, cfg)),
        ShapeKind::Triangle => triangle::sample(rng, cfg),
        ShapeKind::Square => Ok(square::sample(rng, cfg)),
        ShapeKind::Rectangle => rectangle::sample(rng, cfg),
    }
}
