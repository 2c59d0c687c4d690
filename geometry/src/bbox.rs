use serde::Serialize;

use crate::Point;

/// Inclusive pixel box: `x0..=x1`, `y0..=y1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Smallest box covering both `self` and `p`.
    pub fn include(self, p: Point) -> Self {
        Self {
            x0: self.x0.min(p.x),
            y0: self.y0.min(p.y),
            x1: self.x1.max(p.x),
            y1: self.y1.max(p.y),
        }
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x0 >= 0
            && self.y0 >= 0
            && self.x0 <= self.x1
            && self.y0 <= self.y1
            && (self.x1 as i64) < width as i64
            && (self.y1 as i64) < height as i64
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}
