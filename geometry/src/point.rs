use std::fmt;

use serde::Serialize;

/// Pairwise separation a triangle's vertices must exceed.
pub const MIN_VERTEX_SEPARATION: f64 = 10.0;

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Difference of two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

pub fn subtract(p1: Point, p2: Point) -> Vector {
    Vector {
        x: p1.x - p2.x,
        y: p1.y - p2.y,
    }
}

pub fn magnitude(v: Vector) -> f64 {
    let (x, y) = (v.x as f64, v.y as f64);
    (x * x + y * y).sqrt()
}

pub fn distance(p1: Point, p2: Point) -> f64 {
    magnitude(subtract(p1, p2))
}

/// True when the three vertices are pairwise distinct and every pair is
/// farther apart than [`MIN_VERTEX_SEPARATION`].
pub fn vertices_valid(v1: Point, v2: Point, v3: Point) -> bool {
    vertices_valid_with(v1, v2, v3, MIN_VERTEX_SEPARATION)
}

pub fn vertices_valid_with(v1: Point, v2: Point, v3: Point, min_separation: f64) -> bool {
    let distinct = v1 != v2 && v2 != v3 && v1 != v3;
    distinct
        && distance(v1, v2) > min_separation
        && distance(v2, v3) > min_separation
        && distance(v1, v3) > min_separation
}
