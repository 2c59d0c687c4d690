pub mod bbox;
pub mod point;

pub use bbox::BBox;
pub use point::{
    MIN_VERTEX_SEPARATION, Point, Vector, distance, magnitude, subtract, vertices_valid,
    vertices_valid_with,
};
