use serde::Serialize;

use crate::shapes::{ShapeKind, ShapeParams};

#[derive(Serialize, Debug)]
pub struct JsonRecord {
    pub schema: &'static str,
    pub image: String,
    pub label: ShapeKind,
    pub index: u32,
    pub seed: u64,
    pub color: [u8; 3],
    pub params: ShapeParams,
}
