use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::{error::GenError, shapes::ShapeParams};

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub fn blank_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BACKGROUND)
}

pub fn render(params: &ShapeParams, color: Rgb<u8>, width: u32, height: u32) -> RgbImage {
    let mut img = blank_canvas(width, height);
    params.draw(&mut img, color);
    img
}

/// Encodes a 1x1 PNG in memory so a build without PNG support fails before
/// any directory is touched.
pub fn check_capabilities() -> Result<(), GenError> {
    let probe = blank_canvas(1, 1);
    let mut buf = Cursor::new(Vec::new());
    probe.write_to(&mut buf, ImageFormat::Png).map_err(|e| {
        GenError::Capability(format!(
            "PNG encoding is unavailable ({e}); enable the `png` feature of the `image` crate"
        ))
    })?;
    if buf.get_ref().is_empty() {
        return Err(GenError::Capability("PNG encoder produced no output".into()));
    }
    Ok(())
}
