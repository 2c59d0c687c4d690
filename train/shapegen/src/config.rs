use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{color::DEFAULT_MAX_BRIGHTNESS, error::GenError};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GenCfg {
    pub out_dir: PathBuf, // "Data"
    pub count: u32,       // samples per shape kind
    pub width: u32,
    pub height: u32,
    pub max_brightness: u8,
    pub min_radius: u32,
    pub min_side: u32,
    pub min_vertex_separation: f64,
    pub min_rect_gap: u32,
    pub max_attempts: u32,
    pub seed: Option<u64>,
    pub manifest: bool, // write labels.jsonl
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("Data"),
            count: 1000,
            width: 32,
            height: 32,
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
            min_radius: 5,
            min_side: 5,
            min_vertex_separation: geometry::MIN_VERTEX_SEPARATION,
            min_rect_gap: 4,
            max_attempts: 1000,
            seed: None,
            manifest: true,
        }
    }
}

impl GenCfg {
    pub fn from_json_file(path: &Path) -> Result<Self, GenError> {
        let file = File::open(path)?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| GenError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Largest side a circle or square may take on this canvas.
    pub fn max_extent(&self) -> u32 {
        self.width.min(self.height).saturating_sub(1)
    }

    /// Rejects settings under which some shape kind cannot be placed at all.
    /// Must pass before the generators sample anything.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.count == 0 {
            return Err(GenError::InvalidCount(self.count));
        }
        if self.width < 2
            || self.height < 2
            || self.width > i32::MAX as u32
            || self.height > i32::MAX as u32
        {
            return Err(GenError::InvalidConfig(format!(
                "canvas {}x{} is out of range",
                self.width, self.height
            )));
        }
        if self.max_attempts == 0 {
            return Err(GenError::InvalidConfig("max_attempts must be positive".into()));
        }
        let max_extent = self.max_extent();
        if self.min_radius > max_extent {
            return Err(GenError::InvalidConfig(format!(
                "min_radius {} does not fit a {}x{} canvas",
                self.min_radius, self.width, self.height
            )));
        }
        if self.min_side > max_extent {
            return Err(GenError::InvalidConfig(format!(
                "min_side {} does not fit a {}x{} canvas",
                self.min_side, self.width, self.height
            )));
        }
        let widest_gap = (self.width.max(self.height) - 1) - self.min_side;
        if widest_gap <= self.min_rect_gap {
            return Err(GenError::InvalidConfig(format!(
                "no rectangle sides in [{}, {}) can differ by more than {}",
                self.min_side,
                self.width.max(self.height),
                self.min_rect_gap
            )));
        }
        let (w, h) = ((self.width - 1) as f64, (self.height - 1) as f64);
        let diagonal = (w * w + h * h).sqrt();
        if !self.min_vertex_separation.is_finite() || diagonal <= self.min_vertex_separation {
            return Err(GenError::InvalidConfig(format!(
                "vertex separation {} exceeds the canvas diagonal",
                self.min_vertex_separation
            )));
        }
        Ok(())
    }
}
