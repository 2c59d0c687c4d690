use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbImage};
use log::debug;

use crate::{error::GenError, generator::DatasetGenerator, record::JsonRecord, shapes::ShapeKind};

pub const MANIFEST: &str = "labels.jsonl";

/// Digits in `count`; every index of the category is padded to this width.
pub fn index_width(count: u32) -> usize {
    count.to_string().len()
}

pub fn sample_file_name(index: u32, count: u32) -> String {
    format!("{index:0width$}.png", width = index_width(count))
}

/// `Circle/07.png`, relative to the data root.
pub fn sample_rel_path(kind: ShapeKind, index: u32, count: u32) -> String {
    format!("{}/{}", kind.dir_name(), sample_file_name(index, count))
}

pub fn sample_path(root: &Path, kind: ShapeKind, index: u32, count: u32) -> PathBuf {
    root.join(kind.dir_name()).join(sample_file_name(index, count))
}

/// Sibling directory a run is written into before it is published as
/// `root`: `Data` stages in `Data.partial`.
pub fn staging_dir(root: &Path) -> Result<PathBuf, GenError> {
    let name = root.file_name().ok_or_else(|| {
        GenError::InvalidConfig(format!("data directory {} has no name", root.display()))
    })?;
    let mut staged = name.to_os_string();
    staged.push(".partial");
    Ok(root.with_file_name(staged))
}

/// Removes `dir` and everything below it, if present.
pub fn clear_dir(dir: &Path) -> Result<(), GenError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|source| GenError::ClearDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        if dir.exists() {
            return Err(GenError::StaleDirectory(dir.to_path_buf()));
        }
        debug!("Cleared {}", dir.display());
    }
    Ok(())
}

/// Wipes `root` and recreates it with one empty directory per kind.
pub fn prepare_output(root: &Path, kinds: &[ShapeKind]) -> Result<(), GenError> {
    clear_dir(root)?;
    fs::create_dir_all(root).map_err(|source| GenError::CreateDirectory {
        path: root.to_path_buf(),
        source,
    })?;
    for kind in kinds {
        let dir = root.join(kind.dir_name());
        fs::create_dir(&dir).map_err(|source| GenError::CreateDirectory { path: dir, source })?;
    }
    Ok(())
}

/// Moves a finished staging directory to its final name.
pub fn publish(staging: &Path, root: &Path) -> Result<(), GenError> {
    clear_dir(root)?;
    fs::rename(staging, root)?;
    Ok(())
}

pub fn save_png(img: &RgbImage, path: &Path) -> Result<(), GenError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| GenError::Image {
            path: path.to_path_buf(),
            source,
        })
}

impl DatasetGenerator<'_> {
    pub fn init_output(&mut self) -> Result<(), GenError> {
        if self.config.manifest && self.writer.is_none() {
            let path = self.config.out_dir.join(MANIFEST);
            let file = File::create(path)?;
            self.writer = Some(BufWriter::with_capacity(1 << 20, file));
        }
        Ok(())
    }

    pub fn write_record(&mut self, rec: &JsonRecord) -> Result<(), GenError> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(rec)?;
            writeln!(writer, "{json}")?;
        }
        Ok(())
    }

    pub fn finalize_output(&mut self) -> Result<(), GenError> {
        if let Some(writer) = self.writer.take() {
            writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        }
        Ok(())
    }
}
