use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbImage;
use log::debug;

use crate::{error::GenError, io::sample_file_name, shapes::ShapeKind};

#[derive(Debug)]
pub struct LabeledImage {
    pub path: PathBuf,
    pub label: ShapeKind,
    pub image: RgbImage,
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let mut paths = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

/// Checks that `files` are exactly `0.png..n.png` padded to the digits of
/// `n`, and returns `n`.
fn contiguous_count(dir: &Path, files: &[PathBuf]) -> Result<u32, GenError> {
    let n = u32::try_from(files.len())
        .map_err(|_| GenError::Dataset(format!("too many files in {}", dir.display())))?;
    if n == 0 {
        return Err(GenError::Dataset(format!("{} is empty", dir.display())));
    }
    let mut expected: Vec<String> = (0..n).map(|i| sample_file_name(i, n)).collect();
    expected.sort();
    for (path, want) in files.iter().zip(&expected) {
        if path.file_name().and_then(|f| f.to_str()) != Some(want.as_str()) {
            return Err(GenError::Dataset(format!(
                "{} does not hold a contiguous run of {n} samples (found {}, expected {want})",
                dir.display(),
                path.display()
            )));
        }
    }
    Ok(n)
}

/// Reads every category directory under `root` and decodes its images.
///
/// Fails on unknown subdirectories, missing categories, non-PNG files,
/// categories whose files are not one contiguous `0..n` run with the same
/// `n` everywhere, and rasters whose size differs from the first one.
/// Plain files directly in `root` (the manifest) are ignored.
pub fn load_dataset(root: &Path) -> Result<Vec<LabeledImage>, GenError> {
    let mut categories = Vec::new();
    for path in sorted_entries(root)? {
        if !path.is_dir() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GenError::Dataset(format!("bad directory name {}", path.display())))?;
        let label: ShapeKind = name.parse().map_err(GenError::Dataset)?;
        categories.push((label, path));
    }
    for kind in ShapeKind::ALL {
        if !categories.iter().any(|(k, _)| *k == kind) {
            return Err(GenError::Dataset(format!("missing {kind} directory")));
        }
    }
    categories.sort_by_key(|(k, _)| *k);

    let mut count = None;
    let mut dims = None;
    let mut out = Vec::new();
    for (label, dir) in categories {
        let files = sorted_entries(&dir)?;
        if let Some(path) = files
            .iter()
            .find(|p| p.extension().and_then(|e| e.to_str()) != Some("png"))
        {
            return Err(GenError::Dataset(format!("unexpected file {}", path.display())));
        }
        let n = contiguous_count(&dir, &files)?;
        match count {
            None => count = Some(n),
            Some(c) if c != n => {
                return Err(GenError::Dataset(format!("{label} holds {n} samples, expected {c}")));
            }
            Some(_) => {}
        }

        for path in files {
            let image = image::open(&path)
                .map_err(|source| GenError::Image {
                    path: path.clone(),
                    source,
                })?
                .to_rgb8();
            match dims {
                None => dims = Some(image.dimensions()),
                Some(d) if d != image.dimensions() => {
                    return Err(GenError::Dataset(format!(
                        "{} is {:?}, expected {:?}",
                        path.display(),
                        image.dimensions(),
                        d
                    )));
                }
                Some(_) => {}
            }
            out.push(LabeledImage { path, label, image });
        }
        debug!("Loaded {label}");
    }
    Ok(out)
}
