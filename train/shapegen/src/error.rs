use std::path::PathBuf;

use thiserror::Error;

use crate::shapes::ShapeKind;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("sample count must be positive, got {0}")]
    InvalidCount(u32),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing runtime capability: {0}")]
    Capability(String),
    #[error("failed to clear data directory {}", path.display())]
    ClearDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("data directory {} still exists after clearing", .0.display())]
    StaleDirectory(PathBuf),
    #[error("failed to create directory {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sampling exhausted for {kind} after {attempts} attempts")]
    SamplingExhausted { kind: ShapeKind, attempts: u32 },
    #[error("image error at {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("malformed dataset: {0}")]
    Dataset(String),
    #[error("failed to encode manifest record")]
    Manifest(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
