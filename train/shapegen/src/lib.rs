pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod loader;
pub mod record;
pub mod render;
pub mod sampler;
pub mod shapes;

pub use config::GenCfg;
pub use error::GenError;
pub use generator::{DatasetGenerator, DatasetSummary, generate};
pub use loader::{LabeledImage, load_dataset};
pub use shapes::{ShapeKind, ShapeParams};
