use std::{collections::BTreeMap, fs::File, io::BufWriter, path::PathBuf};

use image::RgbImage;
use log::{debug, info};
use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};
use rand_xoshiro::SplitMix64;
use rayon::prelude::*;

use crate::{
    color::random_color,
    config::GenCfg,
    error::GenError,
    io,
    record::JsonRecord,
    render,
    shapes::{self, ShapeKind, ShapeParams},
};

/// One rendered sample, not yet written anywhere.
pub struct Sample {
    pub kind: ShapeKind,
    pub index: u32,
    pub seed: u64,
    pub params: ShapeParams,
    pub color: [u8; 3],
    pub image: RgbImage,
}

#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub root: PathBuf,
    pub count: u32,
    pub seed: u64,
    pub per_kind: BTreeMap<ShapeKind, u32>,
}

/// Stream seed for sample `index` of `kind`, independent of generation order.
pub fn sample_seed(base: u64, kind: ShapeKind, index: u32) -> u64 {
    let key = ((kind.index() as u64) << 32) | index as u64;
    let mut sm = SplitMix64::seed_from_u64(base ^ key);
    sm.next_u64()
}

/// Samples and rasterizes one image. `cfg` must be validated.
pub fn render_sample(
    cfg: &GenCfg,
    base_seed: u64,
    kind: ShapeKind,
    index: u32,
) -> Result<Sample, GenError> {
    let seed = sample_seed(base_seed, kind, index);
    let mut rng = SmallRng::seed_from_u64(seed);

    let params = shapes::sample(kind, &mut rng, cfg)?;
    let color = random_color(&mut rng, cfg.max_brightness);
    let image = render::render(&params, color, cfg.width, cfg.height);

    Ok(Sample {
        kind,
        index,
        seed,
        params,
        color: color.0,
        image,
    })
}

pub struct DatasetGenerator<'a> {
    pub config: &'a GenCfg,
    pub seed: u64,
    pub(crate) writer: Option<BufWriter<File>>,
}

impl<'a> DatasetGenerator<'a> {
    pub fn new(config: &'a GenCfg, seed: u64) -> Self {
        Self {
            config,
            seed,
            writer: None,
        }
    }

    /// Renders and saves every sample of `kind`. Files are written in
    /// parallel; manifest lines keep index order.
    pub fn generate_kind(&mut self, kind: ShapeKind) -> Result<u32, GenError> {
        let cfg = self.config;
        let seed = self.seed;
        let records: Vec<JsonRecord> = (0..cfg.count)
            .into_par_iter()
            .map(|index| -> Result<JsonRecord, GenError> {
                let sample = render_sample(cfg, seed, kind, index)?;
                let path = io::sample_path(&cfg.out_dir, kind, index, cfg.count);
                io::save_png(&sample.image, &path)?;
                debug!("Saved image to {}", path.display());
                Ok(JsonRecord {
                    schema: "v1",
                    image: io::sample_rel_path(kind, index, cfg.count),
                    label: kind,
                    index,
                    seed: sample.seed,
                    color: sample.color,
                    params: sample.params,
                })
            })
            .collect::<Result<_, _>>()?;

        for rec in &records {
            self.write_record(rec)?;
        }
        Ok(records.len() as u32)
    }
}

/// Validates `cfg`, wipes its output directory and writes the full dataset.
pub fn generate(cfg: &GenCfg) -> Result<DatasetSummary, GenError> {
    cfg.validate()?;
    render::check_capabilities()?;

    let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        "Generating {} samples per shape into {} (seed {seed})",
        cfg.count,
        cfg.out_dir.display()
    );

    // a failed run leaves only `{out_dir}.partial` behind, never `out_dir`
    let staging = io::staging_dir(&cfg.out_dir)?;
    io::clear_dir(&cfg.out_dir)?;
    io::prepare_output(&staging, &ShapeKind::ALL)?;
    let staged = GenCfg {
        out_dir: staging.clone(),
        ..cfg.clone()
    };

    let mut generator = DatasetGenerator::new(&staged, seed);
    generator.init_output()?;

    let mut per_kind = BTreeMap::new();
    for kind in ShapeKind::ALL {
        info!("Generating {kind} data...");
        let n = generator.generate_kind(kind)?;
        per_kind.insert(kind, n);
    }
    generator.finalize_output()?;

    io::publish(&staging, &cfg.out_dir)?;

    Ok(DatasetSummary {
        root: cfg.out_dir.clone(),
        count: cfg.count,
        seed,
        per_kind,
    })
}
