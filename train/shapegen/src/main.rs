use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use shapegen::{GenCfg, ShapeKind, generate, load_dataset};

/// Synthesize a labeled dataset of outlined shapes on small canvases.
#[derive(Parser)]
#[command(name = "shapegen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Wipe the data directory and generate every shape category
    Generate(GenerateArgs),
    /// Load an existing dataset and report per-label counts
    Verify {
        /// Data directory to check
        #[arg(short, long, default_value = "Data")]
        out: PathBuf,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Images per shape category
    count: Option<u32>,

    /// JSON file with generator settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output data directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Base seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Upper bound for each outline colour channel
    #[arg(long)]
    max_brightness: Option<u8>,

    /// Rejection sampling cap per sample
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Worker threads (defaults to all cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Skip writing labels.jsonl
    #[arg(long)]
    no_manifest: bool,
}

impl GenerateArgs {
    fn into_config(self) -> anyhow::Result<GenCfg> {
        let mut cfg = match &self.config {
            Some(path) => GenCfg::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GenCfg::default(),
        };
        if let Some(v) = self.count {
            cfg.count = v;
        }
        if let Some(v) = self.out {
            cfg.out_dir = v;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.max_brightness {
            cfg.max_brightness = v;
        }
        if let Some(v) = self.max_attempts {
            cfg.max_attempts = v;
        }
        if self.no_manifest {
            cfg.manifest = false;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Generate(args) => {
            if let Some(n) = args.threads {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build_global()
                    .context("configuring thread pool")?;
            }
            let cfg = args.into_config()?;
            let summary = generate(&cfg).context("dataset generation failed")?;
            info!(
                "Dataset complete: {} x {} images in {} (seed {})",
                summary.per_kind.len(),
                summary.count,
                summary.root.display(),
                summary.seed
            );
        }
        Command::Verify { out } => {
            let items = load_dataset(&out)
                .with_context(|| format!("reading dataset at {}", out.display()))?;
            let mut counts: BTreeMap<ShapeKind, usize> = BTreeMap::new();
            for item in &items {
                *counts.entry(item.label).or_default() += 1;
            }
            for (label, n) in &counts {
                println!("{label}: {n}");
            }
            if let Some(first) = items.first() {
                let (w, h) = first.image.dimensions();
                println!("{} images, {w}x{h}", items.len());
            }
        }
    }
    Ok(())
}
