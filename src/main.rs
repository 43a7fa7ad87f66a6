//! Terrain solid exporter: height samples in, watertight STL out.

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use relief_mesh::{BuildParams, build_terrain};
use relief_stl::save_stl;

use crate::sample::{DigitStream, SampleSource, UniformNoise};

mod sample;

#[derive(Parser, Debug)]
#[command(
    name = "relief",
    about = "Builds a watertight terrain solid from height samples"
)]
struct Cli {
    /// Where the height samples come from.
    #[arg(long, value_enum, default_value = "stdin")]
    source: Source,

    /// Output STL path.
    #[arg(long, default_value = "output.stl")]
    out: PathBuf,

    /// TOML file overriding the build parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for the random source.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Decode decimal digits from stdin.
    Stdin,
    /// Generate uniformly random offsets.
    Random,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let params = match &cli.config {
        Some(path) => BuildParams::from_path(path)?,
        None => match cli.source {
            Source::Stdin => BuildParams::DIGIT,
            Source::Random => BuildParams::NOISE,
        },
    };

    let offsets = match cli.source {
        Source::Stdin => DigitStream::new(io::stdin().lock()).collect()?,
        Source::Random => UniformNoise::new(cli.seed).collect()?,
    };
    log::info!("collected {} height samples", offsets.len());

    let tris = build_terrain(&offsets, &params)?;
    save_stl(&cli.out, &tris)?;
    log::info!("wrote {} triangles to {}", tris.len(), cli.out.display());
    Ok(())
}
