use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use plot_joint::data::sample::{SampleSpec, write_sample_experiment};

/// Write a synthetic experiment data directory for trying out plot-joint.
#[derive(Parser, Debug)]
struct Args {
    /// Output directory
    #[arg(default_value = "experiment_data_check")]
    out: PathBuf,

    /// Number of samples per file
    #[arg(long, default_value_t = 6000)]
    samples: usize,

    /// Control period in seconds
    #[arg(long, default_value_t = 0.001)]
    dt: f64,

    /// Noise seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    write_sample_experiment(
        &args.out,
        SampleSpec {
            samples: args.samples,
            dt: args.dt,
            seed: args.seed,
        },
    )?;

    println!(
        "Wrote {} samples of 7 log files to {}",
        args.samples,
        args.out.display()
    );
    Ok(())
}
