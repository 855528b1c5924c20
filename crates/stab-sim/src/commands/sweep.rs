use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::load_sweep_config;
use crate::sweep::run_sweep;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// YAML sweep file listing build jobs.
    #[arg(long)]
    pub plan: PathBuf,
    /// Overrides the file's worker thread count.
    #[arg(long)]
    pub parallelism: Option<usize>,
    /// Write the JSON report here instead of printing it.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_sweep_config(&args.plan)?;
    if let Some(parallelism) = args.parallelism {
        config.parallelism = parallelism;
    }
    let records = run_sweep(&config)?;
    let json = serde_json::to_string_pretty(&records)?;
    match &args.out {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
