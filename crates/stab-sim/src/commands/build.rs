use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use stab_circuit::serde_io::to_json;
use stab_circuit::{CircuitArtifact, CodeFamily, CodeParams, NoiseConfig};
use tracing::info;

use super::{parse_code, parse_scale};
use crate::config::{load_build_config, BuildConfig};

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// YAML build configuration.
    #[arg(long, conflicts_with = "code")]
    pub config: Option<PathBuf>,
    /// Code selector, e.g. `surface_code:x_memory`.
    #[arg(long, required_unless_present = "config")]
    pub code: Option<String>,
    /// Repetition code distance.
    #[arg(long)]
    pub distance: Option<usize>,
    /// Surface code scale as `ROWS,COLS`.
    #[arg(long, value_parser = parse_scale)]
    pub scale: Option<(usize, usize)>,
    /// First classical code, e.g. `"B C 0 1 B"`.
    #[arg(long)]
    pub clist1: Option<String>,
    /// Second classical code.
    #[arg(long)]
    pub clist2: Option<String>,
    /// Total probability applied uniformly at every noise site.
    #[arg(long)]
    pub noise: Option<f64>,
    /// Syndrome rounds.
    #[arg(long, default_value_t = 1)]
    pub rounds: usize,
    /// Write a JSON artifact here instead of printing stim text.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Resolves the flags or config file into one build request.
pub fn resolve(args: &BuildArgs) -> Result<BuildConfig, Box<dyn Error>> {
    if let Some(path) = &args.config {
        return Ok(load_build_config(path)?);
    }
    let selector = args.code.as_deref().ok_or("--code or --config is required")?;
    let params = CodeParams {
        distance: args.distance,
        scale: args.scale,
        clist1: args.clist1.as_deref().map(parse_code).transpose()?,
        clist2: args.clist2.as_deref().map(parse_code).transpose()?,
        pos: None,
    };
    Ok(BuildConfig {
        code: CodeFamily::from_selector(selector, params)?,
        noise: args.noise.map(NoiseConfig::uniform).unwrap_or_default(),
        rounds: args.rounds,
    })
}

pub fn run(args: &BuildArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve(args)?;
    let model = config.builder()?.build()?;
    match &args.out {
        Some(path) => {
            let json = to_json(&CircuitArtifact::from_model(&model))?;
            fs::write(path, json)?;
            info!(
                path = %path.display(),
                hash = %model.provenance().artifact_hash,
                "circuit artifact written"
            );
        }
        None => print!("{}", model.circuit()),
    }
    Ok(())
}
