use std::error::Error;

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the version of every workspace component as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    schema: String,
    components: Vec<String>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let schema = stab_core::SchemaVersion::default();
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        schema: format!("{}.{}.{}", schema.major, schema.minor, schema.patch),
        components: ["stab-core", "stab-pcm", "stab-graph", "stab-circuit", "stab-sim"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
