use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use stab_circuit::{Layout, ProductCodeModel};

use super::parse_code;

#[derive(Args, Debug)]
pub struct CrossingsArgs {
    /// First classical code, e.g. `"B C 0 1 B"`.
    #[arg(long)]
    pub clist1: String,
    /// Second classical code.
    #[arg(long)]
    pub clist2: String,
    /// YAML map from qubit index to `[x, y]` drawing position.
    #[arg(long)]
    pub pos: Option<PathBuf>,
}

pub fn run(args: &CrossingsArgs) -> Result<(), Box<dyn Error>> {
    let code1 = parse_code(&args.clist1)?;
    let code2 = parse_code(&args.clist2)?;
    let pos: Option<BTreeMap<usize, (f64, f64)>> = match &args.pos {
        Some(path) => Some(serde_yaml::from_str(&fs::read_to_string(path)?)?),
        None => None,
    };
    let layout = Layout::hypergraph(&code1, &code2)?;
    let model = ProductCodeModel::new(&code1, &code2, &layout, pos.as_ref())?;
    let pairs: Vec<_> = model
        .crossings()
        .iter()
        .map(|pair| {
            let (a, b) = pair.edges();
            [a.endpoints(), b.endpoints()]
        })
        .collect();
    let report = json!({
        "roles": layout.role_string(),
        "crossings": pairs.len(),
        "pairs": pairs,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
