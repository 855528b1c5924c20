use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use stab_core::{BuildProvenance, RngHandle};
use stab_pcm::{gen_random_code, serde_io, ClassicalCode, HypergraphProduct};

use super::parse_code;

#[derive(Args, Debug, Default)]
pub struct PcmArgs {
    /// First classical code, e.g. `"B C 0 1 B"`.
    #[arg(long, required_unless_present = "random")]
    pub clist1: Option<String>,
    /// Second classical code.
    #[arg(long, required_unless_present = "random")]
    pub clist2: Option<String>,
    /// Draw both factors at random as `BITS,CHECKS,ROW_WEIGHT`.
    #[arg(long, value_parser = parse_random, conflicts_with_all = ["clist1", "clist2"])]
    pub random: Option<(usize, usize, usize)>,
    /// Master seed for `--random`; the factors use streams 1 and 2.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Write the product as JSON here instead of printing it.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn parse_random(text: &str) -> Result<(usize, usize, usize), String> {
    let parts = text
        .split(',')
        .map(|part| part.trim().parse::<usize>().map_err(|err| format!("`{part}`: {err}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [bits, checks, weight] => Ok((*bits, *checks, *weight)),
        _ => Err(format!("expected BITS,CHECKS,ROW_WEIGHT, got `{text}`")),
    }
}

/// The two classical factors selected by `args`.
pub fn factors(args: &PcmArgs) -> Result<(ClassicalCode, ClassicalCode), Box<dyn Error>> {
    if let Some((bits, checks, weight)) = args.random {
        let code1 = gen_random_code(bits, checks, weight, &mut RngHandle::substream(args.seed, 1))?;
        let code2 = gen_random_code(bits, checks, weight, &mut RngHandle::substream(args.seed, 2))?;
        return Ok((code1, code2));
    }
    let clist1 = args.clist1.as_deref().ok_or("--clist1 is required")?;
    let clist2 = args.clist2.as_deref().ok_or("--clist2 is required")?;
    Ok((parse_code(clist1)?, parse_code(clist2)?))
}

pub fn run(args: &PcmArgs) -> Result<(), Box<dyn Error>> {
    let (code1, code2) = factors(args)?;
    let product = HypergraphProduct::from_codes(&code1, &code2)?;
    if let Some(path) = &args.out {
        let json = serde_io::to_json(&product, BuildProvenance::new("hypergraph_product_code", 0))?;
        fs::write(path, json)?;
        return Ok(());
    }
    println!("clist1 = {code1}");
    println!("clist2 = {code2}");
    println!(
        "n = {}, x checks = {}, z checks = {}, logical = {}, commutes = {}",
        product.num_data_qubits(),
        product.num_x_checks(),
        product.num_z_checks(),
        product.num_logical(),
        product.commutes()
    );
    println!("HX =\n{}", product.hx());
    println!("HZ =\n{}", product.hz());
    Ok(())
}
