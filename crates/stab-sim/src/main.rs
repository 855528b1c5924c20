use std::error::Error;

use clap::{Parser, Subcommand};
use stab_sim::commands::{
    build::{self, BuildArgs},
    crossings::{self, CrossingsArgs},
    pcm::{self, PcmArgs},
    sweep::{self, SweepArgs},
    version::{self, VersionArgs},
};
use stab_sim::logging;

#[derive(Parser, Debug)]
#[command(name = "stab-sim", about = "Syndrome circuit synthesis for QEC memory experiments")]
struct Cli {
    /// Tracing directives, e.g. `stab_circuit=debug`; overrides RUST_LOG.
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize one circuit from a selector or a YAML config.
    Build(BuildArgs),
    /// Print or export the hypergraph-product parity-check matrices.
    Pcm(PcmArgs),
    /// Report crossing Tanner-graph edges of a hypergraph-product layout.
    Crossings(CrossingsArgs),
    /// Build every job of a sweep file in parallel.
    Sweep(SweepArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref())?;
    match cli.command {
        Command::Build(args) => build::run(&args),
        Command::Pcm(args) => pcm::run(&args),
        Command::Crossings(args) => crossings::run(&args),
        Command::Sweep(args) => sweep::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
