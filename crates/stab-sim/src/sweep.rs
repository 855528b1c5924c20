//! Parallel execution of independent build requests.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, StabError};
use tracing::info;

use crate::config::SweepConfig;

/// Summary of one finished job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRecord {
    /// Position of the job in the sweep file.
    pub index: usize,
    /// Code selector.
    pub selector: String,
    /// Syndrome rounds.
    pub rounds: usize,
    /// Physical qubits.
    pub qubits: usize,
    /// Measurement record length.
    pub measurements: usize,
    /// Detector count.
    pub detectors: usize,
    /// Canonical circuit hash.
    pub circuit_hash: String,
}

/// Builds every job on a pool of `config.parallelism` threads.
///
/// Results come back in job order regardless of scheduling; the first
/// failing job aborts the sweep.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepRecord>, StabError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelism.max(1))
        .build()
        .map_err(|err| StabError::Io(ErrorInfo::new("thread-pool", err.to_string())))?;

    let results: Result<Vec<SweepRecord>, StabError> = pool.install(|| {
        config
            .jobs
            .par_iter()
            .enumerate()
            .map(|(index, job)| -> Result<SweepRecord, StabError> {
                let model = job
                    .builder()
                    .and_then(|builder| builder.build())
                    .map_err(|err| tag_job(err, index))?;
                let circuit = model.circuit();
                Ok(SweepRecord {
                    index,
                    selector: model.provenance().selector.clone(),
                    rounds: job.rounds,
                    qubits: model.layout().num_qubits(),
                    measurements: circuit.num_measurements(),
                    detectors: circuit.num_detectors(),
                    circuit_hash: model.provenance().artifact_hash.clone(),
                })
            })
            .collect()
    });

    let mut records = results?;
    records.sort_by_key(|record| record.index);
    info!(jobs = records.len(), threads = config.parallelism.max(1), "sweep finished");
    Ok(records)
}

fn tag_job(err: StabError, index: usize) -> StabError {
    let info = err.info().clone().with_context("job", index);
    match err {
        StabError::Config(_) => StabError::Config(info),
        StabError::Matrix(_) => StabError::Matrix(info),
        StabError::Geometry(_) => StabError::Geometry(info),
        StabError::Invariant(_) => StabError::Invariant(info),
        StabError::Serde(_) => StabError::Serde(info),
        StabError::Io(_) => StabError::Io(info),
    }
}
