use serde::Serialize;
use sha2::{Digest, Sha256};
use stab_core::{ErrorInfo, StabError};

use crate::circuit::Circuit;
use crate::family::CodeFamily;
use crate::noise::NoiseConfig;

fn hex(digest: &[u8]) -> String {
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// SHA-256 of the circuit's stim text rendering.
pub fn canonical_circuit_hash(circuit: &Circuit) -> String {
    let mut hasher = Sha256::new();
    hasher.update(circuit.to_string().as_bytes());
    hex(&hasher.finalize())
}

#[derive(Serialize)]
struct ConfigView<'a> {
    code: &'a CodeFamily,
    noise: &'a NoiseConfig,
    rounds: usize,
}

/// SHA-256 of the canonical JSON form of a build request.
pub fn config_hash(
    family: &CodeFamily,
    noise: &NoiseConfig,
    rounds: usize,
) -> Result<String, StabError> {
    let view = ConfigView {
        code: family,
        noise,
        rounds,
    };
    let json = serde_json::to_vec(&view)
        .map_err(|err| StabError::Serde(ErrorInfo::new("json-serialize", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(&json);
    Ok(hex(&hasher.finalize()))
}
