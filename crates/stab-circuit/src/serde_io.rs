use serde::{Deserialize, Serialize};
use stab_core::{BuildProvenance, ErrorInfo, SchemaVersion, StabError};

use crate::builder::StabilizerModel;
use crate::circuit::Circuit;
use crate::hash::canonical_circuit_hash;

/// Serializable snapshot of a built circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitArtifact {
    /// Payload schema.
    pub schema_version: SchemaVersion,
    /// Build provenance; `artifact_hash` is the circuit hash.
    pub provenance: BuildProvenance,
    /// Role label per qubit, e.g. `QZQZQ`.
    pub roles: String,
    /// The circuit itself.
    pub circuit: Circuit,
}

impl CircuitArtifact {
    /// Snapshot of `model`.
    pub fn from_model(model: &StabilizerModel) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            provenance: model.provenance().clone(),
            roles: model.layout().role_string(),
            circuit: model.circuit().clone(),
        }
    }
}

/// Serializes an artifact to pretty JSON, stamping the circuit hash if absent.
pub fn to_json(artifact: &CircuitArtifact) -> Result<String, StabError> {
    let mut artifact = artifact.clone();
    if artifact.provenance.artifact_hash.is_empty() {
        artifact.provenance.artifact_hash = canonical_circuit_hash(&artifact.circuit);
    }
    serde_json::to_string_pretty(&artifact)
        .map_err(|err| StabError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores an artifact from JSON and checks its recorded hash.
pub fn from_json(data: &str) -> Result<CircuitArtifact, StabError> {
    let artifact: CircuitArtifact = serde_json::from_str(data)
        .map_err(|err| StabError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    let actual = canonical_circuit_hash(&artifact.circuit);
    if !artifact.provenance.artifact_hash.is_empty() && artifact.provenance.artifact_hash != actual {
        let info = ErrorInfo::new("artifact-hash-mismatch", "stored circuit hash does not match")
            .with_context("stored", &artifact.provenance.artifact_hash)
            .with_context("actual", &actual);
        return Err(StabError::Serde(info));
    }
    artifact.circuit.validate()?;
    Ok(artifact)
}

/// Serializes an artifact into a binary blob.
pub fn to_bytes(artifact: &CircuitArtifact) -> Result<Vec<u8>, StabError> {
    let json = to_json(artifact)?;
    bincode::serialize(&json)
        .map_err(|err| StabError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates an artifact from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<CircuitArtifact, StabError> {
    let json: String = bincode::deserialize(bytes)
        .map_err(|err| StabError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    from_json(&json)
}
