use serde::{Deserialize, Serialize};
use stab_core::{BuildProvenance, ErrorInfo, SchemaVersion, StabError};

use crate::hypergraph::HypergraphProduct;
use crate::matrix::BinaryMatrix;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableProduct {
    schema_version: SchemaVersion,
    provenance: BuildProvenance,
    h1_shape: (usize, usize),
    h2_shape: (usize, usize),
    hx: BinaryMatrix,
    hz: BinaryMatrix,
}

/// Serializes a hypergraph product to pretty JSON, stamping its hash into the provenance.
pub fn to_json(
    product: &HypergraphProduct,
    mut provenance: BuildProvenance,
) -> Result<String, StabError> {
    if provenance.artifact_hash.is_empty() {
        provenance.artifact_hash = product.canonical_hash();
    }
    let payload = SerializableProduct {
        schema_version: SchemaVersion::default(),
        provenance,
        h1_shape: product.h1_shape(),
        h2_shape: product.h2_shape(),
        hx: product.hx().clone(),
        hz: product.hz().clone(),
    };
    serde_json::to_string_pretty(&payload)
        .map_err(|err| StabError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a hypergraph product and its provenance from JSON.
pub fn from_json(data: &str) -> Result<(HypergraphProduct, BuildProvenance), StabError> {
    let payload: SerializableProduct = serde_json::from_str(data)
        .map_err(|err| StabError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    let product =
        HypergraphProduct::from_parts(payload.hx, payload.hz, payload.h1_shape, payload.h2_shape)?;
    Ok((product, payload.provenance))
}

/// Serializes a hypergraph product into a binary blob.
pub fn to_bytes(
    product: &HypergraphProduct,
    provenance: BuildProvenance,
) -> Result<Vec<u8>, StabError> {
    let json = to_json(product, provenance)?;
    bincode::serialize(&json)
        .map_err(|err| StabError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a hypergraph product from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<(HypergraphProduct, BuildProvenance), StabError> {
    let json: String = bincode::deserialize(bytes)
        .map_err(|err| StabError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    from_json(&json)
}
