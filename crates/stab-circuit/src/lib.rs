#![deny(missing_docs)]
#![doc = "Syndrome-extraction circuit synthesis for repetition, surface and hypergraph-product codes."]

/// Code synthesis entry points.
pub mod builder;
/// Circuit intermediate representation and stim text rendering.
pub mod circuit;
/// Code family selection.
pub mod family;
/// Canonical hashing of circuits and build requests.
pub mod hash;
/// Qubit role assignment on code lattices.
pub mod layout;
/// Noise configuration and channel parameter normalization.
pub mod noise;
/// Hypergraph-product stabilizers and Tanner graph.
pub mod product;
/// Absolute measurement record bookkeeping.
pub mod record;
/// JSON and binary round-trips for built circuits.
pub mod serde_io;

pub use builder::{StabilizerModel, SyndromeCircuitBuilder, MAX_ROUNDS};
pub use circuit::{Basis, Circuit, Gate, Instruction, NoiseChannel, RecTarget};
pub use family::{CodeFamily, CodeParams, MemoryBasis};
pub use hash::{canonical_circuit_hash, config_hash};
pub use layout::Layout;
pub use noise::{normalize, ChannelKind, NoiseConfig, NoiseSpec, ResolvedNoise};
pub use product::ProductCodeModel;
pub use record::MeasurementRecord;
pub use serde_io::CircuitArtifact;
