#![deny(missing_docs)]
#![doc = "Classical and hypergraph-product parity-check matrices over GF(2)."]

/// Classical code descriptions and their parity-check matrices.
pub mod classical;
/// Seeded random classical code generators.
pub mod generators;
/// Canonical hashing of matrices and products.
pub mod hash;
/// Hypergraph-product construction.
pub mod hypergraph;
/// Dense GF(2) matrices.
pub mod matrix;
/// JSON and binary round-trips for product codes.
pub mod serde_io;

pub use classical::{classical_pcm, ClassicalCode, CodeToken, Marker};
pub use generators::gen_random_code;
pub use hash::{canonical_matrix_hash, canonical_product_hash};
pub use hypergraph::{hypergraph_pcm, HypergraphProduct};
pub use matrix::BinaryMatrix;
