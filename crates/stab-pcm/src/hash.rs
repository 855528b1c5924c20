use sha2::{Digest, Sha256};

use crate::hypergraph::HypergraphProduct;
use crate::matrix::BinaryMatrix;

fn update_matrix(hasher: &mut Sha256, matrix: &BinaryMatrix) {
    hasher.update((matrix.rows() as u64).to_le_bytes());
    hasher.update((matrix.cols() as u64).to_le_bytes());
    for row in 0..matrix.rows() {
        let support = matrix.row_support(row);
        hasher.update((support.len() as u64).to_le_bytes());
        for col in support {
            hasher.update((col as u64).to_le_bytes());
        }
    }
}

fn hex(digest: &[u8]) -> String {
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Canonical SHA-256 hash of a single matrix.
pub fn canonical_matrix_hash(matrix: &BinaryMatrix) -> String {
    let mut hasher = Sha256::new();
    update_matrix(&mut hasher, matrix);
    hex(&hasher.finalize())
}

/// Canonical SHA-256 hash of a hypergraph-product pair and its factor shapes.
pub fn canonical_product_hash(product: &HypergraphProduct) -> String {
    let mut hasher = Sha256::new();
    let (r1, n1) = product.h1_shape();
    let (r2, n2) = product.h2_shape();
    for dim in [r1, n1, r2, n2] {
        hasher.update((dim as u64).to_le_bytes());
    }
    update_matrix(&mut hasher, product.hx());
    update_matrix(&mut hasher, product.hz());
    hex(&hasher.finalize())
}
