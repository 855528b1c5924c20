use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, StabError};

use crate::classical::ClassicalCode;
use crate::hash;
use crate::matrix::BinaryMatrix;

/// Computes the hypergraph-product pair
///
/// ```text
/// HX = [H1 ⊗ I_n2 | I_r1 ⊗ H2ᵀ]
/// HZ = [I_n1 ⊗ H2 | H1ᵀ ⊗ I_r2]
/// ```
///
/// for `H1: r1 x n1` and `H2: r2 x n2`. Both inputs must be non-empty.
pub fn hypergraph_pcm(
    h1: &BinaryMatrix,
    h2: &BinaryMatrix,
) -> Result<(BinaryMatrix, BinaryMatrix), StabError> {
    for (name, matrix) in [("h1", h1), ("h2", h2)] {
        if matrix.is_empty() {
            let info = ErrorInfo::new("empty-matrix", "hypergraph product needs non-empty inputs")
                .with_context("operand", name)
                .with_context("shape", format!("{}x{}", matrix.rows(), matrix.cols()));
            return Err(StabError::Matrix(info));
        }
    }
    let (r1, n1) = h1.shape();
    let (r2, n2) = h2.shape();

    let hx = h1
        .kron(&BinaryMatrix::identity(n2))
        .hstack(&BinaryMatrix::identity(r1).kron(&h2.transpose()))?;
    let hz = BinaryMatrix::identity(n1)
        .kron(h2)
        .hstack(&h1.transpose().kron(&BinaryMatrix::identity(r2)))?;

    let num_data = n1 * n2 + r1 * r2;
    if hx.shape() != (r1 * n2, num_data) || hz.shape() != (n1 * r2, num_data) {
        let info = ErrorInfo::new("product-shape", "hypergraph product blocks have wrong shape")
            .with_context("hx", format!("{}x{}", hx.rows(), hx.cols()))
            .with_context("hz", format!("{}x{}", hz.rows(), hz.cols()));
        return Err(StabError::Invariant(info));
    }
    Ok((hx, hz))
}

/// Hypergraph-product CSS code together with the shapes of its factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypergraphProduct {
    hx: BinaryMatrix,
    hz: BinaryMatrix,
    h1_shape: (usize, usize),
    h2_shape: (usize, usize),
}

impl HypergraphProduct {
    /// Builds the product of two classical parity-check matrices.
    pub fn new(h1: &BinaryMatrix, h2: &BinaryMatrix) -> Result<Self, StabError> {
        let (hx, hz) = hypergraph_pcm(h1, h2)?;
        Ok(Self {
            hx,
            hz,
            h1_shape: h1.shape(),
            h2_shape: h2.shape(),
        })
    }

    /// Builds the product of two classical code descriptions.
    pub fn from_codes(code1: &ClassicalCode, code2: &ClassicalCode) -> Result<Self, StabError> {
        Self::new(&code1.parity_check_matrix()?, &code2.parity_check_matrix()?)
    }

    pub(crate) fn from_parts(
        hx: BinaryMatrix,
        hz: BinaryMatrix,
        h1_shape: (usize, usize),
        h2_shape: (usize, usize),
    ) -> Result<Self, StabError> {
        let (r1, n1) = h1_shape;
        let (r2, n2) = h2_shape;
        let num_data = n1 * n2 + r1 * r2;
        if hx.shape() != (r1 * n2, num_data) || hz.shape() != (n1 * r2, num_data) {
            let info = ErrorInfo::new("product-shape", "stored matrices do not match factor shapes")
                .with_context("h1", format!("{r1}x{n1}"))
                .with_context("h2", format!("{r2}x{n2}"));
            return Err(StabError::Serde(info));
        }
        Ok(Self {
            hx,
            hz,
            h1_shape,
            h2_shape,
        })
    }

    /// X-type parity-check matrix.
    pub fn hx(&self) -> &BinaryMatrix {
        &self.hx
    }

    /// Z-type parity-check matrix.
    pub fn hz(&self) -> &BinaryMatrix {
        &self.hz
    }

    /// `(r1, n1)` of the first factor.
    pub fn h1_shape(&self) -> (usize, usize) {
        self.h1_shape
    }

    /// `(r2, n2)` of the second factor.
    pub fn h2_shape(&self) -> (usize, usize) {
        self.h2_shape
    }

    /// Number of data qubits, `n1·n2 + r1·r2`.
    pub fn num_data_qubits(&self) -> usize {
        self.hx.cols()
    }

    /// Number of X checks, `r1·n2`.
    pub fn num_x_checks(&self) -> usize {
        self.hx.rows()
    }

    /// Number of Z checks, `n1·r2`.
    pub fn num_z_checks(&self) -> usize {
        self.hz.rows()
    }

    /// Total physical qubits including ancillas, `(r1+n1)·(r2+n2)`.
    pub fn num_qubits(&self) -> usize {
        self.num_data_qubits() + self.num_x_checks() + self.num_z_checks()
    }

    /// True when `HX·HZᵀ = 0` over GF(2).
    pub fn commutes(&self) -> bool {
        self.hx
            .mul(&self.hz.transpose())
            .map(|product| product.is_zero())
            .unwrap_or(false)
    }

    /// Number of encoded logical qubits, `n − rank HX − rank HZ`.
    pub fn num_logical(&self) -> usize {
        self.num_data_qubits()
            .saturating_sub(self.hx.rank() + self.hz.rank())
    }

    /// Canonical structural hash.
    pub fn canonical_hash(&self) -> String {
        hash::canonical_product_hash(self)
    }
}
