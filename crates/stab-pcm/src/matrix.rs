use std::fmt;

use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, StabError};

/// Dense binary matrix over GF(2), stored row-major with one byte per entry.
///
/// Every entry is 0 or 1. Serialized as a list of rows, so a matrix with no
/// rows loses its column count on a round-trip.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<u8>,
}

fn shape_error(code: &str, message: &str, left: &BinaryMatrix, right: &BinaryMatrix) -> StabError {
    StabError::Matrix(
        ErrorInfo::new(code, message)
            .with_context("left", format!("{}x{}", left.rows, left.cols))
            .with_context("right", format!("{}x{}", right.rows, right.cols)),
    )
}

impl BinaryMatrix {
    /// All-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![0; rows * cols],
        }
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.entries[i * n + i] = 1;
        }
        matrix
    }

    /// Builds a matrix from explicit rows, rejecting ragged rows and non-binary entries.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, StabError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut entries = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                let info = ErrorInfo::new("ragged-rows", "matrix rows must share one length")
                    .with_context("row", idx)
                    .with_context("expected", cols)
                    .with_context("given", row.len());
                return Err(StabError::Matrix(info));
            }
            if let Some(&bad) = row.iter().find(|&&bit| bit > 1) {
                let info = ErrorInfo::new("non-binary-entry", "matrix entries must be 0 or 1")
                    .with_context("row", idx)
                    .with_context("value", bad);
                return Err(StabError::Matrix(info));
            }
            entries.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            entries,
        })
    }

    /// Builds a matrix whose row `i` has ones exactly at `supports[i]`.
    pub fn from_supports(cols: usize, supports: &[Vec<usize>]) -> Result<Self, StabError> {
        let mut matrix = Self::zeros(supports.len(), cols);
        for (row, support) in supports.iter().enumerate() {
            for &col in support {
                if col >= cols {
                    let info = ErrorInfo::new("column-out-of-range", "support index exceeds width")
                        .with_context("row", row)
                        .with_context("column", col)
                        .with_context("cols", cols);
                    return Err(StabError::Matrix(info));
                }
                matrix.set(row, col, 1);
            }
        }
        Ok(matrix)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the matrix has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Entry at `(row, col)`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.entries[row * self.cols + col]
    }

    /// Sets entry `(row, col)` to `bit & 1`.
    pub fn set(&mut self, row: usize, col: usize, bit: u8) {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.entries[row * self.cols + col] = bit & 1;
    }

    /// Borrow of row `row`.
    pub fn row(&self, row: usize) -> &[u8] {
        &self.entries[row * self.cols..(row + 1) * self.cols]
    }

    /// Column indices holding a one in `row`.
    pub fn row_support(&self, row: usize) -> Vec<usize> {
        self.row(row)
            .iter()
            .enumerate()
            .filter_map(|(col, &bit)| (bit == 1).then_some(col))
            .collect()
    }

    /// Row indices holding a one in `col`.
    pub fn column_support(&self, col: usize) -> Vec<usize> {
        (0..self.rows).filter(|&row| self.get(row, col) == 1).collect()
    }

    /// Returns the matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.entries[col * self.rows + row] = self.entries[row * self.cols + col];
            }
        }
        out
    }

    /// Kronecker product `self ⊗ other`.
    pub fn kron(&self, other: &Self) -> Self {
        let rows = self.rows * other.rows;
        let cols = self.cols * other.cols;
        let mut out = Self::zeros(rows, cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.get(i, j) == 0 {
                    continue;
                }
                for k in 0..other.rows {
                    for l in 0..other.cols {
                        let bit = other.get(k, l);
                        if bit == 1 {
                            out.entries[(i * other.rows + k) * cols + j * other.cols + l] = 1;
                        }
                    }
                }
            }
        }
        out
    }

    /// Horizontal concatenation `[self | other]`.
    pub fn hstack(&self, other: &Self) -> Result<Self, StabError> {
        if self.rows != other.rows {
            return Err(shape_error(
                "hstack-row-mismatch",
                "horizontal concatenation needs equal row counts",
                self,
                other,
            ));
        }
        let cols = self.cols + other.cols;
        let mut entries = Vec::with_capacity(self.rows * cols);
        for row in 0..self.rows {
            entries.extend_from_slice(self.row(row));
            entries.extend_from_slice(other.row(row));
        }
        Ok(Self {
            rows: self.rows,
            cols,
            entries,
        })
    }

    /// Matrix product over GF(2).
    pub fn mul(&self, other: &Self) -> Result<Self, StabError> {
        if self.cols != other.rows {
            return Err(shape_error(
                "product-shape-mismatch",
                "inner dimensions of the product differ",
                self,
                other,
            ));
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                if self.get(i, k) == 0 {
                    continue;
                }
                for j in 0..other.cols {
                    out.entries[i * other.cols + j] ^= other.get(k, j);
                }
            }
        }
        Ok(out)
    }

    /// True when every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&bit| bit == 0)
    }

    /// Rank over GF(2) by Gauss-Jordan elimination on bit-packed rows.
    pub fn rank(&self) -> usize {
        let width = self.cols.div_ceil(64);
        let mut rows: Vec<Vec<u64>> = (0..self.rows)
            .map(|row| {
                let mut packed = vec![0u64; width];
                for col in self.row_support(row) {
                    packed[col / 64] ^= 1u64 << (col % 64);
                }
                packed
            })
            .collect();

        let mut rank = 0;
        for col in 0..self.cols {
            if rank == rows.len() {
                break;
            }
            let bucket = col / 64;
            let offset = col % 64;
            let Some(pivot) = (rank..rows.len()).find(|&r| (rows[r][bucket] >> offset) & 1 == 1)
            else {
                continue;
            };
            rows.swap(rank, pivot);
            for r in 0..rows.len() {
                if r != rank && (rows[r][bucket] >> offset) & 1 == 1 {
                    for k in 0..width {
                        let value = rows[rank][k];
                        rows[r][k] ^= value;
                    }
                }
            }
            rank += 1;
        }
        rank
    }
}

impl TryFrom<Vec<Vec<u8>>> for BinaryMatrix {
    type Error = StabError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<BinaryMatrix> for Vec<Vec<u8>> {
    fn from(matrix: BinaryMatrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Debug for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryMatrix({}x{})", self.rows, self.cols)?;
        if !self.is_empty() {
            write!(f, "\n{self}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for &bit in self.row(row) {
                write!(f, "{bit}")?;
            }
        }
        Ok(())
    }
}
