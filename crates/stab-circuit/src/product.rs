use std::collections::{BTreeMap, BTreeSet};

use stab_core::{ErrorInfo, QubitId, StabError};
use stab_graph::{intersecting_edges, EdgePair, Point};
use stab_pcm::{BinaryMatrix, ClassicalCode, HypergraphProduct, Marker};

use crate::layout::Layout;

/// Grid positions of the `B` and `C` markers along one product axis.
struct AxisPositions {
    bits: Vec<usize>,
    checks: Vec<usize>,
}

impl AxisPositions {
    fn of(code: &ClassicalCode) -> Self {
        let mut bits = Vec::new();
        let mut checks = Vec::new();
        for (position, marker) in code.markers().enumerate() {
            match marker {
                Marker::Bit => bits.push(position),
                Marker::Check => checks.push(position),
            }
        }
        Self { bits, checks }
    }
}

/// Hypergraph-product code placed on its lattice: stabilizers as qubit
/// supports, the Tanner graph between checks and data, and its crossings.
#[derive(Debug, Clone)]
pub struct ProductCodeModel {
    product: HypergraphProduct,
    x_stabilizers: BTreeMap<QubitId, Vec<QubitId>>,
    z_stabilizers: BTreeMap<QubitId, Vec<QubitId>>,
    tanner_adjacency: BinaryMatrix,
    positions: BTreeMap<usize, Point>,
    crossings: BTreeSet<EdgePair>,
}

impl ProductCodeModel {
    /// Builds the model for `code1 x code2` on `layout`.
    ///
    /// Qubits are drawn at `(x = col, y = row)` unless `pos` overrides them.
    pub fn new(
        code1: &ClassicalCode,
        code2: &ClassicalCode,
        layout: &Layout,
        pos: Option<&BTreeMap<usize, (f64, f64)>>,
    ) -> Result<Self, StabError> {
        let product = HypergraphProduct::from_codes(code1, code2)?;
        if product.num_qubits() != layout.num_qubits() {
            let info = ErrorInfo::new("layout-size-mismatch", "layout does not fit the product code")
                .with_context("product_qubits", product.num_qubits())
                .with_context("layout_qubits", layout.num_qubits());
            return Err(StabError::Invariant(info));
        }
        let axis1 = AxisPositions::of(code1);
        let axis2 = AxisPositions::of(code2);
        let (_, n1) = product.h1_shape();
        let (r2, n2) = product.h2_shape();

        let cell = |row: usize, col: usize| -> Result<QubitId, StabError> {
            layout.at((row, col)).ok_or_else(|| {
                StabError::Invariant(
                    ErrorInfo::new("cell-outside-layout", "product index maps outside the lattice")
                        .with_context("row", row)
                        .with_context("col", col),
                )
            })
        };
        let data_qubit = |column: usize| -> Result<QubitId, StabError> {
            if column < n1 * n2 {
                cell(axis1.bits[column / n2], axis2.bits[column % n2])
            } else {
                let idx = column - n1 * n2;
                cell(axis1.checks[idx / r2], axis2.checks[idx % r2])
            }
        };

        let mut x_stabilizers = BTreeMap::new();
        for row in 0..product.num_x_checks() {
            let check = cell(axis1.checks[row / n2], axis2.bits[row % n2])?;
            let support = product
                .hx()
                .row_support(row)
                .into_iter()
                .map(&data_qubit)
                .collect::<Result<Vec<_>, _>>()?;
            x_stabilizers.insert(check, support);
        }
        let mut z_stabilizers = BTreeMap::new();
        for row in 0..product.num_z_checks() {
            let check = cell(axis1.bits[row / r2], axis2.checks[row % r2])?;
            let support = product
                .hz()
                .row_support(row)
                .into_iter()
                .map(&data_qubit)
                .collect::<Result<Vec<_>, _>>()?;
            z_stabilizers.insert(check, support);
        }

        let num_qubits = layout.num_qubits();
        let mut tanner_adjacency = BinaryMatrix::zeros(num_qubits, num_qubits);
        for (check, support) in x_stabilizers.iter().chain(z_stabilizers.iter()) {
            for data in support {
                tanner_adjacency.set(check.index(), data.index(), 1);
                tanner_adjacency.set(data.index(), check.index(), 1);
            }
        }

        let mut positions: BTreeMap<usize, Point> = layout
            .qubits()
            .into_iter()
            .map(|qubit| {
                let (row, col) = layout.coord(qubit);
                (qubit.index(), Point::new(col as f64, row as f64))
            })
            .collect();
        if let Some(overrides) = pos {
            for (&qubit, &xy) in overrides {
                if qubit >= num_qubits {
                    let info = ErrorInfo::new("position-out-of-range", "position given for unknown qubit")
                        .with_context("qubit", qubit)
                        .with_context("num_qubits", num_qubits);
                    return Err(StabError::Config(info));
                }
                positions.insert(qubit, Point::from(xy));
            }
        }

        let crossings = intersecting_edges(&tanner_adjacency, &positions)?;
        Ok(Self {
            product,
            x_stabilizers,
            z_stabilizers,
            tanner_adjacency,
            positions,
            crossings,
        })
    }

    /// Underlying HX/HZ pair.
    pub fn product(&self) -> &HypergraphProduct {
        &self.product
    }

    /// Data-qubit support of every X check, keyed by the check qubit.
    pub fn x_stabilizers(&self) -> &BTreeMap<QubitId, Vec<QubitId>> {
        &self.x_stabilizers
    }

    /// Data-qubit support of every Z check, keyed by the check qubit.
    pub fn z_stabilizers(&self) -> &BTreeMap<QubitId, Vec<QubitId>> {
        &self.z_stabilizers
    }

    /// Symmetric check/data adjacency over all lattice qubits.
    pub fn tanner_adjacency(&self) -> &BinaryMatrix {
        &self.tanner_adjacency
    }

    /// Drawing position of every qubit.
    pub fn positions(&self) -> &BTreeMap<usize, Point> {
        &self.positions
    }

    /// Pairs of Tanner edges that cross in the drawing.
    pub fn crossings(&self) -> &BTreeSet<EdgePair> {
        &self.crossings
    }
}
