use std::collections::BTreeMap;

use stab_core::{Coord, ErrorInfo, QubitId, QubitRole, StabError};
use stab_pcm::{ClassicalCode, Marker};

use crate::circuit::Circuit;

/// Qubit roles and lattice coordinates for one code instance.
///
/// Qubits are numbered row-major over a `rows x cols` grid. Neighbourhood
/// queries go through the coordinate lookup, so stepping off the lattice
/// yields `None` rather than a wrapped index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    roles: Vec<QubitRole>,
    lookup: BTreeMap<Coord, QubitId>,
}

impl Layout {
    fn from_grid(rows: usize, cols: usize, role_at: impl Fn(usize, usize) -> QubitRole) -> Self {
        let mut roles = Vec::with_capacity(rows * cols);
        let mut lookup = BTreeMap::new();
        for row in 0..rows {
            for col in 0..cols {
                lookup.insert((row, col), QubitId::new(roles.len()));
                roles.push(role_at(row, col));
            }
        }
        Self {
            rows,
            cols,
            roles,
            lookup,
        }
    }

    /// `2d + 1` qubits on a line: even positions are data, odd are Z checks.
    pub fn repetition(distance: usize) -> Result<Self, StabError> {
        if distance == 0 {
            let info = ErrorInfo::new("invalid-distance", "repetition code distance must be positive")
                .with_context("distance", distance);
            return Err(StabError::Config(info));
        }
        Ok(Self::from_grid(1, 2 * distance + 1, |_, col| {
            if col % 2 == 0 {
                QubitRole::Data
            } else {
                QubitRole::ZCheck
            }
        }))
    }

    /// Checkerboard surface-code lattice of odd scale `rows x cols`.
    ///
    /// `(even, even)` and `(odd, odd)` sites are data, `(even, odd)` are Z
    /// checks and `(odd, even)` are X checks.
    pub fn surface(rows: usize, cols: usize) -> Result<Self, StabError> {
        if rows % 2 == 0 || cols % 2 == 0 {
            let info = ErrorInfo::new("even-scale", "surface code scale must be odd in both dimensions")
                .with_context("rows", rows)
                .with_context("cols", cols);
            return Err(StabError::Geometry(info));
        }
        if rows < 3 || cols < 3 {
            let info = ErrorInfo::new("degenerate-scale", "surface code scale must be at least 3x3")
                .with_context("rows", rows)
                .with_context("cols", cols);
            return Err(StabError::Geometry(info));
        }
        Ok(Self::from_grid(rows, cols, |row, col| {
            match (row % 2 == 0, col % 2 == 0) {
                (true, true) | (false, false) => QubitRole::Data,
                (true, false) => QubitRole::ZCheck,
                (false, true) => QubitRole::XCheck,
            }
        }))
    }

    /// Hypergraph-product lattice: rows follow the markers of `code1`, columns
    /// those of `code2`.
    ///
    /// A `B` row reads `Q` under `B` columns and `Z` under `C` columns; a `C`
    /// row reads `X` under `B` columns and `Q` under `C` columns.
    pub fn hypergraph(code1: &ClassicalCode, code2: &ClassicalCode) -> Result<Self, StabError> {
        let axis1: Vec<Marker> = code1.markers().collect();
        let axis2: Vec<Marker> = code2.markers().collect();
        if axis1.is_empty() || axis2.is_empty() {
            let info = ErrorInfo::new("empty-code", "hypergraph product needs two non-empty codes")
                .with_context("markers1", axis1.len())
                .with_context("markers2", axis2.len());
            return Err(StabError::Config(info));
        }
        Ok(Self::from_grid(axis1.len(), axis2.len(), |row, col| {
            match (axis1[row], axis2[col]) {
                (Marker::Bit, Marker::Bit) | (Marker::Check, Marker::Check) => QubitRole::Data,
                (Marker::Bit, Marker::Check) => QubitRole::ZCheck,
                (Marker::Check, Marker::Bit) => QubitRole::XCheck,
            }
        }))
    }

    /// `(rows, cols)` of the grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of physical qubits.
    pub fn num_qubits(&self) -> usize {
        self.roles.len()
    }

    /// Role of `qubit`.
    pub fn role(&self, qubit: QubitId) -> QubitRole {
        self.roles[qubit.index()]
    }

    /// `(row, col)` of `qubit`.
    pub fn coord(&self, qubit: QubitId) -> Coord {
        (qubit.index() / self.cols, qubit.index() % self.cols)
    }

    /// Qubit at `coord`, if inside the grid.
    pub fn at(&self, coord: Coord) -> Option<QubitId> {
        self.lookup.get(&coord).copied()
    }

    /// Qubit displaced from `qubit` by `(d_row, d_col)`, if inside the grid.
    pub fn offset(&self, qubit: QubitId, d_row: isize, d_col: isize) -> Option<QubitId> {
        let (row, col) = self.coord(qubit);
        let row = row.checked_add_signed(d_row)?;
        let col = col.checked_add_signed(d_col)?;
        self.at((row, col))
    }

    /// All qubits, in index order.
    pub fn qubits(&self) -> Vec<QubitId> {
        (0..self.num_qubits()).map(QubitId::new).collect()
    }

    /// Qubits with `role`, in index order.
    pub fn qubits_with(&self, role: QubitRole) -> Vec<QubitId> {
        self.roles
            .iter()
            .enumerate()
            .filter_map(|(idx, r)| (*r == role).then_some(QubitId::new(idx)))
            .collect()
    }

    /// Data qubits in index order.
    pub fn data_qubits(&self) -> Vec<QubitId> {
        self.qubits_with(QubitRole::Data)
    }

    /// X-check qubits in index order.
    pub fn x_checks(&self) -> Vec<QubitId> {
        self.qubits_with(QubitRole::XCheck)
    }

    /// Z-check qubits in index order.
    pub fn z_checks(&self) -> Vec<QubitId> {
        self.qubits_with(QubitRole::ZCheck)
    }

    /// Check qubits of either basis in index order.
    pub fn check_qubits(&self) -> Vec<QubitId> {
        self.qubits()
            .into_iter()
            .filter(|qubit| self.role(*qubit).is_check())
            .collect()
    }

    /// One role label per qubit, e.g. `QZQZQ`.
    pub fn role_string(&self) -> String {
        self.roles.iter().map(QubitRole::label).collect()
    }

    /// Emits a coordinate annotation for every qubit.
    pub fn annotate(&self, circuit: &mut Circuit) {
        for qubit in self.qubits() {
            let (row, col) = self.coord(qubit);
            circuit.append_coords(qubit, row, col);
        }
    }
}
