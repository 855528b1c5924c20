use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, StabError};
use stab_pcm::BinaryMatrix;

use crate::geometry::{segments_intersect, Point};

/// Undirected edge stored with its smaller endpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge(usize, usize);

impl Edge {
    /// Creates a normalized edge.
    pub fn new(u: usize, v: usize) -> Self {
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }

    /// `(low, high)` endpoints.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.0, self.1)
    }

    /// True when both edges touch a common vertex.
    pub fn shares_vertex(&self, other: &Edge) -> bool {
        self.0 == other.0 || self.0 == other.1 || self.1 == other.0 || self.1 == other.1
    }
}

/// Unordered pair of distinct edges, stored smaller edge first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgePair(Edge, Edge);

impl EdgePair {
    /// Creates a normalized pair.
    pub fn new(a: Edge, b: Edge) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// The two edges, smaller first.
    pub fn edges(&self) -> (Edge, Edge) {
        (self.0, self.1)
    }
}

/// Lists edges `(i, j)` with `i < j` and `adjacency[i][j] = 1`.
///
/// The adjacency must be square and symmetric.
pub fn edges(adjacency: &BinaryMatrix) -> Result<Vec<Edge>, StabError> {
    let n = adjacency.rows();
    if adjacency.cols() != n {
        let info = ErrorInfo::new("adjacency-not-square", "adjacency matrix must be square")
            .with_context("shape", format!("{}x{}", n, adjacency.cols()));
        return Err(StabError::Matrix(info));
    }
    let mut out = Vec::new();
    for i in 0..n {
        for j in i..n {
            if adjacency.get(i, j) != adjacency.get(j, i) {
                let info = ErrorInfo::new("adjacency-not-symmetric", "adjacency must be symmetric")
                    .with_context("i", i)
                    .with_context("j", j);
                return Err(StabError::Matrix(info));
            }
            if j > i && adjacency.get(i, j) == 1 {
                out.push(Edge(i, j));
            }
        }
    }
    Ok(out)
}

/// Returns every pair of edges whose segments cross under `positions`.
///
/// Candidate pairs are tested with the strict orientation predicate first;
/// pairs sharing an endpoint are dropped afterwards since they cannot cross
/// in a plane drawing. Exactly collinear overlapping edges are not reported.
pub fn intersecting_edges(
    adjacency: &BinaryMatrix,
    positions: &BTreeMap<usize, Point>,
) -> Result<BTreeSet<EdgePair>, StabError> {
    let edges = edges(adjacency)?;
    let segments = edges
        .iter()
        .map(|edge| Ok((position(positions, edge.0)?, position(positions, edge.1)?)))
        .collect::<Result<Vec<_>, StabError>>()?;

    let mut crossings = BTreeSet::new();
    for (i, (a, b)) in segments.iter().enumerate() {
        for (j, (c, d)) in segments.iter().enumerate().skip(i + 1) {
            if segments_intersect(*a, *b, *c, *d) {
                crossings.insert(EdgePair::new(edges[i], edges[j]));
            }
        }
    }
    crossings.retain(|pair| !pair.0.shares_vertex(&pair.1));
    Ok(crossings)
}

fn position(positions: &BTreeMap<usize, Point>, vertex: usize) -> Result<Point, StabError> {
    positions.get(&vertex).copied().ok_or_else(|| {
        StabError::Geometry(
            ErrorInfo::new("missing-position", "vertex has an edge but no position")
                .with_context("vertex", vertex),
        )
    })
}
