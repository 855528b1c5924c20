#![deny(missing_docs)]
#![doc = "Core identifiers, error taxonomy and seeding policy shared by the stab crates."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, StabError};
pub use provenance::{BuildProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Dense, zero-based identifier of a physical qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(usize);

impl QubitId {
    /// Creates an identifier from a dense index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the dense index of the qubit.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a physical qubit plays in a syndrome extraction circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QubitRole {
    /// Carries encoded information.
    Data,
    /// Ancilla measuring an X-type stabilizer.
    XCheck,
    /// Ancilla measuring a Z-type stabilizer.
    ZCheck,
}

impl QubitRole {
    /// Single-letter label used in role strings (`Q`, `X`, `Z`).
    pub fn label(&self) -> char {
        match self {
            QubitRole::Data => 'Q',
            QubitRole::XCheck => 'X',
            QubitRole::ZCheck => 'Z',
        }
    }

    /// Returns true for either kind of check ancilla.
    pub fn is_check(&self) -> bool {
        !matches!(self, QubitRole::Data)
    }
}

/// Integer lattice coordinate `(row, col)`.
pub type Coord = (usize, usize);
