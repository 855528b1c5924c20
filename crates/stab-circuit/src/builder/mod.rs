//! Syndrome-extraction circuit synthesis for every supported code family.
//!
//! Each family module emits the three phases of a memory experiment into a
//! [`Circuit`] while a [`MeasurementRecord`] tracks absolute measurement
//! positions, so detector lookbacks are always taken against the record
//! length at the point they are emitted.

mod hypergraph;
mod repetition;
mod surface;

use stab_core::{BuildProvenance, ErrorInfo, QubitId, StabError};
use tracing::debug;

use crate::circuit::{Basis, Circuit, NoiseChannel};
use crate::family::CodeFamily;
use crate::hash;
use crate::layout::Layout;
use crate::noise::{NoiseConfig, ResolvedNoise};
use crate::product::ProductCodeModel;
use crate::record::MeasurementRecord;

/// A synthesized code instance: lattice, circuit and, for product codes,
/// the stabilizer model.
#[derive(Debug, Clone)]
pub struct StabilizerModel {
    family: CodeFamily,
    layout: Layout,
    circuit: Circuit,
    product: Option<ProductCodeModel>,
    provenance: BuildProvenance,
}

impl StabilizerModel {
    /// Code family the model was built for.
    pub fn family(&self) -> &CodeFamily {
        &self.family
    }

    /// Qubit roles and coordinates.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The synthesized circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Stabilizer model of a hypergraph-product code.
    pub fn product(&self) -> Option<&ProductCodeModel> {
        self.product.as_ref()
    }

    /// Selector, configuration hash and circuit hash of this build.
    pub fn provenance(&self) -> &BuildProvenance {
        &self.provenance
    }
}

/// Largest accepted round count.
pub const MAX_ROUNDS: usize = 1 << 20;

/// Validated request for one syndrome circuit.
#[derive(Debug, Clone)]
pub struct SyndromeCircuitBuilder {
    family: CodeFamily,
    noise: ResolvedNoise,
    rounds: usize,
    config_hash: String,
}

impl SyndromeCircuitBuilder {
    /// Validates the noise configuration and round count for `family`.
    pub fn new(family: CodeFamily, noise: &NoiseConfig, rounds: usize) -> Result<Self, StabError> {
        if rounds == 0 {
            let info = ErrorInfo::new("zero-rounds", "at least one syndrome round is required")
                .with_context("selector", family.selector());
            return Err(StabError::Config(info));
        }
        if rounds > MAX_ROUNDS {
            let info = ErrorInfo::new("rounds-too-large", "round count exceeds the supported maximum")
                .with_context("rounds", rounds)
                .with_context("max_rounds", MAX_ROUNDS)
                .with_hint("split long memory experiments into several sweeps");
            return Err(StabError::Config(info));
        }
        let resolved = noise.resolve()?;
        let config_hash = hash::config_hash(&family, noise, rounds)?;
        Ok(Self {
            family,
            noise: resolved,
            rounds,
            config_hash,
        })
    }

    /// Number of syndrome rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Synthesizes the circuit and checks every lookback lands inside the record.
    pub fn build(&self) -> Result<StabilizerModel, StabError> {
        let (layout, circuit, product) = match &self.family {
            CodeFamily::RepetitionCode { distance } => {
                let layout = Layout::repetition(*distance)?;
                let circuit = repetition::synthesize(&layout, &self.noise, self.rounds)?;
                (layout, circuit, None)
            }
            CodeFamily::SurfaceCode { scale, memory } => {
                let layout = Layout::surface(scale.0, scale.1)?;
                let circuit = surface::synthesize(&layout, *memory, &self.noise, self.rounds)?;
                (layout, circuit, None)
            }
            CodeFamily::HypergraphProductCode {
                clist1,
                clist2,
                pos,
            } => {
                let layout = Layout::hypergraph(clist1, clist2)?;
                let model = ProductCodeModel::new(clist1, clist2, &layout, pos.as_ref())?;
                let circuit = hypergraph::synthesize(&layout, &model);
                (layout, circuit, Some(model))
            }
        };
        circuit.validate()?;

        let mut provenance = BuildProvenance::new(self.family.selector(), self.rounds);
        provenance.config_hash = self.config_hash.clone();
        provenance.artifact_hash = hash::canonical_circuit_hash(&circuit);
        provenance.tool_versions.insert(
            "stab-circuit".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        debug!(
            selector = %provenance.selector,
            qubits = layout.num_qubits(),
            rounds = self.rounds,
            measurements = circuit.num_measurements(),
            detectors = circuit.num_detectors(),
            "syndrome circuit built"
        );
        Ok(StabilizerModel {
            family: self.family.clone(),
            layout,
            circuit,
            product,
            provenance,
        })
    }
}

/// Appends `channel` after a two-qubit gate on every `(a, b)` pair.
fn append_pair_noise(circuit: &mut Circuit, channel: Option<&NoiseChannel>, pairs: &[(QubitId, QubitId)]) {
    if let Some(channel) = channel {
        for &(a, b) in pairs {
            circuit.append_noise(channel.clone(), &[a, b]);
        }
    }
}

/// Appends the idle channel of each qubit group that has one configured.
fn append_idle_noise(circuit: &mut Circuit, groups: &[(Option<NoiseChannel>, &[QubitId])]) {
    for (channel, qubits) in groups {
        if let Some(channel) = channel {
            circuit.append_noise(channel.clone(), qubits);
        }
    }
}

/// Emits the round body once and accounts for its remaining replays.
///
/// A single round is inlined; more become a `REPEAT` block. Lookbacks inside
/// the body stay valid because every round measures the same qubits in the
/// same order as the reference measurements that precede the first round.
fn append_rounds(
    circuit: &mut Circuit,
    record: &mut MeasurementRecord,
    block_start: usize,
    body: Circuit,
    rounds: usize,
) -> Result<(), StabError> {
    if rounds == 1 {
        circuit.extend(&body);
    } else {
        record.repeat_block(block_start, rounds - 1)?;
        circuit.append_repeat(rounds, body);
    }
    Ok(())
}

/// Measures `qubits` in `basis`, appending to both the circuit and the record.
fn measure(
    circuit: &mut Circuit,
    record: &mut MeasurementRecord,
    basis: Basis,
    reset: bool,
    qubits: &[QubitId],
) {
    circuit.append_measure(basis, reset, qubits);
    record.measure(qubits);
}
