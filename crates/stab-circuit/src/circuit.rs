use std::fmt;

use serde::{Deserialize, Serialize};
use stab_core::{ErrorInfo, QubitId, StabError};

/// Reference to a past measurement, counted back from the end of the record.
///
/// `-1` is the most recent measurement at the point the reference is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RecTarget(i64);

impl RecTarget {
    /// Creates a lookback; the offset must be strictly negative.
    pub fn new(offset: i64) -> Result<Self, StabError> {
        if offset >= 0 {
            let info = ErrorInfo::new("non-negative-lookback", "lookback offsets must be negative")
                .with_context("offset", offset);
            return Err(StabError::Invariant(info));
        }
        Ok(Self(offset))
    }

    /// The negative offset.
    pub fn offset(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RecTarget {
    type Error = StabError;

    fn try_from(offset: i64) -> Result<Self, Self::Error> {
        Self::new(offset)
    }
}

impl From<RecTarget> for i64 {
    fn from(target: RecTarget) -> Self {
        target.0
    }
}

impl fmt::Display for RecTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rec[{}]", self.0)
    }
}

/// Pauli basis for resets and measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Computational basis.
    Z,
    /// Hadamard basis.
    X,
}

/// Unitary gates used by the syndrome extraction schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard.
    H,
    /// Controlled-NOT; targets come in `(control, target)` pairs.
    Cnot,
}

impl Gate {
    fn name(&self) -> &'static str {
        match self {
            Gate::H => "H",
            Gate::Cnot => "CNOT",
        }
    }
}

/// Parametrized Pauli noise channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoiseChannel {
    /// Single-qubit channel with `(p_x, p_y, p_z)`.
    Pauli1([f64; 3]),
    /// Two-qubit channel with the 15 non-identity Pauli pair probabilities.
    Pauli2([f64; 15]),
}

impl NoiseChannel {
    fn name(&self) -> &'static str {
        match self {
            NoiseChannel::Pauli1(_) => "PAULI_CHANNEL_1",
            NoiseChannel::Pauli2(_) => "PAULI_CHANNEL_2",
        }
    }

    /// Channel parameters.
    pub fn params(&self) -> &[f64] {
        match self {
            NoiseChannel::Pauli1(p) => p,
            NoiseChannel::Pauli2(p) => p,
        }
    }
}

/// One circuit instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// Lattice coordinate annotation for a qubit.
    QubitCoords {
        /// Annotated qubit.
        qubit: QubitId,
        /// `(row, col)`.
        coords: [f64; 2],
    },
    /// Reset to the +1 eigenstate of `basis`.
    Reset {
        /// Reset basis.
        basis: Basis,
        /// Reset qubits.
        targets: Vec<QubitId>,
    },
    /// Unitary gate layer.
    Gate {
        /// Gate kind.
        gate: Gate,
        /// Gate targets, pairs for two-qubit gates.
        targets: Vec<QubitId>,
    },
    /// Noise channel applied to each target (or target pair).
    Noise {
        /// Channel and parameters.
        channel: NoiseChannel,
        /// Targets, pairs for two-qubit channels.
        targets: Vec<QubitId>,
    },
    /// Measurement, appending one record entry per target.
    Measure {
        /// Measurement basis.
        basis: Basis,
        /// Reset the qubit after measuring.
        reset: bool,
        /// Measured qubits, in record order.
        targets: Vec<QubitId>,
    },
    /// Parity assertion over past measurements.
    Detector {
        /// Referenced measurements.
        targets: Vec<RecTarget>,
    },
    /// Adds measurements to a logical observable.
    ObservableInclude {
        /// Observable tag.
        index: u32,
        /// Referenced measurements.
        targets: Vec<RecTarget>,
    },
    /// Body replayed `count` times; lookbacks are relative to each replay.
    Repeat {
        /// Number of repetitions.
        count: usize,
        /// Repeated sub-circuit.
        body: Circuit,
    },
}

/// Ordered list of instructions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circuit {
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instructions in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Appends a raw instruction.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Appends every instruction of `other`.
    pub fn extend(&mut self, other: &Circuit) {
        self.instructions.extend(other.instructions.iter().cloned());
    }

    /// Annotates `qubit` with `(row, col)`.
    pub fn append_coords(&mut self, qubit: QubitId, row: usize, col: usize) {
        self.push(Instruction::QubitCoords {
            qubit,
            coords: [row as f64, col as f64],
        });
    }

    /// Appends a reset; empty target lists are skipped.
    pub fn append_reset(&mut self, basis: Basis, targets: &[QubitId]) {
        if !targets.is_empty() {
            self.push(Instruction::Reset {
                basis,
                targets: targets.to_vec(),
            });
        }
    }

    /// Appends a Hadamard on `qubit`.
    pub fn append_h(&mut self, qubit: QubitId) {
        self.push(Instruction::Gate {
            gate: Gate::H,
            targets: vec![qubit],
        });
    }

    /// Appends a CNOT from `control` onto `target`.
    pub fn append_cnot(&mut self, control: QubitId, target: QubitId) {
        self.push(Instruction::Gate {
            gate: Gate::Cnot,
            targets: vec![control, target],
        });
    }

    /// Appends a noise channel; empty target lists are skipped.
    pub fn append_noise(&mut self, channel: NoiseChannel, targets: &[QubitId]) {
        if !targets.is_empty() {
            self.push(Instruction::Noise {
                channel,
                targets: targets.to_vec(),
            });
        }
    }

    /// Appends a measurement; empty target lists are skipped.
    pub fn append_measure(&mut self, basis: Basis, reset: bool, targets: &[QubitId]) {
        if !targets.is_empty() {
            self.push(Instruction::Measure {
                basis,
                reset,
                targets: targets.to_vec(),
            });
        }
    }

    /// Appends a detector.
    pub fn append_detector(&mut self, targets: Vec<RecTarget>) {
        self.push(Instruction::Detector { targets });
    }

    /// Appends an observable declaration.
    pub fn append_observable(&mut self, index: u32, targets: Vec<RecTarget>) {
        self.push(Instruction::ObservableInclude { index, targets });
    }

    /// Appends `body` repeated `count` times.
    pub fn append_repeat(&mut self, count: usize, body: Circuit) {
        self.push(Instruction::Repeat { count, body });
    }

    /// Total measurement record length produced by the circuit.
    pub fn num_measurements(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                Instruction::Measure { targets, .. } => targets.len(),
                Instruction::Repeat { count, body } => count.saturating_mul(body.num_measurements()),
                _ => 0,
            })
            .fold(0, usize::saturating_add)
    }

    /// Total number of detectors, counting repeats.
    pub fn num_detectors(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                Instruction::Detector { .. } => 1,
                Instruction::Repeat { count, body } => count.saturating_mul(body.num_detectors()),
                _ => 0,
            })
            .fold(0, usize::saturating_add)
    }

    /// Number of observables, i.e. highest tag plus one.
    pub fn num_observables(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                Instruction::ObservableInclude { index, .. } => *index as usize + 1,
                Instruction::Repeat { body, .. } => body.num_observables(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }

    /// Number of qubits touched, i.e. highest qubit index plus one.
    pub fn num_qubits(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                Instruction::QubitCoords { qubit, .. } => qubit.index() + 1,
                Instruction::Reset { targets, .. }
                | Instruction::Gate { targets, .. }
                | Instruction::Noise { targets, .. }
                | Instruction::Measure { targets, .. } => {
                    targets.iter().map(|q| q.index() + 1).max().unwrap_or(0)
                }
                Instruction::Repeat { body, .. } => body.num_qubits(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }

    /// Copy with every `Repeat` block unrolled.
    pub fn flattened(&self) -> Circuit {
        let mut out = Circuit::new();
        for instruction in &self.instructions {
            match instruction {
                Instruction::Repeat { count, body } => {
                    let body = body.flattened();
                    for _ in 0..*count {
                        out.extend(&body);
                    }
                }
                other => out.push(other.clone()),
            }
        }
        out
    }

    /// Copy with every noise instruction removed.
    pub fn without_noise(&self) -> Circuit {
        let instructions = self
            .instructions
            .iter()
            .filter(|instruction| !matches!(instruction, Instruction::Noise { .. }))
            .map(|instruction| match instruction {
                Instruction::Repeat { count, body } => Instruction::Repeat {
                    count: *count,
                    body: body.without_noise(),
                },
                other => other.clone(),
            })
            .collect();
        Circuit { instructions }
    }

    /// Number of noise instructions, counting each repeat body once.
    pub fn noise_instruction_count(&self) -> usize {
        self.instructions
            .iter()
            .map(|instruction| match instruction {
                Instruction::Noise { .. } => 1,
                Instruction::Repeat { body, .. } => body.noise_instruction_count(),
                _ => 0,
            })
            .sum()
    }

    /// Replays the measurement record and checks every lookback lands on an
    /// existing measurement.
    pub fn validate(&self) -> Result<(), StabError> {
        let mut length = 0usize;
        self.validate_from(&mut length)
    }

    fn validate_from(&self, length: &mut usize) -> Result<(), StabError> {
        for (position, instruction) in self.instructions.iter().enumerate() {
            match instruction {
                Instruction::Measure { targets, .. } => *length += targets.len(),
                Instruction::Detector { targets }
                | Instruction::ObservableInclude { targets, .. } => {
                    for target in targets {
                        if target.offset().unsigned_abs() as usize > *length {
                            let info = ErrorInfo::new(
                                "lookback-before-stream-start",
                                "lookback references a measurement before the record began",
                            )
                            .with_context("instruction", position)
                            .with_context("offset", target.offset())
                            .with_context("record_len", *length);
                            return Err(StabError::Invariant(info));
                        }
                    }
                }
                Instruction::Repeat { count, body } => {
                    // Lookbacks only get shallower relative to a longer record,
                    // so one checked replay covers the rest.
                    if *count > 0 {
                        body.validate_from(length)?;
                        let rest = (count - 1).saturating_mul(body.num_measurements());
                        *length = length.saturating_add(rest);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth);
        for instruction in &self.instructions {
            write!(f, "{indent}")?;
            match instruction {
                Instruction::QubitCoords { qubit, coords } => {
                    write!(f, "QUBIT_COORDS({}, {}) {qubit}", coords[0], coords[1])?
                }
                Instruction::Reset { basis, targets } => {
                    let name = match basis {
                        Basis::Z => "R",
                        Basis::X => "RX",
                    };
                    write!(f, "{name}")?;
                    write_qubits(f, targets)?;
                }
                Instruction::Gate { gate, targets } => {
                    write!(f, "{}", gate.name())?;
                    write_qubits(f, targets)?;
                }
                Instruction::Noise { channel, targets } => {
                    write!(f, "{}(", channel.name())?;
                    for (idx, p) in channel.params().iter().enumerate() {
                        if idx > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{p}")?;
                    }
                    write!(f, ")")?;
                    write_qubits(f, targets)?;
                }
                Instruction::Measure {
                    basis,
                    reset,
                    targets,
                } => {
                    let name = match (basis, reset) {
                        (Basis::Z, false) => "M",
                        (Basis::Z, true) => "MR",
                        (Basis::X, false) => "MX",
                        (Basis::X, true) => "MRX",
                    };
                    write!(f, "{name}")?;
                    write_qubits(f, targets)?;
                }
                Instruction::Detector { targets } => {
                    write!(f, "DETECTOR")?;
                    write_recs(f, targets)?;
                }
                Instruction::ObservableInclude { index, targets } => {
                    write!(f, "OBSERVABLE_INCLUDE({index})")?;
                    write_recs(f, targets)?;
                }
                Instruction::Repeat { count, body } => {
                    writeln!(f, "REPEAT {count} {{")?;
                    body.write_indented(f, depth + 1)?;
                    write!(f, "{indent}}}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_qubits(f: &mut fmt::Formatter<'_>, targets: &[QubitId]) -> fmt::Result {
    for qubit in targets {
        write!(f, " {qubit}")?;
    }
    Ok(())
}

fn write_recs(f: &mut fmt::Formatter<'_>, targets: &[RecTarget]) -> fmt::Result {
    for target in targets {
        write!(f, " {target}")?;
    }
    Ok(())
}

/// Renders the circuit in stim's text format.
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
