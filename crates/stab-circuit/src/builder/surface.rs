use stab_core::{QubitId, QubitRole, StabError};
use tracing::trace;

use super::{append_idle_noise, append_pair_noise, append_rounds, measure};
use crate::circuit::{Basis, Circuit};
use crate::family::MemoryBasis;
use crate::layout::Layout;
use crate::noise::ResolvedNoise;
use crate::record::MeasurementRecord;

/// Neighbour visiting order for Z checks: horizontal, then vertical.
const Z_CHECK_STEPS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
/// Neighbour visiting order for X checks: vertical, then horizontal.
const X_CHECK_STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn neighbours(layout: &Layout, check: QubitId, steps: &[(isize, isize)]) -> Vec<QubitId> {
    steps
        .iter()
        .filter_map(|&(d_row, d_col)| layout.offset(check, d_row, d_col))
        .collect()
}

fn check_neighbours(layout: &Layout, check: QubitId) -> Vec<QubitId> {
    match layout.role(check) {
        QubitRole::XCheck => neighbours(layout, check, &X_CHECK_STEPS),
        _ => neighbours(layout, check, &Z_CHECK_STEPS),
    }
}

/// Planar surface-code memory in the basis selected by `memory`.
pub(super) fn synthesize(
    layout: &Layout,
    memory: MemoryBasis,
    noise: &ResolvedNoise,
    rounds: usize,
) -> Result<Circuit, StabError> {
    let data = layout.data_qubits();
    let z_checks = layout.z_checks();
    let x_checks = layout.x_checks();
    let (active, passive, data_basis) = match memory {
        MemoryBasis::ZMemory => (&z_checks, &x_checks, Basis::Z),
        MemoryBasis::XMemory => (&x_checks, &z_checks, Basis::X),
    };

    let mut circuit = Circuit::new();
    let mut record = MeasurementRecord::new();
    layout.annotate(&mut circuit);
    match data_basis {
        Basis::Z => circuit.append_reset(Basis::Z, &layout.qubits()),
        Basis::X => {
            circuit.append_reset(Basis::Z, &layout.check_qubits());
            circuit.append_reset(Basis::X, &data);
        }
    }
    // Reference outcomes, measured in the same order as every round.
    measure(&mut circuit, &mut record, Basis::Z, false, active);
    measure(&mut circuit, &mut record, Basis::Z, false, passive);

    let block_start = record.len();
    let gate_channel = noise.gate_channel();
    let mut body = Circuit::new();
    for qubit in layout.qubits() {
        let role = layout.role(qubit);
        if !role.is_check() {
            continue;
        }
        let pairs: Vec<(QubitId, QubitId)> = check_neighbours(layout, qubit)
            .into_iter()
            .map(|neighbour| match role {
                QubitRole::XCheck => (qubit, neighbour),
                _ => (neighbour, qubit),
            })
            .collect();
        if role == QubitRole::XCheck {
            body.append_h(qubit);
        }
        for &(control, target) in &pairs {
            body.append_cnot(control, target);
        }
        if role == QubitRole::XCheck {
            body.append_h(qubit);
        }
        append_pair_noise(&mut body, gate_channel.as_ref(), &pairs);
    }
    append_idle_noise(
        &mut body,
        &[
            (noise.data_channel(), data.as_slice()),
            (noise.z_check_channel(), z_checks.as_slice()),
            (noise.x_check_channel(), x_checks.as_slice()),
        ],
    );

    let previous = active
        .iter()
        .map(|&check| record.last_of(check))
        .collect::<Result<Vec<_>, _>>()?;
    measure(&mut body, &mut record, Basis::Z, true, active);
    for (&check, &before) in active.iter().zip(&previous).rev() {
        body.append_detector(vec![record.lookback_last(check)?, record.lookback(before)?]);
    }
    measure(&mut body, &mut record, Basis::Z, true, passive);
    trace!(
        memory = memory.as_str(),
        active = active.len(),
        passive = passive.len(),
        "surface round body emitted"
    );
    append_rounds(&mut circuit, &mut record, block_start, body, rounds)?;

    measure(&mut circuit, &mut record, data_basis, false, &data);
    for &check in active.iter().rev() {
        let mut targets = vec![record.lookback_last(check)?];
        for neighbour in check_neighbours(layout, check) {
            targets.push(record.lookback_last(neighbour)?);
        }
        circuit.append_detector(targets);
    }

    let (rows, cols) = layout.shape();
    let logical: Vec<QubitId> = match memory {
        MemoryBasis::ZMemory => (0..rows).step_by(2).filter_map(|row| layout.at((row, 0))).collect(),
        MemoryBasis::XMemory => (0..cols)
            .step_by(2)
            .filter_map(|col| layout.at((rows - 1, col)))
            .collect(),
    };
    let targets = logical
        .into_iter()
        .map(|qubit| record.lookback_last(qubit))
        .collect::<Result<Vec<_>, _>>()?;
    circuit.append_observable(0, targets);
    Ok(circuit)
}
