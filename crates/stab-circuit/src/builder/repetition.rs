use stab_core::{QubitId, StabError};
use tracing::trace;

use super::{append_idle_noise, append_pair_noise, append_rounds, measure};
use crate::circuit::{Basis, Circuit};
use crate::layout::Layout;
use crate::noise::ResolvedNoise;
use crate::record::MeasurementRecord;

/// Bit-flip memory on a line of alternating data and Z-check qubits.
pub(super) fn synthesize(
    layout: &Layout,
    noise: &ResolvedNoise,
    rounds: usize,
) -> Result<Circuit, StabError> {
    let data = layout.data_qubits();
    let checks = layout.z_checks();
    let mut circuit = Circuit::new();
    let mut record = MeasurementRecord::new();

    layout.annotate(&mut circuit);
    // Reference outcomes for the first round to diff against.
    measure(&mut circuit, &mut record, Basis::Z, false, &checks);

    let block_start = record.len();
    let gate_channel = noise.gate_channel();
    let mut body = Circuit::new();
    for &check in &checks {
        let pairs = line_neighbours(layout, check)
            .into_iter()
            .map(|neighbour| (neighbour, check))
            .collect::<Vec<_>>();
        for &(control, target) in &pairs {
            body.append_cnot(control, target);
        }
        append_pair_noise(&mut body, gate_channel.as_ref(), &pairs);
    }
    append_idle_noise(
        &mut body,
        &[
            (noise.data_channel(), data.as_slice()),
            (noise.z_check_channel(), checks.as_slice()),
        ],
    );

    let previous = checks
        .iter()
        .map(|&check| record.last_of(check))
        .collect::<Result<Vec<_>, _>>()?;
    measure(&mut body, &mut record, Basis::Z, true, &checks);
    for (&check, &before) in checks.iter().zip(&previous).rev() {
        body.append_detector(vec![record.lookback_last(check)?, record.lookback(before)?]);
    }
    trace!(checks = checks.len(), "repetition round body emitted");
    append_rounds(&mut circuit, &mut record, block_start, body, rounds)?;

    measure(&mut circuit, &mut record, Basis::Z, false, &data);
    for &check in checks.iter().rev() {
        let mut targets = Vec::with_capacity(3);
        for neighbour in line_neighbours(layout, check).into_iter().rev() {
            targets.push(record.lookback_last(neighbour)?);
        }
        targets.push(record.lookback_last(check)?);
        circuit.append_detector(targets);
    }

    if let Some(&last) = data.last() {
        circuit.append_observable(0, vec![record.lookback_last(last)?]);
    }
    Ok(circuit)
}

/// Left then right data neighbours of a check on the line.
fn line_neighbours(layout: &Layout, check: QubitId) -> Vec<QubitId> {
    [-1, 1]
        .into_iter()
        .filter_map(|d_col| layout.offset(check, 0, d_col))
        .collect()
}
