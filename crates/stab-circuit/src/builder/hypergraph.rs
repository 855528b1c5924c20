use tracing::warn;

use crate::circuit::Circuit;
use crate::layout::Layout;
use crate::product::ProductCodeModel;

/// Lattice annotations for a hypergraph-product code.
///
/// Syndrome scheduling for product codes is not synthesized yet; the model
/// still carries HX, HZ, roles and the Tanner-graph crossings.
pub(super) fn synthesize(layout: &Layout, model: &ProductCodeModel) -> Circuit {
    warn!(
        qubits = layout.num_qubits(),
        x_checks = model.x_stabilizers().len(),
        z_checks = model.z_stabilizers().len(),
        crossings = model.crossings().len(),
        "hypergraph-product synthesis stops at matrices and roles"
    );
    let mut circuit = Circuit::new();
    layout.annotate(&mut circuit);
    circuit
}
