use stab_circuit::{
    Circuit, CodeFamily, Instruction, NoiseConfig, SyndromeCircuitBuilder, MAX_ROUNDS,
};

fn detectors(circuit: &Circuit) -> Vec<Vec<i64>> {
    circuit
        .flattened()
        .instructions()
        .iter()
        .filter_map(|instruction| match instruction {
            Instruction::Detector { targets } => {
                Some(targets.iter().map(|target| target.offset()).collect())
            }
            _ => None,
        })
        .collect()
}

fn observables(circuit: &Circuit) -> Vec<Vec<i64>> {
    circuit
        .instructions()
        .iter()
        .filter_map(|instruction| match instruction {
            Instruction::ObservableInclude { targets, .. } => {
                Some(targets.iter().map(|target| target.offset()).collect())
            }
            _ => None,
        })
        .collect()
}

fn build(distance: usize, rounds: usize) -> stab_circuit::StabilizerModel {
    SyndromeCircuitBuilder::new(
        CodeFamily::RepetitionCode { distance },
        &NoiseConfig::default(),
        rounds,
    )
    .expect("valid request")
    .build()
    .expect("circuit builds")
}

#[test]
fn distance_three_two_rounds_counts() {
    let model = build(3, 2);
    let circuit = model.circuit();
    assert_eq!(circuit.num_detectors(), 9);
    assert_eq!(circuit.num_observables(), 1);
    assert_eq!(circuit.num_measurements(), 3 + 2 * 3 + 4);
    assert_eq!(circuit.num_qubits(), 7);
    assert_eq!(observables(circuit), vec![vec![-1]]);
}

#[test]
fn detector_offsets_follow_the_record() {
    let model = build(3, 2);
    let round = vec![vec![-1, -4], vec![-2, -5], vec![-3, -6]];
    let mut expected = round.clone();
    expected.extend(round);
    expected.extend([vec![-1, -2, -5], vec![-2, -3, -6], vec![-3, -4, -7]]);
    assert_eq!(detectors(model.circuit()), expected);
}

#[test]
fn roles_alternate_along_the_line() {
    let model = build(3, 1);
    let layout = model.layout();
    assert_eq!(layout.role_string(), "QZQZQZQ");
    assert_eq!(layout.z_checks().len(), 3);
    assert_eq!(layout.x_checks().len(), 0);
    assert_eq!(layout.data_qubits().len(), 4);
}

#[test]
fn single_round_is_inlined() {
    let model = build(2, 1);
    let text = model.circuit().to_string();
    assert!(!text.contains("REPEAT"));
    assert_eq!(model.circuit().num_detectors(), 4);
}

#[test]
fn repeated_rounds_render_as_block() {
    let model = build(3, 5);
    let text = model.circuit().to_string();
    assert!(text.starts_with("QUBIT_COORDS(0, 0) 0\n"));
    assert!(text.contains("REPEAT 5 {\n    CNOT 0 1\n"));
    assert!(text.contains("    MR 1 3 5\n    DETECTOR rec[-1] rec[-4]\n"));
    assert!(text.ends_with("OBSERVABLE_INCLUDE(0) rec[-1]\n"));
    assert_eq!(model.circuit().num_detectors(), 3 * 5 + 3);
}

#[test]
fn zero_rounds_and_zero_distance_are_rejected() {
    let err = SyndromeCircuitBuilder::new(
        CodeFamily::RepetitionCode { distance: 3 },
        &NoiseConfig::default(),
        0,
    )
    .unwrap_err();
    assert_eq!(err.code(), "zero-rounds");

    let err = SyndromeCircuitBuilder::new(
        CodeFamily::RepetitionCode { distance: 0 },
        &NoiseConfig::default(),
        1,
    )
    .unwrap()
    .build()
    .unwrap_err();
    assert_eq!(err.code(), "invalid-distance");
}

#[test]
fn provenance_records_hashes() {
    let model = build(3, 2);
    let provenance = model.provenance();
    assert_eq!(provenance.selector, "repetition_code");
    assert_eq!(provenance.rounds, 2);
    assert_eq!(provenance.config_hash.len(), 64);
    assert_eq!(
        provenance.artifact_hash,
        stab_circuit::canonical_circuit_hash(model.circuit())
    );
    assert_eq!(build(3, 2).provenance(), provenance);
}

#[test]
fn oversized_round_counts_fail_at_construction() {
    let err = SyndromeCircuitBuilder::new(
        CodeFamily::RepetitionCode { distance: 3 },
        &NoiseConfig::default(),
        usize::MAX / 2,
    )
    .unwrap_err();
    assert_eq!(err.code(), "rounds-too-large");

    let model = build(2, MAX_ROUNDS);
    let circuit = model.circuit();
    assert_eq!(circuit.num_detectors(), 2 * MAX_ROUNDS + 2);
    assert_eq!(circuit.num_measurements(), 2 + 2 * MAX_ROUNDS + 3);
    assert!(circuit.validate().is_ok());
}
