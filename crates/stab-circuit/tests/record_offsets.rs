use proptest::prelude::*;
use stab_circuit::{Circuit, MeasurementRecord, RecTarget};
use stab_core::QubitId;

proptest! {
    #[test]
    fn lookbacks_point_at_the_latest_measurement(
        blocks in proptest::collection::vec(proptest::collection::vec(0usize..6, 1..5), 1..6),
        repeats in 0usize..4,
    ) {
        let mut record = MeasurementRecord::new();
        let mut circuit = Circuit::new();
        let mut body = Circuit::new();
        let mut block_start = 0;
        for (idx, block) in blocks.iter().enumerate() {
            let qubits: Vec<QubitId> = block.iter().copied().map(QubitId::new).collect();
            if idx == blocks.len() - 1 {
                block_start = record.len();
                body.append_measure(stab_circuit::Basis::Z, true, &qubits);
            } else {
                circuit.append_measure(stab_circuit::Basis::Z, true, &qubits);
            }
            record.measure(&qubits);
        }
        circuit.append_repeat(repeats + 1, body);
        record.repeat_block(block_start, repeats).unwrap();
        prop_assert_eq!(record.len(), circuit.num_measurements());

        let last_block = blocks.last().unwrap();
        let last_qubit = QubitId::new(*last_block.last().unwrap());
        prop_assert_eq!(record.lookback_last(last_qubit).unwrap().offset(), -1);
        prop_assert_eq!(
            record.lookback(0).unwrap().offset(),
            -(record.len() as i64)
        );
    }

    #[test]
    fn lookbacks_beyond_the_record_fail_validation(len in 1usize..8, extra in 1i64..4) {
        let qubits: Vec<QubitId> = (0..len).map(QubitId::new).collect();
        let mut circuit = Circuit::new();
        circuit.append_measure(stab_circuit::Basis::Z, false, &qubits);
        circuit.append_detector(vec![RecTarget::new(-(len as i64)).unwrap()]);
        prop_assert!(circuit.validate().is_ok());
        circuit.append_detector(vec![RecTarget::new(-(len as i64) - extra).unwrap()]);
        let err = circuit.validate().unwrap_err();
        prop_assert_eq!(err.code(), "lookback-before-stream-start");
    }
}

#[test]
fn zero_lookback_is_rejected() {
    assert_eq!(RecTarget::new(0).unwrap_err().code(), "non-negative-lookback");
}
