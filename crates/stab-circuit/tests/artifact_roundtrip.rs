use stab_circuit::serde_io::{from_bytes, from_json, to_bytes, to_json};
use stab_circuit::{
    CircuitArtifact, CodeFamily, MemoryBasis, NoiseConfig, NoiseSpec, SyndromeCircuitBuilder,
};

fn artifact() -> CircuitArtifact {
    let model = SyndromeCircuitBuilder::new(
        CodeFamily::SurfaceCode {
            scale: (3, 3),
            memory: MemoryBasis::XMemory,
        },
        &NoiseConfig {
            gate: Some(NoiseSpec::Uniform(0.0)),
            data: Some(NoiseSpec::Explicit(vec![0.125, 0.0, 0.25])),
            z_check: None,
            x_check: Some(NoiseSpec::Uniform(0.375)),
        },
        2,
    )
    .unwrap()
    .build()
    .unwrap();
    CircuitArtifact::from_model(&model)
}

#[test]
fn json_roundtrip_preserves_circuit() {
    let original = artifact();
    let json = to_json(&original).unwrap();
    let restored = from_json(&json).unwrap();
    assert_eq!(restored, original);
    assert_eq!(restored.roles, "QZQXQXQZQ");
    assert_eq!(restored.circuit.to_string(), original.circuit.to_string());
}

#[test]
fn bincode_roundtrip_preserves_circuit() {
    let original = artifact();
    let bytes = to_bytes(&original).unwrap();
    assert_eq!(from_bytes(&bytes).unwrap(), original);
}

#[test]
fn tampered_circuit_is_detected() {
    let mut tampered = artifact();
    tampered.circuit = stab_circuit::Circuit::new();
    let json = to_json(&tampered).unwrap();
    let err = from_json(&json).unwrap_err();
    assert_eq!(err.code(), "artifact-hash-mismatch");
}

#[test]
fn non_negative_lookbacks_do_not_deserialize() {
    let json = r#"[{"op":"detector","targets":[0]}]"#;
    assert!(serde_json::from_str::<stab_circuit::Circuit>(json).is_err());
}
