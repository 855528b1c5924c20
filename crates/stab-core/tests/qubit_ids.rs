use stab_core::{QubitId, QubitRole};

#[cfg(target_pointer_width = "64")]
#[test]
fn qubit_ids_keep_indices_past_u32() {
    let wide = u32::MAX as usize + 7;
    let id = QubitId::new(wide);
    assert_eq!(id.index(), wide);
    assert_eq!(id.to_string(), wide.to_string());
    assert!(QubitId::new(u32::MAX as usize) < id);
}

#[test]
fn qubit_ids_serialize_as_plain_indices() {
    let json = serde_json::to_string(&QubitId::new(42)).unwrap();
    assert_eq!(json, "42");
    let back: QubitId = serde_json::from_str(&json).unwrap();
    assert_eq!(back.index(), 42);
    assert_eq!(QubitRole::ZCheck.label(), 'Z');
}
