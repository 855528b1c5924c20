use stab_circuit::{CodeFamily, CodeParams, MemoryBasis};

#[test]
fn surface_defaults_to_z_memory() {
    let params = CodeParams {
        scale: Some((3, 5)),
        ..CodeParams::default()
    };
    let family = CodeFamily::from_selector("surface_code", params.clone()).unwrap();
    assert_eq!(
        family,
        CodeFamily::SurfaceCode {
            scale: (3, 5),
            memory: MemoryBasis::ZMemory
        }
    );
    assert_eq!(family.selector(), "surface_code:z_memory");

    let family = CodeFamily::from_selector("surface_code:x_memory", params).unwrap();
    assert_eq!(family.selector(), "surface_code:x_memory");
}

#[test]
fn selector_errors_carry_stable_codes() {
    let distance = CodeParams {
        distance: Some(3),
        ..CodeParams::default()
    };
    let cases = [
        ("toric_code", distance.clone(), "unknown-code-family"),
        ("surface_code:y_memory", distance.clone(), "unknown-subfamily"),
        ("repetition_code:z_memory", distance.clone(), "unknown-subfamily"),
        ("surface_code", distance.clone(), "unexpected-parameter"),
        ("repetition_code", CodeParams::default(), "missing-parameter"),
        ("hypergraph_product_code", CodeParams::default(), "missing-parameter"),
    ];
    for (selector, params, code) in cases {
        let err = CodeFamily::from_selector(selector, params).unwrap_err();
        assert_eq!(err.code(), code, "selector {selector}");
    }
}

#[test]
fn families_deserialize_from_tagged_json() {
    let family: CodeFamily =
        serde_json::from_str(r#"{"family":"surface_code","scale":[5,5]}"#).unwrap();
    assert_eq!(
        family,
        CodeFamily::SurfaceCode {
            scale: (5, 5),
            memory: MemoryBasis::ZMemory
        }
    );

    let family: CodeFamily = serde_json::from_str(
        r#"{"family":"hypergraph_product_code","clist1":["B","C",0,1,"B"],"clist2":["B","C",0,1,"B"]}"#,
    )
    .unwrap();
    match family {
        CodeFamily::HypergraphProductCode { clist1, pos, .. } => {
            assert_eq!(clist1.num_bits(), 2);
            assert!(pos.is_none());
        }
        other => panic!("unexpected family {other}"),
    }

    let json = serde_json::to_string(&CodeFamily::RepetitionCode { distance: 4 }).unwrap();
    assert_eq!(json, r#"{"family":"repetition_code","distance":4}"#);
}
