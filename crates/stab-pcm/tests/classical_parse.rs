use stab_pcm::{classical_pcm, ClassicalCode, CodeToken, Marker};

#[test]
fn text_form_builds_expected_rows() {
    let code: ClassicalCode = "B C 0 1 B C 1 2 B".parse().unwrap();
    assert_eq!(code.num_bits(), 3);
    assert_eq!(code.num_checks(), 2);
    let h = classical_pcm(&code).unwrap();
    assert_eq!(h.to_rows(), vec![vec![1, 1, 0], vec![0, 1, 1]]);
}

#[test]
fn one_row_per_check_and_binary_entries() {
    let code: ClassicalCode = "B B B B C 0 1 2 C 3 C 0 0".parse().unwrap();
    let h = classical_pcm(&code).unwrap();
    assert_eq!(h.shape(), (3, 4));
    for row in h.to_rows() {
        assert!(row.iter().all(|&bit| bit <= 1));
        assert!(row.iter().any(|&bit| bit == 1));
    }
    // repeated index sets the bit once
    assert_eq!(h.row_support(2), vec![0]);
}

#[test]
fn yaml_style_token_lists_deserialize() {
    let code: ClassicalCode = serde_json::from_str(r#"["B", "C", 0, 1, "B"]"#).unwrap();
    assert_eq!(
        code.tokens(),
        &[
            CodeToken::Marker(Marker::Bit),
            CodeToken::Marker(Marker::Check),
            CodeToken::Index(0),
            CodeToken::Index(1),
            CodeToken::Marker(Marker::Bit),
        ]
    );
    assert_eq!(code.to_string(), "B C 0 1 B");
}

#[test]
fn out_of_range_index_is_rejected() {
    let code: ClassicalCode = "B C 0 2 B".parse().unwrap();
    let err = classical_pcm(&code).unwrap_err();
    assert_eq!(err.code(), "bit-index-out-of-range");
    assert_eq!(err.info().context["index"], "2");
    assert_eq!(err.info().context["num_bits"], "2");
}

#[test]
fn malformed_descriptions_are_rejected() {
    let orphan: ClassicalCode = "B 0 C 0".parse().unwrap();
    assert_eq!(classical_pcm(&orphan).unwrap_err().code(), "index-without-check");

    let empty: ClassicalCode = "B C B".parse().unwrap();
    assert_eq!(classical_pcm(&empty).unwrap_err().code(), "empty-check");

    let err = "B Q".parse::<ClassicalCode>().unwrap_err();
    assert_eq!(err.code(), "unknown-code-token");
}

#[test]
fn repetition_helper_matches_text_form() {
    let generated = ClassicalCode::repetition(3).unwrap();
    let parsed: ClassicalCode = "B C 0 1 B C 1 2 B".parse().unwrap();
    assert_eq!(generated, parsed);
    assert!(ClassicalCode::repetition(1).is_err());
}
