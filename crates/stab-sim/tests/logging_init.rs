use stab_sim::logging;

// One test owns the process-wide subscriber, so the order below is fixed.
#[test]
fn explicit_directives_conflict_with_an_installed_subscriber() {
    logging::init(Some("stab_sim=debug")).expect("first install succeeds");
    logging::init(None).expect("defaults keep the installed subscriber");
    assert!(logging::init(Some("info")).is_err());
}
